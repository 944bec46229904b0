//! Tidemark - unit-of-work change tracking for object persistence.
//!
//! This crate is the identity-tracking core of a persistence layer: it
//! records which domain objects were newly created, scheduled for removal,
//! or reconstituted from a backing store during one logical unit of work,
//! and answers at commit time which objects must be inserted, deleted, or
//! updated. It performs no I/O and computes no SQL; repositories, loaders,
//! and commit routines drive it through the [`Session`] API.

pub mod foundation;
pub mod identity_set;
pub mod object;
pub mod session;

pub use foundation::{DomainError, ObjectId, Registration};
pub use identity_set::IdentitySet;
pub use object::{DirtyFlag, DomainObject, ObjectRef};
pub use session::Session;
