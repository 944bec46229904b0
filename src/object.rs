//! Trackable domain-object contract.
//!
//! The unit of work never looks inside a domain object. It needs exactly
//! two capabilities from every object it tracks: a stable identity to key
//! set membership, and the externally-maintained dirty predicate used for
//! change detection. Both are modeled here as an explicit trait rather
//! than a loosely-typed call.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::foundation::ObjectId;

/// Capability every trackable domain object must expose.
///
/// Mutating code is responsible for raising the dirty predicate; loaders
/// and commit routines are responsible for clearing it once in-memory and
/// persisted state agree (see [`DirtyFlag`]).
pub trait DomainObject: fmt::Debug {
    /// Stable surrogate identity, assigned at creation or load time.
    fn identity(&self) -> ObjectId;

    /// Whether in-memory state has diverged from the last persisted state.
    fn is_dirty(&self) -> bool;
}

/// Shared handle to a trackable domain object.
///
/// Collaborators and the session hold the same handle, so a dirty flag
/// raised by one side is observed by the other without re-registration.
pub type ObjectRef = Arc<dyn DomainObject>;

/// Dirty-predicate backing for domain objects.
///
/// Domain objects embed one and route every mutating method through
/// [`DirtyFlag::mark_dirty`]; the loader clears it at load time and the
/// commit routine clears it after a successful write, so a freshly
/// reconstituted or freshly persisted object always reports clean.
/// Interior mutability keeps the flag writable through a shared
/// [`ObjectRef`].
#[derive(Debug, Default)]
pub struct DirtyFlag(AtomicBool);

impl DirtyFlag {
    /// Creates a clean flag.
    pub fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Records a divergence from the persisted state.
    pub fn mark_dirty(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Records that in-memory and persisted state agree again.
    pub fn mark_clean(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Current value of the predicate.
    pub fn is_dirty(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
