//! Error types for the unit-of-work core.

use thiserror::Error;

use super::{ObjectId, Registration};

/// Errors raised by unit-of-work registration operations.
///
/// Registration is the only fallible surface of this crate. The core
/// performs no I/O, so every error is immediate and deterministic, and a
/// failed call leaves the session unchanged. Callers should treat these as
/// programming errors in collaborator code, not as retryable conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The object already holds a registration that excludes the requested
    /// one: an object cannot be both added and reconstituted.
    #[error("object {object} is registered as {current} and cannot be registered as {requested}")]
    InvalidStateTransition {
        /// Identity of the object whose registration was rejected.
        object: ObjectId,
        /// Registration the object already holds.
        current: Registration,
        /// Registration that was requested.
        requested: Registration,
    },
}
