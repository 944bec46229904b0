//! The unit of work: identity tracking for one logical persistence scope.

use tracing::{debug, trace};

use crate::foundation::{DomainError, Registration};
use crate::identity_set::IdentitySet;
use crate::object::{DomainObject, ObjectRef};

/// A unit of work over domain objects.
///
/// The session records which objects were newly created, scheduled for
/// removal, or reconstituted from the backing store during one logical
/// unit of work, and answers at commit time which objects must be
/// inserted, deleted, or updated.
///
/// One session is constructed per unit of work (typically per request),
/// owned by that scope, and threaded through its collaborators; there is
/// no process-wide instance. The session is not internally synchronized:
/// every method is a synchronous in-memory mutation or query, and
/// concurrent units of work must each use their own instance.
///
/// Collaborator flow: a repository registers added and removed objects and
/// the aggregate-root class names that are cascade entry points; the
/// loader/mapper registers reconstituted objects after materializing them;
/// the commit routine reads [`added_objects`](Session::added_objects),
/// [`removed_objects`](Session::removed_objects),
/// [`dirty_objects`](Session::dirty_objects) and
/// [`aggregate_root_class_names`](Session::aggregate_root_class_names) to
/// plan writes, then resets tracking with [`clear`](Session::clear) or
/// targeted [`unregister_object`](Session::unregister_object) calls.
#[derive(Debug, Default)]
pub struct Session {
    /// Objects pending first-time persistence.
    added: IdentitySet,
    /// Objects pending deletion from the backing store.
    removed: IdentitySet,
    /// Objects known to already exist in the backing store.
    reconstituted: IdentitySet,
    /// Cascade entry-point type names, in registration order. Duplicates
    /// are preserved.
    aggregate_root_class_names: Vec<String>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Added objects
    // ─────────────────────────────────────────────────────────────────────

    /// Registers an object as pending first-time persistence.
    ///
    /// Any pending removal for the same object is dropped.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if the object is registered as
    /// reconstituted; the session is left unchanged.
    pub fn register_added_object(&mut self, object: ObjectRef) -> Result<(), DomainError> {
        let id = object.identity();
        if self.reconstituted.contains_id(&id) {
            return Err(DomainError::InvalidStateTransition {
                object: id,
                current: Registration::Reconstituted,
                requested: Registration::Added,
            });
        }
        self.removed.detach_id(&id);
        self.added.attach(object);
        trace!(object = %id, "registered added object");
        Ok(())
    }

    /// Unregisters an object as added.
    pub fn unregister_added_object(&mut self, object: &dyn DomainObject) {
        self.added.detach(object);
    }

    /// Returns the objects registered as added, in registration order.
    pub fn added_objects(&self) -> &IdentitySet {
        &self.added
    }

    /// Returns whether the object is registered as added.
    pub fn is_added_object(&self, object: &dyn DomainObject) -> bool {
        self.added.contains(object)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Removed objects
    // ─────────────────────────────────────────────────────────────────────

    /// Registers an object as pending deletion.
    ///
    /// An object still pending first-time persistence is un-tracked
    /// instead: it never reached the backing store, so there is nothing to
    /// delete.
    ///
    /// A reconstituted object stays registered as reconstituted while also
    /// registered as removed. Commit routines must consult the removed set
    /// before treating a dirty reconstituted object as an update.
    pub fn register_removed_object(&mut self, object: ObjectRef) {
        let id = object.identity();
        if self.added.contains_id(&id) {
            self.added.detach_id(&id);
            trace!(object = %id, "dropped never-persisted object");
        } else {
            self.removed.attach(object);
            trace!(object = %id, "registered removed object");
        }
    }

    /// Unregisters an object as removed.
    pub fn unregister_removed_object(&mut self, object: &dyn DomainObject) {
        self.removed.detach(object);
    }

    /// Returns the objects registered as removed, in registration order.
    pub fn removed_objects(&self) -> &IdentitySet {
        &self.removed
    }

    /// Returns whether the object is registered as removed.
    pub fn is_removed_object(&self, object: &dyn DomainObject) -> bool {
        self.removed.contains(object)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reconstituted objects
    // ─────────────────────────────────────────────────────────────────────

    /// Registers every given object as reconstituted, in order.
    ///
    /// Stops at the first failure; objects before the failing one stay
    /// registered.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if one of the objects is registered as
    /// added.
    pub fn register_reconstituted_objects<I>(&mut self, objects: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = ObjectRef>,
    {
        for object in objects {
            self.register_reconstituted_object(object)?;
        }
        Ok(())
    }

    /// Registers an object as reconstituted from the backing store.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if the object is registered as added; the
    /// session is left unchanged.
    pub fn register_reconstituted_object(&mut self, object: ObjectRef) -> Result<(), DomainError> {
        let id = object.identity();
        if self.added.contains_id(&id) {
            return Err(DomainError::InvalidStateTransition {
                object: id,
                current: Registration::Added,
                requested: Registration::Reconstituted,
            });
        }
        self.reconstituted.attach(object);
        trace!(object = %id, "registered reconstituted object");
        Ok(())
    }

    /// Unregisters an object as reconstituted.
    pub fn unregister_reconstituted_object(&mut self, object: &dyn DomainObject) {
        self.reconstituted.detach(object);
    }

    /// Returns the objects registered as reconstituted, in registration
    /// order.
    pub fn reconstituted_objects(&self) -> &IdentitySet {
        &self.reconstituted
    }

    /// Returns whether the object is registered as reconstituted.
    pub fn is_reconstituted_object(&self, object: &dyn DomainObject) -> bool {
        self.reconstituted.contains(object)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dirty detection
    // ─────────────────────────────────────────────────────────────────────

    /// Returns a fresh set of the reconstituted objects whose dirty
    /// predicate currently evaluates true.
    ///
    /// Only reconstituted objects are considered: an added object is
    /// persisted wholesale regardless of its flag. The returned set is a
    /// snapshot, not a live view.
    pub fn dirty_objects(&self) -> IdentitySet {
        self.reconstituted
            .iter()
            .filter(|object| object.is_dirty())
            .cloned()
            .collect()
    }

    /// Returns the object's own dirty predicate.
    ///
    /// No membership check is performed; callers restrict the argument to
    /// tracked objects where that matters.
    pub fn is_dirty_object(&self, object: &dyn DomainObject) -> bool {
        object.is_dirty()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session reset
    // ─────────────────────────────────────────────────────────────────────

    /// Unregisters an object from every state, regardless of its current
    /// registrations.
    pub fn unregister_object(&mut self, object: &dyn DomainObject) {
        self.added.detach(object);
        self.removed.detach(object);
        self.reconstituted.detach(object);
    }

    /// Resets all tracked objects and aggregate-root registrations.
    pub fn clear(&mut self) {
        debug!(
            added = self.added.len(),
            removed = self.removed.len(),
            reconstituted = self.reconstituted.len(),
            "clearing session"
        );
        self.added.clear();
        self.removed.clear();
        self.reconstituted.clear();
        self.aggregate_root_class_names.clear();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Aggregate roots
    // ─────────────────────────────────────────────────────────────────────

    /// Registers an aggregate-root class name as a cascade entry point.
    ///
    /// Names are kept in registration order; registering the same name
    /// twice keeps both entries.
    pub fn register_aggregate_root_class_name(&mut self, class_name: impl Into<String>) {
        self.aggregate_root_class_names.push(class_name.into());
    }

    /// Returns the registered aggregate-root class names, in registration
    /// order.
    pub fn aggregate_root_class_names(&self) -> &[String] {
        &self.aggregate_root_class_names
    }
}
