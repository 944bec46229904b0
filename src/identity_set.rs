//! Identity-keyed, insertion-ordered object container.

use std::collections::HashMap;

use crate::foundation::ObjectId;
use crate::object::{DomainObject, ObjectRef};

/// An insertion-ordered set of domain objects keyed by identity.
///
/// Membership follows [`DomainObject::identity`], never value equality.
/// Attaching a handle whose identity is already present is a no-op that
/// keeps the originally stored handle and its position; detaching an
/// absent member does nothing. Iteration yields members in attach order,
/// stable across attach/detach cycles that do not touch the iterated
/// member. All operations are total.
#[derive(Debug, Default, Clone)]
pub struct IdentitySet {
    /// Members in attach order.
    entries: Vec<ObjectRef>,
    /// Identity to position in `entries`.
    index: HashMap<ObjectId, usize>,
}

impl IdentitySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the object unless its identity is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn attach(&mut self, object: ObjectRef) -> bool {
        let id = object.identity();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(object);
        true
    }

    /// Removes the member with the object's identity, if present.
    ///
    /// Returns `true` if the set changed.
    pub fn detach(&mut self, object: &dyn DomainObject) -> bool {
        self.detach_id(&object.identity())
    }

    /// Removes the member with the given identity, if present.
    ///
    /// Returns `true` if the set changed.
    pub fn detach_id(&mut self, id: &ObjectId) -> bool {
        let Some(position) = self.index.remove(id) else {
            return false;
        };
        self.entries.remove(position);
        // Members behind the removed one shifted down by one.
        for later in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut(&later.identity()) {
                *slot -= 1;
            }
        }
        true
    }

    /// Returns whether a member with the object's identity is present.
    pub fn contains(&self, object: &dyn DomainObject) -> bool {
        self.contains_id(&object.identity())
    }

    /// Returns whether a member with the given identity is present.
    pub fn contains_id(&self, id: &ObjectId) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Iterates members in attach order.
    pub fn iter(&self) -> std::slice::Iter<'_, ObjectRef> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a IdentitySet {
    type Item = &'a ObjectRef;
    type IntoIter = std::slice::Iter<'a, ObjectRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for IdentitySet {
    type Item = ObjectRef;
    type IntoIter = std::vec::IntoIter<ObjectRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Extend<ObjectRef> for IdentitySet {
    fn extend<T: IntoIterator<Item = ObjectRef>>(&mut self, iter: T) {
        for object in iter {
            self.attach(object);
        }
    }
}

impl FromIterator<ObjectRef> for IdentitySet {
    fn from_iter<T: IntoIterator<Item = ObjectRef>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
