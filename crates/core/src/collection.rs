//! Ordered child collections owned by a project aggregate.
//!
//! Every child kind (timeline events, actors, locations, team members,
//! sponsors) shares the same bookkeeping: ids are unique within the
//! collection, insertion order is display order, and a new record gets
//! `max(existing ids) + 1`. Ids are not a global sequence, so deleting the
//! highest record and adding another reuses its id. Once the highest id is
//! `RecordId::MAX` no further record can be added.

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// A record that lives inside a [`ChildCollection`].
///
/// `New` is the record without its id (what callers submit), `Patch` is the
/// all-optional form used for partial updates. A patch never carries an id,
/// so applying one cannot change the record's identity.
pub trait ChildRecord {
    type New;
    type Patch;

    fn id(&self) -> RecordId;

    fn from_new(id: RecordId, new: Self::New) -> Self;

    /// Merge `patch` into `self`, keeping every field the patch leaves unset.
    fn apply(&mut self, patch: Self::Patch);
}

/// Insertion-ordered list of child records with per-collection ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildCollection<T> {
    records: Vec<T>,
}

impl<T> Default for ChildCollection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> From<Vec<T>> for ChildCollection<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: ChildRecord> ChildCollection<T> {
    /// The id the next [`add`](Self::add) will assign, or `None` when the
    /// highest id is already `RecordId::MAX`.
    pub fn next_id(&self) -> Option<RecordId> {
        self.records
            .iter()
            .map(ChildRecord::id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// Append a new record at the end and return it.
    ///
    /// Returns `None` and leaves the collection untouched when no id is left.
    pub fn add(&mut self, new: T::New) -> Option<&T> {
        let id = self.next_id()?;
        self.records.push(T::from_new(id, new));
        self.records.last()
    }

    /// Merge `patch` into the record with `id`.
    ///
    /// Returns `None` and leaves the collection untouched when no record
    /// matches.
    pub fn update(&mut self, id: RecordId, patch: T::Patch) -> Option<&T> {
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        record.apply(patch);
        Some(&*record)
    }

    /// Remove the record with `id`. Returns `true` if something was removed.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }
}

impl<T> ChildCollection<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a ChildCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
