use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A record held by a [`RecordList`], addressable by its id.
pub trait Record: Clone + 'static {
    type Id: PartialEq + fmt::Display;

    fn id(&self) -> &Self::Id;
}

/// Why [`RecordList::remove_if`] left a record in place
#[derive(Debug, PartialEq)]
pub enum RemoveRefused<T> {
    /// No record has that id
    Missing,
    /// The record exists but failed the check; a copy is returned
    Rejected(T),
}

/// Picks one searchable text field out of a record.
pub type FieldSelector<T> = fn(&T) -> &str;

/// Ordered in-memory list of records with case-insensitive search.
///
/// Every console screen (users, roles, sessions, databases, ...) keeps its
/// records in one of these. The list is parameterized by the fields a free-text
/// query is matched against; a record matches when any selected field contains
/// the query, ignoring case. Insertion order is preserved by every operation.
pub struct RecordList<T: Record> {
    records: RwLock<Vec<T>>,
    selectors: &'static [FieldSelector<T>],
}

impl<T: Record> RecordList<T> {
    pub fn new(selectors: &'static [FieldSelector<T>]) -> Self {
        Self::with_records(selectors, Vec::new())
    }

    pub fn with_records(selectors: &'static [FieldSelector<T>], records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
            selectors,
        }
    }

    // Every mutation is a single push or remove, a poisoned lock still guards a valid Vec
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true if any selected field contains `needle` (already lowercased)
    fn matches(&self, record: &T, needle: &str) -> bool {
        needle.is_empty()
            || self
                .selectors
                .iter()
                .any(|select| select(record).to_lowercase().contains(needle))
    }

    /// All records matching `query`, in list order. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<T> {
        self.filter_where(query, |_| true)
    }

    /// Like [`filter`](Self::filter), additionally requiring `predicate` to hold.
    pub fn filter_where<P>(&self, query: &str, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let needle = query.to_lowercase();
        self.read()
            .iter()
            .filter(|record| predicate(*record) && self.matches(*record, &needle))
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.read().clone()
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.read().iter().find(|record| record.id() == id).cloned()
    }

    /// Number of records satisfying `predicate`
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.read().iter().filter(|record| predicate(*record)).count()
    }

    /// Append a record as-is, keeping whatever id it carries
    pub fn push(&self, record: T) {
        self.write().push(record);
    }

    /// Remove the record with `id`. Other records keep their relative order.
    pub fn remove(&self, id: &T::Id) -> Option<T> {
        let mut records = self.write();
        let index = records.iter().position(|record| record.id() == id)?;
        Some(records.remove(index))
    }

    /// Remove the record with `id` only if `allowed` holds for it.
    ///
    /// Check and removal happen under one write lock, so two callers racing on
    /// the same id cannot both succeed.
    pub fn remove_if<P>(&self, id: &T::Id, allowed: P) -> Result<T, RemoveRefused<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        let mut records = self.write();
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(RemoveRefused::Missing)?;
        if !allowed(&records[index]) {
            return Err(RemoveRefused::Rejected(records[index].clone()));
        }
        Ok(records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<T: Record<Id = u64>> RecordList<T> {
    /// Allocate the next id and append the record built from it.
    ///
    /// The id is one more than the largest id in the list (1 for an empty
    /// list). Allocation and append happen under the same write lock, so
    /// concurrent inserts never share an id.
    pub fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let mut records = self.write();
        let record = build(next_id(&records));
        records.push(record.clone());
        record
    }
}

pub fn next_id<T: Record<Id = u64>>(records: &[T]) -> u64 {
    records.iter().map(|record| *record.id()).max().unwrap_or(0) + 1
}
