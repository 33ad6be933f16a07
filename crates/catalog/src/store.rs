//! The in-memory record store.
//!
//! A `RecordStore` is nothing more than an ordered `Vec` owned by a list.
//! It is never indexed and never mutated by filtering; the only way to change
//! it is to replace the whole sequence.

/// Ordered, in-memory sequence of records.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> RecordStore<T> {
    /// Create a store holding `records` in the given order
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Borrow all records in insertion order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Replace the whole sequence, returning the previous one
    pub fn replace(&mut self, records: Vec<T>) -> Vec<T> {
        std::mem::replace(&mut self.records, records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_keeps_order() {
        let store = RecordStore::new(vec!["b", "a", "c"]);
        assert_eq!(store.records(), &["b", "a", "c"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_replace_swaps_whole_sequence() {
        let mut store = RecordStore::new(vec![1, 2, 3]);
        let previous = store.replace(vec![9]);

        assert_eq!(previous, vec![1, 2, 3]);
        assert_eq!(store.records(), &[9]);
    }

    #[test]
    fn test_default_is_empty() {
        let store: RecordStore<u8> = RecordStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
