// The in-memory record container.
//
// Records live in an arena of slots chained through prev/next slot
// indices, with head/tail indices for the traversal order and a free
// list for slot reuse. No pointers, no unsafe.

use crate::error::{PtableError, Result};
use crate::store::models::{Element, ElementInput};

/// One arena slot: a live record with its neighbor links, or a vacant
/// slot threaded onto the free list.
#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug)]
struct Node {
    element: Element,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Insertion-ordered collection of elements, keyed by atomic number.
///
/// Keys are not checked for uniqueness; if duplicates are inserted,
/// key-based operations act on the first match in insertion order.
///
/// # Examples
/// ```
/// use ptable_lib::store::{ElementInput, PeriodicTable};
///
/// # fn example() -> ptable_lib::Result<()> {
/// let mut table = PeriodicTable::new();
/// table.insert(ElementInput {
///     atomic_number: 2,
///     symbol: "He".to_string(),
///     name: "Helium".to_string(),
///     atomic_mass: 4.0026,
/// })?;
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.search(2).unwrap().name, "Helium");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PeriodicTable {
    slots: Vec<Slot>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    count: usize,
}

impl PeriodicTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Append a new element at the tail of the traversal order.
    ///
    /// Builds the record (truncating over-long text fields) and links it
    /// in O(1) via the tail index. Duplicate atomic numbers are accepted.
    /// Fails only when the arena cannot grow; the table is left unchanged
    /// in that case.
    pub fn insert(&mut self, input: ElementInput) -> Result<()> {
        let node = Node {
            element: Element::from(input),
            prev: self.tail,
            next: None,
        };

        let idx = match self.free {
            Some(idx) => {
                self.free = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at a live slot"),
                };
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots
                    .try_reserve(1)
                    .map_err(|_| PtableError::AllocationFailed)?;
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.count += 1;

        Ok(())
    }

    /// Remove the first element with the given atomic number.
    ///
    /// Scans from the head, unlinks the match, and returns its slot to
    /// the free list. `NotFound` leaves the table unchanged.
    pub fn delete(&mut self, atomic_number: u32) -> Result<()> {
        let idx = self
            .find(atomic_number)
            .ok_or(PtableError::NotFound(atomic_number))?;

        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }

        self.slots[idx] = Slot::Vacant {
            next_free: self.free,
        };
        self.free = Some(idx);
        self.count -= 1;

        Ok(())
    }

    /// Read-only view of the first element with the given atomic number.
    pub fn search(&self, atomic_number: u32) -> Option<&Element> {
        self.find(atomic_number).map(|idx| &self.node(idx).element)
    }

    /// Iterate elements in insertion order.
    ///
    /// Each call starts a fresh walk from the current head. The iterator
    /// is double-ended; walking from the back follows the prev links.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            front: self.head,
            back: self.tail,
            remaining: self.count,
        }
    }

    /// Drop every record and reset to the empty state. Idempotent.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.count = 0;
    }

    fn find(&self, atomic_number: u32) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            if node.element.atomic_number == atomic_number {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }

    fn node(&self, idx: usize) -> &Node {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }
}

/// Borrowing iterator over a table's elements in insertion order
pub struct Iter<'a> {
    table: &'a PeriodicTable,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let node = self.table.node(idx);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let node = self.table.node(idx);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PeriodicTable {
    type Item = &'a Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(atomic_number: u32, symbol: &str, name: &str, atomic_mass: f64) -> ElementInput {
        ElementInput {
            atomic_number,
            symbol: symbol.to_string(),
            name: name.to_string(),
            atomic_mass,
        }
    }

    // Hydrogen, Helium, Lithium - in that order
    fn sample_table() -> PeriodicTable {
        let mut table = PeriodicTable::new();
        table.insert(input(1, "H", "Hydrogen", 1.008)).unwrap();
        table.insert(input(2, "He", "Helium", 4.0026)).unwrap();
        table.insert(input(3, "Li", "Lithium", 6.94)).unwrap();
        table
    }

    fn keys(table: &PeriodicTable) -> Vec<u32> {
        table.iter().map(|e| e.atomic_number).collect()
    }

    fn keys_reversed(table: &PeriodicTable) -> Vec<u32> {
        table.iter().rev().map(|e| e.atomic_number).collect()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = PeriodicTable::new();

        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert!(table.iter().next().is_none());
        assert!(table.search(1).is_none());
    }

    #[test]
    fn test_insert_preserves_insertion_order() {
        let table = sample_table();

        assert_eq!(table.len(), 3);
        assert_eq!(keys(&table), vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_then_search_returns_inserted_values() {
        let mut table = PeriodicTable::new();
        table.insert(input(6, "C", "Carbon", 12.011)).unwrap();

        let element = table.search(6).unwrap();
        assert_eq!(element.atomic_number, 6);
        assert_eq!(element.symbol, "C");
        assert_eq!(element.name, "Carbon");
        assert_eq!(element.atomic_mass, 12.011);
    }

    #[test]
    fn test_insert_truncates_text_fields() {
        let mut table = PeriodicTable::new();
        table
            .insert(input(92, "Uranium", "A name much longer than nineteen", 238.03))
            .unwrap();

        let element = table.search(92).unwrap();
        assert_eq!(element.symbol, "Uran");
        assert_eq!(element.name, "A name much longer ");
    }

    #[test]
    fn test_search_missing_returns_none() {
        let table = sample_table();
        assert!(table.search(99).is_none());
    }

    #[test]
    fn test_delete_missing_leaves_table_unchanged() {
        let mut table = sample_table();

        let result = table.delete(42);
        assert!(matches!(result, Err(PtableError::NotFound(42))));
        assert_eq!(table.len(), 3);
        assert_eq!(keys(&table), vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_removes_exactly_one_record() {
        let mut table = sample_table();

        table.delete(2).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.search(2).is_none());
    }

    #[test]
    fn test_delete_head_keeps_rest_traversable() {
        let mut table = sample_table();
        table.delete(1).unwrap();

        assert_eq!(keys(&table), vec![2, 3]);
        assert_eq!(keys_reversed(&table), vec![3, 2]);
    }

    #[test]
    fn test_delete_middle_keeps_rest_traversable() {
        let mut table = sample_table();
        table.delete(2).unwrap();

        assert_eq!(keys(&table), vec![1, 3]);
        assert_eq!(keys_reversed(&table), vec![3, 1]);
    }

    #[test]
    fn test_delete_tail_keeps_rest_traversable() {
        let mut table = sample_table();
        table.delete(3).unwrap();

        assert_eq!(keys(&table), vec![1, 2]);
        assert_eq!(keys_reversed(&table), vec![2, 1]);
    }

    #[test]
    fn test_delete_only_record() {
        let mut table = PeriodicTable::new();
        table.insert(input(1, "H", "Hydrogen", 1.008)).unwrap();

        table.delete(1).unwrap();

        assert!(table.is_empty());
        assert!(table.iter().next().is_none());

        // The table stays usable afterwards
        table.insert(input(2, "He", "Helium", 4.0026)).unwrap();
        assert_eq!(keys(&table), vec![2]);
    }

    #[test]
    fn test_duplicate_keys_first_match_wins() {
        let mut table = PeriodicTable::new();
        table.insert(input(6, "C", "Carbon", 12.011)).unwrap();
        table.insert(input(6, "Cx", "Carbon-copy", 12.5)).unwrap();

        // Search sees the earlier record while both are present
        assert_eq!(table.search(6).unwrap().symbol, "C");

        // Delete removes the earlier one; the later becomes reachable
        table.delete(6).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.search(6).unwrap().symbol, "Cx");
    }

    #[test]
    fn test_clear_empties_table() {
        let mut table = sample_table();

        table.clear();

        assert_eq!(table.len(), 0);
        assert!(table.iter().next().is_none());

        // Idempotent
        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn test_clear_on_empty_table_is_noop() {
        let mut table = PeriodicTable::new();
        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut table = sample_table();
        table.delete(2).unwrap();
        table.insert(input(4, "Be", "Beryllium", 9.0122)).unwrap();

        // The vacant slot was recycled instead of growing the arena
        assert_eq!(table.slots.len(), 3);
        assert_eq!(keys(&table), vec![1, 3, 4]);
    }

    #[test]
    fn test_interleaved_inserts_and_deletes() {
        let mut table = PeriodicTable::new();
        for n in 1..=5 {
            table.insert(input(n, "X", "placeholder", n as f64)).unwrap();
        }
        table.delete(1).unwrap();
        table.delete(5).unwrap();
        table.delete(3).unwrap();
        table.insert(input(6, "C", "Carbon", 12.011)).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(keys(&table), vec![2, 4, 6]);
        assert_eq!(keys_reversed(&table), vec![6, 4, 2]);
    }

    #[test]
    fn test_iter_is_restartable() {
        let table = sample_table();

        let first: Vec<u32> = table.iter().map(|e| e.atomic_number).collect();
        let second: Vec<u32> = table.iter().map(|e| e.atomic_number).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_iter_size_hint_matches_count() {
        let table = sample_table();
        let iter = table.iter();

        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_iter_front_and_back_meet_in_the_middle() {
        let table = sample_table();
        let mut iter = table.iter();

        assert_eq!(iter.next().unwrap().atomic_number, 1);
        assert_eq!(iter.next_back().unwrap().atomic_number, 3);
        assert_eq!(iter.next().unwrap().atomic_number, 2);
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }
}
