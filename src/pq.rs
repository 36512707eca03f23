//! Indexed binary heaps.
//!
//! An [`IndexPq`] associates a key with each integer index in `0..capacity`
//! and keeps the indices in heap order by key.  Unlike
//! [`std::collections::BinaryHeap`], the key of an element already on the
//! queue can be changed in place, which is what Dijkstra's algorithm and the
//! eager version of Prim's algorithm need.
//!
//! The heap is stored as three parallel arrays: `heap[1..=len]` holds the
//! index at each heap slot, `position[i]` holds the slot of index `i` (or
//! `None` if `i` is not on the queue), and `keys[i]` holds its priority.  The
//! invariant `position[heap[slot]] == Some(slot)` holds for every occupied
//! slot after each public operation returns.
//!
//! The direction of the heap is chosen with a [`HeapOrder`] marker;
//! [`IndexMinPq`] and [`IndexMaxPq`] are the two usual instantiations.

use std::{cmp::Ordering, fmt::Debug, marker::PhantomData};

use derivative::Derivative;
use thiserror::Error;

/// Failures raised by [`IndexPq`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PqError {
    #[error("index {index} is out of range for a priority queue of capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("index {0} is already in the priority queue")]
    AlreadyPresent(usize),

    #[error("index {0} is not in the priority queue")]
    NotPresent(usize),

    #[error("new key for index {0} would not strictly decrease the key")]
    KeyNotDecreased(usize),

    #[error("new key for index {0} would not strictly increase the key")]
    KeyNotIncreased(usize),

    #[error("priority queue underflow")]
    Underflow,
}

/// Chooses which end of the key order sits at the top of the heap.
pub trait HeapOrder {
    /// Returns true if `a` must sit strictly above `b`.
    fn above<K: PartialOrd>(a: &K, b: &K) -> bool;
}

/// The smallest key is at the top.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinOrder;

/// The largest key is at the top.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxOrder;

impl HeapOrder for MinOrder {
    fn above<K: PartialOrd>(a: &K, b: &K) -> bool {
        a < b
    }
}

impl HeapOrder for MaxOrder {
    fn above<K: PartialOrd>(a: &K, b: &K) -> bool {
        a > b
    }
}

pub type IndexMinPq<K> = IndexPq<K, MinOrder>;
pub type IndexMaxPq<K> = IndexPq<K, MaxOrder>;

/// An indexed priority queue over the indices `0..capacity`.
///
/// Keys only need [`PartialOrd`]; callers must not insert keys that are
/// unordered with respect to each other (such as NaN).
#[derive(Derivative)]
#[derivative(Clone(bound = "K: Clone"), Debug(bound = "K: Debug"))]
pub struct IndexPq<K, O: HeapOrder> {
    len: usize,
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
    #[derivative(Debug = "ignore")]
    order: PhantomData<O>,
}

impl<K, O> IndexPq<K, O>
where
    K: PartialOrd,
    O: HeapOrder,
{
    /// Creates an empty queue accepting indices in `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            heap: vec![0; capacity + 1],
            position: vec![None; capacity],
            keys: std::iter::repeat_with(|| None).take(capacity).collect(),
            order: PhantomData,
        }
    }

    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if index `i` is on the queue.
    pub fn contains(&self, i: usize) -> Result<bool, PqError> {
        self.validate_index(i)?;
        Ok(self.position[i].is_some())
    }

    /// Associates `key` with index `i`.  Fails if `i` is already present.
    pub fn insert(&mut self, i: usize, key: K) -> Result<(), PqError> {
        if self.contains(i)? {
            return Err(PqError::AlreadyPresent(i));
        }
        self.len += 1;
        self.heap[self.len] = i;
        self.position[i] = Some(self.len);
        self.keys[i] = Some(key);
        self.swim(self.len);
        Ok(())
    }

    /// Returns the index at the top of the heap.
    pub fn peek_index(&self) -> Result<usize, PqError> {
        if self.is_empty() {
            return Err(PqError::Underflow);
        }
        Ok(self.heap[1])
    }

    /// Returns the key at the top of the heap.
    pub fn peek_key(&self) -> Result<&K, PqError> {
        let top = self.peek_index()?;
        Ok(self.key_at(top))
    }

    /// Removes the index at the top of the heap and returns it.
    pub fn pop(&mut self) -> Result<usize, PqError> {
        if self.is_empty() {
            return Err(PqError::Underflow);
        }
        let top = self.heap[1];
        self.exchange(1, self.len);
        self.len -= 1;
        self.sink(1);
        self.position[top] = None;
        self.keys[top] = None;
        Ok(top)
    }

    /// Returns the key associated with index `i`.
    pub fn key_of(&self, i: usize) -> Result<&K, PqError> {
        self.require_present(i)?;
        Ok(self.key_at(i))
    }

    /// Replaces the key of index `i`, moving it up or down as needed.
    pub fn change_key(&mut self, i: usize, key: K) -> Result<(), PqError> {
        let slot = self.require_present(i)?;
        self.keys[i] = Some(key);
        self.restore(slot);
        Ok(())
    }

    /// Replaces the key of index `i` with a strictly smaller one.
    pub fn decrease_key(&mut self, i: usize, key: K) -> Result<(), PqError> {
        let slot = self.require_present(i)?;
        if key.partial_cmp(self.key_at(i)) != Some(Ordering::Less) {
            return Err(PqError::KeyNotDecreased(i));
        }
        self.keys[i] = Some(key);
        self.restore(slot);
        Ok(())
    }

    /// Replaces the key of index `i` with a strictly larger one.
    pub fn increase_key(&mut self, i: usize, key: K) -> Result<(), PqError> {
        let slot = self.require_present(i)?;
        if key.partial_cmp(self.key_at(i)) != Some(Ordering::Greater) {
            return Err(PqError::KeyNotIncreased(i));
        }
        self.keys[i] = Some(key);
        self.restore(slot);
        Ok(())
    }

    /// Removes index `i` and its key from the queue.
    pub fn delete(&mut self, i: usize) -> Result<(), PqError> {
        let slot = self.require_present(i)?;
        self.exchange(slot, self.len);
        self.len -= 1;
        if slot <= self.len {
            self.restore(slot);
        }
        self.position[i] = None;
        self.keys[i] = None;
        Ok(())
    }

    /// Iterates over the indices in heap order without disturbing this
    /// queue.  The iterator drains a private copy.
    pub fn iter(&self) -> SnapshotIter<K, O>
    where
        K: Clone,
    {
        SnapshotIter { copy: self.clone() }
    }

    fn validate_index(&self, i: usize) -> Result<(), PqError> {
        if i < self.capacity() {
            Ok(())
        } else {
            Err(PqError::IndexOutOfRange {
                index: i,
                capacity: self.capacity(),
            })
        }
    }

    fn require_present(&self, i: usize) -> Result<usize, PqError> {
        self.validate_index(i)?;
        self.position[i].ok_or(PqError::NotPresent(i))
    }

    fn key_at(&self, i: usize) -> &K {
        match &self.keys[i] {
            Some(key) => key,
            None => unreachable!("index {i} is on the heap without a key"),
        }
    }

    /// Returns true if the element in slot `a` belongs strictly above the
    /// element in slot `b`.
    fn slot_above(&self, a: usize, b: usize) -> bool {
        O::above(self.key_at(self.heap[a]), self.key_at(self.heap[b]))
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn restore(&mut self, slot: usize) {
        let slot = self.swim(slot);
        self.sink(slot);
    }

    /// Moves the element at `slot` up until its parent is not below it, and
    /// returns its final slot.
    fn swim(&mut self, mut slot: usize) -> usize {
        while slot > 1 && self.slot_above(slot, slot / 2) {
            self.exchange(slot, slot / 2);
            slot /= 2;
        }
        slot
    }

    fn sink(&mut self, mut slot: usize) {
        while 2 * slot <= self.len {
            let mut child = 2 * slot;
            if child < self.len && self.slot_above(child + 1, child) {
                child += 1;
            }
            if !self.slot_above(child, slot) {
                break;
            }
            self.exchange(slot, child);
            slot = child;
        }
    }
}

impl<K: PartialOrd> IndexPq<K, MinOrder> {
    /// Returns an index associated with the minimum key.
    pub fn min_index(&self) -> Result<usize, PqError> {
        self.peek_index()
    }

    pub fn min_key(&self) -> Result<&K, PqError> {
        self.peek_key()
    }

    /// Removes a minimum key and returns its index.
    pub fn del_min(&mut self) -> Result<usize, PqError> {
        self.pop()
    }
}

impl<K: PartialOrd> IndexPq<K, MaxOrder> {
    /// Returns an index associated with the maximum key.
    pub fn max_index(&self) -> Result<usize, PqError> {
        self.peek_index()
    }

    pub fn max_key(&self) -> Result<&K, PqError> {
        self.peek_key()
    }

    /// Removes a maximum key and returns its index.
    pub fn del_max(&mut self) -> Result<usize, PqError> {
        self.pop()
    }
}

/// Iterator returned by [`IndexPq::iter`].
pub struct SnapshotIter<K, O: HeapOrder> {
    copy: IndexPq<K, O>,
}

impl<K: PartialOrd, O: HeapOrder> Iterator for SnapshotIter<K, O> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.copy.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.copy.len(), Some(self.copy.len()))
    }
}

impl<'a, K, O> IntoIterator for &'a IndexPq<K, O>
where
    K: PartialOrd + Clone,
    O: HeapOrder,
{
    type Item = usize;
    type IntoIter = SnapshotIter<K, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    const STRINGS: [&str; 10] = [
        "it", "was", "the", "best", "of", "times", "it", "was", "the", "worst",
    ];

    impl<K: PartialOrd, O: HeapOrder> IndexPq<K, O> {
        fn check_invariants(&self) {
            for slot in 1..=self.len {
                assert_eq!(self.position[self.heap[slot]], Some(slot));
                if slot > 1 {
                    assert!(!self.slot_above(slot, slot / 2));
                }
            }
            let present = self.position.iter().filter(|p| p.is_some()).count();
            assert_eq!(present, self.len);
        }
    }

    fn filled_min_pq() -> IndexMinPq<&'static str> {
        let mut pq = IndexMinPq::with_capacity(STRINGS.len());
        for (i, s) in STRINGS.iter().enumerate() {
            pq.insert(i, *s).unwrap();
        }
        pq
    }

    #[test]
    fn test_del_min_yields_sorted_keys() {
        let mut pq = filled_min_pq();
        let mut keys = Vec::new();
        while !pq.is_empty() {
            let i = pq.del_min().unwrap();
            keys.push(STRINGS[i]);
            pq.check_invariants();
        }
        let mut expected = STRINGS.to_vec();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_del_max_yields_reverse_sorted_keys() {
        let mut pq = IndexMaxPq::with_capacity(STRINGS.len());
        for (i, s) in STRINGS.iter().enumerate() {
            pq.insert(i, *s).unwrap();
        }
        assert_eq!(*pq.max_key().unwrap(), "worst");
        let mut keys = Vec::new();
        while let Ok(i) = pq.del_max() {
            keys.push(STRINGS[i]);
        }
        let mut expected = STRINGS.to_vec();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_snapshot_iterator_leaves_queue_intact() {
        let pq = filled_min_pq();
        let first: Vec<_> = pq.iter().collect();
        let second: Vec<_> = (&pq).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), STRINGS.len());
        assert_eq!(pq.len(), STRINGS.len());
        assert_eq!(STRINGS[first[0]], "best");
    }

    #[test]
    fn test_insert_duplicate_index_fails() {
        let mut pq = IndexMinPq::with_capacity(3);
        pq.insert(1, 5.0).unwrap();
        assert_eq!(pq.insert(1, 2.0), Err(PqError::AlreadyPresent(1)));
    }

    #[test]
    fn test_index_out_of_range() {
        let mut pq = IndexMinPq::with_capacity(3);
        assert_eq!(
            pq.insert(3, 1.0),
            Err(PqError::IndexOutOfRange {
                index: 3,
                capacity: 3
            })
        );
        assert!(pq.contains(7).is_err());
    }

    #[test]
    fn test_underflow() {
        let mut pq = IndexMinPq::<f64>::with_capacity(2);
        assert_eq!(pq.del_min(), Err(PqError::Underflow));
        assert_eq!(pq.min_index(), Err(PqError::Underflow));
        assert_eq!(pq.min_key(), Err(PqError::Underflow));
    }

    #[test]
    fn test_decrease_key_moves_to_top() {
        let mut pq = IndexMinPq::with_capacity(4);
        pq.insert(0, 3.0).unwrap();
        pq.insert(1, 2.0).unwrap();
        pq.insert(2, 5.0).unwrap();
        pq.decrease_key(2, 1.0).unwrap();
        pq.check_invariants();
        assert_eq!(pq.min_index(), Ok(2));
        assert_eq!(pq.key_of(2), Ok(&1.0));
    }

    #[test]
    fn test_decrease_key_must_strictly_decrease() {
        let mut pq = IndexMinPq::with_capacity(2);
        pq.insert(0, 3.0).unwrap();
        assert_eq!(pq.decrease_key(0, 3.0), Err(PqError::KeyNotDecreased(0)));
        assert_eq!(pq.decrease_key(0, 4.0), Err(PqError::KeyNotDecreased(0)));
        assert_eq!(pq.decrease_key(1, 1.0), Err(PqError::NotPresent(1)));
    }

    #[test]
    fn test_increase_key_sinks() {
        let mut pq = IndexMinPq::with_capacity(3);
        pq.insert(0, 1.0).unwrap();
        pq.insert(1, 2.0).unwrap();
        pq.insert(2, 3.0).unwrap();
        pq.increase_key(0, 10.0).unwrap();
        pq.check_invariants();
        assert_eq!(pq.min_index(), Ok(1));
        assert_eq!(pq.increase_key(0, 10.0), Err(PqError::KeyNotIncreased(0)));
    }

    #[test]
    fn test_max_queue_key_changes() {
        let mut pq = IndexMaxPq::with_capacity(3);
        pq.insert(0, 1).unwrap();
        pq.insert(1, 2).unwrap();
        pq.insert(2, 3).unwrap();
        pq.increase_key(0, 9).unwrap();
        assert_eq!(pq.max_index(), Ok(0));
        pq.decrease_key(0, 0).unwrap();
        pq.check_invariants();
        assert_eq!(pq.max_index(), Ok(2));
    }

    #[test]
    fn test_delete_arbitrary_index() {
        let mut pq = filled_min_pq();
        pq.delete(3).unwrap(); // "best"
        pq.check_invariants();
        assert_eq!(pq.contains(3), Ok(false));
        assert_eq!(STRINGS[pq.min_index().unwrap()], "it");
        assert_eq!(pq.delete(3), Err(PqError::NotPresent(3)));
    }

    #[test]
    fn test_delete_last_slot() {
        let mut pq = IndexMinPq::with_capacity(2);
        pq.insert(0, 1.0).unwrap();
        pq.insert(1, 2.0).unwrap();
        pq.delete(1).unwrap();
        pq.check_invariants();
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.min_index(), Ok(0));
    }

    #[test]
    fn test_change_key_either_direction() {
        let mut pq = filled_min_pq();
        pq.change_key(9, "a").unwrap();
        assert_eq!(pq.min_index(), Ok(9));
        pq.change_key(9, "zzz").unwrap();
        pq.check_invariants();
        assert_eq!(STRINGS[pq.min_index().unwrap()], "best");
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(u8, i16),
        Change(u8, i16),
        Delete(u8),
        Pop,
    }

    impl quickcheck::Arbitrary for Op {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            match u8::arbitrary(g) % 4 {
                0 => Op::Insert(u8::arbitrary(g) % 16, i16::arbitrary(g)),
                1 => Op::Change(u8::arbitrary(g) % 16, i16::arbitrary(g)),
                2 => Op::Delete(u8::arbitrary(g) % 16),
                _ => Op::Pop,
            }
        }
    }

    #[quickcheck]
    fn prop_heap_matches_model(ops: Vec<Op>) -> bool {
        let mut pq = IndexMinPq::with_capacity(16);
        let mut model: Vec<Option<i16>> = vec![None; 16];
        for op in ops {
            match op {
                Op::Insert(i, k) => {
                    let result = pq.insert(i as usize, k);
                    if model[i as usize].is_some() {
                        assert_eq!(result, Err(PqError::AlreadyPresent(i as usize)));
                    } else {
                        model[i as usize] = Some(k);
                    }
                }
                Op::Change(i, k) => {
                    if pq.change_key(i as usize, k).is_ok() {
                        model[i as usize] = Some(k);
                    }
                }
                Op::Delete(i) => {
                    if pq.delete(i as usize).is_ok() {
                        model[i as usize] = None;
                    }
                }
                Op::Pop => {
                    if let Ok(i) = pq.del_min() {
                        let min = model.iter().flatten().min().copied();
                        if model[i] != min {
                            return false;
                        }
                        model[i] = None;
                    }
                }
            }
            pq.check_invariants();
        }
        model.iter().flatten().count() == pq.len()
    }
}
