//! Array-backed d-ary max-heap
//!
//! A max-heap stored as a flat `Vec`, where the node at index `i` has up to
//! `d` children at indices `d*i + 1 ..= d*i + d`. The branching factor `d`
//! is chosen at construction time and is fixed for the life of the heap;
//! changing it would invalidate the heap property.
//!
//! Construction always produces a valid heap: [`DaryHeap::from_vec`]
//! heapifies its input in place before returning, so there is no reachable
//! "unbuilt" state.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity     |
//! |------------------|----------------|
//! | `from_vec`       | O(n)           |
//! | `insert`         | O(log_d n)     |
//! | `extract_max`    | O(d · log_d n) |
//! | `increase_key`   | O(log_d n)     |
//! | `delete_at`      | O(d · log_d n) |
//! | `peek`           | O(1)           |
//!
//! # Example
//!
//! ```rust
//! use dheap::DaryHeap;
//!
//! let mut heap = DaryHeap::from_vec(2, vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(heap.peek(), Some(&9));
//!
//! assert_eq!(heap.extract_max(), Ok(9));
//! assert_eq!(heap.peek(), Some(&6));
//!
//! heap.insert(10).unwrap();
//! assert_eq!(heap.peek(), Some(&10));
//! ```

use crate::error::HeapError;

/// Root index of the heap
const ROOT: usize = 0;

/// An array-backed d-ary max-heap
///
/// Stores keys of any totally ordered type in a flat `Vec` encoding a
/// complete d-ary tree. Always returns the largest key first.
///
/// The heap grows on demand. An optional capacity limit can be set with
/// [`DaryHeap::with_capacity_limit`], in which case [`DaryHeap::insert`]
/// fails with [`HeapError::Overflow`] once the limit is reached instead of
/// growing further.
#[derive(Debug, Clone)]
pub struct DaryHeap<K: Ord> {
    /// Heap elements in array order; `data[0]` is the maximum
    data: Vec<K>,
    /// Branching factor, >= 1, fixed after construction
    d: usize,
    /// Optional element cap; `None` means grow without bound
    capacity: Option<usize>,
}

impl<K: Ord> DaryHeap<K> {
    /// Creates an empty heap with branching factor `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d == 0`.
    pub fn new(d: usize) -> Self {
        assert!(d >= 1, "branching factor must be at least 1");
        Self {
            data: Vec::new(),
            d,
            capacity: None,
        }
    }

    /// Creates an empty heap with branching factor `d` and a hard element
    /// cap.
    ///
    /// Once `len() == cap`, further inserts fail with
    /// [`HeapError::Overflow`].
    ///
    /// # Panics
    ///
    /// Panics if `d == 0`.
    pub fn with_capacity_limit(d: usize, cap: usize) -> Self {
        assert!(d >= 1, "branching factor must be at least 1");
        Self {
            data: Vec::with_capacity(cap),
            d,
            capacity: Some(cap),
        }
    }

    /// Builds a heap from an unordered vector of keys, in place.
    ///
    /// Sifts down every internal node from the parent of the last element
    /// up to the root, so the result satisfies the max-heap property in
    /// O(n).
    ///
    /// # Panics
    ///
    /// Panics if `d == 0`.
    pub fn from_vec(d: usize, data: Vec<K>) -> Self {
        assert!(d >= 1, "branching factor must be at least 1");
        let mut heap = Self {
            data,
            d,
            capacity: None,
        };
        heap.build();
        heap
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the branching factor the heap was built with
    pub fn degree(&self) -> usize {
        self.d
    }

    /// Returns the configured element cap, if any
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns the largest key without removing it
    pub fn peek(&self) -> Option<&K> {
        self.data.first()
    }

    /// Returns the keys in heap array order
    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    /// Iterates over the keys in heap array order
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.data.iter()
    }

    /// Inserts a key into the heap.
    ///
    /// The key is appended at the end and sifted up until it is no greater
    /// than its parent.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Overflow`] if the heap is at its capacity
    /// limit. The heap is unchanged.
    pub fn insert(&mut self, key: K) -> Result<(), HeapError> {
        if let Some(cap) = self.capacity {
            if self.data.len() >= cap {
                return Err(HeapError::Overflow);
            }
        }
        self.data.push(key);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Replaces the key at `index` with a larger (or equal) key and
    /// restores the heap property by sifting up.
    ///
    /// An equal key is accepted and sifts to nowhere, leaving the heap as
    /// it was.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`, and
    /// [`HeapError::InvalidKey`] if `key` is smaller than the current key
    /// at `index`. The heap is unchanged on error.
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<(), HeapError> {
        if index >= self.data.len() {
            return Err(HeapError::IndexOutOfBounds);
        }
        if key < self.data[index] {
            return Err(HeapError::InvalidKey);
        }
        self.data[index] = key;
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the largest key.
    ///
    /// The last key is moved into the root slot and sifted down.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn extract_max(&mut self) -> Result<K, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }
        let last = self.data.len() - 1;
        self.data.swap(ROOT, last);
        let max = self.data.pop().ok_or(HeapError::Underflow)?;
        if !self.data.is_empty() {
            self.sift_down(ROOT);
        }
        Ok(max)
    }

    /// Removes and returns the key at `index`, restoring the heap
    /// property.
    ///
    /// The target is floated to the root by position (unconditional swaps
    /// along the parent chain, no sentinel key needed, so the full key
    /// range including the maximum representable value stays usable) and
    /// then removed exactly as in [`DaryHeap::extract_max`].
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`. The
    /// heap is unchanged on error.
    pub fn delete_at(&mut self, index: usize) -> Result<K, HeapError> {
        if index >= self.data.len() {
            return Err(HeapError::IndexOutOfBounds);
        }
        self.float_to_root(index);
        self.extract_max()
    }

    /// Index of the k-th child (k in 1..=d) of the node at `i`.
    ///
    /// Pure arithmetic; callers bound-check against `len()`.
    fn child(&self, i: usize, k: usize) -> usize {
        self.d * i + k
    }

    /// Index of the parent of the node at `i`.
    ///
    /// Callers guard with `i > ROOT`; the root has no parent.
    fn parent(&self, i: usize) -> usize {
        (i - 1) / self.d
    }

    /// Heapifies the whole array bottom-up.
    ///
    /// Sifts down every internal node in decreasing index order, starting
    /// at the parent of the last element. Each subtree below the current
    /// node is already a heap when the node is processed.
    fn build(&mut self) {
        if self.data.len() < 2 {
            return;
        }
        let last_parent = self.parent(self.data.len() - 1);
        for i in (ROOT..=last_parent).rev() {
            self.sift_down(i);
        }
    }

    /// Moves the key at `index` up until it is no greater than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > ROOT {
            let parent = self.parent(index);
            if self.data[parent] < self.data[index] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Restores the heap property for the subtree rooted at `index`,
    /// assuming the subtrees below its children already satisfy it.
    ///
    /// Scans all `d` children per level with a strict `>` comparison, so
    /// among equal maximal children the leftmost wins.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let mut largest = index;
            for k in 1..=self.d {
                let c = self.child(index, k);
                if c < len && self.data[c] > self.data[largest] {
                    largest = c;
                }
            }
            if largest != index {
                self.data.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
    }

    /// Swaps the key at `index` up the parent chain all the way to the
    /// root, regardless of key order.
    ///
    /// Each displaced parent is at least as large as everything in the
    /// subtree it is swapped into, so after the root is removed and the
    /// heap re-sifted the invariant holds everywhere.
    fn float_to_root(&mut self, mut index: usize) {
        while index > ROOT {
            let parent = self.parent(index);
            self.data.swap(index, parent);
            index = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exhaustive check of the max-heap property
    fn assert_heap_property<K: Ord + std::fmt::Debug>(heap: &DaryHeap<K>) {
        let data = heap.as_slice();
        let d = heap.degree();
        for i in 0..data.len() {
            for k in 1..=d {
                let c = d * i + k;
                if c < data.len() {
                    assert!(
                        data[i] >= data[c],
                        "heap property violated at parent {} / child {}",
                        i,
                        c
                    );
                }
            }
        }
    }

    #[test]
    fn build_from_unordered_vec() {
        let heap = DaryHeap::from_vec(2, vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(heap.len(), 8);
        assert_eq!(heap.peek(), Some(&9));
        assert_heap_property(&heap);
    }

    #[test]
    fn build_covers_all_internal_nodes() {
        // The parent of the last element must be sifted; for d=3 and
        // n=5 the last parent is index 1, not 0.
        let heap = DaryHeap::from_vec(3, vec![0, 1, 2, 3, 9]);
        assert_eq!(heap.peek(), Some(&9));
        assert_heap_property(&heap);
    }

    #[test]
    fn build_empty_and_singleton() {
        let empty: DaryHeap<i32> = DaryHeap::from_vec(2, vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.peek(), None);

        let one = DaryHeap::from_vec(2, vec![7]);
        assert_eq!(one.len(), 1);
        assert_eq!(one.peek(), Some(&7));
    }

    #[test]
    #[should_panic(expected = "branching factor must be at least 1")]
    fn zero_degree_rejected() {
        let _ = DaryHeap::<i32>::new(0);
    }

    #[test]
    fn insert_sifts_up() {
        let mut heap = DaryHeap::new(2);
        for key in [5, 3, 8, 1, 9, 2] {
            heap.insert(key).unwrap();
            assert_heap_property(&heap);
        }
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn insert_overflow_leaves_heap_unchanged() {
        let mut heap = DaryHeap::with_capacity_limit(2, 3);
        heap.insert(1).unwrap();
        heap.insert(2).unwrap();
        heap.insert(3).unwrap();
        let before: Vec<i32> = heap.as_slice().to_vec();

        assert_eq!(heap.insert(4), Err(HeapError::Overflow));
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.as_slice(), &before[..]);
    }

    #[test]
    fn extract_max_drains_in_order() {
        let mut heap = DaryHeap::from_vec(2, vec![3, 1, 4, 1, 5, 9, 2, 6]);
        let mut drained = Vec::new();
        while let Ok(max) = heap.extract_max() {
            drained.push(max);
            assert_heap_property(&heap);
        }
        assert_eq!(drained, vec![9, 6, 5, 4, 3, 2, 1, 1]);
        assert_eq!(heap.extract_max(), Err(HeapError::Underflow));
    }

    #[test]
    fn extract_max_underflow_on_empty() {
        let mut heap: DaryHeap<i32> = DaryHeap::new(4);
        assert_eq!(heap.extract_max(), Err(HeapError::Underflow));
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn increase_key_bubbles_up() {
        let mut heap = DaryHeap::from_vec(2, vec![9, 5, 8, 1, 3]);
        let index = heap.as_slice().iter().position(|&k| k == 1).unwrap();
        heap.increase_key(index, 20).unwrap();
        assert_eq!(heap.peek(), Some(&20));
        assert_heap_property(&heap);
    }

    #[test]
    fn increase_key_equal_is_accepted() {
        let mut heap = DaryHeap::from_vec(2, vec![9, 5, 8]);
        let before: Vec<i32> = heap.as_slice().to_vec();
        heap.increase_key(1, 5).unwrap();
        assert_eq!(heap.as_slice(), &before[..]);
    }

    #[test]
    fn increase_key_rejects_smaller_key() {
        let mut heap = DaryHeap::from_vec(2, vec![9, 5, 8]);
        let before: Vec<i32> = heap.as_slice().to_vec();
        assert_eq!(heap.increase_key(1, 0), Err(HeapError::InvalidKey));
        assert_eq!(heap.as_slice(), &before[..]);
    }

    #[test]
    fn increase_key_rejects_bad_index() {
        let mut heap = DaryHeap::from_vec(2, vec![9, 5, 8]);
        assert_eq!(heap.increase_key(3, 100), Err(HeapError::IndexOutOfBounds));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn delete_at_removes_exactly_one() {
        let mut heap = DaryHeap::from_vec(2, vec![3, 1, 4, 1, 5, 9, 2, 6]);
        let index = heap.as_slice().iter().position(|&k| k == 4).unwrap();
        let removed = heap.delete_at(index).unwrap();
        assert_eq!(removed, 4);
        assert_eq!(heap.len(), 7);
        assert_heap_property(&heap);

        let mut drained = Vec::new();
        while let Ok(max) = heap.extract_max() {
            drained.push(max);
        }
        assert_eq!(drained, vec![9, 6, 5, 3, 2, 1, 1]);
    }

    #[test]
    fn delete_at_root() {
        let mut heap = DaryHeap::from_vec(2, vec![3, 1, 4]);
        assert_eq!(heap.delete_at(0), Ok(4));
        assert_eq!(heap.len(), 2);
        assert_heap_property(&heap);
    }

    #[test]
    fn delete_at_rejects_bad_index() {
        let mut heap = DaryHeap::from_vec(2, vec![3, 1, 4]);
        assert_eq!(heap.delete_at(3), Err(HeapError::IndexOutOfBounds));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn delete_at_works_with_max_representable_key() {
        // No sentinel key is used, so i32::MAX is an ordinary key.
        let mut heap = DaryHeap::from_vec(2, vec![i32::MAX, 5, i32::MAX]);
        let removed = heap.delete_at(1).unwrap();
        assert_eq!(removed, 5);
        assert_eq!(heap.as_slice(), &[i32::MAX, i32::MAX]);
    }

    #[test]
    fn degree_one_degenerates_to_sorted_chain() {
        let heap = DaryHeap::from_vec(1, vec![4, 2, 7, 1, 9]);
        assert_heap_property(&heap);
        // With d=1 every node has a single child, so array order is
        // fully sorted descending.
        assert_eq!(heap.as_slice(), &[9, 7, 4, 2, 1]);
    }

    #[test]
    fn degree_four_drains_in_order() {
        let mut heap = DaryHeap::from_vec(4, vec![12, 3, 44, 7, 0, 19, 5, 8, 27]);
        assert_heap_property(&heap);
        let mut drained = Vec::new();
        while let Ok(max) = heap.extract_max() {
            drained.push(max);
        }
        assert_eq!(drained, vec![44, 27, 19, 12, 8, 7, 5, 3, 0]);
    }

    #[test]
    fn duplicate_keys() {
        let mut heap = DaryHeap::from_vec(2, vec![5, 5, 5, 5]);
        assert_heap_property(&heap);
        for _ in 0..4 {
            assert_eq!(heap.extract_max(), Ok(5));
        }
        assert!(heap.is_empty());
    }
}
