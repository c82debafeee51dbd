use std::cmp::Ordering;

use crate::{Error, Result};

/// An indexed priority queue over dense integer indices `0..max_n`.
///
/// Every entry carries a stable external index, so priorities can be updated
/// in place (`decrease_key`/`increase_key`) without remove-and-reinsert. The
/// heap discipline comes entirely from the injected comparator: an ordering
/// where `Ordering::Less` means "better" puts that key nearer the root, so
/// [`min`](IndexedPriorityQueue::min) and [`max`](IndexedPriorityQueue::max)
/// are the same container with different comparators.
///
/// Internally a binary heap of indices (`heap`: position → index) paired with
/// its inverse (`pos`: index → position); every swap updates both sides, and
/// `keys` holds the key for each present index.
pub struct IndexedPriorityQueue<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    max_n: usize,
    heap: Vec<usize>,
    pos: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
    cmp: C,
}

/// The concrete type produced by [`IndexedPriorityQueue::min`] and
/// [`IndexedPriorityQueue::max`].
pub type MinPriorityQueue<K> = IndexedPriorityQueue<K, fn(&K, &K) -> Ordering>;

impl<K: Ord> IndexedPriorityQueue<K, fn(&K, &K) -> Ordering> {
    /// A min-oriented queue: `pop_min` yields the smallest key first.
    pub fn min(max_n: usize) -> Self {
        Self::with_comparator(max_n, K::cmp)
    }

    /// A max-oriented queue: `pop_min` yields the largest key first.
    pub fn max(max_n: usize) -> Self {
        Self::with_comparator(max_n, |a, b| b.cmp(a))
    }
}

impl<K, C> IndexedPriorityQueue<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Creates an empty queue with capacity for indices `0..max_n`, ordered
    /// by `cmp` (`Ordering::Less` sorts toward the root).
    pub fn with_comparator(max_n: usize, cmp: C) -> Self {
        IndexedPriorityQueue {
            max_n,
            heap: Vec::with_capacity(max_n),
            pos: vec![None; max_n],
            keys: (0..max_n).map(|_| None).collect(),
            cmp,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Is index `i` present in the queue?
    pub fn contains(&self, i: usize) -> Result<bool> {
        self.validate_index(i)?;
        Ok(self.pos[i].is_some())
    }

    /// Inserts index `i` with the given key.
    pub fn insert(&mut self, i: usize, key: K) -> Result<()> {
        self.validate_index(i)?;
        if self.pos[i].is_some() {
            return Err(Error::IndexAlreadyPresent(i));
        }
        let slot = self.heap.len();
        self.heap.push(i);
        self.pos[i] = Some(slot);
        self.keys[i] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Returns the index with the comparator-best key.
    pub fn min_index(&self) -> Result<usize> {
        self.heap.first().copied().ok_or(Error::Underflow)
    }

    /// Returns the comparator-best key.
    pub fn min_key(&self) -> Result<&K> {
        let i = self.min_index()?;
        self.keys[i].as_ref().ok_or(Error::Underflow)
    }

    /// Returns the key associated with index `i`.
    pub fn key_of(&self, i: usize) -> Result<&K> {
        self.validate_index(i)?;
        self.keys[i].as_ref().ok_or(Error::IndexNotPresent(i))
    }

    /// Removes and returns the index with the comparator-best key.
    pub fn pop_min(&mut self) -> Result<usize> {
        let min = self.min_index()?;
        let last = self.heap.len() - 1;
        self.exchange(0, last);
        self.heap.pop();
        self.pos[min] = None;
        self.keys[min] = None;
        if !self.heap.is_empty() {
            self.sink(0);
        }
        Ok(min)
    }

    /// Improves the key of index `i`. Fails with
    /// [`Error::NonImprovingKey`] unless the new key is strictly better
    /// under the comparator; a silent no-op would mask a caller bug.
    pub fn decrease_key(&mut self, i: usize, key: K) -> Result<()> {
        let slot = self.present_slot(i)?;
        match self.keys[i].as_ref() {
            Some(current) if (self.cmp)(&key, current) == Ordering::Less => {}
            _ => return Err(Error::NonImprovingKey(i)),
        }
        self.keys[i] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Worsens the key of index `i`; symmetric to
    /// [`decrease_key`](IndexedPriorityQueue::decrease_key).
    pub fn increase_key(&mut self, i: usize, key: K) -> Result<()> {
        let slot = self.present_slot(i)?;
        match self.keys[i].as_ref() {
            Some(current) if (self.cmp)(&key, current) == Ordering::Greater => {}
            _ => return Err(Error::NonImprovingKey(i)),
        }
        self.keys[i] = Some(key);
        self.sink(slot);
        Ok(())
    }

    /// Replaces the key of index `i` with an arbitrary new key. The entry's
    /// relative position is unknown afterward, so it is sifted both ways.
    pub fn change_key(&mut self, i: usize, key: K) -> Result<()> {
        let slot = self.present_slot(i)?;
        self.keys[i] = Some(key);
        self.swim(slot);
        self.sink(slot);
        Ok(())
    }

    /// Removes index `i` from the queue.
    pub fn remove(&mut self, i: usize) -> Result<()> {
        let slot = self.present_slot(i)?;
        let last = self.heap.len() - 1;
        self.exchange(slot, last);
        self.heap.pop();
        self.pos[i] = None;
        self.keys[i] = None;
        if slot < self.heap.len() {
            self.swim(slot);
            self.sink(slot);
        }
        Ok(())
    }

    fn validate_index(&self, i: usize) -> Result<()> {
        if i >= self.max_n {
            return Err(Error::InvalidVertex(i));
        }
        Ok(())
    }

    fn present_slot(&self, i: usize) -> Result<usize> {
        self.validate_index(i)?;
        self.pos[i].ok_or(Error::IndexNotPresent(i))
    }

    // True when the key at heap slot `a` sorts strictly before slot `b`.
    fn slot_better(&self, a: usize, b: usize) -> bool {
        match (&self.keys[self.heap[a]], &self.keys[self.heap[b]]) {
            (Some(ka), Some(kb)) => (self.cmp)(ka, kb) == Ordering::Less,
            _ => false,
        }
    }

    // Swaps heap slots and keeps the index->position inverse in sync.
    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = Some(a);
        self.pos[self.heap[b]] = Some(b);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.slot_better(k, parent) {
                break;
            }
            self.exchange(k, parent);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        loop {
            let mut child = 2 * k + 1;
            if child >= n {
                break;
            }
            if child + 1 < n && self.slot_better(child + 1, child) {
                child += 1;
            }
            if !self.slot_better(child, k) {
                break;
            }
            self.exchange(k, child);
            k = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_min_drains_in_sorted_order() {
        let keys = ["it", "was", "the", "best", "of", "times"];
        let mut pq = IndexedPriorityQueue::min(keys.len());
        for (i, k) in keys.iter().enumerate() {
            pq.insert(i, *k).unwrap();
        }

        let mut drained = Vec::new();
        while !pq.is_empty() {
            drained.push(keys[pq.pop_min().unwrap()]);
        }
        let mut expected = keys.to_vec();
        expected.sort();
        assert_eq!(drained, expected);
    }

    #[test]
    fn max_queue_is_min_queue_with_flipped_comparator() {
        let mut pq = IndexedPriorityQueue::max(4);
        for (i, k) in [3, 9, 1, 7].iter().enumerate() {
            pq.insert(i, *k).unwrap();
        }
        assert_eq!(pq.min_key().unwrap(), &9);
        assert_eq!(pq.pop_min().unwrap(), 1);
        assert_eq!(pq.pop_min().unwrap(), 3);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut pq = IndexedPriorityQueue::min(3);
        pq.insert(1, 10).unwrap();
        assert_eq!(pq.insert(1, 5), Err(Error::IndexAlreadyPresent(1)));
    }

    #[test]
    fn decrease_key_requires_strict_improvement() {
        let mut pq = IndexedPriorityQueue::min(3);
        pq.insert(0, 10).unwrap();
        assert_eq!(pq.decrease_key(0, 10), Err(Error::NonImprovingKey(0)));
        assert_eq!(pq.decrease_key(0, 11), Err(Error::NonImprovingKey(0)));
        pq.decrease_key(0, 3).unwrap();
        assert_eq!(pq.key_of(0).unwrap(), &3);
        assert_eq!(pq.decrease_key(2, 1), Err(Error::IndexNotPresent(2)));
    }

    #[test]
    fn increase_key_sinks_entry() {
        let mut pq = IndexedPriorityQueue::min(3);
        pq.insert(0, 1).unwrap();
        pq.insert(1, 2).unwrap();
        pq.increase_key(0, 5).unwrap();
        assert_eq!(pq.pop_min().unwrap(), 1);
        assert_eq!(pq.pop_min().unwrap(), 0);
    }

    #[test]
    fn remove_keeps_heap_consistent() {
        let mut pq = IndexedPriorityQueue::min(6);
        for (i, k) in [5, 3, 8, 1, 9, 2].iter().enumerate() {
            pq.insert(i, *k).unwrap();
        }
        pq.remove(3).unwrap();
        assert!(!pq.contains(3).unwrap());
        assert_eq!(pq.len(), 5);

        let mut drained = Vec::new();
        while !pq.is_empty() {
            let i = pq.pop_min().unwrap();
            drained.push([5, 3, 8, 1, 9, 2][i]);
        }
        assert_eq!(drained, vec![2, 3, 5, 8, 9]);
    }

    #[test]
    fn empty_queue_underflows() {
        let mut pq: IndexedPriorityQueue<i32, _> = IndexedPriorityQueue::min(2);
        assert_eq!(pq.pop_min(), Err(Error::Underflow));
        assert_eq!(pq.min_index(), Err(Error::Underflow));
    }

    #[test]
    fn size_tracks_inserts_and_deletes() {
        let mut pq = IndexedPriorityQueue::min(10);
        for i in 0..10 {
            pq.insert(i, 10 - i).unwrap();
        }
        for _ in 0..4 {
            pq.pop_min().unwrap();
        }
        assert_eq!(pq.len(), 6);
    }
}
