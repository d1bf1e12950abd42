use std::collections::HashMap;
use std::hash::Hash;

use crate::stats::CacheStats;

/// Fixed-capacity cache with strict least-recently-used eviction
///
/// Entries live in a slab and are threaded on an intrusive doubly linked list
/// ordered from most to least recently used, so lookups, promotions and
/// evictions are all O(1). A capacity of zero turns every insert into a no-op.
pub struct LruCache<K, V> {
    capacity: usize,
    index: HashMap<K, usize>,
    slots: Vec<Slot<K, V>>,
    // most recently used
    head: Option<usize>,
    // least recently used
    tail: Option<usize>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

struct Slot<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Looks up `key`, marking it most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.index.get(key).copied() {
            Some(slot) => {
                self.hits += 1;
                self.promote(slot);
                Some(&self.slots[slot].value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Looks up `key` without touching recency or the hit counters.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.slots[slot].value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Inserts or replaces `key`, making it most recently used.
    ///
    /// Returns the entry evicted to make room, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(&slot) = self.index.get(&key) {
            self.slots[slot].value = value;
            self.promote(slot);
            return None;
        }

        if self.index.len() >= self.capacity {
            if let Some(lru) = self.tail {
                // reuse the evicted slot in place
                self.unlink(lru);
                let old = std::mem::replace(
                    &mut self.slots[lru],
                    Slot { key: key.clone(), value, prev: None, next: None },
                );
                self.index.remove(&old.key);
                self.index.insert(key, lru);
                self.push_front(lru);
                self.evictions += 1;
                tracing::trace!(len = self.index.len(), "evicted least recently used cache entry");
                return Some((old.key, old.value));
            }
        }

        self.slots.push(Slot { key: key.clone(), value, prev: None, next: None });
        let idx = self.slots.len() - 1;
        self.index.insert(key, idx);
        self.push_front(idx);
        None
    }

    /// Removes `key`, returning its value.
    ///
    /// The last slot is moved into the hole so the slab stays dense.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        self.unlink(slot);
        let removed = self.slots.swap_remove(slot);

        if slot < self.slots.len() {
            let (prev, next) = (self.slots[slot].prev, self.slots[slot].next);
            match prev {
                Some(p) => self.slots[p].next = Some(slot),
                None => self.head = Some(slot),
            }
            match next {
                Some(n) => self.slots[n].prev = Some(slot),
                None => self.tail = Some(slot),
            }
            if let Some(idx) = self.index.get_mut(&self.slots[slot].key) {
                *idx = slot;
            }
        }
        Some(removed.value)
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            len: self.index.len(),
            capacity: self.capacity,
        }
    }

    /// Keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.index.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            keys.push(&self.slots[idx].key);
            cursor = self.slots[idx].next;
        }
        keys
    }

    fn promote(&mut self, slot: usize) {
        if self.head == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.push_front(slot);
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.slots[slot].prev, self.slots[slot].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.slots[slot].prev = None;
        self.slots[slot].next = None;
    }

    fn push_front(&mut self, slot: usize) {
        self.slots[slot].prev = None;
        self.slots[slot].next = self.head;
        if let Some(h) = self.head {
            self.slots[h].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_least_recently_used() {
        let mut c = LruCache::new(3);
        c.insert(1, 'a');
        c.insert(2, 'b');
        c.insert(3, 'c');

        // touching 1 leaves 2 as the oldest entry
        assert_eq!(c.get(&1), Some(&'a'));
        assert_eq!(c.insert(4, 'd'), Some((2, 'b')));

        assert!(c.contains(&1));
        assert!(!c.contains(&2));
        assert_eq!(c.keys_by_recency(), vec![&4, &1, &3]);
        assert_eq!(c.stats().evictions, 1);
    }

    #[test]
    fn test_replace_promotes_without_eviction() {
        let mut c = LruCache::new(2);
        c.insert("x", 1);
        c.insert("y", 2);
        assert_eq!(c.insert("x", 10), None);
        assert_eq!(c.peek(&"x"), Some(&10));
        assert_eq!(c.insert("z", 3), Some(("y", 2)));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_peek_does_not_promote() {
        let mut c = LruCache::new(2);
        c.insert(1, ());
        c.insert(2, ());
        assert!(c.peek(&1).is_some());
        assert_eq!(c.insert(3, ()), Some((1, ())));
        assert_eq!(c.stats().hits, 0);
    }

    #[test]
    fn test_hit_and_miss_counters() {
        let mut c = LruCache::new(4);
        assert!(c.get(&"absent").is_none());
        c.insert("present", 1);
        assert!(c.get(&"present").is_some());
        assert!(c.get(&"present").is_some());

        let stats = c.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.len, 1);
        assert_eq!(stats.capacity, 4);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut c = LruCache::new(0);
        assert_eq!(c.insert(1, 1), None);
        assert!(c.is_empty());
        assert!(c.get(&1).is_none());
    }

    #[test]
    fn test_remove_returns_owned_value() {
        // not Clone
        #[derive(Debug, PartialEq)]
        struct Blob(Vec<u8>);

        let mut c = LruCache::new(4);
        c.insert('a', Blob(vec![1]));
        c.insert('b', Blob(vec![2]));
        c.insert('c', Blob(vec![3]));
        c.insert('d', Blob(vec![4]));

        // removing from the middle moves 'd' into the freed slot
        assert_eq!(c.remove(&'b'), Some(Blob(vec![2])));
        assert_eq!(c.keys_by_recency(), vec![&'d', &'c', &'a']);
        assert_eq!(c.peek(&'d'), Some(&Blob(vec![4])));

        assert!(c.get(&'a').is_some());
        assert_eq!(c.remove(&'d'), Some(Blob(vec![4])));
        assert_eq!(c.keys_by_recency(), vec![&'a', &'c']);

        c.insert('e', Blob(vec![5]));
        c.insert('f', Blob(vec![6]));
        assert_eq!(c.insert('g', Blob(vec![7])), Some(('c', Blob(vec![3]))));
        assert_eq!(c.keys_by_recency(), vec![&'g', &'f', &'e', &'a']);
    }

    #[test]
    fn test_remove_reuses_slot() {
        let mut c = LruCache::new(2);
        c.insert(1, 1);
        c.insert(2, 2);
        assert_eq!(c.remove(&1), Some(1));
        assert_eq!(c.remove(&1), None);
        assert_eq!(c.insert(3, 3), None);
        assert_eq!(c.keys_by_recency(), vec![&3, &2]);
        assert_eq!(c.insert(4, 4), Some((2, 2)));
    }

    #[test]
    fn test_clear_keeps_counters() {
        let mut c = LruCache::new(2);
        c.insert(1, 1);
        let _ = c.get(&1);
        c.clear();
        assert!(c.is_empty());
        assert!(c.keys_by_recency().is_empty());
        assert_eq!(c.stats().hits, 1);
        c.insert(5, 5);
        assert_eq!(c.get(&5), Some(&5));
    }
}
