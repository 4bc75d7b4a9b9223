use std::collections::HashMap;
use std::hash::Hash;

use super::CacheError;

const NIL: usize = usize::MAX;

struct Node<K, V> {
    key: K,
    value: V,
}

/// Recency links for one slot; `prev` points towards the MRU end.
#[derive(Clone, Copy)]
struct Link {
    prev: usize,
    next: usize,
}

impl Link {
    const DETACHED: Link = Link {
        prev: NIL,
        next: NIL,
    };
}

/// Fixed-capacity map with least-recently-used eviction.
///
/// Entries live in a slab (`nodes`) threaded by an intrusive doubly-linked
/// recency list (`links`); freed slots are reused. All operations are O(1).
pub struct LruCache<K, V> {
    map: HashMap<K, usize>,
    nodes: Vec<Option<Node<K, V>>>,
    links: Vec<Link>,
    free: Vec<usize>,
    /// Most recently used slot.
    head: usize,
    /// Least recently used slot.
    tail: usize,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(Self {
            map: HashMap::with_capacity(capacity),
            nodes: Vec::new(),
            links: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Look up a value and mark it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        self.nodes[idx].as_ref().map(|n| &n.value)
    }

    /// Look up a value without touching its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.nodes[idx].as_ref().map(|n| &n.value)
    }

    /// Insert or replace a value and mark it most recently used.
    ///
    /// Returns the least recently used entry if the insert pushed the cache
    /// over capacity.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx] = Some(Node { key, value });
            self.move_to_front(idx);
            return None;
        }

        let node = Some(Node {
            key: key.clone(),
            value,
        });
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                self.links[idx] = Link::DETACHED;
                idx
            }
            None => {
                self.nodes.push(node);
                self.links.push(Link::DETACHED);
                self.nodes.len() - 1
            }
        };
        self.map.insert(key, idx);
        self.push_front(idx);

        if self.map.len() > self.capacity {
            self.pop_back()
        } else {
            None
        }
    }

    /// Remove a key, returning its value.
    pub fn evict(&mut self, key: &K) -> Option<V> {
        let idx = self.map.remove(key)?;
        self.release(idx).map(|n| n.value)
    }

    /// Remove and return the least recently used entry.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let idx = self.tail;
        if idx == NIL {
            return None;
        }
        let node = self.release(idx)?;
        self.map.remove(&node.key);
        Some((node.key, node.value))
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.links.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        let mut idx = self.head;
        std::iter::from_fn(move || {
            if idx == NIL {
                return None;
            }
            let key = self.nodes[idx].as_ref().map(|n| &n.key);
            idx = self.links[idx].next;
            key
        })
    }

    fn release(&mut self, idx: usize) -> Option<Node<K, V>> {
        self.unlink(idx);
        self.free.push(idx);
        self.nodes[idx].take()
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head != idx {
            self.unlink(idx);
            self.push_front(idx);
        }
    }

    fn push_front(&mut self, idx: usize) {
        self.links[idx] = Link {
            prev: NIL,
            next: self.head,
        };
        if self.head != NIL {
            self.links[self.head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let Link { prev, next } = self.links[idx];
        if prev != NIL {
            self.links[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.links[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.links[idx] = Link::DETACHED;
    }
}
