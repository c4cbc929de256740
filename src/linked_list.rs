//! LinkedList: singly-linked sequence stored in a generational arena.
//!
//! Nodes live in a `SlotMap` and point at their successor by key, so the
//! chain is singly owned from `head` without any raw pointers. Structural
//! operations walk from the head, which makes `append`, `find` and `delete`
//! linear and `insert` constant-time.

use crate::error::AllocError;
use core::cmp::Ordering;
use slotmap::{DefaultKey, SlotMap};

/// Hard ceiling of the slot arena: a `SlotMap` holds at most `2^32 - 2`
/// elements.
const ARENA_LIMIT: usize = (u32::MAX - 1) as usize;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<DefaultKey>,
}

/// A singly-linked list of payloads.
///
/// The list owns its nodes and drops the payloads together with them. Store
/// references or handles to keep payload lifetime with the caller.
#[derive(Debug)]
pub struct LinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    limit: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::with_node_limit(ARENA_LIMIT)
    }

    /// Creates an empty list that refuses to grow past `limit` nodes.
    /// Limits above the arena ceiling are clamped to it.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            limit: limit.min(ARENA_LIMIT),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn node_limit(&self) -> usize {
        self.limit
    }

    fn check_capacity(&self) -> Result<(), AllocError> {
        if self.nodes.len() >= self.limit {
            return Err(AllocError::CapacityExceeded { limit: self.limit });
        }
        Ok(())
    }

    /// Prepends `value`; it becomes the new head.
    pub fn insert(&mut self, value: T) -> Result<&T, AllocError> {
        self.check_capacity()?;
        let k = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(k);
        Ok(&self.nodes[k].value)
    }

    /// Appends `value` after the current tail. Walks the whole chain to find
    /// the tail; on an empty list this is `insert`.
    pub fn append(&mut self, value: T) -> Result<&T, AllocError> {
        let Some(tail) = self.tail_key() else {
            return self.insert(value);
        };
        self.check_capacity()?;
        let k = self.nodes.insert(Node { value, next: None });
        self.nodes[tail].next = Some(k);
        Ok(&self.nodes[k].value)
    }

    fn tail_key(&self) -> Option<DefaultKey> {
        let mut cur = self.head?;
        while let Some(next) = self.nodes[cur].next {
            cur = next;
        }
        Some(cur)
    }

    pub fn head(&self) -> Option<&T> {
        self.head.map(|k| &self.nodes[k].value)
    }

    pub fn tail(&self) -> Option<&T> {
        self.tail_key().map(|k| &self.nodes[k].value)
    }

    /// Returns the first payload, head to tail, for which
    /// `compare(target, payload)` is `Ordering::Equal`.
    pub fn find<Q, F>(&self, target: &Q, mut compare: F) -> Option<&T>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        self.iter()
            .find(|&candidate| compare(target, candidate) == Ordering::Equal)
    }

    /// Unlinks and returns the first payload matching `target`. The
    /// predecessor is relinked to the removed node's successor.
    pub fn delete<Q, F>(&mut self, target: &Q, mut compare: F) -> Option<T>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = &self.nodes[k];
            if compare(target, &node.value) == Ordering::Equal {
                let next = node.next;
                match prev {
                    None => self.head = next,
                    Some(p) => self.nodes[p].next = next,
                }
                return self.nodes.remove(k).map(|n| n.value);
            }
            prev = cur;
            cur = node.next;
        }
        None
    }

    /// Visits every payload head to tail.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            f(value);
        }
    }

    /// Snapshot of payload references in traversal order.
    pub fn to_vec(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.iter());
        out
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Drops every node. Keeps the arena allocation for reuse.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator, head to tail.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    cur: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cur?];
        self.cur = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator. Each node is detached from the arena, with its
/// successor recorded, before the payload is handed out.
pub struct IntoIter<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    cur: Option<DefaultKey>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.remove(self.cur?)?;
        self.cur = node.next;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            nodes: self.nodes,
            cur: self.head,
        }
    }
}
