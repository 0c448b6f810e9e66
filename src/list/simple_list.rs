/// Singly linked list stored in a slot arena
///
/// Links are slot indices. Appending and popping the last node are the only
/// structural edits; freed slots go on a free list and are reused.

use std::fmt;
use std::iter::FusedIterator;

use super::error::{index_out_of_range, ListResult};

/// Slot index of a node, `None` terminates the chain
pub(crate) type Link = Option<usize>;

/// A list element: the value plus the link to its successor
#[derive(Debug, Clone)]
pub struct Node<T> {
    data: T,
    next: Link,
}

impl<T> Node<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Whether another node follows this one
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Free { next_free: Link },
}

/// Generic singly linked list
///
/// Invariants:
/// - `len` equals the number of nodes reachable from `first`
/// - the node at `last` has no successor
/// - `first` and `last` are both `None` exactly when `len == 0`
#[derive(Clone)]
pub struct SimpleList<T> {
    slots: Vec<Slot<T>>,
    first: Link,
    last: Link,
    free_head: Link,
    len: usize,
}

impl<T> Default for SimpleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SimpleList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            first: None,
            last: None,
            free_head: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a value after the current last node. O(1)
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc_slot(Node { data: value, next: None });

        match self.last {
            Some(last) => {
                if let Some(node) = self.node_mut(last) {
                    node.next = Some(idx);
                }
            }
            None => self.first = Some(idx),
        }

        self.last = Some(idx);
        self.len += 1;
    }

    /// Remove and return the last value, truncating the chain at the new last node.
    ///
    /// Finding the new last node walks the list, so this is O(n).
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.last?;

        let new_last = if self.len == 1 {
            None
        } else {
            Some(self.slot_at(self.len - 2).ok()?)
        };

        match new_last {
            Some(idx) => {
                if let Some(node) = self.node_mut(idx) {
                    node.next = None;
                }
            }
            None => self.first = None,
        }

        self.last = new_last;
        self.len -= 1;
        self.free_slot(tail)
    }

    /// Walk from the first node `index` times and return the node reached
    pub fn get_node_at(&self, index: usize) -> ListResult<&Node<T>> {
        let slot = self.slot_at(index)?;
        self.node(slot).ok_or_else(|| index_out_of_range(index, self.len))
    }

    /// Value at `index`
    pub fn get(&self, index: usize) -> ListResult<&T> {
        self.get_node_at(index).map(Node::data)
    }

    pub fn get_mut(&mut self, index: usize) -> ListResult<&mut T> {
        let slot = self.slot_at(index)?;
        let len = self.len;
        self.node_mut(slot)
            .map(Node::data_mut)
            .ok_or_else(|| index_out_of_range(index, len))
    }

    /// Replace the value at `index`, returning the old one
    pub fn set(&mut self, index: usize, value: T) -> ListResult<T> {
        let data = self.get_mut(index)?;
        Ok(std::mem::replace(data, value))
    }

    /// Exchange the values held at two positions; the nodes stay linked as they are
    pub fn swap(&mut self, i: usize, j: usize) -> ListResult<()> {
        let a = self.slot_at(i)?;
        let b = self.slot_at(j)?;
        if a != b {
            self.swap_data(a, b);
        }
        Ok(())
    }

    pub fn first(&self) -> Option<&T> {
        self.first.and_then(|idx| self.node(idx)).map(Node::data)
    }

    pub fn last(&self) -> Option<&T> {
        self.last.and_then(|idx| self.node(idx)).map(Node::data)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.slots.clear();
        self.first = None;
        self.last = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Iterate values from first to last
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.first,
            remaining: self.len,
        }
    }

    fn slot_at(&self, index: usize) -> ListResult<usize> {
        if index >= self.len {
            return Err(index_out_of_range(index, self.len));
        }

        let mut current = self.first;
        for _ in 0..index {
            current = current.and_then(|idx| self.node(idx)).and_then(|node| node.next);
        }

        current.ok_or_else(|| index_out_of_range(index, self.len))
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        match self.slots.get_mut(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    fn alloc_slot(&mut self, node: Node<T>) -> usize {
        match self.free_head {
            Some(idx) => {
                if let Some(Slot::Free { next_free }) = self.slots.get(idx) {
                    self.free_head = *next_free;
                }
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn free_slot(&mut self, idx: usize) -> Option<T> {
        if !matches!(self.slots.get(idx), Some(Slot::Occupied(_))) {
            return None;
        }

        let freed = Slot::Free { next_free: self.free_head };
        self.free_head = Some(idx);
        match std::mem::replace(&mut self.slots[idx], freed) {
            Slot::Occupied(node) => Some(node.data),
            Slot::Free { .. } => None,
        }
    }

    fn swap_data(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if hi >= self.slots.len() {
            return;
        }

        let (left, right) = self.slots.split_at_mut(hi);
        if let (Slot::Occupied(x), Slot::Occupied(y)) = (&mut left[lo], &mut right[0]) {
            std::mem::swap(&mut x.data, &mut y.data);
        }
    }
}

/// Borrowing iterator over a `SimpleList`
pub struct Iter<'a, T> {
    list: &'a SimpleList<T>,
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?)?;
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SimpleList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for SimpleList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SimpleList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SimpleList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: PartialEq> PartialEq for SimpleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SimpleList<T> {}

impl<T: fmt::Debug> fmt::Debug for SimpleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
