/// LIFO stack on top of `SimpleList`
///
/// Push appends to the end of the list, pop truncates it.

use super::simple_list::{Iter, SimpleList};

#[derive(Debug, Clone, Default)]
pub struct SimpleStack<T> {
    list: SimpleList<T>,
}

impl<T> SimpleStack<T> {
    pub fn new() -> Self {
        Self { list: SimpleList::new() }
    }

    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Remove and return the most recently pushed value, `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        let value = self.list.pop_back();
        if value.is_some() {
            log::trace!("Popped stack, {} values left", self.list.len());
        }
        value
    }

    /// Most recently pushed value
    pub fn peek(&self) -> Option<&T> {
        self.list.last()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Values from the bottom of the stack to the top
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    pub fn as_list(&self) -> &SimpleList<T> {
        &self.list
    }
}

impl<T> From<SimpleList<T>> for SimpleStack<T> {
    fn from(list: SimpleList<T>) -> Self {
        Self { list }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = SimpleStack::new();
        for i in 0..=7 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 8);
        assert_eq!(stack.peek(), Some(&7));

        let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(popped, vec![7, 6, 5, 4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut stack: SimpleStack<u8> = SimpleStack::default();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut stack = SimpleStack::new();
        stack.push('a');
        stack.push('b');
        assert_eq!(stack.pop(), Some('b'));
        stack.push('c');
        assert_eq!(stack.iter().copied().collect::<String>(), "ac");
        assert_eq!(stack.pop(), Some('c'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_from_list() {
        let list: SimpleList<_> = (1..=3).collect();
        let mut stack = SimpleStack::from(list);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.as_list().len(), 2);
    }
}
