use crate::Vec;
use alloc::fmt;

/// The VM's operand stack.
///
/// Indexing counts from the top: `stack[0]` is the most recently pushed
/// element, `stack[1]` the one below it. The VM checks depth before it
/// touches the stack, so indexing past the bottom is a bug and panics.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    /// Bottom to top.
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates from the top of the stack down to the bottom.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T: Clone> Stack<T> {
    /// Duplicates the top element of the stack.
    ///
    /// Returns `true` if successful, `false` if the stack is empty.
    #[inline]
    pub fn dup(&mut self) -> bool {
        self.dup_at(0)
    }

    /// Pushes a copy of the element `offset` places below the top.
    ///
    /// Returns `false`, leaving the stack alone, if there is no such element.
    #[inline]
    pub fn dup_at(&mut self, offset: usize) -> bool {
        let len = self.items.len();
        if offset >= len {
            return false;
        }
        let value = self.items[len - 1 - offset].clone();
        self.items.push(value);
        true
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    /// Lists elements top first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> core::ops::Index<usize> for Stack<T> {
    type Output = T;

    /// Indexes the stack from the top.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        let len = self.items.len();
        assert!(
            index < len,
            "Stack index out of bounds: index {} but stack has {} elements",
            index,
            len
        );
        &self.items[len - 1 - index]
    }
}

impl<T> core::ops::IndexMut<usize> for Stack<T> {
    /// Indexes the stack from the top (mutable).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.items.len();
        assert!(
            index < len,
            "Stack index out of bounds: index {} but stack has {} elements",
            index,
            len
        );
        &mut self.items[len - 1 - index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format, vec};

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_index_from_top() {
        let mut stack = Stack::new();
        stack.push(10);
        stack.push(20);
        stack.push(30);

        assert_eq!(stack[0], 30);
        assert_eq!(stack[2], 10);

        stack[0] = 99;
        assert_eq!(stack.pop(), Some(99));
    }

    #[test]
    #[should_panic(expected = "Stack index out of bounds")]
    fn test_index_past_bottom() {
        let mut stack = Stack::new();
        stack.push(1);
        let _ = stack[1];
    }

    #[test]
    fn test_dup() {
        let mut stack = Stack::new();
        assert!(!stack.dup());

        stack.push(42);
        assert!(stack.dup());
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(42));
        assert_eq!(stack.pop(), Some(42));
    }

    #[test]
    fn test_dup_at() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert!(!stack.dup_at(2));
        assert!(stack.dup_at(1));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 1]);
    }

    #[test]
    fn test_debug_lists_top_first() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(format!("{:?}", stack), "[2, 1]");
    }
}
