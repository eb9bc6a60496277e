// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr;

use super::base::{Node, TypedList};
use crate::kind::Element;

/// Forward cursor over the elements of a [`TypedList`].
///
/// The cursor starts at the first element and walks the nodes of the list directly, without
/// copying them.
/// It borrows the list, so the list cannot be modified while a cursor over it is alive.
/// Dropping the cursor never affects the list.
///
/// Cloning a cursor yields an independent cursor at the same position.
///
/// This iterator is returned from [`TypedList::iter`].
pub struct Iter<'a, E: Element> {
    current: *const Node<E>,
    position: usize,
    remaining: usize,
    phantom: PhantomData<&'a TypedList<E>>,
}

impl<'a, E: Element> Iter<'a, E> {
    /// Creates a cursor positioned at the first element of `list`.
    pub fn new(list: &'a TypedList<E>) -> Self {
        Self {
            current: list.head,
            position: 0,
            remaining: list.len(),
            phantom: PhantomData,
        }
    }

    /// Returns `true` if [`next`](Iterator::next) would yield another element.
    pub fn has_next(&self) -> bool {
        !self.current.is_null()
    }

    /// Returns the number of elements yielded so far, which is also the index of the element
    /// the next call to [`next`](Iterator::next) yields.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, E: Element> Clone for Iter<'a, E> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            position: self.position,
            remaining: self.remaining,
            phantom: PhantomData,
        }
    }
}

impl<'a, E: Element> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        if self.current == ptr::null() {
            None
        } else {
            unsafe {
                let value = &(*self.current).value;
                self.current = (*self.current).next;
                self.position += 1;
                self.remaining -= 1;
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E: Element> ExactSizeIterator for Iter<'a, E> {}

impl<'a, E: Element> FusedIterator for Iter<'a, E> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    #[test]
    fn test_exhaustion() {
        let mut list = TypedList::<i32>::new();

        for i in 0..5 {
            list.push(i);
        }

        let mut iter = list.iter();

        for i in 0..5 {
            assert!(iter.has_next());
            assert_eq!(iter.position(), i as usize);
            assert_eq!(iter.len(), 5 - i as usize);
            assert_eq!(iter.next(), Some(&i));
        }

        assert!(!iter.has_next());
        assert_eq!(iter.position(), 5);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty() {
        let list = TypedList::<String>::new();
        let mut iter = Iter::new(&list);

        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_independent_cursors() {
        let mut list = TypedList::<String>::new();
        list.push("a");
        list.push("b");
        list.push("c");

        let mut first = list.iter();
        first.next();

        let mut second = first.clone();
        assert_eq!(second.next().map(String::as_str), Some("b"));
        assert_eq!(second.next().map(String::as_str), Some("c"));
        assert!(!second.has_next());

        // Advancing the clone left the original where it was.
        assert_eq!(first.position(), 1);
        assert_eq!(first.next().map(String::as_str), Some("b"));

        // Dropping the cursors leaves the list untouched.
        drop(first);
        drop(second);
        assert_eq!(list.len(), 3);

        let collected: alloc::vec::Vec<&str> = (&list).into_iter().map(String::as_str).collect();
        assert_eq!(collected, ["a", "b", "c"]);
    }
}
