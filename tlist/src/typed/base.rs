// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::marker::PhantomData;
use core::ptr;

use alloc::boxed::Box;
use log::{debug, trace};

use super::iter::Iter;
use crate::error::{Error, Result};
use crate::kind::{Element, ElementKind};

/// A single storage cell of a [`TypedList`].
///
/// Nodes are allocated via `Box` when an element enters the list and reconstructed into a
/// `Box` when the element leaves, so the node and any value it owns are released together.
pub(crate) struct Node<E> {
    pub(crate) value: E,
    pub(crate) next: *mut Node<E>,
}

impl<E> Node<E> {
    fn alloc(value: E) -> *mut Self {
        Box::into_raw(Box::new(Self {
            value,
            next: ptr::null_mut(),
        }))
    }
}

/// A singly linked list whose element kind `E` is part of its type.
///
/// `E` is one of [`Opaque<T>`], `i32`, `String`, `f32`, or `f64`.
/// The list owns every node and, except for [`Opaque<T>`], every value stored in a node.
/// See [`Element`] for the per-kind storage rules.
///
/// Appending is *O*(*1*) thanks to a tail pointer.
/// All positional operations walk the list from the head and compute in *O*(*n*) time.
///
/// See the [crate-level documentation](crate) for an example.
///
/// [`Opaque<T>`]: crate::Opaque
pub struct TypedList<E: Element> {
    pub(crate) head: *mut Node<E>,
    tail: *mut Node<E>,
    len: usize,
    phantom: PhantomData<Box<Node<E>>>,
}

impl<E: Element> TypedList<E> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            phantom: PhantomData,
        }
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`.
    /// After this operation, `other` becomes empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        if self.tail.is_null() {
            self.head = other.head;
        } else {
            unsafe { (*self.tail).next = other.head };
        }

        self.tail = other.tail;
        self.len += other.len;

        other.head = ptr::null_mut();
        other.tail = ptr::null_mut();
        other.len = 0;
    }

    /// Provides a reference to the last element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back(&self) -> Option<&E> {
        (!self.is_empty()).then(|| unsafe { &(*self.tail).value })
    }

    /// Returns an error if `index` doesn't address an element of the list.
    fn check_index(&self, operation: &str, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            debug!(
                "{}: index {} is out of bounds for a {} list of length {}",
                operation,
                index,
                E::KIND,
                self.len
            );
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Releases every node and every value owned by the list.
    ///
    /// The list remains usable afterwards and can be filled again.
    /// Calling this on an empty list does nothing.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        let released = self.len;
        let mut current = self.head;

        self.head = ptr::null_mut();
        self.tail = ptr::null_mut();
        self.len = 0;

        while !current.is_null() {
            // Reconstruct the `Box` we created when inserting and let it leave the scope
            // to release the node together with the value it owns.
            let node = unsafe { Box::from_raw(current) };
            current = node.next;
        }

        if released > 0 {
            trace!("released {} nodes of a {} list", released, E::KIND);
        }
    }

    /// Creates a new list of the same kind holding a copy of every element.
    ///
    /// For owned kinds, the copies are independent of the original values.
    /// For [`Opaque`] lists, only the addresses are copied: both lists then point to the
    /// same external data.
    ///
    /// This operation computes in *O*(*n*) time.
    ///
    /// [`Opaque`]: crate::Opaque
    pub fn duplicate(&self) -> Self {
        let mut list = Self::new();

        for value in self.iter() {
            list.push(value.input());
        }

        list
    }

    /// Returns the size in bytes of the representation each node stores.
    pub fn element_width(&self) -> usize {
        E::KIND.width()
    }

    /// Calls `visitor` with a reference to each element, in list order.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn for_each<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a E),
    {
        for value in self.iter() {
            visitor(value);
        }
    }

    /// Provides a reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&E> {
        (!self.is_empty()).then(|| unsafe { &(*self.head).value })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The reference points into the list's own storage and ownership stays with the list.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn get(&self, index: usize) -> Result<&E> {
        self.check_index("get", index)?;
        unsafe { Ok(&(*self.node_at(index)).value) }
    }

    /// Inserts an element at position `index`, shifting all elements after it.
    ///
    /// `index` may also be equal to the length of the list, which appends the element.
    ///
    /// This operation computes in *O*(*n*) time, and in *O*(*1*) time when inserting at the
    /// front or back.
    pub fn insert(&mut self, index: usize, value: E::Input<'_>) -> Result<()> {
        if index > self.len {
            debug!(
                "insert: index {} is out of bounds for a {} list of length {}",
                index,
                E::KIND,
                self.len
            );
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let node = Node::alloc(E::store(value));

        unsafe {
            if index == 0 {
                self.link_front(node);
            } else if index == self.len {
                self.link_back(node);
            } else {
                let previous = self.node_at(index - 1);
                (*node).next = (*previous).next;
                (*previous).next = node;
                self.len += 1;
            }
        }

        Ok(())
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    /// Returns an iterator yielding references to each element of the list.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self)
    }

    /// Returns the kind of elements stored in this list.
    pub fn kind(&self) -> ElementKind {
        E::KIND
    }

    /// Returns the number of elements in the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    unsafe fn link_back(&mut self, node: *mut Node<E>) {
        if self.tail.is_null() {
            self.head = node;
        } else {
            (*self.tail).next = node;
        }

        self.tail = node;
        self.len += 1;
    }

    unsafe fn link_front(&mut self, node: *mut Node<E>) {
        (*node).next = self.head;

        if self.tail.is_null() {
            self.tail = node;
        }

        self.head = node;
        self.len += 1;
    }

    /// Walks to the node at `index`, which must be less than `self.len`.
    unsafe fn node_at(&self, index: usize) -> *mut Node<E> {
        let mut current = self.head;

        for _ in 0..index {
            current = (*current).next;
        }

        current
    }

    /// Removes the element at `index` and returns it, transferring ownership to the caller.
    ///
    /// Picking index 0 behaves like [`pop`](Self::pop): it returns `Ok(None)` if the list is
    /// empty. Any other index must address an element.
    ///
    /// This operation computes in *O*(*n*) time, and in *O*(*1*) time for the first element.
    pub fn pick(&mut self, index: usize) -> Result<Option<E>> {
        if index == 0 {
            return Ok(self.pop());
        }

        self.check_index("pick", index)?;
        unsafe { Ok(Some(self.unlink(index))) }
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    ///
    /// Ownership of the element passes to the caller.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop(&mut self) -> Option<E> {
        (!self.is_empty()).then(|| unsafe { self.unlink_front() })
    }

    /// Writes the list to standard output, e.g. `[10, 20, 30]`.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::println!("{}", self);
    }

    /// Appends an element to the back of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push(&mut self, value: E::Input<'_>) {
        let node = Node::alloc(E::store(value));
        unsafe { self.link_back(node) }
    }

    /// Removes and releases the element at `index`.
    ///
    /// This operation computes in *O*(*n*) time, and in *O*(*1*) time for the first element.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.check_index("remove", index)?;
        unsafe { drop(self.unlink(index)) };
        Ok(())
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns `false`.
    /// This method operates in place, visiting each element exactly once in the original order,
    /// and preserves the order of the retained elements.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&E) -> bool,
    {
        let mut previous = ptr::null_mut::<Node<E>>();
        let mut current = self.head;

        while !current.is_null() {
            unsafe {
                let next = (*current).next;

                if f(&(*current).value) {
                    previous = current;
                } else {
                    if previous.is_null() {
                        self.head = next;
                    } else {
                        (*previous).next = next;
                    }

                    if current == self.tail {
                        self.tail = previous;
                    }

                    self.len -= 1;
                    drop(Box::from_raw(current));
                }

                current = next;
            }
        }
    }

    /// Overwrites the element at `index` in place.
    ///
    /// For `String` lists, the old string is released before the new one is allocated.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn set(&mut self, index: usize, value: E::Input<'_>) -> Result<()> {
        self.check_index("set", index)?;
        unsafe { (*self.node_at(index)).value.overwrite(value) };
        Ok(())
    }

    /// Splices out the node at `index`, which must be less than `self.len`.
    unsafe fn unlink(&mut self, index: usize) -> E {
        if index == 0 {
            self.unlink_front()
        } else {
            let previous = self.node_at(index - 1);
            let node = Box::from_raw((*previous).next);
            (*previous).next = node.next;

            if node.next.is_null() {
                self.tail = previous;
            }

            self.len -= 1;
            node.value
        }
    }

    /// Splices out the first node. The list must not be empty.
    unsafe fn unlink_front(&mut self) -> E {
        let node = Box::from_raw(self.head);
        self.head = node.next;

        if self.head.is_null() {
            self.tail = ptr::null_mut();
        }

        self.len -= 1;
        node.value
    }
}

impl<E: Element> Clone for TypedList<E> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<E: Element> Default for TypedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> fmt::Debug for TypedList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: Element> fmt::Display for TypedList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            value.render(f)?;
        }

        f.write_str("]")
    }
}

impl<E: Element> Drop for TypedList<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E: Element + PartialEq> PartialEq for TypedList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<'a, E: Element> IntoIterator for &'a TypedList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}
