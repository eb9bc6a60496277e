// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::iter::FusedIterator;

use alloc::string::String;
use log::debug;

use crate::error::{Error, Result};
use crate::kind::{Element, ElementKind};
use crate::opaque::Opaque;
use crate::typed::{Iter, TypedList};
use crate::value::{OwnedValue, Value};

/// A singly linked list whose element kind is chosen at runtime.
///
/// This is a thin layer over the five [`TypedList`] variants.
/// Values enter as [`Value`]s, whose kind is checked against the list's kind before anything
/// is modified, and leave as [`Value`]s (reads) or [`OwnedValue`]s (removals).
///
/// Prefer [`TypedList`] when the kind is known at compile time.
pub enum List {
    /// A list of [`ElementKind::Opaque`] handles.
    Opaque(TypedList<Opaque>),
    /// A list of [`ElementKind::Int`] values.
    Int(TypedList<i32>),
    /// A list of [`ElementKind::String`] values.
    String(TypedList<String>),
    /// A list of [`ElementKind::Float`] values.
    Float(TypedList<f32>),
    /// A list of [`ElementKind::Double`] values.
    Double(TypedList<f64>),
}

/// Evaluates `$body` with `$typed` bound to the [`TypedList`] inside `$list`.
macro_rules! dispatch {
    ($list:expr, $typed:ident => $body:expr) => {
        match $list {
            List::Opaque($typed) => $body,
            List::Int($typed) => $body,
            List::String($typed) => $body,
            List::Float($typed) => $body,
            List::Double($typed) => $body,
        }
    };
}

/// Like `dispatch!`, but also unpacks `$value`, which must be of the list's kind.
macro_rules! dispatch_value {
    ($operation:expr, $list:expr, $value:expr, $typed:ident, $input:ident => $body:expr) => {
        match ($list, $value) {
            (List::Opaque($typed), Value::Opaque($input)) => Ok($body),
            (List::Int($typed), Value::Int($input)) => Ok($body),
            (List::String($typed), Value::String($input)) => Ok($body),
            (List::Float($typed), Value::Float($input)) => Ok($body),
            (List::Double($typed), Value::Double($input)) => Ok($body),
            (list, value) => Err(kind_mismatch($operation, list.kind(), value.kind())),
        }
    };
}

fn kind_mismatch(operation: &str, expected: ElementKind, found: ElementKind) -> Error {
    debug!(
        "{}: cannot store a {} value in a {} list",
        operation, found, expected
    );
    Error::KindMismatch { expected, found }
}

impl List {
    /// Creates an empty list holding elements of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Opaque => Self::Opaque(TypedList::new()),
            ElementKind::Int => Self::Int(TypedList::new()),
            ElementKind::String => Self::String(TypedList::new()),
            ElementKind::Float => Self::Float(TypedList::new()),
            ElementKind::Double => Self::Double(TypedList::new()),
        }
    }

    /// Moves all elements from `other` to the end of the list, leaving `other` empty.
    ///
    /// Both lists must be of the same kind.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn append(&mut self, other: &mut Self) -> Result<()> {
        match (self, other) {
            (Self::Opaque(list), Self::Opaque(other)) => list.append(other),
            (Self::Int(list), Self::Int(other)) => list.append(other),
            (Self::String(list), Self::String(other)) => list.append(other),
            (Self::Float(list), Self::Float(other)) => list.append(other),
            (Self::Double(list), Self::Double(other)) => list.append(other),
            (list, other) => return Err(kind_mismatch("append", list.kind(), other.kind())),
        }

        Ok(())
    }

    /// Provides the last element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back(&self) -> Option<Value<'_>> {
        dispatch!(self, list => list.back().map(Element::view))
    }

    /// Releases every node and every owned value, leaving an empty but usable list.
    ///
    /// Calling this on an empty list does nothing.
    pub fn clear(&mut self) {
        dispatch!(self, list => list.clear())
    }

    /// Creates a new list of the same kind holding a copy of every element.
    ///
    /// For [`ElementKind::Opaque`] lists, only the addresses are copied: both lists then point
    /// to the same external data.
    pub fn duplicate(&self) -> Self {
        match self {
            Self::Opaque(list) => Self::Opaque(list.duplicate()),
            Self::Int(list) => Self::Int(list.duplicate()),
            Self::String(list) => Self::String(list.duplicate()),
            Self::Float(list) => Self::Float(list.duplicate()),
            Self::Double(list) => Self::Double(list.duplicate()),
        }
    }

    /// Returns the size in bytes of the representation each node stores.
    pub fn element_width(&self) -> usize {
        self.kind().width()
    }

    /// Calls `visitor` with each element, in list order.
    pub fn for_each<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(Value<'a>),
    {
        for value in self.iter() {
            visitor(value);
        }
    }

    /// Provides the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<Value<'_>> {
        dispatch!(self, list => list.front().map(Element::view))
    }

    /// Returns the element at `index`.
    ///
    /// A [`Value::String`] borrows the list's own copy of the string.
    pub fn get(&self, index: usize) -> Result<Value<'_>> {
        dispatch!(self, list => list.get(index).map(Element::view))
    }

    /// Inserts an element at position `index`, shifting all elements after it.
    ///
    /// `index` may also be equal to the length of the list, which appends the element.
    pub fn insert<'a, V>(&mut self, index: usize, value: V) -> Result<()>
    where
        V: Into<Value<'a>>,
    {
        dispatch_value!("insert", self, value.into(), list, input => list.insert(index, input)?)
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        dispatch!(self, list => list.is_empty())
    }

    /// Returns a cursor over the elements of the list.
    pub fn iter(&self) -> Values<'_> {
        let inner = match self {
            Self::Opaque(list) => ValuesInner::Opaque(list.iter()),
            Self::Int(list) => ValuesInner::Int(list.iter()),
            Self::String(list) => ValuesInner::String(list.iter()),
            Self::Float(list) => ValuesInner::Float(list.iter()),
            Self::Double(list) => ValuesInner::Double(list.iter()),
        };

        Values { inner }
    }

    /// Returns the kind the list was created with.
    pub fn kind(&self) -> ElementKind {
        dispatch!(self, list => list.kind())
    }

    /// Returns the number of elements in the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn len(&self) -> usize {
        dispatch!(self, list => list.len())
    }

    /// Removes the element at `index` and hands it to the caller.
    ///
    /// Picking index 0 of an empty list returns `Ok(None)`, like [`pop`](Self::pop).
    /// Any other index must address an element.
    pub fn pick(&mut self, index: usize) -> Result<Option<OwnedValue>> {
        dispatch!(self, list => list.pick(index).map(|value| value.map(Element::into_owned)))
    }

    /// Removes the first element and hands it to the caller, or returns `None` if the list is
    /// empty.
    pub fn pop(&mut self) -> Option<OwnedValue> {
        dispatch!(self, list => list.pop().map(Element::into_owned))
    }

    /// Writes the list to standard output, e.g. `["a", "b"]`.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        dispatch!(self, list => list.print())
    }

    /// Appends an element to the back of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push<'a, V>(&mut self, value: V) -> Result<()>
    where
        V: Into<Value<'a>>,
    {
        dispatch_value!("push", self, value.into(), list, input => list.push(input))
    }

    /// Removes and releases the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        dispatch!(self, list => list.remove(index))
    }

    /// Retains only the elements for which `f` returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(Value<'_>) -> bool,
    {
        dispatch!(self, list => list.retain(|value| f(value.view())))
    }

    /// Overwrites the element at `index` in place.
    pub fn set<'a, V>(&mut self, index: usize, value: V) -> Result<()>
    where
        V: Into<Value<'a>>,
    {
        dispatch_value!("set", self, value.into(), list, input => list.set(index, input)?)
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, list => f.debug_tuple("List").field(&self.kind()).field(list).finish())
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, list => fmt::Display::fmt(list, f))
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = Value<'a>;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Values<'a> {
        self.iter()
    }
}

/// Forward cursor over the elements of a [`List`].
///
/// Like [`Iter`], it borrows the list and leaves it untouched when dropped.
///
/// This iterator is returned from [`List::iter`].
#[derive(Clone)]
pub struct Values<'a> {
    inner: ValuesInner<'a>,
}

#[derive(Clone)]
enum ValuesInner<'a> {
    Opaque(Iter<'a, Opaque>),
    Int(Iter<'a, i32>),
    String(Iter<'a, String>),
    Float(Iter<'a, f32>),
    Double(Iter<'a, f64>),
}

macro_rules! dispatch_iter {
    ($inner:expr, $iter:ident => $body:expr) => {
        match $inner {
            ValuesInner::Opaque($iter) => $body,
            ValuesInner::Int($iter) => $body,
            ValuesInner::String($iter) => $body,
            ValuesInner::Float($iter) => $body,
            ValuesInner::Double($iter) => $body,
        }
    };
}

impl<'a> Values<'a> {
    /// Returns `true` if [`next`](Iterator::next) would yield another element.
    pub fn has_next(&self) -> bool {
        dispatch_iter!(&self.inner, iter => iter.has_next())
    }

    /// Returns the index of the element the next call to [`next`](Iterator::next) yields.
    pub fn position(&self) -> usize {
        dispatch_iter!(&self.inner, iter => iter.position())
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = Value<'a>;

    fn next(&mut self) -> Option<Value<'a>> {
        dispatch_iter!(&mut self.inner, iter => iter.next().map(Element::view))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        dispatch_iter!(&self.inner, iter => iter.size_hint())
    }
}

impl<'a> ExactSizeIterator for Values<'a> {}

impl<'a> FusedIterator for Values<'a> {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn int_list(values: &[i32]) -> List {
        let mut list = List::new(ElementKind::Int);

        for value in values {
            list.push(*value).unwrap();
        }

        list
    }

    #[test]
    fn test_create() {
        for kind in [
            ElementKind::Opaque,
            ElementKind::Int,
            ElementKind::String,
            ElementKind::Float,
            ElementKind::Double,
        ] {
            let list = List::new(kind);
            assert_eq!(list.kind(), kind);
            assert_eq!(list.element_width(), kind.width());
            assert_eq!(list.len(), 0);
            assert!(list.is_empty());
            assert_eq!(list.to_string(), "[]");
        }
    }

    #[test]
    fn test_kind_mismatch() {
        init_logging();

        let mut list = int_list(&[1, 2]);
        let expected = Err(Error::KindMismatch {
            expected: ElementKind::Int,
            found: ElementKind::Double,
        });

        assert_eq!(list.push(1.0), expected);
        assert_eq!(list.insert(0, 1.0), expected);
        assert_eq!(list.set(0, 1.0), expected);

        let mut strings = List::new(ElementKind::String);
        strings.push("x").unwrap();
        assert_eq!(
            list.append(&mut strings),
            Err(Error::KindMismatch {
                expected: ElementKind::Int,
                found: ElementKind::String,
            })
        );

        assert_eq!(list.to_string(), "[1, 2]");
        assert_eq!(strings.len(), 1);
    }

    #[test]
    fn test_kind_checked_before_index() {
        let mut list = int_list(&[1]);

        assert!(matches!(
            list.set(5, "five"),
            Err(Error::KindMismatch { .. })
        ));
        assert_eq!(
            list.set(5, 5),
            Err(Error::IndexOutOfBounds { index: 5, len: 1 })
        );
    }

    #[test]
    fn test_int_scenario() {
        init_logging();

        let mut list = int_list(&[10, 20, 30]);
        assert_eq!(list.to_string(), "[10, 20, 30]");

        assert_eq!(list.pick(1), Ok(Some(OwnedValue::Int(20))));
        assert_eq!(list.to_string(), "[10, 30]");

        list.insert(1, 99).unwrap();
        assert_eq!(list.to_string(), "[10, 99, 30]");

        assert_eq!(list.pop(), Some(OwnedValue::Int(10)));
        assert_eq!(list.to_string(), "[99, 30]");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_insert_front_and_back() {
        let values: [Value<'_>; 5] = [
            Value::Int(7),
            Value::String("seven"),
            Value::Float(7.5),
            Value::Double(-7.25),
            Value::Opaque(Opaque::new(&7u8).erase()),
        ];

        for value in values {
            let mut list = List::new(value.kind());
            list.push(value).unwrap();

            list.insert(0, value).unwrap();
            assert_eq!(list.get(0), Ok(value));

            let len = list.len();
            list.insert(len, value).unwrap();
            assert_eq!(list.back(), Some(value));
            assert_eq!(list.len(), 3);
        }
    }

    #[test]
    fn test_string_list() {
        let mut list = List::new(ElementKind::String);
        let source = String::from("borrowed");

        list.push(&source).unwrap();
        list.push("second").unwrap();
        drop(source);

        assert_eq!(list.get(0), Ok(Value::String("borrowed")));

        list.set(0, "first").unwrap();
        assert_eq!(list.to_string(), "[\"first\", \"second\"]");

        assert_eq!(
            list.pick(1),
            Ok(Some(OwnedValue::String(String::from("second"))))
        );
        list.remove(0).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.pop(), None);
        assert_eq!(list.pick(0), Ok(None));
        assert_eq!(
            list.pick(2),
            Err(Error::IndexOutOfBounds { index: 2, len: 0 })
        );
    }

    #[test]
    fn test_float_rendering() {
        let mut floats = List::new(ElementKind::Float);
        floats.push(1.5f32).unwrap();
        floats.push(-0.25f32).unwrap();
        assert_eq!(floats.to_string(), "[1.50, -0.25]");

        let mut doubles = List::new(ElementKind::Double);
        doubles.push(3.0).unwrap();
        assert_eq!(doubles.to_string(), "[3.00]");
    }

    #[test]
    fn test_duplicate() {
        let mut list = int_list(&[1, 2, 3]);
        let mut copy = list.duplicate();

        copy.set(1, 20).unwrap();
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_eq!(copy.to_string(), "[1, 20, 3]");

        list.clear();
        assert_eq!(copy.len(), 3);

        let targets = [1u64, 2];
        let mut opaque = List::new(ElementKind::Opaque);

        for target in &targets {
            opaque.push(Opaque::new(target).erase()).unwrap();
        }

        let shallow = opaque.clone();
        assert!(opaque.iter().eq(shallow.iter()));
        assert_eq!(
            shallow.get(1),
            Ok(Value::Opaque(Opaque::new(&targets[1]).erase()))
        );
    }

    #[test]
    fn test_duplicate_owning_kinds() {
        let cases = [
            (Value::Int(1), Value::Int(2)),
            (Value::String("one"), Value::String("two")),
            (Value::Float(1.5), Value::Float(2.5)),
            (Value::Double(-1.25), Value::Double(8.0)),
        ];

        for (original, replacement) in cases {
            let mut list = List::new(original.kind());
            list.push(original).unwrap();
            list.push(original).unwrap();

            let mut copy = list.duplicate();
            copy.set(1, replacement).unwrap();

            assert_eq!(list.get(1), Ok(original));
            assert_eq!(copy.get(0), Ok(original));
            assert_eq!(copy.get(1), Ok(replacement));

            copy.clear();
            assert_eq!(list.len(), 2);
        }
    }

    #[test]
    fn test_for_each_and_retain() {
        let mut list = int_list(&[1, 2, 3, 4]);
        let mut seen = Vec::new();

        list.for_each(|value| seen.push(value));
        assert_eq!(
            seen,
            vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
        );

        list.retain(|value| matches!(value, Value::Int(i) if i > 2));
        assert_eq!(list.to_string(), "[3, 4]");
        assert_eq!(list.front(), Some(Value::Int(3)));
    }

    #[test]
    fn test_iter() {
        let list = int_list(&[5, 6, 7]);
        let mut iter = list.iter();

        assert_eq!(iter.len(), 3);

        for expected in 5..=7 {
            assert!(iter.has_next());
            assert_eq!(iter.position(), (expected - 5) as usize);
            assert_eq!(iter.next(), Some(Value::Int(expected)));
        }

        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);

        let collected: Vec<_> = (&list).into_iter().collect();
        assert_eq!(collected.len(), 3);
    }

    #[test]
    fn test_out_of_range() {
        init_logging();

        let mut list = int_list(&[1, 2, 3]);
        let error = Error::IndexOutOfBounds { index: 3, len: 3 };

        assert_eq!(list.get(3), Err(error));
        assert_eq!(list.set(3, 0), Err(error));
        assert_eq!(list.remove(3), Err(error));
        assert_eq!(list.pick(3), Err(error));
        assert_eq!(
            list.insert(4, 0),
            Err(Error::IndexOutOfBounds { index: 4, len: 3 })
        );

        assert_eq!(list.to_string(), "[1, 2, 3]");
    }
}
