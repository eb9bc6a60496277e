// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::mem;

use alloc::string::String;

use crate::opaque::Opaque;
use crate::private::Sealed;
use crate::value::{OwnedValue, Value};

/// The element kind of a list, chosen when the list is created and never changed afterwards.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ElementKind {
    /// Addresses of data owned by somebody else (see [`Opaque`]).
    Opaque,
    /// `i32` values.
    Int,
    /// `String` values.
    String,
    /// `f32` values.
    Float,
    /// `f64` values.
    Double,
}

impl ElementKind {
    /// Returns the size in bytes of the representation a node stores for this kind.
    ///
    /// For [`ElementKind::String`], this is the size of the string handle and not of its content.
    pub const fn width(self) -> usize {
        match self {
            Self::Opaque => mem::size_of::<*const ()>(),
            Self::Int => mem::size_of::<i32>(),
            Self::String => mem::size_of::<String>(),
            Self::Float => mem::size_of::<f32>(),
            Self::Double => mem::size_of::<f64>(),
        }
    }

    /// Returns `true` if lists of this kind own their elements.
    ///
    /// Only [`ElementKind::Opaque`] lists don't.
    pub const fn is_owning(self) -> bool {
        !matches!(self, Self::Opaque)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Opaque => "opaque",
            Self::Int => "int",
            Self::String => "string",
            Self::Float => "float",
            Self::Double => "double",
        };

        f.write_str(name)
    }
}

/// The storage policy of an element kind.
///
/// It decides how a value is copied into a node, overwritten in place, and rendered.
/// Releasing a value is left to its `Drop` implementation: owned kinds release their storage
/// when a node is torn down, while [`Opaque`] has nothing to release.
///
/// This trait is sealed and implemented for exactly the five supported kinds:
/// [`Opaque<T>`], `i32`, `String`, `f32`, and `f64`.
/// Element types never borrow, hence the `'static` bound.
pub trait Element: Sealed + Sized + fmt::Debug + 'static {
    /// The runtime tag of this kind.
    const KIND: ElementKind;

    /// What a caller hands over to insert or overwrite an element.
    ///
    /// This is `&str` for `String` (the list copies the content) and the value itself for
    /// all other kinds.
    type Input<'a>: Copy
    where
        Self: 'a;

    /// Creates the value stored in a new node.
    fn store(input: Self::Input<'_>) -> Self;

    /// Replaces the stored value in place.
    fn overwrite(&mut self, input: Self::Input<'_>) {
        *self = Self::store(input);
    }

    /// Returns the input that would store a value equal to this one.
    fn input(&self) -> Self::Input<'_>;

    /// Returns a borrowed, kind-tagged view of this value.
    fn view(&self) -> Value<'_>;

    /// Converts this value into a kind-tagged value owned by the caller.
    fn into_owned(self) -> OwnedValue;

    /// Writes the textual rendering used when printing a list.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Sealed for i32 {}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Int;
    type Input<'a> = i32;

    fn store(input: i32) -> Self {
        input
    }

    fn input(&self) -> i32 {
        *self
    }

    fn view(&self) -> Value<'_> {
        Value::Int(*self)
    }

    fn into_owned(self) -> OwnedValue {
        OwnedValue::Int(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Sealed for String {}

impl Element for String {
    const KIND: ElementKind = ElementKind::String;
    type Input<'a> = &'a str;

    fn store(input: &str) -> Self {
        String::from(input)
    }

    fn overwrite(&mut self, input: &str) {
        // Release the old buffer before allocating the new one.
        drop(mem::take(self));
        *self = String::from(input);
    }

    fn input(&self) -> &str {
        self.as_str()
    }

    fn view(&self) -> Value<'_> {
        Value::String(self.as_str())
    }

    fn into_owned(self) -> OwnedValue {
        OwnedValue::String(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

impl Sealed for f32 {}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float;
    type Input<'a> = f32;

    fn store(input: f32) -> Self {
        input
    }

    fn input(&self) -> f32 {
        *self
    }

    fn view(&self) -> Value<'_> {
        Value::Float(*self)
    }

    fn into_owned(self) -> OwnedValue {
        OwnedValue::Float(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self)
    }
}

impl Sealed for f64 {}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Double;
    type Input<'a> = f64;

    fn store(input: f64) -> Self {
        input
    }

    fn input(&self) -> f64 {
        *self
    }

    fn view(&self) -> Value<'_> {
        Value::Double(*self)
    }

    fn into_owned(self) -> OwnedValue {
        OwnedValue::Double(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self)
    }
}

impl<T> Sealed for Opaque<T> {}

impl<T: 'static> Element for Opaque<T> {
    const KIND: ElementKind = ElementKind::Opaque;
    type Input<'a> = Opaque<T>;

    fn store(input: Opaque<T>) -> Self {
        input
    }

    fn input(&self) -> Opaque<T> {
        *self
    }

    fn view(&self) -> Value<'_> {
        Value::Opaque(self.erase())
    }

    fn into_owned(self) -> OwnedValue {
        OwnedValue::Opaque(self.erase())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", self.as_ptr())
    }
}
