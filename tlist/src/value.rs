// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

use alloc::string::String;

use crate::kind::ElementKind;
use crate::opaque::Opaque;

/// A borrowed value of any element kind.
///
/// This is what [`List`] accepts on insertion and hands out on reads.
/// Strings are borrowed: the list copies them on insertion, and reads point into the
/// list's own storage.
///
/// [`List`]: crate::List
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    /// An address of data the list does not own.
    Opaque(Opaque),
    /// An `i32` value.
    Int(i32),
    /// A string, borrowed from the caller or from the list.
    String(&'a str),
    /// An `f32` value.
    Float(f32),
    /// An `f64` value.
    Double(f64),
}

impl<'a> Value<'a> {
    /// Returns the element kind this value belongs to.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Opaque(_) => ElementKind::Opaque,
            Self::Int(_) => ElementKind::Int,
            Self::String(_) => ElementKind::String,
            Self::Float(_) => ElementKind::Float,
            Self::Double(_) => ElementKind::Double,
        }
    }

    /// Copies the value into an [`OwnedValue`].
    pub fn into_owned(self) -> OwnedValue {
        match self {
            Self::Opaque(opaque) => OwnedValue::Opaque(opaque),
            Self::Int(value) => OwnedValue::Int(value),
            Self::String(value) => OwnedValue::String(String::from(value)),
            Self::Float(value) => OwnedValue::Float(value),
            Self::Double(value) => OwnedValue::Double(value),
        }
    }
}

impl<'a> From<Opaque> for Value<'a> {
    fn from(value: Opaque) -> Self {
        Self::Opaque(value)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Self::String(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Self::String(value.as_str())
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl<'a> fmt::Display for Value<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opaque(opaque) => write!(f, "{:p}", opaque.as_ptr()),
            Self::Int(value) => write!(f, "{}", value),
            Self::String(value) => write!(f, "\"{}\"", value),
            Self::Float(value) => write!(f, "{:.2}", value),
            Self::Double(value) => write!(f, "{:.2}", value),
        }
    }
}

/// A value of any element kind, owned by the caller.
///
/// This is what [`List`] hands back when an element is removed via `pop` or `pick`.
/// An [`OwnedValue::Opaque`] still only carries an address: ownership of the data behind it
/// never passed through the list.
///
/// [`List`]: crate::List
#[derive(Clone, Debug, PartialEq)]
pub enum OwnedValue {
    /// An address of data the caller owns.
    Opaque(Opaque),
    /// An `i32` value.
    Int(i32),
    /// A string now owned by the caller.
    String(String),
    /// An `f32` value.
    Float(f32),
    /// An `f64` value.
    Double(f64),
}

impl OwnedValue {
    /// Returns the element kind this value belongs to.
    pub fn kind(&self) -> ElementKind {
        self.as_value().kind()
    }

    /// Borrows the value as a [`Value`].
    pub fn as_value(&self) -> Value<'_> {
        match self {
            Self::Opaque(opaque) => Value::Opaque(*opaque),
            Self::Int(value) => Value::Int(*value),
            Self::String(value) => Value::String(value.as_str()),
            Self::Float(value) => Value::Float(*value),
            Self::Double(value) => Value::Double(*value),
        }
    }
}

impl fmt::Display for OwnedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_value().fmt(f)
    }
}
