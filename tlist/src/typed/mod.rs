// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A singly linked list with the element kind as a type parameter.
//!
//! [`TypedList<E>`] accepts exactly one of the supported element kinds as `E`:
//!
//! | Kind | `E` | Inserted as | Owned by the list |
//! |---|---|---|---|
//! | Opaque | [`Opaque<T>`] | the handle itself | no |
//! | Int | `i32` | the value | yes |
//! | String | `String` | `&str` (copied) | yes |
//! | Float | `f32` | the value | yes |
//! | Double | `f64` | the value | yes |
//!
//! Owned values are released when they are removed via [`TypedList::remove`] or
//! [`TypedList::clear`], or when the list is dropped.
//! [`TypedList::pop`] and [`TypedList::pick`] hand ownership to the caller instead.
//!
//! ```
//! use tlist::{Opaque, TypedList};
//!
//! let mut names = TypedList::<String>::new();
//! names.push("ada");
//! names.insert(0, "grace").unwrap();
//! assert_eq!(names.get(1).unwrap(), "ada");
//!
//! let sensors = [1.5f32, 2.5];
//! let mut handles = TypedList::<Opaque<f32>>::new();
//! handles.push(Opaque::new(&sensors[0]));
//!
//! // Duplicating an opaque list only copies the addresses.
//! let copy = handles.duplicate();
//! assert_eq!(copy.front(), handles.front());
//! ```
//!
//! [`Opaque<T>`]: crate::Opaque

mod base;
mod iter;

pub use base::*;
pub use iter::*;
