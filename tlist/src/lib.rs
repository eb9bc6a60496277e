// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A singly linked list whose element kind is fixed at creation time.
//!
//! Five element kinds are supported: opaque pointers ([`Opaque`]), integers (`i32`),
//! strings (`String`), and single- and double-precision floats (`f32`, `f64`).
//! Every kind except [`Opaque`] is owned by the list: values are copied in on insertion,
//! handed back to the caller on removal, and released on teardown.
//! An [`Opaque`] list only stores addresses and never releases the data behind them.
//!
//! There are two ways to use the list:
//!
//! * [`TypedList`] takes the element kind as a type parameter, so pushing a value of the
//!   wrong kind fails to compile:
//!
//! ```
//! use tlist::TypedList;
//!
//! let mut list = TypedList::<i32>::new();
//! list.push(10);
//! list.push(20);
//! list.push(30);
//! assert_eq!(list.to_string(), "[10, 20, 30]");
//!
//! assert_eq!(list.pick(1).unwrap(), Some(20));
//! assert_eq!(list.to_string(), "[10, 30]");
//! ```
//!
//! * [`List`] is created from a runtime [`ElementKind`] and accepts tagged [`Value`]s,
//!   checking the kind once when a value enters the list:
//!
//! ```
//! use tlist::{ElementKind, Error, List};
//!
//! let mut list = List::new(ElementKind::String);
//! list.push("hello").unwrap();
//! assert_eq!(
//!     list.push(42),
//!     Err(Error::KindMismatch {
//!         expected: ElementKind::String,
//!         found: ElementKind::Int,
//!     })
//! );
//! assert_eq!(list.to_string(), "[\"hello\"]");
//! ```

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod kind;
mod list;
mod opaque;
mod private;
pub mod typed;
mod value;

pub use error::*;
pub use kind::*;
pub use list::*;
pub use opaque::*;
pub use typed::{Iter, TypedList};
pub use value::*;
