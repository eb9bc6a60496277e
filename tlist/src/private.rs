// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Keeps the set of element kinds closed to this crate.
pub trait Sealed {}
