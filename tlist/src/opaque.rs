// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ptr::NonNull;

/// A view-only handle to data the list does not own.
///
/// This is the element type of [`ElementKind::Opaque`] lists.
/// The list stores the address as-is: inserting an `Opaque` copies nothing, and removing or
/// tearing it down never releases the data behind it.
/// Keeping that data alive (and eventually releasing it) remains the caller's responsibility.
///
/// Two handles compare equal if they point to the same address.
///
/// [`ElementKind::Opaque`]: crate::ElementKind::Opaque
pub struct Opaque<T = ()> {
    ptr: NonNull<T>,
    phantom: PhantomData<*const T>,
}

impl<T> Opaque<T> {
    /// Creates a handle to `target`.
    ///
    /// The handle does not borrow `target`. Dereferencing it later is only valid as long as
    /// `target` is still alive, which is why [`Opaque::as_ref`] is `unsafe`.
    pub fn new(target: &T) -> Self {
        Self {
            ptr: NonNull::from(target),
            phantom: PhantomData,
        }
    }

    /// Creates a handle from a raw pointer, or returns `None` if `ptr` is null.
    pub fn from_ptr(ptr: *mut T) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self {
            ptr,
            phantom: PhantomData,
        })
    }

    /// Returns the stored address.
    pub fn as_ptr(self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Reinterprets the handle as pointing to a `U`.
    pub fn cast<U>(self) -> Opaque<U> {
        Opaque {
            ptr: self.ptr.cast(),
            phantom: PhantomData,
        }
    }

    /// Forgets the pointee type. This is how typed handles enter a [`List`].
    ///
    /// [`List`]: crate::List
    pub fn erase(self) -> Opaque {
        self.cast()
    }

    /// Returns a reference to the data behind the handle.
    ///
    /// # Safety
    ///
    /// The data must still be alive and must be a valid `T` for the whole lifetime `'a`,
    /// and it must not be mutated during that time.
    pub unsafe fn as_ref<'a>(self) -> &'a T {
        &*self.ptr.as_ptr()
    }
}

impl<T> Clone for Opaque<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Opaque<T> {}

impl<T> PartialEq for Opaque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for Opaque<T> {}

impl<T> Hash for Opaque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

impl<T> fmt::Debug for Opaque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.ptr).finish()
    }
}

impl<'a, T> From<&'a T> for Opaque<T> {
    fn from(target: &'a T) -> Self {
        Self::new(target)
    }
}
