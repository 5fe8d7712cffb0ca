//! Shared handles to canonical name instances.
//!
//! Uses `Arc<T>` so handles are cheap to clone (reference count increment)
//! and can be passed between threads. Equality short-circuits on pointer
//! identity, which is what pooled instances of the same identifier share.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

use crate::names::{Name, NameKind};

/// A handle to an immutable, canonical name instance.
pub struct Interned<T>(Arc<T>);

impl<T> Interned<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Process-wide instance stored in `cell`, created on first use.
    pub(crate) fn singleton(cell: &'static OnceLock<Self>, init: impl FnOnce() -> T) -> Self {
        cell.get_or_init(|| Self::new(init())).clone()
    }

    /// True if both handles point to the same instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Interned<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for Interned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Name> PartialEq for Interned<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.identifier() == other.identifier()
    }
}

impl<T: Name> Eq for Interned<T> {}

impl<T: Name> Hash for Interned<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

impl<T: Name + PartialOrd> PartialOrd for Interned<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

/// Lets sets and maps of handles be queried with a plain identifier.
impl<T: Name> Borrow<str> for Interned<T> {
    fn borrow(&self) -> &str {
        self.identifier()
    }
}

impl<T: Name> AsRef<str> for Interned<T> {
    fn as_ref(&self) -> &str {
        self.identifier()
    }
}

impl<T: Name> fmt::Display for Interned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl<T: NameKind> fmt::Debug for Interned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("{:?}", T::KIND))
            .field(&self.identifier())
            .finish()
    }
}

/// Handles persist as their identifier string.
#[cfg(feature = "serde")]
impl<T: Name> serde::Serialize for Interned<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}
