//! Typed handles to engine-owned objects
//!
//! A handle is the engine's own reference to an object on its heap; the
//! engine alone manages the object's lifetime. `RawHandle` is the untyped
//! word-sized reference the raw embedding API traffics in, and `Local<T>`
//! layers a compile-time kind tag on top so that construction calls are
//! typed end to end without any runtime cost.
//!
//! # Handle encoding
//! - 0: the empty handle (no object; the engine's error/default convention)
//! - n > 0: heap slot `n - 1`

use std::fmt;
use std::marker::PhantomData;

/// Untyped reference to an engine heap object
///
/// A `RawHandle` is a plain index wrapper. It carries no lifetime or
/// ownership; the referenced object lives exactly as long as the engine
/// keeps it alive.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RawHandle(u32);

impl RawHandle {
    /// The empty handle, referencing no object
    pub const EMPTY: RawHandle = RawHandle(0);

    /// Check if this handle references no object
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Create a handle from a heap slot index
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        RawHandle(index as u32 + 1)
    }

    /// Get the heap slot index, or None for the empty handle
    #[inline]
    pub(crate) const fn index(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0 as usize - 1)
        }
    }
}

impl fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Empty")
        } else {
            write!(f, "Handle({})", self.0 - 1)
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for the closed set of object kinds
///
/// Implemented only by the uninhabited kind markers in this module; the
/// set is fixed at compile time and cannot be extended by callers.
pub trait HandleKind: sealed::Sealed + Sized {
    /// Kind name used in diagnostics
    const NAME: &'static str;
}

macro_rules! handle_kinds {
    ($($(#[doc = $doc:expr])* $kind:ident),+ $(,)?) => {
        $(
            $(#[doc = $doc])*
            pub enum $kind {}

            impl sealed::Sealed for $kind {}

            impl HandleKind for $kind {
                const NAME: &'static str = stringify!($kind);
            }
        )+
    };
}

handle_kinds! {
    /// An array object
    Array,
    /// A primitive boolean
    Boolean,
    /// A boxed boolean object
    BooleanObject,
    /// A date object (milliseconds since the epoch)
    Date,
    /// An opaque pointer wrapped as an engine object
    External,
    /// A template from which native-backed functions are instantiated
    FunctionTemplate,
    /// A generic integer
    Integer,
    /// A signed 32-bit integer
    Int32,
    /// An unsigned 32-bit integer
    Uint32,
    /// A primitive number
    Number,
    /// A boxed number object
    NumberObject,
    /// A plain object
    Object,
    /// A compiled regular expression object
    RegExp,
    /// A script bound to the context it was compiled in
    Script,
    /// A call signature restricting which receivers a function accepts
    Signature,
    /// A primitive string
    String,
    /// A boxed string object
    StringObject,
    /// Any engine value; the erased kind used for data slots
    Value,
}

/// A script compiled without being bound to a context
///
/// Only the current engine API generation can represent an unbound script;
/// under the `legacy-api` feature this kind does not exist and any attempt
/// to instantiate it is a compile error.
#[cfg(not(feature = "legacy-api"))]
pub enum UnboundScript {}

#[cfg(not(feature = "legacy-api"))]
impl sealed::Sealed for UnboundScript {}

#[cfg(not(feature = "legacy-api"))]
impl HandleKind for UnboundScript {
    const NAME: &'static str = "UnboundScript";
}

/// A typed handle to an engine-owned object
///
/// `Local<T>` is a `RawHandle` plus a zero-sized kind tag. It is `Copy`
/// and never outlives or extends the underlying object: dropping a local
/// has no effect on the engine's heap.
#[repr(transparent)]
pub struct Local<T: HandleKind> {
    raw: RawHandle,
    _kind: PhantomData<T>,
}

impl<T: HandleKind> Local<T> {
    /// Wrap a raw handle produced by a construction call for kind `T`
    #[inline]
    pub(crate) const fn from_raw(raw: RawHandle) -> Self {
        Local {
            raw,
            _kind: PhantomData,
        }
    }

    /// The empty local, referencing no object
    #[inline]
    pub const fn empty() -> Self {
        Local::from_raw(RawHandle::EMPTY)
    }

    /// Get the untyped handle
    #[inline]
    pub const fn raw(self) -> RawHandle {
        self.raw
    }

    /// Check if this local references no object
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.raw.is_empty()
    }

    /// Erase the kind tag
    ///
    /// Used where the engine accepts any value, e.g. a function template's
    /// associated data slot.
    #[inline]
    pub const fn upcast(self) -> Local<Value> {
        Local::from_raw(self.raw)
    }
}

impl<T: HandleKind> Clone for Local<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: HandleKind> Copy for Local<T> {}

impl<T: HandleKind> PartialEq for Local<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: HandleKind> Eq for Local<T> {}

impl<T: HandleKind> fmt::Debug for Local<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Local<{}>({:?})", T::NAME, self.raw)
    }
}
