//! Minimal engine core
//!
//! This module stands in for the underlying runtime: it owns the object
//! heap, defines the support types the embedding API traffics in, and
//! exposes the inspection surface embedders (and tests) use to observe
//! constructed objects.
//!
//! The raw construction API lives in [`api`] and ships in two mutually
//! exclusive generations selected at compile time; see that module.
//!
//! # Threading
//! A [`Context`] and every handle created in it belong to one thread.
//! `Context` is `!Send` and `!Sync` by construction (external-pointer
//! payloads), so the compiler enforces the engine's threading contract.

pub(crate) mod api;
mod heap;

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::handle::RawHandle;

pub(crate) use heap::Cell;
pub use heap::{ClassId, IntRepr};

/// Length sentinel meaning "scan the buffer for a zero terminator"
///
/// The engine's own convention; construction forwards it bit-for-bit and
/// never reinterprets it.
pub const AUTO_LENGTH: i32 = -1;

/// Native callback attached to a function template
///
/// Invocation glue is out of scope for this layer; the callback is stored
/// on the template and handed back to the engine verbatim.
pub type FunctionCallback = fn(&mut Context, &[RawHandle]) -> RawHandle;

/// Regular expression flag set
///
/// A plain bitset in the engine's own encoding. `GLOBAL` affects matching
/// state, not compilation; `IGNORE_CASE` and `MULTILINE` change how the
/// pattern compiles.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct RegExpFlags(u8);

impl RegExpFlags {
    /// No flags
    pub const NONE: RegExpFlags = RegExpFlags(0);
    /// `g` - global matching
    pub const GLOBAL: RegExpFlags = RegExpFlags(1);
    /// `i` - case-insensitive matching
    pub const IGNORE_CASE: RegExpFlags = RegExpFlags(2);
    /// `m` - `^`/`$` match line boundaries
    pub const MULTILINE: RegExpFlags = RegExpFlags(4);

    /// Check if every flag in `other` is set
    #[inline]
    pub const fn contains(self, other: RegExpFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Raw bit pattern
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for RegExpFlags {
    type Output = RegExpFlags;

    fn bitor(self, rhs: RegExpFlags) -> RegExpFlags {
        RegExpFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegExpFlags {
    fn bitor_assign(&mut self, rhs: RegExpFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for RegExpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegExpFlags(")?;
        let mut sep = "";
        for (flag, name) in [
            (RegExpFlags::GLOBAL, "g"),
            (RegExpFlags::IGNORE_CASE, "i"),
            (RegExpFlags::MULTILINE, "m"),
        ] {
            if self.contains(flag) {
                write!(f, "{}{}", sep, name)?;
                sep = "|";
            }
        }
        write!(f, ")")
    }
}

/// Origin metadata attached to a compiled script
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptOrigin {
    /// Resource name, typically a file name or URL
    pub resource_name: String,
    /// Zero-based line offset of the script within its resource
    pub line_offset: i32,
    /// Zero-based column offset of the script's first line
    pub column_offset: i32,
}

impl ScriptOrigin {
    /// Create an origin with zero offsets
    pub fn new(resource_name: impl Into<String>) -> Self {
        ScriptOrigin {
            resource_name: resource_name.into(),
            line_offset: 0,
            column_offset: 0,
        }
    }

    /// Create an origin with explicit offsets
    pub fn with_offsets(
        resource_name: impl Into<String>,
        line_offset: i32,
        column_offset: i32,
    ) -> Self {
        ScriptOrigin {
            resource_name: resource_name.into(),
            line_offset,
            column_offset,
        }
    }
}

/// Error raised by an engine construction primitive
///
/// Construction itself cannot fail at the dispatch layer; the only
/// failures are the engine's own, reported through its pending-exception
/// convention and forwarded untouched.
#[derive(Debug)]
pub enum EngineError {
    /// Regular expression pattern rejected by the engine's compiler
    BadRegExp {
        /// The offending pattern source
        pattern: String,
        /// The compiler's own message
        detail: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::BadRegExp { pattern, detail } => {
                write!(f, "invalid regular expression /{}/: {}", pattern, detail)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Engine execution context
///
/// Owns the object heap and the pending-exception slot. All construction
/// primitives allocate into the context's heap and return a [`RawHandle`];
/// the context decides the lifetime of everything it allocates.
pub struct Context {
    heap: heap::Heap,
    pending_exception: Option<EngineError>,
}

impl Context {
    /// Create a new context with an empty heap
    pub fn new() -> Self {
        Context {
            heap: heap::Heap::new(),
            pending_exception: None,
        }
    }

    /// Create a new context with heap space reserved for `cells` objects
    pub fn with_capacity(cells: usize) -> Self {
        Context {
            heap: heap::Heap::with_capacity(cells),
            pending_exception: None,
        }
    }

    /// Allocate one heap cell
    #[inline]
    pub(crate) fn alloc(&mut self, cell: Cell) -> RawHandle {
        self.heap.alloc(cell)
    }

    /// Look up a heap cell
    #[inline]
    pub(crate) fn cell(&self, handle: RawHandle) -> Option<&Cell> {
        self.heap.get(handle)
    }

    /// Record a pending exception
    pub(crate) fn throw(&mut self, error: EngineError) {
        self.pending_exception = Some(error);
    }

    /// Number of objects on the heap
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Check whether an exception is pending
    pub fn has_pending_exception(&self) -> bool {
        self.pending_exception.is_some()
    }

    /// Take the pending exception, clearing it
    pub fn take_exception(&mut self) -> Option<EngineError> {
        self.pending_exception.take()
    }

    // Inspection

    /// Get the runtime class of an object, or None for the empty handle
    pub fn class_of(&self, handle: RawHandle) -> Option<ClassId> {
        Some(self.cell(handle)?.class())
    }

    /// Get a primitive boolean's value
    pub fn bool_value(&self, handle: RawHandle) -> Option<bool> {
        match self.cell(handle)? {
            Cell::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get a boxed boolean's value
    pub fn boolean_object_value(&self, handle: RawHandle) -> Option<bool> {
        match self.cell(handle)? {
            Cell::BoolObject(b) => Some(*b),
            _ => None,
        }
    }

    /// Get a primitive number's value
    pub fn number_value(&self, handle: RawHandle) -> Option<f64> {
        match self.cell(handle)? {
            Cell::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Get a boxed number's value
    pub fn number_object_value(&self, handle: RawHandle) -> Option<f64> {
        match self.cell(handle)? {
            Cell::NumObject(n) => Some(*n),
            _ => None,
        }
    }

    /// Get a date's milliseconds-since-epoch value
    pub fn date_value(&self, handle: RawHandle) -> Option<f64> {
        match self.cell(handle)? {
            Cell::Date(ms) => Some(*ms),
            _ => None,
        }
    }

    /// Get an integer's value, whichever subtype it went through
    pub fn integer_value(&self, handle: RawHandle) -> Option<i64> {
        match self.cell(handle)? {
            Cell::Int { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Get an integer's value truncated to i32
    pub fn int32_value(&self, handle: RawHandle) -> Option<i32> {
        self.integer_value(handle).map(|v| v as i32)
    }

    /// Get an integer's value truncated to u32
    pub fn uint32_value(&self, handle: RawHandle) -> Option<u32> {
        self.integer_value(handle).map(|v| v as u32)
    }

    /// Get which conversion primitive produced an integer cell
    pub fn int_repr(&self, handle: RawHandle) -> Option<IntRepr> {
        match self.cell(handle)? {
            Cell::Int { repr, .. } => Some(*repr),
            _ => None,
        }
    }

    /// Get a primitive string's content
    pub fn string_value(&self, handle: RawHandle) -> Option<&str> {
        match self.cell(handle)? {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the primitive string a boxed string wraps
    pub fn string_object_value(&self, handle: RawHandle) -> Option<RawHandle> {
        match self.cell(handle)? {
            Cell::StrObject(inner) => Some(*inner),
            _ => None,
        }
    }

    /// Get an array's length
    pub fn array_length(&self, handle: RawHandle) -> Option<u32> {
        match self.cell(handle)? {
            Cell::Array { length } => Some(*length),
            _ => None,
        }
    }

    /// Get an external's wrapped pointer
    pub fn external_value(&self, handle: RawHandle) -> Option<*mut std::ffi::c_void> {
        match self.cell(handle)? {
            Cell::External(ptr) => Some(*ptr),
            _ => None,
        }
    }

    /// Get a regular expression's pattern source
    pub fn regexp_source(&self, handle: RawHandle) -> Option<&str> {
        match self.cell(handle)? {
            Cell::RegExp { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Get a regular expression's flag set
    pub fn regexp_flags(&self, handle: RawHandle) -> Option<RegExpFlags> {
        match self.cell(handle)? {
            Cell::RegExp { flags, .. } => Some(*flags),
            _ => None,
        }
    }

    /// Test a regular expression against a string
    pub fn regexp_test(&self, handle: RawHandle, text: &str) -> Option<bool> {
        match self.cell(handle)? {
            Cell::RegExp { compiled, .. } => Some(compiled.is_match(text)),
            _ => None,
        }
    }

    /// Get a bound script's source text
    pub fn script_source(&self, handle: RawHandle) -> Option<&str> {
        match self.cell(handle)? {
            Cell::Script { source_text, .. } => Some(source_text),
            _ => None,
        }
    }

    /// Get a bound script's origin, if one was supplied
    pub fn script_origin(&self, handle: RawHandle) -> Option<&ScriptOrigin> {
        match self.cell(handle)? {
            Cell::Script { origin, .. } => origin.as_ref(),
            _ => None,
        }
    }

    /// Get an unbound script's source text
    #[cfg(not(feature = "legacy-api"))]
    pub fn unbound_script_source(&self, handle: RawHandle) -> Option<&str> {
        match self.cell(handle)? {
            Cell::UnboundScript { source_text, .. } => Some(source_text),
            _ => None,
        }
    }

    /// Get an unbound script's origin, if one was supplied
    #[cfg(not(feature = "legacy-api"))]
    pub fn unbound_script_origin(&self, handle: RawHandle) -> Option<&ScriptOrigin> {
        match self.cell(handle)? {
            Cell::UnboundScript { origin, .. } => origin.as_ref(),
            _ => None,
        }
    }

    /// Get a signature's receiver template handle (possibly empty)
    pub fn signature_receiver(&self, handle: RawHandle) -> Option<RawHandle> {
        match self.cell(handle)? {
            Cell::Signature { receiver, .. } => Some(*receiver),
            _ => None,
        }
    }

    /// Get a signature's parameter template handles
    pub fn signature_parameters(&self, handle: RawHandle) -> Option<&[RawHandle]> {
        match self.cell(handle)? {
            Cell::Signature { parameters, .. } => Some(parameters),
            _ => None,
        }
    }

    /// Check whether a function template carries a callback
    pub fn template_has_callback(&self, handle: RawHandle) -> Option<bool> {
        match self.cell(handle)? {
            Cell::FunctionTemplate { callback, .. } => Some(callback.is_some()),
            _ => None,
        }
    }

    /// Get a function template's associated data handle (possibly empty)
    pub fn template_data(&self, handle: RawHandle) -> Option<RawHandle> {
        match self.cell(handle)? {
            Cell::FunctionTemplate { data, .. } => Some(*data),
            _ => None,
        }
    }

    /// Get a function template's signature handle (possibly empty)
    pub fn template_signature(&self, handle: RawHandle) -> Option<RawHandle> {
        match self.cell(handle)? {
            Cell::FunctionTemplate { signature, .. } => Some(*signature),
            _ => None,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
