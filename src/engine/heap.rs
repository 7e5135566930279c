//! Engine heap cells
//!
//! Each constructed object occupies one heap cell. Cells carry the payload
//! the engine needs to service inspection and later operations on the
//! object; construction never shares or mutates cells after allocation.

use crate::handle::RawHandle;

use super::{FunctionCallback, RegExpFlags, ScriptOrigin};

/// Engine class tags
///
/// These identify the runtime class of a heap object. Every construction
/// primitive allocates a cell of exactly one class.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassId {
    /// Array
    Array = 0,
    /// Primitive boolean
    Boolean = 1,
    /// Boxed Boolean
    BooleanObject = 2,
    /// Date object
    Date = 3,
    /// Opaque external pointer
    External = 4,
    /// Function template
    FunctionTemplate = 5,
    /// Generic integer
    Integer = 6,
    /// Signed 32-bit integer
    Int32 = 7,
    /// Unsigned 32-bit integer
    Uint32 = 8,
    /// Primitive number
    Number = 9,
    /// Boxed Number
    NumberObject = 10,
    /// Plain object
    Object = 11,
    /// RegExp object
    RegExp = 12,
    /// Context-bound compiled script
    Script = 13,
    /// Call signature
    Signature = 14,
    /// Primitive string
    String = 15,
    /// Boxed String
    StringObject = 16,
    /// Compiled script not yet bound to a context
    #[cfg(not(feature = "legacy-api"))]
    UnboundScript = 17,
}

/// Which conversion primitive produced an integer cell
///
/// The engine exposes three distinct integer conversions; this records
/// which one a cell went through, so the routing is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntRepr {
    /// Allocated raw, not yet routed through a subtype conversion
    Wide,
    /// Produced by the signed 32-bit conversion
    I32,
    /// Produced by the unsigned 32-bit conversion
    U32,
}

/// Payload of one heap object
#[derive(Debug)]
pub(crate) enum Cell {
    Array {
        length: u32,
    },
    Bool(bool),
    BoolObject(bool),
    Date(f64),
    External(*mut std::ffi::c_void),
    FunctionTemplate {
        callback: Option<FunctionCallback>,
        data: RawHandle,
        signature: RawHandle,
    },
    Int {
        value: i64,
        repr: IntRepr,
    },
    Num(f64),
    NumObject(f64),
    Object,
    RegExp {
        source: String,
        flags: RegExpFlags,
        compiled: regex::Regex,
    },
    Script {
        source_text: String,
        origin: Option<ScriptOrigin>,
    },
    Signature {
        receiver: RawHandle,
        parameters: Vec<RawHandle>,
    },
    Str(String),
    StrObject(RawHandle),
    #[cfg(not(feature = "legacy-api"))]
    UnboundScript {
        source_text: String,
        origin: Option<ScriptOrigin>,
    },
}

impl Cell {
    /// Get the class tag for this payload
    pub(crate) fn class(&self) -> ClassId {
        match self {
            Cell::Array { .. } => ClassId::Array,
            Cell::Bool(_) => ClassId::Boolean,
            Cell::BoolObject(_) => ClassId::BooleanObject,
            Cell::Date(_) => ClassId::Date,
            Cell::External(_) => ClassId::External,
            Cell::FunctionTemplate { .. } => ClassId::FunctionTemplate,
            Cell::Int { repr, .. } => match repr {
                IntRepr::Wide => ClassId::Integer,
                IntRepr::I32 => ClassId::Int32,
                IntRepr::U32 => ClassId::Uint32,
            },
            Cell::Num(_) => ClassId::Number,
            Cell::NumObject(_) => ClassId::NumberObject,
            Cell::Object => ClassId::Object,
            Cell::RegExp { .. } => ClassId::RegExp,
            Cell::Script { .. } => ClassId::Script,
            Cell::Signature { .. } => ClassId::Signature,
            Cell::Str(_) => ClassId::String,
            Cell::StrObject(_) => ClassId::StringObject,
            #[cfg(not(feature = "legacy-api"))]
            Cell::UnboundScript { .. } => ClassId::UnboundScript,
        }
    }
}

/// The engine's object heap
///
/// A grow-only slot vector. Reclamation is the engine's concern and out of
/// scope here; construction only ever appends.
#[derive(Debug, Default)]
pub(crate) struct Heap {
    cells: Vec<Cell>,
}

impl Heap {
    pub(crate) fn new() -> Self {
        Heap { cells: Vec::new() }
    }

    pub(crate) fn with_capacity(cells: usize) -> Self {
        Heap {
            cells: Vec::with_capacity(cells),
        }
    }

    /// Allocate one cell and return its handle
    #[inline]
    pub(crate) fn alloc(&mut self, cell: Cell) -> RawHandle {
        self.cells.push(cell);
        RawHandle::from_index(self.cells.len() - 1)
    }

    /// Look up a cell, returning None for the empty handle
    #[inline]
    pub(crate) fn get(&self, handle: RawHandle) -> Option<&Cell> {
        self.cells.get(handle.index()?)
    }

    /// Number of live cells
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}
