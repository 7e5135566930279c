//! Current-generation embedding API
//!
//! Construction functions take the context first and data before length.
//! Boxed primitives are built directly from scalars; scripts compile in
//! two steps (an unbound script, then a bind to the context).

use crate::handle::RawHandle;

use super::super::{Cell, Context, FunctionCallback, IntRepr, RegExpFlags, ScriptOrigin};
use super::{alloc_regexp, resolve_len};

pub(crate) fn new_array(cx: &mut Context, length: i32) -> RawHandle {
    cx.alloc(Cell::Array {
        length: length.max(0) as u32,
    })
}

pub(crate) fn new_boolean(cx: &mut Context, value: bool) -> RawHandle {
    cx.alloc(Cell::Bool(value))
}

/// Boxed boolean, built directly from the scalar
pub(crate) fn new_boolean_object(cx: &mut Context, value: bool) -> RawHandle {
    cx.alloc(Cell::BoolObject(value))
}

pub(crate) fn new_date(cx: &mut Context, time: f64) -> RawHandle {
    cx.alloc(Cell::Date(time))
}

pub(crate) fn new_external(cx: &mut Context, value: *mut std::ffi::c_void) -> RawHandle {
    cx.alloc(Cell::External(value))
}

pub(crate) fn new_function_template(
    cx: &mut Context,
    callback: Option<FunctionCallback>,
    data: RawHandle,
    signature: RawHandle,
) -> RawHandle {
    cx.alloc(Cell::FunctionTemplate {
        callback,
        data,
        signature,
    })
}

pub(crate) fn new_number(cx: &mut Context, value: f64) -> RawHandle {
    cx.alloc(Cell::Num(value))
}

/// Boxed number, built directly from the scalar
pub(crate) fn new_number_object(cx: &mut Context, value: f64) -> RawHandle {
    cx.alloc(Cell::NumObject(value))
}

/// Allocate a raw integer; subtype routing happens via the `to_*` conversions
pub(crate) fn new_integer(cx: &mut Context, value: i64) -> RawHandle {
    cx.alloc(Cell::Int {
        value,
        repr: IntRepr::Wide,
    })
}

/// Generic-integer conversion
pub(crate) fn to_integer(cx: &mut Context, handle: RawHandle) -> RawHandle {
    let value = cx.integer_value(handle).unwrap_or(0);
    cx.alloc(Cell::Int {
        value,
        repr: IntRepr::Wide,
    })
}

/// Signed 32-bit conversion
pub(crate) fn to_int32(cx: &mut Context, handle: RawHandle) -> RawHandle {
    let value = cx.integer_value(handle).unwrap_or(0) as i32;
    cx.alloc(Cell::Int {
        value: value as i64,
        repr: IntRepr::I32,
    })
}

/// Unsigned 32-bit conversion
pub(crate) fn to_uint32(cx: &mut Context, handle: RawHandle) -> RawHandle {
    let value = cx.integer_value(handle).unwrap_or(0) as u32;
    cx.alloc(Cell::Int {
        value: value as i64,
        repr: IntRepr::U32,
    })
}

pub(crate) fn new_object(cx: &mut Context) -> RawHandle {
    cx.alloc(Cell::Object)
}

pub(crate) fn new_regexp(
    cx: &mut Context,
    pattern: RawHandle,
    flags: RegExpFlags,
) -> RawHandle {
    alloc_regexp(cx, pattern, flags)
}

/// Compile a source string to an unbound script
pub(crate) fn compile_unbound(
    cx: &mut Context,
    source: RawHandle,
    origin: Option<&ScriptOrigin>,
) -> RawHandle {
    let source_text = cx.string_value(source).unwrap_or_default().to_owned();
    cx.alloc(Cell::UnboundScript {
        source_text,
        origin: origin.cloned(),
    })
}

/// Bind an unbound script to this context
pub(crate) fn bind_script(cx: &mut Context, unbound: RawHandle) -> RawHandle {
    let (source_text, origin) = match cx.cell(unbound) {
        Some(Cell::UnboundScript {
            source_text,
            origin,
        }) => (source_text.clone(), origin.clone()),
        _ => (String::new(), None),
    };
    cx.alloc(Cell::Script {
        source_text,
        origin,
    })
}

pub(crate) fn new_string_utf8(cx: &mut Context, data: &[u8], length: i32) -> RawHandle {
    let len = resolve_len(data, length);
    let text = String::from_utf8_lossy(&data[..len]).into_owned();
    cx.alloc(Cell::Str(text))
}

/// One-byte string: each byte is a code point U+0000..U+00FF
pub(crate) fn new_string_latin1(cx: &mut Context, data: &[u8], length: i32) -> RawHandle {
    let len = resolve_len(data, length);
    let text: String = data[..len].iter().map(|&b| b as char).collect();
    cx.alloc(Cell::Str(text))
}

pub(crate) fn new_string_two_byte(cx: &mut Context, data: &[u16], length: i32) -> RawHandle {
    let len = resolve_len(data, length);
    let text = String::from_utf16_lossy(&data[..len]);
    cx.alloc(Cell::Str(text))
}

pub(crate) fn new_string_object(cx: &mut Context, value: RawHandle) -> RawHandle {
    cx.alloc(Cell::StrObject(value))
}

pub(crate) fn new_signature(
    cx: &mut Context,
    receiver: RawHandle,
    parameters: &[RawHandle],
) -> RawHandle {
    cx.alloc(Cell::Signature {
        receiver,
        parameters: parameters.to_vec(),
    })
}
