//! Legacy-generation embedding API
//!
//! The older API surface: `make_*` naming, length-before-data string
//! arguments, flags-before-pattern regular expressions, boxed primitives
//! built by wrapping an existing primitive handle, and one-step script
//! compilation. Unbound scripts do not exist in this generation.

use crate::handle::RawHandle;

use super::super::{Cell, Context, FunctionCallback, IntRepr, RegExpFlags, ScriptOrigin};
use super::{alloc_regexp, resolve_len};

pub(crate) fn make_array(cx: &mut Context, length: i32) -> RawHandle {
    cx.alloc(Cell::Array {
        length: length.max(0) as u32,
    })
}

pub(crate) fn make_boolean(cx: &mut Context, value: bool) -> RawHandle {
    cx.alloc(Cell::Bool(value))
}

/// Boxed boolean, built by wrapping an existing primitive handle
pub(crate) fn wrap_boolean(cx: &mut Context, primitive: RawHandle) -> RawHandle {
    let value = cx.bool_value(primitive).unwrap_or(false);
    cx.alloc(Cell::BoolObject(value))
}

pub(crate) fn make_date(cx: &mut Context, time: f64) -> RawHandle {
    cx.alloc(Cell::Date(time))
}

pub(crate) fn make_external(cx: &mut Context, value: *mut std::ffi::c_void) -> RawHandle {
    cx.alloc(Cell::External(value))
}

pub(crate) fn make_function_template(
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

pub(crate) fn make_number(cx: &mut Context, value: f64) -> RawHandle {
    cx.alloc(Cell::Num(value))
}

/// Boxed number, built by wrapping an existing primitive handle
pub(crate) fn wrap_number(cx: &mut Context, primitive: RawHandle) -> RawHandle {
    let value = cx.number_value(primitive).unwrap_or(f64::NAN);
    cx.alloc(Cell::NumObject(value))
}

/// Allocate a raw integer; subtype routing happens via the `cast_*` conversions
pub(crate) fn make_integer(cx: &mut Context, value: i64) -> RawHandle {
    cx.alloc(Cell::Int {
        value,
        repr: IntRepr::Wide,
    })
}

/// Generic-integer conversion
pub(crate) fn cast_integer(cx: &mut Context, handle: RawHandle) -> RawHandle {
    let value = cx.integer_value(handle).unwrap_or(0);
    cx.alloc(Cell::Int {
        value,
        repr: IntRepr::Wide,
    })
}

/// Signed 32-bit conversion
pub(crate) fn cast_int32(cx: &mut Context, handle: RawHandle) -> RawHandle {
    let value = cx.integer_value(handle).unwrap_or(0) as i32;
    cx.alloc(Cell::Int {
        value: value as i64,
        repr: IntRepr::I32,
    })
}

/// Unsigned 32-bit conversion
pub(crate) fn cast_uint32(cx: &mut Context, handle: RawHandle) -> RawHandle {
    let value = cx.integer_value(handle).unwrap_or(0) as u32;
    cx.alloc(Cell::Int {
        value: value as i64,
        repr: IntRepr::U32,
    })
}

pub(crate) fn make_object(cx: &mut Context) -> RawHandle {
    cx.alloc(Cell::Object)
}

/// Flags come before the pattern in this generation
pub(crate) fn make_regexp(
    cx: &mut Context,
    flags: RegExpFlags,
    pattern: RawHandle,
) -> RawHandle {
    alloc_regexp(cx, pattern, flags)
}

/// One-step compilation straight to a bound script
pub(crate) fn compile_script(
    cx: &mut Context,
    source: RawHandle,
    origin: Option<&ScriptOrigin>,
) -> RawHandle {
    let source_text = cx.string_value(source).unwrap_or_default().to_owned();
    cx.alloc(Cell::Script {
        source_text,
        origin: origin.cloned(),
    })
}

pub(crate) fn make_string_utf8(cx: &mut Context, length: i32, data: &[u8]) -> RawHandle {
    let len = resolve_len(data, length);
    let text = String::from_utf8_lossy(&data[..len]).into_owned();
    cx.alloc(Cell::Str(text))
}

/// One-byte string: each byte is a code point U+0000..U+00FF
pub(crate) fn make_string_latin1(cx: &mut Context, length: i32, data: &[u8]) -> RawHandle {
    let len = resolve_len(data, length);
    let text: String = data[..len].iter().map(|&b| b as char).collect();
    cx.alloc(Cell::Str(text))
}

pub(crate) fn make_string_two_byte(cx: &mut Context, length: i32, data: &[u16]) -> RawHandle {
    let len = resolve_len(data, length);
    let text = String::from_utf16_lossy(&data[..len]);
    cx.alloc(Cell::Str(text))
}

/// Boxed string, wrapping an existing primitive string handle
pub(crate) fn wrap_string(cx: &mut Context, primitive: RawHandle) -> RawHandle {
    cx.alloc(Cell::StrObject(primitive))
}

pub(crate) fn make_signature(
    cx: &mut Context,
    receiver: RawHandle,
    parameters: &[RawHandle],
) -> RawHandle {
    cx.alloc(Cell::Signature {
        receiver,
        parameters: parameters.to_vec(),
    })
}
