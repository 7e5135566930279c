//! Version-selected construction sequences
//!
//! One inner module per embedding-API generation, selected entirely at
//! compile time; both export the same uniform signatures, so nothing above
//! this module knows which generation it is running against and no call
//! branches on the version at runtime.
//!
//! Where the generations genuinely diverge, the divergence lives here:
//! boxed primitives (direct-from-scalar vs. wrap-a-primitive), string
//! argument order, regular-expression argument order, and script
//! compilation (two-step unbound+bind vs. one-step). The integer family
//! routes every raw value through the conversion primitive designated for
//! its subtype in both generations; the subtype, never the value, selects
//! the conversion.
//!
//! No failure handling happens here: every call that type-checks is valid,
//! and engine-reported failures pass through untouched.

use std::ffi::c_void;

use crate::engine::{Context, FunctionCallback, RegExpFlags, ScriptOrigin};
use crate::handle::RawHandle;

#[cfg(not(feature = "legacy-api"))]
mod imp {
    use super::*;
    use crate::engine::api;

    pub(crate) fn array(cx: &mut Context, length: i32) -> RawHandle {
        api::new_array(cx, length)
    }

    pub(crate) fn boolean(cx: &mut Context, value: bool) -> RawHandle {
        api::new_boolean(cx, value)
    }

    pub(crate) fn boolean_object(cx: &mut Context, value: bool) -> RawHandle {
        api::new_boolean_object(cx, value)
    }

    pub(crate) fn date(cx: &mut Context, time: f64) -> RawHandle {
        api::new_date(cx, time)
    }

    pub(crate) fn external(cx: &mut Context, value: *mut c_void) -> RawHandle {
        api::new_external(cx, value)
    }

    pub(crate) fn function_template(
        cx: &mut Context,
        callback: Option<FunctionCallback>,
        data: RawHandle,
        signature: RawHandle,
    ) -> RawHandle {
        api::new_function_template(cx, callback, data, signature)
    }

    pub(crate) fn number(cx: &mut Context, value: f64) -> RawHandle {
        api::new_number(cx, value)
    }

    pub(crate) fn number_object(cx: &mut Context, value: f64) -> RawHandle {
        api::new_number_object(cx, value)
    }

    pub(crate) fn integer(cx: &mut Context, value: i64) -> RawHandle {
        let raw = api::new_integer(cx, value);
        api::to_integer(cx, raw)
    }

    pub(crate) fn int32(cx: &mut Context, value: i64) -> RawHandle {
        let raw = api::new_integer(cx, value);
        api::to_int32(cx, raw)
    }

    pub(crate) fn uint32(cx: &mut Context, value: i64) -> RawHandle {
        let raw = api::new_integer(cx, value);
        api::to_uint32(cx, raw)
    }

    pub(crate) fn object(cx: &mut Context) -> RawHandle {
        api::new_object(cx)
    }

    pub(crate) fn regexp(
        cx: &mut Context,
        pattern: RawHandle,
        flags: RegExpFlags,
    ) -> RawHandle {
        api::new_regexp(cx, pattern, flags)
    }

    pub(crate) fn script(
        cx: &mut Context,
        source: RawHandle,
        origin: Option<&ScriptOrigin>,
    ) -> RawHandle {
        let unbound = api::compile_unbound(cx, source, origin);
        api::bind_script(cx, unbound)
    }

    pub(crate) fn unbound_script(
        cx: &mut Context,
        source: RawHandle,
        origin: Option<&ScriptOrigin>,
    ) -> RawHandle {
        api::compile_unbound(cx, source, origin)
    }

    pub(crate) fn string_utf8(cx: &mut Context, data: &[u8], length: i32) -> RawHandle {
        api::new_string_utf8(cx, data, length)
    }

    pub(crate) fn string_latin1(cx: &mut Context, data: &[u8], length: i32) -> RawHandle {
        api::new_string_latin1(cx, data, length)
    }

    pub(crate) fn string_two_byte(cx: &mut Context, data: &[u16], length: i32) -> RawHandle {
        api::new_string_two_byte(cx, data, length)
    }

    pub(crate) fn string_object(cx: &mut Context, value: RawHandle) -> RawHandle {
        api::new_string_object(cx, value)
    }

    pub(crate) fn signature(
        cx: &mut Context,
        receiver: RawHandle,
        parameters: &[RawHandle],
    ) -> RawHandle {
        api::new_signature(cx, receiver, parameters)
    }
}

#[cfg(feature = "legacy-api")]
mod imp {
    use super::*;
    use crate::engine::api;

    pub(crate) fn array(cx: &mut Context, length: i32) -> RawHandle {
        api::make_array(cx, length)
    }

    pub(crate) fn boolean(cx: &mut Context, value: bool) -> RawHandle {
        api::make_boolean(cx, value)
    }

    pub(crate) fn boolean_object(cx: &mut Context, value: bool) -> RawHandle {
        let primitive = api::make_boolean(cx, value);
        api::wrap_boolean(cx, primitive)
    }

    pub(crate) fn date(cx: &mut Context, time: f64) -> RawHandle {
        api::make_date(cx, time)
    }

    pub(crate) fn external(cx: &mut Context, value: *mut c_void) -> RawHandle {
        api::make_external(cx, value)
    }

    pub(crate) fn function_template(
        cx: &mut Context,
        callback: Option<FunctionCallback>,
        data: RawHandle,
        signature: RawHandle,
    ) -> RawHandle {
        api::make_function_template(cx, callback, data, signature)
    }

    pub(crate) fn number(cx: &mut Context, value: f64) -> RawHandle {
        api::make_number(cx, value)
    }

    pub(crate) fn number_object(cx: &mut Context, value: f64) -> RawHandle {
        let primitive = api::make_number(cx, value);
        api::wrap_number(cx, primitive)
    }

    pub(crate) fn integer(cx: &mut Context, value: i64) -> RawHandle {
        let raw = api::make_integer(cx, value);
        api::cast_integer(cx, raw)
    }

    pub(crate) fn int32(cx: &mut Context, value: i64) -> RawHandle {
        let raw = api::make_integer(cx, value);
        api::cast_int32(cx, raw)
    }

    pub(crate) fn uint32(cx: &mut Context, value: i64) -> RawHandle {
        let raw = api::make_integer(cx, value);
        api::cast_uint32(cx, raw)
    }

    pub(crate) fn object(cx: &mut Context) -> RawHandle {
        api::make_object(cx)
    }

    pub(crate) fn regexp(
        cx: &mut Context,
        pattern: RawHandle,
        flags: RegExpFlags,
    ) -> RawHandle {
        api::make_regexp(cx, flags, pattern)
    }

    pub(crate) fn script(
        cx: &mut Context,
        source: RawHandle,
        origin: Option<&ScriptOrigin>,
    ) -> RawHandle {
        api::compile_script(cx, source, origin)
    }

    pub(crate) fn string_utf8(cx: &mut Context, data: &[u8], length: i32) -> RawHandle {
        api::make_string_utf8(cx, length, data)
    }

    pub(crate) fn string_latin1(cx: &mut Context, data: &[u8], length: i32) -> RawHandle {
        api::make_string_latin1(cx, length, data)
    }

    pub(crate) fn string_two_byte(cx: &mut Context, data: &[u16], length: i32) -> RawHandle {
        api::make_string_two_byte(cx, length, data)
    }

    pub(crate) fn string_object(cx: &mut Context, value: RawHandle) -> RawHandle {
        api::wrap_string(cx, value)
    }

    pub(crate) fn signature(
        cx: &mut Context,
        receiver: RawHandle,
        parameters: &[RawHandle],
    ) -> RawHandle {
        api::make_signature(cx, receiver, parameters)
    }
}

pub(crate) use imp::*;
