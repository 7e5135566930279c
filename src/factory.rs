//! Typed factory dispatch
//!
//! One generic construction entry point, [`new`], parameterized by object
//! kind, with a uniform calling convention independent of how many
//! arguments the kind's constructor needs. Each kind implements [`Build`]
//! once per argument shape it supports; an unsupported shape has no impl,
//! so misuse never reaches runtime. On top sits a convenience layer,
//! [`IntoHandle`]/[`new_value`], that infers the kind from a single
//! argument's type.
//!
//! Rust has no default arguments, so every omitted-trailing-argument form
//! of a kind's contract is its own `Build` impl whose behavior is
//! identical to passing the documented default explicitly.
//!
//! Construction has no side effects beyond the single call into the
//! engine: no caching, no logging, no shared state between calls.

use std::ffi::c_void;

use crate::engine::{Context, FunctionCallback, RegExpFlags, ScriptOrigin, AUTO_LENGTH};
use crate::handle::{
    Array, Boolean, BooleanObject, Date, External, FunctionTemplate, HandleKind, Int32, Integer,
    Local, Number, NumberObject, Object, RegExp, Script, Signature, String, StringObject, Uint32,
    Value,
};
#[cfg(not(feature = "legacy-api"))]
use crate::handle::UnboundScript;
use crate::strategy;

/// Construction contract for one (kind, argument shape) pair
///
/// `A` is the kind's argument tuple: `()` for zero arguments, a bare type
/// for one, and a tuple for two or more. The set of impls per kind is
/// closed and fixed at compile time.
pub trait Build<A>: HandleKind {
    /// Construct a handle of this kind from `args`
    fn build(cx: &mut Context, args: A) -> Local<Self>;
}

/// Construct a handle of kind `T` from `args`
///
/// The single generic entry point; every call resolves at compile time to
/// the kind's version-correct construction sequence.
///
/// ```
/// use jsnew::{Array, Context, Local, Number};
///
/// let mut cx = Context::new();
///
/// let n: Local<Number> = jsnew::new(&mut cx, 6.25);
/// assert_eq!(cx.number_value(n.raw()), Some(6.25));
///
/// let a = jsnew::new::<Array, _>(&mut cx, 8);
/// assert_eq!(cx.array_length(a.raw()), Some(8));
/// ```
///
/// An argument shape a kind does not support is rejected at compile time,
/// never at runtime:
///
/// ```compile_fail
/// use jsnew::{Context, Date, Local};
///
/// let mut cx = Context::new();
/// // a date requires its milliseconds argument
/// let _wrong: Local<Date> = jsnew::new(&mut cx, ());
/// ```
#[inline]
pub fn new<T, A>(cx: &mut Context, args: A) -> Local<T>
where
    T: Build<A>,
{
    T::build(cx, args)
}

// === Array ===

impl Build<()> for Array {
    /// Empty array (length 0)
    fn build(cx: &mut Context, _args: ()) -> Local<Self> {
        Local::from_raw(strategy::array(cx, 0))
    }
}

impl Build<i32> for Array {
    /// Array of the given length; negative lengths clamp to 0
    fn build(cx: &mut Context, length: i32) -> Local<Self> {
        Local::from_raw(strategy::array(cx, length))
    }
}

// === Boolean / BooleanObject ===

impl Build<bool> for Boolean {
    fn build(cx: &mut Context, value: bool) -> Local<Self> {
        Local::from_raw(strategy::boolean(cx, value))
    }
}

impl Build<bool> for BooleanObject {
    fn build(cx: &mut Context, value: bool) -> Local<Self> {
        Local::from_raw(strategy::boolean_object(cx, value))
    }
}

// === Date ===

impl Build<f64> for Date {
    /// Milliseconds since the epoch
    fn build(cx: &mut Context, time: f64) -> Local<Self> {
        Local::from_raw(strategy::date(cx, time))
    }
}

// === External ===

impl Build<*mut c_void> for External {
    fn build(cx: &mut Context, value: *mut c_void) -> Local<Self> {
        Local::from_raw(strategy::external(cx, value))
    }
}

// === FunctionTemplate ===
//
// Defaults: no callback, empty data handle, empty signature handle.

impl Build<()> for FunctionTemplate {
    fn build(cx: &mut Context, _args: ()) -> Local<Self> {
        Local::from_raw(strategy::function_template(
            cx,
            None,
            Local::<Value>::empty().raw(),
            Local::<Signature>::empty().raw(),
        ))
    }
}

impl Build<FunctionCallback> for FunctionTemplate {
    fn build(cx: &mut Context, callback: FunctionCallback) -> Local<Self> {
        Local::from_raw(strategy::function_template(
            cx,
            Some(callback),
            Local::<Value>::empty().raw(),
            Local::<Signature>::empty().raw(),
        ))
    }
}

impl Build<(FunctionCallback, Local<Value>)> for FunctionTemplate {
    fn build(cx: &mut Context, (callback, data): (FunctionCallback, Local<Value>)) -> Local<Self> {
        Local::from_raw(strategy::function_template(
            cx,
            Some(callback),
            data.raw(),
            Local::<Signature>::empty().raw(),
        ))
    }
}

impl Build<(FunctionCallback, Local<Value>, Local<Signature>)> for FunctionTemplate {
    fn build(
        cx: &mut Context,
        (callback, data, signature): (FunctionCallback, Local<Value>, Local<Signature>),
    ) -> Local<Self> {
        Local::from_raw(strategy::function_template(
            cx,
            Some(callback),
            data.raw(),
            signature.raw(),
        ))
    }
}

// === Number / NumberObject ===

impl Build<f64> for Number {
    fn build(cx: &mut Context, value: f64) -> Local<Self> {
        Local::from_raw(strategy::number(cx, value))
    }
}

impl Build<f64> for NumberObject {
    fn build(cx: &mut Context, value: f64) -> Local<Self> {
        Local::from_raw(strategy::number_object(cx, value))
    }
}

// === Integer family ===
//
// Every subtype accepts both raw widths; the subtype alone picks the
// conversion primitive the value routes through.

impl Build<i32> for Integer {
    fn build(cx: &mut Context, value: i32) -> Local<Self> {
        Local::from_raw(strategy::integer(cx, value as i64))
    }
}

impl Build<u32> for Integer {
    fn build(cx: &mut Context, value: u32) -> Local<Self> {
        Local::from_raw(strategy::integer(cx, value as i64))
    }
}

impl Build<i32> for Int32 {
    fn build(cx: &mut Context, value: i32) -> Local<Self> {
        Local::from_raw(strategy::int32(cx, value as i64))
    }
}

impl Build<u32> for Int32 {
    fn build(cx: &mut Context, value: u32) -> Local<Self> {
        Local::from_raw(strategy::int32(cx, value as i64))
    }
}

impl Build<i32> for Uint32 {
    fn build(cx: &mut Context, value: i32) -> Local<Self> {
        Local::from_raw(strategy::uint32(cx, value as i64))
    }
}

impl Build<u32> for Uint32 {
    fn build(cx: &mut Context, value: u32) -> Local<Self> {
        Local::from_raw(strategy::uint32(cx, value as i64))
    }
}

// === Object ===

impl Build<()> for Object {
    fn build(cx: &mut Context, _args: ()) -> Local<Self> {
        Local::from_raw(strategy::object(cx))
    }
}

// === RegExp ===

impl Build<(Local<String>, RegExpFlags)> for RegExp {
    /// Pattern rejection is the engine's error, reported through its
    /// pending-exception convention; this layer forwards it untouched.
    fn build(cx: &mut Context, (pattern, flags): (Local<String>, RegExpFlags)) -> Local<Self> {
        Local::from_raw(strategy::regexp(cx, pattern.raw(), flags))
    }
}

// === Script / UnboundScript ===

impl Build<Local<String>> for Script {
    fn build(cx: &mut Context, source: Local<String>) -> Local<Self> {
        Local::from_raw(strategy::script(cx, source.raw(), None))
    }
}

impl Build<(Local<String>, ScriptOrigin)> for Script {
    fn build(cx: &mut Context, (source, origin): (Local<String>, ScriptOrigin)) -> Local<Self> {
        Local::from_raw(strategy::script(cx, source.raw(), Some(&origin)))
    }
}

#[cfg(not(feature = "legacy-api"))]
impl Build<Local<String>> for UnboundScript {
    fn build(cx: &mut Context, source: Local<String>) -> Local<Self> {
        Local::from_raw(strategy::unbound_script(cx, source.raw(), None))
    }
}

#[cfg(not(feature = "legacy-api"))]
impl Build<(Local<String>, ScriptOrigin)> for UnboundScript {
    fn build(
        cx: &mut Context,
        (source, origin): (Local<String>, ScriptOrigin),
    ) -> Local<Self> {
        Local::from_raw(strategy::unbound_script(cx, source.raw(), Some(&origin)))
    }
}

// === Signature ===
//
// Defaults: empty receiver, no parameter templates.

impl Build<()> for Signature {
    fn build(cx: &mut Context, _args: ()) -> Local<Self> {
        Local::from_raw(strategy::signature(cx, Local::<FunctionTemplate>::empty().raw(), &[]))
    }
}

impl Build<Local<FunctionTemplate>> for Signature {
    fn build(cx: &mut Context, receiver: Local<FunctionTemplate>) -> Local<Self> {
        Local::from_raw(strategy::signature(cx, receiver.raw(), &[]))
    }
}

impl<'a> Build<(Local<FunctionTemplate>, &'a [Local<FunctionTemplate>])> for Signature {
    fn build(
        cx: &mut Context,
        (receiver, parameters): (Local<FunctionTemplate>, &'a [Local<FunctionTemplate>]),
    ) -> Local<Self> {
        let raw: Vec<_> = parameters.iter().map(|t| t.raw()).collect();
        Local::from_raw(strategy::signature(cx, receiver.raw(), &raw))
    }
}

// === String ===
//
// Omitting the length is identical to passing AUTO_LENGTH explicitly; the
// sentinel is forwarded to the engine bit-for-bit.

impl<'a> Build<&'a str> for String {
    fn build(cx: &mut Context, value: &'a str) -> Local<Self> {
        Local::from_raw(strategy::string_utf8(cx, value.as_bytes(), AUTO_LENGTH))
    }
}

impl<'a> Build<&'a std::string::String> for String {
    fn build(cx: &mut Context, value: &'a std::string::String) -> Local<Self> {
        Local::from_raw(strategy::string_utf8(cx, value.as_bytes(), AUTO_LENGTH))
    }
}

impl<'a> Build<&'a [u8]> for String {
    /// One-byte string with the default AUTO_LENGTH
    fn build(cx: &mut Context, value: &'a [u8]) -> Local<Self> {
        Local::from_raw(strategy::string_latin1(cx, value, AUTO_LENGTH))
    }
}

impl<'a> Build<(&'a [u8], i32)> for String {
    /// One-byte string with an explicit length (or the sentinel)
    fn build(cx: &mut Context, (value, length): (&'a [u8], i32)) -> Local<Self> {
        Local::from_raw(strategy::string_latin1(cx, value, length))
    }
}

impl<'a> Build<&'a [u16]> for String {
    /// Two-byte string with the default AUTO_LENGTH
    fn build(cx: &mut Context, value: &'a [u16]) -> Local<Self> {
        Local::from_raw(strategy::string_two_byte(cx, value, AUTO_LENGTH))
    }
}

impl<'a> Build<(&'a [u16], i32)> for String {
    /// Two-byte string with an explicit length (or the sentinel)
    fn build(cx: &mut Context, (value, length): (&'a [u16], i32)) -> Local<Self> {
        Local::from_raw(strategy::string_two_byte(cx, value, length))
    }
}

// === StringObject ===

impl Build<Local<String>> for StringObject {
    fn build(cx: &mut Context, value: Local<String>) -> Local<Self> {
        Local::from_raw(strategy::string_object(cx, value.raw()))
    }
}

/// Kind inference for the convenience layer
///
/// Each eligible argument type names the kind it constructs; the impl does
/// nothing beyond forwarding to [`new`] with that kind fixed, so
/// `new_value(cx, v)` and the explicit-kind call are interchangeable.
pub trait IntoHandle {
    /// The kind this argument type constructs
    type Kind: HandleKind;

    /// Construct the handle
    fn into_handle(self, cx: &mut Context) -> Local<Self::Kind>;
}

/// Construct a handle, inferring the kind from the argument type
///
/// ```
/// use jsnew::{ClassId, Context};
///
/// let mut cx = Context::new();
/// let i = jsnew::new_value(&mut cx, 5i32);
/// assert_eq!(cx.class_of(i.raw()), Some(ClassId::Int32));
/// ```
#[inline]
pub fn new_value<V: IntoHandle>(cx: &mut Context, value: V) -> Local<V::Kind> {
    value.into_handle(cx)
}

impl IntoHandle for bool {
    type Kind = Boolean;

    fn into_handle(self, cx: &mut Context) -> Local<Boolean> {
        new(cx, self)
    }
}

impl IntoHandle for i32 {
    type Kind = Int32;

    fn into_handle(self, cx: &mut Context) -> Local<Int32> {
        new(cx, self)
    }
}

impl IntoHandle for u32 {
    type Kind = Uint32;

    fn into_handle(self, cx: &mut Context) -> Local<Uint32> {
        new(cx, self)
    }
}

impl IntoHandle for f64 {
    type Kind = Number;

    fn into_handle(self, cx: &mut Context) -> Local<Number> {
        new(cx, self)
    }
}

impl<'a> IntoHandle for &'a str {
    type Kind = String;

    fn into_handle(self, cx: &mut Context) -> Local<String> {
        new(cx, self)
    }
}

impl<'a> IntoHandle for &'a std::string::String {
    type Kind = String;

    fn into_handle(self, cx: &mut Context) -> Local<String> {
        new(cx, self)
    }
}

impl<'a> IntoHandle for &'a [u8] {
    type Kind = String;

    fn into_handle(self, cx: &mut Context) -> Local<String> {
        new(cx, self)
    }
}

impl<'a> IntoHandle for &'a [u16] {
    type Kind = String;

    fn into_handle(self, cx: &mut Context) -> Local<String> {
        new(cx, self)
    }
}

impl IntoHandle for (Local<String>, RegExpFlags) {
    type Kind = RegExp;

    fn into_handle(self, cx: &mut Context) -> Local<RegExp> {
        new(cx, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ClassId, EngineError, IntRepr};
    use crate::handle::RawHandle;

    fn native_cb(_cx: &mut Context, _args: &[RawHandle]) -> RawHandle {
        RawHandle::EMPTY
    }

    #[test]
    fn test_array() {
        let mut cx = Context::new();

        let empty: Local<Array> = new(&mut cx, ());
        assert_eq!(cx.class_of(empty.raw()), Some(ClassId::Array));
        assert_eq!(cx.array_length(empty.raw()), Some(0));

        let sized = new::<Array, _>(&mut cx, 16);
        assert_eq!(cx.array_length(sized.raw()), Some(16));

        // default form equals the explicit default
        let explicit = new::<Array, _>(&mut cx, 0);
        assert_eq!(cx.array_length(empty.raw()), cx.array_length(explicit.raw()));
    }

    #[test]
    fn test_array_negative_length_clamps() {
        let mut cx = Context::new();
        let a = new::<Array, _>(&mut cx, -3);
        assert_eq!(cx.array_length(a.raw()), Some(0));
    }

    #[test]
    fn test_boolean_kinds() {
        let mut cx = Context::new();

        let b: Local<Boolean> = new(&mut cx, true);
        assert_eq!(cx.class_of(b.raw()), Some(ClassId::Boolean));
        assert_eq!(cx.bool_value(b.raw()), Some(true));

        let boxed: Local<BooleanObject> = new(&mut cx, false);
        assert_eq!(cx.class_of(boxed.raw()), Some(ClassId::BooleanObject));
        assert_eq!(cx.boolean_object_value(boxed.raw()), Some(false));
    }

    #[test]
    fn test_number_kinds() {
        let mut cx = Context::new();

        let n: Local<Number> = new(&mut cx, 3.25);
        assert_eq!(cx.class_of(n.raw()), Some(ClassId::Number));
        assert_eq!(cx.number_value(n.raw()), Some(3.25));

        let boxed: Local<NumberObject> = new(&mut cx, -0.5);
        assert_eq!(cx.class_of(boxed.raw()), Some(ClassId::NumberObject));
        assert_eq!(cx.number_object_value(boxed.raw()), Some(-0.5));
    }

    #[test]
    fn test_date() {
        let mut cx = Context::new();
        let d: Local<Date> = new(&mut cx, 1_234_567_890_000.0);
        assert_eq!(cx.class_of(d.raw()), Some(ClassId::Date));
        assert_eq!(cx.date_value(d.raw()), Some(1_234_567_890_000.0));
    }

    #[test]
    fn test_external_roundtrips_pointer() {
        let mut cx = Context::new();
        let mut target = 7i32;
        let ptr = &mut target as *mut i32 as *mut c_void;

        let e: Local<External> = new(&mut cx, ptr);
        assert_eq!(cx.class_of(e.raw()), Some(ClassId::External));
        assert_eq!(cx.external_value(e.raw()), Some(ptr));
    }

    #[test]
    fn test_object() {
        let mut cx = Context::new();
        let o: Local<Object> = new(&mut cx, ());
        assert_eq!(cx.class_of(o.raw()), Some(ClassId::Object));
    }

    #[test]
    fn test_integer_family_uses_designated_conversion() {
        let mut cx = Context::new();

        let generic = new::<Integer, _>(&mut cx, 5);
        let signed = new::<Int32, _>(&mut cx, 5);
        let unsigned = new::<Uint32, _>(&mut cx, 5u32);

        assert_eq!(cx.class_of(generic.raw()), Some(ClassId::Integer));
        assert_eq!(cx.class_of(signed.raw()), Some(ClassId::Int32));
        assert_eq!(cx.class_of(unsigned.raw()), Some(ClassId::Uint32));

        // same raw value, three distinct conversion paths
        assert_eq!(cx.int_repr(generic.raw()), Some(IntRepr::Wide));
        assert_eq!(cx.int_repr(signed.raw()), Some(IntRepr::I32));
        assert_eq!(cx.int_repr(unsigned.raw()), Some(IntRepr::U32));

        assert_eq!(cx.integer_value(generic.raw()), Some(5));
        assert_eq!(cx.int32_value(signed.raw()), Some(5));
        assert_eq!(cx.uint32_value(unsigned.raw()), Some(5));
    }

    #[test]
    fn test_integer_conversions_truncate_per_subtype() {
        let mut cx = Context::new();

        // -1 through the unsigned conversion wraps
        let u = new::<Uint32, _>(&mut cx, -1);
        assert_eq!(cx.int_repr(u.raw()), Some(IntRepr::U32));
        assert_eq!(cx.uint32_value(u.raw()), Some(u32::MAX));
        assert_eq!(cx.integer_value(u.raw()), Some(u32::MAX as i64));

        // a high bit through the signed conversion goes negative
        let i = new::<Int32, _>(&mut cx, 0x8000_0000u32);
        assert_eq!(cx.int_repr(i.raw()), Some(IntRepr::I32));
        assert_eq!(cx.int32_value(i.raw()), Some(i32::MIN));
    }

    #[test]
    fn test_string_from_str() {
        let mut cx = Context::new();
        let s: Local<String> = new(&mut cx, "hello");
        assert_eq!(cx.class_of(s.raw()), Some(ClassId::String));
        assert_eq!(cx.string_value(s.raw()), Some("hello"));

        let owned = std::string::String::from("hello");
        let s2: Local<String> = new(&mut cx, &owned);
        assert_eq!(cx.string_value(s2.raw()), cx.string_value(s.raw()));
    }

    #[test]
    fn test_string_default_length_equals_explicit_sentinel() {
        let mut cx = Context::new();
        let data: &[u8] = b"hello\0trailing";

        let defaulted: Local<String> = new(&mut cx, data);
        let explicit: Local<String> = new(&mut cx, (data, AUTO_LENGTH));

        // the sentinel scans to the terminator in both forms
        assert_eq!(cx.string_value(defaulted.raw()), Some("hello"));
        assert_eq!(
            cx.string_value(defaulted.raw()),
            cx.string_value(explicit.raw())
        );
    }

    #[test]
    fn test_string_explicit_length() {
        let mut cx = Context::new();
        let s: Local<String> = new(&mut cx, (b"hello".as_slice(), 3));
        assert_eq!(cx.string_value(s.raw()), Some("hel"));
    }

    #[test]
    fn test_string_latin1_high_bytes() {
        let mut cx = Context::new();
        let s: Local<String> = new(&mut cx, [0xE9u8, 0x74, 0xE9].as_slice());
        assert_eq!(cx.string_value(s.raw()), Some("\u{e9}t\u{e9}"));
    }

    #[test]
    fn test_string_two_byte() {
        let mut cx = Context::new();
        let units = [0x68u16, 0x69, 0x203D];

        let s: Local<String> = new(&mut cx, units.as_slice());
        assert_eq!(cx.string_value(s.raw()), Some("hi\u{203d}"));

        let cut: Local<String> = new(&mut cx, (units.as_slice(), 2));
        assert_eq!(cx.string_value(cut.raw()), Some("hi"));
    }

    #[test]
    fn test_string_object_wraps_string() {
        let mut cx = Context::new();
        let s: Local<String> = new(&mut cx, "boxed");
        let o: Local<StringObject> = new(&mut cx, s);
        assert_eq!(cx.class_of(o.raw()), Some(ClassId::StringObject));
        assert_eq!(cx.string_object_value(o.raw()), Some(s.raw()));
    }

    #[test]
    fn test_regexp() {
        let mut cx = Context::new();
        let pattern: Local<String> = new(&mut cx, "ab+c");
        let re: Local<RegExp> = new(&mut cx, (pattern, RegExpFlags::IGNORE_CASE));

        assert_eq!(cx.class_of(re.raw()), Some(ClassId::RegExp));
        assert_eq!(cx.regexp_source(re.raw()), Some("ab+c"));
        assert_eq!(cx.regexp_flags(re.raw()), Some(RegExpFlags::IGNORE_CASE));
        assert_eq!(cx.regexp_test(re.raw(), "xABBC"), Some(true));
        assert_eq!(cx.regexp_test(re.raw(), "ac"), Some(false));
    }

    #[test]
    fn test_regexp_bad_pattern_is_engine_failure() {
        let mut cx = Context::new();
        let pattern: Local<String> = new(&mut cx, "(unclosed");
        let re: Local<RegExp> = new(&mut cx, (pattern, RegExpFlags::NONE));

        // the engine's own error convention, forwarded untouched
        assert!(re.is_empty());
        assert!(cx.has_pending_exception());
        match cx.take_exception() {
            Some(EngineError::BadRegExp { pattern, .. }) => {
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected exception: {:?}", other),
        }
        assert!(!cx.has_pending_exception());
    }

    #[test]
    fn test_script() {
        let mut cx = Context::new();
        let source: Local<String> = new(&mut cx, "var x = 1;");

        let bare: Local<Script> = new(&mut cx, source);
        assert_eq!(cx.class_of(bare.raw()), Some(ClassId::Script));
        assert_eq!(cx.script_source(bare.raw()), Some("var x = 1;"));
        assert_eq!(cx.script_origin(bare.raw()), None);

        let with_origin: Local<Script> =
            new(&mut cx, (source, ScriptOrigin::new("app.js")));
        assert_eq!(
            cx.script_origin(with_origin.raw()).map(|o| o.resource_name.as_str()),
            Some("app.js")
        );
    }

    #[cfg(not(feature = "legacy-api"))]
    #[test]
    fn test_unbound_script() {
        let mut cx = Context::new();
        let source: Local<String> = new(&mut cx, "f();");

        let u: Local<UnboundScript> = new(&mut cx, source);
        assert_eq!(cx.class_of(u.raw()), Some(ClassId::UnboundScript));
        assert_eq!(cx.unbound_script_source(u.raw()), Some("f();"));

        let with_origin: Local<UnboundScript> =
            new(&mut cx, (source, ScriptOrigin::with_offsets("lib.js", 4, 0)));
        assert_eq!(
            cx.unbound_script_origin(with_origin.raw()).map(|o| o.line_offset),
            Some(4)
        );
    }

    #[test]
    fn test_function_template_defaults() {
        let mut cx = Context::new();

        let bare: Local<FunctionTemplate> = new(&mut cx, ());
        assert_eq!(cx.class_of(bare.raw()), Some(ClassId::FunctionTemplate));
        assert_eq!(cx.template_has_callback(bare.raw()), Some(false));
        assert_eq!(cx.template_data(bare.raw()), Some(RawHandle::EMPTY));
        assert_eq!(cx.template_signature(bare.raw()), Some(RawHandle::EMPTY));

        let with_cb: Local<FunctionTemplate> =
            new(&mut cx, native_cb as FunctionCallback);
        assert_eq!(cx.template_has_callback(with_cb.raw()), Some(true));
        // omitted trailing arguments equal their documented defaults
        assert_eq!(cx.template_data(with_cb.raw()), Some(RawHandle::EMPTY));
        assert_eq!(cx.template_signature(with_cb.raw()), Some(RawHandle::EMPTY));
    }

    #[test]
    fn test_function_template_full_shape() {
        let mut cx = Context::new();
        let data = new_value(&mut cx, 42i32).upcast();
        let sig: Local<Signature> = new(&mut cx, ());

        let t: Local<FunctionTemplate> =
            new(&mut cx, (native_cb as FunctionCallback, data, sig));
        assert_eq!(cx.template_has_callback(t.raw()), Some(true));
        assert_eq!(cx.template_data(t.raw()), Some(data.raw()));
        assert_eq!(cx.template_signature(t.raw()), Some(sig.raw()));
    }

    #[test]
    fn test_signature_shapes() {
        let mut cx = Context::new();

        let bare: Local<Signature> = new(&mut cx, ());
        assert_eq!(cx.class_of(bare.raw()), Some(ClassId::Signature));
        assert_eq!(cx.signature_receiver(bare.raw()), Some(RawHandle::EMPTY));
        assert_eq!(cx.signature_parameters(bare.raw()), Some(&[][..]));

        let receiver: Local<FunctionTemplate> = new(&mut cx, ());
        let with_receiver: Local<Signature> = new(&mut cx, receiver);
        assert_eq!(cx.signature_receiver(with_receiver.raw()), Some(receiver.raw()));
        assert_eq!(cx.signature_parameters(with_receiver.raw()), Some(&[][..]));

        let p0: Local<FunctionTemplate> = new(&mut cx, ());
        let p1: Local<FunctionTemplate> = new(&mut cx, ());
        let full: Local<Signature> = new(&mut cx, (receiver, [p0, p1].as_slice()));
        assert_eq!(
            cx.signature_parameters(full.raw()),
            Some(&[p0.raw(), p1.raw()][..])
        );
    }

    #[test]
    fn test_new_value_matches_explicit_kind() {
        let mut cx = Context::new();

        let b = new_value(&mut cx, true);
        let b_explicit: Local<Boolean> = new(&mut cx, true);
        assert_eq!(cx.class_of(b.raw()), Some(ClassId::Boolean));
        assert_eq!(cx.bool_value(b.raw()), cx.bool_value(b_explicit.raw()));

        let i = new_value(&mut cx, -7i32);
        assert_eq!(cx.class_of(i.raw()), Some(ClassId::Int32));
        assert_eq!(cx.int32_value(i.raw()), Some(-7));

        let u = new_value(&mut cx, 7u32);
        assert_eq!(cx.class_of(u.raw()), Some(ClassId::Uint32));
        assert_eq!(cx.uint32_value(u.raw()), Some(7));

        let n = new_value(&mut cx, 1.5f64);
        assert_eq!(cx.class_of(n.raw()), Some(ClassId::Number));
        assert_eq!(cx.number_value(n.raw()), Some(1.5));

        let s = new_value(&mut cx, "inferred");
        assert_eq!(cx.class_of(s.raw()), Some(ClassId::String));
        assert_eq!(cx.string_value(s.raw()), Some("inferred"));

        let bytes = new_value(&mut cx, b"raw".as_slice());
        assert_eq!(cx.class_of(bytes.raw()), Some(ClassId::String));

        let pattern: Local<String> = new(&mut cx, "x+");
        let re = new_value(&mut cx, (pattern, RegExpFlags::GLOBAL));
        assert_eq!(cx.class_of(re.raw()), Some(ClassId::RegExp));
        assert_eq!(cx.regexp_flags(re.raw()), Some(RegExpFlags::GLOBAL));
    }

    #[test]
    fn test_unsigned_value_never_routes_through_signed_path() {
        let mut cx = Context::new();
        let u = new_value(&mut cx, 5u32);
        assert_eq!(cx.int_repr(u.raw()), Some(IntRepr::U32));
        assert_ne!(cx.int_repr(u.raw()), Some(IntRepr::I32));
    }

    #[test]
    fn test_calls_are_order_independent() {
        let mut cx1 = Context::new();
        let s1: Local<String> = new(&mut cx1, "first");
        let n1: Local<Number> = new(&mut cx1, 9.0);

        let mut cx2 = Context::new();
        let n2: Local<Number> = new(&mut cx2, 9.0);
        let s2: Local<String> = new(&mut cx2, "first");

        assert_eq!(cx1.string_value(s1.raw()), cx2.string_value(s2.raw()));
        assert_eq!(cx1.number_value(n1.raw()), cx2.number_value(n2.raw()));
    }
}
