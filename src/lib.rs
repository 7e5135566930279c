//! jsnew - version-normalized handle construction for an embedded
//! JavaScript engine
//!
//! The engine's embedding API changed between generations: construction
//! functions were renamed, argument orders flipped, boxed primitives
//! switched from wrap-a-primitive to direct-from-scalar, script
//! compilation became a two-step unbound-compile-plus-bind, and the
//! unbound-script object kind only exists in the newer generation. This
//! crate absorbs that skew behind one uniform construction call: the
//! generation is selected once, at compile time, by the `legacy-api`
//! cargo feature, and every call resolves statically to the correct
//! version-specific sequence. There is no runtime version branch anywhere.
//!
//! # Example
//! ```
//! use jsnew::{ClassId, Context, Local, RegExp, RegExpFlags, String};
//!
//! let mut cx = Context::new();
//!
//! // explicit kind
//! let pattern: Local<String> = jsnew::new(&mut cx, "ab+c");
//! let re: Local<RegExp> = jsnew::new(&mut cx, (pattern, RegExpFlags::IGNORE_CASE));
//! assert_eq!(cx.regexp_test(re.raw(), "xABBC"), Some(true));
//!
//! // kind inferred from the argument type
//! let n = jsnew::new_value(&mut cx, 6.5);
//! assert_eq!(cx.class_of(n.raw()), Some(ClassId::Number));
//! ```
//!
//! Calls are stateless and independent; handles belong to the [`Context`]
//! that allocated them, and their lifetime is entirely the engine's
//! concern.

// The engine core (heap, context, raw embedding API generations)
pub mod engine;

// Typed handles and the closed set of object kinds
pub mod handle;

// Generic construction dispatch and the kind-inference layer
pub mod factory;

// Version-selected construction sequences
mod strategy;

pub use engine::{
    ClassId, Context, EngineError, FunctionCallback, IntRepr, RegExpFlags, ScriptOrigin,
    AUTO_LENGTH,
};
pub use factory::{new, new_value, Build, IntoHandle};
pub use handle::{
    Array, Boolean, BooleanObject, Date, External, FunctionTemplate, HandleKind, Int32, Integer,
    Local, Number, NumberObject, Object, RawHandle, RegExp, Script, Signature, String,
    StringObject, Uint32, Value,
};

#[cfg(not(feature = "legacy-api"))]
pub use handle::UnboundScript;
