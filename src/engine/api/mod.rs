//! Raw engine embedding API
//!
//! The engine shipped two generations of its embedding API. Exactly one is
//! compiled in, selected by the `legacy-api` cargo feature:
//!
//! - [`current`] (default): `new_*` naming, data-before-length string
//!   arguments, boxed primitives built directly from scalars, two-step
//!   script compilation (unbound compile, then bind).
//! - [`legacy`]: `make_*`/`wrap_*`/`cast_*` naming, length-before-data
//!   string arguments, flags-before-pattern regular expressions, boxed
//!   primitives built by wrapping an existing primitive handle, one-step
//!   script compilation, and no unbound scripts at all.
//!
//! Nothing above this module branches on the generation at runtime; the
//! construction strategies in [`crate::strategy`] absorb the difference at
//! compile time.

#[cfg(not(feature = "legacy-api"))]
mod current;
#[cfg(not(feature = "legacy-api"))]
pub(crate) use current::*;

#[cfg(feature = "legacy-api")]
mod legacy;
#[cfg(feature = "legacy-api")]
pub(crate) use legacy::*;

use regex::RegexBuilder;

use crate::handle::RawHandle;

use super::{Cell, Context, EngineError, RegExpFlags};

/// Resolve an explicit length against the scan-for-terminator sentinel
///
/// A negative length means "scan for a zero element" (see
/// [`super::AUTO_LENGTH`]); an explicit length is clamped to the supplied
/// buffer so the engine never reads past it.
pub(super) fn resolve_len<T: Copy + Default + PartialEq>(data: &[T], length: i32) -> usize {
    if length < 0 {
        data.iter()
            .position(|&unit| unit == T::default())
            .unwrap_or(data.len())
    } else {
        (length as usize).min(data.len())
    }
}

/// Compile a pattern and allocate a RegExp cell
///
/// On a rejected pattern, records a pending exception on the context and
/// returns the empty handle (the engine's error convention).
pub(super) fn alloc_regexp(
    cx: &mut Context,
    pattern: RawHandle,
    flags: RegExpFlags,
) -> RawHandle {
    let source = cx.string_value(pattern).unwrap_or_default().to_owned();
    let compiled = RegexBuilder::new(&source)
        .case_insensitive(flags.contains(RegExpFlags::IGNORE_CASE))
        .multi_line(flags.contains(RegExpFlags::MULTILINE))
        .build();
    match compiled {
        Ok(compiled) => cx.alloc(Cell::RegExp {
            source,
            flags,
            compiled,
        }),
        Err(err) => {
            cx.throw(EngineError::BadRegExp {
                pattern: source,
                detail: err.to_string(),
            });
            RawHandle::EMPTY
        }
    }
}
