//! The fallback marker used to detect "not defined here" during evaluation.
//!
//! Composite partial functions need two facts from one call to a nested
//! function: the value it produced, and whether the input was in its domain
//! at all. Asking `is_defined_at` first and then applying would evaluate the
//! nested guards twice, so composites instead call the nested function with a
//! *check fallback*: a fallback that is defined everywhere and returns a
//! reference to a single, crate-private marker.
//!
//! After the call one pointer comparison against that marker tells whether the
//! fallback ran. The marker type cannot be named or constructed outside this
//! module, so no value produced by caller code can ever be mistaken for it.
//!
//! ```text
//! match nested.apply_or_probe(input, &check_fallback) {
//!     probe if probe.fallback_occurred() => try the next branch,
//!     Probe::Value(value) => value,
//! }
//! ```

use std::fmt;
use std::ptr;

/// The unique marker returned by [`check_fallback`].
///
/// The type is intentionally not zero-sized: distinct zero-sized statics may
/// share an address, and the protocol relies on the marker's address being
/// unique within the process.
pub struct FallbackMarker {
    _tag: u8,
}

static FALLBACK_MARKER: FallbackMarker = FallbackMarker { _tag: 0 };

impl fmt::Debug for FallbackMarker {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FallbackMarker")
    }
}

/// Result of evaluating a partial function against an internal fallback.
///
/// `Value` holds a genuine result (either from the function or from a real
/// caller fallback wrapped at the outermost layer). `Fallback` holds the
/// marker and means the check fallback ran.
pub enum Probe<B> {
    /// A computed value.
    Value(B),
    /// The check fallback ran; the input was outside the domain.
    Fallback(&'static FallbackMarker),
}

impl<B> Probe<B> {
    /// Returns `true` if this probe carries the process-wide marker.
    ///
    /// The comparison is by address, never by value.
    #[inline]
    pub fn fallback_occurred(&self) -> bool {
        match self {
            Self::Value(_) => false,
            Self::Fallback(marker) => ptr::eq(*marker, &FALLBACK_MARKER),
        }
    }

    /// Converts the probe into the computed value, if any.
    #[inline]
    pub fn into_value(self) -> Option<B> {
        match self {
            Self::Value(value) => Some(value),
            Self::Fallback(marker) => {
                debug_assert!(ptr::eq(marker, &FALLBACK_MARKER));
                None
            }
        }
    }

    /// Applies `function` to a computed value and passes the marker through.
    #[inline]
    pub fn map<C, F>(self, function: F) -> Probe<C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Self::Value(value) => Probe::Value(function(value)),
            Self::Fallback(marker) => Probe::Fallback(marker),
        }
    }
}

impl<B: fmt::Debug> fmt::Debug for Probe<B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Fallback(_) => formatter.write_str("Fallback"),
        }
    }
}

/// The degenerate fallback: defined for every input, returns the marker.
#[inline]
pub fn check_fallback<A, B>(_input: &A) -> Probe<B> {
    Probe::Fallback(&FALLBACK_MARKER)
}
