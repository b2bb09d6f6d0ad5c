use thiserror::Error;

/// Conversion failure between a wire string and a typed value.
///
/// Every variant names the offending raw token so the caller can report
/// which field carried it. `routeros-client` wraps these with the wire key
/// of the field being decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Anything other than the exact tokens `true` / `false`.
    #[error("invalid boolean {0:?}: expected \"true\" or \"false\"")]
    InvalidBool(String),

    /// Not a base-10 signed integer (also raised per element of an
    /// integer list).
    #[error("invalid integer {raw:?}")]
    InvalidInt {
        raw: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Empty string where a duration was expected.
    #[error("empty duration")]
    EmptyDuration,

    /// A duration token ended without a unit suffix, e.g. `17` or `2h17`.
    #[error("duration token {0:?} has no trailing unit")]
    MissingUnit(String),

    /// A duration token carried an unrecognized unit suffix.
    #[error("unknown duration unit {0:?}")]
    UnknownUnit(String),

    /// A duration token that is not `<digits><unit>`, e.g. a bare unit.
    #[error("malformed duration {0:?}")]
    InvalidDuration(String),

    /// The summed duration does not fit the nanosecond accumulator.
    #[error("duration {0:?} overflows")]
    DurationOverflow(String),
}
