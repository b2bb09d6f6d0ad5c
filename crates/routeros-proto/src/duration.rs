// ── RouterOS durations ──
//
// The device prints time values in a compact unit-suffixed form ("2h17m1s",
// "1d3h", "4w2d") but accepts bare seconds on write. `RosDuration` stores
// whole seconds and speaks both dialects: `to_wire` emits bare seconds,
// `from_wire` parses the suffixed form.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::value::WireValue;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A device duration, stored as whole seconds.
///
/// Sub-second components truncate toward zero on decode: `"20ms"` becomes
/// zero seconds, matching the precision the device keeps for these fields.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RosDuration(u64);

impl RosDuration {
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    pub const fn seconds(self) -> u64 {
        self.0
    }
}

impl From<u64> for RosDuration {
    fn from(seconds: u64) -> Self {
        Self(seconds)
    }
}

impl From<Duration> for RosDuration {
    fn from(d: Duration) -> Self {
        Self(d.as_secs())
    }
}

impl From<RosDuration> for Duration {
    fn from(d: RosDuration) -> Self {
        Self::from_secs(d.0)
    }
}

impl fmt::Display for RosDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RosDuration {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}

impl WireValue for RosDuration {
    fn to_wire(&self) -> String {
        self.0.to_string()
    }

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        parse_suffixed(raw).map(Self)
    }
}

/// Nanoseconds per unit suffix. `d` is 24 hours, `w` is 7 days.
fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        "d" => Some(86_400 * NANOS_PER_SEC),
        "w" => Some(604_800 * NANOS_PER_SEC),
        _ => None,
    }
}

/// Parse a run of `<digits><unit>` tokens, summing at nanosecond
/// resolution, then truncate to whole seconds.
fn parse_suffixed(raw: &str) -> Result<u64, ValueError> {
    if raw.is_empty() {
        return Err(ValueError::EmptyDuration);
    }

    let bytes = raw.as_bytes();
    let mut total_nanos: u128 = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits_start {
            // Token starts with something other than a digit.
            return Err(ValueError::InvalidDuration(raw.to_owned()));
        }
        let digits = &raw[digits_start..pos];
        let count: u128 = digits
            .parse()
            .map_err(|_| ValueError::DurationOverflow(raw.to_owned()))?;

        let unit_start = pos;
        while pos < bytes.len() && !bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == unit_start {
            // Trailing digits with no unit, e.g. "17" or "2h17".
            return Err(ValueError::MissingUnit(digits.to_owned()));
        }
        let unit = &raw[unit_start..pos];
        let nanos = unit_nanos(unit).ok_or_else(|| ValueError::UnknownUnit(unit.to_owned()))?;

        total_nanos = count
            .checked_mul(nanos)
            .and_then(|n| total_nanos.checked_add(n))
            .ok_or_else(|| ValueError::DurationOverflow(raw.to_owned()))?;
    }

    u64::try_from(total_nanos / NANOS_PER_SEC)
        .map_err(|_| ValueError::DurationOverflow(raw.to_owned()))
}
