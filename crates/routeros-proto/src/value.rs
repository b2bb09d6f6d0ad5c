// ── Typed wire values ──
//
// Pure, stateless conversion between wire strings and typed field values.
// Each impl is one of the conversions a record field can opt into; the
// descriptor tables in `routeros-client` pick the impl per field.
//
// Two behaviors here are contracts, not bugs, because downstream resource
// definitions depend on them:
//
// - comma list: decoding `""` yields `vec![""]` (a split, like the device
//   itself performs), while encoding an empty vec yields `""`;
// - comma integer list: decoding `""` yields `vec![]`.

use crate::error::ValueError;

/// Bidirectional conversion between a typed value and its wire string.
///
/// `from_wire(to_wire(v)) == v` holds for all impls except the empty comma
/// list (above) and [`RosDuration`](crate::RosDuration), whose encode and
/// decode sides speak different device dialects (bare seconds out, unit
/// suffixes in).
pub trait WireValue: Sized {
    fn to_wire(&self) -> String;
    fn from_wire(raw: &str) -> Result<Self, ValueError>;
}

impl WireValue for bool {
    fn to_wire(&self) -> String {
        self.to_string()
    }

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ValueError::InvalidBool(other.to_owned())),
        }
    }
}

impl WireValue for i64 {
    fn to_wire(&self) -> String {
        self.to_string()
    }

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        raw.parse().map_err(|source| ValueError::InvalidInt {
            raw: raw.to_owned(),
            source,
        })
    }
}

impl WireValue for String {
    fn to_wire(&self) -> String {
        self.clone()
    }

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        Ok(raw.to_owned())
    }
}

/// Comma-separated string list, e.g. a script `policy`.
impl WireValue for Vec<String> {
    fn to_wire(&self) -> String {
        self.join(",")
    }

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        // `"".split(',')` yields one empty element; preserved deliberately.
        Ok(raw.split(',').map(str::to_owned).collect())
    }
}

/// Comma-separated integer list, e.g. bridge `vlan-ids`.
impl WireValue for Vec<i64> {
    fn to_wire(&self) -> String {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn from_wire(raw: &str) -> Result<Self, ValueError> {
        if raw.is_empty() {
            return Ok(Self::new());
        }
        // Any bad element fails the whole list; no partial results.
        raw.split(',').map(i64::from_wire).collect()
    }
}
