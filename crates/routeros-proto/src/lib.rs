//! Wire-level types for the MikroTik RouterOS sentence API.
//!
//! The RouterOS API exchanges "sentences": ordered runs of words, where each
//! word is a `key=value` pair in one of two forms (`=key=value` assignments,
//! `?key=value` print filters). This crate models that layer without doing
//! any I/O:
//!
//! - **[`Word`]** — one command argument, attribute or query form.
//! - **[`Sentence`]** — an ordered set of unique key/value pairs, the unit
//!   the device returns per matching row (`!re`).
//! - **[`Reply`]** — the full response to one command: zero or more data
//!   rows plus the terminal `!done` status attributes (e.g. `ret` carrying
//!   a freshly assigned identifier).
//! - **[`WireValue`]** — bidirectional conversion between wire strings and
//!   typed values: booleans, integers, comma lists, integer lists, and the
//!   device's human-readable durations ([`RosDuration`]).
//!
//! Connection handling, login, and sentence framing live behind the
//! `Transport` trait in `routeros-client`; this crate is pure data.

pub mod duration;
pub mod error;
pub mod sentence;
pub mod value;
pub mod word;

pub use duration::RosDuration;
pub use error::ValueError;
pub use sentence::{Reply, Sentence};
pub use value::WireValue;
pub use word::Word;
