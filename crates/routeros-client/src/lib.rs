//! Typed record codec and CRUD engine for the MikroTik RouterOS API.
//!
//! The device represents every resource kind — addresses, leases, scripts,
//! interfaces, routing peers — as sentences of `key=value` words behind a
//! uniform add/print/set/remove command family. This crate gives callers
//! typed Rust records and one shared lifecycle across all of them:
//!
//! - **[`Resource`]** — the contract a record kind implements: a static
//!   [`FieldSpec`] descriptor table (wire key, converter, read-only flag
//!   per field) plus identifier/search/delete semantics and an optional
//!   post-add hook.
//! - **[`codec`]** — encodes records into attribute words and decodes
//!   reply sentences back, field by field through the descriptor table.
//! - **[`Client`]** — the CRUD engine: add (write + confirmatory read),
//!   find by identifier or arbitrary field, update, delete, list.
//! - **[`Transport`]** — the black-box session boundary; the TCP
//!   connection, login, and sentence framing live behind it.
//! - **[`Error`]** — the shared taxonomy. [`Error::NotFound`] is
//!   structurally matchable, including through wrapped chains via
//!   [`is_not_found`].
//!
//! Defining a record kind means writing its struct and descriptor table
//! once; everything else is inherited:
//!
//! ```
//! use routeros_client::{FieldSpec, Resource};
//! use routeros_proto::WireValue;
//!
//! #[derive(Debug, Clone, Default)]
//! struct IpAddress {
//!     id: String,
//!     address: String,
//!     interface: String,
//! }
//!
//! impl Resource for IpAddress {
//!     const PATH: &'static str = "/ip/address";
//!     const FIELDS: &'static [FieldSpec<Self>] = &[
//!         FieldSpec {
//!             key: ".id",
//!             read_only: false,
//!             encode: |r: &IpAddress| (!r.id.is_empty()).then(|| r.id.clone()),
//!             decode: |r, raw| {
//!                 r.id = String::from_wire(raw)?;
//!                 Ok(())
//!             },
//!         },
//!         FieldSpec {
//!             key: "address",
//!             read_only: false,
//!             encode: |r: &IpAddress| Some(r.address.to_wire()),
//!             decode: |r, raw| {
//!                 r.address = String::from_wire(raw)?;
//!                 Ok(())
//!             },
//!         },
//!         FieldSpec {
//!             key: "interface",
//!             read_only: false,
//!             encode: |r: &IpAddress| Some(r.interface.to_wire()),
//!             decode: |r, raw| {
//!                 r.interface = String::from_wire(raw)?;
//!                 Ok(())
//!             },
//!         },
//!     ];
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn set_id(&mut self, id: String) {
//!         self.id = id;
//!     }
//! }
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod resource;
pub mod transport;

pub use client::Client;
pub use error::{Error, is_not_found};
pub use resource::{Action, FieldSpec, Resource};
pub use transport::Transport;

// Wire types, re-exported so resource definitions need one dependency.
pub use routeros_proto::{Reply, RosDuration, Sentence, ValueError, WireValue, Word};
