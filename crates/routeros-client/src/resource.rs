// ── Resource contract ──
//
// Each record kind plugs into the CRUD engine by implementing `Resource`:
// a static field-descriptor table plus the per-kind identifier, search and
// delete semantics. The table replaces runtime reflection with function
// pointers, so the field↔wire-key mapping is checked at compile time and
// lives in one place per kind.

use routeros_proto::{Reply, ValueError};
use strum::Display;

/// The four lifecycle actions, rendered as the device's command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Add,
    #[strum(serialize = "print")]
    Find,
    #[strum(serialize = "set")]
    Update,
    #[strum(serialize = "remove")]
    Delete,
}

/// Declarative description of one record field.
///
/// `encode` returns `None` to omit the field from the command (zero-valued
/// omit-if-zero fields, e.g. an unassigned `.id`). `decode` applies one
/// wire value to the record in place. Read-only fields decode but never
/// encode. Wire keys must be unique within a record type.
pub struct FieldSpec<R> {
    pub key: &'static str,
    pub read_only: bool,
    pub encode: fn(&R) -> Option<String>,
    pub decode: fn(&mut R, &str) -> Result<(), ValueError>,
}

impl<R> Clone for FieldSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldSpec<R> {}

/// One device resource kind (an address, a lease, a script, ...).
///
/// The provided defaults cover the common case: the device assigns `.id`,
/// search and delete both go through it, and `add` returns the new
/// identifier in the `!done` status map as `ret`. Legacy kinds override:
/// a business-key identifier overrides `id_field`/`id`/`set_id`, kinds
/// that delete by name override `delete_field`/`delete_value`, and kinds
/// whose `add` returns no `ret` simply rely on the search-field fallback
/// (the default `after_add` finds nothing to capture).
pub trait Resource: Default + Clone + Send + Sync + 'static {
    /// Menu path of this kind, e.g. `/ip/address`.
    const PATH: &'static str;

    /// Field descriptors in wire declaration order.
    const FIELDS: &'static [FieldSpec<Self>];

    /// Wire key of the identifier the device uses to name one record.
    fn id_field() -> &'static str {
        ".id"
    }

    /// Current identifier value; empty means "not yet known", which the
    /// engine reads as Not-Found after a decode of zero rows.
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Field used when finding by a human-meaningful key instead of the
    /// device identifier.
    fn search_field() -> &'static str {
        Self::id_field()
    }

    fn search_value(&self) -> String {
        self.id().to_owned()
    }

    /// Field/value pair sent with `remove`. Some kinds delete by device
    /// identifier, others by business key.
    fn delete_field() -> &'static str {
        Self::id_field()
    }

    fn delete_value(&self) -> String {
        self.id().to_owned()
    }

    /// Full command path for one action, e.g. `/ip/address/print`.
    fn command(action: Action) -> String {
        format!("{}/{action}", Self::PATH)
    }

    /// Capture the identifier a successful `add` produced, if the device
    /// reports one. The default reads `ret` from the status map.
    fn after_add(&mut self, reply: &Reply) {
        if let Some(ret) = reply.status_attr("ret") {
            self.set_id(ret.to_owned());
        }
    }
}
