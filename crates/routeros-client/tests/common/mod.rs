// Shared test fixtures: an in-memory device speaking the add/print/set/
// remove command family, plus a spread of realistic resource kinds.

use std::collections::HashMap;

use async_trait::async_trait;
use routeros_client::{Error, FieldSpec, Resource, Transport};
use routeros_proto::{Reply, RosDuration, Sentence, WireValue, Word};

// ── Fake device ─────────────────────────────────────────────────────

struct Table {
    /// Wire key `set`/`remove` locate rows by (`.id` or a business key).
    key: String,
    /// Key/value pairs merged into new rows when the caller didn't send
    /// them — simulates the device defaulting fields on create.
    defaults: Vec<(String, String)>,
    /// Fields the device stores as durations: bare-second writes read
    /// back unit-suffixed ("600" becomes "600s"), like the real device.
    duration_keys: Vec<String>,
    rows: Vec<Sentence>,
}

impl Table {
    fn normalize(&self, row: &mut Sentence) {
        for key in &self.duration_keys {
            if let Some(value) = row.get(key) {
                if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
                    let suffixed = format!("{value}s");
                    row.insert(key.clone(), suffixed);
                }
            }
        }
    }
}

/// In-memory stand-in for one device session.
///
/// Registered menu paths honor add/print/set/remove against stored
/// sentences; `add` assigns `*N` identifiers and reports them via the
/// status map's `ret` (unless configured not to). Unregistered paths
/// answer with the device's "no such command prefix" trap text.
pub struct FakeDevice {
    tables: HashMap<String, Table>,
    next_id: u64,
    report_ret: bool,
}

impl Default for FakeDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDevice {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            next_id: 1,
            report_ret: true,
        }
    }

    /// Register a menu path whose rows are located by `.id`.
    pub fn with_table(self, path: &str) -> Self {
        self.with_keyed_table(path, ".id")
    }

    /// Register a menu path whose rows are located by a business key.
    pub fn with_keyed_table(mut self, path: &str, key: &str) -> Self {
        self.tables.insert(
            path.to_owned(),
            Table {
                key: key.to_owned(),
                defaults: Vec::new(),
                duration_keys: Vec::new(),
                rows: Vec::new(),
            },
        );
        self
    }

    /// Mark a field the device stores as a duration.
    pub fn with_duration_field(mut self, path: &str, key: &str) -> Self {
        if let Some(table) = self.tables.get_mut(path) {
            table.duration_keys.push(key.to_owned());
        }
        self
    }

    /// Default a field value on rows created without it.
    pub fn with_default(mut self, path: &str, key: &str, value: &str) -> Self {
        if let Some(table) = self.tables.get_mut(path) {
            table.defaults.push((key.to_owned(), value.to_owned()));
        }
        self
    }

    /// Simulate a software version whose `add` only confirms success.
    pub fn without_ret(mut self) -> Self {
        self.report_ret = false;
        self
    }

    /// Stored rows for one path, for post-hoc inspection.
    pub fn rows(&self, path: &str) -> &[Sentence] {
        self.tables
            .get(path)
            .map_or(&[], |table| table.rows.as_slice())
    }

    /// Inject a raw row, e.g. one carrying a value the codec rejects.
    pub fn push_row(&mut self, path: &str, row: Sentence) {
        if let Some(table) = self.tables.get_mut(path) {
            table.rows.push(row);
        }
    }

    fn add(&mut self, path: &str, args: &[Word]) -> Result<Reply, Error> {
        let assigned = format!("*{:X}", self.next_id);
        self.next_id += 1;

        let report_ret = self.report_ret;
        let table = self
            .tables
            .get_mut(path)
            .ok_or_else(|| Error::transport("no such command prefix"))?;

        let mut row = Sentence::new();
        let auto_id = table.key == ".id";
        if auto_id {
            row.insert(".id", assigned.clone());
        }
        for word in args {
            row.insert(word.key(), word.value());
        }
        for (key, value) in &table.defaults {
            if row.get(key).is_none() {
                row.insert(key.clone(), value.clone());
            }
        }
        table.normalize(&mut row);
        table.rows.push(row);

        if auto_id && report_ret {
            Ok(Reply::done([("ret", assigned)]))
        } else {
            Ok(Reply::empty())
        }
    }

    fn print(&self, path: &str, args: &[Word]) -> Result<Reply, Error> {
        let table = self
            .tables
            .get(path)
            .ok_or_else(|| Error::transport("no such command prefix"))?;

        let rows = table
            .rows
            .iter()
            .filter(|row| {
                args.iter()
                    .all(|word| row.get(word.key()) == Some(word.value()))
            })
            .cloned()
            .collect();
        Ok(Reply::new(rows, Sentence::new()))
    }

    fn set(&mut self, path: &str, args: &[Word]) -> Result<Reply, Error> {
        let table = self
            .tables
            .get_mut(path)
            .ok_or_else(|| Error::transport("no such command prefix"))?;

        let locator = args
            .iter()
            .find(|word| word.key() == table.key)
            .ok_or_else(|| Error::transport("no such item"))?;
        let index = table
            .rows
            .iter()
            .position(|row| row.get(locator.key()) == Some(locator.value()))
            .ok_or_else(|| Error::transport("no such item"))?;

        let mut row = table.rows[index].clone();
        for word in args {
            row.insert(word.key(), word.value());
        }
        table.normalize(&mut row);
        table.rows[index] = row;
        Ok(Reply::empty())
    }

    fn remove(&mut self, path: &str, args: &[Word]) -> Result<Reply, Error> {
        let table = self
            .tables
            .get_mut(path)
            .ok_or_else(|| Error::transport("no such command prefix"))?;

        let locator = args
            .first()
            .ok_or_else(|| Error::transport("no such item"))?;
        let before = table.rows.len();
        table
            .rows
            .retain(|row| row.get(locator.key()) != Some(locator.value()));
        if table.rows.len() == before {
            return Err(Error::transport("no such item"));
        }
        Ok(Reply::empty())
    }
}

#[async_trait]
impl Transport for FakeDevice {
    async fn execute(&mut self, command: &str, args: &[Word]) -> Result<Reply, Error> {
        let (path, verb) = command
            .rsplit_once('/')
            .ok_or_else(|| Error::transport("no such command prefix"))?;
        match verb {
            "add" => self.add(path, args),
            "print" => self.print(path, args),
            "set" => self.set(path, args),
            "remove" => self.remove(path, args),
            _ => Err(Error::transport("no such command prefix")),
        }
    }
}

// ── Resource kinds ──────────────────────────────────────────────────

/// Standard kind: device-assigned `.id`, a read-only flag, an
/// omit-if-empty comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpAddress {
    pub id: String,
    pub address: String,
    pub interface: String,
    pub disabled: bool,
    pub comment: String,
    pub dynamic: bool,
}

impl Resource for IpAddress {
    const PATH: &'static str = "/ip/address";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            key: ".id",
            read_only: false,
            encode: |r: &IpAddress| (!r.id.is_empty()).then(|| r.id.clone()),
            decode: |r, raw| {
                r.id = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "address",
            read_only: false,
            encode: |r: &IpAddress| Some(r.address.to_wire()),
            decode: |r, raw| {
                r.address = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "interface",
            read_only: false,
            encode: |r: &IpAddress| Some(r.interface.to_wire()),
            decode: |r, raw| {
                r.interface = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "disabled",
            read_only: false,
            encode: |r: &IpAddress| Some(r.disabled.to_wire()),
            decode: |r, raw| {
                r.disabled = bool::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "comment",
            read_only: false,
            encode: |r: &IpAddress| (!r.comment.is_empty()).then(|| r.comment.clone()),
            decode: |r, raw| {
                r.comment = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "dynamic",
            read_only: true,
            encode: |_: &IpAddress| None,
            decode: |r, raw| {
                r.dynamic = bool::from_wire(raw)?;
                Ok(())
            },
        },
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Kind whose `add` gives no `ret` on some versions: re-read goes through
/// the search field (`name`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub id: String,
    pub name: String,
    pub source: String,
    pub policy: Vec<String>,
}

impl Resource for Script {
    const PATH: &'static str = "/system/script";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            key: ".id",
            read_only: false,
            encode: |r: &Script| (!r.id.is_empty()).then(|| r.id.clone()),
            decode: |r, raw| {
                r.id = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "name",
            read_only: false,
            encode: |r: &Script| Some(r.name.to_wire()),
            decode: |r, raw| {
                r.name = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "source",
            read_only: false,
            encode: |r: &Script| Some(r.source.to_wire()),
            decode: |r, raw| {
                r.source = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "policy",
            read_only: false,
            encode: |r: &Script| Some(r.policy.to_wire()),
            decode: |r, raw| {
                r.policy = Vec::<String>::from_wire(raw)?;
                Ok(())
            },
        },
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_field() -> &'static str {
        "name"
    }

    fn search_value(&self) -> String {
        self.name.clone()
    }
}

/// Kind with a comma integer list field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BridgeVlan {
    pub id: String,
    pub bridge: String,
    pub vlan_ids: Vec<i64>,
}

impl Resource for BridgeVlan {
    const PATH: &'static str = "/interface/bridge/vlan";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            key: ".id",
            read_only: false,
            encode: |r: &BridgeVlan| (!r.id.is_empty()).then(|| r.id.clone()),
            decode: |r, raw| {
                r.id = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "bridge",
            read_only: false,
            encode: |r: &BridgeVlan| Some(r.bridge.to_wire()),
            decode: |r, raw| {
                r.bridge = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "vlan-ids",
            read_only: false,
            encode: |r: &BridgeVlan| Some(r.vlan_ids.to_wire()),
            decode: |r, raw| {
                r.vlan_ids = Vec::<i64>::from_wire(raw)?;
                Ok(())
            },
        },
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Legacy kind: no device-assigned identifier at all. `name` is the
/// identifier, the search key, and the delete key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BgpInstance {
    pub name: String,
    pub remote_as: i64,
    pub keepalive_time: RosDuration,
}

impl Resource for BgpInstance {
    const PATH: &'static str = "/routing/bgp/instance";
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            key: "name",
            read_only: false,
            encode: |r: &BgpInstance| Some(r.name.to_wire()),
            decode: |r, raw| {
                r.name = String::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "remote-as",
            read_only: false,
            encode: |r: &BgpInstance| Some(r.remote_as.to_wire()),
            decode: |r, raw| {
                r.remote_as = i64::from_wire(raw)?;
                Ok(())
            },
        },
        FieldSpec {
            key: "keepalive-time",
            read_only: false,
            encode: |r: &BgpInstance| Some(r.keepalive_time.to_wire()),
            decode: |r, raw| {
                r.keepalive_time = RosDuration::from_wire(raw)?;
                Ok(())
            },
        },
    ];

    fn id_field() -> &'static str {
        "name"
    }

    fn id(&self) -> &str {
        &self.name
    }

    fn set_id(&mut self, id: String) {
        self.name = id;
    }

    fn delete_field() -> &'static str {
        "name"
    }

    fn delete_value(&self) -> String {
        self.name.clone()
    }
}
