// ── Sentences and replies ──
//
// A sentence is one protocol record: an ordered set of unique key/value
// pairs. The device answers each command with zero or more data sentences
// (`!re`) followed by a terminal `!done` sentence whose attributes form the
// status map — most notably `ret`, the identifier assigned by `add`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered set of unique `(key, value)` string pairs.
///
/// Key order is preserved as received from the device. Inserting an
/// existing key replaces its value in place without changing its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence {
    pairs: IndexMap<String, String>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, replacing the value in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Sentence {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sentence = Self::new();
        for (key, value) in iter {
            sentence.insert(key, value);
        }
        sentence
    }
}

/// The full response to one command.
///
/// Rows arrive in device order; the ordering guarantee is only "stable for
/// a given device state". The status sentence carries the `!done`
/// attributes. A `Reply` is created per transport call and consumed
/// immediately by the codec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    rows: Vec<Sentence>,
    status: Sentence,
}

impl Reply {
    pub fn new(rows: Vec<Sentence>, status: Sentence) -> Self {
        Self { rows, status }
    }

    /// A reply with no data rows and an empty status map.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A reply with no data rows and the given `!done` attributes.
    pub fn done<K: Into<String>, V: Into<String>>(status: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            rows: Vec::new(),
            status: status.into_iter().collect(),
        }
    }

    pub fn rows(&self) -> &[Sentence] {
        &self.rows
    }

    pub fn first_row(&self) -> Option<&Sentence> {
        self.rows.first()
    }

    pub fn status(&self) -> &Sentence {
        &self.status
    }

    /// Look up one `!done` attribute, e.g. `ret` after an `add`.
    pub fn status_attr(&self, key: &str) -> Option<&str> {
        self.status.get(key)
    }
}
