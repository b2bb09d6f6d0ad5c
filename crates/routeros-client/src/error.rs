use routeros_proto::ValueError;
use thiserror::Error;

/// Top-level error type for the `routeros-client` crate.
///
/// Covers every failure mode of the codec and CRUD engine. Transport
/// failures are propagated unchanged and never reinterpreted as Not-Found;
/// downstream layers match [`Error::NotFound`] (directly or through
/// [`is_not_found`]) to decide "treat as absent" vs. "propagate as failure".
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// Failure inside the transport session: connection, login, framing,
    /// or a device `!trap`. The source is whatever the transport produced.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    // ── Decoding ────────────────────────────────────────────────────
    /// A wire value could not be converted to the declared field type.
    /// Always fatal to the surrounding decode; no partial records.
    #[error("decoding field `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: ValueError,
    },

    // ── Lookup ──────────────────────────────────────────────────────
    /// A find/lookup matched zero rows on the device.
    #[error("resource with field `{field}={value}` not found")]
    NotFound { field: String, value: String },

    /// Update called on a record whose identifier field is empty.
    /// The caller must find the record first.
    #[error("{path}: update requires a populated identifier")]
    MissingId { path: &'static str },
}

impl Error {
    /// Wrap a transport-level failure.
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(source.into())
    }

    /// Returns `true` if this error means "zero matching rows".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if the device rejected the command family itself,
    /// i.e. the feature is unsupported on this software version.
    ///
    /// Older RouterOS versions answer unknown paths with a trap whose
    /// message starts with "no such command prefix"; this is a transport
    /// failure, distinct from Not-Found.
    pub fn is_unsupported_command(&self) -> bool {
        match self {
            Self::Transport(source) => source.to_string().contains("no such command"),
            _ => false,
        }
    }
}

/// Walk an error chain looking for [`Error::NotFound`].
///
/// Matches structurally through arbitrary wrapping: a `thiserror` wrapper
/// holding the client error as `#[source]`, or an `anyhow` chain with
/// added context, still reports as not-found. A chain whose root cause is
/// any other variant does not.
pub fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.downcast_ref::<Error>().is_some_and(Error::is_not_found) {
            return true;
        }
        current = e.source();
    }
    false
}
