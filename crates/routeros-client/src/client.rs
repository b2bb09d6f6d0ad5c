// ── CRUD engine ──
//
// Uniform Add/Find/Update/Delete/List over any `Resource`, generic over
// the transport session. Resource kinds contribute only their descriptor
// table and contract defaults; everything here is shared.

use routeros_proto::Word;
use tracing::debug;

use crate::codec;
use crate::error::Error;
use crate::resource::{Action, Resource};
use crate::transport::Transport;

/// Typed CRUD client over one device session.
///
/// Owns its transport; every operation is one logical request. `add` and
/// `update` perform two physical round trips — the write, then a
/// confirmatory read — because the device may normalize or default fields
/// on write: the authoritative state always comes from the read-back,
/// never from echoing the caller's input.
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying session (e.g. for raw commands the typed layer
    /// doesn't cover).
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Create a record on the device and return its server-confirmed
    /// state.
    ///
    /// After the write, the kind's `after_add` hook captures the assigned
    /// identifier (by default from the status map's `ret`); kinds whose
    /// device reports nothing are re-read through their search field
    /// instead.
    pub async fn add<R: Resource>(&mut self, record: &R) -> Result<R, Error> {
        let command = R::command(Action::Add);
        let args = codec::encode(record);
        debug!(%command, words = args.len(), "add");
        let reply = self.transport.execute(&command, &args).await?;

        let mut created = record.clone();
        created.after_add(&reply);
        if created.id().is_empty() {
            self.find(R::search_field(), &created.search_value()).await
        } else {
            let id = created.id().to_owned();
            self.get(&id).await
        }
    }

    /// Find one record by its device identifier.
    pub async fn get<R: Resource>(&mut self, id: &str) -> Result<R, Error> {
        self.find(R::id_field(), id).await
    }

    /// Find one record by an arbitrary field.
    ///
    /// A zero-match `print` returns zero rows; the decoded record's empty
    /// identifier is what distinguishes Not-Found from a transport
    /// failure.
    pub async fn find<R: Resource>(&mut self, field: &str, value: &str) -> Result<R, Error> {
        let command = R::command(Action::Find);
        let args = [Word::query(field, value)];
        debug!(%command, field, value, "find");
        let reply = self.transport.execute(&command, &args).await?;

        let record: R = codec::decode_first(&reply)?;
        if record.id().is_empty() {
            return Err(Error::NotFound {
                field: field.to_owned(),
                value: value.to_owned(),
            });
        }
        Ok(record)
    }

    /// Rewrite a record the device already knows, returning its
    /// server-confirmed post-update state.
    ///
    /// The identifier must already be populated (find first if unknown);
    /// an empty identifier fails deterministically rather than mutating an
    /// arbitrary row. The identifier travels as a plain attribute word.
    pub async fn update<R: Resource>(&mut self, record: &R) -> Result<R, Error> {
        if record.id().is_empty() {
            return Err(Error::MissingId { path: R::PATH });
        }
        let command = R::command(Action::Update);
        let args = codec::encode(record);
        debug!(%command, id = record.id(), "update");
        self.transport.execute(&command, &args).await?;

        let id = record.id().to_owned();
        self.get(&id).await
    }

    /// Remove a record. The kind's contract decides whether removal goes
    /// by device identifier or business key. Success has no return value;
    /// transport errors propagate unchanged.
    pub async fn delete<R: Resource>(&mut self, record: &R) -> Result<(), Error> {
        let command = R::command(Action::Delete);
        let args = [Word::attr(R::delete_field(), record.delete_value())];
        debug!(%command, field = R::delete_field(), "delete");
        self.transport.execute(&command, &args).await?;
        Ok(())
    }

    /// List every record of a kind, in device-returned order. Either the
    /// full decoded set or an error; never a silently partial set.
    pub async fn list<R: Resource>(&mut self) -> Result<Vec<R>, Error> {
        let command = R::command(Action::Find);
        debug!(%command, "list");
        let reply = self.transport.execute(&command, &[]).await?;
        codec::decode_rows(&reply)
    }

    /// List records matching one print filter.
    pub async fn list_where<R: Resource>(
        &mut self,
        field: &str,
        value: &str,
    ) -> Result<Vec<R>, Error> {
        let command = R::command(Action::Find);
        let args = [Word::query(field, value)];
        debug!(%command, field, value, "list_where");
        let reply = self.transport.execute(&command, &args).await?;
        codec::decode_rows(&reply)
    }
}
