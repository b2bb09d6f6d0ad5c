// ── Transport boundary ──
//
// The engine treats the device session as a black-box command executor.
// Connection lifecycle, the login handshake, sentence framing, timeouts
// and retries all live behind this trait; their failures surface as
// `Error::Transport` and are propagated unchanged.

use async_trait::async_trait;
use routeros_proto::{Reply, Word};

use crate::error::Error;

/// One authenticated API session against a device.
///
/// `execute` takes a command path (e.g. `/ip/address/print`) and its
/// argument words, performs exactly one protocol round trip, and returns
/// the device's reply.
///
/// A session is a single connection and is not reentrant: `&mut self`
/// makes issuing two operations concurrently over one session a compile
/// error. Callers needing parallelism open independent sessions.
#[async_trait]
pub trait Transport: Send {
    async fn execute(&mut self, command: &str, args: &[Word]) -> Result<Reply, Error>;
}
