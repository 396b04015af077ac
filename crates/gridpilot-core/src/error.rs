//! Session failure taxonomy.
//!
//! Every variant terminates the session. Lower layers only construct
//! these; the supervisor in [`crate::session`] is the single place that
//! catches them and decides which wire reply, if any, goes out before
//! the socket closes.

use gridpilot_proto::ProtocolError;
use thiserror::Error;

/// Why a robot session ended early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No bytes arrived within the read deadline.
    #[error("robot idle past the read deadline")]
    Timeout,

    /// The client violated the wire format.
    #[error(transparent)]
    Syntax(#[from] ProtocolError),

    /// A power-state notification arrived out of order.
    #[error("power-state message out of order")]
    Logic,

    /// The confirmation hash did not match the expected value.
    #[error("confirmation hash mismatch")]
    Login,

    /// The announced key id has no entry in the key table.
    #[error("key id {0} outside the key table")]
    KeyOutOfRange(u32),

    /// The peer closed the connection mid-exchange.
    #[error("connection closed by peer")]
    Disconnected,

    /// The socket failed underneath the session.
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
}
