//! Protocol violation errors.
//!
//! These cover everything a client can get wrong at the wire level:
//! over-length frames, non-text payloads, and malformed message bodies.
//! They carry no transport context; `gridpilot-core` wraps them into its
//! session error taxonomy.

use thiserror::Error;

/// A violation of the wire format by the remote client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// More bytes accumulated than the frame budget allows.
    ///
    /// Raised as soon as the budget is exceeded, without waiting for a
    /// terminator that may never come.
    #[error("message exceeded the {0}-byte frame budget")]
    Oversized(usize),

    /// Payload bytes do not decode as UTF-8 text.
    #[error("message is not valid text")]
    NotText,

    /// A structurally invalid message body (bad digits, bad position
    /// report shape, empty username, ...).
    #[error("malformed {0}")]
    Malformed(&'static str),
}
