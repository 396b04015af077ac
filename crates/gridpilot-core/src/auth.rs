//! Five-step authentication handshake.
//!
//! Username, key request, server confirmation, client confirmation, OK.
//! The shared secret is the username hash; each side proves knowledge of
//! it offset by its half of the chosen key pair.

use gridpilot_proto::{auth, wire, KeyPair, ProtocolError, TERMINATOR, KEY_TABLE};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::{
    error::SessionError,
    link::{RobotLink, IDLE_DEADLINE},
};

/// Outcome of a successful handshake. Immutable for the session's life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotIdentity {
    /// Client-supplied name, at most 18 payload bytes.
    pub username: String,
    /// Shared secret derived from the username.
    pub base_hash: u16,
    /// Index the client announced into the key table.
    pub key_id: u32,
    /// The key pair behind that index.
    pub key: KeyPair,
}

/// Run the handshake on a fresh session.
///
/// # Errors
///
/// - [`SessionError::Syntax`] for an empty username, a non-decimal key
///   id, or a confirmation that is not a decimal of at most five digits
/// - [`SessionError::KeyOutOfRange`] for a key id past the table
/// - [`SessionError::Login`] when the confirmation does not prove the
///   shared secret
/// - [`SessionError::Timeout`] / [`SessionError::Logic`] as surfaced by
///   the underlying exchange
pub async fn authenticate<S>(link: &mut RobotLink<S>) -> Result<RobotIdentity, SessionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    tracing::debug!("robot started authenticating");

    let username = link.exchange(wire::MAX_USERNAME, IDLE_DEADLINE).await?;
    if username.is_empty() {
        return Err(ProtocolError::Malformed("username").into());
    }
    let base_hash = auth::username_hash(username.as_bytes());
    tracing::debug!(%username, "robot sent username");

    link.send(wire::KEY_REQUEST).await?;
    let key_id = auth::parse_decimal(
        &link.exchange(wire::MAX_KEY_ID, IDLE_DEADLINE).await?,
        "key id",
    )?;
    let key = *KEY_TABLE
        .get(key_id as usize)
        .ok_or(SessionError::KeyOutOfRange(key_id))?;
    tracing::debug!(key_id, "robot chose its auth key");

    let server_hash = auth::server_confirmation(base_hash, key);
    let mut frame = server_hash.to_string().into_bytes();
    frame.extend_from_slice(TERMINATOR);
    link.send(&frame).await?;

    let confirmation = link.exchange(wire::MAX_CONFIRMATION, IDLE_DEADLINE).await?;
    // The frame budget is floored at 12 for recharge notices, so the
    // five-digit cap has to be enforced here.
    if confirmation.len() > wire::MAX_CONFIRMATION - TERMINATOR.len() {
        return Err(ProtocolError::Malformed("confirmation").into());
    }
    let response = auth::parse_decimal(&confirmation, "confirmation")?;
    if !auth::confirmation_matches(response, base_hash, key) {
        return Err(SessionError::Login);
    }

    link.send(wire::OK).await?;
    tracing::info!(%username, "robot authenticated");

    Ok(RobotIdentity { username, base_hash, key_id, key })
}
