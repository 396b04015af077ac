//! Session supervisor: one connection, start to close.
//!
//! Sequences authentication and navigation over a single [`RobotLink`],
//! catches every session failure, sends the mapped wire reply when the
//! taxonomy calls for one, and closes the connection. Failures never
//! cross the connection boundary.

use std::net::SocketAddr;

use gridpilot_proto::wire;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::{
    auth::authenticate, error::SessionError, link::RobotLink, navigate::Navigator,
};

/// Run the whole protocol over an established link: authenticate, then
/// pilot to the pickup. Returns the collected secret message.
pub async fn drive<S>(link: &mut RobotLink<S>) -> Result<String, SessionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let identity = authenticate(link).await?;
    tracing::debug!(username = %identity.username, "handing over to the pilot");

    // The link keeps its inbox across the handoff: anything that arrived
    // in the same segment as the confirmation is already queued for the
    // first position read.
    Navigator::new(link).run().await
}

/// Supervise one robot connection to completion.
///
/// This is the per-connection entry point the listener spawns. It never
/// returns an error: every failure is consumed here, answered on the
/// wire when the taxonomy maps one, and the connection is dropped.
pub async fn serve_robot<S>(stream: S, peer: SocketAddr)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    tracing::info!(%peer, "robot connected");

    let mut link = RobotLink::new(stream);
    match drive(&mut link).await {
        Ok(_) => tracing::info!(%peer, "robot session completed"),
        Err(error) => {
            tracing::warn!(%peer, %error, "robot session failed");
            if let Some(reply) = wire_reply(&error) {
                if let Err(send_error) = link.send(reply).await {
                    tracing::debug!(%peer, %send_error, "error reply not delivered");
                }
            }
        },
    }

    tracing::info!(%peer, "connection closed");
}

/// The reply owed to the client for a given failure, if any.
///
/// Timeouts and transport failures get nothing; the close is the only
/// signal an unresponsive or vanished peer can still receive.
fn wire_reply(error: &SessionError) -> Option<&'static [u8]> {
    match error {
        SessionError::Syntax(_) => Some(wire::SYNTAX_ERROR),
        SessionError::Logic => Some(wire::LOGIC_ERROR),
        SessionError::Login => Some(wire::LOGIN_FAILED),
        SessionError::KeyOutOfRange(_) => Some(wire::KEY_OUT_OF_RANGE),
        SessionError::Timeout | SessionError::Disconnected | SessionError::Io(_) => None,
    }
}
