//! Session logic for the gridpilot robot server.
//!
//! One robot, one socket, one supervisor. A session runs two state
//! machines back to back over the same [`RobotLink`]: the five-step
//! authentication handshake, then the navigation machine that pilots the
//! robot to the origin and collects its secret message. Every failure
//! kind maps to at most one wire reply and always ends the session.
//!
//! Everything here is generic over `AsyncRead + AsyncWrite`, so the whole
//! protocol can be exercised over `tokio::io::duplex` without a socket in
//! sight. The TCP listener lives in `gridpilot-server`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod error;
mod link;
mod navigate;
mod session;

pub use auth::{authenticate, RobotIdentity};
pub use error::SessionError;
pub use link::{RobotLink, IDLE_DEADLINE, RECHARGE_DEADLINE};
pub use navigate::Navigator;
pub use session::{drive, serve_robot};
