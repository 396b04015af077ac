//! Wire format for the gridpilot robot-control protocol.
//!
//! Every message in either direction is 7-bit ASCII text ending with the
//! two-byte terminator `0x07 0x08`. This crate holds the pure, I/O-free
//! pieces of the protocol:
//!
//! - [`wire`]: server command bytes, client literals, and the per-message
//!   length budgets
//! - [`frame`]: extraction of one terminated message from a byte buffer,
//!   with length enforcement that triggers before the terminator arrives
//! - [`auth`]: the fixed key table and the mod-2^16 handshake arithmetic
//! - [`nav`]: grid positions, headings, and position-report parsing
//!
//! Session state machines and socket handling live in `gridpilot-core`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod errors;
pub mod frame;
pub mod nav;
pub mod wire;

pub use auth::{KeyPair, KEY_TABLE};
pub use errors::ProtocolError;
pub use frame::extract_message;
pub use nav::{Heading, Position};
pub use wire::TERMINATOR;
