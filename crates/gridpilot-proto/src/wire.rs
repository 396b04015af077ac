//! Wire constants: commands, client literals, and length budgets.
//!
//! Server messages are stored fully framed (terminator included) so
//! callers can put them on the socket verbatim. Length budgets count the
//! terminator, matching how the robot firmware advertises its limits.

/// Two-byte sequence ending every message in either direction.
pub const TERMINATOR: &[u8] = b"\x07\x08";

/// Step one unit in the current facing direction.
pub const MOVE: &[u8] = b"102 MOVE\x07\x08";

/// Rotate 90 degrees counterclockwise.
pub const TURN_LEFT: &[u8] = b"103 TURN LEFT\x07\x08";

/// Rotate 90 degrees clockwise.
pub const TURN_RIGHT: &[u8] = b"104 TURN RIGHT\x07\x08";

/// Ask the robot to deliver the secret payload.
pub const GET_MESSAGE: &[u8] = b"105 GET MESSAGE\x07\x08";

/// Close the session after a successful pickup.
pub const LOGOUT: &[u8] = b"106 LOGOUT\x07\x08";

/// Ask the robot which key pair it authenticates with.
pub const KEY_REQUEST: &[u8] = b"107 KEY REQUEST\x07\x08";

/// Handshake succeeded.
pub const OK: &[u8] = b"200 OK\x07\x08";

/// Client confirmation hash did not match.
pub const LOGIN_FAILED: &[u8] = b"300 LOGIN FAILED\x07\x08";

/// Malformed client message.
pub const SYNTAX_ERROR: &[u8] = b"301 SYNTAX ERROR\x07\x08";

/// Out-of-order power-state notification.
pub const LOGIC_ERROR: &[u8] = b"302 LOGIC ERROR\x07\x08";

/// Key index outside the fixed table.
pub const KEY_OUT_OF_RANGE: &[u8] = b"303 KEY OUT OF RANGE\x07\x08";

/// Robot is suspending the exchange to recharge.
pub const RECHARGING: &str = "RECHARGING";

/// Robot finished recharging and resumes the exchange.
pub const FULL_POWER: &str = "FULL POWER";

/// Username message budget.
pub const MAX_USERNAME: usize = 20;

/// Key-id message budget.
pub const MAX_KEY_ID: usize = 5;

/// Confirmation message budget.
pub const MAX_CONFIRMATION: usize = 7;

/// Position report (`OK <x> <y>`) budget.
pub const MAX_POSITION: usize = 12;

/// `RECHARGING` / `FULL POWER` notification budget.
///
/// Every read honors at least this budget so a recharge notification can
/// interrupt any exchange, whatever the caller expected.
pub const MAX_POWER_NOTICE: usize = 12;

/// Secret message budget.
pub const MAX_SECRET: usize = 100;
