//! Key table and handshake arithmetic.
//!
//! Both sides derive a shared 16-bit secret from the username, offset it
//! with one of five fixed key pairs, and exchange the offsets. All
//! arithmetic is modulo 2^16, which is exactly `u16` wrapping arithmetic;
//! wider intermediates are reduced explicitly rather than left to wrap.

use crate::errors::ProtocolError;

/// One entry of the fixed authentication key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    /// Offset the server adds to the base hash.
    pub server: u16,
    /// Offset the client adds to the base hash.
    pub client: u16,
}

/// The five key pairs, indexed by the key id the client announces.
pub const KEY_TABLE: [KeyPair; 5] = [
    KeyPair { server: 23019, client: 32037 },
    KeyPair { server: 32037, client: 29295 },
    KeyPair { server: 18789, client: 13603 },
    KeyPair { server: 16443, client: 29533 },
    KeyPair { server: 18189, client: 21952 },
];

/// Shared secret derived from the username: sum of its byte values,
/// times 1000, modulo 2^16.
pub fn username_hash(username: &[u8]) -> u16 {
    let sum: u64 = username.iter().map(|&byte| u64::from(byte)).sum();
    ((sum * 1000) % 65536) as u16
}

/// The value the server sends to prove it knows the key pair.
pub fn server_confirmation(base_hash: u16, pair: KeyPair) -> u16 {
    base_hash.wrapping_add(pair.server)
}

/// Whether the client's confirmation proves it derived the same base
/// hash: `(response - client_key) mod 2^16 == base_hash`.
///
/// The response is validated to at most five decimal digits before it
/// reaches here, so reducing mod 2^16 first keeps the subtraction inside
/// `u16` instead of leaning on wider-integer wrap.
pub fn confirmation_matches(response: u32, base_hash: u16, pair: KeyPair) -> bool {
    ((response % 65536) as u16).wrapping_sub(pair.client) == base_hash
}

/// Parse a non-empty, all-decimal-digit string.
///
/// # Errors
///
/// [`ProtocolError::Malformed`] with the given label when the text is
/// empty, contains a non-digit, or overflows `u32`.
pub fn parse_decimal(text: &str, label: &'static str) -> Result<u32, ProtocolError> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ProtocolError::Malformed(label));
    }
    text.parse().map_err(|_| ProtocolError::Malformed(label))
}
