//! Message extraction from a raw byte buffer.
//!
//! The receive path accumulates socket bytes into a session-owned
//! [`BytesMut`] and repeatedly asks [`extract_message`] for the next
//! terminated message. Keeping extraction pure (no I/O, no timeouts)
//! makes the length rules directly testable and fuzzable; the buffered
//! read loop lives in `gridpilot-core`.

use bytes::BytesMut;

use crate::{errors::ProtocolError, wire::TERMINATOR};

/// Try to extract the next terminated message from `inbox`.
///
/// `limit` is the total frame budget in bytes, terminator included, after
/// any floor-raising by the caller. On success the message bytes plus the
/// terminator are consumed from `inbox`; any following bytes stay put for
/// the next call.
///
/// Returns `Ok(None)` when the buffer holds no complete message yet but
/// is still within budget, so the caller should read more bytes.
///
/// # Errors
///
/// - [`ProtocolError::Oversized`] if the buffered run exceeds
///   `limit - 2` without a terminator, or a terminator lands past the
///   budget. The first case fires before the terminator is ever seen:
///   an over-length frame must be rejected without buffering it whole.
/// - [`ProtocolError::NotText`] if the payload is not UTF-8.
pub fn extract_message(
    inbox: &mut BytesMut,
    limit: usize,
) -> Result<Option<String>, ProtocolError> {
    let Some(at) = find_terminator(inbox) else {
        if inbox.len() > limit.saturating_sub(TERMINATOR.len()) {
            return Err(ProtocolError::Oversized(limit));
        }
        return Ok(None);
    };

    let end = at + TERMINATOR.len();
    if end > limit {
        return Err(ProtocolError::Oversized(limit));
    }

    let frame = inbox.split_to(end);
    let payload =
        std::str::from_utf8(&frame[..at]).map_err(|_| ProtocolError::NotText)?;

    Ok(Some(payload.to_owned()))
}

/// Byte offset of the first terminator in `haystack`, if any.
fn find_terminator(haystack: &[u8]) -> Option<usize> {
    haystack.windows(TERMINATOR.len()).position(|window| window == TERMINATOR)
}
