//! Buffered, timeout-aware message I/O for one robot session.
//!
//! [`RobotLink`] owns the socket and the session inbox for the whole
//! connection lifetime. Both protocol phases read through the same link,
//! so bytes that arrive early for the next phase are already sitting in
//! the inbox when that phase starts.

use std::time::Duration;

use bytes::BytesMut;
use gridpilot_proto::{extract_message, wire};
use tokio::{
    io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt},
    time::timeout,
};

use crate::error::SessionError;

/// Deadline for a robot to start answering a command.
pub const IDLE_DEADLINE: Duration = Duration::from_secs(1);

/// Deadline for a recharging robot to report full power.
pub const RECHARGE_DEADLINE: Duration = Duration::from_secs(5);

/// Framed message stream over one robot connection.
pub struct RobotLink<S> {
    stream: S,
    inbox: BytesMut,
}

impl<S> RobotLink<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap a freshly accepted connection.
    pub fn new(stream: S) -> Self {
        Self { stream, inbox: BytesMut::with_capacity(wire::MAX_SECRET) }
    }

    /// Write one fully framed payload (terminator included) to the robot.
    pub async fn send(&mut self, frame: &[u8]) -> Result<(), SessionError> {
        self.stream.write_all(frame).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Next client message, with recharge interludes handled in place.
    ///
    /// A `RECHARGING` notification suspends the pending read: the robot
    /// gets [`RECHARGE_DEADLINE`] to report `FULL POWER`, after which the
    /// original read resumes with its own limits. `FULL POWER` anywhere
    /// else, or anything other than `FULL POWER` after a recharge, is a
    /// [`SessionError::Logic`].
    pub async fn exchange(
        &mut self,
        max_len: usize,
        idle: Duration,
    ) -> Result<String, SessionError> {
        loop {
            let message = self.read_message(max_len, idle).await?;
            if message == wire::FULL_POWER {
                return Err(SessionError::Logic);
            }
            if message != wire::RECHARGING {
                return Ok(message);
            }

            tracing::debug!("robot started recharging");
            let resumed =
                self.read_message(wire::MAX_POWER_NOTICE, RECHARGE_DEADLINE).await?;
            if resumed != wire::FULL_POWER {
                return Err(SessionError::Logic);
            }
        }
    }

    /// Read one terminated message within `max_len` bytes, waiting at
    /// most `idle` for each chunk of the stream to produce data.
    ///
    /// The budget is floored at [`wire::MAX_POWER_NOTICE`] so a recharge
    /// notification fits any read. Reads are capped at the effective
    /// budget per attempt; the inbox is checked for a complete message
    /// before each read so buffered bytes never wait on the socket.
    async fn read_message(
        &mut self,
        max_len: usize,
        idle: Duration,
    ) -> Result<String, SessionError> {
        let limit = max_len.max(wire::MAX_POWER_NOTICE);
        let mut chunk = vec![0u8; limit];

        loop {
            if let Some(message) = extract_message(&mut self.inbox, limit)? {
                return Ok(message);
            }

            let read = timeout(idle, self.stream.read(&mut chunk))
                .await
                .map_err(|_| SessionError::Timeout)??;
            if read == 0 {
                return Err(SessionError::Disconnected);
            }
            self.inbox.extend_from_slice(&chunk[..read]);
        }
    }

    /// Already-read, not-yet-delivered bytes.
    pub fn residual(&self) -> &[u8] {
        &self.inbox
    }
}
