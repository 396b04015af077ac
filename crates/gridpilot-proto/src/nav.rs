//! Grid positions, headings, and position-report parsing.

use std::fmt;

use crate::errors::ProtocolError;

/// A coordinate on the implicit integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing upward.
    pub y: i32,
}

impl Position {
    /// The pickup coordinate.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Construct a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Facing direction of the robot.
///
/// The discriminant order UP, RIGHT, DOWN, LEFT is part of the protocol:
/// the pilot rotates by comparing these indexes, not by minimum angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Toward positive y.
    Up = 0,
    /// Toward positive x.
    Right = 1,
    /// Toward negative y.
    Down = 2,
    /// Toward negative x.
    Left = 3,
}

impl Heading {
    /// Index in the fixed rotation order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Heading after a 90-degree clockwise turn.
    pub const fn clockwise(self) -> Heading {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Heading after a 90-degree counterclockwise turn.
    pub const fn counter_clockwise(self) -> Heading {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// Heading implied by a one-step displacement from `from` to `to`.
    ///
    /// Anything other than a unit step along one axis falls back to
    /// [`Heading::Up`]; a conforming robot never produces such a delta,
    /// but the server must not fall over when one does.
    pub fn from_step(from: Position, to: Position) -> Heading {
        match (to.x - from.x, to.y - from.y) {
            (1, 0) => Heading::Right,
            (-1, 0) => Heading::Left,
            (0, -1) => Heading::Down,
            _ => Heading::Up,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::Up => "UP",
            Heading::Right => "RIGHT",
            Heading::Down => "DOWN",
            Heading::Left => "LEFT",
        };
        f.write_str(name)
    }
}

/// Parse a movement reply of the exact shape `OK <x> <y>`.
///
/// Tokens are separated by single spaces; a coordinate is an optional `-`
/// followed by decimal digits. Anything else - wrong token count, wrong
/// tag, doubled spaces, stray signs - is a protocol violation.
///
/// # Errors
///
/// [`ProtocolError::Malformed`] on any deviation from the shape above.
pub fn parse_position_report(report: &str) -> Result<Position, ProtocolError> {
    const VIOLATION: ProtocolError = ProtocolError::Malformed("position report");

    let mut tokens = report.split(' ');

    if tokens.next() != Some("OK") {
        return Err(VIOLATION);
    }
    let x = tokens.next().and_then(parse_coordinate).ok_or(VIOLATION)?;
    let y = tokens.next().and_then(parse_coordinate).ok_or(VIOLATION)?;
    if tokens.next().is_some() {
        return Err(VIOLATION);
    }

    Ok(Position::new(x, y))
}

/// Optionally-negative decimal integer, nothing more.
fn parse_coordinate(token: &str) -> Option<i32> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
