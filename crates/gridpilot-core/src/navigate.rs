//! Navigation state machine: pilot a robot of unknown position and
//! facing to the origin and collect its secret message.
//!
//! The robot is blind-driven: the server only ever learns coordinates
//! from `OK <x> <y>` replies. Facing is discovered from the displacement
//! of the first forward step; a turn reply reports position without
//! spending a step, which is why discovery starts with one.

use gridpilot_proto::{
    nav::parse_position_report,
    wire, Heading, Position,
};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::{
    error::SessionError,
    link::{RobotLink, IDLE_DEADLINE},
};

/// Grid pilot for one authenticated robot.
pub struct Navigator<'a, S> {
    link: &'a mut RobotLink<S>,
    position: Position,
    heading: Option<Heading>,
}

impl<'a, S> Navigator<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Start piloting over an authenticated link.
    pub fn new(link: &'a mut RobotLink<S>) -> Self {
        // The position is overwritten by the first turn reply before
        // anything reads it; facing stays unknown until discovery.
        Self { link, position: Position::ORIGIN, heading: None }
    }

    /// Drive the robot to the origin, collect the secret message, and
    /// log the robot out. Returns the collected message.
    pub async fn run(mut self) -> Result<String, SessionError> {
        tracing::debug!("robot started its pickup run");

        self.turn_right().await?;
        let before = self.move_forward().await?;
        let facing = Heading::from_step(before, self.position);
        self.heading = Some(facing);
        tracing::debug!(%facing, "facing discovered");

        while self.position != Position::ORIGIN {
            self.align().await?;
            self.move_forward().await?;
        }

        self.collect().await
    }

    /// Read the robot's reply to a movement command.
    async fn read_position(&mut self) -> Result<Position, SessionError> {
        let reply = self.link.exchange(wire::MAX_POSITION, IDLE_DEADLINE).await?;
        Ok(parse_position_report(&reply)?)
    }

    async fn turn_right(&mut self) -> Result<(), SessionError> {
        self.link.send(wire::TURN_RIGHT).await?;
        self.position = self.read_position().await?;
        self.heading = self.heading.map(Heading::clockwise);
        tracing::debug!(position = %self.position, "robot turned right");
        Ok(())
    }

    async fn turn_left(&mut self) -> Result<(), SessionError> {
        self.link.send(wire::TURN_LEFT).await?;
        self.position = self.read_position().await?;
        self.heading = self.heading.map(Heading::counter_clockwise);
        tracing::debug!(position = %self.position, "robot turned left");
        Ok(())
    }

    /// One forward step. Returns the position the step started from.
    ///
    /// A reply equal to the pre-move position means the robot hit an
    /// obstacle; the recovery is a fixed sidestep: turn right, step,
    /// turn left, step. The second step's outcome is accepted as-is,
    /// blocked or not - recovery never recurses.
    async fn move_forward(&mut self) -> Result<Position, SessionError> {
        let mut before = self.position;
        self.link.send(wire::MOVE).await?;
        let mut landed = self.read_position().await?;
        tracing::debug!(position = %landed, "robot moved forward");

        if landed == before {
            self.turn_right().await?;
            self.link.send(wire::MOVE).await?;
            landed = self.read_position().await?;
            tracing::debug!(position = %landed, "robot moved forward");

            self.turn_left().await?;
            before = self.position;
            self.link.send(wire::MOVE).await?;
            landed = self.read_position().await?;
            tracing::debug!(position = %landed, "robot moved forward");
        }

        self.position = landed;
        Ok(before)
    }

    /// Rotate until the robot faces the pickup point.
    ///
    /// Rotation direction comes from comparing heading indexes in the
    /// fixed order UP, RIGHT, DOWN, LEFT - not from minimum angle. The
    /// extra quarter-turns this sometimes costs are part of the
    /// protocol's observable behavior.
    async fn align(&mut self) -> Result<(), SessionError> {
        let target = approach_heading(self.position);

        loop {
            let current = match self.heading {
                Some(heading) if heading != target => heading,
                _ => return Ok(()),
            };
            if current.index() < target.index() {
                self.turn_right().await?;
            } else {
                self.turn_left().await?;
            }
        }
    }

    /// At the origin: retrieve the secret message and log out.
    async fn collect(&mut self) -> Result<String, SessionError> {
        self.link.send(wire::GET_MESSAGE).await?;
        let secret = self.link.exchange(wire::MAX_SECRET, IDLE_DEADLINE).await?;
        tracing::info!(%secret, "robot picked up the secret message");

        self.link.send(wire::LOGOUT).await?;
        tracing::info!("robot logged out");
        Ok(secret)
    }
}

/// Greedy choice of the next facing: close the larger coordinate gap
/// first, ties going to the vertical axis.
fn approach_heading(position: Position) -> Heading {
    let dx = -position.x;
    let dy = -position.y;

    if dx.abs() > dy.abs() {
        if dx > 0 { Heading::Right } else { Heading::Left }
    } else if dy > 0 {
        Heading::Up
    } else {
        Heading::Down
    }
}
