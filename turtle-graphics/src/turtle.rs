//! The turtle: a recorded instruction list plus the pose it mutates on replay.

use crate::canvas::Canvas;
use crate::error::{TurtleError, TurtleResult};
use crate::instruction::Instruction;
use crate::style::StrokeStyle;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::Arc;

/// The turtle's location and the direction it faces, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Position {
    pub const ORIGIN: Position = Position {
        x: 0.0,
        y: 0.0,
        angle: 0.0,
    };

    pub const fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(
            f,
            "Turtle position: ({}, {}), facing {} degrees",
            self.x, self.y, self.angle
        )
    }
}

/// Mutable state touched by instructions during replay.
#[derive(Debug, Clone, Default)]
pub(crate) struct TurtleState {
    pub(crate) position: Position,
    pub(crate) stack: Vec<Position>,
}

impl TurtleState {
    fn reset(&mut self) {
        self.position = Position::ORIGIN;
        self.stack.clear();
    }
}

/// A turtle that records instructions and replays them onto canvases.
///
/// Building never fails; problems such as popping an empty position stack
/// surface when the instructions are replayed by [`Turtle::render_to_canvas`].
#[derive(Debug, Clone, Default)]
pub struct Turtle {
    state: TurtleState,
    instructions: Vec<Instruction>,
}

impl Turtle {
    /// Create a turtle at the origin, facing 0 degrees, with no instructions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-built instruction.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Move forward by `distance` units, drawing a line.
    pub fn move_forward(&mut self, distance: f64) {
        self.push(Instruction::MoveForward(distance));
    }

    /// Turn by `degrees` (positive is counterclockwise).
    pub fn turn(&mut self, degrees: f64) {
        self.push(Instruction::Turn(degrees));
    }

    /// Change the style of subsequent strokes.
    pub fn set_style(&mut self, style: Arc<dyn StrokeStyle>) {
        self.push(Instruction::SetStyle(style));
    }

    /// Travel `degrees` along a circle whose center is `radius` units to the
    /// turtle's left.
    pub fn move_arc(&mut self, radius: f64, degrees: f64) {
        self.push(Instruction::MoveArc { radius, degrees });
    }

    /// Save the current pose on the position stack.
    pub fn push_position(&mut self) {
        self.push(Instruction::PushPosition);
    }

    /// Return to the most recently saved pose, removing it from the stack.
    pub fn pop_position(&mut self) {
        self.push(Instruction::PopPosition);
    }

    /// The recorded instructions, in replay order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Pose after the most recent replay (the origin before any replay).
    pub fn position(&self) -> Position {
        self.state.position
    }

    /// Number of poses left on the stack after the most recent replay.
    pub fn stack_depth(&self) -> usize {
        self.state.stack.len()
    }

    /// Replay every instruction onto `canvas`.
    ///
    /// The pose is reset to the origin and the position stack cleared first,
    /// so repeated replays produce the same draw calls. Replay stops at the
    /// first failing instruction; draw calls already issued are not undone.
    pub fn render_to_canvas<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> TurtleResult<()> {
        self.state.reset();
        let total = self.instructions.len();
        log::debug!(target: "turtle", "replaying {} instructions", total);

        for (i, instruction) in self.instructions.iter().enumerate() {
            if let Err(err) = instruction.apply(&mut self.state, canvas) {
                log::debug!(target: "turtle", "instruction {}/{} failed: {}", i + 1, total, err);
                return Err(TurtleError::Replay {
                    index: i + 1,
                    total,
                    description: instruction.to_string(),
                    source: Box::new(err),
                });
            }
            log::trace!(target: "turtle", "{} -> {}", instruction, self.state.position);
        }

        log::debug!(target: "turtle", "replay finished at {}", self.state.position);
        Ok(())
    }
}

impl FromIterator<Instruction> for Turtle {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            state: TurtleState::default(),
            instructions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Instruction> for Turtle {
    fn extend<I: IntoIterator<Item = Instruction>>(&mut self, iter: I) {
        self.instructions.extend(iter);
    }
}
