//! Replayable turtle instructions.

use crate::canvas::Canvas;
use crate::error::{TurtleError, TurtleResult};
use crate::geometry::{move_degrees, normalize_degrees};
use crate::style::StrokeStyle;
use crate::turtle::TurtleState;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::Arc;

/// One recorded turtle action.
#[derive(Debug, Clone)]
pub enum Instruction {
    /// Draw a line of the given length along the current heading.
    MoveForward(f64),
    /// Add degrees to the current heading.
    Turn(f64),
    /// Change the stroke style on the canvas.
    SetStyle(Arc<dyn StrokeStyle>),
    /// Travel `degrees` around a circle whose center is `radius` units to the
    /// turtle's left.
    MoveArc { radius: f64, degrees: f64 },
    /// Save the current pose on the position stack.
    PushPosition,
    /// Restore the most recently saved pose.
    PopPosition,
}

impl Instruction {
    /// Carry out the instruction against the turtle state and the canvas.
    ///
    /// Canvas failures propagate before the turtle state is touched, so a
    /// failing instruction never leaves the pose half-updated.
    pub(crate) fn apply<C: Canvas + ?Sized>(
        &self,
        state: &mut TurtleState,
        canvas: &mut C,
    ) -> TurtleResult<()> {
        let pos = state.position;
        match self {
            Instruction::MoveForward(distance) => {
                canvas.draw_line(pos.x, pos.y, pos.angle, *distance)?;
                let (x, y) = move_degrees(pos.x, pos.y, pos.angle, *distance);
                state.position.x = x;
                state.position.y = y;
            }
            Instruction::Turn(degrees) => {
                state.position.angle = normalize_degrees(pos.angle + degrees);
            }
            Instruction::SetStyle(style) => canvas.set_style(Arc::clone(style))?,
            Instruction::MoveArc { radius, degrees } => {
                canvas.draw_arc(pos.x, pos.y, pos.angle, *radius, *degrees)?;
                // Seen from the center, the turtle sits at `angle - 90` and
                // ends up `degrees` further around the circle.
                let (cx, cy) = move_degrees(pos.x, pos.y, pos.angle + 90.0, *radius);
                let (x, y) = move_degrees(cx, cy, degrees + (pos.angle - 90.0), *radius);
                state.position.x = x;
                state.position.y = y;
                state.position.angle = normalize_degrees(pos.angle + degrees);
            }
            Instruction::PushPosition => state.stack.push(pos),
            Instruction::PopPosition => {
                state.position = state.stack.pop().ok_or(TurtleError::StackUnderflow)?;
            }
        }
        Ok(())
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Instruction::MoveForward(distance) => {
                write!(f, "Move forward by {distance} units")
            }
            Instruction::Turn(degrees) => write!(f, "Turn by {degrees} degrees"),
            Instruction::SetStyle(_) => f.write_str("Set style"),
            Instruction::MoveArc { radius, degrees } => {
                write!(f, "Move {degrees} degrees along arc radius {radius}")
            }
            Instruction::PushPosition => f.write_str("Push position"),
            Instruction::PopPosition => f.write_str("Pop position"),
        }
    }
}
