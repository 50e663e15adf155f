//! JSON instruction files and their translation into turtle instructions.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use turtle_graphics::{CanvasColor, ColorStyle, Turtle};

/// One entry of an instruction file.
///
/// Files are JSON arrays such as
/// `[{"forward": 1}, {"turn": 90}, "push", {"arc": {"radius": 0.25, "degrees": 180}}, "pop"]`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Forward(f64),
    Turn(f64),
    Arc { radius: f64, degrees: f64 },
    Push,
    Pop,
    /// Any CSS color string.
    Color(String),
}

/// Parse a CSS color string into a CanvasColor.
pub fn parse_color(s: &str) -> Result<CanvasColor> {
    let parsed =
        csscolorparser::parse(s).map_err(|e| anyhow!("Failed to parse color {:?}: {}", s, e))?;
    let [r, g, b, a] = parsed.to_rgba8();
    Ok(CanvasColor::from_rgba8(r, g, b, a))
}

/// Parse an instruction file's contents.
pub fn parse_commands(json: &str) -> Result<Vec<Command>> {
    serde_json::from_str(json).context("Failed to parse instruction file as JSON")
}

/// Record `commands` onto a fresh turtle. Colors are resolved here, so a bad
/// color fails before anything is rendered.
pub fn build_turtle(commands: &[Command]) -> Result<Turtle> {
    let mut turtle = Turtle::new();
    for (i, command) in commands.iter().enumerate() {
        match command {
            Command::Forward(distance) => turtle.move_forward(*distance),
            Command::Turn(degrees) => turtle.turn(*degrees),
            Command::Arc { radius, degrees } => turtle.move_arc(*radius, *degrees),
            Command::Push => turtle.push_position(),
            Command::Pop => turtle.pop_position(),
            Command::Color(color) => {
                let color =
                    parse_color(color).with_context(|| format!("In command {}", i + 1))?;
                turtle.set_style(ColorStyle::shared(color));
            }
        }
    }
    log::debug!("built turtle with {} instructions", turtle.len());
    Ok(turtle)
}
