//! The drawing target the simulation renders onto.
//!
//! Coordinates are surface pixels with the origin at the top-left corner and
//! y growing downward. [`CommandBuffer`] records the calls so a frame can be
//! replayed later (the Bevy viewer does this) or inspected.

use crate::simulation::states::Rgb;

/// Minimal 2D drawing target
pub trait Surface {
    /// Erase the whole `width` x `height` area
    fn clear(&mut self, width: f64, height: f64);

    /// Filled disc centered on `(x, y)`
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);

    /// Text anchored at `(x, y)`
    fn draw_text(&mut self, x: f64, y: f64, text: &str);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    FillCircle { x: f64, y: f64, radius: f64, color: Rgb },
    Text { x: f64, y: f64, text: String },
}

/// Surface that stores every call in order
#[derive(Debug, Default, Clone)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    /// Hand over the recorded frame and start an empty one
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for CommandBuffer {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius, color });
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        self.commands.push(DrawCommand::Text { x, y, text: text.to_string() });
    }
}
