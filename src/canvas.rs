//! Graphics contexts markers draw on
//!
//! A [`Canvas`] is opaque to the marker base: only the concrete markers issue calls against it.

use serde::{Deserialize, Serialize};

/// RGBA color
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
}

/// Immediate mode drawing surface
pub trait Canvas {
    fn fill(&mut self, color: Color);
    fn no_fill(&mut self);
    fn stroke(&mut self, color: Color, weight: f32);
    fn no_stroke(&mut self);

    /// Draw an ellipse centered on `(x, y)`
    fn ellipse(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Draw a rectangle whose top left corner is `(x, y)`
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Draw text with its baseline starting at `(x, y)`
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32);
}

/// Fill and stroke settings of a marker
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_weight: f32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fill: Some(Color(200, 60, 60, 200)),
            stroke: Some(Color::WHITE),
            stroke_weight: 1.0,
        }
    }
}

impl Style {
    /// Set the canvas' fill and stroke to this style
    pub fn apply(&self, canvas: &mut impl Canvas) {
        match self.fill {
            Some(color) => canvas.fill(color),
            None => canvas.no_fill(),
        }
        match self.stroke {
            Some(color) => canvas.stroke(color, self.stroke_weight),
            None => canvas.no_stroke(),
        }
    }
}

/// A single call made against a [`Recorder`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Fill { color: Color },
    NoFill,
    Stroke { color: Color, weight: f32 },
    NoStroke,
    Ellipse { x: f32, y: f32, width: f32, height: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Text { text: String, x: f32, y: f32, size: f32 },
}

/// Canvas which doesn't rasterize but remembers every call made on it
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for Recorder {
    fn fill(&mut self, color: Color) {
        self.commands.push(Command::Fill { color });
    }

    fn no_fill(&mut self) {
        self.commands.push(Command::NoFill);
    }

    fn stroke(&mut self, color: Color, weight: f32) {
        self.commands.push(Command::Stroke { color, weight });
    }

    fn no_stroke(&mut self) {
        self.commands.push(Command::NoStroke);
    }

    fn ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(Command::Ellipse {
            x,
            y,
            width,
            height,
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(Command::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        self.commands.push(Command::Text {
            text: text.to_string(),
            x,
            y,
            size,
        });
    }
}
