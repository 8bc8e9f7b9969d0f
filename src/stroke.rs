use egui::{Color32, Pos2};

use crate::tool::ToolSettings;

/// One line segment of a freehand stroke.
///
/// Emitted on each pointer move while the mouse button is held; immutable
/// once appended to the document.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: Pos2,
    pub end: Pos2,
    pub color: Color32,
    pub thickness: f32,
}

/// A piece of text placed on the canvas, e.g. pasted from the clipboard.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// Top-left corner in canvas coordinates.
    pub position: Pos2,
    pub text: String,
    pub color: Color32,
    /// Font size in points.
    pub size: f32,
}

impl TextLabel {
    /// Label for text pasted at the stroke anchor, styled with the brush
    /// colour and a font size scaled from the brush thickness.
    pub fn pasted(text: String, anchor: Pos2, settings: &ToolSettings) -> Self {
        Self {
            position: anchor,
            text,
            color: settings.color,
            size: settings.font_size(),
        }
    }
}

/// An entry in the document's display list.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Segment(Segment),
    Label(TextLabel),
}
