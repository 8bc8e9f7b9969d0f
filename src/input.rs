//! Freehand stroke capture.
//!
//! Pointer events on the canvas drive a two-state machine:
//!
//! ```text
//! ┌──────┐   pointer_down    ┌─────────┐
//! │      ├──────────────────►│         ├──┐
//! │ Idle │                   │ Drawing │  │ pointer_move:
//! │      │◄──────────────────┤         │◄─┘ emit segment, advance anchor
//! └──────┘    pointer_up     └─────────┘
//! ```
//!
//! A segment is emitted only on a move while in `Drawing`, so the first
//! segment of a stroke runs from the press point to the first move point.
//! The machine starts in `Idle` and lives as long as its window.

use egui::Pos2;

use crate::stroke::Segment;
use crate::tool::ToolSettings;

pub struct StrokeTracker {
    drawing: bool,
    last_point: Pos2,
}

impl Default for StrokeTracker {
    fn default() -> Self {
        Self {
            drawing: false,
            last_point: Pos2::ZERO,
        }
    }
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The anchor point: the most recently processed pointer position.
    /// Pasted text labels are placed here.
    pub fn last_point(&self) -> Pos2 {
        self.last_point
    }

    /// Begins a stroke at `pos`. Pressing again mid-stroke just moves the
    /// anchor; no segment is emitted.
    pub fn pointer_down(&mut self, pos: Pos2) {
        self.drawing = true;
        self.last_point = pos;
    }

    /// Ends the stroke. A no-op while idle.
    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    /// Advances the stroke to `pos`.
    ///
    /// While idle this does nothing. While drawing it returns the segment
    /// from the anchor to `pos`, styled with whatever colour and thickness
    /// are active right now, and moves the anchor to `pos`.
    pub fn pointer_move(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Segment> {
        if !self.drawing {
            return None;
        }
        let segment = Segment {
            start: self.last_point,
            end: pos,
            color: settings.color,
            thickness: settings.thickness,
        };
        self.last_point = pos;
        Some(segment)
    }
}
