use image::RgbaImage;

use crate::stroke::{Drawable, Segment, TextLabel};

/// The canvas content: an append-only display list plus an optional
/// background bitmap.
///
/// Entries are never removed or edited; insertion order is draw order, so
/// later entries paint over earlier ones. The background sits underneath
/// the whole display list and is replaced wholesale by import/paste.
#[derive(Default)]
pub struct Document {
    entries: Vec<Drawable>,
    background: Option<RgbaImage>,
    background_rev: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.entries.push(Drawable::Segment(segment));
    }

    pub fn add_label(&mut self, label: TextLabel) {
        self.entries.push(Drawable::Label(label));
    }

    /// Replaces the background bitmap. The previous background is dropped,
    /// not composited.
    pub fn set_background(&mut self, image: RgbaImage) {
        self.background = Some(image);
        self.background_rev += 1;
    }

    pub fn background(&self) -> Option<&RgbaImage> {
        self.background.as_ref()
    }

    /// Bumped on every background replacement; lets the renderer know when
    /// its uploaded texture is stale.
    pub fn background_rev(&self) -> u64 {
        self.background_rev
    }

    pub fn entries(&self) -> &[Drawable] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.background.is_none()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.entries.iter().filter_map(|entry| match entry {
            Drawable::Segment(segment) => Some(segment),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.entries.iter().filter_map(|entry| match entry {
            Drawable::Label(label) => Some(label),
            _ => None,
        })
    }
}
