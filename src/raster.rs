//! CPU rasterization of the document display list.
//!
//! Export and clipboard copy need the canvas as a plain pixel buffer, so
//! segments and labels are rendered here without touching the GPU. Lines
//! are stamped as filled circles along their length; text uses egui's
//! default proportional font through `ab_glyph`. Coordinates map 1:1 from
//! logical points to pixels (a 96-DPI assumption).

use ab_glyph::{Font, FontArc, ScaleFont};
use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage, imageops};

use crate::document::Document;
use crate::stroke::Drawable;

/// Backdrop for pixels not covered by a background image.
const SURFACE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Renders the whole document into a `width` x `height` RGBA buffer:
/// white backdrop, then the background image scaled to fill, then the
/// display list in insertion order.
pub fn render_document(document: &Document, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width.max(1), height.max(1), SURFACE_COLOR);

    if let Some(background) = document.background() {
        if background.dimensions() == img.dimensions() {
            imageops::replace(&mut img, background, 0, 0);
        } else {
            let scaled = imageops::resize(
                background,
                img.width(),
                img.height(),
                imageops::FilterType::Triangle,
            );
            imageops::replace(&mut img, &scaled, 0, 0);
        }
    }

    let font = default_font();
    for entry in document.entries() {
        match entry {
            Drawable::Segment(segment) => draw_line(
                &mut img,
                segment.start,
                segment.end,
                segment.color,
                segment.thickness,
            ),
            Drawable::Label(label) => {
                if let Some((font, tweak)) = &font {
                    draw_text(
                        &mut img,
                        font,
                        *tweak,
                        label.position,
                        &label.text,
                        label.color,
                        label.size,
                    );
                }
            }
        }
    }

    img
}

/// Source-over blend of one pixel. The backdrop is always opaque, so the
/// result stays opaque.
fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Color32) {
    let [r, g, b, a] = color.to_array();
    match a {
        0 => {}
        255 => img.put_pixel(x, y, Rgba([r, g, b, 255])),
        _ => {
            let dst = img.get_pixel(x, y).0;
            let t = a as f32 / 255.0;
            let mix = |src: u8, dst: u8| {
                (src as f32 * t + dst as f32 * (1.0 - t)).round().clamp(0.0, 255.0) as u8
            };
            img.put_pixel(
                x,
                y,
                Rgba([mix(r, dst[0]), mix(g, dst[1]), mix(b, dst[2]), 255]),
            );
        }
    }
}

fn draw_disc(img: &mut RgbaImage, center: Pos2, radius: f32, color: Color32) {
    if radius <= 0.0 {
        return;
    }
    let radius_sq = radius * radius;
    let (width, height) = (img.width() as i32, img.height() as i32);
    let min_x = (center.x - radius).floor().max(0.0) as i32;
    let max_x = (center.x + radius).ceil().min((width - 1) as f32) as i32;
    let min_y = (center.y - radius).floor().max(0.0) as i32;
    let max_y = (center.y + radius).ceil().min((height - 1) as f32) as i32;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius_sq {
                blend_pixel(img, x as u32, y as u32, color);
            }
        }
    }
}

/// Stamps discs of `thickness / 2` radius along the segment, one per pixel
/// of its longest axis.
fn draw_line(img: &mut RgbaImage, start: Pos2, end: Pos2, color: Color32, thickness: f32) {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;
    let radius = (thickness / 2.0).max(0.5);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let point = Pos2::new(start.x + dx * t, start.y + dy * t);
        draw_disc(img, point, radius, color);
    }
}

/// egui's default proportional font, loaded once per rasterization pass.
fn default_font() -> Option<(FontArc, egui::FontTweak)> {
    let definitions = egui::FontDefinitions::default();
    let family = definitions.families.get(&egui::FontFamily::Proportional)?;
    let name = family.first()?;
    let data = definitions.font_data.get(name)?;
    let font = match &data.font {
        std::borrow::Cow::Borrowed(bytes) => {
            ab_glyph::FontRef::try_from_slice_and_index(bytes, data.index)
                .map(FontArc::from)
                .ok()
        }
        std::borrow::Cow::Owned(bytes) => {
            ab_glyph::FontVec::try_from_vec_and_index(bytes.clone(), data.index)
                .map(FontArc::from)
                .ok()
        }
    }?;
    Some((font, data.tweak))
}

fn draw_text(
    img: &mut RgbaImage,
    font: &FontArc,
    tweak: egui::FontTweak,
    pos: Pos2,
    text: &str,
    color: Color32,
    size: f32,
) {
    if text.is_empty() {
        return;
    }
    let scaled = font.as_scaled(size * tweak.scale);
    // `pos` is the label's top-left corner; glyphs position at the baseline.
    let mut caret = ab_glyph::point(pos.x, pos.y + scaled.ascent() + tweak.y_offset * size);
    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let (width, height) = img.dimensions();
            outlined.draw(|x, y, coverage| {
                let px = bounds.min.x as i32 + x as i32;
                let py = bounds.min.y as i32 + y as i32;
                if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                    let alpha = (color.a() as f32 * coverage).round().clamp(0.0, 255.0) as u8;
                    let shaded = Color32::from_rgba_unmultiplied(
                        color.r(),
                        color.g(),
                        color.b(),
                        alpha,
                    );
                    blend_pixel(img, px as u32, py as u32, shaded);
                }
            });
        }
    }
}
