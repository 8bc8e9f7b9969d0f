use std::path::Path;

use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};
use whiteboard::document::Document;
use whiteboard::file_handler;
use whiteboard::raster;
use whiteboard::stroke::{Drawable, Segment, TextLabel};
use whiteboard::tool::ToolSettings;

fn red_line() -> Segment {
    Segment {
        start: Pos2::new(2.0, 8.0),
        end: Pos2::new(14.0, 8.0),
        color: Color32::RED,
        thickness: 3.0,
    }
}

#[test]
fn display_list_keeps_insertion_order() {
    let mut document = Document::new();
    document.add_segment(red_line());
    document.add_label(TextLabel {
        position: Pos2::new(1.0, 1.0),
        text: "note".to_owned(),
        color: Color32::BLACK,
        size: 20.0,
    });
    document.add_segment(red_line());

    let kinds: Vec<_> = document
        .entries()
        .iter()
        .map(|entry| match entry {
            Drawable::Segment(_) => "segment",
            Drawable::Label(_) => "label",
        })
        .collect();
    assert_eq!(kinds, ["segment", "label", "segment"]);
}

#[test]
fn pasted_text_uses_anchor_colour_and_scaled_size() {
    let mut settings = ToolSettings::default();
    settings.color = Color32::RED;
    settings.set_thickness_from_input("4").unwrap();

    let label = TextLabel::pasted("Hello".to_owned(), Pos2::new(30.0, 40.0), &settings);
    assert_eq!(label.position, Pos2::new(30.0, 40.0));
    assert_eq!(label.text, "Hello");
    assert_eq!(label.color, Color32::RED);
    assert_eq!(label.size, 20.0);
}

#[test]
fn background_is_replaced_not_merged() {
    let mut document = Document::new();
    document.set_background(RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255])));
    document.set_background(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255])));

    assert_eq!(document.background_rev(), 2);
    assert_eq!(
        document.background().unwrap().get_pixel(0, 0),
        &Rgba([0, 0, 255, 255])
    );
}

#[test]
fn png_export_round_trips_pixel_exact() {
    let mut document = Document::new();
    document.add_segment(red_line());
    let pixels = raster::render_document(&document, 16, 16);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");
    file_handler::export_canvas(&pixels, &path).unwrap();

    let reloaded = file_handler::load_background(&path).unwrap();
    assert_eq!(reloaded.dimensions(), pixels.dimensions());
    assert!(pixels.pixels().eq(reloaded.pixels()));
}

#[test]
fn reimported_export_is_an_identical_backdrop() {
    let mut document = Document::new();
    document.add_segment(red_line());
    let first = raster::render_document(&document, 16, 16);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");
    file_handler::export_canvas(&first, &path).unwrap();

    let mut reopened = Document::new();
    reopened.set_background(file_handler::load_background(&path).unwrap());
    let second = raster::render_document(&reopened, 16, 16);

    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn jpeg_and_bmp_exports_are_readable_images() {
    let mut document = Document::new();
    document.add_segment(red_line());
    let pixels = raster::render_document(&document, 16, 16);

    let dir = tempfile::tempdir().unwrap();
    for name in ["canvas.jpg", "canvas.bmp"] {
        let path = dir.path().join(name);
        file_handler::export_canvas(&pixels, &path).unwrap();
        let reloaded = file_handler::load_background(&path).unwrap();
        assert_eq!(reloaded.dimensions(), pixels.dimensions());
    }
}

#[test]
fn failed_export_reports_and_leaves_nothing_behind() {
    let pixels = raster::render_document(&Document::new(), 4, 4);
    let path = Path::new("/nonexistent-directory/canvas.png");
    assert!(file_handler::export_canvas(&pixels, path).is_err());
    assert!(!path.exists());
}

#[test]
fn load_rejects_non_image_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-an-image.png");
    std::fs::write(&path, b"plain text, no codec will take this").unwrap();
    assert!(file_handler::load_background(&path).is_err());
}
