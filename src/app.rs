use eframe::egui::{self, Align2, Color32, PointerButton, Pos2, Rect, TextureHandle, TextureOptions};
use log::{error, warn};

use crate::clipboard;
use crate::document::Document;
use crate::file_handler;
use crate::input::StrokeTracker;
use crate::raster;
use crate::stroke::{Drawable, TextLabel};
use crate::tool::{PALETTE, ToolSettings};

/// The modal dialogs; at most one is open at a time.
enum Modal {
    ConfirmExit,
    About,
    SetThickness { input: String },
    Error { message: String },
}

/// We derive Deserialize/Serialize so the brush settings survive restarts.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PaintApp {
    settings: ToolSettings,
    // Everything below is per-window session state.
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    tracker: StrokeTracker,
    #[serde(skip)]
    modal: Option<Modal>,
    #[serde(skip)]
    status: String,
    /// Canvas rect of the last painted frame, in screen coordinates.
    #[serde(skip)]
    canvas_rect: Option<Rect>,
    #[serde(skip)]
    background_tex: Option<TextureHandle>,
    #[serde(skip)]
    uploaded_background_rev: u64,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            settings: ToolSettings::default(),
            document: Document::new(),
            tracker: StrokeTracker::new(),
            modal: None,
            status: "Ready".to_owned(),
            canvas_rect: None,
            background_tex: None,
            uploaded_background_rev: 0,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore the brush settings from the previous run, if any.
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    fn report_error(&mut self, context: &str, err: impl std::fmt::Display) {
        error!("{context}: {err}");
        self.modal = Some(Modal::Error {
            message: format!("{context}: {err}"),
        });
    }

    /// Rasterizes the display list at the canvas's displayed size. `None`
    /// before the first frame has laid the canvas out.
    fn rasterize(&self) -> Option<image::RgbaImage> {
        let rect = self.canvas_rect?;
        if rect.width() < 1.0 || rect.height() < 1.0 {
            return None;
        }
        Some(raster::render_document(
            &self.document,
            rect.width() as u32,
            rect.height() as u32,
        ))
    }

    fn save_canvas(&mut self) {
        let Some(pixels) = self.rasterize() else {
            self.set_status("Nothing to save yet");
            return;
        };
        let Some(path) = file_handler::save_dialog() else {
            return;
        };
        match file_handler::export_canvas(&pixels, &path) {
            Ok(()) => self.set_status("Image saved successfully!"),
            Err(err) => self.report_error("Error saving file", err),
        }
    }

    fn load_background(&mut self) {
        let Some(path) = file_handler::open_dialog() else {
            return;
        };
        match file_handler::load_background(&path) {
            Ok(image) => {
                self.document.set_background(image);
                self.set_status("Image loaded successfully!");
            }
            Err(err) => self.report_error("Error loading file", err),
        }
    }

    fn copy_canvas(&mut self) {
        let Some(pixels) = self.rasterize() else {
            self.set_status("Nothing to copy yet");
            return;
        };
        match clipboard::copy_image(&pixels) {
            Ok(()) => self.set_status("Canvas copied to clipboard!"),
            Err(err) => self.report_error("Error copying canvas", err),
        }
    }

    fn paste_image(&mut self) {
        if let Some(image) = clipboard::read_image() {
            self.document.set_background(image);
            self.set_status("Image pasted from clipboard!");
        }
    }

    fn paste_text(&mut self) {
        if let Some(text) = clipboard::read_text() {
            self.document.add_label(TextLabel::pasted(
                text,
                self.tracker.last_point(),
                &self.settings,
            ));
            self.set_status("Text pasted from clipboard!");
        }
    }

    /// Spawns a fresh process of this executable: a fully independent
    /// window sharing no state with this one.
    fn open_new_window(&mut self) {
        let spawned = std::env::current_exe()
            .and_then(|exe| std::process::Command::new(exe).spawn());
        match spawned {
            Ok(_) => self.set_status("New window opened!"),
            Err(err) => self.report_error("Error opening new window", err),
        }
    }

    fn open_tutorial(&mut self) {
        match open::that("https://www.google.com/search?q=how+to+draw") {
            Ok(()) => self.set_status("Opened drawing tutorial in browser"),
            Err(err) => self.report_error("Error opening browser", err),
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save…").clicked() {
                        ui.close_menu();
                        self.save_canvas();
                    }
                    if ui.button("Load Image…").clicked() {
                        ui.close_menu();
                        self.load_background();
                    }
                    ui.separator();
                    if ui.button("New Window").clicked() {
                        ui.close_menu();
                        self.open_new_window();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ui.close_menu();
                        self.modal = Some(Modal::ConfirmExit);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui.button("Copy Canvas").clicked() {
                        ui.close_menu();
                        self.copy_canvas();
                    }
                    if ui.button("Paste Image").clicked() {
                        ui.close_menu();
                        self.paste_image();
                    }
                    if ui.button("Paste Text").clicked() {
                        ui.close_menu();
                        self.paste_text();
                    }
                });
                ui.menu_button("Brush", |ui| {
                    if ui.button("Thickness…").clicked() {
                        ui.close_menu();
                        self.modal = Some(Modal::SetThickness {
                            input: format!("{}", self.settings.thickness as u32),
                        });
                    }
                    ui.menu_button("Colour", |ui| {
                        for entry in PALETTE {
                            if ui.button(entry.name).clicked() {
                                ui.close_menu();
                                self.settings.color = entry.color;
                                self.status = format!("Line colour changed to {}!", entry.name);
                            }
                        }
                    });
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("How To Draw").clicked() {
                        ui.close_menu();
                        self.open_tutorial();
                    }
                    if ui.button("About").clicked() {
                        ui.close_menu();
                        self.modal = Some(Modal::About);
                    }
                });
            });
        });
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });
    }

    fn canvas_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                let rect = response.rect;
                self.canvas_rect = Some(rect);

                // Points are stored canvas-local so exports line up with
                // what is on screen.
                let to_canvas = |pos: Pos2| (pos - rect.min).to_pos2();
                let to_screen = |pos: Pos2| rect.min + pos.to_vec2();

                if response.drag_started_by(PointerButton::Primary) {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.tracker.pointer_down(to_canvas(pos));
                        self.set_status("Drawing started...");
                    }
                } else if response.dragged_by(PointerButton::Primary) {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let pos = to_canvas(pos);
                        // egui reports a drag every frame the button is
                        // held; a move event is only synthesized on actual
                        // motion.
                        if pos != self.tracker.last_point() {
                            if let Some(segment) =
                                self.tracker.pointer_move(pos, &self.settings)
                            {
                                self.document.add_segment(segment);
                            }
                        }
                    }
                }
                if response.drag_stopped_by(PointerButton::Primary) {
                    self.tracker.pointer_up();
                    self.set_status("Drawing stopped...");
                }

                self.update_background_texture(ctx);
                if let Some(tex) = &self.background_tex {
                    painter.image(
                        tex.id(),
                        rect,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                for entry in self.document.entries() {
                    match entry {
                        Drawable::Segment(segment) => {
                            painter.line_segment(
                                [to_screen(segment.start), to_screen(segment.end)],
                                egui::Stroke::new(segment.thickness, segment.color),
                            );
                        }
                        Drawable::Label(label) => {
                            painter.text(
                                to_screen(label.position),
                                Align2::LEFT_TOP,
                                &label.text,
                                egui::FontId::proportional(label.size),
                                label.color,
                            );
                        }
                    }
                }
            });
    }

    /// Re-uploads the background texture after import/paste replaced it.
    fn update_background_texture(&mut self, ctx: &egui::Context) {
        if self.document.background_rev() == self.uploaded_background_rev {
            return;
        }
        if let Some(background) = self.document.background() {
            let size = [background.width() as usize, background.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, background.as_raw());
            self.background_tex =
                Some(ctx.load_texture("canvas_background", color_image, TextureOptions::LINEAR));
        }
        self.uploaded_background_rev = self.document.background_rev();
    }

    fn show_modal(&mut self, ctx: &egui::Context) {
        let Some(mut modal) = self.modal.take() else {
            return;
        };
        let mut keep_open = true;
        match &mut modal {
            Modal::ConfirmExit => {
                egui::Window::new("Exit")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label("Are you sure you want to exit?");
                        ui.horizontal(|ui| {
                            if ui.button("Yes").clicked() {
                                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                                keep_open = false;
                            }
                            if ui.button("No").clicked() {
                                keep_open = false;
                            }
                        });
                    });
            }
            Modal::About => {
                egui::Window::new("About")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(concat!("Whiteboard ", env!("CARGO_PKG_VERSION")));
                        ui.label("A small freehand drawing pad.");
                        if ui.button("Close").clicked() {
                            keep_open = false;
                        }
                    });
            }
            Modal::SetThickness { input } => {
                let mut submitted = false;
                egui::Window::new("Set Thickness")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label("Enter line thickness:");
                        ui.text_edit_singleline(input);
                        ui.horizontal(|ui| {
                            if ui.button("OK").clicked() {
                                submitted = true;
                            }
                            if ui.button("Cancel").clicked() {
                                keep_open = false;
                            }
                        });
                    });
                if submitted {
                    match self.settings.set_thickness_from_input(input) {
                        Ok(()) => {
                            self.status =
                                format!("Line thickness set to {}", self.settings.thickness as u32);
                        }
                        Err(err) => {
                            warn!("{err}");
                            self.modal = Some(Modal::Error {
                                message: err.to_string(),
                            });
                        }
                    }
                    // Either way the prompt itself is done.
                    return;
                }
            }
            Modal::Error { message } => {
                egui::Window::new("Error")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(message.as_str());
                        if ui.button("OK").clicked() {
                            keep_open = false;
                        }
                    });
            }
        }
        if keep_open {
            self.modal = Some(modal);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.menu_bar(ctx);
        self.status_bar(ctx);
        self.canvas_panel(ctx);
        self.show_modal(ctx);
    }
}
