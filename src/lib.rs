#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod clipboard;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod raster;
pub mod stroke;
pub mod tool;

pub use app::PaintApp;
pub use document::Document;
pub use error::{Error, Result};
pub use input::StrokeTracker;
pub use stroke::{Drawable, Segment, TextLabel};
pub use tool::ToolSettings;
