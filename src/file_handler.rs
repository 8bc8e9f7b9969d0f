//! Canvas export and background import.
//!
//! The codecs come from the `image` crate; which one runs is decided by
//! the extension of the file the user picked, with PNG as the fallback.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::info;

use crate::error::Result;

/// Output encodings selectable from the save dialog, keyed off the chosen
/// file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Bmp,
}

impl ExportFormat {
    /// Anything other than a jpeg or bmp extension falls back to PNG.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            Some("bmp") => Self::Bmp,
            _ => Self::Png,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Encodes the rasterized canvas to `path`.
pub fn export_canvas(pixels: &RgbaImage, path: &Path) -> Result<()> {
    let format = ExportFormat::from_path(path);
    match format {
        ExportFormat::Png => pixels.save_with_format(path, ImageFormat::Png)?,
        // The JPEG and BMP writers take no alpha channel.
        ExportFormat::Jpeg | ExportFormat::Bmp => {
            let rgb = DynamicImage::ImageRgba8(pixels.clone()).to_rgb8();
            rgb.save_with_format(path, format.image_format())?;
        }
    }
    info!("exported canvas to {} as {:?}", path.display(), format);
    Ok(())
}

/// Reads a raster image to use as the canvas background.
pub fn load_background(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?.to_rgba8();
    info!(
        "loaded background {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Native save dialog mirroring the supported export formats.
pub fn save_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save Canvas")
        .set_file_name("canvas.png")
        .add_filter("PNG Image", &["png"])
        .add_filter("JPEG Image", &["jpg", "jpeg"])
        .add_filter("Bitmap Image", &["bmp"])
        .save_file()
}

/// Native open dialog for background images.
pub fn open_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Load Image")
        .add_filter("Image Files", &["png", "jpg", "jpeg", "bmp"])
        .pick_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.png")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("a.jpg")), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(Path::new("a.JPEG")), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(Path::new("a.bmp")), ExportFormat::Bmp);
    }

    #[test]
    fn unknown_extensions_default_to_png() {
        assert_eq!(ExportFormat::from_path(Path::new("a.txt")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("a")), ExportFormat::Png);
    }
}
