//! System clipboard access through `arboard`.
//!
//! Writes report their failure so the user sees it; reads treat an empty
//! or incompatible clipboard as "nothing there" and just log.

use std::borrow::Cow;

use image::RgbaImage;
use log::{debug, error};

use crate::error::Result;

/// Places the rasterized canvas on the clipboard as a bitmap.
pub fn copy_image(pixels: &RgbaImage) -> Result<()> {
    let (width, height) = pixels.dimensions();
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_image(arboard::ImageData {
        width: width as usize,
        height: height as usize,
        bytes: Cow::Borrowed(pixels.as_raw()),
    })?;
    Ok(())
}

/// Returns the clipboard bitmap, or `None` when the clipboard holds no
/// image.
pub fn read_image() -> Option<RgbaImage> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            error!("clipboard unavailable: {err}");
            return None;
        }
    };
    match clipboard.get_image() {
        Ok(data) => {
            let (width, height) = (data.width as u32, data.height as u32);
            RgbaImage::from_raw(width, height, data.bytes.into_owned())
        }
        Err(err) => {
            debug!("no image on clipboard: {err}");
            None
        }
    }
}

/// Returns the clipboard text, or `None` when the clipboard holds none.
pub fn read_text() -> Option<String> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            error!("clipboard unavailable: {err}");
            return None;
        }
    };
    match clipboard.get_text() {
        Ok(text) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(err) => {
            debug!("no text on clipboard: {err}");
            None
        }
    }
}
