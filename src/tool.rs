use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default stroke thickness in logical pixels.
pub const DEFAULT_THICKNESS: f32 = 4.0;

/// Pasted text is sized at this multiple of the stroke thickness.
const FONT_SIZE_PER_THICKNESS: f32 = 5.0;

/// A named entry of the fixed colour menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub color: Color32,
}

/// The colours offered by the brush menu. Black is the default.
pub const PALETTE: [PaletteColor; 4] = [
    PaletteColor { name: "Black", color: Color32::BLACK },
    PaletteColor { name: "Red", color: Color32::RED },
    PaletteColor { name: "Blue", color: Color32::BLUE },
    PaletteColor { name: "Green", color: Color32::GREEN },
];

/// The brush settings for one window: stroke colour and thickness.
///
/// These change only through explicit menu selections, never as a side
/// effect of drawing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub color: Color32,
    pub thickness: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            thickness: DEFAULT_THICKNESS,
        }
    }
}

impl ToolSettings {
    /// Applies user input from the thickness prompt.
    ///
    /// Only positive whole numbers are accepted; on any other input the
    /// current thickness is left untouched and the error carries the
    /// rejected text for display.
    pub fn set_thickness_from_input(&mut self, input: &str) -> Result<(), Error> {
        match input.trim().parse::<u32>() {
            Ok(n) if n > 0 => {
                self.thickness = n as f32;
                Ok(())
            }
            _ => Err(Error::InvalidThickness {
                input: input.to_owned(),
            }),
        }
    }

    /// Font size for pasted text labels, scaled from the stroke thickness.
    pub fn font_size(&self) -> f32 {
        self.thickness * FONT_SIZE_PER_THICKNESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_whole_numbers() {
        let mut settings = ToolSettings::default();
        settings.set_thickness_from_input("6").unwrap();
        assert_eq!(settings.thickness, 6.0);
        settings.set_thickness_from_input(" 7 ").unwrap();
        assert_eq!(settings.thickness, 7.0);
    }

    #[test]
    fn rejects_bad_input_and_keeps_prior_value() {
        let mut settings = ToolSettings::default();
        settings.set_thickness_from_input("5").unwrap();
        for input in ["abc", "", "0", "-3", "2.5"] {
            assert!(settings.set_thickness_from_input(input).is_err());
            assert_eq!(settings.thickness, 5.0);
        }
    }

    #[test]
    fn font_size_scales_with_thickness() {
        let mut settings = ToolSettings::default();
        settings.set_thickness_from_input("4").unwrap();
        assert_eq!(settings.font_size(), 20.0);
    }

    #[test]
    fn palette_starts_with_black_and_red() {
        assert_eq!(PALETTE[0].color, Color32::BLACK);
        assert_eq!(PALETTE[1].color, Color32::RED);
    }
}
