use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for a [`crate::Board`].
///
/// Colors are stored as `[r, g, b, a]` so the config stays plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct BoardConfig {
    /// Oversampling factor applied to raw client coordinates
    pub magnification: f32,
    /// Stroke width in device pixels, also used as the hit-test width
    pub line_width: f32,
    pub normal_color: [u8; 4],
    pub selected_color: [u8; 4],
    /// Extra width of the glow drawn under selected paths
    pub glow_blur: f32,
    /// Toggle paths the pointer passes over while in select mode
    pub toggle_on_hover: bool,
    /// Color the app paints behind the transparent surface
    pub background: [u8; 4],
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            magnification: 2.0,
            line_width: 10.0,
            normal_color: [255, 0, 0, 255],
            selected_color: [0, 128, 0, 255],
            glow_blur: 15.0,
            toggle_on_hover: false,
            background: [250, 235, 215, 255],
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.magnification.is_finite() && self.magnification > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "magnification must be positive, got {}",
                self.magnification
            )));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        if !(self.glow_blur.is_finite() && self.glow_blur >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "glow_blur must not be negative, got {}",
                self.glow_blur
            )));
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}
