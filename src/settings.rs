//! Persistent studio settings.
//!
//! Stored as JSON under the platform config directory. Missing or partial
//! files fall back to defaults field by field, and an unreadable file never
//! blocks startup.

use crate::constants::{
    PREVIEW_MAX_HEIGHT, PREVIEW_MAX_WIDTH, PREVIEW_PDF_SCALE, THUMBNAIL_BACKGROUND,
    THUMBNAIL_PADDING, THUMBNAIL_PDF_SCALE, THUMBNAIL_SIZE,
};
use crate::render::{PreviewConfig, ThumbnailConfig};
use anyhow::{Context, Result};
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "pdf-studio";
const SETTINGS_FILE: &str = "settings.json";

/// Location of the settings file, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub thumbnail_size: u32,
    pub thumbnail_padding: u32,
    /// `#rrggbb`
    pub thumbnail_background: String,
    pub thumbnail_scale: f32,
    pub preview_max_width: u32,
    pub preview_max_height: u32,
    pub preview_scale: f32,
    /// Explicit PDFium library to bind before searching the usual locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdfium_library_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thumbnail_size: THUMBNAIL_SIZE,
            thumbnail_padding: THUMBNAIL_PADDING,
            thumbnail_background: THUMBNAIL_BACKGROUND.to_string(),
            thumbnail_scale: THUMBNAIL_PDF_SCALE,
            preview_max_width: PREVIEW_MAX_WIDTH,
            preview_max_height: PREVIEW_MAX_HEIGHT,
            preview_scale: PREVIEW_PDF_SCALE,
            pdfium_library_path: None,
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring settings file: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        let path = default_settings_path().context("no config directory on this platform")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn thumbnail_config(&self) -> ThumbnailConfig {
        let background = parse_hex_color(&self.thumbnail_background)
            .or_else(|| parse_hex_color(THUMBNAIL_BACKGROUND))
            .unwrap_or(Rgb([0, 0, 0]));
        ThumbnailConfig {
            size: self.thumbnail_size.max(1),
            padding: self.thumbnail_padding,
            background,
            pdf_scale: positive_or(self.thumbnail_scale, THUMBNAIL_PDF_SCALE),
        }
    }

    pub fn preview_config(&self) -> PreviewConfig {
        PreviewConfig {
            max_width: self.preview_max_width.max(1),
            max_height: self.preview_max_height.max(1),
            pdf_scale: positive_or(self.preview_scale, PREVIEW_PDF_SCALE),
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { fallback }
}

/// Parse `#rrggbb` (leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Option<Rgb<u8>> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
