//! Configuration and settings management for TeeStudio
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (design-time reference width)
//! - Printable area base rectangles per view
//! - Upload limits
//! - Editor control ranges and text defaults
//! - Export timings and pixel density
//! - External service endpoints and credentials

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use teestudio_core::View;

/// Design-time canvas reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Container width the printable-area constants were designed against
    pub base_width: f64,
    /// Canvas height at the base width
    pub base_height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            base_width: 500.0,
            base_height: 500.0,
        }
    }
}

/// Printable area at the base width, before scaling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaBase {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for AreaBase {
    fn default() -> Self {
        Self {
            top: 120.0,
            left: 150.0,
            width: 200.0,
            height: 220.0,
        }
    }
}

/// Printable area base rectangles, one per view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrintableAreaSettings {
    pub front: AreaBase,
    pub back: AreaBase,
}

impl PrintableAreaSettings {
    /// Base rectangle for the given view.
    pub fn for_view(&self, view: View) -> &AreaBase {
        match view {
            View::Front => &self.front,
            View::Back => &self.back,
        }
    }
}

/// Upload intake limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSettings {
    /// Maximum accepted file size in bytes
    pub max_file_size: usize,
    /// MIME prefix an upload must carry
    pub accepted_mime_prefix: String,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            accepted_mime_prefix: "image/".to_string(),
        }
    }
}

/// Inclusive numeric range used by the editor controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether the value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Editor control ranges and text defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Image size slider range (percent of natural size)
    pub image_size: Range,
    /// Rotation slider range (degrees)
    pub rotation: Range,
    /// Font size slider range (pixels)
    pub font_size: Range,
    /// Font size for new text
    pub default_font_size: f64,
    /// Colour for new text
    pub default_text_color: String,
    /// Font family for new text
    pub default_font: String,
    /// Font families offered to the user
    pub fonts: Vec<String>,
    /// Smallest box the image handles accept (pixels per side)
    pub min_image_box: f64,
    /// Smallest box the text handles accept (pixels per side)
    pub min_text_box: f64,
    /// Opacity of the unclipped selected-text ghost
    pub ghost_opacity: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            image_size: Range::new(10.0, 200.0),
            rotation: Range::new(0.0, 360.0),
            font_size: Range::new(12.0, 72.0),
            default_font_size: 24.0,
            default_text_color: "#000000".to_string(),
            default_font: "Arial".to_string(),
            fonts: [
                "Arial",
                "Verdana",
                "Helvetica",
                "Times New Roman",
                "Courier New",
                "Georgia",
                "Palatino",
                "Garamond",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
            min_image_box: 20.0,
            min_text_box: 10.0,
            ghost_opacity: 0.3,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Output pixel density multiplier
    pub pixel_ratio: f32,
    /// Wait after switching the active view before forcing a redraw
    pub view_switch_delay_ms: u64,
    /// Wait after the forced redraw before sampling pixels
    pub redraw_delay_ms: u64,
    /// Output file name, `{view}` is replaced with `front` or `back`
    pub file_name_pattern: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pixel_ratio: 2.0,
            view_switch_delay_ms: 300,
            redraw_delay_ms: 200,
            file_name_pattern: "tshirt-{view}.png".to_string(),
        }
    }
}

impl ExportSettings {
    /// File name for an exported view.
    pub fn file_name(&self, view: View) -> String {
        self.file_name_pattern.replace("{view}", view.as_str())
    }
}

/// External service endpoints and credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Background removal endpoint
    pub background_removal_url: String,
    /// Background removal API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_removal_api_key: Option<String>,
    /// Raster upload endpoint
    pub upload_url: String,
    /// Raster upload public key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_public_key: Option<String>,
    /// Base URL uploaded files are served from
    pub cdn_base_url: String,
    /// Order-context endpoint notified after upload
    pub order_context_url: String,
    /// Product name sent with the order context
    pub order_product_name: String,
    /// Attribute name the uploaded file id is stored under
    pub order_file_attribute: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            background_removal_url: "https://api.remove.bg/v1.0/removebg".to_string(),
            background_removal_api_key: option_env!("TEESTUDIO_BG_REMOVE_API_KEY")
                .map(str::to_string),
            upload_url: "https://upload.uploadcare.com/base/".to_string(),
            upload_public_key: option_env!("TEESTUDIO_UPLOAD_PUBLIC_KEY").map(str::to_string),
            cdn_base_url: "https://ucarecdn.com".to_string(),
            order_context_url: "http://emmano.pl/products/biala-koszulka-13957/context"
                .to_string(),
            order_product_name: "Logo duże".to_string(),
            order_file_attribute: "Dodaj plik".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub printable_area: PrintableAreaSettings,
    #[serde(default)]
    pub upload: UploadSettings,
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub services: ServiceSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location (`<config dir>/teestudio/config.toml`)
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("teestudio").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.base_width <= 0.0 {
            return Err(SettingsError::invalid("canvas.base_width", "must be > 0"));
        }
        if self.canvas.base_height <= 0.0 {
            return Err(SettingsError::invalid("canvas.base_height", "must be > 0"));
        }

        for view in View::ALL {
            let area = self.printable_area.for_view(view);
            let key = format!("printable_area.{}", view);
            if area.width <= 0.0 || area.height <= 0.0 {
                return Err(SettingsError::invalid(&key, "width and height must be > 0"));
            }
            if area.left < 0.0
                || area.top < 0.0
                || area.left + area.width > self.canvas.base_width
                || area.top + area.height > self.canvas.base_height
            {
                return Err(SettingsError::invalid(&key, "must lie inside the canvas"));
            }
        }

        if self.upload.max_file_size == 0 {
            return Err(SettingsError::invalid("upload.max_file_size", "must be > 0"));
        }

        for (key, range) in [
            ("editor.image_size", self.editor.image_size),
            ("editor.rotation", self.editor.rotation),
            ("editor.font_size", self.editor.font_size),
        ] {
            if range.min > range.max {
                return Err(SettingsError::invalid(key, "min must not exceed max"));
            }
        }
        if self.editor.image_size.min <= 0.0 || self.editor.font_size.min <= 0.0 {
            return Err(SettingsError::invalid(
                "editor",
                "size and font size ranges must stay positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.editor.ghost_opacity) {
            return Err(SettingsError::invalid(
                "editor.ghost_opacity",
                "must be within 0..=1",
            ));
        }

        if self.export.pixel_ratio <= 0.0 {
            return Err(SettingsError::invalid("export.pixel_ratio", "must be > 0"));
        }
        if !self.export.file_name_pattern.contains("{view}") {
            return Err(SettingsError::invalid(
                "export.file_name_pattern",
                "must contain {view}",
            ));
        }

        if self.services.request_timeout_ms == 0 {
            return Err(SettingsError::invalid(
                "services.request_timeout_ms",
                "must be > 0",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}
