//! TeeStudio Settings Crate
//!
//! Handles editor configuration: canvas geometry constants, upload limits,
//! control ranges, export timings, and external service endpoints.

pub mod config;
pub mod error;

pub use config::{
    AreaBase, CanvasSettings, Config, EditorSettings, ExportSettings, PrintableAreaSettings,
    Range, ServiceSettings, UploadSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
