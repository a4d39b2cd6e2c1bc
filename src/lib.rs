//! # TeeStudio
//!
//! Headless placement and export engine for a two-sided garment editor:
//! - Uploaded images and typed text placed on the front or back view
//! - Drag, resize and rotate gestures committed into a single store
//! - Edge/center alignment and named placements (center, pocket, full front)
//! - Print-ready PNG export of the printable area at 2× pixel ratio
//!
//! ## Architecture
//!
//! TeeStudio is organized as a workspace with multiple crates:
//!
//! 1. **teestudio-core** - Views, element ids, error types
//! 2. **teestudio-settings** - Editor, export and service configuration
//! 3. **teestudio-designer** - Printable area, element store, transforms, rendering
//! 4. **teestudio-services** - Background removal, CDN upload, order context

pub use teestudio_designer as designer;
pub use teestudio_services as services;

pub use teestudio_core::{
    ElementId, ElementKind, ElementRef, Error, PlacementError, RenderError, Result,
    ServiceError, ValidationError, View,
};

pub use teestudio_settings::{
    AreaBase, Config, EditorSettings, ExportSettings, ServiceSettings, SettingsError,
    UploadSettings,
};

pub use teestudio_designer::{
    AlignmentIntent, CanvasGeometry, DesignerState, ExportArtifact, GestureEnd, HorizontalAlign,
    ImageElement, Manipulation, PositionPreset, PrintableArea, RenderBridge, RenderOptions,
    SliderEdit, TextElement, TextStyle, UploadRequest, VerticalAlign,
};

pub use teestudio_services::{
    publish_view, remove_selected_background, BackgroundRemover, OrderContextClient,
    OrderContextSink, PublishedDesign, RasterUploader, RemoveBgClient, RequestState,
    UploadcareClient,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
