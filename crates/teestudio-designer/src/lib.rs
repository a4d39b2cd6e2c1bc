//! # TeeStudio Designer
//!
//! Placement model of the garment editor: where each uploaded image and
//! text sits on the front or back of the garment, how gestures and panel
//! controls move it, and how a view is turned into a print-ready PNG.
//!
//! ## Core Components
//!
//! - **Printable area**: drawable region scaled from the container width
//! - **Element store**: per-view, per-kind ordered collections
//! - **Transform engine**: gesture-end commits, handle minimum box, sliders
//! - **Alignment and presets**: edge/center alignment, pocket and full-front
//! - **Renderer**: tiny-skia compositing and the export bridge
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (one editing session)
//!   ├── ElementStore (front/back × image/text)
//!   ├── SelectionManager + TransformHandles
//!   └── CanvasGeometry (derived from container width)
//!
//! RenderBridge (owns the drawing surface)
//!   └── render_view → crop → PNG
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teestudio_designer::{DesignerState, UploadRequest, PositionPreset};
//!
//! let mut state = DesignerState::default();
//! let id = state.upload_image(UploadRequest::new(bytes, "image/png"))?;
//! state.select_image(View::Front, &id);
//! state.apply_preset(PositionPreset::Pocket)?;
//! ```

pub mod alignment;
pub mod designer_state;
pub mod element_store;
pub mod font_manager;
pub mod model;
pub mod presets;
pub mod printable_area;
pub mod renderer;
pub mod selection_manager;
pub mod transform;
pub mod upload;

pub use alignment::{AlignmentIntent, HorizontalAlign, VerticalAlign};
pub use designer_state::DesignerState;
pub use element_store::ElementStore;
pub use font_manager::{SystemFontMeasurer, TextMeasurer};
pub use model::{
    Element, ImageElement, ImagePatch, ImageSource, NaturalSize, TextElement, TextPatch, TextStyle,
};
pub use presets::{PositionPreset, PresetPlacement};
pub use printable_area::{scaled_printable_area, CanvasGeometry, PrintableArea};
pub use renderer::{render_view, ExportArtifact, RenderBridge, RenderOptions};
pub use selection_manager::SelectionManager;
pub use transform::{GestureEnd, HandleBox, Manipulation, NodeTransform, SliderEdit, TransformHandles};
pub use upload::{decode_image, UploadRequest};
