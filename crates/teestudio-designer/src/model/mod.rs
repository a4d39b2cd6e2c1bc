//! Element model: placed images and text runs.
//!
//! Both kinds share the [`Element`] trait so the store can keep one generic
//! collection per view and kind.

use serde::{Deserialize, Serialize};
use teestudio_core::{ElementId, ElementKind};

mod image_element;
mod text_element;

pub use image_element::{ImageElement, ImagePatch, ImageSource};
pub use text_element::{TextElement, TextPatch, TextStyle};

/// Intrinsic pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NaturalSize {
    pub width: f64,
    pub height: f64,
}

impl NaturalSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Common surface of every placed element.
pub trait Element {
    /// Partial update accepted by [`Element::apply_patch`].
    type Patch;

    const KIND: ElementKind;

    fn id(&self) -> &ElementId;

    fn set_id(&mut self, id: ElementId);

    /// Merges the set fields of `patch`; unset fields keep their value.
    fn apply_patch(&mut self, patch: &Self::Patch);

    fn rotation(&self) -> f64;
}
