use serde::{Deserialize, Serialize};
use teestudio_core::{ElementId, ElementKind};

use super::{Element, NaturalSize};

/// A raster image placed on one view.
///
/// `size` is a percentage of the natural dimensions; `(x, y)` is the center
/// of the rendered footprint and the rotation pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    pub id: ElementId,
    /// Displayable source (a `data:` URL for local uploads).
    pub url: String,
    pub size: f64,
    pub rotation: f64,
    pub x: f64,
    pub y: f64,
    pub natural: NaturalSize,
    /// Encoded bytes behind `url`, kept for rasterization.
    #[serde(skip)]
    pub source: Vec<u8>,
    pub mime: String,
}

impl ImageElement {
    /// Scale factor applied to the natural dimensions.
    pub fn scale(&self) -> f64 {
        self.size / 100.0
    }

    /// Rendered `(width, height)` before rotation.
    pub fn footprint(&self) -> (f64, f64) {
        let scale = self.scale();
        (self.natural.width * scale, self.natural.height * scale)
    }

    /// Swaps the pixel source while keeping placement.
    pub fn replace_source(&mut self, source: ImageSource) {
        self.url = source.url;
        self.natural = source.natural;
        self.source = source.bytes;
        self.mime = source.mime;
    }
}

impl Element for ImageElement {
    type Patch = ImagePatch;

    const KIND: ElementKind = ElementKind::Image;

    fn id(&self) -> &ElementId {
        &self.id
    }

    fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: &ImagePatch) {
        patch.apply(self);
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }
}

/// Partial update of an image's placement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImagePatch {
    pub size: Option<f64>,
    pub rotation: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ImagePatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn size(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn rotation(rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.rotation.is_none() && self.x.is_none() && self.y.is_none()
    }

    pub fn apply(&self, image: &mut ImageElement) {
        if let Some(size) = self.size {
            image.size = size;
        }
        if let Some(rotation) = self.rotation {
            image.rotation = rotation;
        }
        if let Some(x) = self.x {
            image.x = x;
        }
        if let Some(y) = self.y {
            image.y = y;
        }
    }
}

/// A replacement pixel source, e.g. after background removal.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    pub url: String,
    pub natural: NaturalSize,
    pub bytes: Vec<u8>,
    pub mime: String,
}
