use serde::{Deserialize, Serialize};
use teestudio_core::{ElementId, ElementKind};

use super::Element;
use crate::printable_area::PrintableArea;

/// A single-line text run placed on one view.
///
/// A text created before it was ever positioned has no coordinates and is
/// drawn at the center of the printable area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub id: ElementId,
    pub text: String,
    pub font_size: f64,
    /// CSS-style color, `#rrggbb`.
    pub color: String,
    pub font: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: f64,
}

impl TextElement {
    /// Anchor position, falling back to the area center for unset axes.
    pub fn position_or(&self, area: &PrintableArea) -> (f64, f64) {
        let (cx, cy) = area.center();
        (self.x.unwrap_or(cx), self.y.unwrap_or(cy))
    }

    pub fn has_position(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

impl Element for TextElement {
    type Patch = TextPatch;

    const KIND: ElementKind = ElementKind::Text;

    fn id(&self) -> &ElementId {
        &self.id
    }

    fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: &TextPatch) {
        patch.apply(self);
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }
}

/// Style chosen when a text is added.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: String,
    pub font: String,
}

/// Partial update of a text's content, style or placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPatch {
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub color: Option<String>,
    pub font: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
}

impl TextPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn font_size(font_size: f64) -> Self {
        Self {
            font_size: Some(font_size),
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
        *self == Self::default()
    }

    pub fn apply(&self, text: &mut TextElement) {
        if let Some(content) = &self.text {
            text.text = content.clone();
        }
        if let Some(font_size) = self.font_size {
            text.font_size = font_size;
        }
        if let Some(color) = &self.color {
            text.color = color.clone();
        }
        if let Some(font) = &self.font {
            text.font = font.clone();
        }
        if let Some(x) = self.x {
            text.x = Some(x);
        }
        if let Some(y) = self.y {
            text.y = Some(y);
        }
        if let Some(rotation) = self.rotation {
            text.rotation = rotation;
        }
    }
}
