//! Alignment resolver.
//!
//! Positions are element centers, so aligning to an edge offsets the center
//! by half the footprint. Rotation is ignored: the footprint is the
//! unrotated box.

use serde::{Deserialize, Serialize};

use crate::model::{ImageElement, TextElement};
use crate::printable_area::PrintableArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Requested alignment; an absent axis keeps its coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentIntent {
    pub horizontal: Option<HorizontalAlign>,
    pub vertical: Option<VerticalAlign>,
}

impl AlignmentIntent {
    pub fn horizontal(align: HorizontalAlign) -> Self {
        Self {
            horizontal: Some(align),
            vertical: None,
        }
    }

    pub fn vertical(align: VerticalAlign) -> Self {
        Self {
            horizontal: None,
            vertical: Some(align),
        }
    }

    pub fn both(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal: Some(horizontal),
            vertical: Some(vertical),
        }
    }

    /// Center on both axes.
    pub fn center() -> Self {
        Self::both(HorizontalAlign::Center, VerticalAlign::Middle)
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

/// Center x for an element `half_width` wide.
pub fn resolve_horizontal(align: HorizontalAlign, area: &PrintableArea, half_width: f64) -> f64 {
    match align {
        HorizontalAlign::Left => area.left + half_width,
        HorizontalAlign::Center => area.left + area.width / 2.0,
        HorizontalAlign::Right => area.left + area.width - half_width,
    }
}

/// Center y for an element `half_height` tall.
pub fn resolve_vertical(align: VerticalAlign, area: &PrintableArea, half_height: f64) -> f64 {
    match align {
        VerticalAlign::Top => area.top + half_height,
        VerticalAlign::Middle => area.top + area.height / 2.0,
        VerticalAlign::Bottom => area.top + area.height - half_height,
    }
}

fn resolve(
    intent: AlignmentIntent,
    area: &PrintableArea,
    current: (f64, f64),
    half_width: f64,
    half_height: f64,
) -> (f64, f64) {
    let x = intent
        .horizontal
        .map_or(current.0, |h| resolve_horizontal(h, area, half_width));
    let y = intent
        .vertical
        .map_or(current.1, |v| resolve_vertical(v, area, half_height));
    (x, y)
}

/// New center of an image; the footprint is natural size × size/100.
pub fn align_image(intent: AlignmentIntent, image: &ImageElement, area: &PrintableArea) -> (f64, f64) {
    let (width, height) = image.footprint();
    resolve(intent, area, (image.x, image.y), width / 2.0, height / 2.0)
}

/// New center of a text run.
///
/// `measured_width` is the advance width of the text in its font; the font
/// size stands in for the line height.
pub fn align_text(
    intent: AlignmentIntent,
    text: &TextElement,
    area: &PrintableArea,
    measured_width: f64,
) -> (f64, f64) {
    let current = text.position_or(area);
    resolve(intent, area, current, measured_width / 2.0, text.font_size / 2.0)
}
