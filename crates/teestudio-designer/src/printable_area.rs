//! Printable-area scaling.
//!
//! The printable area is derived from the container width, never stored.
//! Every constant is authored against a fixed base width and scaled linearly:
//! `scale = container_width / base_width`.

use serde::{Deserialize, Serialize};
use teestudio_core::View;
use teestudio_settings::{AreaBase, CanvasSettings, PrintableAreaSettings};

/// Axis-aligned drawable region, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintableArea {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl PrintableArea {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Geometric center `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// True when either side is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Linear scale of a container relative to the design-time base width.
pub fn scale_factor(container_width: f64, base_width: f64) -> f64 {
    container_width / base_width
}

/// Scales a base rectangle to the given container width.
///
/// Not guarded: a zero container width yields a zero-area region.
pub fn scaled_printable_area(container_width: f64, base: &AreaBase, base_width: f64) -> PrintableArea {
    let scale = scale_factor(container_width, base_width);
    PrintableArea {
        top: base.top * scale,
        left: base.left * scale,
        width: base.width * scale,
        height: base.height * scale,
    }
}

/// Canvas size and per-view printable areas for one container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub scale: f64,
    pub width: f64,
    pub height: f64,
    front: PrintableArea,
    back: PrintableArea,
}

impl CanvasGeometry {
    pub fn for_container(
        container_width: f64,
        canvas: &CanvasSettings,
        areas: &PrintableAreaSettings,
    ) -> Self {
        let scale = scale_factor(container_width, canvas.base_width);
        Self {
            scale,
            width: container_width,
            height: canvas.base_height * scale,
            front: scaled_printable_area(container_width, &areas.front, canvas.base_width),
            back: scaled_printable_area(container_width, &areas.back, canvas.base_width),
        }
    }

    pub fn printable_area(&self, view: View) -> PrintableArea {
        match view {
            View::Front => self.front,
            View::Back => self.back,
        }
    }
}
