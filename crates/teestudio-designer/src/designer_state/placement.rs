//! Alignment and presets for the selected element.
//!
//! Geometry comes from the printable area of the active view.

use teestudio_core::PlacementError;

use super::DesignerState;
use crate::alignment::{align_image, align_text, AlignmentIntent};
use crate::model::{ImagePatch, TextPatch};
use crate::presets::{resolve_preset, PositionPreset};

impl DesignerState {
    /// Aligns the selected image; returns `false` when nothing changed.
    pub fn align_selected_image(&mut self, intent: AlignmentIntent) -> bool {
        if intent.is_empty() {
            return false;
        }
        let area = self.active_printable_area();
        let Some(image) = self.selected_image() else {
            return false;
        };
        let id = image.id.clone();
        let (x, y) = align_image(intent, image, &area);
        self.update_image(&id, &ImagePatch::position(x, y))
    }

    /// Aligns the selected text using its measured width.
    pub fn align_selected_text(&mut self, intent: AlignmentIntent) -> bool {
        if intent.is_empty() {
            return false;
        }
        let area = self.active_printable_area();
        let Some(text) = self.selected_text() else {
            return false;
        };
        let id = text.id.clone();
        let (x, y) = align_text(intent, text, &area, self.measure_text(text));
        self.update_text(&id, &TextPatch::position(x, y))
    }

    /// Applies a named placement to the selected image.
    ///
    /// `Ok(false)` when no image is selected.
    pub fn apply_preset(&mut self, preset: PositionPreset) -> Result<bool, PlacementError> {
        let area = self.active_printable_area();
        let Some(image) = self.selected_image() else {
            return Ok(false);
        };
        let id = image.id.clone();
        let placement = resolve_preset(preset, &area, &image.natural)?;
        let patch = ImagePatch {
            size: placement.size,
            x: Some(placement.x),
            y: Some(placement.y),
            ..Default::default()
        };
        tracing::debug!(id = %id, ?preset, "Applying preset");
        Ok(self.update_image(&id, &patch))
    }
}
