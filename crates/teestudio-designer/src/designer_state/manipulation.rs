//! Gesture and slider write paths.
//!
//! Gestures commit once, on release. Slider edits commit on every change.
//! Both land in the same store, so the last call wins.

use teestudio_core::{ElementId, ElementKind, ElementRef};

use super::DesignerState;
use crate::element_store::ElementStore;
use crate::model::{ImagePatch, TextPatch};
use crate::transform::{
    commit_image_drag, commit_image_transform, commit_text_drag, commit_text_transform,
    rotate_text, GestureEnd, Manipulation, NodeTransform, SliderEdit,
};

impl DesignerState {
    /// Starts a gesture on an element of the active view.
    ///
    /// Any element can be dragged; resize and rotate need the handles to be
    /// attached to it.
    pub fn begin_manipulation(&self, target: ElementRef) -> Option<Manipulation> {
        let view = self.active_view;
        let (footprint, node) = match target.kind {
            ElementKind::Image => {
                let image = self.store.image(view, &target.id)?;
                (
                    image.footprint(),
                    NodeTransform::at(image.x, image.y, image.rotation),
                )
            }
            ElementKind::Text => {
                let text = self.store.text(view, &target.id)?;
                let (x, y) = text.position_or(&self.printable_area(view));
                (self.text_footprint(text), NodeTransform::at(x, y, text.rotation))
            }
        };
        Some(Manipulation::begin(target, view, footprint, node, &self.handles))
    }

    /// Commits a finished gesture; returns whether the store changed.
    pub fn end_manipulation(&mut self, gesture: Manipulation) -> bool {
        let view = gesture.view();
        let target = gesture.target().clone();
        let committed = match (target.kind, gesture.finish()) {
            (_, GestureEnd::None) => false,
            (ElementKind::Image, GestureEnd::Drag(node)) => {
                self.store.update_image(view, &target.id, &commit_image_drag(&node))
            }
            (ElementKind::Text, GestureEnd::Drag(node)) => {
                self.store.update_text(view, &target.id, &commit_text_drag(&node))
            }
            (ElementKind::Image, GestureEnd::Transform(mut node)) => {
                match self.store.image(view, &target.id).map(|img| img.size) {
                    Some(size) => {
                        let patch = commit_image_transform(size, &mut node);
                        self.store.update_image(view, &target.id, &patch)
                    }
                    None => false,
                }
            }
            (ElementKind::Text, GestureEnd::Transform(mut node)) => {
                match self.store.text(view, &target.id).map(|t| t.font_size) {
                    Some(font_size) => {
                        let patch = commit_text_transform(font_size, &mut node);
                        self.store.update_text(view, &target.id, &patch)
                    }
                    None => false,
                }
            }
        };
        if committed {
            tracing::debug!(view = %view, target = %target, "Gesture committed");
        }
        committed
    }

    /// Applies a side-panel edit to the selected element of its kind.
    pub fn apply_slider(&mut self, edit: SliderEdit) -> bool {
        let editor = &self.config.editor;
        let edit = edit.clamped(&editor.image_size, &editor.rotation, &editor.font_size);
        let view = self.active_view;
        match edit {
            SliderEdit::ImageSize(size) => self.with_selected_image(|id, store| {
                store.update_image(view, id, &ImagePatch::size(size))
            }),
            SliderEdit::ImageRotation(rotation) => self.with_selected_image(|id, store| {
                store.update_image(view, id, &ImagePatch::rotation(rotation))
            }),
            SliderEdit::FontSize(font_size) => {
                self.update_selected_text(&TextPatch::font_size(font_size))
            }
            SliderEdit::TextRotation(rotation) => {
                self.update_selected_text(&TextPatch::rotation(rotation))
            }
        }
    }

    fn with_selected_image(
        &mut self,
        f: impl FnOnce(&ElementId, &mut ElementStore) -> bool,
    ) -> bool {
        match self.selection.selected_image().cloned() {
            Some(id) => f(&id, &mut self.store),
            None => false,
        }
    }

    /// Sets the rotation of a text of the active view.
    pub fn rotate_text(&mut self, id: &ElementId, degrees: f64) -> bool {
        self.store
            .update_text(self.active_view, id, &rotate_text(degrees))
    }
}
