//! Element lifecycle: upload, text creation, selection, edits and deletion.

use teestudio_core::{ElementId, ElementRef, Result, View};

use super::DesignerState;
use crate::model::{
    ImageElement, ImagePatch, ImageSource, TextElement, TextPatch, TextStyle,
};
use crate::upload::{decode_image, initial_placement, validate_upload, UploadRequest};

impl DesignerState {
    /// Validates, decodes and places an upload on the active view.
    ///
    /// Rejected files never reach the store.
    pub fn upload_image(&mut self, request: UploadRequest) -> Result<ElementId> {
        validate_upload(&request, &self.config.upload)?;
        let source = decode_image(request.bytes, &request.mime)?;
        let area = self.active_printable_area();
        let (size, x, y) = initial_placement(&area, &source.natural);

        let view = self.active_view;
        let id = self.store.append_image(
            view,
            ImageElement {
                id: ElementId::new(""),
                url: source.url,
                size,
                rotation: 0.0,
                x,
                y,
                natural: source.natural,
                source: source.bytes,
                mime: source.mime,
            },
        );
        tracing::info!(
            view = %view,
            id = %id,
            file = request.file_name.as_deref().unwrap_or("<unnamed>"),
            size,
            "Image uploaded"
        );
        Ok(id)
    }

    /// Text style from the editor defaults.
    pub fn default_text_style(&self) -> TextStyle {
        TextStyle {
            font_size: self.config.editor.default_font_size,
            color: self.config.editor.default_text_color.clone(),
            font: self.config.editor.default_font.clone(),
        }
    }

    /// Adds a text to the active view and selects it.
    ///
    /// Blank text is ignored. The new text has no position and is drawn at
    /// the area center until moved.
    pub fn add_text(&mut self, text: &str, style: TextStyle) -> Option<ElementId> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }
        let view = self.active_view;
        let id = self.store.append_text(
            view,
            TextElement {
                id: ElementId::new(""),
                text: content.to_string(),
                font_size: style.font_size,
                color: style.color,
                font: style.font,
                x: None,
                y: None,
                rotation: 0.0,
            },
        );
        tracing::info!(view = %view, id = %id, "Text added");
        self.selection.select_text(id.clone());
        self.handles.attach(ElementRef::text(id.clone()));
        Some(id)
    }

    /// Selects an image of `view`, making it the active view.
    ///
    /// Clears the text selection. Unknown ids are ignored.
    pub fn select_image(&mut self, view: View, id: &ElementId) -> bool {
        if self.store.image(view, id).is_none() {
            return false;
        }
        self.set_active_view(view);
        self.selection.select_image(id.clone());
        self.handles.attach(ElementRef::image(id.clone()));
        true
    }

    /// Selects a text of `view`, making it the active view.
    ///
    /// Clears the image selection. Unknown ids are ignored.
    pub fn select_text(&mut self, view: View, id: &ElementId) -> bool {
        if self.store.text(view, id).is_none() {
            return false;
        }
        self.set_active_view(view);
        self.selection.select_text(id.clone());
        self.handles.attach(ElementRef::text(id.clone()));
        true
    }

    /// Clears both selections and detaches the handles.
    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
        self.handles.detach();
    }

    pub fn selected_image(&self) -> Option<&ImageElement> {
        let id = self.selection.selected_image()?;
        self.store.image(self.active_view, id)
    }

    pub fn selected_text(&self) -> Option<&TextElement> {
        let id = self.selection.selected_text()?;
        self.store.text(self.active_view, id)
    }

    /// Merges `patch` into an image of the active view.
    pub fn update_image(&mut self, id: &ElementId, patch: &ImagePatch) -> bool {
        self.store.update_image(self.active_view, id, patch)
    }

    /// Merges `patch` into a text of the active view.
    pub fn update_text(&mut self, id: &ElementId, patch: &TextPatch) -> bool {
        self.store.update_text(self.active_view, id, patch)
    }

    pub fn update_selected_text(&mut self, patch: &TextPatch) -> bool {
        match self.selection.selected_text().cloned() {
            Some(id) => self.update_text(&id, patch),
            None => false,
        }
    }

    /// Removes an image of the active view, clearing its selection.
    ///
    /// The other view is never touched, even if it holds the same id.
    pub fn delete_image(&mut self, id: &ElementId) -> bool {
        let removed = self.store.remove_image(self.active_view, id).is_some();
        if removed {
            self.selection.clear_image_if(id);
            if self.handles.is_attached_to(&ElementRef::image(id.clone())) {
                self.handles.detach();
            }
            tracing::info!(view = %self.active_view, id = %id, "Image deleted");
        }
        removed
    }

    /// Removes a text of the active view, clearing its selection.
    ///
    /// The other view is never touched, even if it holds the same id.
    pub fn delete_text(&mut self, id: &ElementId) -> bool {
        let removed = self.store.remove_text(self.active_view, id).is_some();
        if removed {
            self.selection.clear_text_if(id);
            if self.handles.is_attached_to(&ElementRef::text(id.clone())) {
                self.handles.detach();
            }
            tracing::info!(view = %self.active_view, id = %id, "Text deleted");
        }
        removed
    }

    /// Swaps the pixels of an image in place; id and placement are kept.
    pub fn replace_image_source(&mut self, view: View, id: &ElementId, source: ImageSource) -> bool {
        match self.store.image_mut(view, id) {
            Some(image) => {
                image.replace_source(source);
                tracing::info!(view = %view, id = %id, "Image source replaced");
                true
            }
            None => false,
        }
    }
}
