use teestudio_core::{ElementId, ElementRef};

/// Tracks the selected image and the selected text.
///
/// `SelectionManager` is responsible for:
/// - Holding at most one selected image and at most one selected text
/// - Keeping the two selections mutually exclusive when set through
///   [`select_image`](Self::select_image) or [`select_text`](Self::select_text)
/// - Clearing a selection whose element was deleted
///
/// # Selection Model
///
/// Selections are plain ids. They are not validated against the store; the
/// caller resolves them against the active view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected_image: Option<ElementId>,
    selected_text: Option<ElementId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use teestudio_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_image(&self) -> Option<&ElementId> {
        self.selected_image.as_ref()
    }

    pub fn selected_text(&self) -> Option<&ElementId> {
        self.selected_text.as_ref()
    }

    /// Selects an image and clears the text selection.
    pub fn select_image(&mut self, id: ElementId) {
        self.selected_image = Some(id);
        self.selected_text = None;
    }

    /// Selects a text and clears the image selection.
    pub fn select_text(&mut self, id: ElementId) {
        self.selected_text = Some(id);
        self.selected_image = None;
    }

    /// Clears the image selection if it points at `id`.
    ///
    /// # Returns
    ///
    /// `true` if the selection was cleared.
    pub fn clear_image_if(&mut self, id: &ElementId) -> bool {
        if self.selected_image.as_ref() == Some(id) {
            self.selected_image = None;
            true
        } else {
            false
        }
    }

    /// Clears the text selection if it points at `id`.
    pub fn clear_text_if(&mut self, id: &ElementId) -> bool {
        if self.selected_text.as_ref() == Some(id) {
            self.selected_text = None;
            true
        } else {
            false
        }
    }

    /// Deselects everything.
    pub fn deselect_all(&mut self) {
        self.selected_image = None;
        self.selected_text = None;
    }

    /// Copy of the current selection, for later [`restore`](Self::restore).
    pub fn snapshot(&self) -> SelectionManager {
        self.clone()
    }

    pub fn restore(&mut self, snapshot: SelectionManager) {
        *self = snapshot;
    }

    pub fn is_empty(&self) -> bool {
        self.selected_image.is_none() && self.selected_text.is_none()
    }

    /// The current selection as a typed reference, image first.
    pub fn selected_ref(&self) -> Option<ElementRef> {
        self.selected_image
            .clone()
            .map(ElementRef::image)
            .or_else(|| self.selected_text.clone().map(ElementRef::text))
    }
}
