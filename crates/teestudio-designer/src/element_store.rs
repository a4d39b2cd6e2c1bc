//! Element storage.
//!
//! Four independent ordered collections: images and texts, for the front and
//! the back view. Insertion order is paint order. Operations on an id that is
//! not present are silent no-ops.

use chrono::Utc;
use teestudio_core::{ElementId, View};
use uuid::Uuid;

use crate::model::{Element, ImageElement, ImagePatch, TextElement, TextPatch};

/// One ordered collection per view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCollections<E> {
    front: Vec<E>,
    back: Vec<E>,
}

impl<E> Default for ViewCollections<E> {
    fn default() -> Self {
        Self {
            front: Vec::new(),
            back: Vec::new(),
        }
    }
}

impl<E: Element> ViewCollections<E> {
    pub fn get(&self, view: View) -> &[E] {
        match view {
            View::Front => &self.front,
            View::Back => &self.back,
        }
    }

    fn get_mut(&mut self, view: View) -> &mut Vec<E> {
        match view {
            View::Front => &mut self.front,
            View::Back => &mut self.back,
        }
    }

    pub fn push(&mut self, view: View, element: E) {
        self.get_mut(view).push(element);
    }

    pub fn find(&self, view: View, id: &ElementId) -> Option<&E> {
        self.get(view).iter().find(|e| e.id() == id)
    }

    pub fn find_mut(&mut self, view: View, id: &ElementId) -> Option<&mut E> {
        self.get_mut(view).iter_mut().find(|e| e.id() == id)
    }

    /// Applies `patch` to the element with `id`; returns whether it existed.
    pub fn update(&mut self, view: View, id: &ElementId, patch: &E::Patch) -> bool {
        match self.find_mut(view, id) {
            Some(element) => {
                element.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    /// Removes the element with `id`, keeping the order of the rest.
    pub fn remove(&mut self, view: View, id: &ElementId) -> Option<E> {
        let items = self.get_mut(view);
        let index = items.iter().position(|e| e.id() == id)?;
        Some(items.remove(index))
    }

    pub fn len(&self, view: View) -> usize {
        self.get(view).len()
    }

    pub fn is_empty(&self, view: View) -> bool {
        self.get(view).is_empty()
    }
}

/// Owner of every placed element.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    images: ViewCollections<ImageElement>,
    texts: ViewCollections<TextElement>,
    sequence: u64,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for a new image: creation time plus a per-store sequence number.
    fn next_image_id(&mut self) -> ElementId {
        self.sequence += 1;
        ElementId::new(format!("img-{}-{}", Utc::now().timestamp_millis(), self.sequence))
    }

    /// Id for a new text: creation time plus a random suffix.
    fn next_text_id(&self) -> ElementId {
        let suffix = Uuid::new_v4().simple().to_string();
        ElementId::new(format!(
            "txt-{}-{}",
            Utc::now().timestamp_millis(),
            &suffix[..8]
        ))
    }

    /// Appends an image to `view`, overwriting its id with a fresh one.
    pub fn append_image(&mut self, view: View, mut image: ImageElement) -> ElementId {
        let id = self.next_image_id();
        image.set_id(id.clone());
        self.images.push(view, image);
        id
    }

    /// Appends a text to `view`, overwriting its id with a fresh one.
    pub fn append_text(&mut self, view: View, mut text: TextElement) -> ElementId {
        let mut id = self.next_text_id();
        while self.texts.find(view, &id).is_some() {
            id = self.next_text_id();
        }
        text.set_id(id.clone());
        self.texts.push(view, text);
        id
    }

    pub fn update_image(&mut self, view: View, id: &ElementId, patch: &ImagePatch) -> bool {
        self.images.update(view, id, patch)
    }

    pub fn update_text(&mut self, view: View, id: &ElementId, patch: &TextPatch) -> bool {
        self.texts.update(view, id, patch)
    }

    pub fn remove_image(&mut self, view: View, id: &ElementId) -> Option<ImageElement> {
        self.images.remove(view, id)
    }

    pub fn remove_text(&mut self, view: View, id: &ElementId) -> Option<TextElement> {
        self.texts.remove(view, id)
    }

    pub fn image(&self, view: View, id: &ElementId) -> Option<&ImageElement> {
        self.images.find(view, id)
    }

    pub fn image_mut(&mut self, view: View, id: &ElementId) -> Option<&mut ImageElement> {
        self.images.find_mut(view, id)
    }

    pub fn text(&self, view: View, id: &ElementId) -> Option<&TextElement> {
        self.texts.find(view, id)
    }

    /// Images of `view` in paint order.
    pub fn images(&self, view: View) -> &[ImageElement] {
        self.images.get(view)
    }

    /// Texts of `view` in paint order.
    pub fn texts(&self, view: View) -> &[TextElement] {
        self.texts.get(view)
    }

    pub fn element_count(&self, view: View) -> usize {
        self.images.len(view) + self.texts.len(view)
    }

    pub fn is_empty(&self) -> bool {
        View::ALL
            .iter()
            .all(|&view| self.images.is_empty(view) && self.texts.is_empty(view))
    }
}
