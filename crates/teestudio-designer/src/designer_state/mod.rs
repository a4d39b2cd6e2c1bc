//! Designer state for one editing session.
//! Owns the element store, the selection, the transform handles and the
//! active view, and routes every user-facing operation through them.

mod elements;
mod manipulation;
mod placement;

use std::fmt;
use std::sync::Arc;

use teestudio_core::{ElementKind, View};
use teestudio_settings::Config;

use crate::element_store::ElementStore;
use crate::font_manager::{SystemFontMeasurer, TextMeasurer};
use crate::model::TextElement;
use crate::printable_area::{CanvasGeometry, PrintableArea};
use crate::renderer::{HandleFrame, RenderScene, SceneText};
use crate::selection_manager::SelectionManager;
use crate::transform::TransformHandles;

/// Designer state for one editing session.
#[derive(Clone)]
pub struct DesignerState {
    store: ElementStore,
    selection: SelectionManager,
    handles: TransformHandles,
    active_view: View,
    container_width: f64,
    config: Config,
    measurer: Arc<dyn TextMeasurer>,
}

impl DesignerState {
    /// Creates a session measuring text with system fonts.
    pub fn new(config: Config) -> Self {
        Self::with_measurer(config, Arc::new(SystemFontMeasurer))
    }

    pub fn with_measurer(config: Config, measurer: Arc<dyn TextMeasurer>) -> Self {
        let handles = TransformHandles::new(config.editor.min_image_box, config.editor.min_text_box);
        Self {
            store: ElementStore::new(),
            selection: SelectionManager::new(),
            handles,
            active_view: View::Front,
            container_width: config.canvas.base_width,
            config,
            measurer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn handles(&self) -> &TransformHandles {
        &self.handles
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Changes which collection is shown and edited. Elements stay put.
    pub fn set_active_view(&mut self, view: View) {
        if self.active_view != view {
            tracing::debug!(from = %self.active_view, to = %view, "Switching view");
            self.active_view = view;
        }
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Updates the container width; the printable area follows on next read.
    pub fn set_container_width(&mut self, width: f64) {
        tracing::debug!(width, "Container resized");
        self.container_width = width;
    }

    pub fn geometry(&self) -> CanvasGeometry {
        CanvasGeometry::for_container(
            self.container_width,
            &self.config.canvas,
            &self.config.printable_area,
        )
    }

    pub fn printable_area(&self, view: View) -> PrintableArea {
        self.geometry().printable_area(view)
    }

    pub fn active_printable_area(&self) -> PrintableArea {
        self.printable_area(self.active_view)
    }

    /// Advance width of `text` in its own font and size.
    pub fn measure_text(&self, text: &TextElement) -> f64 {
        self.measurer
            .measure_width(&text.text, &text.font, text.font_size)
    }

    /// Unrotated `(width, height)` box of a text; the font size stands in
    /// for the line height.
    pub fn text_footprint(&self, text: &TextElement) -> (f64, f64) {
        (self.measure_text(text), text.font_size)
    }

    /// Snapshot of `view` for the renderer.
    pub fn scene(&self, view: View) -> RenderScene<'_> {
        let geometry = self.geometry();
        let area = geometry.printable_area(view);
        let place = |text: &TextElement| {
            let (x, y) = text.position_or(&area);
            (x, y, self.measure_text(text))
        };
        let texts: Vec<SceneText<'_>> = self
            .store
            .texts(view)
            .iter()
            .map(|text| {
                let (x, y, width) = place(text);
                SceneText { text, x, y, width }
            })
            .collect();
        let ghost = self
            .selection
            .selected_text()
            .and_then(|id| texts.iter().find(|t| &t.text.id == id))
            .copied();
        let handles = self.handles.attached().and_then(|target| match target.kind {
            ElementKind::Image => self.store.image(view, &target.id).map(|img| {
                let (width, height) = img.footprint();
                HandleFrame {
                    kind: ElementKind::Image,
                    x: img.x,
                    y: img.y,
                    width,
                    height,
                    rotation: img.rotation,
                }
            }),
            ElementKind::Text => texts.iter().find(|t| t.text.id == target.id).map(|t| HandleFrame {
                kind: ElementKind::Text,
                x: t.x,
                y: t.y,
                width: t.width,
                height: t.text.font_size,
                rotation: t.text.rotation,
            }),
        });

        RenderScene {
            view,
            canvas_width: geometry.width,
            canvas_height: geometry.height,
            area,
            images: self.store.images(view),
            texts,
            ghost,
            ghost_opacity: self.config.editor.ghost_opacity,
            handles,
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignerState")
            .field("store", &self.store)
            .field("selection", &self.selection)
            .field("handles", &self.handles)
            .field("active_view", &self.active_view)
            .field("container_width", &self.container_width)
            .finish_non_exhaustive()
    }
}
