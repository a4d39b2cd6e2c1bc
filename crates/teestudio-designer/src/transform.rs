//! Transform engine.
//!
//! Interactive manipulation runs on a [`NodeTransform`] held by a
//! [`Manipulation`], outside of the element store. Nothing is written back
//! until the gesture ends, when one of the commit functions turns the final
//! node state into a patch.

use teestudio_core::{ElementKind, ElementRef, View};
use teestudio_settings::Range;

use crate::model::{ImagePatch, TextPatch};

/// Live state of the node being manipulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl NodeTransform {
    /// Node at `(x, y)` with identity scale.
    pub fn at(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation,
        }
    }

    pub fn reset_scale(&mut self) {
        self.scale_x = 1.0;
        self.scale_y = 1.0;
    }

    pub fn is_scaled(&self) -> bool {
        self.scale_x != 1.0 || self.scale_y != 1.0
    }
}

/// Bounding box reported by the handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleBox {
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// Manipulation-handle layer.
///
/// Handles are attached to at most one element at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformHandles {
    attached: Option<ElementRef>,
    min_image_box: f64,
    min_text_box: f64,
}

impl TransformHandles {
    pub fn new(min_image_box: f64, min_text_box: f64) -> Self {
        Self {
            attached: None,
            min_image_box,
            min_text_box,
        }
    }

    /// Attaches to `target`, returning the element the handles left.
    pub fn attach(&mut self, target: ElementRef) -> Option<ElementRef> {
        self.attached.replace(target)
    }

    pub fn detach(&mut self) -> Option<ElementRef> {
        self.attached.take()
    }

    pub fn attached(&self) -> Option<&ElementRef> {
        self.attached.as_ref()
    }

    pub fn is_attached_to(&self, target: &ElementRef) -> bool {
        self.attached.as_ref() == Some(target)
    }

    pub fn min_box_for(&self, kind: ElementKind) -> f64 {
        match kind {
            ElementKind::Image => self.min_image_box,
            ElementKind::Text => self.min_text_box,
        }
    }

    /// Keeps `old` when `new` is smaller than the minimum box for `kind`.
    pub fn bound_box(&self, kind: ElementKind, old: HandleBox, new: HandleBox) -> HandleBox {
        let min = self.min_box_for(kind);
        if new.width < min || new.height < min {
            old
        } else {
            new
        }
    }
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
    /// Nothing moved.
    None,
    /// Position changed only.
    Drag(NodeTransform),
    /// Handles were used: scale and/or rotation, plus final position.
    Transform(NodeTransform),
}

/// A gesture in progress on one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Manipulation {
    target: ElementRef,
    view: View,
    base_width: f64,
    base_height: f64,
    node: NodeTransform,
    min_box: f64,
    has_handles: bool,
    moved: bool,
    transformed: bool,
}

impl Manipulation {
    /// Starts a gesture from the element's committed placement.
    ///
    /// `footprint` is the rendered size at identity scale. Resize and rotate
    /// are only honored when `handles` carries the target.
    pub fn begin(
        target: ElementRef,
        view: View,
        footprint: (f64, f64),
        node: NodeTransform,
        handles: &TransformHandles,
    ) -> Self {
        let min_box = handles.min_box_for(target.kind);
        let has_handles = handles.is_attached_to(&target);
        Self {
            target,
            view,
            base_width: footprint.0,
            base_height: footprint.1,
            node,
            min_box,
            has_handles,
            moved: false,
            transformed: false,
        }
    }

    pub fn target(&self) -> &ElementRef {
        &self.target
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn node(&self) -> &NodeTransform {
        &self.node
    }

    pub fn has_handles(&self) -> bool {
        self.has_handles
    }

    /// Box currently shown by the handles.
    pub fn current_box(&self) -> HandleBox {
        HandleBox {
            width: self.base_width * self.node.scale_x.abs(),
            height: self.base_height * self.node.scale_y.abs(),
            rotation: self.node.rotation,
        }
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        self.node.x = x;
        self.node.y = y;
        self.moved = true;
    }

    /// Sets the handle scale; rejected when the box would fall under the
    /// minimum size, in which case the previous box stays.
    ///
    /// Text handles only expose the middle-left and middle-right anchors, so
    /// text keeps `scale_y` at 1.
    pub fn resize_to(&mut self, scale_x: f64, scale_y: f64) -> bool {
        if !self.has_handles {
            return false;
        }
        let scale_y = match self.target.kind {
            ElementKind::Image => scale_y,
            ElementKind::Text => 1.0,
        };
        let candidate = HandleBox {
            width: self.base_width * scale_x.abs(),
            height: self.base_height * scale_y.abs(),
            rotation: self.node.rotation,
        };
        if candidate.width < self.min_box || candidate.height < self.min_box {
            return false;
        }
        self.node.scale_x = scale_x;
        self.node.scale_y = scale_y;
        self.transformed = true;
        true
    }

    pub fn rotate_to(&mut self, rotation: f64) -> bool {
        if !self.has_handles {
            return false;
        }
        self.node.rotation = rotation;
        self.transformed = true;
        true
    }

    /// Ends the gesture.
    pub fn finish(self) -> GestureEnd {
        if self.transformed {
            GestureEnd::Transform(self.node)
        } else if self.moved {
            GestureEnd::Drag(self.node)
        } else {
            GestureEnd::None
        }
    }
}

/// Drag release on an image: final center only.
pub fn commit_image_drag(node: &NodeTransform) -> ImagePatch {
    ImagePatch::position(node.x, node.y)
}

/// Drag release on a text: final center only.
pub fn commit_text_drag(node: &NodeTransform) -> TextPatch {
    TextPatch::position(node.x, node.y)
}

/// Transform release on an image.
///
/// Non-uniform stretch collapses to the smaller axis factor. The node scale
/// is reset so the committed size is the only scale left.
pub fn commit_image_transform(size: f64, node: &mut NodeTransform) -> ImagePatch {
    let ratio = node.scale_x.min(node.scale_y);
    node.reset_scale();
    ImagePatch {
        size: Some(size * ratio),
        rotation: Some(node.rotation),
        x: Some(node.x),
        y: Some(node.y),
    }
}

/// Transform release on a text: horizontal scale becomes font size.
pub fn commit_text_transform(font_size: f64, node: &mut NodeTransform) -> TextPatch {
    let font_size = font_size * node.scale_x;
    node.reset_scale();
    TextPatch {
        font_size: Some(font_size),
        rotation: Some(node.rotation),
        x: Some(node.x),
        y: Some(node.y),
        ..Default::default()
    }
}

/// Discrete text rotation.
pub fn rotate_text(degrees: f64) -> TextPatch {
    TextPatch::rotation(degrees)
}

/// Side-panel edit, committed immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEdit {
    ImageSize(f64),
    ImageRotation(f64),
    FontSize(f64),
    TextRotation(f64),
}

impl SliderEdit {
    /// Same edit with its value clamped to the control range.
    pub fn clamped(self, size: &Range, rotation: &Range, font_size: &Range) -> Self {
        match self {
            SliderEdit::ImageSize(v) => SliderEdit::ImageSize(size.clamp(v)),
            SliderEdit::ImageRotation(v) => SliderEdit::ImageRotation(rotation.clamp(v)),
            SliderEdit::FontSize(v) => SliderEdit::FontSize(font_size.clamp(v)),
            SliderEdit::TextRotation(v) => SliderEdit::TextRotation(rotation.clamp(v)),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            SliderEdit::ImageSize(_) | SliderEdit::ImageRotation(_) => ElementKind::Image,
            SliderEdit::FontSize(_) | SliderEdit::TextRotation(_) => ElementKind::Text,
        }
    }
}
