//! Shared value types.
//!
//! Views and element identifiers used to key the placement model. Ids are
//! view-scoped by convention only: the same id may exist in the front and the
//! back collection since each is generated independently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two independent garment sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Front of the garment
    #[default]
    Front,
    /// Back of the garment
    Back,
}

impl View {
    /// Both views, front first.
    pub const ALL: [View; 2] = [View::Front, View::Back];

    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            View::Front => View::Back,
            View::Back => View::Front,
        }
    }

    /// Lowercase name used in file names and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            View::Front => "front",
            View::Back => "back",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of element placed on a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Raster image
    Image,
    /// Text run
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Image => write!(f, "image"),
            ElementKind::Text => write!(f, "text"),
        }
    }
}

/// Opaque element identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Reference to one element of a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub kind: ElementKind,
    pub id: ElementId,
}

impl ElementRef {
    pub fn image(id: impl Into<ElementId>) -> Self {
        Self {
            kind: ElementKind::Image,
            id: id.into(),
        }
    }

    pub fn text(id: impl Into<ElementId>) -> Self {
        Self {
            kind: ElementKind::Text,
            id: id.into(),
        }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
