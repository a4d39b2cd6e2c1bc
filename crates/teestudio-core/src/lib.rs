//! # TeeStudio Core
//!
//! Core types and the error hierarchy shared by every TeeStudio crate.
//! Provides the view and element identifiers the placement model is keyed by,
//! and the layered error types returned from the public APIs.

pub mod error;
pub mod types;

pub use error::{Error, PlacementError, RenderError, Result, ServiceError, ValidationError};

pub use types::{ElementId, ElementKind, ElementRef, View};
