//! Error handling for TeeStudio
//!
//! Provides error types for all layers of the editor core:
//! - Validation errors (upload intake, rejected before the model sees them)
//! - Placement errors (geometry that cannot be resolved)
//! - Render errors (surface allocation, sampling, encoding)
//! - Service errors (background removal, raster upload, order context)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Missing-reference operations (update/delete of an absent id) are not
//! errors anywhere in the model; they are silent no-ops.

use thiserror::Error;

/// Validation error type
///
/// Raised by the upload intake before an element is created.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// File exceeds the configured size limit
    #[error("File size {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge {
        /// Size of the rejected file in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// MIME type is not an image type
    #[error("Only image files are allowed, got '{mime}'")]
    NotAnImage {
        /// The rejected MIME type.
        mime: String,
    },

    /// Bytes could not be decoded as an image
    #[error("Could not decode image: {reason}")]
    Undecodable {
        /// Decoder error message.
        reason: String,
    },

    /// Decoded image has no pixels
    #[error("Image has degenerate dimensions {width}x{height}")]
    EmptyImage {
        /// Decoded width.
        width: u32,
        /// Decoded height.
        height: u32,
    },
}

/// Placement error type
///
/// Represents geometry that cannot be computed for an element.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// Natural dimensions or printable area are zero or negative
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// What made the geometry degenerate.
        reason: String,
    },
}

/// Render error type
///
/// Represents failures of the render/export bridge.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Surface could not be allocated for the requested size
    #[error("Cannot allocate a {width}x{height} surface")]
    SurfaceAllocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Surface was sampled before the requested view was painted
    #[error("Surface is stale: painted {painted}, expected {expected}")]
    StaleSurface {
        /// The view currently painted (or "nothing").
        painted: String,
        /// The view that was expected.
        expected: String,
    },

    /// Printable area has no extent, so there is nothing to export
    #[error("Printable area of the {view} view is empty")]
    EmptyArea {
        /// The view being exported.
        view: String,
    },

    /// PNG encoding failed
    #[error("Encoding failed: {reason}")]
    Encoding {
        /// Encoder error message.
        reason: String,
    },
}

/// Service error type
///
/// Represents failures of the external collaborators. These are terminal
/// for the user action that triggered them; there is no retry policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Transport failed before a response arrived
    #[error("Request to {service} failed: {reason}")]
    Transport {
        /// Service name.
        service: String,
        /// Transport error message.
        reason: String,
    },

    /// The service answered with an error payload
    #[error("{service} rejected the request: {message}")]
    Rejected {
        /// Service name.
        service: String,
        /// Message taken verbatim from the error payload.
        message: String,
    },

    /// The response could not be interpreted
    #[error("Unexpected response from {service}: {reason}")]
    InvalidResponse {
        /// Service name.
        service: String,
        /// What was wrong with the response.
        reason: String,
    },

    /// A required credential is not configured
    #[error("Missing credential for {service}")]
    MissingCredential {
        /// Service name.
        service: String,
    },
}

/// Main error type for TeeStudio
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Placement error
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Service error
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a placement error
    pub fn is_placement_error(&self) -> bool {
        matches!(self, Error::Placement(_))
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }

    /// Check if this is a service error
    pub fn is_service_error(&self) -> bool {
        matches!(self, Error::Service(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
