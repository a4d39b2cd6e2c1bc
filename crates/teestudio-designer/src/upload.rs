//! Upload intake.
//!
//! Files are validated and decoded before an element exists, so the model
//! never holds an image it cannot place.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use teestudio_core::ValidationError;
use teestudio_settings::UploadSettings;

use crate::model::{ImageSource, NaturalSize};
use crate::printable_area::PrintableArea;

/// Raw file handed over by the upload source.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub file_name: Option<String>,
}

impl UploadRequest {
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Rejects oversized files and non-image MIME types.
pub fn validate_upload(request: &UploadRequest, settings: &UploadSettings) -> Result<(), ValidationError> {
    if request.bytes.len() > settings.max_file_size {
        return Err(ValidationError::FileTooLarge {
            size: request.bytes.len(),
            limit: settings.max_file_size,
        });
    }
    if !request.mime.starts_with(&settings.accepted_mime_prefix) {
        return Err(ValidationError::NotAnImage {
            mime: request.mime.clone(),
        });
    }
    Ok(())
}

/// `data:` URL for the given bytes.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Decodes `bytes` to find the natural size and builds a displayable source.
pub fn decode_image(bytes: Vec<u8>, mime: &str) -> Result<ImageSource, ValidationError> {
    let decoded = image::load_from_memory(&bytes).map_err(|e| ValidationError::Undecodable {
        reason: e.to_string(),
    })?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(ValidationError::EmptyImage { width, height });
    }
    Ok(ImageSource {
        url: data_url(mime, &bytes),
        natural: NaturalSize::new(f64::from(width), f64::from(height)),
        bytes,
        mime: mime.to_string(),
    })
}

/// Initial `(size, x, y)` of a fresh upload.
///
/// Images larger than the area shrink to fit; smaller ones keep their
/// natural size. The image is centered in the area.
pub fn initial_placement(area: &PrintableArea, natural: &NaturalSize) -> (f64, f64, f64) {
    let fit = (area.width / natural.width).min(area.height / natural.height);
    let size = if fit < 1.0 { fit * 100.0 } else { 100.0 };
    let (x, y) = area.center();
    (size, x, y)
}
