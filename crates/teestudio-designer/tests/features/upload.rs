use teestudio_core::{Error, ValidationError, View};
use teestudio_designer::UploadRequest;

use crate::common;

#[test]
fn test_upload_fits_large_image_into_area() {
    let mut state = common::state();
    let id = common::upload(&mut state, 400, 400);
    let image = state.store().image(View::Front, &id).unwrap();
    assert_eq!(image.size, 50.0);
    assert_eq!((image.x, image.y), (250.0, 230.0));
    assert_eq!(image.footprint(), (200.0, 200.0));
    assert!(image.url.starts_with("data:image/png;base64,"));
    assert!(image.id.as_str().starts_with("img-"));
}

#[test]
fn test_small_image_keeps_natural_size() {
    let mut state = common::state();
    let id = common::upload(&mut state, 20, 30);
    assert_eq!(state.store().image(View::Front, &id).unwrap().size, 100.0);
}

#[test]
fn test_non_image_is_rejected_before_the_store() {
    let mut state = common::state();
    let request = UploadRequest::new(b"%PDF-1.4".to_vec(), "application/pdf");
    let err = state.upload_image(request).unwrap_err();
    assert!(err.is_validation_error());
    assert!(state.store().is_empty());
}

#[test]
fn test_oversized_file_is_rejected() {
    let mut state = common::state();
    let limit = state.config().upload.max_file_size;
    let request = UploadRequest::new(vec![0u8; limit + 1], "image/png");
    match state.upload_image(request) {
        Err(Error::Validation(ValidationError::FileTooLarge { size, .. })) => {
            assert_eq!(size, limit + 1)
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(state.store().is_empty());
}

#[test]
fn test_undecodable_image_is_rejected() {
    let mut state = common::state();
    let request = UploadRequest::new(vec![1, 2, 3, 4], "image/png");
    assert!(matches!(
        state.upload_image(request),
        Err(Error::Validation(ValidationError::Undecodable { .. }))
    ));
}
