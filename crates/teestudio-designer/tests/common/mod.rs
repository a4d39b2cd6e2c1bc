#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, Rgba, RgbaImage};
use teestudio_core::ElementId;
use teestudio_designer::{DesignerState, TextMeasurer, UploadRequest};
use teestudio_settings::Config;

/// Half an em per character, independent of installed fonts.
pub struct FixedMeasurer;

impl TextMeasurer for FixedMeasurer {
    fn measure_width(&self, text: &str, _family: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.5
    }
}

pub fn state() -> DesignerState {
    DesignerState::with_measurer(Config::default(), Arc::new(FixedMeasurer))
}

pub fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

pub fn upload(state: &mut DesignerState, width: u32, height: u32) -> ElementId {
    let request = UploadRequest::new(png_bytes(width, height, [255, 0, 0, 255]), "image/png")
        .with_file_name("logo.png");
    state.upload_image(request).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
