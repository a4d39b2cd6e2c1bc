use teestudio_core::View;
use teestudio_designer::{ImagePatch, PositionPreset};

use crate::common;

#[test]
fn test_pocket_preset() {
    let mut state = common::state();
    let id = common::upload(&mut state, 400, 400);
    state.select_image(View::Front, &id);

    assert!(state.apply_preset(PositionPreset::Pocket).unwrap());
    let image = state.selected_image().unwrap();
    let area = state.active_printable_area();
    // cover = min(200/400, 220/400)
    assert!(common::approx(image.size, 50.0 / 3.0));
    assert_eq!((image.x, image.y), (area.left + 150.0, area.top + 55.0));
}

#[test]
fn test_full_front_preset() {
    let mut state = common::state();
    let id = common::upload(&mut state, 100, 50);
    state.select_image(View::Front, &id);

    assert!(state.apply_preset(PositionPreset::FullFront).unwrap());
    let image = state.selected_image().unwrap();
    assert_eq!(image.size, 200.0);
    assert_eq!((image.x, image.y), (250.0, 230.0));
}

#[test]
fn test_center_preset_keeps_size() {
    let mut state = common::state();
    let id = common::upload(&mut state, 100, 50);
    state.select_image(View::Front, &id);
    state.update_image(&id, &ImagePatch { size: Some(42.0), x: Some(0.0), y: Some(0.0), rotation: None });

    assert!(state.apply_preset(PositionPreset::Center).unwrap());
    let image = state.selected_image().unwrap();
    assert_eq!(image.size, 42.0);
    assert_eq!((image.x, image.y), (250.0, 230.0));
}

#[test]
fn test_preset_without_selected_image_is_noop() {
    let mut state = common::state();
    common::upload(&mut state, 100, 50);
    let style = state.default_text_style();
    state.add_text("text only", style);
    assert!(!state.apply_preset(PositionPreset::Pocket).unwrap());
}

#[test]
fn test_preset_on_back_uses_back_area() {
    let mut state = common::state();
    state.set_active_view(View::Back);
    let id = common::upload(&mut state, 400, 400);
    state.select_image(View::Back, &id);
    assert!(state.apply_preset(PositionPreset::FullFront).unwrap());
    assert_eq!(state.store().image(View::Back, &id).unwrap().size, 50.0);
    assert!(state.store().images(View::Front).is_empty());
}
