use teestudio_core::{ElementRef, View};
use teestudio_designer::{GestureEnd, SliderEdit};

use crate::common;

#[test]
fn test_resize_collapses_to_smaller_axis() {
    let mut state = common::state();
    let id = common::upload(&mut state, 400, 400);
    assert_eq!(state.store().image(View::Front, &id).unwrap().size, 50.0);
    state.select_image(View::Front, &id);

    let mut gesture = state.begin_manipulation(ElementRef::image(id.clone())).unwrap();
    assert!(gesture.resize_to(1.5, 2.0));
    assert!(gesture.rotate_to(30.0));
    gesture.drag_to(260.0, 240.0);
    assert!(state.end_manipulation(gesture));

    let image = state.store().image(View::Front, &id).unwrap();
    assert_eq!(image.size, 75.0);
    assert_eq!(image.rotation, 30.0);
    assert_eq!((image.x, image.y), (260.0, 240.0));
}

#[test]
fn test_nothing_is_committed_before_release() {
    let mut state = common::state();
    let id = common::upload(&mut state, 100, 100);
    let gesture_start = state.store().image(View::Front, &id).unwrap().clone();

    let mut gesture = state.begin_manipulation(ElementRef::image(id.clone())).unwrap();
    gesture.drag_to(10.0, 10.0);
    assert_eq!(state.store().image(View::Front, &id).unwrap(), &gesture_start);

    assert!(state.end_manipulation(gesture));
    let image = state.store().image(View::Front, &id).unwrap();
    assert_eq!((image.x, image.y), (10.0, 10.0));
    assert_eq!(image.size, gesture_start.size);
}

#[test]
fn test_undersized_image_box_is_rejected() {
    let mut state = common::state();
    let id = common::upload(&mut state, 400, 400);
    state.select_image(View::Front, &id);

    let mut gesture = state.begin_manipulation(ElementRef::image(id.clone())).unwrap();
    // 200px footprint: 0.05 would leave a 10px box.
    assert!(!gesture.resize_to(0.05, 0.05));
    assert_eq!(gesture.current_box().width, 200.0);
    assert!(!state.end_manipulation(gesture));
    assert_eq!(state.store().image(View::Front, &id).unwrap().size, 50.0);
}

#[test]
fn test_undersized_text_box_is_rejected() {
    let mut state = common::state();
    let style = state.default_text_style();
    let id = state.add_text("Hello", style).unwrap();

    // 60x24 box
    let mut gesture = state.begin_manipulation(ElementRef::text(id)).unwrap();
    assert!(!gesture.resize_to(0.1, 1.0));
    assert!(gesture.resize_to(0.2, 1.0));
}

#[test]
fn test_unselected_image_can_only_be_dragged() {
    let mut state = common::state();
    let id = common::upload(&mut state, 100, 100);

    let mut gesture = state.begin_manipulation(ElementRef::image(id)).unwrap();
    assert!(!gesture.has_handles());
    assert!(!gesture.resize_to(2.0, 2.0));
    assert!(!gesture.rotate_to(90.0));
    assert_eq!(gesture.finish(), GestureEnd::None);
}

#[test]
fn test_text_transform_scales_font_size() {
    let mut state = common::state();
    let style = state.default_text_style();
    let id = state.add_text("Hello", style).unwrap();

    let mut gesture = state.begin_manipulation(ElementRef::text(id.clone())).unwrap();
    assert_eq!(gesture.node().x, 250.0);
    assert!(gesture.resize_to(1.5, 4.0));
    assert!(gesture.rotate_to(15.0));
    assert!(state.end_manipulation(gesture));

    let text = state.store().text(View::Front, &id).unwrap();
    assert_eq!(text.font_size, 36.0);
    assert_eq!(text.rotation, 15.0);
    assert_eq!((text.x, text.y), (Some(250.0), Some(230.0)));
}

#[test]
fn test_text_drag_sets_position() {
    let mut state = common::state();
    let style = state.default_text_style();
    let id = state.add_text("Hello", style).unwrap();

    let mut gesture = state.begin_manipulation(ElementRef::text(id.clone())).unwrap();
    gesture.drag_to(10.0, 20.0);
    assert!(state.end_manipulation(gesture));
    let text = state.store().text(View::Front, &id).unwrap();
    assert_eq!((text.x, text.y), (Some(10.0), Some(20.0)));
    assert_eq!(text.font_size, 24.0);
}

#[test]
fn test_gesture_on_deleted_element_is_dropped() {
    let mut state = common::state();
    let id = common::upload(&mut state, 100, 100);
    let mut gesture = state.begin_manipulation(ElementRef::image(id.clone())).unwrap();
    gesture.drag_to(1.0, 1.0);
    state.delete_image(&id);
    assert!(!state.end_manipulation(gesture));
}

#[test]
fn test_sliders_clamp_and_apply_to_selection() {
    let mut state = common::state();
    let id = common::upload(&mut state, 100, 100);
    assert!(!state.apply_slider(SliderEdit::ImageSize(120.0)));

    state.select_image(View::Front, &id);
    assert!(state.apply_slider(SliderEdit::ImageSize(500.0)));
    assert!(state.apply_slider(SliderEdit::ImageRotation(-10.0)));
    let image = state.store().image(View::Front, &id).unwrap();
    assert_eq!(image.size, 200.0);
    assert_eq!(image.rotation, 0.0);

    let style = state.default_text_style();
    let text = state.add_text("Hi", style).unwrap();
    assert!(state.apply_slider(SliderEdit::FontSize(100.0)));
    assert_eq!(state.store().text(View::Front, &text).unwrap().font_size, 72.0);
}

#[test]
fn test_last_write_wins_between_slider_and_gesture() {
    let mut state = common::state();
    let id = common::upload(&mut state, 400, 400);
    state.select_image(View::Front, &id);

    let mut gesture = state.begin_manipulation(ElementRef::image(id.clone())).unwrap();
    assert!(gesture.resize_to(2.0, 2.0));
    state.apply_slider(SliderEdit::ImageSize(20.0));
    state.end_manipulation(gesture);

    // Gesture release multiplies the size current at release.
    assert_eq!(state.store().image(View::Front, &id).unwrap().size, 40.0);
}

#[test]
fn test_rotate_text() {
    let mut state = common::state();
    let style = state.default_text_style();
    let id = state.add_text("Hi", style).unwrap();
    assert!(state.rotate_text(&id, 400.0));
    assert_eq!(state.store().text(View::Front, &id).unwrap().rotation, 400.0);
}
