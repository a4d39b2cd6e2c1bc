use teestudio_core::View;
use teestudio_designer::{DesignerState, ImagePatch, TextPatch, TextStyle};

use crate::common;

#[test]
fn test_designer_state_new() {
    let state = DesignerState::default();
    assert_eq!(state.active_view(), View::Front);
    assert!(state.store().is_empty());
    assert!(state.selection().is_empty());
    assert_eq!(state.container_width(), 500.0);
}

#[test]
fn test_view_switch_does_not_move_elements() {
    let mut state = common::state();
    common::upload(&mut state, 50, 50);
    state.set_active_view(View::Back);
    assert_eq!(state.store().element_count(View::Front), 1);
    assert_eq!(state.store().element_count(View::Back), 0);
    state.set_active_view(View::Front);
    assert_eq!(state.store().element_count(View::Front), 1);
}

#[test]
fn test_update_targets_active_view() {
    let mut state = common::state();
    let id = common::upload(&mut state, 50, 50);
    state.set_active_view(View::Back);
    assert!(!state.update_image(&id, &ImagePatch::size(10.0)));

    state.set_active_view(View::Front);
    assert!(state.update_image(&id, &ImagePatch::size(10.0)));
    assert_eq!(state.selected_image(), None);
}

#[test]
fn test_update_selected_text() {
    let mut state = common::state();
    assert!(!state.update_selected_text(&TextPatch::font_size(30.0)));

    let id = state
        .add_text(
            "Sale",
            TextStyle {
                font_size: 18.0,
                color: "#ff0000".to_string(),
                font: "Georgia".to_string(),
            },
        )
        .unwrap();
    let patch = TextPatch {
        text: Some("Sold".to_string()),
        ..Default::default()
    };
    assert!(state.update_selected_text(&patch));
    let text = state.store().text(View::Front, &id).unwrap();
    assert_eq!(text.text, "Sold");
    assert_eq!(text.font, "Georgia");
    assert!(state.update_text(&id, &TextPatch::position(1.0, 2.0)));
}

#[test]
fn test_scene_hides_nothing_but_reports_handles() {
    let mut state = common::state();
    let id = common::upload(&mut state, 100, 50);
    state.select_image(View::Front, &id);
    let style = state.default_text_style();
    state.add_text("Hello", style);

    let scene = state.scene(View::Front);
    assert_eq!(scene.images.len(), 1);
    assert_eq!(scene.texts.len(), 1);
    assert_eq!(scene.texts[0].width, 60.0);
    assert!(scene.ghost.is_some());
    let frame = scene.handles.unwrap();
    assert_eq!((frame.width, frame.height), (60.0, 24.0));

    state.deselect_all();
    let scene = state.scene(View::Front);
    assert!(scene.ghost.is_none());
    assert!(scene.handles.is_none());
}
