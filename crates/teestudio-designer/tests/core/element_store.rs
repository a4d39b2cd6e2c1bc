use teestudio_core::{ElementId, View};
use teestudio_designer::{ElementStore, NaturalSize, TextElement, TextPatch};

use crate::common;

fn text(content: &str) -> TextElement {
    TextElement {
        id: ElementId::new(""),
        text: content.to_string(),
        font_size: 24.0,
        color: "#000000".to_string(),
        font: "Arial".to_string(),
        x: None,
        y: None,
        rotation: 0.0,
    }
}

#[test]
fn test_front_upload_never_reaches_back() {
    let mut state = common::state();
    let front = common::upload(&mut state, 50, 50);

    assert_eq!(state.store().images(View::Front).len(), 1);
    assert!(state.store().images(View::Back).is_empty());
    assert!(state.store().image(View::Back, &front).is_none());

    state.set_active_view(View::Back);
    common::upload(&mut state, 50, 50);
    assert_eq!(state.store().images(View::Front).len(), 1);
    assert_eq!(state.store().images(View::Back).len(), 1);
}

#[test]
fn test_append_preserves_paint_order() {
    let mut store = ElementStore::new();
    let a = store.append_text(View::Front, text("a"));
    let b = store.append_text(View::Front, text("b"));
    let order: Vec<_> = store.texts(View::Front).iter().map(|t| t.id.clone()).collect();
    assert_eq!(order, vec![a, b]);
    assert!(order[0].as_str().starts_with("txt-"));
}

#[test]
fn test_update_merges_shallowly() {
    let mut store = ElementStore::new();
    let id = store.append_text(View::Back, text("hello"));
    let patch = TextPatch {
        color: Some("#ff0000".to_string()),
        ..Default::default()
    };
    assert!(store.update_text(View::Back, &id, &patch));

    let updated = store.text(View::Back, &id).unwrap();
    assert_eq!(updated.color, "#ff0000");
    assert_eq!(updated.text, "hello");
    assert_eq!(updated.font_size, 24.0);
}

#[test]
fn test_update_on_wrong_view_is_noop() {
    let mut store = ElementStore::new();
    let id = store.append_text(View::Front, text("hello"));
    assert!(!store.update_text(View::Back, &id, &TextPatch::font_size(40.0)));
    assert_eq!(store.text(View::Front, &id).unwrap().font_size, 24.0);
    assert_eq!(store.element_count(View::Front), 1);
}

#[test]
fn test_replace_source_keeps_id_and_placement() {
    let mut state = common::state();
    let id = common::upload(&mut state, 40, 40);
    let before = state.store().image(View::Front, &id).unwrap().clone();

    let source = teestudio_designer::decode_image(common::png_bytes(80, 20, [0, 0, 255, 255]), "image/png").unwrap();
    assert!(state.replace_image_source(View::Front, &id, source));

    let after = state.store().image(View::Front, &id).unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!((after.x, after.y, after.size), (before.x, before.y, before.size));
    assert_eq!(after.natural, NaturalSize::new(80.0, 20.0));
    assert_ne!(after.url, before.url);
}
