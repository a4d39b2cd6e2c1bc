use teestudio_core::{ElementRef, View};

use crate::common;

#[test]
fn test_selecting_text_clears_image() {
    let mut state = common::state();
    let image = common::upload(&mut state, 50, 50);
    let style = state.default_text_style();
    let text = state.add_text("Hello", style).unwrap();

    assert!(state.select_image(View::Front, &image));
    assert_eq!(state.selection().selected_text(), None);

    assert!(state.select_text(View::Front, &text));
    assert_eq!(state.selection().selected_image(), None);
    assert_eq!(state.selection().selected_text(), Some(&text));
}

#[test]
fn test_same_kind_selection_replaces() {
    let mut state = common::state();
    let style = state.default_text_style();
    let first = state.add_text("one", style.clone()).unwrap();
    let second = state.add_text("two", style).unwrap();

    state.select_text(View::Front, &first);
    state.select_text(View::Front, &second);
    assert_eq!(state.selection().selected_text(), Some(&second));
    assert_eq!(state.selection().selected_image(), None);
    assert!(state.handles().is_attached_to(&ElementRef::text(second)));
}

#[test]
fn test_adding_text_selects_it() {
    let mut state = common::state();
    let image = common::upload(&mut state, 50, 50);
    state.select_image(View::Front, &image);

    let style = state.default_text_style();
    let text = state.add_text("  Hi  ", style).unwrap();
    assert_eq!(state.selected_text().unwrap().text, "Hi");
    assert_eq!(state.selection().selected_text(), Some(&text));
    assert_eq!(state.selection().selected_image(), None);
}

#[test]
fn test_blank_text_is_ignored() {
    let mut state = common::state();
    let style = state.default_text_style();
    assert!(state.add_text("   ", style).is_none());
    assert!(state.store().is_empty());
}

#[test]
fn test_selecting_back_element_switches_view() {
    let mut state = common::state();
    state.set_active_view(View::Back);
    let image = common::upload(&mut state, 50, 50);
    state.set_active_view(View::Front);

    assert!(!state.select_image(View::Front, &image));
    assert!(state.select_image(View::Back, &image));
    assert_eq!(state.active_view(), View::Back);
    assert_eq!(state.selected_image().unwrap().id, image);
}

#[test]
fn test_deleting_selected_clears_selection() {
    let mut state = common::state();
    let a = common::upload(&mut state, 50, 50);
    let b = common::upload(&mut state, 50, 50);
    state.select_image(View::Front, &a);

    assert!(state.delete_image(&b));
    assert_eq!(state.selection().selected_image(), Some(&a));

    assert!(state.delete_image(&a));
    assert_eq!(state.selection().selected_image(), None);
    assert!(state.handles().attached().is_none());
}

#[test]
fn test_deleting_selected_text_clears_selection() {
    let mut state = common::state();
    let style = state.default_text_style();
    let text = state.add_text("bye", style).unwrap();
    assert!(state.delete_text(&text));
    assert!(state.selection().is_empty());
    assert!(!state.delete_text(&text));
}

#[test]
fn test_delete_is_scoped_to_active_view() {
    let mut state = common::state();
    state.set_active_view(View::Back);
    let back = common::upload(&mut state, 40, 40);
    state.set_active_view(View::Front);

    assert!(!state.delete_image(&back));
    assert!(state.store().image(View::Back, &back).is_some());

    state.set_active_view(View::Back);
    assert!(state.delete_image(&back));
    assert!(state.store().images(View::Back).is_empty());
}
