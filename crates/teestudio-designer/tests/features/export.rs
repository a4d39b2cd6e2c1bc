use image::GenericImageView;
use teestudio_core::View;
use teestudio_designer::{render_view, RenderBridge, RenderOptions};
use teestudio_settings::ExportSettings;

use crate::common;

fn bridge() -> RenderBridge {
    RenderBridge::new(ExportSettings {
        view_switch_delay_ms: 0,
        redraw_delay_ms: 0,
        ..Default::default()
    })
}

#[tokio::test]
async fn test_export_crops_area_at_double_density() {
    let mut state = common::state();
    common::upload(&mut state, 100, 100);
    let mut bridge = bridge();

    let artifact = bridge.export_view(&mut state, View::Front).await.unwrap();
    assert_eq!(artifact.file_name, "tshirt-front.png");
    assert_eq!((artifact.width, artifact.height), (400, 440));

    let decoded = image::load_from_memory(&artifact.png).unwrap();
    assert_eq!(decoded.dimensions(), (400, 440));
    // 100px image centered in the area, painted at 2x.
    assert_eq!(decoded.get_pixel(200, 220).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(2, 2).0[3], 0);
}

#[tokio::test]
async fn test_export_clears_selection_and_restores_view() {
    let mut state = common::state();
    state.set_active_view(View::Back);
    let back = common::upload(&mut state, 60, 60);
    state.set_active_view(View::Front);
    let front = common::upload(&mut state, 60, 60);
    state.select_image(View::Front, &front);

    let mut bridge = bridge();
    let artifact = bridge.export_view(&mut state, View::Back).await.unwrap();

    assert_eq!(artifact.view, View::Back);
    assert_eq!(artifact.file_name, "tshirt-back.png");
    assert_eq!(state.active_view(), View::Front);
    assert!(state.selection().is_empty());
    assert!(state.handles().attached().is_none());
    assert_eq!(bridge.painted_view(), Some(View::Back));
    assert!(state.store().image(View::Back, &back).is_some());
}

#[tokio::test]
async fn test_export_has_no_handle_artifacts() {
    let mut plain = common::state();
    common::upload(&mut plain, 60, 60);
    let mut selected = common::state();
    let id = common::upload(&mut selected, 60, 60);
    selected.select_image(View::Front, &id);

    let mut bridge = bridge();
    let expected = bridge.export_view(&mut plain, View::Front).await.unwrap();
    let actual = bridge.export_view(&mut selected, View::Front).await.unwrap();
    assert_eq!(expected.png, actual.png);
}

#[test]
fn test_interactive_render_shows_handles() {
    let mut state = common::state();
    let id = common::upload(&mut state, 60, 60);

    let before = render_view(&state, View::Front, &RenderOptions::default()).unwrap();
    state.select_image(View::Front, &id);
    let after = render_view(&state, View::Front, &RenderOptions::default()).unwrap();
    assert_ne!(before.data(), after.data());

    let export = RenderOptions {
        pixel_ratio: 1.0,
        exporting: true,
    };
    let a = render_view(&state, View::Front, &export).unwrap();
    state.deselect_all();
    let b = render_view(&state, View::Front, &export).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_render_outside_area_is_clipped() {
    let mut state = common::state();
    let id = common::upload(&mut state, 60, 60);
    state.update_image(&id, &teestudio_designer::ImagePatch::position(10.0, 10.0));

    let options = RenderOptions {
        pixel_ratio: 1.0,
        exporting: true,
    };
    let pixmap = render_view(&state, View::Front, &options).unwrap();
    assert_eq!(pixmap.pixel(10, 10).unwrap().alpha(), 0);
}

fn red_text(state: &mut teestudio_designer::DesignerState) -> teestudio_core::ElementId {
    let style = teestudio_designer::TextStyle {
        font_size: 48.0,
        color: "#ff0000".to_string(),
        font: "Arial".to_string(),
    };
    state.add_text("HELLO", style).unwrap()
}

#[tokio::test]
async fn test_export_paints_text() {
    let mut state = common::state();
    red_text(&mut state);
    let mut bridge = bridge();

    let artifact = bridge.export_view(&mut state, View::Front).await.unwrap();
    let decoded = image::load_from_memory(&artifact.png).unwrap().to_rgba8();
    let painted = decoded
        .pixels()
        .filter(|p| p.0[3] == 255 && p.0[0] > 200 && p.0[1] < 50)
        .count();
    assert!(painted > 0, "no text pixels in export");
}

#[test]
fn test_text_is_clipped_to_area() {
    let mut state = common::state();
    let id = red_text(&mut state);
    // Centered on the right edge, so half the run falls outside.
    let area = state.active_printable_area();
    state.update_text(
        &id,
        &teestudio_designer::TextPatch::position(area.right(), area.center().1),
    );

    let options = RenderOptions {
        pixel_ratio: 1.0,
        exporting: true,
    };
    let pixmap = render_view(&state, View::Front, &options).unwrap();

    let (mut inside, mut outside) = (0, 0);
    for y in 0..pixmap.height() {
        for x in 0..pixmap.width() {
            if pixmap.pixel(x, y).unwrap().alpha() == 0 {
                continue;
            }
            let (fx, fy) = (x as f64, y as f64);
            if fx >= area.left && fx < area.right() && fy >= area.top && fy < area.bottom() {
                inside += 1;
            } else {
                outside += 1;
            }
        }
    }
    assert!(inside > 0);
    assert_eq!(outside, 0);
}

#[tokio::test]
async fn test_export_of_empty_area_fails() {
    let mut state = common::state();
    common::upload(&mut state, 60, 60);
    state.set_container_width(0.0);

    let err = bridge().export_view(&mut state, View::Front).await.unwrap_err();
    assert_eq!(
        err,
        teestudio_core::RenderError::EmptyArea {
            view: "front".to_string()
        }
    );
    assert_eq!(state.active_view(), View::Front);
}
