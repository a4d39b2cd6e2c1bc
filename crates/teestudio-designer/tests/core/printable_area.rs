use proptest::prelude::*;
use teestudio_core::View;
use teestudio_designer::{scaled_printable_area, CanvasGeometry, PrintableArea};
use teestudio_settings::{AreaBase, CanvasSettings, PrintableAreaSettings};

use crate::common;

#[test]
fn test_double_width_doubles_area() {
    let area = scaled_printable_area(1000.0, &AreaBase::default(), 500.0);
    assert_eq!(area, PrintableArea::new(240.0, 300.0, 400.0, 440.0));
}

#[test]
fn test_state_area_follows_container() {
    let mut state = common::state();
    assert_eq!(state.active_printable_area(), PrintableArea::new(120.0, 150.0, 200.0, 220.0));

    state.set_container_width(1000.0);
    assert_eq!(state.printable_area(View::Back).width, 400.0);
    assert_eq!(state.geometry().height, 1000.0);
}

#[test]
fn test_views_can_have_own_areas() {
    let areas = PrintableAreaSettings {
        front: AreaBase::default(),
        back: AreaBase {
            top: 100.0,
            left: 150.0,
            width: 200.0,
            height: 260.0,
        },
    };
    let geometry = CanvasGeometry::for_container(500.0, &CanvasSettings::default(), &areas);
    assert_eq!(geometry.printable_area(View::Front).height, 220.0);
    assert_eq!(geometry.printable_area(View::Back).height, 260.0);
}

proptest! {
    #[test]
    fn prop_area_scales_linearly(width in 1.0f64..5000.0) {
        let area = scaled_printable_area(width, &AreaBase::default(), 500.0);
        let scale = width / 500.0;
        prop_assert!(common::approx(area.top, 120.0 * scale));
        prop_assert!(common::approx(area.left, 150.0 * scale));
        prop_assert!(common::approx(area.width, 200.0 * scale));
        prop_assert!(common::approx(area.height, 220.0 * scale));
        prop_assert!(area.right() <= width + 1e-9);
    }
}
