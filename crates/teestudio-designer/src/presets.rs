//! Named placements for images.

use serde::{Deserialize, Serialize};
use teestudio_core::PlacementError;

use crate::model::NaturalSize;
use crate::printable_area::PrintableArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionPreset {
    /// Area center, size unchanged.
    Center,
    /// One third of the covering size, upper-right quadrant.
    Pocket,
    /// Covering size, area center.
    FullFront,
}

/// Result of a preset; `size` is `None` when the preset keeps the size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetPlacement {
    pub x: f64,
    pub y: f64,
    pub size: Option<f64>,
}

/// Largest scale at which the image still fits inside the area.
pub fn cover_ratio(area: &PrintableArea, natural: &NaturalSize) -> Result<f64, PlacementError> {
    if natural.is_degenerate() {
        return Err(PlacementError::DegenerateGeometry {
            reason: format!(
                "natural size {}x{} is not positive",
                natural.width, natural.height
            ),
        });
    }
    if area.is_degenerate() {
        return Err(PlacementError::DegenerateGeometry {
            reason: format!("printable area {}x{} is empty", area.width, area.height),
        });
    }
    Ok((area.width / natural.width).min(area.height / natural.height))
}

pub fn resolve_preset(
    preset: PositionPreset,
    area: &PrintableArea,
    natural: &NaturalSize,
) -> Result<PresetPlacement, PlacementError> {
    let (cx, cy) = area.center();
    match preset {
        PositionPreset::Center => Ok(PresetPlacement {
            x: cx,
            y: cy,
            size: None,
        }),
        PositionPreset::Pocket => {
            let cover = cover_ratio(area, natural)?;
            Ok(PresetPlacement {
                x: area.left + area.width * 0.75,
                y: area.top + area.height * 0.25,
                size: Some(cover * 100.0 / 3.0),
            })
        }
        PositionPreset::FullFront => {
            let cover = cover_ratio(area, natural)?;
            Ok(PresetPlacement {
                x: cx,
                y: cy,
                size: Some(cover * 100.0),
            })
        }
    }
}
