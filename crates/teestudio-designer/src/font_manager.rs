//! Font lookup and text metrics.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{point, Font, Scale};
use std::{
    collections::{HashMap, HashSet},
    fs,
    sync::{Mutex, OnceLock},
};

/// Font-metrics query used by text alignment and handle sizing.
pub trait TextMeasurer: Send + Sync {
    /// Advance width of `text` set in `family` at `font_size` pixels.
    fn measure_width(&self, text: &str, family: &str, font_size: f64) -> f64;
}

/// Measures with installed fonts, or the bundled face when a family is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFontMeasurer;

impl TextMeasurer for SystemFontMeasurer {
    fn measure_width(&self, text: &str, family: &str, font_size: f64) -> f64 {
        advance_width(get_font_for(family), text, font_size)
    }
}

/// Advance width of a laid-out single line.
pub fn advance_width(font: &Font<'_>, text: &str, font_size: f64) -> f64 {
    let scale = Scale::uniform(font_size as f32);
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .map_or(0.0, f64::from)
}

/// Bundled face used when a family is not installed.
pub fn default_font() -> &'static Font<'static> {
    static FONT: OnceLock<Font<'static>> = OnceLock::new();
    FONT.get_or_init(|| {
        let font_data = include_bytes!("../../../assets/fonts/dejavu/DejaVuSans.ttf");
        Font::try_from_bytes(font_data as &[u8])
            .unwrap_or_else(|| panic!("bundled DejaVu Sans font is invalid"))
    })
}

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "Loaded system fonts");
        db
    })
}

pub fn list_font_families() -> Vec<String> {
    let mut set = HashSet::new();
    for face in db().faces() {
        for (name, _) in &face.families {
            set.insert(name.clone());
        }
    }
    let mut out: Vec<_> = set.into_iter().collect();
    out.sort();
    out
}

/// Font for `family`, falling back to the bundled face.
///
/// Lookups are cached for the life of the process.
pub fn get_font_for(family: &str) -> &'static Font<'static> {
    static CACHE: OnceLock<Mutex<HashMap<String, &'static Font<'static>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(family) {
        return font;
    }

    let font_ref: &'static Font<'static> = match load_font_from_system(family) {
        Some(font) => Box::leak(Box::new(font)),
        None => {
            tracing::debug!(family, "Font not installed, using bundled default");
            default_font()
        }
    };

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(family.to_string(), font_ref);
    font_ref
}

fn load_font_from_system(family: &str) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" => return None,
        "Serif" => vec![Family::Serif],
        "Monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other)],
    };

    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}
