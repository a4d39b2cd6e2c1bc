//! View renderer and export bridge.
//! Composites one view's elements with tiny-skia and samples the printable
//! area into a PNG.
//!
//! Layer order:
//! - Images, clipped to the printable area, in insertion order
//! - Printable-area outline (interactive only)
//! - Ghost of the selected text, unclipped and translucent (interactive only)
//! - Texts, clipped to the printable area
//! - Transform-handle frame (interactive only)

use std::io::Cursor;
use std::time::Duration;

use image::{ImageFormat, RgbaImage};
use rusttype::{point as rt_point, Scale};
use teestudio_core::{ElementKind, RenderError, View};
use teestudio_settings::ExportSettings;
use tiny_skia::{
    Color, ColorU8, FillRule, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8,
    Rect, Stroke, StrokeDash, Transform,
};

use crate::designer_state::DesignerState;
use crate::font_manager;
use crate::model::{ImageElement, TextElement};
use crate::printable_area::PrintableArea;

const HANDLE_SIZE: f32 = 8.0;
const ROTATER_OFFSET: f32 = 20.0;

fn outline_color() -> Color {
    Color::from_rgba8(128, 128, 128, 255)
}
fn handle_color() -> Color {
    Color::from_rgba8(0, 161, 255, 255)
}

/// Options for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Device pixels per canvas unit.
    pub pixel_ratio: f32,
    /// Leaves out outline, ghost text and handles.
    pub exporting: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: 1.0,
            exporting: false,
        }
    }
}

/// Frame drawn around the element carrying the transform handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleFrame {
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// A placed text with its measured width.
#[derive(Debug, Clone, Copy)]
pub struct SceneText<'a> {
    pub text: &'a TextElement,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Everything needed to paint one view.
#[derive(Debug, Clone)]
pub struct RenderScene<'a> {
    pub view: View,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub area: PrintableArea,
    pub images: &'a [ImageElement],
    pub texts: Vec<SceneText<'a>>,
    pub ghost: Option<SceneText<'a>>,
    pub ghost_opacity: f32,
    pub handles: Option<HandleFrame>,
}

/// Paints `view` of `state` onto a new surface.
pub fn render_view(
    state: &DesignerState,
    view: View,
    options: &RenderOptions,
) -> Result<Pixmap, RenderError> {
    render_scene(&state.scene(view), options)
}

pub fn render_scene(scene: &RenderScene<'_>, options: &RenderOptions) -> Result<Pixmap, RenderError> {
    let ratio = options.pixel_ratio;
    let width = ((scene.canvas_width as f32) * ratio).ceil().max(1.0) as u32;
    let height = ((scene.canvas_height as f32) * ratio).ceil().max(1.0) as u32;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or(RenderError::SurfaceAllocation { width, height })?;
    let base = Transform::from_scale(ratio, ratio);

    let area_rect = Rect::from_xywh(
        scene.area.left as f32,
        scene.area.top as f32,
        scene.area.width as f32,
        scene.area.height as f32,
    );
    let clip = area_rect.and_then(|rect| {
        let mut mask = Mask::new(width, height)?;
        mask.fill_path(&PathBuilder::from_rect(rect), FillRule::Winding, true, base);
        Some(mask)
    });
    // A degenerate area clips everything away.
    let Some(clip) = clip else {
        tracing::debug!(view = %scene.view, "Printable area is empty, nothing to paint");
        return Ok(pixmap);
    };

    for image in scene.images {
        draw_image(&mut pixmap, image, base, &clip);
    }

    if !options.exporting {
        if let Some(rect) = area_rect {
            draw_area_outline(&mut pixmap, rect, base);
        }
        if let Some(ghost) = &scene.ghost {
            draw_text(&mut pixmap, ghost, base, ratio, scene.ghost_opacity, None);
        }
    }

    for text in &scene.texts {
        draw_text(&mut pixmap, text, base, ratio, 1.0, Some(&clip));
    }

    if !options.exporting {
        if let Some(frame) = &scene.handles {
            draw_handle_frame(&mut pixmap, frame, base);
        }
    }

    Ok(pixmap)
}

fn draw_image(pixmap: &mut Pixmap, image: &ImageElement, base: Transform, clip: &Mask) {
    let Some(source) = decode_to_pixmap(&image.source) else {
        tracing::warn!(id = %image.id, "Skipping image that cannot be decoded");
        return;
    };
    let scale = image.scale() as f32;
    let transform = base
        .pre_translate(image.x as f32, image.y as f32)
        .pre_rotate(image.rotation as f32)
        .pre_scale(scale, scale)
        .pre_translate(
            -(source.width() as f32) / 2.0,
            -(source.height() as f32) / 2.0,
        );
    let paint = PixmapPaint {
        quality: tiny_skia::FilterQuality::Bilinear,
        ..Default::default()
    };
    pixmap.draw_pixmap(0, 0, source.as_ref(), &paint, transform, Some(clip));
}

fn decode_to_pixmap(bytes: &[u8]) -> Option<Pixmap> {
    let rgba = image::load_from_memory(bytes).ok()?.to_rgba8();
    let mut pixmap = Pixmap::new(rgba.width(), rgba.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

fn draw_area_outline(pixmap: &mut Pixmap, rect: Rect, base: Transform) {
    let mut paint = Paint::default();
    paint.set_color(outline_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: 1.0,
        dash: StrokeDash::new(vec![5.0, 5.0], 0.0),
        ..Default::default()
    };
    pixmap.stroke_path(&PathBuilder::from_rect(rect), &paint, &stroke, base, None);
}

/// Parses `#rrggbb` or `#rgb`.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

/// Rasterizes a text run at device resolution.
fn rasterize_text(text: &TextElement, ratio: f32) -> Option<Pixmap> {
    let font = font_manager::get_font_for(&text.font);
    let scale = Scale::uniform(text.font_size as f32 * ratio);
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<_> = font
        .layout(&text.text, scale, rt_point(0.0, v_metrics.ascent))
        .collect();
    let advance = glyphs
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)?;
    let width = advance.ceil().max(1.0) as u32;
    let height = (v_metrics.ascent - v_metrics.descent).ceil().max(1.0) as u32;
    let mut pixmap = Pixmap::new(width, height)?;

    let (r, g, b) = parse_hex_color(&text.color).unwrap_or_else(|| {
        tracing::warn!(color = %text.color, "Unparseable text color, using black");
        (0, 0, 0)
    });
    let pixels = pixmap.pixels_mut();
    for glyph in &glyphs {
        let Some(bounds) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, v| {
            let px = gx as i32 + bounds.min.x;
            let py = gy as i32 + bounds.min.y;
            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                return;
            }
            let alpha = (v.clamp(0.0, 1.0) * 255.0) as u8;
            let idx = (py as u32 * width + px as u32) as usize;
            if alpha <= pixels[idx].alpha() {
                return;
            }
            let premultiply = |c: u8| (u16::from(c) * u16::from(alpha) / 255) as u8;
            if let Some(color) = PremultipliedColorU8::from_rgba(
                premultiply(r),
                premultiply(g),
                premultiply(b),
                alpha,
            ) {
                pixels[idx] = color;
            }
        });
    }
    Some(pixmap)
}

fn draw_text(
    pixmap: &mut Pixmap,
    placed: &SceneText<'_>,
    base: Transform,
    ratio: f32,
    opacity: f32,
    clip: Option<&Mask>,
) {
    let Some(raster) = rasterize_text(placed.text, ratio) else {
        tracing::debug!(id = %placed.text.id, "Text has no glyphs, nothing painted");
        return;
    };
    let transform = base
        .pre_translate(placed.x as f32, placed.y as f32)
        .pre_rotate(placed.text.rotation as f32)
        .pre_scale(1.0 / ratio, 1.0 / ratio)
        .pre_translate(
            -(raster.width() as f32) / 2.0,
            -(raster.height() as f32) / 2.0,
        );
    let paint = PixmapPaint {
        opacity,
        ..Default::default()
    };
    pixmap.draw_pixmap(0, 0, raster.as_ref(), &paint, transform, clip);
}

fn draw_handle_frame(pixmap: &mut Pixmap, frame: &HandleFrame, base: Transform) {
    let (w, h) = (frame.width as f32, frame.height as f32);
    let Some(rect) = Rect::from_xywh(-w / 2.0, -h / 2.0, w, h) else {
        return;
    };
    let transform = base
        .pre_translate(frame.x as f32, frame.y as f32)
        .pre_rotate(frame.rotation as f32);

    let mut paint = Paint::default();
    paint.set_color(handle_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };
    pixmap.stroke_path(&PathBuilder::from_rect(rect), &paint, &stroke, transform, None);

    let anchors: Vec<(f32, f32)> = match frame.kind {
        ElementKind::Image => vec![
            (-w / 2.0, -h / 2.0),
            (w / 2.0, -h / 2.0),
            (-w / 2.0, h / 2.0),
            (w / 2.0, h / 2.0),
        ],
        ElementKind::Text => vec![(-w / 2.0, 0.0), (w / 2.0, 0.0)],
    };
    let mut pb = PathBuilder::new();
    for (ax, ay) in anchors {
        if let Some(r) = Rect::from_xywh(
            ax - HANDLE_SIZE / 2.0,
            ay - HANDLE_SIZE / 2.0,
            HANDLE_SIZE,
            HANDLE_SIZE,
        ) {
            pb.push_rect(r);
        }
    }
    pb.push_circle(0.0, -h / 2.0 - ROTATER_OFFSET, HANDLE_SIZE / 2.0);
    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
    }
}

/// Copies the printable area out of a surface painted at `ratio`.
pub fn crop_to_area(pixmap: &Pixmap, area: &PrintableArea, ratio: f32) -> RgbaImage {
    let to_px = |v: f64| (v as f32 * ratio).round().max(0.0) as u32;
    let x0 = to_px(area.left).min(pixmap.width());
    let y0 = to_px(area.top).min(pixmap.height());
    let width = to_px(area.width).min(pixmap.width() - x0);
    let height = to_px(area.height).min(pixmap.height() - y0);

    RgbaImage::from_fn(width, height, |x, y| {
        let color = pixmap
            .pixel(x0 + x, y0 + y)
            .map(|p| p.demultiply())
            .unwrap_or_else(|| ColorU8::from_rgba(0, 0, 0, 0));
        image::Rgba([color.red(), color.green(), color.blue(), color.alpha()])
    })
}

/// PNG bytes for `image`.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| RenderError::Encoding {
            reason: e.to_string(),
        })?;
    Ok(buffer.into_inner())
}

/// Raster produced by an export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub view: View,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

struct PaintedSurface {
    view: View,
    generation: u64,
    pixel_ratio: f32,
    area: PrintableArea,
    pixmap: Pixmap,
}

/// Owns the drawing surface of one editing session.
pub struct RenderBridge {
    settings: ExportSettings,
    surface: Option<PaintedSurface>,
    generation: u64,
}

impl RenderBridge {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            settings,
            surface: None,
            generation: 0,
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// View currently on the surface, if any.
    pub fn painted_view(&self) -> Option<View> {
        self.surface.as_ref().map(|s| s.view)
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.surface.as_ref().map(|s| &s.pixmap)
    }

    /// Repaints the active view of `state`.
    pub fn redraw(&mut self, state: &DesignerState, options: RenderOptions) -> Result<&Pixmap, RenderError> {
        let view = state.active_view();
        let pixmap = render_view(state, view, &options)?;
        self.generation += 1;
        let surface = self.surface.insert(PaintedSurface {
            view,
            generation: self.generation,
            pixel_ratio: options.pixel_ratio,
            area: state.printable_area(view),
            pixmap,
        });
        Ok(&surface.pixmap)
    }

    /// Samples the surface, requiring `view` painted after `since`.
    fn sample(&self, view: View, since: u64) -> Result<ExportArtifact, RenderError> {
        let surface = match &self.surface {
            Some(surface) if surface.view == view && surface.generation > since => surface,
            other => {
                return Err(RenderError::StaleSurface {
                    painted: other
                        .as_ref()
                        .map_or_else(|| "nothing".to_string(), |s| s.view.to_string()),
                    expected: view.to_string(),
                })
            }
        };
        let cropped = crop_to_area(&surface.pixmap, &surface.area, surface.pixel_ratio);
        let png = encode_png(&cropped)?;
        Ok(ExportArtifact {
            view,
            file_name: self.settings.file_name(view),
            width: cropped.width(),
            height: cropped.height(),
            png,
        })
    }

    /// Exports the printable area of `view` as PNG.
    ///
    /// Both selections are cleared first so no handles end up in the
    /// raster. The surface is only sampled after a repaint of `view` that
    /// happened during this call. The previously active view is restored
    /// whether or not the export succeeds; selections stay cleared.
    pub async fn export_view(
        &mut self,
        state: &mut DesignerState,
        view: View,
    ) -> Result<ExportArtifact, RenderError> {
        let previous = state.active_view();
        state.deselect_all();
        let since = self.generation;

        let switched = previous != view;
        if switched {
            state.set_active_view(view);
            wait(self.settings.view_switch_delay_ms).await;
        }

        let result = self.paint_and_sample(state, view, since).await;

        if switched {
            state.set_active_view(previous);
        }
        match &result {
            Ok(artifact) => tracing::info!(
                view = %view,
                width = artifact.width,
                height = artifact.height,
                bytes = artifact.png.len(),
                "Exported view"
            ),
            Err(e) => tracing::error!(view = %view, "Export failed: {}", e),
        }
        result
    }

    async fn paint_and_sample(
        &mut self,
        state: &DesignerState,
        view: View,
        since: u64,
    ) -> Result<ExportArtifact, RenderError> {
        let area = state.printable_area(view);
        if area.is_degenerate() {
            return Err(RenderError::EmptyArea {
                view: view.to_string(),
            });
        }
        let options = RenderOptions {
            pixel_ratio: self.settings.pixel_ratio,
            exporting: true,
        };
        self.redraw(state, options)?;
        wait(self.settings.redraw_delay_ms).await;
        self.sample(view, since)
    }
}

async fn wait(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
