//! Raster plot of a boundary against its continuous reference circle.

use std::path::Path;

use thiserror::Error;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::{Disk, Point};

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("cannot allocate a {width}x{height} canvas")]
    InvalidCanvas { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Side of the square canvas in pixels.
    pub size: u32,
    pub margin: u32,
    pub curve_samples: usize,
    pub curve_width: f32,
    pub marker_radius: f32,
    pub show_grid: bool,
    pub grid_width: f32,
    pub background: [u8; 4],
    pub grid_color: [u8; 4],
    pub curve_color: [u8; 4],
    pub marker_color: [u8; 4],
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            size: 800,
            margin: 40,
            curve_samples: 800,
            curve_width: 1.5,
            marker_radius: 2.5,
            show_grid: true,
            grid_width: 1.0,
            background: [255, 255, 255, 255],
            grid_color: [176, 176, 176, 255],
            curve_color: [31, 119, 180, 255],
            marker_color: [255, 127, 14, 255],
        }
    }
}

/// Maps world coordinates onto the canvas with the same scale on both axes.
/// World y grows upwards.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    min: (f64, f64),
    max: (f64, f64),
    margin: f64,
    scale: f64,
}

impl Viewport {
    /// Window of `radius + 1` around the disk center, as in a matplotlib
    /// `xlim`/`ylim` pair with equal aspect.
    pub fn around(disk: &Disk, style: &PlotStyle) -> Self {
        let padded = Disk::new(disk.center, disk.radius.max(0) + 1);
        let (lo, hi) = padded.corners();
        let span = (hi.x - lo.x) as f64;
        let margin = style.margin as f64;
        let scale = (style.size as f64 - 2.0 * margin) / span;
        Self {
            min: (lo.x as f64, lo.y as f64),
            max: (hi.x as f64, hi.y as f64),
            margin,
            scale,
        }
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let px = self.margin + (x - self.min.0) * self.scale;
        let py = self.margin + (self.max.1 - y) * self.scale;
        (px as f32, py as f32)
    }
}

fn paint_of(color: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;
    paint
}

fn stroke_of(width: f32) -> Stroke {
    let mut stroke = Stroke::default();
    stroke.width = width;
    stroke
}

fn draw_grid(pixmap: &mut Pixmap, viewport: &Viewport, style: &PlotStyle) {
    let paint = paint_of(style.grid_color);
    let stroke = stroke_of(style.grid_width);
    let (min_x, min_y) = (viewport.min.0 as i64, viewport.min.1 as i64);
    let (max_x, max_y) = (viewport.max.0 as i64, viewport.max.1 as i64);

    let mut pb = PathBuilder::new();
    for x in min_x..=max_x {
        let (px, top) = viewport.to_pixel(x as f64, max_y as f64);
        let (_, bottom) = viewport.to_pixel(x as f64, min_y as f64);
        pb.move_to(px, top);
        pb.line_to(px, bottom);
    }
    for y in min_y..=max_y {
        let (left, py) = viewport.to_pixel(min_x as f64, y as f64);
        let (right, _) = viewport.to_pixel(max_x as f64, y as f64);
        pb.move_to(left, py);
        pb.line_to(right, py);
    }

    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn draw_frame(pixmap: &mut Pixmap, viewport: &Viewport) {
    let (left, top) = viewport.to_pixel(viewport.min.0, viewport.max.1);
    let (right, bottom) = viewport.to_pixel(viewport.max.0, viewport.min.1);
    if let Some(rect) = Rect::from_ltrb(left, top, right, bottom) {
        let path = PathBuilder::from_rect(rect);
        pixmap.stroke_path(
            &path,
            &paint_of([0, 0, 0, 255]),
            &stroke_of(1.0),
            Transform::identity(),
            None,
        );
    }
}

fn draw_reference_circle(pixmap: &mut Pixmap, disk: &Disk, viewport: &Viewport, style: &PlotStyle) {
    if style.curve_samples < 2 {
        return;
    }
    let (cx, cy) = (disk.center.x as f64, disk.center.y as f64);
    let r = disk.radius as f64;

    let mut pb = PathBuilder::new();
    for i in 0..style.curve_samples {
        let t = 2.0 * std::f64::consts::PI * i as f64 / (style.curve_samples - 1) as f64;
        let (px, py) = viewport.to_pixel(r * t.cos() + cx, r * t.sin() + cy);
        if i == 0 {
            pb.move_to(px, py);
        } else {
            pb.line_to(px, py);
        }
    }

    match pb.finish() {
        Some(path) => pixmap.stroke_path(
            &path,
            &paint_of(style.curve_color),
            &stroke_of(style.curve_width),
            Transform::identity(),
            None,
        ),
        None => log::debug!("reference circle for r={} is degenerate", disk.radius),
    }
}

fn draw_markers(pixmap: &mut Pixmap, points: &[Point], viewport: &Viewport, style: &PlotStyle) {
    let paint = paint_of(style.marker_color);
    for p in points {
        let (px, py) = viewport.to_pixel(p.x as f64, p.y as f64);
        if let Some(path) = PathBuilder::from_circle(px, py, style.marker_radius) {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

/// Render `points` over the continuous circle of `radius` around `center`.
pub fn render_boundary(
    points: &[Point],
    radius: i64,
    center: Point,
    style: &PlotStyle,
) -> Result<Pixmap, PlotError> {
    let invalid = PlotError::InvalidCanvas {
        width: style.size,
        height: style.size,
    };
    if style.size <= 2 * style.margin {
        return Err(invalid);
    }
    let mut pixmap = Pixmap::new(style.size, style.size).ok_or(invalid)?;

    let [r, g, b, a] = style.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

    let disk = Disk::new(center, radius);
    let viewport = Viewport::around(&disk, style);

    if style.show_grid {
        draw_grid(&mut pixmap, &viewport, style);
    }
    draw_frame(&mut pixmap, &viewport);
    if radius >= 0 {
        draw_reference_circle(&mut pixmap, &disk, &viewport, style);
    }
    draw_markers(&mut pixmap, points, &viewport, style);

    log::debug!(
        "rendered {} markers on a {}px canvas",
        points.len(),
        style.size
    );

    Ok(pixmap)
}

/// Write the pixmap as a PNG, creating parent directories as needed.
pub fn save_png(pixmap: &Pixmap, path: impl AsRef<Path>) -> Result<(), PlotError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let data = pixmap
        .encode_png()
        .map_err(|e| PlotError::Encode(e.to_string()))?;
    std::fs::write(path, data)?;
    Ok(())
}
