use egui::Pos2;
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Transform};

use crate::error::CanvasError;
use crate::renderer::StrokeStyle;
use crate::stroke::{PathCommand, StrokeGeometry};

// Opacity of the glow halo relative to its color
const GLOW_OPACITY: f32 = 0.35;

/// A full copy of a surface's pixels (RGBA, premultiplied)
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

impl Snapshot {
    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether every pixel is fully transparent
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|b| *b == 0)
    }

    /// Straight-alpha copy, e.g. for uploading as a texture
    pub fn to_image(&self) -> image::RgbaImage {
        let mut straight = Vec::with_capacity(self.pixels.len());
        for px in self.pixels.chunks_exact(4) {
            let color = PremultipliedColorU8::from_rgba(px[0], px[1], px[2], px[3])
                .map(|c| c.demultiply())
                .map(|c| [c.red(), c.green(), c.blue(), c.alpha()])
                .unwrap_or([0, 0, 0, 0]);
            straight.extend_from_slice(&color);
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

/// What the board needs from the raster it draws on
pub trait RasterSurface {
    /// Width and height in device pixels
    fn size(&self) -> [u32; 2];

    /// Stroke a vector path with the given style
    fn stroke(&mut self, commands: &[PathCommand], style: &StrokeStyle);

    /// Reset every pixel to transparent
    fn clear(&mut self);

    /// Copy the whole pixel buffer
    fn snapshot(&self) -> Snapshot;

    /// Overwrite the whole pixel buffer
    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), CanvasError>;

    /// Whether `point` lies inside the outline of `geometry` stroked `width` wide
    fn is_point_in_stroke(&self, geometry: &StrokeGeometry, point: Pos2, width: f32) -> bool;
}

/// In-memory surface rasterized with tiny-skia
pub struct PixelCanvas {
    pixmap: Pixmap,
}

impl std::fmt::Debug for PixelCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelCanvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    fn build_path(commands: &[PathCommand]) -> Option<tiny_skia::Path> {
        let mut builder = PathBuilder::new();
        for command in commands {
            match *command {
                PathCommand::MoveTo(p) => builder.move_to(p.x, p.y),
                PathCommand::QuadTo { control, end } => builder.quad_to(control.x, control.y, end.x, end.y),
            }
        }
        builder.finish()
    }

    fn paint(color: egui::Color32, opacity: f32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, (a as f32 * opacity).round() as u8);
        paint.anti_alias = true;
        paint
    }

    fn round_stroke(width: f32) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        }
    }
}

impl RasterSurface for PixelCanvas {
    fn size(&self) -> [u32; 2] {
        [self.pixmap.width(), self.pixmap.height()]
    }

    fn stroke(&mut self, commands: &[PathCommand], style: &StrokeStyle) {
        // A lone move-to draws nothing
        let Some(path) = Self::build_path(commands) else {
            return;
        };

        if let Some(glow) = &style.glow {
            let halo = Self::round_stroke(style.width + glow.blur);
            let paint = Self::paint(glow.color, GLOW_OPACITY);
            self.pixmap.stroke_path(&path, &paint, &halo, Transform::identity(), None);
        }

        let paint = Self::paint(style.color, 1.0);
        let stroke = Self::round_stroke(style.width);
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            pixels: self.pixmap.data().to_vec(),
        }
    }

    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), CanvasError> {
        let expected = self.size();
        if snapshot.size() != expected || snapshot.pixels.len() != self.pixmap.data().len() {
            return Err(CanvasError::SnapshotSizeMismatch {
                expected,
                actual: snapshot.size(),
            });
        }
        self.pixmap.data_mut().copy_from_slice(&snapshot.pixels);
        Ok(())
    }

    fn is_point_in_stroke(&self, geometry: &StrokeGeometry, point: Pos2, width: f32) -> bool {
        geometry.contains_in_stroke(point, width)
    }
}
