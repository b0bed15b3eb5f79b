use egui::{Color32, Pos2};

use crate::config::BoardConfig;
use crate::stroke::{QuadSegment, StrokePath};
use crate::surface::RasterSurface;

/// Which look a path is drawn with
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StyleKind {
    Normal,
    Selected,
}

impl StyleKind {
    pub fn for_path(touched: bool) -> Self {
        if touched { Self::Selected } else { Self::Normal }
    }
}

/// Halo drawn under a stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Color32,
}

/// Everything needed to stroke one path. Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
    pub glow: Option<Glow>,
}

impl StrokeStyle {
    pub fn for_kind(kind: StyleKind, config: &BoardConfig) -> Self {
        match kind {
            StyleKind::Normal => Self {
                color: color(config.normal_color),
                width: config.line_width,
                glow: None,
            },
            StyleKind::Selected => Self {
                color: color(config.selected_color),
                width: config.line_width,
                glow: Some(Glow {
                    blur: config.glow_blur,
                    color: color(config.selected_color),
                }),
            },
        }
    }
}

fn color([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Draws paths onto a [`RasterSurface`] and answers hit tests
#[derive(Debug, Clone)]
pub struct Renderer {
    normal: StrokeStyle,
    selected: StrokeStyle,
}

impl Renderer {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            normal: StrokeStyle::for_kind(StyleKind::Normal, config),
            selected: StrokeStyle::for_kind(StyleKind::Selected, config),
        }
    }

    pub fn style(&self, kind: StyleKind) -> &StrokeStyle {
        match kind {
            StyleKind::Normal => &self.normal,
            StyleKind::Selected => &self.selected,
        }
    }

    /// Hit-test width, identical to the render width
    pub fn line_width(&self) -> f32 {
        self.normal.width
    }

    /// Draw a freshly smoothed segment of the stroke being drawn
    pub fn stroke_segment<S: RasterSurface>(&self, surface: &mut S, segment: &QuadSegment) {
        surface.stroke(&segment.commands(), &self.normal);
    }

    /// Draw a committed path with the style of its `touched` state
    pub fn stroke_path<S: RasterSurface>(&self, surface: &mut S, path: &StrokePath) {
        let commands: Vec<_> = path.geometry().commands().collect();
        surface.stroke(&commands, self.style(StyleKind::for_path(path.is_touched())));
    }

    /// Clear the surface and draw every path in insertion order.
    ///
    /// A path for which `toggle` returns true has its `touched` flag flipped
    /// before it is drawn. Returns how many paths were flipped.
    pub fn redraw<S, F>(&self, surface: &mut S, paths: &mut [StrokePath], mut toggle: F) -> usize
    where
        S: RasterSurface,
        F: FnMut(usize, &StrokePath) -> bool,
    {
        surface.clear();
        let mut toggled = 0;
        for (index, path) in paths.iter_mut().enumerate() {
            if toggle(index, path) {
                path.toggle_selected();
                toggled += 1;
            }
            self.stroke_path(surface, path);
        }
        toggled
    }

    pub fn hit_test<S: RasterSurface>(&self, surface: &S, path: &StrokePath, point: Pos2) -> bool {
        surface.is_point_in_stroke(path.geometry(), point, self.line_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::ActiveStroke;
    use crate::surface::PixelCanvas;
    use egui::pos2;

    fn line(y: f32) -> StrokePath {
        let mut stroke = ActiveStroke::begin(pos2(10.0, y));
        stroke.extend(QuadSegment::new(pos2(10.0, y), pos2(30.0, y), pos2(50.0, y)));
        stroke.finish(None)
    }

    #[test]
    fn test_style_lookup() {
        let config = BoardConfig::default();
        let normal = StrokeStyle::for_kind(StyleKind::Normal, &config);
        let selected = StrokeStyle::for_kind(StyleKind::Selected, &config);

        assert_eq!(normal.color, Color32::from_rgb(255, 0, 0));
        assert_eq!(normal.width, 10.0);
        assert!(normal.glow.is_none());

        assert_eq!(selected.color, Color32::from_rgb(0, 128, 0));
        assert_eq!(selected.width, normal.width);
        assert_eq!(selected.glow.map(|g| g.blur), Some(15.0));

        assert_eq!(StyleKind::for_path(true), StyleKind::Selected);
        assert_eq!(StyleKind::for_path(false), StyleKind::Normal);
    }

    #[test]
    fn test_redraw_without_toggles_is_idempotent() {
        let renderer = Renderer::new(&BoardConfig::default());
        let mut canvas = PixelCanvas::new(64, 64).unwrap();
        let mut paths = vec![line(20.0), line(24.0)];
        paths[1].toggle_selected();

        assert_eq!(renderer.redraw(&mut canvas, &mut paths, |_, _| false), 0);
        let first = canvas.snapshot();
        assert_eq!(renderer.redraw(&mut canvas, &mut paths, |_, _| false), 0);
        assert_eq!(canvas.snapshot(), first);
        assert!(!paths[0].is_touched());
        assert!(paths[1].is_touched());
    }

    #[test]
    fn test_redraw_toggles_matching_paths() {
        let renderer = Renderer::new(&BoardConfig::default());
        let mut canvas = PixelCanvas::new(64, 64).unwrap();
        let mut paths = vec![line(10.0), line(40.0)];

        let toggled = renderer.redraw(&mut canvas, &mut paths, |index, _| index == 1);
        assert_eq!(toggled, 1);
        assert!(!paths[0].is_touched());
        assert!(paths[1].is_touched());

        let image = canvas.snapshot().to_image();
        assert_eq!(image.get_pixel(30, 10).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(30, 40).0, [0, 128, 0, 255]);
    }

    #[test]
    fn test_later_paths_draw_on_top() {
        let renderer = Renderer::new(&BoardConfig::default());
        let mut canvas = PixelCanvas::new(64, 64).unwrap();
        let mut paths = vec![line(20.0), line(20.0)];
        paths[0].toggle_selected();

        renderer.redraw(&mut canvas, &mut paths, |_, _| false);
        let image = canvas.snapshot().to_image();
        assert_eq!(image.get_pixel(30, 20).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_hit_test_uses_render_width() {
        let renderer = Renderer::new(&BoardConfig::default());
        let canvas = PixelCanvas::new(64, 64).unwrap();
        let path = line(20.0);
        assert!(renderer.hit_test(&canvas, &path, pos2(30.0, 24.0)));
        assert!(!renderer.hit_test(&canvas, &path, pos2(30.0, 26.0)));
    }
}
