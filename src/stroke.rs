use egui::{Pos2, Rect};
use uuid::Uuid;

use crate::group::GroupId;

// Line pieces per quadratic segment when measuring distances
const FLATTEN_STEPS: usize = 16;

/// One quadratic Bézier piece of a stroke, in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub start: Pos2,
    pub control: Pos2,
    pub end: Pos2,
}

impl QuadSegment {
    pub fn new(start: Pos2, control: Pos2, end: Pos2) -> Self {
        Self { start, control, end }
    }

    /// The segment as a standalone path
    pub fn commands(&self) -> [PathCommand; 2] {
        [
            PathCommand::MoveTo(self.start),
            PathCommand::QuadTo {
                control: self.control,
                end: self.end,
            },
        ]
    }

    /// Point on the curve at `t` in `0..=1`
    pub fn sample(&self, t: f32) -> Pos2 {
        let a = self.start.lerp(self.control, t);
        let b = self.control.lerp(self.end, t);
        a.lerp(b, t)
    }

    /// Shortest distance from `point` to the curve
    pub fn distance_to(&self, point: Pos2) -> f32 {
        let mut previous = self.start;
        let mut best = f32::INFINITY;
        for step in 1..=FLATTEN_STEPS {
            let next = self.sample(step as f32 / FLATTEN_STEPS as f32);
            best = best.min(distance_to_line_segment(point, previous, next));
            previous = next;
        }
        best
    }
}

/// Calculate distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// A curve command, the way a vector path backend consumes it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Pos2),
    QuadTo { control: Pos2, end: Pos2 },
}

/// The curve of one stroke: a move-to followed by quadratic segments
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeGeometry {
    start: Pos2,
    segments: Vec<QuadSegment>,
}

impl StrokeGeometry {
    pub fn new(start: Pos2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn segments(&self) -> &[QuadSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The geometry as path commands: one `MoveTo`, then a `QuadTo` per segment
    pub fn commands(&self) -> impl Iterator<Item = PathCommand> + '_ {
        std::iter::once(PathCommand::MoveTo(self.start)).chain(
            self.segments
                .iter()
                .map(|s| PathCommand::QuadTo { control: s.control, end: s.end }),
        )
    }

    /// Bounding box of all segment points (control points included)
    pub fn bounds(&self) -> Rect {
        let mut rect = Rect::from_min_max(self.start, self.start);
        for segment in &self.segments {
            rect.extend_with(segment.control);
            rect.extend_with(segment.end);
        }
        rect
    }

    /// Whether `point` lies within `width / 2` of the curve
    pub fn contains_in_stroke(&self, point: Pos2, width: f32) -> bool {
        let radius = width / 2.0;
        if !self.bounds().expand(radius).contains(point) {
            return false;
        }
        self.segments.iter().any(|s| s.distance_to(point) <= radius)
    }

    fn push(&mut self, segment: QuadSegment) {
        self.segments.push(segment);
    }
}

/// Stable identity of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathId(Uuid);

impl PathId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for PathId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Mutable stroke for the pointer-down..pointer-up interval
#[derive(Debug, Clone)]
pub struct ActiveStroke {
    geometry: StrokeGeometry,
}

impl ActiveStroke {
    pub fn begin(point: Pos2) -> Self {
        Self {
            geometry: StrokeGeometry::new(point),
        }
    }

    /// Append a segment to the in-progress curve
    pub fn extend(&mut self, segment: QuadSegment) {
        self.geometry.push(segment);
    }

    pub fn geometry(&self) -> &StrokeGeometry {
        &self.geometry
    }

    /// Freeze into a committed path owned by `group`
    pub fn finish(self, group: Option<GroupId>) -> StrokePath {
        StrokePath {
            id: PathId::new(),
            geometry: self.geometry,
            group,
            touched: false,
        }
    }
}

// Committed stroke. The geometry is never mutated again.
#[derive(Debug, Clone)]
pub struct StrokePath {
    id: PathId,
    geometry: StrokeGeometry,
    group: Option<GroupId>,
    touched: bool,
}

impl StrokePath {
    pub fn id(&self) -> PathId {
        self.id
    }

    pub fn geometry(&self) -> &StrokeGeometry {
        &self.geometry
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn set_group(&mut self, group: Option<GroupId>) {
        self.group = group;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn toggle_selected(&mut self) {
        self.touched = !self.touched;
    }
}
