use egui::Pos2;

use crate::stroke::QuadSegment;

/// Turns raw pointer samples into quadratic segments.
///
/// Every sample after the second yields one segment whose control point is the
/// previous sample and whose end is the midpoint between the previous and the
/// new sample. Consecutive segments therefore share tangents at their joints,
/// at the cost of lagging one sample behind the pointer.
#[derive(Debug, Clone, Default)]
pub struct StrokeSmoother {
    points: Vec<Pos2>,
    // End of the last emitted segment, or the first sample
    begin_point: Option<Pos2>,
}

impl StrokeSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `point`, discarding any previous samples
    pub fn begin(&mut self, point: Pos2) {
        self.points.clear();
        self.points.push(point);
        self.begin_point = Some(point);
    }

    /// Feed one sample, returning the segment it completes (if any)
    pub fn push(&mut self, point: Pos2) -> Option<QuadSegment> {
        if self.points.is_empty() {
            self.begin(point);
            return None;
        }
        self.points.push(point);

        if self.points.len() < 3 {
            return None;
        }

        let [control, last] = [self.points[self.points.len() - 2], point];
        let end = control.lerp(last, 0.5);
        let start = self.begin_point.unwrap_or(self.points[0]);
        self.begin_point = Some(end);

        Some(QuadSegment::new(start, control, end))
    }

    /// Samples seen since the stroke began
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.begin_point = None;
    }
}
