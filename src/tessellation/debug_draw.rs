use crate::geometry::{BezierPath, CubicBezier};

use super::{DebugRenderer, LineColor, TessellateCurve, TessellationParams};

/// Emits debug lines for segments and paths.
///
/// Curve lines alternate red and yellow so the sampling density is visible.
/// With handles enabled, `P0-P1` and `P3-P2` are drawn in gray.
#[derive(Debug, Clone, Copy)]
pub struct DebugDraw {
    params: TessellationParams,
    duration: f64,
    handles: bool,
}

impl Default for DebugDraw {
    fn default() -> Self {
        Self {
            params: TessellationParams::default(),
            duration: 0.01,
            handles: false,
        }
    }
}

impl DebugDraw {
    /// Creates a new `DebugDraw` with the given sampling parameters.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Sets how long each line stays on screen, in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Also draws the control handles.
    #[must_use]
    pub fn with_handles(mut self, handles: bool) -> Self {
        self.handles = handles;
        self
    }

    /// Draws one segment.
    pub fn segment<R: DebugRenderer + ?Sized>(&self, segment: &CubicBezier, renderer: &mut R) {
        let polyline = TessellateCurve::new(segment, self.params).execute();
        for (i, (from, to)) in polyline.lines().enumerate() {
            let color = if i % 2 == 0 {
                LineColor::Red
            } else {
                LineColor::Yellow
            };
            renderer.draw_line(from, to, color, self.duration);
        }
        if self.handles {
            renderer.draw_line(segment.p0(), segment.p1(), LineColor::Gray, self.duration);
            renderer.draw_line(segment.p3(), segment.p2(), LineColor::Gray, self.duration);
        }
    }

    /// Draws every segment of a path.
    pub fn path<R: DebugRenderer + ?Sized>(&self, path: &BezierPath, renderer: &mut R) {
        for segment in path {
            self.segment(segment, renderer);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Point3, Point3, LineColor)>,
    }

    impl DebugRenderer for Recorder {
        fn draw_line(&mut self, from: Point3, to: Point3, color: LineColor, _duration: f64) {
            self.lines.push((from, to, color));
        }
    }

    fn line_path() -> BezierPath {
        BezierPath::from_segments([
            CubicBezier::new(
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(3.0, 0.0, 0.0),
            ),
            CubicBezier::new(
                Point3::new(3.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(5.0, 0.0, 0.0),
                Point3::new(6.0, 0.0, 0.0),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn alternates_colors() {
        let mut rec = Recorder::default();
        let params = TessellationParams::new(0.25).unwrap();
        DebugDraw::new(params).path(&line_path(), &mut rec);
        assert_eq!(rec.lines.len(), 8);
        assert_eq!(rec.lines[0].2, LineColor::Red);
        assert_eq!(rec.lines[1].2, LineColor::Yellow);
        assert_eq!(rec.lines[3].1, Point3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn handles_are_gray() {
        let mut rec = Recorder::default();
        let path = line_path();
        DebugDraw::default()
            .with_handles(true)
            .segment(path.segment(0).unwrap(), &mut rec);
        let gray: Vec<_> = rec.lines.iter().filter(|l| l.2 == LineColor::Gray).collect();
        assert_eq!(gray.len(), 2);
        assert_eq!(gray[1].0, Point3::new(3.0, 0.0, 0.0));
    }
}
