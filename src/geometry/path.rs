use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{alignment, points_coincide, Alignment, Point3, TOLERANCE};

use super::curve::CubicBezier;

/// An ordered chain of cubic Bezier segments.
///
/// Each segment starts exactly where the previous one ends. When the end of
/// the last segment lands on the start of some segment, that segment's index
/// is the loop point ([`loop_from`](Self::loop_from)).
#[derive(Debug, Clone, Default)]
pub struct BezierPath {
    segments: Vec<CubicBezier>,
    loop_from: Option<usize>,
}

impl BezierPath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a path by pushing each segment in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any segment does not start where the previous
    /// one ends.
    pub fn from_segments(segments: impl IntoIterator<Item = CubicBezier>) -> Result<Self> {
        let mut path = Self::new();
        for segment in segments {
            path.push(segment)?;
        }
        Ok(path)
    }

    /// Appends a segment to the end of the path.
    ///
    /// The first segment is taken as-is. A later segment must start at the
    /// current end point; its start is then snapped onto that point and its
    /// first handle is pulled towards the mirror of the previous segment's
    /// last handle (see [`clamped_mirror`]).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotContinuous`] if the segment does not
    /// start at the end of the path.
    pub fn push(&mut self, segment: CubicBezier) -> Result<()> {
        if let Some(end) = self.end_point() {
            if !points_coincide(&end, &segment.p0()) {
                return Err(GeometryError::NotContinuous {
                    expected: end,
                    found: segment.p0(),
                }
                .into());
            }
        }
        self.push_connected(segment);
        Ok(())
    }

    /// Appends a segment already known to start at the current end point.
    fn push_connected(&mut self, mut segment: CubicBezier) {
        if let Some(last) = self.segments.last() {
            let joint = last.p3();
            let handle = clamped_mirror(&last.p2(), &joint, &segment.p1());
            segment.set_points([Some(joint), Some(handle), None, None]);
        }
        let end = segment.p3();
        self.segments.push(segment);

        self.loop_from = self
            .segments
            .iter()
            .position(|s| points_coincide(&s.p0(), &end));
        if let Some(index) = self.loop_from {
            debug!(index, segments = self.segments.len(), "path loops back");
        }
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[CubicBezier] {
        &self.segments
    }

    /// Iterates over the segments in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, CubicBezier> {
        self.segments.iter()
    }

    /// Returns the segment at `index`; negative indices count from the end
    /// (`-1` is the last segment).
    #[must_use]
    pub fn segment(&self, index: isize) -> Option<&CubicBezier> {
        let resolved = if index < 0 {
            self.segments.len().checked_sub(index.unsigned_abs())?
        } else {
            index.unsigned_abs()
        };
        self.segments.get(resolved)
    }

    /// Index of the segment the path loops back to, if any.
    #[must_use]
    pub fn loop_from(&self) -> Option<usize> {
        self.loop_from
    }

    /// Start point of the first segment.
    #[must_use]
    pub fn start_point(&self) -> Option<Point3> {
        self.segments.first().map(CubicBezier::p0)
    }

    /// End point of the last segment.
    #[must_use]
    pub fn end_point(&self) -> Option<Point3> {
        self.segments.last().map(CubicBezier::p3)
    }

    /// Sum of the segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments.iter().map(CubicBezier::length).sum()
    }

    /// All control points with shared joints: `3·len() + 1` points, or none
    /// for an empty path.
    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        let mut points = Vec::with_capacity(self.segments.len() * 3 + 1);
        if let Some(start) = self.start_point() {
            points.push(start);
        }
        for segment in &self.segments {
            points.extend_from_slice(&segment.points()[1..]);
        }
        points
    }

    /// Returns the path traced from end to start.
    ///
    /// Segments are reversed and pushed back to front, so smoothing and loop
    /// detection run again on the result.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut path = Self::new();
        for segment in self.segments.iter().rev() {
            path.push_connected(segment.reversed());
        }
        path
    }
}

impl From<CubicBezier> for BezierPath {
    fn from(segment: CubicBezier) -> Self {
        let mut path = Self::new();
        path.push_connected(segment);
        path
    }
}

impl<'a> IntoIterator for &'a BezierPath {
    type Item = &'a CubicBezier;
    type IntoIter = std::slice::Iter<'a, CubicBezier>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Places `opposite` on the far side of `center` from `self_point`.
///
/// With `v1 = self_point - center` and `v2 = opposite - center`:
/// - `v1` zero: `opposite` unchanged
/// - same direction: `center - v2`
/// - oblique: `center - v1 · |v2| / |v1|`, i.e. the mirror of `self_point`
///   rescaled to the distance of `opposite`
/// - already opposite: `opposite` unchanged
#[must_use]
pub fn clamped_mirror(self_point: &Point3, center: &Point3, opposite: &Point3) -> Point3 {
    let v1 = self_point - center;
    let v2 = opposite - center;
    let l1 = v1.norm();
    if l1 < TOLERANCE {
        return *opposite;
    }
    match alignment(&v1, &v2) {
        Alignment::Parallel => center - v2,
        Alignment::Oblique => center - v1 * (v2.norm() / l1),
        Alignment::Opposite => *opposite,
    }
}
