use crate::error::Result;
use crate::geometry::BezierPath;
use crate::math::{Point3, Vector3};

use super::SymmetryAxis;

/// Builds a transformed copy of a [`BezierPath`].
///
/// Every option is independent. For each segment, in order:
/// 1. point symmetry (`symmetry_point`),
/// 2. axis symmetry (`symmetry_axis`),
/// 3. alignment, when `start_point` or `start_direction` is set: the first
///    segment is moved to the requested start, every later one to the end
///    point and incoming tangent of the previously built segment.
///
/// Segments are appended with [`BezierPath::push`], so handle smoothing and
/// loop detection run on the result as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformPath {
    start_point: Option<Point3>,
    start_direction: Option<Vector3>,
    symmetry_point: Option<Point3>,
    symmetry_axis: Option<Vector3>,
}

impl TransformPath {
    /// Creates an identity `TransformPath` operation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the first segment to start at `point`.
    #[must_use]
    pub fn start_point(mut self, point: Point3) -> Self {
        self.start_point = Some(point);
        self
    }

    /// Turns the first segment to leave along `direction`.
    #[must_use]
    pub fn start_direction(mut self, direction: Vector3) -> Self {
        self.start_direction = Some(direction);
        self
    }

    /// Reflects every segment through `center`.
    #[must_use]
    pub fn symmetry_point(mut self, center: Point3) -> Self {
        self.symmetry_point = Some(center);
        self
    }

    /// Mirrors every segment about an axis line; see [`SymmetryAxis`].
    #[must_use]
    pub fn symmetry_axis(mut self, axis: Vector3) -> Self {
        self.symmetry_axis = Some(axis);
        self
    }

    /// Executes the transform, returning a new path.
    ///
    /// # Errors
    ///
    /// Returns an error if the symmetry axis is not a supported axis line,
    /// or if a transformed segment fails to connect.
    pub fn execute(&self, path: &BezierPath) -> Result<BezierPath> {
        let axis = self.symmetry_axis.map(SymmetryAxis::try_from).transpose()?;
        let align = self.start_point.is_some() || self.start_direction.is_some();

        let mut out = BezierPath::new();
        for (i, segment) in path.iter().enumerate() {
            let mut bz = segment.clone();
            if let Some(center) = &self.symmetry_point {
                bz = bz.mirrored_through_point(center);
            }
            if let Some(axis) = axis {
                bz = bz.mirrored_across(axis);
            }
            if align {
                bz = match out.segment(-1) {
                    Some(prev) if i > 0 => {
                        bz.translated_to(Some(prev.p3()), Some(prev.p3() - prev.p2()))
                    }
                    _ => bz.translated_to(self.start_point, self.start_direction),
                };
            }
            out.push(bz)?;
        }
        Ok(out)
    }
}
