use std::sync::OnceLock;

use crate::error::Result;
use crate::math::{points_coincide, reflect_through, Point3, Vector3, TOLERANCE};
use crate::operations::transform::{align_points, SymmetryAxis};

use super::{Curve, CurveDomain};

/// Parameter step used when sampling the curve to estimate its length.
const LENGTH_STEP: f64 = 0.01;

/// Number of chords summed by [`CubicBezier::length`].
const LENGTH_SAMPLES: u32 = 100;

/// A cubic Bezier segment defined by four control points.
///
/// The curve is stored in power-basis form:
/// `B(t) = P0 + 3·k1·t + 3·k2·t² + k3·t³` with
/// `k1 = P1 - P0`, `k2 = P0 - 2·P1 + P2` and `k3 = -P0 + 3·P1 - 3·P2 + P3`.
///
/// The coefficients are private and only rebuilt through
/// [`set_points`](Self::set_points), so they can never disagree with the
/// control points. The sampled length is computed on first use and cleared
/// by the same entry point.
#[derive(Debug, Clone)]
pub struct CubicBezier {
    points: [Point3; 4],
    k1: Vector3,
    k2: Vector3,
    k3: Vector3,
    length: OnceLock<f64>,
}

impl CubicBezier {
    /// Creates a segment from its four control points.
    #[must_use]
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self::from_points([p0, p1, p2, p3])
    }

    /// Creates a segment from an array of control points.
    #[must_use]
    pub fn from_points(points: [Point3; 4]) -> Self {
        let (k1, k2, k3) = coefficients(&points);
        Self {
            points,
            k1,
            k2,
            k3,
            length: OnceLock::new(),
        }
    }

    /// Returns a copy of the control points.
    #[must_use]
    pub fn points(&self) -> [Point3; 4] {
        self.points
    }

    /// Start point.
    #[must_use]
    pub fn p0(&self) -> Point3 {
        self.points[0]
    }

    /// First handle.
    #[must_use]
    pub fn p1(&self) -> Point3 {
        self.points[1]
    }

    /// Second handle.
    #[must_use]
    pub fn p2(&self) -> Point3 {
        self.points[2]
    }

    /// End point.
    #[must_use]
    pub fn p3(&self) -> Point3 {
        self.points[3]
    }

    /// Replaces the supplied control points, leaving `None` slots untouched.
    ///
    /// Returns `true` if any point actually changed, in which case the
    /// coefficients are rebuilt and the cached length is dropped.
    pub fn set_points(&mut self, update: [Option<Point3>; 4]) -> bool {
        let mut changed = false;
        for (slot, new) in self.points.iter_mut().zip(update) {
            if let Some(p) = new {
                if *slot != p {
                    *slot = p;
                    changed = true;
                }
            }
        }
        if changed {
            (self.k1, self.k2, self.k3) = coefficients(&self.points);
            self.length = OnceLock::new();
        }
        changed
    }

    /// Approximate arc length, summing 100 chords at parameter step 0.01.
    ///
    /// Computed once and cached until the points change.
    #[must_use]
    pub fn length(&self) -> f64 {
        *self.length.get_or_init(|| {
            let mut last = self.points[0];
            let mut total = 0.0;
            for i in 1..=LENGTH_SAMPLES {
                let current = self.evaluate(f64::from(i) * LENGTH_STEP);
                total += nalgebra::distance(&last, &current);
                last = current;
            }
            total
        })
    }

    /// Estimates the parameter increment that moves about `distance` units
    /// along the curve, starting at `t`.
    ///
    /// The tangent is probed one uniform step ahead (`t + distance / length`)
    /// and, since [`Curve::tangent`] is one third of the true derivative,
    /// the step is `distance / |tangent| / 3`.
    ///
    /// Degenerate inputs never produce NaN or infinity:
    /// - a non-positive `distance` gives `0`;
    /// - a segment with no length is crossed at once (`1 - t`);
    /// - a zero tangent at the probe falls back to `distance / length`.
    #[must_use]
    pub fn delta_parameter(&self, t: f64, distance: f64) -> f64 {
        if distance.is_nan() || distance <= 0.0 {
            return 0.0;
        }
        let length = self.length();
        if length < TOLERANCE {
            return (1.0 - t).max(0.0);
        }
        let speed = self.tangent(t + distance / length).norm();
        if speed < TOLERANCE {
            return distance / length;
        }
        distance / speed / 3.0
    }

    /// Returns the segment reflected through `center`.
    ///
    /// Control points lying on `center` stay where they are.
    #[must_use]
    pub fn mirrored_through_point(&self, center: &Point3) -> Self {
        Self::from_points(self.points.map(|p| {
            if points_coincide(&p, center) {
                p
            } else {
                reflect_through(&p, center)
            }
        }))
    }

    /// Returns the segment mirrored about one of the principal axis lines.
    ///
    /// # Errors
    ///
    /// Returns an error if `axis` is not an X, Y or Z line (see
    /// [`SymmetryAxis::try_from`]).
    pub fn mirrored_across_axis(&self, axis: &Vector3) -> Result<Self> {
        let axis = SymmetryAxis::try_from(*axis)?;
        Ok(self.mirrored_across(axis))
    }

    /// Returns the segment mirrored about `axis`.
    #[must_use]
    pub fn mirrored_across(&self, axis: SymmetryAxis) -> Self {
        Self::from_points(self.points.map(|p| axis.mirror(&p)))
    }

    /// Returns the segment moved so that it starts at `start_point` and
    /// leaves along `start_direction`.
    ///
    /// Either argument may be omitted. The rotation pivots on the (new) start
    /// point; an exactly opposite direction is resolved by reflecting the
    /// other three points through the start point.
    #[must_use]
    pub fn translated_to(
        &self,
        start_point: Option<Point3>,
        start_direction: Option<Vector3>,
    ) -> Self {
        Self::from_points(align_points(self.points, start_point, start_direction))
    }

    /// Returns the same curve traced from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [p0, p1, p2, p3] = self.points;
        Self::new(p3, p2, p1, p0)
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Point3 {
        if t <= 0.0 {
            self.points[0]
        } else if t >= 1.0 {
            self.points[3]
        } else {
            self.points[0] + self.k1 * (3.0 * t) + self.k2 * (3.0 * t * t) + self.k3 * (t * t * t)
        }
    }

    fn tangent(&self, t: f64) -> Vector3 {
        if t <= 0.0 {
            self.points[1] - self.points[0]
        } else if t >= 1.0 {
            self.points[3] - self.points[2]
        } else {
            self.k3 * (t * t) + self.k2 * (2.0 * t) + self.k1
        }
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        points_coincide(&self.points[0], &self.points[3])
    }
}

/// Power-basis coefficients `(k1, k2, k3)` of the cubic.
fn coefficients(points: &[Point3; 4]) -> (Vector3, Vector3, Vector3) {
    let [p0, p1, p2, p3] = points.map(|p| p.coords);
    let k1 = p1 - p0;
    let k2 = p0 - p1 * 2.0 + p2;
    let k3 = p3 - p2 * 3.0 + p1 * 3.0 - p0;
    (k1, k2, k3)
}
