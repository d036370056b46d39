mod bezier;

pub use bezier::CubicBezier;

use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies inside the domain (bounds included).
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        self.t_min <= t && t <= self.t_max
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// Parameters outside the domain clamp to the nearest end point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Computes the (non-normalized) tangent vector at parameter `t`.
    fn tangent(&self, t: f64) -> Vector3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve ends where it starts.
    fn is_closed(&self) -> bool;
}
