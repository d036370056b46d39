/// Angle utilities for 3D directions.
use std::f64::consts::PI;

use super::{Vector3, ANGLE_TOLERANCE, TOLERANCE};

/// How two directions relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Same direction (angle 0). Also reported when either vector is zero.
    Parallel,
    /// Strictly between 0 and 180 degrees.
    Oblique,
    /// Opposite directions (angle 180).
    Opposite,
}

/// Unsigned angle between `a` and `b` in radians, in `[0, PI]`.
///
/// Returns `0` when either vector is zero-length. Uses `atan2` of the cross
/// and dot products, which stays accurate near 0 and PI.
#[must_use]
pub fn angle_between(a: &Vector3, b: &Vector3) -> f64 {
    if a.norm() < TOLERANCE || b.norm() < TOLERANCE {
        return 0.0;
    }
    a.cross(b).norm().atan2(a.dot(b))
}

/// Classifies the angle between `a` and `b`.
#[must_use]
pub fn alignment(a: &Vector3, b: &Vector3) -> Alignment {
    let angle = angle_between(a, b);
    if angle <= ANGLE_TOLERANCE {
        Alignment::Parallel
    } else if angle >= PI - ANGLE_TOLERANCE {
        Alignment::Opposite
    } else {
        Alignment::Oblique
    }
}
