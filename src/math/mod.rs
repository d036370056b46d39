pub mod angle;
pub mod rotation;

pub use angle::{alignment, angle_between, Alignment};
pub use rotation::{look_rotation, move_towards};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit quaternion used for orientations.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global tolerance for zero-length checks.
pub const TOLERANCE: f64 = 1e-10;

/// Distance under which two points are considered the same point.
///
/// Continuity and loop checks compare control points with this tolerance
/// rather than bitwise equality.
pub const POINT_TOLERANCE: f64 = 1e-5;

/// Angular tolerance (radians) for the parallel and antiparallel cases.
pub const ANGLE_TOLERANCE: f64 = 1e-9;

/// Returns whether two points coincide within [`POINT_TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point3, b: &Point3) -> bool {
    nalgebra::distance_squared(a, b) < POINT_TOLERANCE * POINT_TOLERANCE
}

/// Reflects `p` through `center`.
#[must_use]
pub fn reflect_through(p: &Point3, center: &Point3) -> Point3 {
    center + (center - p)
}
