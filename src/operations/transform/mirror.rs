use crate::error::{CurvewalkError, OperationError};
use crate::math::{Point3, Vector3, POINT_TOLERANCE};

/// A principal axis line used for mirroring.
///
/// Mirroring about an axis keeps the component along that axis and negates
/// the other two, i.e. a half turn about the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryAxis {
    X,
    Y,
    Z,
}

impl SymmetryAxis {
    /// Mirrors `p` about the axis line through the origin.
    #[must_use]
    pub fn mirror(self, p: &Point3) -> Point3 {
        let mut q = -p.coords;
        match self {
            Self::X => q.x = -q.x,
            Self::Y => q.y = -q.y,
            Self::Z => q.z = -q.z,
        }
        Point3::from(q)
    }
}

impl TryFrom<Vector3> for SymmetryAxis {
    type Error = CurvewalkError;

    /// Accepts any nonzero vector along X, and the unit up/down and
    /// forward/back vectors for Y and Z.
    fn try_from(axis: Vector3) -> Result<Self, Self::Error> {
        let near = |v: Vector3| (axis - v).norm() < POINT_TOLERANCE;
        if axis.x != 0.0 && axis.y == 0.0 && axis.z == 0.0 {
            Ok(Self::X)
        } else if near(Vector3::y()) || near(-Vector3::y()) {
            Ok(Self::Y)
        } else if near(Vector3::z()) || near(-Vector3::z()) {
            Ok(Self::Z)
        } else {
            Err(OperationError::InvalidInput(format!(
                "not a valid symmetry axis: ({}, {}, {})",
                axis.x, axis.y, axis.z
            ))
            .into())
        }
    }
}
