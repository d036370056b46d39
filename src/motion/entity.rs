use crate::math::{Point3, UnitQuaternion, Vector3};

/// An object moved along a path: anything with a settable position and
/// orientation.
pub trait DrivenEntity {
    /// Current position.
    fn position(&self) -> Point3;

    /// Moves the entity.
    fn set_position(&mut self, position: Point3);

    /// Orients the entity.
    fn set_rotation(&mut self, rotation: UnitQuaternion);
}

/// A plain position + rotation pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Point3,
    pub rotation: UnitQuaternion,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }
}

impl Transform {
    /// Creates a transform at `position` with identity rotation.
    #[must_use]
    pub fn at(position: Point3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// The rotated local +Y axis.
    #[must_use]
    pub fn up(&self) -> Vector3 {
        self.rotation * Vector3::y()
    }

    /// The rotated local +Z axis.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        self.rotation * Vector3::z()
    }
}

impl DrivenEntity for Transform {
    fn position(&self) -> Point3 {
        self.position
    }

    fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: UnitQuaternion) {
        self.rotation = rotation;
    }
}
