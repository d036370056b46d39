use super::{alignment, Alignment, Point3, UnitQuaternion, Vector3, TOLERANCE};

/// Orientation whose local +Z axis points along `forward` and whose local +Y
/// axis leans towards `up`.
///
/// Returns `None` when either vector is zero-length or the two are
/// collinear, since no frame is defined in that case.
#[must_use]
pub fn look_rotation(forward: &Vector3, up: &Vector3) -> Option<UnitQuaternion> {
    if forward.norm() < TOLERANCE || up.norm() < TOLERANCE {
        return None;
    }
    match alignment(forward, up) {
        Alignment::Oblique => Some(UnitQuaternion::face_towards(forward, up)),
        Alignment::Parallel | Alignment::Opposite => None,
    }
}

/// Moves `current` in a straight line towards `target` by at most `max_distance`.
///
/// Lands exactly on `target` once it is within reach.
#[must_use]
pub fn move_towards(current: &Point3, target: &Point3, max_distance: f64) -> Point3 {
    let offset = target - current;
    let dist = offset.norm();
    if dist <= max_distance || dist < TOLERANCE {
        return *target;
    }
    current + offset * (max_distance / dist)
}
