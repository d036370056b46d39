use crate::math::{alignment, reflect_through, Alignment, Point3, UnitQuaternion, Vector3};

/// Moves four control points so the first lands on `start_point`, then turns
/// the other three about it so that `P1 - P0` points along `start_direction`.
///
/// - parallel: no rotation
/// - oblique: shortest rotation from the old to the new direction
/// - opposite: points 1..3 reflected through P0, since the rotation axis is
///   undefined there
#[must_use]
pub fn align_points(
    points: [Point3; 4],
    start_point: Option<Point3>,
    start_direction: Option<Vector3>,
) -> [Point3; 4] {
    let mut points = points;
    if let Some(start) = start_point {
        let displacement = start - points[0];
        for p in &mut points {
            *p += displacement;
        }
    }

    if let Some(direction) = start_direction {
        let origin = points[0];
        let current = points[1] - origin;
        match alignment(&current, &direction) {
            Alignment::Parallel => {}
            Alignment::Oblique => {
                if let Some(rotation) = UnitQuaternion::rotation_between(&current, &direction) {
                    for p in &mut points[1..] {
                        *p = origin + rotation * (*p - origin);
                    }
                }
            }
            Alignment::Opposite => {
                for p in &mut points[1..] {
                    *p = reflect_through(p, &origin);
                }
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn pts() -> [Point3; 4] {
        [p(1.0, 1.0, 0.0), p(2.0, 1.0, 0.0), p(3.0, 2.0, 0.0), p(3.0, 3.0, 1.0)]
    }

    #[test]
    fn translation_only() {
        let out = align_points(pts(), Some(p(0.0, 0.0, 5.0)), None);
        assert_eq!(out[0], p(0.0, 0.0, 5.0));
        assert_eq!(out[3], p(2.0, 2.0, 6.0));
    }

    #[test]
    fn parallel_direction_is_noop() {
        let out = align_points(pts(), None, Some(Vector3::new(7.0, 0.0, 0.0)));
        assert_eq!(out, pts());
    }

    #[test]
    fn opposite_direction_reflects_through_start() {
        let out = align_points(pts(), None, Some(Vector3::new(-1.0, 0.0, 0.0)));
        assert_eq!(out[0], pts()[0]);
        assert_eq!(out[1], p(0.0, 1.0, 0.0));
        assert_eq!(out[3], p(-1.0, -1.0, -1.0));
    }

    #[test]
    fn oblique_direction_rotates_about_start() {
        let out = align_points(pts(), None, Some(Vector3::new(0.0, 0.0, 3.0)));
        assert_relative_eq!(out[1], p(1.0, 1.0, 1.0), epsilon = 1e-12);
        let original = pts();
        for (moved, before) in out.iter().zip(original.iter()).skip(1) {
            assert_relative_eq!(
                (moved - out[0]).norm(),
                (before - original[0]).norm(),
                epsilon = 1e-12
            );
        }
    }
}
