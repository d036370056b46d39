use std::sync::Arc;

use tracing::trace;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{BezierPath, CubicBezier, Curve};
use crate::math::{look_rotation, move_towards, points_coincide, Point3};

use super::{DrivenEntity, MotionConfig};

/// What a [`BezierMotion::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionState {
    /// Moving in a straight line towards the start of the path.
    Approaching,
    /// Following segment `index` at parameter `t`.
    OnSegment { index: usize, t: f64 },
    /// Jumped back to the loop point, now at segment `index`, parameter `t`.
    Looped { index: usize, t: f64 },
    /// At the end of the path with nowhere to go.
    Finished,
}

/// Walks an entity along a shared [`BezierPath`] at a constant linear speed.
///
/// The cursor is a segment index plus an in-segment parameter. Each
/// [`tick`](Self::tick) converts `speed * elapsed` into a parameter step with
/// [`CubicBezier::delta_parameter`], moving on to the next segment once the
/// parameter reaches 1 and, if looping is allowed, jumping back to the
/// path's loop point after the last one.
#[derive(Debug, Clone)]
pub struct BezierMotion {
    path: Arc<BezierPath>,
    config: MotionConfig,
    index: usize,
    t: f64,
    state: MotionState,
}

impl BezierMotion {
    /// Creates a controller at the start of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or the configuration is invalid.
    pub fn new(path: Arc<BezierPath>, config: MotionConfig) -> Result<Self> {
        if path.is_empty() {
            return Err(GeometryError::EmptyPath.into());
        }
        config.validate()?;
        Ok(Self {
            path,
            config,
            index: 0,
            t: 0.0,
            state: MotionState::OnSegment { index: 0, t: 0.0 },
        })
    }

    #[must_use]
    pub fn path(&self) -> &Arc<BezierPath> {
        &self.path
    }

    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Index of the current segment.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Parameter within the current segment. May exceed 1 until the next
    /// tick moves on.
    #[must_use]
    pub fn parameter(&self) -> f64 {
        self.t
    }

    /// State reported by the last tick.
    #[must_use]
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// First segment, parameter 0.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.index == 0 && self.t <= 0.0
    }

    /// Last segment, parameter at least 1.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.index + 1 == self.path.len() && self.t >= 1.0
    }

    /// Returns to the start of the path and applies the fixed facing
    /// direction, if one is configured.
    pub fn reset<E: DrivenEntity + ?Sized>(&mut self, entity: &mut E) {
        self.index = 0;
        self.t = 0.0;
        self.state = MotionState::OnSegment { index: 0, t: 0.0 };
        if let Some(facing) = self.config.facing {
            if let Some(rotation) = look_rotation(&self.config.forward_axis, &facing) {
                entity.set_rotation(rotation);
            }
        }
    }

    /// Advances the cursor by `elapsed` seconds and writes the new position
    /// and orientation to `entity`.
    ///
    /// # Errors
    ///
    /// Returns an error if `elapsed` is negative or not finite.
    pub fn tick<E: DrivenEntity + ?Sized>(
        &mut self,
        elapsed: f64,
        entity: &mut E,
    ) -> Result<MotionState> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "elapsed time must be finite and non-negative, got {elapsed}"
            ))
            .into());
        }
        let distance = self.config.speed * elapsed;
        let approach_to = self.path.start_point().filter(|start| {
            self.at_start() && self.config.smooth_start && !points_coincide(&entity.position(), start)
        });

        self.state = if let Some(start) = approach_to {
            self.approach(entity, &start, distance);
            MotionState::Approaching
        } else if !self.at_end() {
            if self.t < 1.0 {
                self.t += self.segment().delta_parameter(self.t, distance);
            } else {
                self.index += 1;
                self.t = self.segment().delta_parameter(0.0, distance);
                trace!(index = self.index, "entered segment");
            }
            self.write(entity);
            if self.at_end() && self.loop_target().is_none() {
                trace!("reached end of path");
                MotionState::Finished
            } else {
                MotionState::OnSegment {
                    index: self.index,
                    t: self.t,
                }
            }
        } else if let Some(target) = self.loop_target() {
            self.index = target;
            self.t = self.segment().delta_parameter(0.0, distance);
            trace!(index = target, "looped");
            self.write(entity);
            MotionState::Looped {
                index: self.index,
                t: self.t,
            }
        } else {
            MotionState::Finished
        };
        Ok(self.state)
    }

    fn segment(&self) -> &CubicBezier {
        &self.path.segments()[self.index]
    }

    fn loop_target(&self) -> Option<usize> {
        if self.config.allow_loop {
            self.path.loop_from()
        } else {
            None
        }
    }

    fn approach<E: DrivenEntity + ?Sized>(&self, entity: &mut E, start: &Point3, distance: f64) {
        let position = entity.position();
        if self.config.facing.is_none() {
            if let Some(rotation) = look_rotation(&self.config.forward_axis, &(start - position)) {
                entity.set_rotation(rotation);
            }
        }
        entity.set_position(move_towards(&position, start, distance));
    }

    fn write<E: DrivenEntity + ?Sized>(&self, entity: &mut E) {
        let segment = self.segment();
        entity.set_position(segment.evaluate(self.t));
        if self.config.facing.is_none() {
            if let Some(rotation) = look_rotation(&self.config.forward_axis, &segment.tangent(self.t)) {
                entity.set_rotation(rotation);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{UnitQuaternion, Vector3};
    use crate::motion::Transform;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn straight(from: f64, to: f64) -> CubicBezier {
        let step = (to - from) / 3.0;
        CubicBezier::new(
            p(from, 0.0, 0.0),
            p(from + step, 0.0, 0.0),
            p(from + 2.0 * step, 0.0, 0.0),
            p(to, 0.0, 0.0),
        )
    }

    fn line_path() -> Arc<BezierPath> {
        Arc::new(BezierPath::from_segments([straight(0.0, 3.0), straight(3.0, 6.0)]).unwrap())
    }

    #[test]
    fn rejects_empty_path() {
        let result = BezierMotion::new(Arc::new(BezierPath::new()), MotionConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_elapsed() {
        let mut motion = BezierMotion::new(line_path(), MotionConfig::default()).unwrap();
        let mut entity = Transform::default();
        assert!(motion.tick(-0.1, &mut entity).is_err());
        assert!(motion.tick(f64::NAN, &mut entity).is_err());
        assert!(motion.at_start());
    }

    #[test]
    fn moves_at_constant_speed_on_straight_line() {
        let mut motion = BezierMotion::new(line_path(), MotionConfig::with_speed(2.0)).unwrap();
        let mut entity = Transform::default();
        let state = motion.tick(0.25, &mut entity).unwrap();
        assert!(matches!(state, MotionState::OnSegment { index: 0, .. }));
        assert_relative_eq!(entity.position, p(0.5, 0.0, 0.0), epsilon = 1e-9);
        motion.tick(0.25, &mut entity).unwrap();
        assert_relative_eq!(entity.position, p(1.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn crosses_into_next_segment_and_finishes() {
        let mut motion = BezierMotion::new(line_path(), MotionConfig::with_speed(1.0)).unwrap();
        let mut entity = Transform::default();
        let mut entered_second = false;
        let mut ticks = 0;
        while !motion.at_end() {
            let state = motion.tick(0.5, &mut entity).unwrap();
            entered_second |= matches!(state, MotionState::OnSegment { index: 1, .. });
            ticks += 1;
            assert!(ticks < 100, "never reached the end");
        }
        assert!(entered_second);
        assert_eq!(motion.state(), MotionState::Finished);
        assert_relative_eq!(entity.position, p(6.0, 0.0, 0.0), epsilon = 1e-9);
        // Further ticks change nothing.
        assert_eq!(motion.tick(0.5, &mut entity).unwrap(), MotionState::Finished);
        assert_relative_eq!(entity.position, p(6.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn loops_back_to_loop_point() {
        let path = Arc::new(
            BezierPath::from_segments([
                CubicBezier::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 1.0, 0.0), p(2.0, 2.0, 0.0)),
                CubicBezier::new(p(2.0, 2.0, 0.0), p(2.0, 3.0, 0.0), p(1.0, 3.0, 0.0), p(0.0, 2.0, 0.0)),
                CubicBezier::new(p(0.0, 2.0, 0.0), p(-1.0, 1.0, 0.0), p(-1.0, 0.0, 0.0), p(0.0, 0.0, 0.0)),
            ])
            .unwrap(),
        );
        assert_eq!(path.loop_from(), Some(0));
        let mut motion = BezierMotion::new(path, MotionConfig::with_speed(1.0).allow_loop(true)).unwrap();
        let mut entity = Transform::default();
        let mut looped = false;
        for _ in 0..500 {
            if let MotionState::Looped { index, .. } = motion.tick(0.05, &mut entity).unwrap() {
                assert_eq!(index, 0);
                looped = true;
                break;
            }
        }
        assert!(looped);
        assert!(!motion.at_end());
    }

    #[test]
    fn loop_disabled_stays_finished() {
        let path = Arc::new(BezierPath::from(CubicBezier::new(
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 0.0, 0.0),
        )));
        assert_eq!(path.loop_from(), Some(0));
        let mut motion = BezierMotion::new(path, MotionConfig::with_speed(10.0)).unwrap();
        let mut entity = Transform::default();
        for _ in 0..50 {
            motion.tick(0.1, &mut entity).unwrap();
        }
        assert!(motion.at_end());
        assert_eq!(motion.state(), MotionState::Finished);
    }

    #[test]
    fn approaches_start_first() {
        let config = MotionConfig::with_speed(1.0).smooth_start(true);
        let mut motion = BezierMotion::new(line_path(), config).unwrap();
        let mut entity = Transform::at(p(0.0, -2.0, 0.0));
        assert_eq!(motion.tick(1.0, &mut entity).unwrap(), MotionState::Approaching);
        assert_relative_eq!(entity.position, p(0.0, -1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(entity.up(), Vector3::y(), epsilon = 1e-12);
        assert_eq!(motion.tick(1.5, &mut entity).unwrap(), MotionState::Approaching);
        assert_eq!(entity.position, p(0.0, 0.0, 0.0));
        assert!(motion.at_start());
        let state = motion.tick(0.5, &mut entity).unwrap();
        assert!(matches!(state, MotionState::OnSegment { index: 0, .. }));
    }

    #[test]
    fn orientation_follows_tangent() {
        let mut motion = BezierMotion::new(line_path(), MotionConfig::default()).unwrap();
        let mut entity = Transform::default();
        motion.tick(0.5, &mut entity).unwrap();
        assert_relative_eq!(entity.up(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(entity.forward(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn fixed_facing_ignores_tangent() {
        let facing = Vector3::new(0.0, -1.0, 0.0);
        let config = MotionConfig::default().facing(facing);
        let mut motion = BezierMotion::new(line_path(), config).unwrap();
        let mut entity = Transform::default();
        motion.reset(&mut entity);
        assert_relative_eq!(entity.up(), facing, epsilon = 1e-12);
        motion.tick(0.5, &mut entity).unwrap();
        assert_relative_eq!(entity.up(), facing, epsilon = 1e-12);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut motion = BezierMotion::new(line_path(), MotionConfig::default()).unwrap();
        let mut entity = Transform::default();
        motion.tick(1.0, &mut entity).unwrap();
        assert!(!motion.at_start());
        motion.reset(&mut entity);
        assert!(motion.at_start());
        let along_x: UnitQuaternion = look_rotation(&Vector3::z(), &Vector3::x()).unwrap();
        assert_eq!(entity.rotation, along_x);
    }
}
