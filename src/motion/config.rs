use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};
use crate::math::{Vector3, TOLERANCE};

/// Settings for a [`BezierMotion`](super::BezierMotion).
///
/// Missing fields take their defaults when deserialized, so a host can store
/// only what it changes:
///
/// ```
/// let config: curvewalk::motion::MotionConfig =
///     serde_json::from_str(r#"{ "speed": 4.0, "allow_loop": true }"#).unwrap();
/// assert!(config.allow_loop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Linear speed in units per second.
    pub speed: f64,
    /// Jump back to the path's loop point after reaching the end.
    pub allow_loop: bool,
    /// Move in a straight line to the path start before following the path.
    pub smooth_start: bool,
    /// Fixed up direction for the entity. When set, the orientation no
    /// longer follows the path tangent.
    pub facing: Option<Vector3>,
    /// Forward axis of the look rotation; the tangent (or `facing`) is used
    /// as the up direction.
    pub forward_axis: Vector3,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            allow_loop: false,
            smooth_start: false,
            facing: None,
            forward_axis: Vector3::z(),
        }
    }
}

impl MotionConfig {
    /// Default configuration moving at `speed`.
    #[must_use]
    pub fn with_speed(speed: f64) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn allow_loop(mut self, allow: bool) -> Self {
        self.allow_loop = allow;
        self
    }

    #[must_use]
    pub fn smooth_start(mut self, smooth: bool) -> Self {
        self.smooth_start = smooth;
        self
    }

    #[must_use]
    pub fn facing(mut self, direction: Vector3) -> Self {
        self.facing = Some(direction);
        self
    }

    #[must_use]
    pub fn forward_axis(mut self, axis: Vector3) -> Self {
        self.forward_axis = axis;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the speed is negative or not finite, or if the
    /// forward axis or facing direction is zero-length.
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "speed must be finite and non-negative, got {}",
                self.speed
            ))
            .into());
        }
        if self.forward_axis.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("forward axis must be non-zero".into()).into(),
            );
        }
        if self.facing.is_some_and(|f| f.norm() < TOLERANCE) {
            return Err(
                OperationError::InvalidInput("facing direction must be non-zero".into()).into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MotionConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(MotionConfig::with_speed(-1.0).validate().is_err());
        assert!(MotionConfig::with_speed(f64::INFINITY).validate().is_err());
        assert!(MotionConfig::default().facing(Vector3::zeros()).validate().is_err());
        assert!(MotionConfig::default().forward_axis(Vector3::zeros()).validate().is_err());
    }

    #[test]
    fn deserializes_partial_json() {
        let config: MotionConfig =
            serde_json::from_str(r#"{ "speed": 2.5, "facing": [0.0, 1.0, 0.0] }"#).unwrap();
        assert!((config.speed - 2.5).abs() < 1e-12);
        assert_eq!(config.facing, Some(Vector3::y()));
        assert_eq!(config.forward_axis, Vector3::z());
        assert!(!config.allow_loop);
    }
}
