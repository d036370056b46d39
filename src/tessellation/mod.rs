mod debug_draw;
mod tessellate_curve;

pub use debug_draw::DebugDraw;
pub use tessellate_curve::TessellateCurve;

use crate::error::{Result, TessellationError};
use crate::math::Point3;

/// Parameters controlling curve sampling.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    step: f64,
}

impl TessellationParams {
    /// Creates sampling parameters with the given parameter step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not in `(0, 1]`.
    pub fn new(step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 || step > 1.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "parameter step must be in (0, 1], got {step}"
            ))
            .into());
        }
        Ok(Self { step })
    }

    /// Parameter distance between consecutive samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { step: 0.05 }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Iterates over consecutive vertex pairs.
    pub fn lines(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Colors used by debug line output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Red,
    Yellow,
    Gray,
}

/// Receiver of debug line draw calls.
///
/// Implemented by the host's renderer; calls are fire-and-forget.
pub trait DebugRenderer {
    /// Draws a line from `from` to `to`, kept on screen for `duration` seconds.
    fn draw_line(&mut self, from: Point3, to: Point3, color: LineColor, duration: f64);
}
