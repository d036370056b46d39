use crate::geometry::Curve;

use super::{Polyline, TessellationParams};

/// Samples a curve into a polyline at a fixed parameter step.
pub struct TessellateCurve<'a, C: Curve> {
    curve: &'a C,
    params: TessellationParams,
}

impl<'a, C: Curve> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: &'a C, params: TessellationParams) -> Self {
        Self { curve, params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// Samples start at the beginning of the curve's domain and always end
    /// on its last point, even when the step does not divide the domain.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let domain = self.curve.domain();
        let span = domain.t_max - domain.t_min;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = (span / self.params.step()).ceil().max(1.0) as u32;

        let points = (0..=count)
            .map(|i| {
                let t = (domain.t_min + f64::from(i) * self.params.step()).min(domain.t_max);
                self.curve.evaluate(t)
            })
            .collect();
        Polyline { points }
    }
}
