pub mod curve;
pub mod path;

pub use curve::{CubicBezier, Curve, CurveDomain};
pub use path::{clamped_mirror, BezierPath};
