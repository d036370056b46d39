mod general;
mod mirror;
mod translate;

pub use general::TransformPath;
pub use mirror::SymmetryAxis;
pub use translate::align_points;
