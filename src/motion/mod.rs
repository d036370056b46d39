//! Moving an entity along a [`BezierPath`](crate::geometry::BezierPath) at
//! constant speed.

mod config;
mod controller;
mod entity;

pub use config::MotionConfig;
pub use controller::{BezierMotion, MotionState};
pub use entity::{DrivenEntity, Transform};
