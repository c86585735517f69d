//! Glint math - vectors, rays, intervals and random sampling.
//!
//! Everything the renderer needs from linear algebra lives here so the
//! core crate only deals with light transport.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;
pub mod sampling;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{near_zero, reflect, refract};

/// A point in 3D space.
pub type Point3 = Vec3;

/// RGB color with linear components, typically in [0, 1].
pub type Color = Vec3;
