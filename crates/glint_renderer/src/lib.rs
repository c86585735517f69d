//! Glint renderer - CPU path tracing
//!
//! A Monte Carlo path tracer for spheres lit by a sky gradient.
//!
//! The pieces, leaves first:
//! - [`Hittable`] / [`HitRecord`]: ray-primitive intersection
//! - [`HittableList`]: the scene, queried as a single hittable
//! - [`Material`]: diffuse, metal and glass scattering
//! - [`Camera`] and [`render`]: ray generation and light transport
//! - [`ImageSink`]: where the finished pixels go
//!
//! # Example
//!
//! ```no_run
//! use glint_renderer::{
//!     render, Camera, CameraConfig, Color, HittableList, Lambertian, PpmWriter, Sphere, Vec3,
//! };
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::sync::Arc;
//!
//! let mut world = HittableList::new();
//! let gray = Arc::new(Lambertian::new(Color::splat(0.5)));
//! world.add(Arc::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray)));
//!
//! let camera = Camera::new(CameraConfig::default());
//! let mut ppm = PpmWriter::new(std::io::stdout().lock());
//! render(&camera, &world, &mut ppm, &mut StdRng::seed_from_u64(1)).unwrap();
//! ```

mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod sphere;

pub use camera::{Camera, CameraConfig};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{ImageBuffer, ImageSink, OutputError, OutputResult, PpmWriter};
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, sky_gradient,
    SHADOW_ACNE_EPSILON,
};
pub use sphere::Sphere;

/// Re-export common math types from glint_math
pub use glint_math::{Color, Interval, Point3, Ray, Vec3};
