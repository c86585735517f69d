//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounded bounce depth
//! - A white-to-blue sky gradient as the only light source
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction on output

use crate::output::{ImageSink, OutputResult};
use crate::{Camera, Hittable};
use glint_math::{Color, Interval, Ray};
use rand::RngCore;
use std::time::Instant;

/// Nearest accepted hit distance; keeps bounce rays off their own surface.
pub const SHADOW_ACNE_EPSILON: f32 = 0.001;

const SKY_WHITE: Color = Color::new(1.0, 1.0, 1.0);
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Compute the color seen by a ray.
///
/// Each call is one bounce. The path ends when depth runs out (black),
/// when a material absorbs the ray (black), or when the ray escapes to
/// the sky.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * ray_color(&result.scattered, world, depth - 1, rng)
        }
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    SKY_WHITE * (1.0 - a) + SKY_BLUE * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-encoded 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 0.999);
    let encode = |linear: f32| (256.0 * intensity.clamp(linear_to_gamma(linear))) as u8;
    [encode(color.x), encode(color.y), encode(color.z)]
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel() {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth(), rng);
    }

    pixel_color * camera.samples_scale()
}

/// Render the entire scene into `sink`, one scanline at a time.
///
/// Single-threaded: every sample draws from the one `rng`, so a seeded
/// generator reproduces the image exactly.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    sink: &mut dyn ImageSink,
    rng: &mut dyn RngCore,
) -> OutputResult<()> {
    let width = camera.image_width();
    let height = camera.image_height();

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        camera.samples_per_pixel(),
        camera.max_depth()
    );
    let start = Instant::now();

    sink.begin(width, height)?;
    for y in 0..height {
        log::debug!("Scanlines left: {}", height - y);
        for x in 0..width {
            let color = render_pixel(camera, world, x, y, rng);
            sink.write_pixel(color)?;
        }
    }
    sink.finish()?;

    log::info!("Rendered in {:.2?}", start.elapsed());
    Ok(())
}
