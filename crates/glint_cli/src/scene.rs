//! Built-in scenes, assembled in code.

use crate::cli::SceneKind;
use glint_renderer::{Color, Dielectric, HittableList, Lambertian, Metal, Sphere, Vec3};
use std::sync::Arc;

/// Build the world for `kind`.
pub fn build_scene(kind: SceneKind) -> HittableList {
    let world = match kind {
        SceneKind::Basic => basic_scene(),
        SceneKind::Materials => materials_scene(),
    };
    log::info!("Scene {:?}: {} objects", kind, world.len());
    world
}

/// A small gray sphere sitting on a huge gray ground sphere.
fn basic_scene() -> HittableList {
    let gray = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray.clone())));
    world.add(Arc::new(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, gray)));
    world
}

/// One sphere of each material in a row.
fn materials_scene() -> HittableList {
    let ground = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let glass = Arc::new(Dielectric::new(1.5));
    // Air bubble inside the glass, relative to the glass around it
    let bubble = Arc::new(Dielectric::new(1.0 / 1.5));
    let metal = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, ground)));
    world.add(Arc::new(Sphere::new(Vec3::new(0.0, 0.0, -1.2), 0.5, center)));
    world.add(Arc::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass)));
    world.add(Arc::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.4, bubble)));
    world.add(Arc::new(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, metal)));
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_renderer::{Hittable, Interval, Ray};

    #[test]
    fn test_scene_sizes() {
        assert_eq!(build_scene(SceneKind::Basic).len(), 2);
        assert_eq!(build_scene(SceneKind::Materials).len(), 5);
    }

    #[test]
    fn test_basic_scene_center_ray_hits_small_sphere() {
        let world = build_scene(SceneKind::Basic);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = world
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("center ray should hit");
        assert!((rec.t - 0.5).abs() < 1e-5);
    }
}
