use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use glint_renderer::{CameraConfig, Vec3};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// One gray sphere on a gray ground
    Basic,
    /// Ground, diffuse center, glass and hollow glass left, metal right
    Materials,
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A Monte Carlo path tracer lit by a sky gradient")]
pub struct Args {
    /// Ideal image width over height
    #[arg(long, default_value_t = 16.0 / 9.0, value_parser = parse_aspect_ratio)]
    pub aspect_ratio: f32,

    /// Image width in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub samples: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value_t = 10)]
    pub max_depth: u32,

    /// Camera position as x,y,z
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub look_from: Vec3,

    /// Point the camera looks at as x,y,z
    #[arg(long, default_value = "0,0,-1", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub look_at: Vec3,

    /// Camera-relative up direction as x,y,z
    #[arg(long, default_value = "0,1,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub vup: Vec3,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0, value_parser = parse_vfov)]
    pub vfov: f32,

    /// Cone angle in degrees of rays through each pixel (0 = pinhole)
    #[arg(long, default_value_t = 0.0, value_parser = parse_defocus_angle)]
    pub defocus_angle: f32,

    /// Distance from the camera to the plane of perfect focus
    #[arg(long, default_value_t = 1.0, value_parser = parse_focus_dist)]
    pub focus_dist: f32,

    /// Seed for the random generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneKind::Basic)]
    pub scene: SceneKind,

    /// Output file path (.ppm plain text, or .png)
    #[arg(short, long, default_value = "image.ppm")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Camera settings from the parsed flags.
    pub fn camera_config(&self) -> Result<CameraConfig> {
        let view = self.look_from - self.look_at;
        if view.length_squared() == 0.0 {
            bail!("--look-from and --look-at must be different points");
        }
        if view.cross(self.vup).length_squared() == 0.0 {
            bail!("--vup must not be parallel to the viewing direction");
        }

        Ok(CameraConfig::default()
            .with_resolution(self.aspect_ratio, self.width)
            .with_quality(self.samples, self.max_depth)
            .with_position(self.look_from, self.look_at, self.vup)
            .with_lens(self.vfov, self.defocus_angle, self.focus_dist))
    }
}

fn parse_finite(s: &str) -> Result<f32, String> {
    let value: f32 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("expected a finite number, got {value}"))
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let components = s
        .split(',')
        .map(parse_finite)
        .collect::<Result<Vec<_>, _>>()?;
    match components[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!("expected three comma-separated numbers x,y,z, got '{s}'")),
    }
}

fn parse_vfov(s: &str) -> Result<f32, String> {
    let value = parse_finite(s)?;
    if value > 0.0 && value < 180.0 {
        Ok(value)
    } else {
        Err(format!("field of view must be between 0 and 180 degrees, got {value}"))
    }
}

fn parse_defocus_angle(s: &str) -> Result<f32, String> {
    let value = parse_finite(s)?;
    if (0.0..180.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("defocus angle must be in [0, 180) degrees, got {value}"))
    }
}

fn parse_focus_dist(s: &str) -> Result<f32, String> {
    let value = parse_finite(s)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(format!("focus distance must be positive, got {value}"))
    }
}

fn parse_aspect_ratio(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("aspect ratio must be a positive number, got {value}"))
    }
}
