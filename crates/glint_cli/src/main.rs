use anyhow::{bail, Context, Result};
use clap::Parser;
use glint_renderer::{render, Camera, ImageBuffer, PpmWriter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

mod cli;
mod scene;

use cli::Args;
use scene::build_scene;

/// Output formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ppm") => Ok(OutputFormat::Ppm),
            Some("png") => Ok(OutputFormat::Png),
            _ => bail!(
                "Unsupported output '{}': use a .ppm or .png file",
                path.display()
            ),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting glint");

    let format = OutputFormat::from_path(&args.output)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Random seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let camera = Camera::new(args.camera_config()?);
    let world = build_scene(args.scene);

    match format {
        OutputFormat::Ppm => {
            let file = File::create(&args.output)
                .with_context(|| format!("Failed to create {}", args.output.display()))?;
            let mut ppm = PpmWriter::new(BufWriter::new(file));
            render(&camera, &world, &mut ppm, &mut rng)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
        }
        OutputFormat::Png => {
            let mut image = ImageBuffer::default();
            render(&camera, &world, &mut image, &mut rng)?;
            image
                .save(&args.output)
                .with_context(|| format!("Failed to save {}", args.output.display()))?;
        }
    }

    log::info!("Saved to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("image.ppm")).unwrap(), OutputFormat::Ppm);
        assert_eq!(OutputFormat::from_path(Path::new("out/IMAGE.PNG")).unwrap(), OutputFormat::Png);
        assert!(OutputFormat::from_path(Path::new("image.exr")).is_err());
        assert!(OutputFormat::from_path(Path::new("image")).is_err());
    }
}
