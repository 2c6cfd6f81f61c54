//! Diamond-square heightmap generator.
//!
//! Generates a square terrain heightmap and writes it as an 8-bit image,
//! or surveys how mountainous the generated maps are on average.

mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use heightmap::{CoverageSurvey, DiamondSquare2D, HeightmapConfig, Rasterizer, Shading};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::FileConfig;

/// Diamond-square terrain heightmap generator.
#[derive(Parser, Debug)]
#[command(name = "heightmap")]
#[command(about = "Generates fractal terrain heightmaps")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    params: ParamArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Overrides for the generation parameters.
#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// Grid side length, must be 2^n + 1.
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Initial displacement amplitude.
    #[arg(long, global = true)]
    roughness: Option<f64>,

    /// Upper bound for the random corner heights.
    #[arg(long, global = true)]
    max_height: Option<f64>,

    /// Fixed seed, random when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl ParamArgs {
    fn apply(&self, config: &mut HeightmapConfig) {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(roughness) = self.roughness {
            config.roughness = roughness;
        }
        if let Some(max_height) = self.max_height {
            config.max_height = max_height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one heightmap and save it (default).
    Generate {
        /// Output image path.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixel shading.
        #[arg(long, value_enum)]
        shading: Option<ShadingArg>,
    },
    /// Average the mountain coverage over many generated maps.
    Survey {
        /// Stop after this many maps even without convergence.
        #[arg(long, default_value_t = 1000)]
        max_runs: usize,

        /// Intensity from which a cell counts as mountain.
        #[arg(long, default_value_t = heightmap::survey::MOUNTAIN_THRESHOLD)]
        threshold: u8,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShadingArg {
    Grayscale,
    Terrain,
}

impl From<ShadingArg> for Shading {
    fn from(arg: ShadingArg) -> Self {
        match arg {
            ShadingArg::Grayscale => Shading::Grayscale,
            ShadingArg::Terrain => Shading::Terrain,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut file = FileConfig::load_or_default(cli.config.as_deref())?;
    cli.params.apply(&mut file.heightmap);

    let generator = DiamondSquare2D::new(file.heightmap).context("Invalid heightmap parameters")?;

    match cli.command.unwrap_or(Command::Generate {
        output: None,
        shading: None,
    }) {
        Command::Generate { output, shading } => {
            let path = output.unwrap_or(file.output.path);
            let shading = shading.map(Shading::from).unwrap_or(file.output.shading);
            generate(&generator, &path, shading)
        }
        Command::Survey {
            max_runs,
            threshold,
        } => survey(&generator, max_runs, threshold),
    }
}

fn generate(generator: &DiamondSquare2D, path: &Path, shading: Shading) -> Result<()> {
    let config = generator.config();
    info!(
        size = config.size,
        roughness = config.roughness,
        max_height = config.max_height,
        seed = ?config.seed,
        "generating heightmap"
    );

    let start = Instant::now();
    let intensities = generator.generate_heightmap()?;
    info!(
        elapsed_ms = start.elapsed().as_secs_f32() * 1000.0,
        range = ?intensities.range(),
        "heightmap ready"
    );

    Rasterizer::new(shading)
        .save(&intensities, path)
        .with_context(|| format!("Failed to write image: {}", path.display()))?;
    Ok(())
}

fn survey(generator: &DiamondSquare2D, max_runs: usize, threshold: u8) -> Result<()> {
    let survey = CoverageSurvey {
        max_runs,
        threshold,
        ..Default::default()
    };
    let report = survey.run(generator)?;
    info!(
        runs = report.runs,
        average = report.average,
        converged = report.converged,
        "survey complete"
    );
    println!("Average score: {:.4}", report.average);
    Ok(())
}
