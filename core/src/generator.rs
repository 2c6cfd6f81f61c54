use tracing::debug;

use crate::config::HeightmapConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::normalize::{IntensityMap, to_intensities};
use crate::random::{RandomSource, SeededRandom};
use crate::subdivide::subdivide;
use crate::utils::HeightMap2D;

// 2D terrain generator using recursive Diamond–Square subdivision
#[derive(Debug, Clone)]
pub struct DiamondSquare2D {
    config: HeightmapConfig,
}

impl DiamondSquare2D {
    // Fails with InvalidSize before any work if the side length is not 2^n + 1
    pub fn new(config: HeightmapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HeightmapConfig {
        &self.config
    }

    // Generate a size×size height‐map with a freshly seeded random source
    pub fn generate(&self) -> Result<HeightMap2D> {
        let mut rng = SeededRandom::for_run(self.config.seed);
        self.generate_with(&mut rng)
    }

    /// Generates with an injected random source.
    ///
    /// The first four draws seed the corners, the rest are consumed by the
    /// subdivision, one per written cell.
    pub fn generate_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<HeightMap2D> {
        let HeightmapConfig {
            size,
            roughness,
            max_height,
            ..
        } = self.config;

        let mut grid = Grid::seeded(size, max_height, rng)?;
        debug!(size, corners = ?grid.corners(), "seeded corners");
        subdivide(&mut grid, roughness, rng)?;
        grid.into_height_map()
    }

    // Full pipeline: generate, then normalize to 8-bit intensities
    pub fn generate_heightmap(&self) -> Result<IntensityMap> {
        let map = self.generate()?;
        Ok(to_intensities(&map))
    }
}
