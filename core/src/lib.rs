// heightmap holds the diamond-square generator, normalization and rasterizing
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod normalize;
pub mod random;
pub mod raster;
pub mod subdivide;
pub mod survey;
pub mod utils;

pub use config::HeightmapConfig;
pub use error::{HeightmapError, Result};
pub use generator::DiamondSquare2D;
pub use grid::{Cell, Grid, Region};
pub use normalize::{IntensityMap, IntensityRange, NEUTRAL_INTENSITY, to_intensities};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use raster::{Rasterizer, Shading};
pub use subdivide::{SubdivisionEngine, SubdivisionReport, subdivide};
pub use survey::{CoverageSurvey, SurveyReport, mountain_coverage};
pub use utils::HeightMap2D;
