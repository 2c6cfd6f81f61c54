use serde::{Deserialize, Serialize};

use crate::error::{HeightmapError, Result};
use crate::grid::validate_size;

pub const DEFAULT_SIZE: usize = 257; // 2^8 + 1
pub const DEFAULT_ROUGHNESS: f64 = 16.0;
pub const DEFAULT_MAX_HEIGHT: f64 = 8.0;

/// Parameters for one heightmap run.
///
/// `roughness` is the top-level displacement amplitude. Anything above 256
/// still raises raw elevations but no longer changes the rendered image,
/// since normalization rescales the whole range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightmapConfig {
    pub size: usize, // must be 2^n + 1, e.g. 129, 257
    pub roughness: f64,
    pub max_height: f64, // corners are seeded in [0, max_height)
    pub seed: Option<u64>, // None reseeds from entropy on every run
}

impl Default for HeightmapConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            roughness: DEFAULT_ROUGHNESS,
            max_height: DEFAULT_MAX_HEIGHT,
            seed: None,
        }
    }
}

impl HeightmapConfig {
    pub fn validate(&self) -> Result<()> {
        validate_size(self.size)?;
        HeightmapError::check_non_negative("roughness", self.roughness)?;
        HeightmapError::check_non_negative("max height", self.max_height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HeightmapConfig;
    use crate::error::HeightmapError;

    #[test]
    fn defaults() {
        let config = HeightmapConfig::default();
        assert_eq!(config.size, 257);
        assert_eq!(config.roughness, 16.0);
        assert_eq!(config.max_height, 8.0);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_size = HeightmapConfig {
            size: 256,
            ..Default::default()
        };
        assert!(matches!(
            bad_size.validate(),
            Err(HeightmapError::InvalidSize { size: 256 })
        ));

        let bad_roughness = HeightmapConfig {
            roughness: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            bad_roughness.validate(),
            Err(HeightmapError::InvalidParameter { name: "roughness", .. })
        ));

        let too_rough = HeightmapConfig {
            roughness: 1e308,
            ..Default::default()
        };
        assert!(matches!(
            too_rough.validate(),
            Err(HeightmapError::InvalidParameter { name: "roughness", .. })
        ));

        let bad_height = HeightmapConfig {
            max_height: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            bad_height.validate(),
            Err(HeightmapError::InvalidParameter { name: "max height", .. })
        ));
    }

    #[test]
    fn zero_height_and_roughness_are_allowed() {
        let flat = HeightmapConfig {
            size: 5,
            roughness: 0.0,
            max_height: 0.0,
            seed: None,
        };
        assert!(flat.validate().is_ok());
    }
}
