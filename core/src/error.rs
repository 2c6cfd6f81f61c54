use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeightmapError>;

// Upper bound for roughness, max height and corner values.
// Heights stay below max_height + 2 * roughness, which keeps them finite.
pub const MAX_MAGNITUDE: f64 = f64::MAX / 4.0;

#[derive(Debug, Error)]
pub enum HeightmapError {
    // side length has to halve cleanly down to 2x2 blocks
    #[error("grid size {size} is not 2^k + 1 with k >= 1")]
    InvalidSize { size: usize },

    #[error("invalid {name}: {value} (must be finite, >= 0 and <= f64::MAX / 4)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid region ({row1},{col1})-({row2},{col2}) for a {size}x{size} grid")]
    InvalidRegion {
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
        size: usize,
    },

    #[error("cell ({row},{col}) has not been set")]
    UnsetCell { row: usize, col: usize },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl HeightmapError {
    // Rejects NaN, negative values and anything above MAX_MAGNITUDE
    pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<f64> {
        if (0.0..=MAX_MAGNITUDE).contains(&value) {
            Ok(value)
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }
}
