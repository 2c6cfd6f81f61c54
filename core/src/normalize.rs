use tracing::warn;

use crate::utils::{HeightMap2D, extent2};

// Output for a perfectly flat map, where no scale can be derived
pub const NEUTRAL_INTENSITY: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntensityRange {
    // heights were scaled by 256 / (max - min)
    Scaled { min: f64, max: f64 },
    // max == min, every cell is NEUTRAL_INTENSITY
    Degenerate,
}

/// Row-major grid of 8-bit intensities, ready for rasterizing.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityMap {
    width: usize,
    height: usize,
    data: Vec<u8>,
    range: IntensityRange,
}

impl IntensityMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn range(&self) -> IntensityRange {
        self.range
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.width + col]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks(self.width.max(1))
    }
}

/// Maps heights to intensities with
/// `round(value * 256 / (max - min) - 1)`, clamped to `[0, 255]`.
///
/// The extent is folded from the 0.0 sea-level floor, so on a
/// non-negative map the highest cell lands exactly on 255.
/// Ties round to even.
pub fn to_intensities(map: &HeightMap2D) -> IntensityMap {
    let height = map.len();
    let width = map.first().map_or(0, Vec::len);
    let (min, max) = extent2(map);

    if max == min {
        warn!(width, height, value = max, "flat height map, using neutral intensity");
        return IntensityMap {
            width,
            height,
            data: vec![NEUTRAL_INTENSITY; width * height],
            range: IntensityRange::Degenerate,
        };
    }

    let multiplier = 256.0 / (max - min);
    let data = map
        .iter()
        .flat_map(|row| row.iter())
        .map(|&v| (v * multiplier - 1.0).round_ties_even().clamp(0.0, 255.0) as u8)
        .collect();

    IntensityMap {
        width,
        height,
        data,
        range: IntensityRange::Scaled { min, max },
    }
}
