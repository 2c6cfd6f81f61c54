use std::path::Path;

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::normalize::IntensityMap;

// How intensities become pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    // one 8-bit channel, intensity as-is
    #[default]
    Grayscale,
    // water, sand, grass, rock and snow bands
    Terrain,
}

// Writes an IntensityMap as an 8-bit raster image
#[derive(Debug, Clone, Copy, Default)]
pub struct Rasterizer {
    shading: Shading,
}

impl Rasterizer {
    pub fn new(shading: Shading) -> Self {
        Self { shading }
    }

    pub fn shading(&self) -> Shading {
        self.shading
    }

    pub fn render(&self, map: &IntensityMap) -> DynamicImage {
        let (w, h) = (map.width() as u32, map.height() as u32);
        match self.shading {
            Shading::Grayscale => DynamicImage::ImageLuma8(GrayImage::from_fn(w, h, |x, y| {
                Luma([map.get(y as usize, x as usize)])
            })),
            Shading::Terrain => {
                let gradient = terrain_gradient();
                DynamicImage::ImageRgb8(RgbImage::from_fn(w, h, |x, y| {
                    let t = map.get(y as usize, x as usize) as f32 / 255.0;
                    let col: LinSrgb = gradient.get(t);
                    let rgb = col.into_format::<u8>();
                    Rgb([rgb.red, rgb.green, rgb.blue])
                }))
            }
        }
    }

    // Format is picked from the file extension
    pub fn save(&self, map: &IntensityMap, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.render(map).save(path)?;
        info!(path = %path.display(), shading = ?self.shading, "saved heightmap image");
        Ok(())
    }
}

// deep water to beach to grass to rock to snow
fn terrain_gradient() -> Gradient<LinSrgb> {
    Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)),
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)),
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ])
}
