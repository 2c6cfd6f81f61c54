// Generates and saves two 257×257 heightmap images from the same seed:
// Grayscale intensities
// Terrain color bands
use heightmap::{DiamondSquare2D, HeightmapConfig, Rasterizer, Shading, to_intensities};

fn main() -> heightmap::Result<()> {
    let generator = DiamondSquare2D::new(HeightmapConfig {
        seed: Some(2025),
        ..Default::default()
    })?;
    let map = generator.generate()?;
    let intensities = to_intensities(&map);

    Rasterizer::new(Shading::Grayscale).save(&intensities, "heightmap_gray.png")?;
    println!("Saved heightmap_gray.png");
    Rasterizer::new(Shading::Terrain).save(&intensities, "heightmap_terrain.png")?;
    println!("Saved heightmap_terrain.png");
    Ok(())
}
