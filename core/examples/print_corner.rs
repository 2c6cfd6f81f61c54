use heightmap::{Grid, SeededRandom, subdivide};

fn main() -> heightmap::Result<()> {
    // Seed a 129×129 grid with seed 2025 and corners below 8.0
    let mut rng = SeededRandom::with_seed(2025);
    let mut grid = Grid::seeded(129, 8.0, &mut rng)?;

    // Subdivide with an initial amplitude of 16
    let report = subdivide(&mut grid, 16.0, &mut rng)?;
    println!(
        "depth {}, {} cells filled",
        report.depth, report.cells_filled
    );

    // Print the top-left 16×16 corner of the map
    let map = grid.into_height_map()?;
    for row in map.iter().take(16) {
        for v in row.iter().take(16) {
            print!("{:>7.3} ", v);
        }
        println!();
    }
    Ok(())
}
