// 2D height map: row‐major Vec<Vec<f64>> of size N×N
// access as `map[row][col]`.
pub type HeightMap2D = Vec<Vec<f64>>;

// Grid-wide (min, max), folded from the 0.0 sea-level floor
pub fn extent2(map: &HeightMap2D) -> (f64, f64) {
    let mut min = 0.0f64;
    let mut max = 0.0f64;
    for row in map {
        for &val in row {
            min = min.min(val);
            max = max.max(val);
        }
    }
    (min, max)
}
