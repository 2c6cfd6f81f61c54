use heightmap::{
    DiamondSquare2D, Grid, HeightmapConfig, IntensityRange, ScriptedRandom, SeededRandom,
    SubdivisionEngine, subdivide, to_intensities,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_cell_finite_and_non_negative(
        k in 1u32..7,
        roughness in 0.0f64..512.0,
        max_height in 0.0f64..64.0,
        seed in any::<u64>(),
    ) {
        let size = (1usize << k) + 1;
        let mut rng = SeededRandom::with_seed(seed);
        let mut grid = Grid::seeded(size, max_height, &mut rng).unwrap();
        let corners = grid.corners();

        let report = subdivide(&mut grid, roughness, &mut rng).unwrap();
        prop_assert_eq!(report.depth, k);
        prop_assert_eq!(report.cells_filled, size * size - 4);
        prop_assert_eq!(grid.corners(), corners);

        let map = grid.into_height_map().unwrap();
        for v in map.iter().flatten() {
            prop_assert!(v.is_finite() && *v >= 0.0, "bad height {}", v);
        }
    }

    #[test]
    fn scripted_runs_are_identical(
        k in 1u32..6,
        roughness in 0.0f64..64.0,
        script in prop::collection::vec(0.0f64..1.0, 1..32),
    ) {
        let generator = DiamondSquare2D::new(HeightmapConfig {
            size: (1usize << k) + 1,
            roughness,
            ..Default::default()
        })
        .unwrap();
        let a = generator.generate_with(&mut ScriptedRandom::new(script.clone())).unwrap();
        let b = generator.generate_with(&mut ScriptedRandom::new(script)).unwrap();
        prop_assert_eq!(to_intensities(&a), to_intensities(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn second_pass_is_a_no_op(k in 1u32..6, seed in any::<u64>()) {
        let size = (1usize << k) + 1;
        let mut rng = SeededRandom::with_seed(seed);
        let mut grid = Grid::seeded(size, 8.0, &mut rng).unwrap();
        subdivide(&mut grid, 16.0, &mut rng).unwrap();
        let before = grid.clone();

        let region = grid.full_region();
        let mut engine = SubdivisionEngine::new(&mut grid, &mut rng);
        engine.diamond(region, 16.0).unwrap();
        prop_assert_eq!(engine.report().cells_filled, 0);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn intensities_span_zero_to_255(
        k in 1u32..6,
        seed in any::<u64>(),
    ) {
        let generator = DiamondSquare2D::new(HeightmapConfig {
            size: (1usize << k) + 1,
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap();
        let out = generator.generate_heightmap().unwrap();
        if let IntensityRange::Scaled { min, max } = out.range() {
            prop_assert_eq!(min, 0.0);
            prop_assert!(max > 0.0);
            prop_assert_eq!(out.as_slice().iter().copied().max(), Some(255));
        }
    }
}

#[test]
fn flat_end_to_end() {
    let generator = DiamondSquare2D::new(HeightmapConfig {
        size: 5,
        roughness: 0.0,
        max_height: 0.0,
        seed: None,
    })
    .unwrap();
    let map = generator.generate().unwrap();
    assert_eq!(map, vec![vec![0.0; 5]; 5]);

    let out = to_intensities(&map);
    assert_eq!(out.range(), IntensityRange::Degenerate);
    assert!(out.as_slice().iter().all(|&v| v == heightmap::NEUTRAL_INTENSITY));
}
