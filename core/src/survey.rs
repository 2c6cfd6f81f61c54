use tracing::{debug, info};

use crate::error::Result;
use crate::generator::DiamondSquare2D;
use crate::normalize::{IntensityMap, to_intensities};
use crate::random::{RandomSource, SeededRandom};

// Intensity at which a cell counts as part of a mountain
pub const MOUNTAIN_THRESHOLD: u8 = 127;

// Fraction of cells at or above `threshold`.
// Low values mean flat maps, high values mountainous ones.
pub fn mountain_coverage(map: &IntensityMap, threshold: u8) -> f64 {
    let cells = map.as_slice();
    if cells.is_empty() {
        return 0.0;
    }
    let count = cells.iter().filter(|&&v| v >= threshold).count();
    count as f64 / cells.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyReport {
    pub runs: usize,
    pub average: f64, // mean coverage over all runs
    pub converged: bool,
}

/// Estimates the average mountain coverage of a generator.
///
/// Maps are generated one after another. Every `checkpoint` runs the
/// running average is compared with the one at the previous checkpoint,
/// and the survey stops once the relative change is within `tolerance`.
#[derive(Debug, Clone, Copy)]
pub struct CoverageSurvey {
    pub max_runs: usize,
    pub checkpoint: usize,
    pub tolerance: f64,
    pub threshold: u8,
}

impl Default for CoverageSurvey {
    fn default() -> Self {
        Self {
            max_runs: 1000,
            checkpoint: 100,
            tolerance: 0.02,
            threshold: MOUNTAIN_THRESHOLD,
        }
    }
}

impl CoverageSurvey {
    // One random stream for the whole survey, seeded like a single run
    pub fn run(&self, generator: &DiamondSquare2D) -> Result<SurveyReport> {
        let mut rng = SeededRandom::for_run(generator.config().seed);
        self.run_with(generator, &mut rng)
    }

    pub fn run_with<R: RandomSource + ?Sized>(
        &self,
        generator: &DiamondSquare2D,
        rng: &mut R,
    ) -> Result<SurveyReport> {
        let checkpoint = self.checkpoint.max(1);
        let mut total = 0.0;
        let mut runs = 0;
        let mut last: Option<f64> = None;
        let mut converged = false;

        while runs < self.max_runs {
            let map = to_intensities(&generator.generate_with(rng)?);
            total += mountain_coverage(&map, self.threshold);
            runs += 1;

            if runs % checkpoint != 0 {
                continue;
            }
            let average = total / runs as f64;
            info!(runs, average, "survey checkpoint");
            if let Some(prev) = last {
                if prev > 0.0 && (average / prev - 1.0).abs() <= self.tolerance {
                    converged = true;
                    break;
                }
            }
            last = Some(average);
        }

        let average = if runs == 0 { 0.0 } else { total / runs as f64 };
        debug!(runs, average, converged, "survey finished");
        Ok(SurveyReport {
            runs,
            average,
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CoverageSurvey, mountain_coverage};
    use crate::config::HeightmapConfig;
    use crate::generator::DiamondSquare2D;
    use crate::normalize::to_intensities;
    use crate::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn coverage_counts_cells_at_threshold() {
        // intensities 0, 127, 63, 255
        let map = to_intensities(&vec![vec![0.0, 5.0], vec![2.5, 10.0]]);
        assert_eq!(mountain_coverage(&map, 127), 0.5);
        assert_eq!(mountain_coverage(&map, 0), 1.0);
    }

    #[test]
    fn identical_runs_converge_at_second_checkpoint() {
        let generator = DiamondSquare2D::new(HeightmapConfig {
            size: 9,
            ..Default::default()
        })
        .unwrap();
        let survey = CoverageSurvey {
            max_runs: 100,
            checkpoint: 10,
            ..Default::default()
        };
        // zero displacement and equal corners: every map is the same plateau
        let report = survey
            .run_with(&generator, &mut ScriptedRandom::constant(0.5))
            .unwrap();
        assert_eq!(report.runs, 20);
        assert!(report.converged);
        assert_eq!(report.average, 1.0);
    }

    #[test]
    fn stops_at_max_runs() {
        let generator = DiamondSquare2D::new(HeightmapConfig {
            size: 9,
            ..Default::default()
        })
        .unwrap();
        let survey = CoverageSurvey {
            max_runs: 5,
            checkpoint: 100,
            ..Default::default()
        };
        let report = survey
            .run_with(&generator, &mut SeededRandom::with_seed(11))
            .unwrap();
        assert_eq!(report.runs, 5);
        assert!(!report.converged);
    }
}
