use tracing::{debug, trace};

use crate::error::{HeightmapError, Result};
use crate::grid::{Grid, Region};
use crate::random::{RandomSource, displacement};

// What a subdivision run did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubdivisionReport {
    pub depth: u32,          // deepest recursion level, top-level diamond is 1
    pub cells_filled: usize, // cells written by diamond and square steps
}

/// Runs the diamond-square recursion over the whole grid.
///
/// `roughness` is the displacement amplitude at the top level; it halves
/// with every level of recursion. The four corners must already be set.
pub fn subdivide<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    roughness: f64,
    rng: &mut R,
) -> Result<SubdivisionReport> {
    let roughness = HeightmapError::check_non_negative("roughness", roughness)?;
    let region = grid.full_region();
    debug!(size = grid.size(), roughness, "subdividing grid");

    let mut engine = SubdivisionEngine::new(grid, rng);
    engine.diamond(region, roughness)?;
    let report = engine.report();

    debug!(
        depth = report.depth,
        cells_filled = report.cells_filled,
        "subdivision finished"
    );
    Ok(report)
}

// Diamond and square steps over one grid.
// Holds the grid and random source exclusively for the length of a run.
pub struct SubdivisionEngine<'a, R: RandomSource + ?Sized> {
    grid: &'a mut Grid,
    rng: &'a mut R,
    report: SubdivisionReport,
}

impl<'a, R: RandomSource + ?Sized> SubdivisionEngine<'a, R> {
    pub fn new(grid: &'a mut Grid, rng: &'a mut R) -> Self {
        Self {
            grid,
            rng,
            report: SubdivisionReport::default(),
        }
    }

    pub fn report(&self) -> SubdivisionReport {
        self.report
    }

    /// Sets the center of `region` to the mean of its corners plus a random
    /// offset, then runs the square step on the same region.
    pub fn diamond(&mut self, region: Region, amplitude: f64) -> Result<()> {
        self.check(&region)?;
        self.diamond_at(region, amplitude, 1)
    }

    /// Sets the four edge midpoints of `region`, then recurses into its
    /// quadrants with half the amplitude unless the region is 2x2.
    /// The center of `region` must already be set.
    pub fn square(&mut self, region: Region, amplitude: f64) -> Result<()> {
        self.check(&region)?;
        self.square_at(region, amplitude, 1)
    }

    fn check(&self, region: &Region) -> Result<()> {
        let shaped = Region::new(region.row1, region.col1, region.row2, region.col2).is_some();
        if shaped && self.grid.contains(region) {
            Ok(())
        } else {
            Err(HeightmapError::InvalidRegion {
                row1: region.row1,
                col1: region.col1,
                row2: region.row2,
                col2: region.col2,
                size: self.grid.size(),
            })
        }
    }

    fn diamond_at(&mut self, region: Region, amplitude: f64, depth: u32) -> Result<()> {
        trace!(?region, amplitude, depth, "diamond");
        self.report.depth = self.report.depth.max(depth);

        let (row, col) = region.center();
        // Neighbouring regions share midpoints, so only fill once
        if self.grid.is_unset(row, col) {
            let Region {
                row1,
                col1,
                row2,
                col2,
            } = region;
            // divide before adding so large heights cannot overflow
            let mean = self.grid.height(row1, col1)? / 4.0
                + self.grid.height(row1, col2)? / 4.0
                + self.grid.height(row2, col1)? / 4.0
                + self.grid.height(row2, col2)? / 4.0;
            self.write(row, col, mean, amplitude);
        }
        self.square_at(region, amplitude, depth)
    }

    fn square_at(&mut self, region: Region, amplitude: f64, depth: u32) -> Result<()> {
        let Region {
            row1,
            col1,
            row2,
            col2,
        } = region;
        let (mid_row, mid_col) = region.center();
        let middle = self.grid.height(mid_row, mid_col)?;
        let top_left = self.grid.height(row1, col1)?;
        let top_right = self.grid.height(row1, col2)?;
        let bottom_left = self.grid.height(row2, col1)?;
        let bottom_right = self.grid.height(row2, col2)?;

        // top, bottom, left, right
        let edges = [
            (row1, mid_col, top_left, top_right),
            (row2, mid_col, bottom_left, bottom_right),
            (mid_row, col1, top_left, bottom_left),
            (mid_row, col2, top_right, bottom_right),
        ];
        for (row, col, a, b) in edges {
            if self.grid.is_unset(row, col) {
                self.write(row, col, a / 3.0 + b / 3.0 + middle / 3.0, amplitude);
            }
        }

        if region.is_base() {
            return Ok(());
        }
        let amplitude = amplitude / 2.0;
        for quadrant in region.quadrants() {
            self.diamond_at(quadrant, amplitude, depth + 1)?;
        }
        Ok(())
    }

    // Adds the random offset and clamps at the zero floor
    fn write(&mut self, row: usize, col: usize, base: f64, amplitude: f64) {
        let value = (base + displacement(&mut *self.rng, amplitude)).max(0.0);
        if self.grid.fill(row, col, value) {
            self.report.cells_filled += 1;
        }
    }
}
