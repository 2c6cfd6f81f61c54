use crate::error::{HeightmapError, Result};
use crate::random::RandomSource;
use crate::utils::HeightMap2D;

// Checks the 2^k + 1 (k >= 1) side length the subdivision needs
pub fn validate_size(size: usize) -> Result<()> {
    if size >= 3 && (size - 1).is_power_of_two() {
        Ok(())
    } else {
        Err(HeightmapError::InvalidSize { size })
    }
}

// Elevation cell: unset until its single write
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Unset,
    Set(f64),
}

impl Cell {
    pub fn value(self) -> Option<f64> {
        match self {
            Cell::Set(v) => Some(v),
            Cell::Unset => None,
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, Cell::Set(_))
    }
}

/// Square region between two opposite corners, inclusive.
///
/// Always axis-aligned with a power-of-two side length, so it has a
/// well-defined center cell and splits evenly down to 2x2 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub row1: usize,
    pub col1: usize,
    pub row2: usize,
    pub col2: usize,
}

impl Region {
    pub fn new(row1: usize, col1: usize, row2: usize, col2: usize) -> Option<Self> {
        let square = row2 > row1 && col2 > col1 && row2 - row1 == col2 - col1;
        // halving has to bottom out at 2x2 blocks
        if square && row2 - row1 >= 2 && (row2 - row1).is_power_of_two() {
            Some(Self {
                row1,
                col1,
                row2,
                col2,
            })
        } else {
            None
        }
    }

    pub fn side(&self) -> usize {
        self.row2 - self.row1
    }

    pub fn center(&self) -> (usize, usize) {
        (
            self.row2 - (self.row2 - self.row1) / 2,
            self.col2 - (self.col2 - self.col1) / 2,
        )
    }

    // 2x2 blocks have nothing left to subdivide
    pub fn is_base(&self) -> bool {
        self.side() == 2
    }

    // Top-left, top-right, bottom-left, bottom-right
    pub fn quadrants(&self) -> [Region; 4] {
        let (mr, mc) = self.center();
        let quad = |row1, col1, row2, col2| Region {
            row1,
            col1,
            row2,
            col2,
        };
        [
            quad(self.row1, self.col1, mr, mc),
            quad(self.row1, mc, mr, self.col2),
            quad(mr, self.col1, self.row2, mc),
            quad(mr, mc, self.row2, self.col2),
        ]
    }
}

/// N×N working grid for the diamond-square fill.
///
/// Every cell starts [`Cell::Unset`] and can be written exactly once
/// through [`Grid::fill`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self> {
        validate_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Unset; size * size],
        })
    }

    /// Allocates a grid and seeds the four corners with uniform heights
    /// in `[0, max_height)`, drawn top-left, top-right, bottom-left,
    /// bottom-right.
    pub fn seeded<R: RandomSource + ?Sized>(
        size: usize,
        max_height: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let max_height = HeightmapError::check_non_negative("max height", max_height)?;
        let mut corners = [0.0; 4];
        for corner in corners.iter_mut() {
            *corner = rng.next_unit() * max_height;
        }
        Self::with_corners(size, corners)
    }

    // Corners in top-left, top-right, bottom-left, bottom-right order
    pub fn with_corners(size: usize, corners: [f64; 4]) -> Result<Self> {
        for value in corners {
            HeightmapError::check_non_negative("corner", value)?;
        }
        let mut grid = Self::new(size)?;
        let last = size - 1;
        for (&(row, col), &value) in [(0, 0), (0, last), (last, 0), (last, last)]
            .iter()
            .zip(corners.iter())
        {
            grid.fill(row, col, value);
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(row, col)`.
    ///
    /// Coordinates must be inside the grid; out-of-range access panics.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.size && col < self.size, "({row}, {col}) outside grid");
        self.cells[row * self.size + col]
    }

    pub fn is_unset(&self, row: usize, col: usize) -> bool {
        !self.cell(row, col).is_set()
    }

    // Fails only for unset cells; coordinates must be in range as for `cell`
    pub fn height(&self, row: usize, col: usize) -> Result<f64> {
        self.cell(row, col)
            .value()
            .ok_or(HeightmapError::UnsetCell { row, col })
    }

    // Write-once: returns false and leaves the cell alone if already set.
    // Coordinates must be in range; the value is stored as given.
    pub fn fill(&mut self, row: usize, col: usize, value: f64) -> bool {
        debug_assert!(row < self.size && col < self.size, "({row}, {col}) outside grid");
        let cell = &mut self.cells[row * self.size + col];
        if cell.is_set() {
            return false;
        }
        *cell = Cell::Set(value);
        true
    }

    pub fn corners(&self) -> [Cell; 4] {
        let last = self.size - 1;
        [
            self.cell(0, 0),
            self.cell(0, last),
            self.cell(last, 0),
            self.cell(last, last),
        ]
    }

    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_set()).count()
    }

    pub fn full_region(&self) -> Region {
        let last = self.size - 1;
        Region {
            row1: 0,
            col1: 0,
            row2: last,
            col2: last,
        }
    }

    pub fn contains(&self, region: &Region) -> bool {
        region.row2 < self.size && region.col2 < self.size
    }

    // Finished heights, row-major. Fails on the first unset cell.
    pub fn into_height_map(self) -> Result<HeightMap2D> {
        let size = self.size;
        let mut map = vec![vec![0.0; size]; size];
        for (i, cell) in self.cells.into_iter().enumerate() {
            let (row, col) = (i / size, i % size);
            map[row][col] = cell.value().ok_or(HeightmapError::UnsetCell { row, col })?;
        }
        Ok(map)
    }
}
