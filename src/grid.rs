use crate::config::{ConfigError, MIN_GRID_SIZE};
use crate::snake::Cell;

/// Fixed square play field of `size`×`size` cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: u16,
}

impl Grid {
    /// Creates an `size`×`size` grid.
    #[must_use]
    pub const fn new(size: u16) -> Self {
        Self { size }
    }

    /// Derives the grid from a canvas width and a cell edge, both in pixels.
    ///
    /// The cell count per side is `canvas_width / cell_size`, rounded down.
    pub fn from_canvas(canvas_width: u16, cell_size: u16) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let size = canvas_width / cell_size;
        if size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size,
                min: MIN_GRID_SIZE,
            });
        }

        Ok(Self::new(size))
    }

    /// Cells per side.
    #[must_use]
    pub fn size(self) -> u16 {
        self.size
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Returns true iff `0 <= x < size` and `0 <= y < size`.
    #[must_use]
    pub fn is_in_bounds(self, cell: Cell) -> bool {
        let upper = i32::from(self.size);
        cell.x >= 0 && cell.y >= 0 && cell.x < upper && cell.y < upper
    }

    /// Iterates over every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let upper = i32::from(self.size);
        (0..upper).flat_map(move |y| (0..upper).map(move |x| Cell::new(x, y)))
    }
}
