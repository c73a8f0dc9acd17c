use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::snake::{Cell, Snake};

/// Random samples tried before falling back to a full scan of free cells.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Picks food cells that are never covered by the snake.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    /// Creates a placer seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic placer for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly random free cell, or `None` when the snake fills
    /// the grid.
    pub fn place(&mut self, grid: Grid, snake: &Snake) -> Option<Cell> {
        place_with(&mut self.rng, grid, snake)
    }
}

/// Rejection-samples a free cell, then scans the grid once sampling gives up.
pub fn place_with<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    if grid.size() == 0 {
        return None;
    }

    let upper = i32::from(grid.size());
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Cell::new(rng.gen_range(0..upper), rng.gen_range(0..upper));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    log::debug!("food sampling exhausted after {MAX_PLACEMENT_ATTEMPTS} attempts, scanning grid");

    let candidates: Vec<Cell> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::Grid;
    use crate::snake::{Cell, Snake};

    use super::{place_with, FoodPlacer};

    #[test]
    fn food_is_always_inside_the_grid() {
        let grid = Grid::new(20);
        let snake = Snake::from_segments(vec![
            Cell::new(10, 10),
            Cell::new(9, 10),
            Cell::new(8, 10),
        ]);
        let mut placer = FoodPlacer::with_seed(11);

        for _ in 0..100 {
            let food = placer.place(grid, &snake).expect("grid has free cells");
            assert!(grid.is_in_bounds(food));
        }
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(4);
        // Snake covers every row except the last cell of the bottom row.
        let segments: Vec<Cell> = grid.cells().take(15).collect();
        let snake = Snake::from_segments(segments);

        for _ in 0..50 {
            let food = place_with(&mut rng, grid, &snake).expect("one cell is free");
            assert_eq!(food, Cell::new(3, 3));
        }
    }

    #[test]
    fn full_grid_has_no_food_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::new(3);
        let snake = Snake::from_segments(grid.cells().collect());

        assert_eq!(place_with(&mut rng, grid, &snake), None);
    }

    #[test]
    fn empty_grid_has_no_food_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::new(Cell::new(0, 0));

        assert_eq!(place_with(&mut rng, Grid::new(0), &snake), None);
    }

    #[test]
    fn same_seed_places_the_same_food() {
        let grid = Grid::new(20);
        let snake = Snake::new(Cell::new(0, 0));

        let first = FoodPlacer::with_seed(99).place(grid, &snake);
        let second = FoodPlacer::with_seed(99).place(grid, &snake);

        assert_eq!(first, second);
    }
}
