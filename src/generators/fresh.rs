use crate::generators::{Generator, Step};
use crate::grids::wall_grid::WallGrid;

/// Throws the grid away every step and starts over from a fully walled,
/// unvisited one. Never carves anything.
pub struct FreshGrid {
    grid: WallGrid,
    resets: usize,
}

impl FreshGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: WallGrid::with_dims(rows, cols),
            resets: 0,
        }
    }

    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl Generator for FreshGrid {
    fn step_generation(&mut self) -> Step {
        let dims = self.grid.dims;
        self.grid = WallGrid::with_dims(dims.rows, dims.columns);
        self.resets += 1;
        Step::Reset
    }

    fn next_step(&mut self) -> &WallGrid {
        self.step_generation();
        &self.grid
    }

    fn generate_maze(&mut self) -> &WallGrid {
        self.next_step()
    }

    // nothing to wait for
    fn is_done(&self) -> bool {
        true
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grids::Walls;

    #[test]
    fn every_step_is_a_blank_grid() {
        let mut generator = FreshGrid::new(4, 6);
        for _ in 0..3 {
            let grid = generator.next_step();
            assert_eq!(grid.len(), 24);
            assert_eq!(grid.passages(), 0);
            assert!(grid
                .cells()
                .iter()
                .all(|cell| !cell.visited && cell.walls == Walls::all()));
        }
        assert_eq!(generator.resets(), 3);
        assert_eq!(generator.step_generation(), Step::Reset);
    }

    #[test]
    fn generate_matches_a_new_grid() {
        let mut generator = FreshGrid::new(2, 2);
        assert_eq!(generator.generate_maze(), &WallGrid::with_dims(2, 2));
        assert!(generator.is_done());
    }
}
