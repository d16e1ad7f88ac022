use rand::prelude::*;

use crate::generators::{Generator, Step};
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Direction, Position};

/// Randomized depth-first carve, advanced one step per call.
///
/// Starts in the top-left corner. Each step either knocks a wall down towards a
/// random unvisited neighbor, or jumps back to the most recent cell in the
/// history that still has one. Once no such cell exists the maze is a
/// spanning tree and further steps do nothing.
pub struct RecursiveBacktracker<R: Rng = ThreadRng> {
    grid: WallGrid,
    rng: R,
    current: Position,
    // most recent on top
    history: Vec<Position>,
    carves: usize,
    pub done: bool,
}

impl RecursiveBacktracker<ThreadRng> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_rng(rows, cols, rand::thread_rng())
    }
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn with_rng(rows: usize, cols: usize, rng: R) -> Self {
        let mut grid = WallGrid::with_dims(rows, cols);
        let current = (0, 0);
        grid.visit(current);

        Self {
            grid,
            rng,
            current,
            history: Vec::new(),
            carves: 0,
            done: false,
        }
    }

    pub fn current(&self) -> Position {
        self.current
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// walls knocked down so far
    pub fn carves(&self) -> usize {
        self.carves
    }

    /// Moves into the unvisited neighbor in `direction`, leaving the current cell
    /// on the history so generation can come back to it.
    pub fn carve(&mut self, direction: Direction) -> Position {
        let from = self.current;
        let to = self.grid.clear_wall_between(from, direction);
        self.history.push(from);
        self.carves += 1;
        self.current = to;

        log::trace!("carved {:?} from {:?} to {:?}", direction, from, to);
        to
    }

    fn has_unvisited_neighbor(&self, (row, column): Position) -> bool {
        !self.grid.unvisited_neighbors(row, column).is_empty()
    }

    /// Latest history entry that can still grow. Only that entry is removed;
    /// entries scanned past stay where they are.
    fn backtrack(&mut self) -> Option<Position> {
        let index = (0..self.history.len())
            .rev()
            .find(|&i| self.has_unvisited_neighbor(self.history[i]))?;

        Some(self.history.remove(index))
    }
}

impl<R: Rng> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self) -> Step {
        if self.done {
            return Step::Done;
        }

        let (row, column) = self.current;
        let neighbors = self.grid.unvisited_neighbors(row, column);

        if let Some(&direction) = neighbors.as_slice().choose(&mut self.rng) {
            let from = self.current;
            let to = self.carve(direction);
            return Step::Carved {
                from,
                to,
                direction,
            };
        }

        match self.backtrack() {
            Some(to) => {
                log::debug!("backtracked from {:?} to {:?}", self.current, to);
                self.current = to;
                Step::Backtracked { to }
            }
            None => {
                self.done = true;
                log::info!(
                    "maze of {}x{} finished after {} carves",
                    self.grid.dims.rows,
                    self.grid.dims.columns,
                    self.carves
                );
                Step::Done
            }
        }
    }

    fn next_step(&mut self) -> &WallGrid {
        self.step_generation();
        &self.grid
    }

    fn generate_maze(&mut self) -> &WallGrid {
        while !self.done {
            self.step_generation();
        }

        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn seeded(rows: usize, cols: usize, seed: u64) -> RecursiveBacktracker<StdRng> {
        RecursiveBacktracker::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn starts_in_the_visited_corner() {
        let generator = seeded(4, 4, 1);
        assert_eq!(generator.current(), (0, 0));
        assert!(generator.grid().get_cell(0, 0).visited);
        assert!(generator.history().is_empty());
        assert!(!generator.is_done());
    }

    #[test]
    fn carve_pushes_the_cell_it_leaves() {
        let mut generator = seeded(3, 3, 1);
        let to = generator.carve(Direction::Bottom);

        assert_eq!(to, (1, 0));
        assert_eq!(generator.current(), (1, 0));
        assert_eq!(generator.history(), &[(0, 0)]);
        assert_eq!(generator.carves(), 1);
        assert!(!generator.grid().get_cell(0, 0).has_wall(Direction::Bottom));
        assert!(!generator.grid().get_cell(1, 0).has_wall(Direction::Top));
    }

    #[test]
    fn single_cell_is_done_at_once() {
        let mut generator = seeded(1, 1, 7);
        assert_eq!(generator.step_generation(), Step::Done);
        assert!(generator.is_done());
        assert_eq!(generator.carves(), 0);
    }

    #[test]
    fn two_cells_take_one_carve() {
        let mut generator = seeded(1, 2, 7);
        assert_eq!(
            generator.step_generation(),
            Step::Carved {
                from: (0, 0),
                to: (0, 1),
                direction: Direction::Right
            }
        );
        assert_eq!(generator.step_generation(), Step::Done);
        assert_eq!(generator.carves(), 1);

        let grid = generator.grid();
        assert!(!grid.get_cell(0, 0).has_wall(Direction::Right));
        assert!(!grid.get_cell(0, 1).has_wall(Direction::Left));
    }

    #[test]
    fn backtrack_removes_only_the_matched_entry() {
        let mut generator = seeded(3, 3, 3);
        // (0,0) -> (1,0) -> (1,1) -> (1,2) -> (0,2) -> (0,1) ends in a dead end
        generator.carve(Direction::Bottom);
        generator.carve(Direction::Right);
        generator.carve(Direction::Right);
        generator.carve(Direction::Top);
        generator.carve(Direction::Left);
        assert_eq!(
            generator.history(),
            &[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]
        );

        // (0,2) is exhausted and gets scanned past, (1,2) can still reach (2,2)
        assert_eq!(generator.step_generation(), Step::Backtracked { to: (1, 2) });
        assert_eq!(generator.history(), &[(0, 0), (1, 0), (1, 1), (0, 2)]);
        assert!(matches!(
            generator.step_generation(),
            Step::Carved {
                to: (2, 2),
                direction: Direction::Bottom,
                ..
            }
        ));
    }

    #[test]
    fn hand_walk_finishes_as_spanning_tree() {
        let mut generator = seeded(3, 3, 3);
        generator.carve(Direction::Right);
        generator.carve(Direction::Bottom);
        generator.carve(Direction::Left);
        generator.carve(Direction::Bottom);
        generator.carve(Direction::Right);
        generator.carve(Direction::Right);
        generator.carve(Direction::Top);
        assert_eq!(generator.current(), (1, 2));

        // (0,2) is the only cell left and sits right above
        assert_eq!(
            generator.step_generation(),
            Step::Carved {
                from: (1, 2),
                to: (0, 2),
                direction: Direction::Top
            }
        );
        assert_eq!(generator.step_generation(), Step::Done);
        assert_eq!(generator.carves(), 8);
        assert!(generator.grid().is_spanning_tree());
    }

    #[test]
    fn jumps_back_when_stuck() {
        let mut generator = seeded(2, 3, 3);
        // (0,0) -> (0,1) -> (1,1) -> (1,0) is a dead end; (1,1) can still go right
        generator.carve(Direction::Right);
        generator.carve(Direction::Bottom);
        generator.carve(Direction::Left);
        assert_eq!(generator.history(), &[(0, 0), (0, 1), (1, 1)]);

        assert_eq!(generator.step_generation(), Step::Backtracked { to: (1, 1) });
        assert_eq!(generator.current(), (1, 1));
        assert_eq!(generator.history(), &[(0, 0), (0, 1)]);
    }

    #[test]
    fn stays_done() {
        let mut generator = seeded(3, 4, 11);
        let before = generator.generate_maze().clone();
        let current = generator.current();

        for _ in 0..5 {
            assert_eq!(generator.step_generation(), Step::Done);
        }
        assert_eq!(generator.grid(), &before);
        assert_eq!(generator.current(), current);
    }
}
