pub mod backtrack;
pub mod fresh;

use crate::config::Config;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Direction, Position};

use backtrack::RecursiveBacktracker;
use fresh::FreshGrid;

/// What a single call to `step_generation` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Carved {
        from: Position,
        to: Position,
        direction: Direction,
    },
    Backtracked {
        to: Position,
    },
    /// grid was replaced wholesale
    Reset,
    Done,
}

pub trait Generator {
    fn step_generation(&mut self) -> Step;
    fn next_step(&mut self) -> &WallGrid;
    fn generate_maze(&mut self) -> &WallGrid;
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Backtracker,
    FreshGrid,
}

pub fn new_generator(kind: GeneratorKind, config: &Config) -> Box<dyn Generator> {
    match kind {
        GeneratorKind::Backtracker => {
            Box::new(RecursiveBacktracker::new(config.rows, config.columns))
        }
        GeneratorKind::FreshGrid => Box::new(FreshGrid::new(config.rows, config.columns)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_build_matching_grids() {
        let config = Config::new(8, 5, 3, 60).unwrap();

        let backtracker = new_generator(GeneratorKind::Backtracker, &config);
        assert_eq!(backtracker.grid().dims.rows, 3);
        assert_eq!(backtracker.grid().dims.columns, 5);
        assert!(!backtracker.is_done());

        let fresh = new_generator(GeneratorKind::FreshGrid, &config);
        assert_eq!(fresh.grid().len(), 15);
        assert!(fresh.is_done());
    }

    #[test]
    fn boxed_backtracker_runs_to_completion() {
        let config = Config::new(8, 6, 4, 60).unwrap();
        let mut generator = new_generator(GeneratorKind::Backtracker, &config);

        let grid = generator.generate_maze();
        assert!(grid.is_spanning_tree());
        assert!(generator.is_done());
        assert_eq!(generator.step_generation(), Step::Done);
    }
}
