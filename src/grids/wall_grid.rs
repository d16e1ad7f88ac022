use std::collections::VecDeque;

use crate::config::Config;
use crate::grids::{Dimensions, Direction, Neighborhood, Position, Walls};
use crate::renderer::{Canvas, Vertex, BACKGROUND, VISITED, WALL, WALL_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
    pub walls: Walls,
    pub visited: bool,
}

impl Cell {
    pub fn new(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            walls: Walls::all(),
            visited: false,
        }
    }

    /// x of the top-left corner in pixels
    pub fn x(&self, cell_size: u32) -> u32 {
        self.column as u32 * cell_size
    }

    /// y of the top-left corner in pixels
    pub fn y(&self, cell_size: u32) -> u32 {
        self.row as u32 * cell_size
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.contains(dir.wall())
    }
}

/// Grid of cells that each carry their own four walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(rows: usize, columns: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| Cell::new(column, row)))
            .collect();

        Self {
            cells,
            dims: Dimensions { rows, columns },
        }
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.dims.rows && column < self.dims.columns,
            "cell ({}, {}) is outside a {}x{} grid",
            row,
            column,
            self.dims.rows,
            self.dims.columns
        );
        (self.dims.columns * row) + column
    }

    #[inline]
    pub fn get_cell(&self, row: usize, column: usize) -> &Cell {
        &self.cells[self.index_of(row, column)]
    }

    #[inline]
    fn cell_mut(&mut self, (row, column): Position) -> &mut Cell {
        let index = self.index_of(row, column);
        &mut self.cells[index]
    }

    /// row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn visit(&mut self, position: Position) {
        self.cell_mut(position).visited = true;
    }

    pub fn neighbor_of(&self, (row, column): Position, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Top if row > 0 => Some((row - 1, column)),
            Direction::Right if column + 1 < self.dims.columns => Some((row, column + 1)),
            Direction::Bottom if row + 1 < self.dims.rows => Some((row + 1, column)),
            Direction::Left if column > 0 => Some((row, column - 1)),
            _ => None,
        }
    }

    /// Directions from (row, column) that lead to an in-bounds cell not visited yet.
    pub fn unvisited_neighbors(&self, row: usize, column: usize) -> Neighborhood {
        let mut neighbors = Neighborhood::new();

        for dir in Direction::ALL {
            if let Some((n_row, n_col)) = self.neighbor_of((row, column), dir) {
                if !self.get_cell(n_row, n_col).visited {
                    neighbors.push(dir);
                }
            }
        }

        neighbors
    }

    /// Knocks down the wall shared with the neighbor in `direction`, on both sides,
    /// and marks that neighbor visited. Returns the neighbor.
    ///
    /// Panics if there is no such neighbor or it was visited already; either would
    /// break the tree shape of the maze.
    pub fn clear_wall_between(&mut self, position: Position, direction: Direction) -> Position {
        let neighbor = match self.neighbor_of(position, direction) {
            Some(neighbor) => neighbor,
            None => panic!(
                "no neighbor {:?} of cell {:?} in a {}x{} grid",
                direction, position, self.dims.rows, self.dims.columns
            ),
        };
        assert!(
            !self.get_cell(neighbor.0, neighbor.1).visited,
            "neighbor {:?} of cell {:?} was already visited",
            neighbor,
            position
        );

        self.cell_mut(position).walls.remove(direction.wall());
        let next = self.cell_mut(neighbor);
        next.walls.remove((-direction).wall());
        next.visited = true;

        neighbor
    }

    /// Number of interior walls that have been knocked down.
    pub fn passages(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let pos = (cell.row, cell.column);
                [Direction::Right, Direction::Bottom]
                    .iter()
                    .filter(|&&dir| self.neighbor_of(pos, dir).is_some() && !cell.has_wall(dir))
                    .count()
            })
            .sum()
    }

    /// Every cell reachable from the corner and no loops.
    pub fn is_spanning_tree(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        if self.passages() != self.len() - 1 {
            return false;
        }

        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back((0, 0));

        let mut reached = 1;
        while let Some(pos) = queue.pop_front() {
            let cell = self.get_cell(pos.0, pos.1);
            for dir in Direction::ALL {
                if cell.has_wall(dir) {
                    continue;
                }
                if let Some(next) = self.neighbor_of(pos, dir) {
                    let index = self.index_of(next.0, next.1);
                    if !seen[index] {
                        seen[index] = true;
                        reached += 1;
                        queue.push_back(next);
                    }
                }
            }
        }

        reached == self.len()
    }

    /// Every wall flag agrees with the one facing it from the other side.
    pub fn walls_are_symmetric(&self) -> bool {
        self.cells.iter().all(|cell| {
            Direction::ALL.iter().all(|&dir| {
                match self.neighbor_of((cell.row, cell.column), dir) {
                    Some((row, column)) => {
                        cell.has_wall(dir) == self.get_cell(row, column).has_wall(-dir)
                    }
                    None => true,
                }
            })
        })
    }

    pub fn render(&self, config: &Config) -> Vec<Vertex> {
        let mut canvas = Canvas::new(config.width() as f32, config.height() as f32);
        canvas.clear(BACKGROUND);

        let size = config.cell_size as f32;
        for cell in &self.cells {
            let x = cell.x(config.cell_size) as f32;
            let y = cell.y(config.cell_size) as f32;

            if cell.visited {
                canvas.fill_rect(x, y, size, size, VISITED);
            }
            if cell.has_wall(Direction::Top) {
                canvas.line((x, y), (x + size, y), WALL_WIDTH, WALL);
            }
            if cell.has_wall(Direction::Bottom) {
                canvas.line((x, y + size), (x + size, y + size), WALL_WIDTH, WALL);
            }
            if cell.has_wall(Direction::Right) {
                canvas.line((x + size, y + size), (x + size, y), WALL_WIDTH, WALL);
            }
            if cell.has_wall(Direction::Left) {
                canvas.line((x, y + size), (x, y), WALL_WIDTH, WALL);
            }
        }

        canvas.into_vertices()
    }
}
