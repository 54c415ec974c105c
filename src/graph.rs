//! Cell graph consumed by the renderers

use anyhow::{anyhow, bail, ensure, Context};

/// Row-major cell index, `row * length + column`
pub type CellId = usize;

/// Cardinal direction out of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Direction pointing back at the cell we came from
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Open/closed state in each of the four directions
///
/// For cells this is the passage state. The edge renderer reuses the same
/// vector to describe which directions carry a wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Passages {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Passages {
    pub const CLOSED: Passages = Passages {
        north: false,
        south: false,
        east: false,
        west: false,
    };
    pub const OPEN: Passages = Passages {
        north: true,
        south: true,
        east: true,
        west: true,
    };

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, open: bool) {
        match direction {
            Direction::North => self.north = open,
            Direction::South => self.south = open,
            Direction::East => self.east = open,
            Direction::West => self.west = open,
        }
    }

    /// Number of open directions
    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|d| self.get(**d)).count()
    }
}

/// Adjacent cells; `None` at the grid boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub north: Option<CellId>,
    pub south: Option<CellId>,
    pub east: Option<CellId>,
    pub west: Option<CellId>,
}

impl Neighbors {
    pub fn get(&self, direction: Direction) -> Option<CellId> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, id: Option<CellId>) {
        match direction {
            Direction::North => self.north = id,
            Direction::South => self.south = id,
            Direction::East => self.east = id,
            Direction::West => self.west = id,
        }
    }
}

/// One grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: CellId,
    pub passages: Passages,
    pub neighbors: Neighbors,
}

/// Rectangular maze, cells stored in row-major order
///
/// A `Graph` that exists is well-formed: dimensions are non-zero and cell
/// ids match their position. Renderers rely on this and never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    length: usize,
    height: usize,
    data: Vec<Cell>,
}

impl Graph {
    /// Create a `length` x `height` grid with every passage closed
    ///
    /// Neighbor relations are set for every pair of adjacent cells.
    ///
    /// # Examples
    /// ```
    /// use unicode_tetragon::{Direction, Graph};
    ///
    /// let graph = Graph::new(3, 2).unwrap();
    /// assert_eq!(graph.dimensions(), (3, 2));
    /// assert_eq!(graph.cell(4).unwrap().neighbors.get(Direction::North), Some(1));
    /// assert_eq!(graph.cell(4).unwrap().neighbors.get(Direction::South), None);
    /// ```
    pub fn new(length: usize, height: usize) -> anyhow::Result<Self> {
        let size = Self::cell_count(length, height)?;

        let data = (0..size)
            .map(|id| {
                let (column, row) = (id % length, id / length);
                let mut neighbors = Neighbors::default();
                neighbors.set(Direction::North, (row > 0).then(|| id - length));
                neighbors.set(Direction::South, (row + 1 < height).then(|| id + length));
                neighbors.set(Direction::East, (column + 1 < length).then(|| id + 1));
                neighbors.set(Direction::West, (column > 0).then(|| id - 1));
                Cell {
                    id,
                    passages: Passages::CLOSED,
                    neighbors,
                }
            })
            .collect();

        Ok(Graph {
            length,
            height,
            data,
        })
    }

    /// Build a graph from cells supplied by an external generator
    ///
    /// - `dimensions`: `(length, height)` in cells.
    /// - `cells`: Cells in row-major order, `cells[i].id == i`.
    ///
    /// Returns error, if dimensions are zero, the cell count does not match,
    /// cells are out of order or a neighbor points outside the grid.
    /// Neighbor relations are trusted to be mutual.
    pub fn from_cells(dimensions: (usize, usize), cells: Vec<Cell>) -> anyhow::Result<Self> {
        let (length, height) = dimensions;
        let size = Self::cell_count(length, height)?;
        if cells.len() != size {
            bail!(
                "Expected {} cells for a {}x{} maze, got {}",
                size,
                length,
                height,
                cells.len()
            );
        }

        for (position, cell) in cells.iter().enumerate() {
            if cell.id != position {
                bail!(
                    "Cells are not in row-major order: id {} at position {}",
                    cell.id,
                    position
                );
            }
            for direction in Direction::ALL {
                if let Some(neighbor) = cell.neighbors.get(direction) {
                    ensure!(
                        neighbor < size,
                        "Cell {} has {:?} neighbor {} outside the maze",
                        cell.id,
                        direction,
                        neighbor
                    );
                }
            }
        }

        Ok(Graph {
            length,
            height,
            data: cells,
        })
    }

    /// Number of cells in a `length` x `height` maze
    ///
    /// Returns error, if a dimension is zero or the maze, including the ring
    /// of void cells drawn around it, does not fit in `usize`.
    fn cell_count(length: usize, height: usize) -> anyhow::Result<usize> {
        ensure!(
            length > 0 && height > 0,
            "Maze dimensions must be non-zero, got {}x{}",
            length,
            height
        );
        let padded_length = length
            .checked_add(2)
            .with_context(|| format!("Maze length {} is too large", length))?;
        let padded_height = height
            .checked_add(2)
            .with_context(|| format!("Maze height {} is too large", height))?;
        padded_length
            .checked_mul(padded_height)
            .with_context(|| format!("Maze of {}x{} cells is too large", length, height))?;

        length
            .checked_mul(height)
            .with_context(|| format!("Maze of {}x{} cells is too large", length, height))
    }

    /// Width and height in cells
    pub fn dimensions(&self) -> (usize, usize) {
        (self.length, self.height)
    }

    /// All cells, indexed by id
    pub fn data(&self) -> &[Cell] {
        &self.data
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.data.get(id)
    }

    /// Column and row of a cell id
    pub fn find_coordinates(&self, id: CellId) -> (usize, usize) {
        (id % self.length, id / self.length)
    }

    /// Cell id at column and row, if inside the grid
    pub fn find_id(&self, column: usize, row: usize) -> Option<CellId> {
        (column < self.length && row < self.height).then(|| row * self.length + column)
    }

    /// Open a passage from `id` towards `direction`
    ///
    /// The facing passage of the neighbor is opened as well. Returns the
    /// neighbor id, or error if there is no neighbor in that direction.
    pub fn carve(&mut self, id: CellId, direction: Direction) -> anyhow::Result<CellId> {
        self.set_passage(id, direction, true)
    }

    /// Close the passage from `id` towards `direction`, and its counterpart
    pub fn close(&mut self, id: CellId, direction: Direction) -> anyhow::Result<CellId> {
        self.set_passage(id, direction, false)
    }

    fn set_passage(
        &mut self,
        id: CellId,
        direction: Direction,
        open: bool,
    ) -> anyhow::Result<CellId> {
        let cell = self
            .data
            .get(id)
            .ok_or_else(|| anyhow!("Cell {} is not in the maze", id))?;
        let neighbor = cell
            .neighbors
            .get(direction)
            .with_context(|| format!("Cell {} has no neighbor to the {:?}", id, direction))?;

        self.data[id].passages.set(direction, open);
        self.data[neighbor].passages.set(direction.opposite(), open);
        Ok(neighbor)
    }
}
