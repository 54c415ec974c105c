//! Edge style: one glyph per lattice vertex, drawn along the walls
//!
//! A vertex is the corner shared by up to four cells. Looking at the cells
//! around it (northwest, northeast, southwest, southeast) we decide for each
//! of the four strokes leaving the vertex whether a wall runs there:
//!
//! ```text
//!     nw │ ne
//!   ─────┼─────
//!     sw │ se
//! ```
//!
//! The north stroke separates `nw` from `ne`, so it disappears when those two
//! cells are joined by an east/west passage. The west stroke separates `nw`
//! from `sw` and disappears when they are joined north/south, and so on.
//! Outside the grid there is nothing to separate, so strokes between two
//! void cells are never drawn.

use itertools::iproduct;
use tracing::{debug, instrument, trace};

use crate::glyph::{glyph, GLYPH_WIDTH};
use crate::graph::{Cell, CellId, Direction, Graph, Passages};
use crate::RenderOptions;

/// Cell ids with one ring of void cells around the grid
///
/// Indexed `[row][column]`; `None` marks a position outside the maze.
struct PaddedLattice {
    slots: Vec<Vec<Option<CellId>>>,
}

/// The four cells around a vertex
#[derive(Debug)]
struct Quadrants<'a> {
    nw: Option<&'a Cell>,
    ne: Option<&'a Cell>,
    sw: Option<&'a Cell>,
    se: Option<&'a Cell>,
}

impl PaddedLattice {
    fn new(graph: &Graph) -> Self {
        let (length, height) = graph.dimensions();
        let slots = (0..height + 2)
            .map(|row| {
                (0..length + 2)
                    .map(|column| {
                        if row == 0 || column == 0 {
                            None
                        } else {
                            graph.find_id(column - 1, row - 1)
                        }
                    })
                    .collect()
            })
            .collect();
        PaddedLattice { slots }
    }

    /// Cells around the vertex at the top-left corner of padded `(row, column)`
    ///
    /// Vertex `(row, column)` in output space sits between padded rows `row`
    /// and `row + 1`, and padded columns `column` and `column + 1`.
    fn quadrants<'a>(&self, graph: &'a Graph, row: usize, column: usize) -> Quadrants<'a> {
        let lookup = |r: usize, c: usize| self.slots[r][c].and_then(|id| graph.cell(id));
        Quadrants {
            nw: lookup(row, column),
            ne: lookup(row, column + 1),
            sw: lookup(row + 1, column),
            se: lookup(row + 1, column + 1),
        }
    }
}

impl Quadrants<'_> {
    fn is_void(&self) -> bool {
        self.nw.is_none() && self.ne.is_none() && self.sw.is_none() && self.se.is_none()
    }

    /// Walls leaving the vertex
    fn walls(&self) -> Passages {
        Passages {
            north: !hallway(self.nw, self.ne, Direction::East),
            south: !hallway(self.sw, self.se, Direction::East),
            east: !hallway(self.ne, self.se, Direction::South),
            west: !hallway(self.nw, self.sw, Direction::South),
        }
    }
}

/// Whether cells `a` and `b` are open to each other
///
/// `b` lies in `direction` from `a`. Two void cells count as open, which
/// leaves the outside of the maze free of strokes. A real cell facing the
/// void is always walled off. Two real cells need to be each other's
/// neighbors with both facing passages open.
fn hallway(a: Option<&Cell>, b: Option<&Cell>, direction: Direction) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.neighbors.get(direction) == Some(b.id)
                && b.neighbors.get(direction.opposite()) == Some(a.id)
                && a.passages.get(direction)
                && b.passages.get(direction.opposite())
        }
        _ => false,
    }
}

/// Render the maze as walls, one glyph per lattice vertex
///
/// The output has `height + 1` lines of `length + 1` glyphs, each line
/// terminated by a line break.
///
/// # Examples
/// ```
/// use unicode_tetragon::{render_edge, Graph, RenderOptions};
///
/// let graph = Graph::new(2, 1).unwrap();
/// assert_eq!(
///     render_edge(&graph, &RenderOptions::default()),
///     "┌─┬─┐ \n└─┴─┘ \n"
/// );
/// ```
#[instrument(skip_all)]
pub fn render_edge(graph: &Graph, options: &RenderOptions) -> String {
    let (length, height) = graph.dimensions();
    debug!(length, height, "Rendering edge maze");

    let lattice = PaddedLattice::new(graph);

    let mut graphic =
        String::with_capacity((height + 1) * ((length + 1) * GLYPH_WIDTH * 3 + 1) + 1);
    if options.leading_newline {
        graphic.push('\n');
    }

    for (row, column) in iproduct!(0..=height, 0..=length) {
        let quadrants = lattice.quadrants(graph, row, column);
        if !quadrants.is_void() {
            let walls = quadrants.walls();
            trace!(row, column, ?walls, "Vertex walls");
            graphic.push_str(glyph(walls));
        }

        if column == length {
            graphic.push('\n');
        }
    }
    graphic
}

#[cfg(test)]
mod tests {
    use crate::edge::{hallway, render_edge, PaddedLattice};
    use crate::graph::{Direction, Graph};
    use crate::test_utils::{glyph_rows, open_grid};
    use crate::RenderOptions;

    fn render(graph: &Graph) -> String {
        render_edge(graph, &RenderOptions::default())
    }

    #[test]
    fn padded_lattice_has_void_ring() {
        let graph = Graph::new(3, 2).unwrap();
        let lattice = PaddedLattice::new(&graph);

        assert_eq!(lattice.slots.len(), 4);
        assert!(lattice.slots.iter().all(|row| row.len() == 5));
        assert_eq!(lattice.slots[0], vec![None; 5]);
        assert_eq!(lattice.slots[3], vec![None; 5]);
        assert_eq!(lattice.slots[1], vec![None, Some(0), Some(1), Some(2), None]);
        assert_eq!(lattice.slots[2], vec![None, Some(3), Some(4), Some(5), None]);
    }

    #[test]
    fn single_closed_cell() {
        let graph = Graph::new(1, 1).unwrap();
        assert_eq!(render(&graph), "┌─┐ \n└─┘ \n");

        let legacy = RenderOptions {
            leading_newline: true,
        };
        assert_eq!(render_edge(&graph, &legacy), "\n┌─┐ \n└─┘ \n");
    }

    #[test]
    fn rows_and_columns_match_dimensions() {
        for (length, height) in [(1, 1), (1, 4), (4, 1), (5, 3), (7, 7)] {
            for graph in [Graph::new(length, height).unwrap(), open_grid(length, height)] {
                let rows = glyph_rows(&render(&graph));
                assert_eq!(rows.len(), height + 1);
                assert!(rows.iter().all(|row| row.len() == length + 1));
            }
        }
    }

    #[test]
    fn open_passage_between_side_by_side_cells() {
        let mut graph = Graph::new(2, 1).unwrap();
        graph.carve(0, Direction::East).unwrap();

        let rows = glyph_rows(&render(&graph));
        // The shared vertices lose the stroke that separated the two cells
        assert_eq!(rows[0][1], "──");
        assert_eq!(rows[1][1], "──");
        assert_eq!(render(&graph), "┌───┐ \n└───┘ \n");
    }

    #[test]
    fn open_passage_between_stacked_cells() {
        let mut graph = Graph::new(1, 2).unwrap();
        graph.carve(0, Direction::South).unwrap();
        assert_eq!(render(&graph), "┌─┐ \n│ │ \n└─┘ \n");
    }

    #[test]
    fn fully_closed_grid_has_all_walls_inside() {
        let graph = Graph::new(3, 3).unwrap();
        assert_eq!(
            render(&graph),
            "┌─┬─┬─┐ \n├─┼─┼─┤ \n├─┼─┼─┤ \n└─┴─┴─┘ \n"
        );
    }

    #[test]
    fn fully_open_grid_keeps_only_the_border() {
        let graph = open_grid(3, 3);
        let rows = glyph_rows(&render(&graph));

        for row in 1..3 {
            for column in 1..3 {
                assert_eq!(rows[row][column], "  ");
            }
        }
        assert_eq!(rows[0], vec!["┌─", "──", "──", "┐ "]);
        assert_eq!(rows[1], vec!["│ ", "  ", "  ", "│ "]);
        assert_eq!(rows[3], vec!["└─", "──", "──", "┘ "]);
    }

    #[test]
    fn adjacency_alone_is_not_a_hallway() {
        let mut graph = Graph::new(2, 1).unwrap();
        // One-sided passage: the neighbor does not open back
        graph.carve(0, Direction::East).unwrap();
        let mut cells = graph.data().to_vec();
        cells[1].passages.west = false;
        let graph = Graph::from_cells((2, 1), cells).unwrap();

        let [a, b] = [graph.cell(0), graph.cell(1)];
        assert!(!hallway(a, b, Direction::East));
        assert_eq!(render(&graph), "┌─┬─┐ \n└─┴─┘ \n");
    }

    #[test]
    fn open_passages_without_neighbor_link_stay_walled() {
        let mut cells = Graph::new(2, 1).unwrap().data().to_vec();
        cells[0].passages.east = true;
        cells[1].passages.west = true;
        cells[0].neighbors.east = None;
        cells[1].neighbors.west = None;
        let graph = Graph::from_cells((2, 1), cells).unwrap();

        assert_eq!(render(&graph), "┌─┬─┐ \n└─┴─┘ \n");
    }

    #[test]
    fn void_meets_void_as_hallway() {
        assert!(hallway(None, None, Direction::East));
        let graph = Graph::new(1, 1).unwrap();
        assert!(!hallway(graph.cell(0), None, Direction::South));
        assert!(!hallway(None, graph.cell(0), Direction::East));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut graph = open_grid(5, 4);
        graph.close(7, Direction::South).unwrap();
        graph.close(13, Direction::West).unwrap();
        assert_eq!(render(&graph), render(&graph));
    }

    #[test]
    fn closing_a_passage_only_touches_its_vertices() {
        let mut graph = open_grid(4, 4);
        let before = glyph_rows(&render(&graph));
        // Cell 5 sits at column 1, row 1; its east wall runs between
        // vertices (1, 2) and (2, 2)
        graph.close(5, Direction::East).unwrap();
        let after = glyph_rows(&render(&graph));

        let changed: Vec<(usize, usize)> = (0..5)
            .flat_map(|row| (0..5).map(move |column| (row, column)))
            .filter(|&(row, column)| before[row][column] != after[row][column])
            .collect();
        assert_eq!(changed, vec![(1, 2), (2, 2)]);
        assert_eq!(after[1][2], "╷ ");
        assert_eq!(after[2][2], "╵ ");
    }
}
