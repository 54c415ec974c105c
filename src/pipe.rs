//! Pipe style: one glyph per cell, drawn along its open passages

use tracing::{debug, instrument};

use crate::glyph::{glyph, GLYPH_WIDTH};
use crate::graph::Graph;
use crate::RenderOptions;

/// Render the maze as corridors, one glyph per cell
///
/// Cells are visited in row-major order and each row ends with a line
/// break. The output has `height` lines of `length` glyphs.
///
/// # Examples
/// ```
/// use unicode_tetragon::{render_pipe, Direction, Graph, RenderOptions};
///
/// let mut graph = Graph::new(2, 1).unwrap();
/// graph.carve(0, Direction::East).unwrap();
/// assert_eq!(render_pipe(&graph, &RenderOptions::default()), "╶─╴ \n");
/// ```
#[instrument(skip_all)]
pub fn render_pipe(graph: &Graph, options: &RenderOptions) -> String {
    let (length, height) = graph.dimensions();
    debug!(length, height, "Rendering pipe maze");

    // Box-drawing characters are three bytes in UTF-8
    let mut graphic = String::with_capacity(height * (length * GLYPH_WIDTH * 3 + 1) + 1);
    if options.leading_newline {
        graphic.push('\n');
    }

    for cell in graph.data() {
        graphic.push_str(glyph(cell.passages));

        let (column, _) = graph.find_coordinates(cell.id);
        if column == length - 1 {
            graphic.push('\n');
        }
    }
    graphic
}
