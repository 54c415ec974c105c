//! Draw rectangular mazes with Unicode box-drawing characters
//!
//! A maze is a [Graph] of cells, each knowing which of its four neighbors it
//! has a passage to. There are two ways to draw it:
//!
//! - [Style::Pipe] draws one glyph per cell along its open passages. The
//!   maze is walked along the lines.
//! - [Style::Edge] draws one glyph per corner between cells, along the walls.
//!   This is the traditional look; the maze is walked between the lines.
//!
//! Both styles pick their characters from the same table, see [glyph()].
//!
//! # Examples
//! ## A 3x2 maze in both styles
//! ```
//! use unicode_tetragon::{render, Direction, Graph, RenderOptions, Style};
//!
//! let mut graph = Graph::new(3, 2).unwrap();
//! graph.carve(0, Direction::East).unwrap();
//! graph.carve(1, Direction::East).unwrap();
//! graph.carve(2, Direction::South).unwrap();
//! graph.carve(5, Direction::West).unwrap();
//! graph.carve(4, Direction::West).unwrap();
//!
//! let options = RenderOptions::default();
//! assert_eq!(
//!     render(&graph, Style::Pipe, &options),
//!     "\
//! ╶───┐ \n\
//! ╶───┘ \n"
//! );
//! assert_eq!(
//!     render(&graph, Style::Edge, &options),
//!     "\
//! ┌─────┐ \n\
//! ├───╴ │ \n\
//! └─────┘ \n"
//! );
//! ```

use tracing::instrument;

mod edge;
mod glyph;
mod graph;
#[cfg(feature = "mapgen")]
pub mod maze_generator;
mod pipe;
#[cfg(test)]
mod test_utils;

pub use edge::render_edge;
pub use glyph::{glyph, GLYPH_WIDTH};
pub use graph::{Cell, CellId, Direction, Graph, Neighbors, Passages};
pub use pipe::render_pipe;

/// How to draw the maze
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    /// One glyph per cell, following the passages
    Pipe,
    /// One glyph per cell corner, following the walls
    #[default]
    Edge,
}

/// Output layout settings shared by both styles
///
/// Every row is terminated by a line break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Start the drawing with an extra line break
    pub leading_newline: bool,
}

/// Render the maze in the given style
#[instrument(skip(graph, options))]
pub fn render(graph: &Graph, style: Style, options: &RenderOptions) -> String {
    match style {
        Style::Pipe => render_pipe(graph, options),
        Style::Edge => render_edge(graph, options),
    }
}
