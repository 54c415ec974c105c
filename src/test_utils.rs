use itertools::Itertools;

use crate::glyph::GLYPH_WIDTH;
use crate::graph::{Direction, Graph};

/// Grid with every interior passage carved
pub(crate) fn open_grid(length: usize, height: usize) -> Graph {
    let mut graph = Graph::new(length, height).expect("valid dimensions");
    for id in 0..length * height {
        for direction in [Direction::East, Direction::South] {
            let has_neighbor = graph
                .cell(id)
                .and_then(|cell| cell.neighbors.get(direction))
                .is_some();
            if has_neighbor {
                graph.carve(id, direction).unwrap();
            }
        }
    }
    graph
}

/// Split rendered text into rows of glyphs
pub(crate) fn glyph_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .chunks(GLYPH_WIDTH)
                .into_iter()
                .map(|glyph| glyph.collect::<String>())
                .collect()
        })
        .collect()
}
