//! Box-drawing glyph for a four-direction passage vector
//!
//! Both render styles go through [glyph()]. The pipe renderer feeds cell
//! passages, the edge renderer feeds the walls meeting at a lattice vertex.

use crate::graph::Passages;

/// Width of every glyph in `char`s
///
/// Horizontal strokes span two terminal columns, which keeps the drawing
/// roughly square in a monospace font.
pub const GLYPH_WIDTH: usize = 2;

/// Glyph with a line stroke in each direction that is `true`
///
/// # Examples
/// ```
/// use unicode_tetragon::{glyph, Passages};
///
/// let corner = Passages { south: true, east: true, ..Passages::CLOSED };
/// assert_eq!(glyph(corner), "┌─");
/// assert_eq!(glyph(Passages::CLOSED), "  ");
/// ```
pub fn glyph(passages: Passages) -> &'static str {
    let Passages {
        north,
        south,
        east,
        west,
    } = passages;

    match (north, south, east, west) {
        // four
        (true, true, true, true) => "┼─",

        // three
        (false, true, true, true) => "┬─",
        (true, false, true, true) => "┴─",
        (true, true, false, true) => "┤ ",
        (true, true, true, false) => "├─",

        // two
        (true, true, false, false) => "│ ",
        (true, false, true, false) => "└─",
        (true, false, false, true) => "┘ ",
        (false, true, true, false) => "┌─",
        (false, true, false, true) => "┐ ",
        (false, false, true, true) => "──",

        // one
        (true, false, false, false) => "╵ ",
        (false, true, false, false) => "╷ ",
        (false, false, true, false) => "╶─",
        (false, false, false, true) => "╴ ",

        (false, false, false, false) => "  ",
    }
}
