mod cost;
mod properties;

use crate::Maze;

/// Builds a maze from one string per row in the `text` format.
fn maze_from_strings(strings: &[&str]) -> Maze {
    crate::text::parse(&strings.join("\n")).unwrap()
}
