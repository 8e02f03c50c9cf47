//! **treemaze** generates random perfect mazes, renders them as text and solves mazes read back
//! from that text.

// error_chain! expands deeply.
#![recursion_limit = "1024"]

pub mod cells;
pub mod errors;
pub mod generators;
pub mod glyphs;
pub mod grid;
pub mod grid_displays;
pub mod maze;
pub mod pathing;
pub mod text_parser;
pub mod units;
pub mod utils;

pub use crate::errors::{Error, ErrorKind, Result, ResultExt};
pub use crate::maze::Maze;
pub use crate::pathing::MazeSolver;
