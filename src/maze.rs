use std::fmt;

use log::debug;
use rand::{self, Rng};

use crate::errors::*;
use crate::generators;
use crate::glyphs::GlyphGrid;
use crate::grid::Grid;
use crate::grid_displays::render_glyphs;

/// A randomly generated perfect maze: exactly one route between any two cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Generate a `width` x `height` maze.
    ///
    /// With `debug` set the maze is printed to stdout every time a wall goes up while it is
    /// being carved.
    pub fn new(width: usize, height: usize, debug: bool) -> Result<Maze> {
        Maze::with_rng(width, height, debug, &mut rand::weak_rng())
    }

    /// Generate a maze using the given random number generator, e.g. a seeded one for
    /// repeatable mazes.
    pub fn with_rng<R: Rng>(width: usize, height: usize, debug: bool, rng: &mut R) -> Result<Maze> {
        let mut grid = Grid::fully_linked(width, height)?;
        if debug {
            generators::recursive_backtracker(&mut grid, rng, |in_progress| {
                println!("{}", in_progress)
            });
        } else {
            generators::recursive_backtracker(&mut grid, rng, |_| {});
        }
        debug!("generated {}x{} maze with {} passages",
               width,
               height,
               grid.links_count().0);

        Ok(Maze { grid })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn glyphs(&self) -> GlyphGrid {
        render_glyphs(&self.grid)
    }

    /// Print the maze to stdout.
    pub fn display(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
