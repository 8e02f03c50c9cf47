use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::errors::*;
use crate::glyphs::{Glyph, GlyphGrid};
use crate::text_parser::parse_maze_text;

/// A glyph on the search stack and the next direction to try from it.
#[derive(Debug)]
struct SearchFrame {
    coord: Cartesian2DCoordinate,
    next_direction: usize,
}

/// Depth first search for a route of open glyphs from the entrance to the exit.
///
/// Glyphs on the current route are marked as `Glyph::Path`. From each glyph the directions are
/// tried in the order up, right, down, left, moving to the first open neighbour; a glyph with no
/// way onward is put back to `Glyph::Open` and the search backs up. The first route to reach
/// the exit wins, which need not be the shortest.
///
/// Returns the route from entrance to exit, left marked on the grid. On failure every glyph the
/// search marked has been reverted and None is returned. An entrance that is missing or not
/// open means there is no route.
pub fn solve_depth_first(glyphs: &mut GlyphGrid) -> Option<Vec<Cartesian2DCoordinate>> {
    let entrance = glyphs.entrance()?;
    let exit = glyphs.exit()?;
    if glyphs.get(entrance) != Some(Glyph::Open) {
        return None;
    }

    glyphs.set(entrance, Glyph::Path);
    let mut stack = vec![SearchFrame { coord: entrance, next_direction: 0 }];

    while let Some(frame) = stack.last_mut() {
        if frame.coord == exit {
            return Some(stack.iter().map(|frame| frame.coord).collect());
        }

        let mut onward = None;
        while frame.next_direction < CompassPrimary::ALL.len() {
            let dir = CompassPrimary::ALL[frame.next_direction];
            frame.next_direction += 1;
            if let Some(neighbour) = frame.coord.offset(dir) {
                if glyphs.get(neighbour) == Some(Glyph::Open) {
                    onward = Some(neighbour);
                    break;
                }
            }
        }

        match onward {
            Some(neighbour) => {
                glyphs.set(neighbour, Glyph::Path);
                stack.push(SearchFrame { coord: neighbour, next_direction: 0 });
            }
            None => {
                // Dead end
                glyphs.set(frame.coord, Glyph::Open);
                stack.pop();
            }
        }
    }

    None
}

/// A maze read back from text and solved on construction.
///
/// `Display` shows the maze with the route drawn in `"+ "` glyphs.
#[derive(Debug, Clone)]
pub struct MazeSolver {
    glyphs: GlyphGrid,
    path: Option<Vec<Cartesian2DCoordinate>>,
}

impl MazeSolver {
    pub fn new(mut glyphs: GlyphGrid) -> MazeSolver {
        let path = solve_depth_first(&mut glyphs);
        match path {
            Some(ref route) => debug!("maze solved, route of {} glyphs", route.len()),
            None => debug!("maze has no route from entrance to exit"),
        }
        MazeSolver { glyphs, path }
    }

    pub fn from_text(text: &str) -> Result<MazeSolver> {
        Ok(MazeSolver::new(parse_maze_text(text)?))
    }

    /// Read, parse and solve a maze text file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MazeSolver> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .chain_err(|| ErrorKind::MazeFileUnavailable(path.display().to_string()))?;
        MazeSolver::from_text(&text)
    }

    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// The route from entrance to exit in glyph coordinates, if there is one.
    pub fn path(&self) -> Option<&[Cartesian2DCoordinate]> {
        self.path.as_ref().map(|route| route.as_slice())
    }

    pub fn glyphs(&self) -> &GlyphGrid {
        &self.glyphs
    }
}

impl fmt::Display for MazeSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyphs)
    }
}
