use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::glyphs::{self, Glyph, GlyphGrid};
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

/// Lay the grid out as glyphs.
///
/// Each cell sits on an odd glyph row and column with the walls between cells on the even
/// rows and columns around it, giving a `(2 * height + 1)` x `(2 * width + 1)` glyph grid.
/// The top border is open above the first cell (the entrance) and the bottom row is open
/// below the last cell (the exit), whatever the passages say.
pub fn render_glyphs(grid: &Grid) -> GlyphGrid {
    let (width, height) = (grid.width(), grid.height());
    let rows = RowsCount(height * 2 + 1);
    let columns = ColumnsCount(width * 2 + 1);
    let mut glyphs = GlyphGrid::new(rows, columns, Glyph::Wall);

    glyphs.set(glyphs::entrance_position(), Glyph::Open);
    let exit = glyphs::exit_position(rows, columns);

    // `depth` and `across` index the glyphs inside the top and left borders.
    for depth in 0..height * 2 {
        for across in 0..width * 2 {
            let glyph_coord = Cartesian2DCoordinate::new(across as u32 + 1, depth as u32 + 1);
            let cell = Cartesian2DCoordinate::new((across / 2) as u32, (depth / 2) as u32);

            let glyph = match (depth % 2, across % 2) {
                // Inside a cell
                (0, 0) => Glyph::Open,
                // Between a cell and the cell to its right
                (0, _) => passage_glyph(grid, cell, CompassPrimary::East),
                // Between a cell and the cell below it
                (_, 0) => {
                    if Some(glyph_coord) == exit {
                        Glyph::Open
                    } else {
                        passage_glyph(grid, cell, CompassPrimary::South)
                    }
                }
                // Corner post
                _ => Glyph::Wall,
            };
            glyphs.set(glyph_coord, glyph);
        }
    }

    glyphs
}

fn passage_glyph(grid: &Grid, cell: Cartesian2DCoordinate, direction: CompassPrimary) -> Glyph {
    if grid.is_neighbour_linked(cell, direction) {
        Glyph::Open
    } else {
        Glyph::Wall
    }
}

/// The maze text: one line per glyph row followed by a blank line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", render_glyphs(self))
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;
    use crate::utils::seeded_rng;

    #[test]
    fn single_cell() {
        let g = Grid::fully_linked(1, 1).unwrap();
        let expected = concat!("X   X \n",
                               "X   X \n",
                               "X   X \n",
                               "\n");
        assert_eq!(g.to_string(), expected);
    }

    #[test]
    fn mesh_has_no_inner_walls_but_corner_posts() {
        let g = Grid::fully_linked(2, 2).unwrap();
        let expected = concat!("X   X X X \n",
                               "X       X \n",
                               "X   X   X \n",
                               "X       X \n",
                               "X X X   X \n",
                               "\n");
        assert_eq!(g.to_string(), expected);
    }

    #[test]
    fn unlinked_grid_is_all_walls_bar_entrance_and_exit() {
        let g = Grid::new(3, 1).unwrap();
        let expected = concat!("X   X X X X X \n",
                               "X   X   X   X \n",
                               "X X X X X   X \n",
                               "\n");
        assert_eq!(g.to_string(), expected);
    }

    #[test]
    fn passages_open_the_walls_between_cells() {
        let mut g = Grid::new(2, 2).unwrap();
        g.link(Cartesian2DCoordinate::new(0, 0), CompassPrimary::South).unwrap();
        g.link(Cartesian2DCoordinate::new(0, 1), CompassPrimary::East).unwrap();
        g.link(Cartesian2DCoordinate::new(1, 1), CompassPrimary::North).unwrap();
        let expected = concat!("X   X X X \n",
                               "X   X   X \n",
                               "X   X   X \n",
                               "X       X \n",
                               "X X X   X \n",
                               "\n");
        assert_eq!(g.to_string(), expected);
    }

    #[test]
    fn rendered_shape() {
        let (w, h) = (7, 4);
        let mut g = Grid::fully_linked(w, h).unwrap();
        generators::recursive_backtracker(&mut g, &mut seeded_rng(5), |_| {});
        let text = g.to_string();

        let lines: Vec<&str> = text.split('\n').collect();
        // Glyph rows, the blank line, then the empty remainder after the final newline
        assert_eq!(lines.len(), 2 * h + 1 + 2);
        assert!(lines[..2 * h + 1].iter().all(|line| line.len() == 2 * (2 * w + 1)));
        assert_eq!(lines[2 * h + 1], "");
        assert!(text.ends_with("\n\n"));

        let glyphs = render_glyphs(&g);
        assert_eq!(glyphs.get(Cartesian2DCoordinate::new(1, 0)), Some(Glyph::Open));
        assert_eq!(glyphs.get(Cartesian2DCoordinate::new(0, 0)), Some(Glyph::Wall));
        assert_eq!(glyphs.get(Cartesian2DCoordinate::new((2 * w - 1) as u32, (2 * h) as u32)),
                   Some(Glyph::Open));
    }

    #[test]
    fn rendering_is_repeatable() {
        let mut g = Grid::fully_linked(9, 6).unwrap();
        generators::recursive_backtracker(&mut g, &mut seeded_rng(17), |_| {});
        assert_eq!(g.to_string(), g.to_string());
        assert_eq!(render_glyphs(&g), render_glyphs(&g));
    }
}
