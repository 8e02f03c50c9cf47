//! The fixed width text form of a maze: a grid of two character glyphs.
//!
//! A maze of `w` x `h` cells renders to `2w + 1` glyph columns and `2h + 1` glyph rows. The
//! entrance is the gap in the top border above the first cell and the exit is the gap in the
//! bottom border below the last cell. Both the renderer and the solver take those positions
//! from this module.

use std::fmt;

use crate::cells::Cartesian2DCoordinate;
use crate::units::{ColumnsCount, Height, RowsCount, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Glyph {
    Wall,
    Open,
    Path,
}

impl Glyph {
    pub const WALL: &'static str = "X ";
    pub const OPEN: &'static str = "  ";
    pub const PATH: &'static str = "+ ";

    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Wall => Glyph::WALL,
            Glyph::Open => Glyph::OPEN,
            Glyph::Path => Glyph::PATH,
        }
    }

    pub fn from_token(token: &[u8]) -> Option<Glyph> {
        match token {
            b"X " => Some(Glyph::Wall),
            b"  " => Some(Glyph::Open),
            b"+ " => Some(Glyph::Path),
            _ => None,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the maze is entered: the top border glyph above the first cell.
#[inline]
pub fn entrance_position() -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new(1, 0)
}

/// Where the maze is left: the bottom row glyph under the last cell.
///
/// None if the glyph grid is too narrow to have one.
#[inline]
pub fn exit_position(rows: RowsCount, columns: ColumnsCount) -> Option<Cartesian2DCoordinate> {
    let (RowsCount(rows), ColumnsCount(columns)) = (rows, columns);
    match (rows.checked_sub(1), columns.checked_sub(2)) {
        (Some(row), Some(column)) => Some(Cartesian2DCoordinate::new(column as u32, row as u32)),
        _ => None,
    }
}

/// Row major storage of glyphs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GlyphGrid {
    glyphs: Vec<Glyph>,
    rows: usize,
    columns: usize,
}

impl GlyphGrid {
    /// A grid of `rows` x `columns` filled with `fill`.
    pub fn new(rows: RowsCount, columns: ColumnsCount, fill: Glyph) -> GlyphGrid {
        let (RowsCount(rows), ColumnsCount(columns)) = (rows, columns);
        GlyphGrid {
            glyphs: vec![fill; rows * columns],
            rows,
            columns,
        }
    }

    /// Build from rows of glyphs. None if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Glyph>>) -> Option<GlyphGrid> {
        let columns = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != columns) {
            return None;
        }
        let rows_count = rows.len();
        Some(GlyphGrid {
            glyphs: rows.into_iter().flatten().collect(),
            rows: rows_count,
            columns,
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.rows)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.columns)
    }

    /// The maze cell dimensions this glyph grid was rendered from.
    pub fn cell_dimensions(&self) -> (Width, Height) {
        (Width(self.columns.saturating_sub(1) / 2), Height(self.rows.saturating_sub(1) / 2))
    }

    pub fn entrance(&self) -> Option<Cartesian2DCoordinate> {
        Some(entrance_position()).filter(|coord| self.is_valid_coordinate(*coord))
    }

    pub fn exit(&self) -> Option<Cartesian2DCoordinate> {
        exit_position(self.rows(), self.columns())
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.row() < self.rows && coord.column() < self.columns
    }

    pub fn get(&self, coord: Cartesian2DCoordinate) -> Option<Glyph> {
        self.index(coord).map(|index| self.glyphs[index])
    }

    /// Overwrite one glyph. Returns false, changing nothing, for an out of bounds coordinate.
    pub fn set(&mut self, coord: Cartesian2DCoordinate, glyph: Glyph) -> bool {
        match self.index(coord) {
            Some(index) => {
                self.glyphs[index] = glyph;
                true
            }
            None => false,
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Glyph]> {
        // chunks panics on zero
        self.glyphs.chunks(self.columns.max(1))
    }

    pub fn count(&self, glyph: Glyph) -> usize {
        self.glyphs.iter().filter(|g| **g == glyph).count()
    }

    #[inline]
    fn index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row() * self.columns + coord.column())
        } else {
            None
        }
    }
}

/// One line per glyph row.
impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::with_capacity(self.rows * (self.columns * 2 + 1));
        for row in self.iter_rows() {
            for glyph in row {
                output.push_str(glyph.as_str());
            }
            output.push('\n');
        }
        f.write_str(&output)
    }
}
