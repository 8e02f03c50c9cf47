use std::str::FromStr;

use error_chain::bail;
use log::debug;

use crate::errors::*;
use crate::glyphs::{Glyph, GlyphGrid};

/// Read maze text back into glyphs.
///
/// The height is the number of lines, ignoring blank lines at the end of the text, and the
/// width is half the character count of the first line. Every line must then be exactly as
/// long as the first and made only of `"X "`, `"  "` and `"+ "` tokens.
pub fn parse_maze_text(text: &str) -> Result<GlyphGrid> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }

    let first_line = *lines.first()
        .ok_or_else(|| ErrorKind::MalformedMazeText("no maze rows found".to_string()))?;
    let line_length = first_line.len();
    if line_length % 2 != 0 {
        bail!(ErrorKind::MalformedMazeText(format!("first row has odd length {}, expected \
                                                    two characters per glyph",
                                                   line_length)));
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_index, line) in lines.iter().enumerate() {
        if line.len() != line_length {
            bail!(ErrorKind::MalformedMazeText(format!("row {} is {} characters long, expected {}",
                                                       row_index,
                                                       line.len(),
                                                       line_length)));
        }
        let row = line.as_bytes()
            .chunks(2)
            .enumerate()
            .map(|(column_index, token)| {
                Glyph::from_token(token).ok_or_else(|| {
                    ErrorKind::MalformedMazeText(format!("unknown glyph {:?} at row {}, column {}",
                                                         String::from_utf8_lossy(token),
                                                         row_index,
                                                         column_index))
                        .into()
                })
            })
            .collect::<Result<Vec<Glyph>>>()?;
        rows.push(row);
    }

    let glyphs = GlyphGrid::from_rows(rows)
        .ok_or_else(|| ErrorKind::MalformedMazeText("ragged rows".to_string()))?;
    debug!("parsed maze text into {} x {} glyphs",
           glyphs.rows().0,
           glyphs.columns().0);
    Ok(glyphs)
}

impl FromStr for GlyphGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<GlyphGrid> {
        parse_maze_text(s)
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::Cartesian2DCoordinate;
    use crate::generators;
    use crate::grid::Grid;
    use crate::grid_displays::render_glyphs;
    use crate::units::{ColumnsCount, Height, RowsCount, Width};
    use crate::utils::seeded_rng;

    fn assert_malformed(text: &str) {
        match parse_maze_text(text) {
            Err(e) => match *e.kind() {
                ErrorKind::MalformedMazeText(_) => {}
                ref other => panic!("expected malformed maze text error, got {:?}", other),
            },
            Ok(glyphs) => panic!("expected malformed maze text error, parsed {:?}", glyphs),
        }
    }

    #[test]
    fn parse_small_maze() {
        let text = "X   X \nX + X \nX   X \n\n";
        let glyphs = parse_maze_text(text).unwrap();
        assert_eq!(glyphs.rows(), RowsCount(3));
        assert_eq!(glyphs.columns(), ColumnsCount(3));
        assert_eq!(glyphs.get(Cartesian2DCoordinate::new(0, 0)), Some(Glyph::Wall));
        assert_eq!(glyphs.get(Cartesian2DCoordinate::new(1, 0)), Some(Glyph::Open));
        assert_eq!(glyphs.get(Cartesian2DCoordinate::new(1, 1)), Some(Glyph::Path));
        assert_eq!(glyphs.cell_dimensions(), (Width(1), Height(1)));
    }

    #[test]
    fn trailing_newline_optional() {
        let with = parse_maze_text("X   \n  X \n").unwrap();
        let without = parse_maze_text("X   \n  X ").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn windows_line_endings() {
        let glyphs = parse_maze_text("X   \r\n  X \r\n").unwrap();
        assert_eq!(glyphs.rows(), RowsCount(2));
        assert_eq!(glyphs.columns(), ColumnsCount(2));
    }

    #[test]
    fn rendered_text_round_trips() {
        for &(w, h) in &[(1, 1), (5, 5), (15, 10), (3, 8)] {
            let mut g = Grid::fully_linked(w, h).unwrap();
            generators::recursive_backtracker(&mut g, &mut seeded_rng(w as u32 * 31 + h as u32),
                                              |_| {});
            let glyphs = parse_maze_text(&g.to_string()).unwrap();
            assert_eq!(glyphs.cell_dimensions(), (Width(w), Height(h)));
            assert_eq!(glyphs, render_glyphs(&g));
        }
    }

    #[test]
    fn solved_text_parses_again() {
        let glyphs: GlyphGrid = "X + X \nX + X \nX + X \n".parse().unwrap();
        assert_eq!(glyphs.count(Glyph::Path), 3);
        assert_eq!(glyphs.to_string().parse::<GlyphGrid>().unwrap(), glyphs);
    }

    #[test]
    fn empty_text_is_malformed() {
        assert_malformed("");
        assert_malformed("\n\n");
    }

    #[test]
    fn odd_width_is_malformed() {
        assert_malformed("X   X\nX   X\n");
    }

    #[test]
    fn ragged_rows_are_malformed() {
        assert_malformed("X   X \nX   \nX   X \n");
        assert_malformed("X   X \nX   X X \n");
        // A blank line inside the maze is a short row
        assert_malformed("X   X \n\nX   X \n");
    }

    #[test]
    fn unknown_glyphs_are_malformed() {
        assert_malformed("X   X \nX # X \n");
        assert_malformed("X   X \n X  X \n");
        assert_malformed("X   X \nX é X\n");
    }
}
