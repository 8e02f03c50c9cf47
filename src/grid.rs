use std::fmt;

use error_chain::bail;
use log::debug;
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, Cell, CompassPrimary};
use crate::errors::*;
use crate::units::{ColumnsCount, EdgesCount, RowsCount};
use crate::utils::{self, FnvHashSet};

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

/// A rectangular arena of maze cells stored in row major order.
///
/// Passages between grid neighbours are flags on both cells; `link` and `unlink` always update
/// the pair so a passage is never visible from one side only.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellLinkError {
    InvalidGridCoordinate,
    NoNeighbour,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid :: width: {}, height: {}, links: {}",
               self.width, self.height, self.links_count().0)
    }
}

impl Grid {
    /// A `width` x `height` grid with no passages at all.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        if width == 0 || height == 0 {
            bail!(ErrorKind::InvalidDimensions(width, height));
        }
        let cells_count = width
            .checked_mul(height)
            .filter(|count| *count <= u32::MAX as usize)
            .ok_or(ErrorKind::InvalidDimensions(width, height))?;
        // Cell and glyph coordinates are u32, and the rendered maze is 2n + 1 glyphs across.
        if !fits_glyph_coordinates(width) || !fits_glyph_coordinates(height) {
            bail!(ErrorKind::InvalidDimensions(width, height));
        }

        Ok(Grid {
            cells: vec![Cell::default(); cells_count],
            width,
            height,
        })
    }

    /// A grid where every cell has a passage to each of its grid neighbours.
    pub fn fully_linked(width: usize, height: usize) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        grid.link_all_neighbours()
            .map_err(|e| format!("failed to link the {}x{} grid: {:?}", width, height, e))?;
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.height)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.width)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.column() < self.width && coord.row() < self.height
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row() * self.width + coord.column())
        } else {
            None
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Cells that are up, right, down or left of a cell, but not necessarily linked by a passage.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Open a passage from `coord` to its neighbour in `direction`, and back again.
    pub fn link(&mut self,
                coord: Cartesian2DCoordinate,
                direction: CompassPrimary)
                -> std::result::Result<(), CellLinkError> {
        let (index, neighbour_index) = self.link_indices(coord, direction)?;
        self.cells[index].set_link(direction, true);
        self.cells[neighbour_index].set_link(direction.opposite(), true);
        Ok(())
    }

    /// Remove the passage between `coord` and its neighbour in `direction` from both cells.
    /// Returns true if a passage existed on either side.
    pub fn unlink(&mut self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        if let Ok((index, neighbour_index)) = self.link_indices(coord, direction) {
            let opposite = direction.opposite();
            let existed = self.cells[index].is_linked(direction) ||
                          self.cells[neighbour_index].is_linked(opposite);
            self.cells[index].set_link(direction, false);
            self.cells[neighbour_index].set_link(opposite, false);
            existed
        } else {
            false
        }
    }

    /// Wire every cell to each of its existing grid neighbours.
    pub fn link_all_neighbours(&mut self) -> std::result::Result<(), CellLinkError> {
        for index in 0..self.size() {
            let coord = Cartesian2DCoordinate::from_row_major_index(index, self.width);
            // Linking east and south from every cell covers every neighbour pair once.
            for &dir in &[CompassPrimary::East, CompassPrimary::South] {
                if self.neighbour_at_direction(coord, dir).is_some() {
                    self.link(coord, dir)?;
                }
            }
        }
        Ok(())
    }

    /// Is there a passage between `coord` and its neighbour in `direction` that both cells agree
    /// on?
    pub fn is_neighbour_linked(&self,
                               coord: Cartesian2DCoordinate,
                               direction: CompassPrimary)
                               -> bool {
        self.link_indices(coord, direction)
            .map(|(index, neighbour_index)| {
                self.cells[index].is_linked(direction) &&
                self.cells[neighbour_index].is_linked(direction.opposite())
            })
            .unwrap_or(false)
    }

    /// Cells that are linked to a particular cell by a passage.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> Option<CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let linked_cells = CompassPrimary::ALL
            .iter()
            .filter(|dir| self.is_neighbour_linked(coord, **dir))
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect();
        Some(linked_cells)
    }

    /// The number of passages, each counted once.
    pub fn links_count(&self) -> EdgesCount {
        EdgesCount(self.iter_links().count())
    }

    /// Row major iteration of all the cell coordinates.
    pub fn iter(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        let width = self.width;
        (0..self.size()).map(move |index| Cartesian2DCoordinate::from_row_major_index(index, width))
    }

    /// Each passage once, as the (west or north cell, east or south cell) pair.
    pub fn iter_links(&self)
                      -> impl Iterator<Item = (Cartesian2DCoordinate, Cartesian2DCoordinate)> + '_ {
        self.iter().flat_map(move |coord| {
            [CompassPrimary::East, CompassPrimary::South]
                .iter()
                .filter(|dir| self.is_neighbour_linked(coord, **dir))
                .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
                .map(|neighbour| (coord, neighbour))
                .collect::<SmallVec<[(Cartesian2DCoordinate, Cartesian2DCoordinate); 2]>>()
        })
    }

    /// Flood fill along passages, returning every cell reachable from `start`.
    pub fn reachable_from(&self, start: Cartesian2DCoordinate) -> FnvHashSet<Cartesian2DCoordinate> {
        let mut reached = utils::fnv_hashset(self.size());
        if !self.is_valid_coordinate(start) {
            return reached;
        }

        reached.insert(start);
        let mut frontier = vec![start];
        while !frontier.is_empty() {
            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                if let Some(links) = self.links(*cell_coord) {
                    for link_coord in links {
                        if reached.insert(link_coord) {
                            new_frontier.push(link_coord);
                        }
                    }
                }
            }
            frontier = new_frontier;
        }

        reached
    }

    /// A perfect maze: every cell reachable from every other by exactly one route, which for a
    /// connected grid graph means exactly `size - 1` passages.
    pub fn is_perfect(&self) -> bool {
        let EdgesCount(links) = self.links_count();
        let reached = self.reachable_from(Cartesian2DCoordinate::new(0, 0));
        let perfect = links + 1 == self.size() && reached.len() == self.size();
        debug!("grid {}x{} has {} links, reaches {} of {} cells",
               self.width, self.height, links, reached.len(), self.size());
        perfect
    }

    fn link_indices(&self,
                    coord: Cartesian2DCoordinate,
                    direction: CompassPrimary)
                    -> std::result::Result<(usize, usize), CellLinkError> {
        let index = self.grid_coordinate_to_index(coord)
            .ok_or(CellLinkError::InvalidGridCoordinate)?;
        let neighbour_index = self.neighbour_at_direction(coord, direction)
            .and_then(|neighbour| self.grid_coordinate_to_index(neighbour))
            .ok_or(CellLinkError::NoNeighbour)?;
        Ok((index, neighbour_index))
    }
}


fn fits_glyph_coordinates(cells: usize) -> bool {
    cells.checked_mul(2)
        .and_then(|glyphs| glyphs.checked_add(1))
        .map_or(false, |glyphs| glyphs <= u32::MAX as usize)
}
