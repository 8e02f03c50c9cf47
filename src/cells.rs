/// A position on a 2d grid, `x` being the column and `y` being the row.
///
/// Used both for maze cells and for glyphs of a rendered maze.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_length: usize) -> Cartesian2DCoordinate {
        let x = index % row_length;
        let y = index / row_length;
        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.y as usize
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.x as usize
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable, i.e. north of row 0 or west of
    /// column 0. Coordinates past the east or south edge of a grid are the caller's problem.
    pub fn offset(&self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => {
                if y > 0 {
                    Some(Cartesian2DCoordinate { x, y: y - 1 })
                } else {
                    None
                }
            }
            CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate { x, y }),
            CompassPrimary::South => y.checked_add(1).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::West => {
                if x > 0 {
                    Some(Cartesian2DCoordinate { x: x - 1, y })
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    /// Clockwise from north: up, right, down, left.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    #[inline]
    fn link_index(self) -> usize {
        match self {
            CompassPrimary::North => 0,
            CompassPrimary::East => 1,
            CompassPrimary::South => 2,
            CompassPrimary::West => 3,
        }
    }
}

/// One maze cell: a passage flag for each direction.
///
/// A set flag says that a passage leads to the grid neighbour in that direction. The owning
/// `Grid` keeps the flags of both neighbours in step.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct Cell {
    links: [bool; 4],
}

impl Cell {
    #[inline]
    pub fn is_linked(&self, dir: CompassPrimary) -> bool {
        self.links[dir.link_index()]
    }

    #[inline]
    pub(crate) fn set_link(&mut self, dir: CompassPrimary, linked: bool) {
        self.links[dir.link_index()] = linked;
    }

    pub fn links_count(&self) -> usize {
        self.links.iter().filter(|linked| **linked).count()
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn opposite_directions() {
        for dir in CompassPrimary::ALL.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
        assert_eq!(CompassPrimary::North.opposite(), CompassPrimary::South);
        assert_eq!(CompassPrimary::East.opposite(), CompassPrimary::West);
    }

    #[test]
    fn offset_coordinates() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(gc(0, 0).offset(CompassPrimary::North), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::West), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::East), Some(gc(1, 0)));
        assert_eq!(gc(0, 0).offset(CompassPrimary::South), Some(gc(0, 1)));
        assert_eq!(gc(3, 2).offset(CompassPrimary::North), Some(gc(3, 1)));
        assert_eq!(gc(3, 2).offset(CompassPrimary::West), Some(gc(2, 2)));
        assert_eq!(gc(u32::MAX, 0).offset(CompassPrimary::East), None);
    }

    #[test]
    fn row_major_index_conversion() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(Cartesian2DCoordinate::from_row_major_index(0, 3), gc(0, 0));
        assert_eq!(Cartesian2DCoordinate::from_row_major_index(4, 3), gc(1, 1));
        assert_eq!(Cartesian2DCoordinate::from_row_major_index(8, 3), gc(2, 2));
        let coord = Cartesian2DCoordinate::from_row_major_index(17, 4);
        assert_eq!((coord.column(), coord.row()), (1, 4));
    }

    #[test]
    fn cell_link_flags() {
        let mut cell = Cell::default();
        assert_eq!(cell.links_count(), 0);

        cell.set_link(CompassPrimary::East, true);
        cell.set_link(CompassPrimary::South, true);
        assert!(cell.is_linked(CompassPrimary::East));
        assert!(cell.is_linked(CompassPrimary::South));
        assert!(!cell.is_linked(CompassPrimary::North));
        assert_eq!(cell.links_count(), 2);

        cell.set_link(CompassPrimary::East, false);
        assert!(!cell.is_linked(CompassPrimary::East));
        assert_eq!(cell.links_count(), 1);
    }
}
