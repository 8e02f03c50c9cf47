use bit_set::BitSet;
use log::trace;
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::Grid;

type Candidates = SmallVec<[(CompassPrimary, Cartesian2DCoordinate); 4]>;

/// A cell on the carving stack: where it is and the linked neighbours that were unvisited when
/// the carve first arrived there.
#[derive(Debug)]
struct CarveFrame {
    coord: Cartesian2DCoordinate,
    candidates: Candidates,
}

/// Carve a random spanning tree out of the passages of `grid`, starting at the top left cell.
///
/// The grid is expected to start as a mesh (see `Grid::link_all_neighbours`). This is a
/// randomised depth first walk over the existing passages: on arrival at a cell every passage
/// to an already visited cell, other than the one just walked along, would close a cycle and
/// is walled up. The unvisited neighbours are then explored in a uniformly random order,
/// walling up the passage to any neighbour that a deeper part of the walk reached first.
///
/// `on_wall` is handed the grid after every passage that is actually removed.
///
/// Uses an explicit stack, so the walk depth is bounded by the heap rather than the call stack.
pub fn recursive_backtracker<R, F>(grid: &mut Grid, rng: &mut R, mut on_wall: F)
    where R: Rng,
          F: FnMut(&Grid)
{
    let cells_count = grid.size();
    let mut visited = BitSet::with_capacity(cells_count);
    let mut stack: Vec<CarveFrame> = Vec::with_capacity(cells_count);

    let start = Cartesian2DCoordinate::new(0, 0);
    stack.push(enter_cell(grid, &mut visited, start, None, &mut on_wall));

    while !stack.is_empty() {
        let next_step = {
            let top = stack.len() - 1;
            let frame = &mut stack[top];
            if frame.candidates.is_empty() {
                None
            } else {
                let sample = rng.gen_range(0, frame.candidates.len());
                let (dir, neighbour) = frame.candidates.remove(sample);
                Some((frame.coord, dir, neighbour))
            }
        };

        match next_step {
            None => {
                // Dead end, backtrack
                stack.pop();
            }
            Some((coord, dir, neighbour)) => {
                if is_visited(grid, &visited, neighbour) {
                    wall_up(grid, coord, dir, &mut on_wall);
                } else {
                    let frame = enter_cell(grid, &mut visited, neighbour, Some(coord), &mut on_wall);
                    stack.push(frame);
                }
            }
        }
    }
}

fn enter_cell<F>(grid: &mut Grid,
                 visited: &mut BitSet,
                 coord: Cartesian2DCoordinate,
                 predecessor: Option<Cartesian2DCoordinate>,
                 on_wall: &mut F)
                 -> CarveFrame
    where F: FnMut(&Grid)
{
    if let Some(index) = grid.grid_coordinate_to_index(coord) {
        visited.insert(index);
    }

    let mut candidates = Candidates::new();
    for dir in CompassPrimary::ALL.iter().cloned() {
        if !grid.is_neighbour_linked(coord, dir) {
            continue;
        }
        if let Some(neighbour) = grid.neighbour_at_direction(coord, dir) {
            if !is_visited(grid, visited, neighbour) {
                candidates.push((dir, neighbour));
            } else if Some(neighbour) != predecessor {
                wall_up(grid, coord, dir, on_wall);
            }
        }
    }

    CarveFrame { coord, candidates }
}

fn wall_up<F>(grid: &mut Grid, coord: Cartesian2DCoordinate, dir: CompassPrimary, on_wall: &mut F)
    where F: FnMut(&Grid)
{
    if grid.unlink(coord, dir) {
        trace!("wall added {:?} of ({}, {})", dir, coord.x, coord.y);
        on_wall(grid);
    }
}

#[inline]
fn is_visited(grid: &Grid, visited: &BitSet, coord: Cartesian2DCoordinate) -> bool {
    grid.grid_coordinate_to_index(coord)
        .map_or(false, |index| visited.contains(index))
}
