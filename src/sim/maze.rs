//! Perfect-maze generation
//!
//! Randomized iterative backtracker that carves in steps of two cells, so
//! corridors are always separated by a one-cell wall lattice. The carved
//! cells form a spanning tree: exactly one path between any two open cells.

use rand::Rng;
use rand::seq::SliceRandom;

use super::grid::{Cell, Grid, ORTHOGONAL};

/// Carving stride between maze nodes
pub const CARVE_STRIDE: isize = 2;

/// Generate a perfect maze on a `rows` x `cols` grid
///
/// The start cell is any cell of the grid, chosen uniformly. Each stack frame
/// extends by at most one direction before being revisited; a frame with no
/// unvisited node two steps away is popped.
pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::filled(rows, cols);
    if rows == 0 || cols == 0 {
        log::warn!("Empty {}x{} maze requested, nothing to carve", rows, cols);
        return grid;
    }

    let start = Cell::new(rng.random_range(0..rows), rng.random_range(0..cols));
    grid.open(start);
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let mut directions = ORTHOGONAL;
        directions.shuffle(rng);

        let carve = directions.iter().find_map(|&(dr, dc)| {
            let dest = grid.offset(current, dr * CARVE_STRIDE, dc * CARVE_STRIDE)?;
            if !grid.is_wall(dest) {
                return None;
            }
            let between = grid.offset(current, dr, dc)?;
            Some((between, dest))
        });

        match carve {
            Some((between, dest)) => {
                grid.open(between);
                grid.open(dest);
                stack.push(dest);
            }
            None => {
                stack.pop();
            }
        }
    }

    grid
}
