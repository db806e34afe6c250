//! Player and target placement on a generated maze

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::{Cell, Grid};

/// Fraction of the shorter grid side used as the centre search radius
pub const CENTER_WINDOW_FRACTION: f32 = 0.25;

/// Clear cells inside the square window around the grid centre
///
/// The window is kept one cell inside the border so every candidate has
/// four in-bounds neighbours.
pub fn center_candidates(grid: &Grid) -> Vec<Cell> {
    let (rows, cols) = (grid.rows(), grid.cols());
    if rows < 3 || cols < 3 {
        return Vec::new();
    }

    let center = Cell::new(rows / 2, cols / 2);
    let radius = (rows.min(cols) as f32 * CENTER_WINDOW_FRACTION).floor() as usize;

    let row_lo = center.row.saturating_sub(radius).max(1);
    let row_hi = (center.row + radius).min(rows - 2);
    let col_lo = center.col.saturating_sub(radius).max(1);
    let col_hi = (center.col + radius).min(cols - 2);

    (row_lo..=row_hi)
        .flat_map(|row| (col_lo..=col_hi).map(move |col| Cell::new(row, col)))
        .filter(|&cell| grid.is_clear(cell))
        .collect()
}

/// Choose the player's start position (pixel centre of a cell)
///
/// Prefers a random clear cell near the centre, then the first open cell in
/// row-major order, then a fixed spot near the origin.
pub fn place_player<R: Rng + ?Sized>(grid: &Grid, cell_size: f32, rng: &mut R) -> Vec2 {
    let candidates = center_candidates(grid);
    if let Some(cell) = candidates.choose(rng) {
        log::debug!(
            "Player at {:?} ({} clear cells near centre)",
            cell,
            candidates.len()
        );
        return cell.center(cell_size);
    }

    if let Some(cell) = grid.open_cells().next() {
        log::debug!("No clear cell near centre, player at first open cell {:?}", cell);
        return cell.center(cell_size);
    }

    log::warn!("Maze has no open cell, using fallback player position");
    Vec2::splat(cell_size * 1.5)
}

/// Choose the target position uniformly among all open cells
///
/// `None` only when the grid has no open cell at all.
pub fn place_target<R: Rng + ?Sized>(grid: &Grid, cell_size: f32, rng: &mut R) -> Option<Vec2> {
    let open: Vec<Cell> = grid.open_cells().collect();
    let cell = open.choose(rng)?;
    log::debug!("Target at {:?} ({} open cells)", cell, open.len());
    Some(cell.center(cell_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::maze::generate;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// A grid that is open everywhere except the outer ring
    fn open_room(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::filled(rows, cols);
        for row in 1..rows - 1 {
            for col in 1..cols - 1 {
                grid.open(Cell::new(row, col));
            }
        }
        grid
    }

    #[test]
    fn test_center_window_bounds() {
        // 30x40: centre (15, 20), radius 7
        let grid = open_room(30, 40);
        let candidates = center_candidates(&grid);
        assert!(!candidates.is_empty());
        for cell in &candidates {
            assert!((8..=22).contains(&cell.row), "{:?}", cell);
            assert!((13..=27).contains(&cell.col), "{:?}", cell);
        }
        // Every cell in the window is clear in an open room (ring excluded)
        assert_eq!(candidates.len(), 15 * 15);
    }

    #[test]
    fn test_window_clamped_inside_border() {
        // Radius 1 on a 4x4 grid around (2, 2) reaches row/col 3, clamped to 2
        let mut grid = Grid::filled(4, 4);
        for cell in grid.cells().collect::<Vec<_>>() {
            grid.open(cell);
        }
        let candidates = center_candidates(&grid);
        assert_eq!(candidates.len(), 4);
        for cell in &candidates {
            assert!(cell.row >= 1 && cell.row <= 2);
            assert!(cell.col >= 1 && cell.col <= 2);
        }
    }

    #[test]
    fn test_player_prefers_clear_center_cell() {
        let grid = open_room(30, 40);
        let mut rng = Pcg32::seed_from_u64(5);
        let pos = place_player(&grid, 20.0, &mut rng);
        let cell = grid.cell_of(pos, 20.0).unwrap();
        assert!(grid.is_clear(cell));
        assert!(center_candidates(&grid).contains(&cell));
        assert_eq!(pos, cell.center(20.0));
    }

    #[test]
    fn test_player_falls_back_to_first_open_cell() {
        let mut grid = Grid::filled(10, 10);
        grid.open(Cell::new(7, 3));
        grid.open(Cell::new(2, 8));
        let mut rng = Pcg32::seed_from_u64(5);
        let pos = place_player(&grid, 20.0, &mut rng);
        assert_eq!(pos, Cell::new(2, 8).center(20.0));
    }

    #[test]
    fn test_player_fallback_on_solid_grid() {
        let grid = Grid::filled(10, 10);
        let mut rng = Pcg32::seed_from_u64(5);
        assert_eq!(place_player(&grid, 20.0, &mut rng), Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_target_on_open_cell() {
        let mut rng = Pcg32::seed_from_u64(11);
        let grid = generate(30, 40, &mut rng);
        for _ in 0..50 {
            let pos = place_target(&grid, 20.0, &mut rng).unwrap();
            let cell = grid.cell_of(pos, 20.0).unwrap();
            assert!(grid.is_open(cell));
            assert_eq!(pos, cell.center(20.0));
        }
    }

    #[test]
    fn test_target_none_on_solid_grid() {
        let grid = Grid::filled(4, 4);
        let mut rng = Pcg32::seed_from_u64(11);
        assert_eq!(place_target(&grid, 20.0, &mut rng), None);
    }

    #[test]
    fn test_player_on_generated_maze_is_open() {
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let grid = generate(30, 40, &mut rng);
            let pos = place_player(&grid, 20.0, &mut rng);
            let cell = grid.cell_of(pos, 20.0).unwrap();
            assert!(grid.is_open(cell), "seed {}", seed);
        }
    }
}
