//! Demo-mode steering
//!
//! Finds the shortest open path to the target with a breadth-first search
//! and points the velocity at the centre of the next cell on that path.

use std::collections::VecDeque;

use glam::Vec2;

use super::grid::{Cell, Grid};

/// Shortest path of open cells from `from` to `to`, both included
pub fn find_path(grid: &Grid, from: Cell, to: Cell) -> Option<Vec<Cell>> {
    if grid.is_wall(from) || grid.is_wall(to) {
        return None;
    }

    let index = |c: Cell| c.row * grid.cols() + c.col;
    let mut came_from: Vec<Option<Cell>> = vec![None; grid.rows() * grid.cols()];
    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut queue = VecDeque::from([from]);
    visited[index(from)] = true;

    while let Some(cell) = queue.pop_front() {
        if cell == to {
            let mut path = vec![to];
            let mut current = to;
            while let Some(prev) = came_from[index(current)] {
                path.push(prev);
                current = prev;
            }
            path.reverse();
            return Some(path);
        }
        for next in grid.neighbors(cell) {
            if grid.is_open(next) && !visited[index(next)] {
                visited[index(next)] = true;
                came_from[index(next)] = Some(cell);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Signed unit step toward `target` on one axis, zero once within `tolerance`
#[inline]
fn axis_toward(from: f32, target: f32, tolerance: f32) -> f32 {
    let delta = target - from;
    if delta.abs() > tolerance { delta.signum() } else { 0.0 }
}

/// Velocity that walks the player toward the target along the maze
///
/// `step_len` is the distance covered this tick at unit velocity; axes closer
/// than that to the waypoint are left at zero so the player never overshoots.
pub fn steer(
    grid: &Grid,
    player_pos: Vec2,
    target_pos: Vec2,
    cell_size: f32,
    step_len: f32,
) -> Vec2 {
    let from = grid.cell_of(player_pos, cell_size);
    let to = grid.cell_of(target_pos, cell_size);
    let (Some(from), Some(to)) = (from, to) else {
        return Vec2::ZERO;
    };

    let waypoint = if from == to {
        target_pos
    } else {
        match find_path(grid, from, to) {
            Some(path) => path[1].center(cell_size),
            None => return Vec2::ZERO,
        }
    };

    Vec2::new(
        axis_toward(player_pos.x, waypoint.x, step_len),
        axis_toward(player_pos.y, waypoint.y, step_len),
    )
}
