//! Player movement and wall collision
//!
//! Movement is continuous, collision is sampled: a step is committed only if
//! every point sampled along it, at most half a cell apart, is on an in-bounds
//! open cell. A blocked step leaves the position untouched and keeps the
//! velocity, so the player rests against the wall until the input changes.

use glam::Vec2;

use super::grid::Grid;
use super::state::{Player, Target};
use crate::settings::Settings;

/// Result of one movement step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Candidate position was accepted
    pub committed: bool,
    /// Target became found during this step
    pub target_reached: bool,
}

/// Candidate position after `dt` seconds at `speed` px/s per unit velocity
///
/// Axes scale independently, so a diagonal input covers more ground.
#[inline]
pub fn candidate(pos: Vec2, vel: Vec2, speed: f32, dt: f32) -> Vec2 {
    pos + vel * (speed * dt)
}

/// True if `pos` lies on an in-bounds open cell
#[inline]
pub fn is_passable(grid: &Grid, pos: Vec2, cell_size: f32) -> bool {
    grid.cell_of(pos, cell_size).is_some_and(|cell| grid.is_open(cell))
}

/// Largest gap between collision samples along a step (in cells)
pub const SWEEP_SPACING: f32 = 0.5;

/// True if every sample on the segment `from -> to` is passable
///
/// `from` itself is not tested.
pub fn is_sweep_passable(grid: &Grid, from: Vec2, to: Vec2, cell_size: f32) -> bool {
    let delta = to - from;
    let samples = (delta.abs().max_element() / (cell_size * SWEEP_SPACING)).ceil();
    if !samples.is_finite() {
        return false;
    }
    // Long enough to leave the grid, so some sample is out of bounds anyway
    let max_samples = 2 * (grid.rows() + grid.cols()) + 2;
    if samples > max_samples as f32 {
        return false;
    }

    let samples = (samples as usize).max(1);
    (1..=samples).all(|i| {
        let t = i as f32 / samples as f32;
        is_passable(grid, from + delta * t, cell_size)
    })
}

/// Mark the target found if the player overlaps it
///
/// Returns true only on the step that flips the flag.
pub fn check_target(player: &Player, target: &mut Target, found_threshold: f32) -> bool {
    if target.found {
        return false;
    }
    if player.pos.distance(target.pos) < player.radius + found_threshold {
        target.found = true;
        return true;
    }
    false
}

/// Advance the player by one tick
pub fn step(
    player: &mut Player,
    target: &mut Target,
    grid: &Grid,
    settings: &Settings,
    dt: f32,
) -> StepOutcome {
    let next = candidate(player.pos, player.vel, settings.base_speed, dt);
    let committed = is_sweep_passable(grid, player.pos, next, settings.cell_size);
    if committed {
        player.pos = next;
    }

    let target_reached = check_target(player, target, settings.found_threshold);
    StepOutcome {
        committed,
        target_reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Cell;

    /// Open corridor along row 5 from col 2 to col 8, everything else wall
    fn corridor() -> Grid {
        let mut grid = Grid::filled(12, 12);
        for col in 2..=8 {
            grid.open(Cell::new(5, col));
        }
        grid
    }

    fn far_target() -> Target {
        Target::new(Vec2::new(1000.0, 1000.0))
    }

    #[test]
    fn test_blocked_by_wall_below() {
        let grid = corridor();
        let settings = Settings::default();
        let mut target = far_target();

        for dt in [0.1, 0.25, 0.5, 1.0] {
            let mut player = Player::new(Vec2::new(105.0, 105.0), 15.0);
            player.vel = Vec2::new(0.0, 1.0);
            let outcome = step(&mut player, &mut target, &grid, &settings, dt);
            assert!(!outcome.committed);
            assert_eq!(player.pos, Vec2::new(105.0, 105.0));
            // Velocity survives the collision
            assert_eq!(player.vel, Vec2::new(0.0, 1.0));
        }
    }

    #[test]
    fn test_moves_along_corridor() {
        let grid = corridor();
        let settings = Settings::default();
        let mut target = far_target();
        let mut player = Player::new(Vec2::new(105.0, 105.0), 15.0);
        player.vel = Vec2::new(1.0, 0.0);

        let outcome = step(&mut player, &mut target, &grid, &settings, 0.1);
        assert!(outcome.committed);
        assert!((player.pos.x - 120.0).abs() < 1e-4);
        assert_eq!(player.pos.y, 105.0);
    }

    #[test]
    fn test_stops_at_corridor_end() {
        let grid = corridor();
        let settings = Settings::default();
        let mut target = far_target();
        let mut player = Player::new(Vec2::new(170.0, 110.0), 15.0);
        player.vel = Vec2::new(1.0, 0.0);

        for _ in 0..100 {
            step(&mut player, &mut target, &grid, &settings, 1.0 / 60.0);
            assert!(is_passable(&grid, player.pos, 20.0));
        }
        // Last open column is 8 (x in [160, 180))
        assert!(player.pos.x < 180.0);
        assert!(player.pos.x > 177.0);
    }

    #[test]
    fn test_fast_tilt_cannot_skip_wall() {
        // Open cols 8 and 10 with a one-cell wall between them
        let mut grid = Grid::filled(1, 12);
        grid.open(Cell::new(0, 8));
        grid.open(Cell::new(0, 10));
        let settings = Settings::default();
        let mut target = far_target();
        let mut player = Player::new(Vec2::new(179.0, 10.0), 15.0);
        player.vel = Vec2::new(settings.tilt_gain, 0.0);

        // 22.5 px lands inside col 10, past the wall
        let outcome = step(&mut player, &mut target, &grid, &settings, 0.1);
        assert!(!outcome.committed);
        assert_eq!(player.pos, Vec2::new(179.0, 10.0));

        grid.open(Cell::new(0, 9));
        let outcome = step(&mut player, &mut target, &grid, &settings, 0.1);
        assert!(outcome.committed);
        assert!((player.pos.x - 201.5).abs() < 1e-3);
    }

    #[test]
    fn test_huge_step_is_blocked() {
        let grid = corridor();
        let settings = Settings::default();
        let mut target = far_target();
        let mut player = Player::new(Vec2::new(105.0, 105.0), 15.0);
        player.vel = Vec2::new(1.0, 0.0);

        for dt in [1e6, f32::INFINITY] {
            let outcome = step(&mut player, &mut target, &grid, &settings, dt);
            assert!(!outcome.committed);
            assert_eq!(player.pos, Vec2::new(105.0, 105.0));
        }
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let mut grid = Grid::filled(3, 3);
        grid.open(Cell::new(0, 0));
        let settings = Settings::default();
        let mut target = far_target();
        let mut player = Player::new(Vec2::new(10.0, 10.0), 15.0);
        player.vel = Vec2::new(-1.0, -1.0);

        let outcome = step(&mut player, &mut target, &grid, &settings, 0.1);
        assert!(!outcome.committed);
        assert_eq!(player.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_diagonal_is_faster() {
        let diagonal = candidate(Vec2::ZERO, Vec2::new(1.0, 1.0), 150.0, 1.0);
        let straight = candidate(Vec2::ZERO, Vec2::new(1.0, 0.0), 150.0, 1.0);
        assert!(diagonal.length() > straight.length());
    }

    #[test]
    fn test_target_found_once() {
        let grid = corridor();
        let settings = Settings::default();
        let mut player = Player::new(Vec2::new(110.0, 110.0), 15.0);
        let mut target = Target::new(Vec2::new(125.0, 110.0));

        let first = step(&mut player, &mut target, &grid, &settings, 0.0);
        assert!(first.target_reached);
        assert!(target.found);

        let second = step(&mut player, &mut target, &grid, &settings, 0.0);
        assert!(!second.target_reached);
        assert!(target.found);
    }

    #[test]
    fn test_target_threshold_is_strict() {
        let player = Player::new(Vec2::new(110.0, 110.0), 15.0);
        // Exactly radius + threshold away: not found
        let mut target = Target::new(Vec2::new(130.0, 110.0));
        assert!(!check_target(&player, &mut target, 5.0));
        let mut target = Target::new(Vec2::new(129.9, 110.0));
        assert!(check_target(&player, &mut target, 5.0));
    }
}
