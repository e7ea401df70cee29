//! Unit tests for gs-agent.

use std::collections::VecDeque;

use gs_core::{world_to_cell, AgentId, SimRng, WorldPos};
use gs_grid::{CellState, GridMap};

use crate::{advance, advance_all, AgentError, AgentStore, ARRIVE_EPSILON};

// ── Helpers ───────────────────────────────────────────────────────────────────

const CELL_SIZE: f32 = 16.0;
const SPEED: f32 = 10.0;

fn store_with_one_agent(pos: WorldPos, waypoints: &[WorldPos]) -> AgentStore {
    AgentStore {
        positions: vec![pos],
        speeds:    vec![SPEED],
        paths:     vec![waypoints.iter().copied().collect()],
    }
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn {
    use super::*;

    #[test]
    fn spawns_on_open_cells_only() {
        let mut grid = GridMap::new(6, 6);
        // Block everything except one row.
        grid.fill(CellState::Blocked);
        for col in 0..6 {
            grid.set(gs_core::Cell::new(2, col), CellState::Open);
        }

        let mut store = AgentStore::new();
        let mut rng = SimRng::new(1);
        store.spawn(&grid, 24, SPEED, CELL_SIZE, &mut rng).unwrap();

        assert_eq!(store.len(), 24);
        for agent in store.agent_ids() {
            let cell = world_to_cell(store.position(agent).unwrap(), CELL_SIZE);
            assert!(!grid.is_blocked(cell), "agent spawned on blocked cell {cell}");
            assert!(store.is_idle(agent));
        }
    }

    #[test]
    fn spawn_replaces_previous_agents() {
        let grid = GridMap::new(4, 4);
        let mut store = AgentStore::new();
        let mut rng = SimRng::new(2);
        store.spawn(&grid, 10, SPEED, CELL_SIZE, &mut rng).unwrap();
        store.spawn(&grid, 3, SPEED, CELL_SIZE, &mut rng).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn fully_blocked_grid_errors_and_preserves_store() {
        let mut grid = GridMap::new(4, 4);
        let mut store = AgentStore::new();
        let mut rng = SimRng::new(3);
        store.spawn(&grid, 2, SPEED, CELL_SIZE, &mut rng).unwrap();

        grid.fill(CellState::Blocked);
        let result = store.spawn(&grid, 5, SPEED, CELL_SIZE, &mut rng);
        assert!(matches!(result, Err(AgentError::NoOpenCells)));
        assert_eq!(store.len(), 2, "failed spawn must leave the store unchanged");
    }

    #[test]
    fn deterministic_under_seed() {
        let grid = GridMap::new(8, 8);
        let mut a = AgentStore::new();
        let mut b = AgentStore::new();
        a.spawn(&grid, 12, SPEED, CELL_SIZE, &mut SimRng::new(77)).unwrap();
        b.spawn(&grid, 12, SPEED, CELL_SIZE, &mut SimRng::new(77)).unwrap();
        assert_eq!(a.positions, b.positions);
    }
}

// ── Path assignment ───────────────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use super::*;

    #[test]
    fn assign_and_clear() {
        let grid = GridMap::new(4, 4);
        let mut store = AgentStore::new();
        let mut rng = SimRng::new(4);
        store.spawn(&grid, 1, SPEED, CELL_SIZE, &mut rng).unwrap();

        let wp: VecDeque<WorldPos> = [WorldPos::new(8.0, 8.0)].into_iter().collect();
        store.assign_path(AgentId(0), wp).unwrap();
        assert!(!store.is_idle(AgentId(0)));

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn assign_to_unknown_agent_errors() {
        let mut store = AgentStore::new();
        let result = store.assign_path(AgentId(0), VecDeque::new());
        assert!(matches!(result, Err(AgentError::NotFound(_))));
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn idle_agent_does_not_move() {
        let mut store = store_with_one_agent(WorldPos::new(5.0, 5.0), &[]);
        advance(&mut store, AgentId(0), 1.0);
        assert_eq!(store.positions[0], WorldPos::new(5.0, 5.0));
    }

    #[test]
    fn fixed_speed_step_magnitude() {
        let mut store = store_with_one_agent(
            WorldPos::new(0.0, 0.0),
            &[WorldPos::new(100.0, 0.0)],
        );
        advance(&mut store, AgentId(0), 0.5);
        // step = speed * dt = 10 * 0.5 = 5, regardless of the 100-unit gap.
        assert!((store.positions[0].x - 5.0).abs() < 1e-5);
        assert_eq!(store.positions[0].y, 0.0);
        assert_eq!(store.paths[0].len(), 1, "waypoint not yet reached");
    }

    #[test]
    fn no_overshoot() {
        let target = WorldPos::new(3.0, 4.0); // 5 units away
        let mut store = store_with_one_agent(WorldPos::new(0.0, 0.0), &[target]);
        // speed * dt = 10 * 1.0 = 10 > 5 → snap to the waypoint, pop it.
        advance(&mut store, AgentId(0), 1.0);
        assert_eq!(store.positions[0], target);
        assert!(store.is_idle(AgentId(0)));
    }

    #[test]
    fn within_threshold_snaps_and_pops() {
        let target = WorldPos::new(10.0, 10.0);
        let near = WorldPos::new(10.0, 10.0 + ARRIVE_EPSILON * 0.5);
        let mut store = store_with_one_agent(near, &[target]);
        advance(&mut store, AgentId(0), 1.0);
        assert_eq!(store.positions[0], target, "must land exactly on the waypoint");
        assert!(store.is_idle(AgentId(0)));
    }

    #[test]
    fn start_equals_target_no_nan() {
        let target = WorldPos::new(7.0, 7.0);
        let mut store = store_with_one_agent(target, &[target]);
        advance(&mut store, AgentId(0), 1.0);
        assert_eq!(store.positions[0], target);
        assert!(store.positions[0].x.is_finite());
        assert!(store.is_idle(AgentId(0)));
    }

    #[test]
    fn consumes_waypoints_in_order() {
        let w1 = WorldPos::new(1.0, 0.0);
        let w2 = WorldPos::new(1.0, 1.0);
        let mut store = store_with_one_agent(WorldPos::new(0.0, 0.0), &[w1, w2]);
        advance(&mut store, AgentId(0), 1.0); // reaches w1 (10 units ≥ 1)
        assert_eq!(store.positions[0], w1);
        assert_eq!(store.paths[0].front(), Some(&w2));
        advance(&mut store, AgentId(0), 1.0); // reaches w2
        assert_eq!(store.positions[0], w2);
        assert!(store.is_idle(AgentId(0)));
    }

    #[test]
    fn diagonal_motion_is_normalized() {
        let target = WorldPos::new(30.0, 40.0); // 50 units away
        let mut store = store_with_one_agent(WorldPos::new(0.0, 0.0), &[target]);
        advance(&mut store, AgentId(0), 1.0); // step = 10
        let moved = store.positions[0].distance(WorldPos::new(0.0, 0.0));
        assert!((moved - 10.0).abs() < 1e-4, "step magnitude {moved} != speed*dt");
    }

    #[test]
    fn advance_all_moves_every_agent() {
        let mut store = AgentStore {
            positions: vec![WorldPos::new(0.0, 0.0), WorldPos::new(5.0, 5.0)],
            speeds:    vec![SPEED, SPEED],
            paths:     vec![
                [WorldPos::new(1.0, 0.0)].into_iter().collect(),
                VecDeque::new(),
            ],
        };
        advance_all(&mut store, 1.0);
        assert_eq!(store.positions[0], WorldPos::new(1.0, 0.0));
        assert_eq!(store.positions[1], WorldPos::new(5.0, 5.0));
    }

    #[test]
    fn out_of_range_agent_ignored() {
        let mut store = AgentStore::new();
        advance(&mut store, AgentId(3), 1.0); // must not panic
    }
}
