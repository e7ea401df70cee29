//! Waypoint-following motion.

use gs_core::AgentId;

use crate::AgentStore;

/// Distance (world units) below which an agent is considered to have
/// arrived at a waypoint.  Guards the normalization against a near-zero
/// displacement — without it an agent sitting on its waypoint would divide
/// by ~0 and take micro-steps forever.
pub const ARRIVE_EPSILON: f32 = 1e-3;

/// Advance one agent by `dt` simulated seconds.
///
/// - Empty path: no-op.
/// - Within [`ARRIVE_EPSILON`] of the first waypoint: snap exactly onto it
///   and pop it.
/// - Otherwise step `min(speed · dt, distance)` along the normalized
///   displacement — fixed real-world speed, never overshooting.  A step
///   that lands on the waypoint pops it too.
///
/// Unknown agent indices are ignored (the store may have been cleared by a
/// maze regeneration since the caller captured the id).
pub fn advance(store: &mut AgentStore, agent: AgentId, dt: f32) {
    let i = agent.index();
    if i >= store.len() {
        return;
    }

    let Some(&target) = store.paths[i].front() else {
        return; // idle
    };

    let pos = store.positions[i];
    let dx = target.x - pos.x;
    let dy = target.y - pos.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance <= ARRIVE_EPSILON {
        store.positions[i] = target;
        store.paths[i].pop_front();
        return;
    }

    let step = (store.speeds[i] * dt).min(distance);
    if step >= distance {
        store.positions[i] = target;
        store.paths[i].pop_front();
    } else {
        store.positions[i].x = pos.x + dx / distance * step;
        store.positions[i].y = pos.y + dy / distance * step;
    }
}

/// Advance every agent by `dt` (one simulation tick).
pub fn advance_all(store: &mut AgentStore, dt: f32) {
    for agent in 0..store.len() as u32 {
        advance(store, AgentId(agent), dt);
    }
}
