//! ascii — headless demo for the gridsim engine.
//!
//! Carves a maze step-by-step, drops 24 agents into it, sends each one to a
//! random open cell, runs the simulation for a few seconds of sim time, and
//! prints the resulting grid plus a per-agent summary to stdout.

use std::time::Instant;

use anyhow::Result;

use gs_agent::AgentStore;
use gs_core::{world_to_cell, AgentId, Cell, SimConfig, SimRng, Tick};
use gs_grid::{CellState, GridMap};
use gs_search::{AStarPlanner, SearchError};
use gs_sim::{Command, Sim, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 24;
const SEED:        u64   = 42;
const RUN_TICKS:   u64   = 600; // 10 s of sim time at 60 ticks/s

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts carve steps and failed path requests; flags maze completion.
#[derive(Default)]
struct DemoObserver {
    carves:   usize,
    complete: bool,
    failures: usize,
}

impl SimObserver for DemoObserver {
    fn on_carve_step(&mut self, _tick: Tick, _event: gs_maze::CarveEvent) {
        self.carves += 1;
    }

    fn on_maze_complete(&mut self, tick: Tick) {
        self.complete = true;
        println!("Maze complete at {tick}");
    }

    fn on_search_failed(&mut self, tick: Tick, agent: AgentId, goal: Cell, error: &SearchError) {
        self.failures += 1;
        eprintln!("{tick}: path request for {agent} to {goal} failed: {error}");
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// `#` blocked, `.` open, digit = number of agents on the cell (capped at 9).
fn render(grid: &GridMap, agents: &AgentStore, cell_size: f32) {
    let mut counts = vec![0u32; (grid.rows() * grid.cols()) as usize];
    for &pos in &agents.positions {
        let cell = world_to_cell(pos, cell_size);
        if grid.in_bounds(cell) {
            counts[(cell.row as u32 * grid.cols() + cell.col as u32) as usize] += 1;
        }
    }

    for row in 0..grid.rows() as i32 {
        let mut line = String::with_capacity(grid.cols() as usize);
        for col in 0..grid.cols() as i32 {
            let n = counts[(row as u32 * grid.cols() + col as u32) as usize];
            line.push(match (n, grid.get(Cell::new(row, col))) {
                (0, Some(CellState::Open)) => '.',
                (0, _) => '#',
                (1..=9, _) => char::from_digit(n, 10).unwrap_or('9'),
                _ => '9',
            });
        }
        println!("{line}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== ascii — gridsim engine demo ===");

    let config = SimConfig { seed: SEED, ..SimConfig::default() };
    println!(
        "Grid: {}x{}  |  Agents: {AGENT_COUNT}  |  Seed: {SEED}",
        config.rows, config.cols
    );
    println!();

    let mut sim = SimBuilder::new(config, AStarPlanner).build()?;
    let mut obs = DemoObserver::default();

    // 1. Carve the maze, watching it grow a few cells per tick.
    sim.push(Command::RegenerateMaze);
    while !obs.complete {
        sim.step(&mut obs)?;
    }
    println!("Carved {} passages over {} ticks", obs.carves, sim.tick().0);
    println!();

    // 2. Spawn agents and send each to a random open cell.
    sim.push(Command::SpawnAgents(AGENT_COUNT));
    sim.step(&mut obs)?;
    dispatch_all(&mut sim);

    // 3. Run.
    let t0 = Instant::now();
    sim.run_ticks(RUN_TICKS, &mut obs)?;
    let elapsed = t0.elapsed();

    println!("Ran {RUN_TICKS} ticks in {:.3} s", elapsed.as_secs_f64());
    if obs.failures > 0 {
        println!("  {} path requests failed", obs.failures);
    }
    println!();

    // 4. Final grid.
    render(&sim.grid, &sim.agents, sim.config.cell_size);
    println!();

    // 5. Per-agent summary.
    println!("{:<8} {:<12} {:<8}", "Agent", "Cell", "Idle");
    println!("{}", "-".repeat(30));
    for agent in sim.agents.agent_ids() {
        let cell = match sim.agents.position(agent) {
            Some(pos) => world_to_cell(pos, sim.config.cell_size).to_string(),
            None => "-".to_string(),
        };
        println!(
            "{:<8} {:<12} {:<8}",
            agent,
            cell,
            if sim.agents.is_idle(agent) { "yes" } else { "no" },
        );
    }

    Ok(())
}

/// Queue a path request to a random open cell for every agent.
fn dispatch_all(sim: &mut Sim<AStarPlanner>) {
    // Separate RNG so goal choice doesn't perturb the simulation stream.
    let mut rng = SimRng::new(SEED ^ 0xa5a5);
    let open: Vec<Cell> = sim.grid.open_cells().collect();
    for agent in sim.agents.agent_ids().collect::<Vec<_>>() {
        if let Some(&goal) = rng.choose(&open) {
            sim.push(Command::RequestPath { agent, goal });
        }
    }
}
