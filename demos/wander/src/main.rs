//! wander: agents strolling between two rooms of a small house.
//!
//! Usage: `wander [config.json] [map.csv]`
//!
//! Without arguments a built-in two-room map and the default configuration
//! are used.  Set `RUST_LOG=debug` to see every route search.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use tn_core::{AgentId, RoomId, SimConfig, Tick, TileId};
use tn_grid::{TileMap, TileMapBuilder, load_map_csv};
use tn_mobility::NavObserver;
use tn_path::AStarPathFinder;
use tn_sim::{SimBuilder, SimObserver, WanderBehavior};

// ── Constants ─────────────────────────────────────────────────────────────────

const NAMES: [&str; 8] = ["Ada", "Bram", "Cleo", "Dov", "Edda", "Finn", "Gus", "Hale"];

const HOUSE_COLS: i32 = 13;
const HOUSE_ROWS: i32 = 8;
/// Column of the wall between the rooms.
const WALL_COL:   i32 = 6;
/// Row of the single door in the wall.
const DOOR_ROW:   i32 = 4;
/// Simulated run length without a config file.
const DEMO_SECS:  f32 = 120.0;

// ── Map ───────────────────────────────────────────────────────────────────────

/// Two rooms side by side joined by one door.  The door tile belongs to no
/// room; a strip of rug in the east room is slower to cross.
fn build_house() -> TileMap {
    let mut b = TileMapBuilder::with_capacity((HOUSE_COLS * HOUSE_ROWS) as usize);
    for row in 0..HOUSE_ROWS {
        for col in 0..HOUSE_COLS {
            if col == WALL_COL && row != DOOR_ROW {
                continue;
            }
            let rug = col >= 9 && (2..=5).contains(&row);
            let tile = b.add_cell(col, row, if rug { 3.0 } else { 1.0 });
            if col < WALL_COL {
                b.set_room(tile, RoomId(1));
            } else if col > WALL_COL {
                b.set_room(tile, RoomId(2));
            }
        }
    }
    b.connect_cells();
    b.build()
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs room changes and keeps a few counters for the final summary.
struct HouseLog {
    names:        Vec<String>,
    now:          Tick,
    room_changes: usize,
    arrivals:     usize,
    lost:         usize,
    peak_moving:  usize,
}

impl HouseLog {
    fn new(names: Vec<String>) -> Self {
        Self { names, now: Tick::ZERO, room_changes: 0, arrivals: 0, lost: 0, peak_moving: 0 }
    }

    fn name(&self, agent: AgentId) -> &str {
        self.names.get(agent.index()).map_or("?", String::as_str)
    }
}

impl NavObserver for HouseLog {
    fn on_room_entered(&mut self, agent: AgentId, room: RoomId) {
        self.room_changes += 1;
        log::info!("{}: {} entered room {}", self.now, self.name(agent), room.0);
    }

    fn on_room_left(&mut self, agent: AgentId, room: RoomId) {
        log::debug!("{}: {} left room {}", self.now, self.name(agent), room.0);
    }

    fn on_no_path(&mut self, _agent: AgentId, _name: &str) {
        self.lost += 1;
    }
}

impl SimObserver for HouseLog {
    fn on_tick_start(&mut self, tick: Tick) {
        self.now = tick;
    }

    fn on_arrived(&mut self, agent: AgentId, tile: TileId) {
        self.arrivals += 1;
        log::debug!("{}: {} reached {tile}", self.now, self.name(agent));
    }

    fn on_tick_end(&mut self, _tick: Tick, moving: usize) {
        self.peak_moving = self.peak_moving.max(moving);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => {
            let mut config = SimConfig::default();
            config.total_ticks = config.make_clock().ticks_for_secs(DEMO_SECS);
            config
        }
    };
    let map = match args.next() {
        Some(path) => load_map_csv(Path::new(&path)).with_context(|| format!("loading map {path}"))?,
        None => build_house(),
    };
    if map.is_empty() {
        bail!("the map has no walkable tiles");
    }

    let names: Vec<String> = NAMES.iter().map(|n| n.to_string()).collect();
    let finder = AStarPathFinder::from_config(&config.nav);
    let mut sim = SimBuilder::new(config, map, WanderBehavior::new(0.02), finder)
        .names(names.clone())
        .build()?;

    log::info!(
        "{} agents, {} tiles, {} ticks of {:.3}s",
        sim.agent_count(),
        sim.map.tile_count(),
        sim.config.total_ticks,
        sim.config.tick_duration_secs,
    );

    let mut observer = HouseLog::new(names);
    let t0 = Instant::now();
    sim.run(&mut observer)?;
    let wall = t0.elapsed();

    let finals: Vec<_> = sim
        .agents
        .iter()
        .map(|a| {
            serde_json::json!({
                "name": a.name,
                "x":    a.position.x,
                "y":    a.position.y,
                "tile": a.tile(&sim.map).map(|t| t.0),
            })
        })
        .collect();
    let summary = serde_json::json!({
        "simulated_secs": sim.clock.elapsed_secs(),
        "wall_ms":        wall.as_secs_f64() * 1e3,
        "room_entries":   observer.room_changes,
        "arrivals":       observer.arrivals,
        "lost":           observer.lost,
        "peak_moving":    observer.peak_moving,
        "agents":         finals,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
