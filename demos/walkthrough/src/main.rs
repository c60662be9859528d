//! walkthrough: one agent walking a room, traced to CSV.
//!
//! Loads (or generates) a room, spawns the agent at the door and sends it to
//! each goal in turn, writing a per-frame trace to `<out>/trace.csv`.
//!
//! Usage:
//!   cargo run -p walkthrough --release
//!   cargo run -p walkthrough --release -- --grid demos/walkthrough/room.csv \
//!       --config demos/walkthrough/nav.toml --goal 3,3 --goal 7,7
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod room;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tw_core::{NavConfig, TilePos, UnreachablePolicy};
use tw_motion::WalkStatus;
use tw_output::{CsvTraceWriter, TraceObserver};
use tw_sim::SessionBuilder;

// ── Defaults ──────────────────────────────────────────────────────────────────

/// Door of the built-in room.
const DOOR: (i32, i32) = (0, 0);

/// Crates scattered over the built-in room.
const CRATE_COUNT: usize = 10;

/// Goals used when none are given: the top of the dais, the far west wall,
/// and a tile beyond the trench.
const DEFAULT_GOALS: &[(i32, i32)] = &[(5, 5), (2, 11), (11, 3)];

#[derive(Parser, Clone)]
#[command(name = "walkthrough")]
#[command(about = "Walk one agent through a tile room and trace every frame")]
struct Args {
    /// Navigation settings (TOML).  Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Height grid (CSV, one row per x).  A built-in room is used when omitted.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Directory the trace is written to
    #[arg(long, default_value = "output/walkthrough")]
    out: PathBuf,

    /// Goal tile (format: X,Y).  Repeat for several goals.
    #[arg(long = "goal")]
    goals: Vec<String>,

    /// Override the config's unreachable-goal policy
    /// (fail, closest_explored, nearest_to_goal)
    #[arg(long)]
    unreachable: Option<UnreachablePolicy>,

    /// Write a move row every N frames
    #[arg(long, default_value_t = 1)]
    trace_every: u64,

    /// Frame budget per goal
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Random seed for crate placement in the built-in room
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn parse_goal(text: &str) -> anyhow::Result<(i32, i32)> {
    let (x, y) = text
        .split_once(',')
        .with_context(|| format!("goal {text:?} is not in X,Y form"))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let t0 = Instant::now();

    // ── 1. Build the session ──────────────────────────────────────────────

    let mut builder = match &args.grid {
        Some(grid) => SessionBuilder::from_files(args.config.as_deref(), grid)
            .with_context(|| format!("loading {}", grid.display()))?,
        None => {
            let config = match &args.config {
                Some(path) => NavConfig::load(path)?,
                None => NavConfig::default(),
            };
            let grid = room::build_grid();
            let door = TilePos::new(DOOR.0, DOOR.1, grid.height_at(DOOR.0, DOOR.1));
            let mut rng = SmallRng::seed_from_u64(args.seed);
            let mut keep_clear = vec![door];
            keep_clear.extend(DEFAULT_GOALS.iter().map(|&(x, y)| TilePos::new(x, y, 0)));
            let crates = room::scatter_crates(&grid, &config.tile, &mut rng, CRATE_COUNT, &keep_clear);
            SessionBuilder::new(config, grid).obstacles(crates).door(door)
        }
    };
    if let Some(policy) = args.unreachable {
        builder = builder.policy(policy);
    }
    let mut session = builder.build()?;

    println!("Room:      {} x {} ({} tiles)", session.grid().width(), session.grid().depth(), session.grid().tile_count());
    println!("Obstacles: {}", session.obstacles().len());
    println!("Spawned:   {}", session.walker.current_tile());
    println!("Policy:    {}", session.config().unreachable);

    // ── 2. Walk ───────────────────────────────────────────────────────────

    std::fs::create_dir_all(&args.out)?;
    let writer = CsvTraceWriter::new(&args.out)?;
    let mut observer = TraceObserver::new(writer).with_move_interval(args.trace_every);

    let goals: Vec<(i32, i32)> = if args.goals.is_empty() {
        DEFAULT_GOALS.to_vec()
    } else {
        args.goals.iter().map(|g| parse_goal(g)).collect::<anyhow::Result<_>>()?
    };

    println!();
    println!("{:<10} {:<12} {:<12} {:>6} {:>8}  result", "goal", "from", "to", "steps", "frames");
    for (x, y) in goals {
        let z = session.grid().height_at(x, y);
        let goal = TilePos::new(x, y, z);
        let from = session.walker.current_tile();
        let started = session.now();

        let Some(ticket) = session.command(goal) else {
            warn!(%goal, "no route");
            println!("{:<10} {:<12} {:<12} {:>6} {:>8}  no route", format!("{x},{y}"), from.to_string(), "-", 0, 0);
            continue;
        };
        session.run_until_idle(args.max_ticks, &mut observer)?;
        if session.walker.status(&ticket) != WalkStatus::Arrived {
            warn!(%goal, "walk did not finish");
        }
        let result = if ticket.reached_goal { "arrived" } else { "partial" };
        println!(
            "{:<10} {:<12} {:<12} {:>6} {:>8}  {result}",
            format!("{x},{y}"),
            from.to_string(),
            session.walker.current_tile().to_string(),
            ticket.waypoints,
            session.now().since(started),
        );
    }
    observer.finish()?;
    let writer = observer.into_writer();

    // ── 3. Summary ────────────────────────────────────────────────────────

    info!(frames = session.now().0, rows = writer.rows_written(), "walkthrough complete");
    println!();
    println!("Frames run: {}", session.now().0);
    println!("Trace rows: {} -> {}", writer.rows_written(), writer.path().display());
    println!("Elapsed:    {:.2?}", t0.elapsed());
    Ok(())
}
