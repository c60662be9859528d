//! Integration tests for tw-sim.

use tw_core::{NavConfig, Tick, TilePos, UnreachablePolicy, Vec3};
use tw_motion::{MotionError, StepEvent, WalkStatus};
use tw_spatial::{AStarPathfinder, HeightGrid};

use crate::{NoopObserver, SessionBuilder, SimError, WalkObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tile(x: i32, y: i32, z: i32) -> TilePos {
    TilePos::new(x, y, z)
}

/// Everything the session reported, in order.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    positions: Vec<(Tick, Vec3, TilePos)>,
    waypoints: Vec<(Tick, TilePos, usize)>,
    arrivals:  Vec<(Tick, TilePos)>,
    run_ends:  Vec<Tick>,
}

impl WalkObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_position(&mut self, tick: Tick, position: Vec3, tile: TilePos) {
        self.positions.push((tick, position, tile));
    }
    fn on_waypoint(&mut self, tick: Tick, tile: TilePos, index: usize) {
        self.waypoints.push((tick, tile, index));
    }
    fn on_arrival(&mut self, tick: Tick, tile: TilePos) {
        self.arrivals.push((tick, tile));
    }
    fn on_run_end(&mut self, final_tick: Tick) {
        self.run_ends.push(final_tick);
    }
}

// ── SessionBuilder ────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(4, 4, 0)).build().unwrap();
        assert_eq!(s.walker.current_tile(), tile(0, 0, 0));
        assert_eq!(s.now(), Tick::ZERO);
        assert!(s.obstacles().is_empty());
        assert_eq!(s.grid().tile_count(), 16);
    }

    #[test]
    fn door_is_used() {
        let s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(4, 4, 0))
            .door(tile(3, 2, 0))
            .build()
            .unwrap();
        assert_eq!(s.walker.current_tile(), tile(3, 2, 0));
    }

    #[test]
    fn invalid_config_errors() {
        let cfg = NavConfig { frame_delta: 0.0, ..Default::default() };
        let r = SessionBuilder::new(cfg, HeightGrid::flat(2, 2, 0)).build();
        assert!(matches!(r, Err(SimError::Config(_))));
    }

    #[test]
    fn empty_grid_errors() {
        let r = SessionBuilder::new(NavConfig::default(), HeightGrid::empty()).build();
        assert!(matches!(r, Err(SimError::Motion(MotionError::NoStandingTile))));
    }

    /// `0 0 0 _ 0` along x: tile (4, 0) is cut off by the gap.
    fn gapped_strip() -> HeightGrid {
        HeightGrid::new(vec![vec![0], vec![0], vec![0], vec![-1], vec![0]])
    }

    #[test]
    fn pathfinder_can_be_replaced() {
        let grid = gapped_strip();
        let strict = AStarPathfinder::default().with_policy(UnreachablePolicy::Fail);
        let mut s = SessionBuilder::new(NavConfig::default(), grid)
            .pathfinder(strict)
            .build()
            .unwrap();
        assert!(s.command(tile(4, 0, 0)).is_none());
        assert!(s.command_with(tile(4, 0, 0), UnreachablePolicy::NearestToGoal).is_some());
    }

    #[test]
    fn replacement_pathfinder_keeps_its_policy() {
        let lenient = AStarPathfinder::default().with_policy(UnreachablePolicy::NearestToGoal);
        let mut s = SessionBuilder::new(NavConfig::default(), gapped_strip())
            .pathfinder(lenient)
            .build()
            .unwrap();
        assert_eq!(s.config().unreachable, UnreachablePolicy::NearestToGoal);

        let ticket = s.command(tile(4, 0, 0)).unwrap();
        assert!(!ticket.reached_goal);
        assert_eq!(ticket.destination, tile(2, 0, 0));

        let cfg = NavConfig { unreachable: UnreachablePolicy::NearestToGoal, ..Default::default() };
        let strict = AStarPathfinder::default().with_policy(UnreachablePolicy::Fail);
        let mut s = SessionBuilder::new(cfg, gapped_strip()).pathfinder(strict).build().unwrap();
        assert_eq!(s.config().unreachable, UnreachablePolicy::Fail);
        assert!(s.command(tile(4, 0, 0)).is_none());
    }

    #[test]
    fn policy_override_reaches_pathfinder() {
        let cfg = NavConfig { unreachable: UnreachablePolicy::NearestToGoal, ..Default::default() };
        let mut s = SessionBuilder::new(cfg, gapped_strip())
            .policy(UnreachablePolicy::Fail)
            .build()
            .unwrap();
        assert_eq!(s.config().unreachable, UnreachablePolicy::Fail);
        assert!(s.command(tile(4, 0, 0)).is_none());
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_loop {
    use super::*;

    #[test]
    fn walk_reports_positions_waypoints_and_arrival() {
        let mut s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(3, 1, 0)).build().unwrap();
        let ticket = s.command(tile(2, 0, 0)).unwrap();
        let mut rec = Recorder::default();
        let arrived = s.run_until_idle(1_000, &mut rec).unwrap();

        assert_eq!(rec.arrivals, vec![(arrived, tile(2, 0, 0))]);
        assert_eq!(rec.waypoints.len(), 1);
        assert_eq!(rec.waypoints[0].1, tile(1, 0, 0));
        assert!(rec.waypoints[0].0 < arrived);
        // One start and one position per frame, frames 0 ..= arrived.
        assert_eq!(rec.starts.len() as u64, arrived.0 + 1);
        assert_eq!(rec.positions.len(), rec.starts.len());
        assert_eq!(rec.run_ends, vec![arrived.offset(1)]);
        assert_eq!(rec.positions.last().unwrap().1, s.walker.position());
        assert_eq!(s.walker.status(&ticket), WalkStatus::Arrived);
    }

    #[test]
    fn idle_session_returns_immediately() {
        let mut s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(2, 2, 0)).build().unwrap();
        let mut rec = Recorder::default();
        assert_eq!(s.run_until_idle(10, &mut rec).unwrap(), Tick::ZERO);
        assert!(rec.starts.is_empty());
        assert_eq!(rec.run_ends, vec![Tick::ZERO]);
    }

    #[test]
    fn long_walk_times_out() {
        let mut s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(6, 1, 0)).build().unwrap();
        s.command(tile(5, 0, 0)).unwrap();
        let err = s.run_until_idle(3, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Timeout { ticks: 3 }));
        assert_eq!(s.now(), Tick(3));
        assert!(s.walker.is_moving());
    }

    #[test]
    fn run_ticks_runs_idle_frames_too() {
        let mut s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(2, 2, 0)).build().unwrap();
        let mut rec = Recorder::default();
        s.run_ticks(5, &mut rec);
        assert_eq!(rec.starts, (0..5).map(Tick).collect::<Vec<_>>());
        assert!(rec.positions.is_empty());
        assert_eq!(s.now(), Tick(5));
    }

    #[test]
    fn frame_delta_sets_step_length() {
        let cfg = NavConfig { frame_delta: 2.0, ..Default::default() };
        let mut s = SessionBuilder::new(cfg, HeightGrid::flat(2, 1, 0)).build().unwrap();
        s.command(tile(1, 0, 0)).unwrap();
        let before = s.walker.position();
        assert_eq!(s.step(&mut NoopObserver), StepEvent::Moving);
        assert!(((s.walker.position() - before).magnitude() - 2.0).abs() < 1e-9);
        s.step(&mut NoopObserver);
        s.step(&mut NoopObserver);
        assert!((s.clock.elapsed - 6.0).abs() < 1e-12);
    }
}

// ── World changes ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod world_changes {
    use super::*;

    #[test]
    fn swapping_the_grid_resettles_the_agent() {
        let mut s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(2, 2, 0)).build().unwrap();
        let ticket = s.command(tile(1, 1, 0)).unwrap();
        let moved_to = s.swap_grid(HeightGrid::new(vec![vec![-1, 0], vec![0, 0]])).unwrap();
        assert_eq!(moved_to, tile(0, 1, 0));
        assert_eq!(s.walker.status(&ticket), WalkStatus::Superseded);
        assert_eq!(s.grid().height_at(0, 0), HeightGrid::ABSENT);
    }

    #[test]
    fn swapping_in_an_empty_grid_fails() {
        let mut s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(2, 2, 0)).build().unwrap();
        let r = s.swap_grid(HeightGrid::empty());
        assert!(matches!(r, Err(SimError::Motion(MotionError::NoStandingTile))));
    }

    #[test]
    fn new_obstacle_lifts_the_agent_after_resettle() {
        let mut s = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(2, 2, 0)).build().unwrap();
        s.obstacles_mut().stack(0, 0, 8.0, 32.0);
        s.resettle().unwrap();
        assert_eq!(s.walker.position().z, 40.0);
    }
}

// ── File loading ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod files {
    use super::*;

    #[test]
    fn builds_from_config_and_grid_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("nav.toml");
        let grid = dir.path().join("room.csv");
        std::fs::write(&cfg, "frame_delta = 0.5\nunreachable = \"fail\"\n").unwrap();
        std::fs::write(&grid, "0,0,0\n0,1,0\n").unwrap();

        let s = SessionBuilder::from_files(Some(&cfg), &grid).unwrap().build().unwrap();
        assert_eq!(s.config().frame_delta, 0.5);
        assert_eq!(s.config().unreachable, UnreachablePolicy::Fail);
        assert_eq!(s.grid().height_at(1, 1), 1);
    }

    #[test]
    fn defaults_without_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let grid = dir.path().join("room.csv");
        std::fs::write(&grid, "0\n").unwrap();
        let b = SessionBuilder::from_files(None, &grid).unwrap();
        assert_eq!(b.build().unwrap().config(), &NavConfig::default());
    }

    #[test]
    fn bad_inputs_map_to_their_errors() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("nav.toml");
        let grid = dir.path().join("room.csv");
        std::fs::write(&cfg, "frame_delta = -1.0\n").unwrap();
        std::fs::write(&grid, "0,q\n").unwrap();

        assert!(matches!(SessionBuilder::from_files(Some(&cfg), &grid), Err(SimError::Config(_))));
        assert!(matches!(SessionBuilder::from_files(None, &grid), Err(SimError::Grid(_))));
    }
}
