//! Movement state and the values the executor hands back to its caller.

use tw_core::{Generation, TilePos, Vec3};

// ── Walk ──────────────────────────────────────────────────────────────────────

/// One waypoint of a walk with its precomputed standing point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkStep {
    pub tile: TilePos,
    /// World position the agent snaps to on arrival.
    pub point: Vec3,
}

/// The executor's state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MovementState {
    #[default]
    Idle,
    Following {
        steps: Vec<WalkStep>,
        /// Index of the active waypoint in `steps`.
        index: usize,
        generation: Generation,
    },
}

impl MovementState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, MovementState::Idle)
    }

    /// The waypoint currently being walked towards.
    pub fn active_step(&self) -> Option<WalkStep> {
        match self {
            MovementState::Idle => None,
            MovementState::Following { steps, index, .. } => steps.get(*index).copied(),
        }
    }

    /// Waypoints not yet reached, the active one first.
    pub fn remaining(&self) -> &[WalkStep] {
        match self {
            MovementState::Idle => &[],
            MovementState::Following { steps, index, .. } => &steps[*index..],
        }
    }
}

// ── Tickets & events ──────────────────────────────────────────────────────────

/// Receipt for an accepted `move_to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveTicket {
    /// Generation the walk runs under.
    pub generation: Generation,
    /// Tile that was asked for.
    pub goal: TilePos,
    /// Tile the walk ends on; differs from `goal` for a partial route.
    pub destination: TilePos,
    pub waypoints: usize,
    pub reached_goal: bool,
}

/// Where a walk stands, as seen from its ticket.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkStatus {
    Walking,
    Arrived,
    /// A later command replaced this walk before it finished.
    Superseded,
}

/// What one call to `advance` did.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepEvent {
    /// No walk in progress; nothing moved.
    Idle,
    /// Moved towards the active waypoint without reaching it.
    Moving,
    /// Snapped onto waypoint `index`; more waypoints follow.
    WaypointReached { tile: TilePos, index: usize, generation: Generation },
    /// Snapped onto the last waypoint; the executor is idle again.
    Arrived { tile: TilePos, generation: Generation },
}

impl StepEvent {
    /// The tile snapped onto during this step, if any.
    pub fn reached_tile(&self) -> Option<TilePos> {
        match *self {
            StepEvent::WaypointReached { tile, .. } | StepEvent::Arrived { tile, .. } => Some(tile),
            StepEvent::Idle | StepEvent::Moving => None,
        }
    }
}
