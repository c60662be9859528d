//! Trace row types.

use std::fmt;

use tw_core::{Tick, TilePos, Vec3};

/// What happened on the frame a row records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// The agent moved.
    Move,
    /// The agent snapped onto an intermediate waypoint.
    Waypoint,
    /// The agent snapped onto the end of its walk.
    Arrive,
}

impl TraceEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            TraceEvent::Move     => "move",
            TraceEvent::Waypoint => "waypoint",
            TraceEvent::Arrive   => "arrive",
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a walk trace.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceRow {
    pub tick:   u64,
    /// Agent world position.
    pub x:      f64,
    pub y:      f64,
    pub z:      f64,
    /// Last tile the agent stood on exactly.
    pub tile_x: i32,
    pub tile_y: i32,
    pub tile_z: i32,
    pub event:  TraceEvent,
}

impl TraceRow {
    pub fn new(tick: Tick, position: Vec3, tile: TilePos, event: TraceEvent) -> Self {
        Self {
            tick:   tick.0,
            x:      position.x,
            y:      position.y,
            z:      position.z,
            tile_x: tile.x,
            tile_y: tile.y,
            tile_z: tile.z,
            event,
        }
    }
}
