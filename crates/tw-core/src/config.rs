//! Navigation configuration.
//!
//! Typically loaded from a TOML file by the host application and handed to
//! the pathfinder, the movement executor and the session driver.  Every
//! section has defaults matching the reference tile set, so a config file
//! only needs to name what it overrides:
//!
//! ```toml
//! frame_delta = 1.0
//! unreachable = "nearest_to_goal"
//!
//! [agent]
//! width  = 20.0
//! height = 60.0
//!
//! [movement]
//! straight_speed = 1.4
//! ```

use crate::{TileGeometry, TwError, TwResult};

// ── AgentDims ─────────────────────────────────────────────────────────────────

/// Physical size of the walking agent in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentDims {
    /// Footprint width.  Obstacles narrower than this cannot be stood on.
    pub width: f64,
    /// Standing height.
    pub height: f64,
}

impl Default for AgentDims {
    fn default() -> Self {
        Self { width: 20.0, height: 60.0 }
    }
}

impl AgentDims {
    /// Highest step (in world units) the agent can climb in one move.
    #[inline]
    pub fn climb_limit(&self) -> f64 {
        self.height / 1.5
    }
}

// ── MovementTuning ────────────────────────────────────────────────────────────

/// Speed constants for the movement executor, in world units per unit delta.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementTuning {
    /// Speed when the world-space direction has both x and y components.
    pub base_speed: f64,
    /// Speed when the world-space direction is axis-aligned.
    pub straight_speed: f64,
    /// Upper bound on speed while the descent assist is active.
    pub max_fall_speed: f64,
    /// Speed multiplier gained per tile level of drop.
    pub downward_acceleration: f64,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            base_speed:            1.0,
            straight_speed:        1.2,
            max_fall_speed:        3.0,
            downward_acceleration: 1.5,
        }
    }
}

// ── UnreachablePolicy ─────────────────────────────────────────────────────────

/// What the pathfinder returns when the frontier empties before the goal is
/// reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnreachablePolicy {
    /// Return no route at all.
    Fail,
    /// Return the route to the expanded node with the lowest `fCost`.
    #[default]
    ClosestExplored,
    /// Return the route to the expanded node nearest (by heuristic) to the goal.
    NearestToGoal,
}

impl UnreachablePolicy {
    pub const ALL: [UnreachablePolicy; 3] = [
        UnreachablePolicy::Fail,
        UnreachablePolicy::ClosestExplored,
        UnreachablePolicy::NearestToGoal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UnreachablePolicy::Fail            => "fail",
            UnreachablePolicy::ClosestExplored => "closest_explored",
            UnreachablePolicy::NearestToGoal   => "nearest_to_goal",
        }
    }
}

impl std::fmt::Display for UnreachablePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnreachablePolicy {
    type Err = TwError;

    /// Accepts the names produced by [`as_str`][Self::as_str].
    fn from_str(text: &str) -> TwResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == text)
            .ok_or_else(|| TwError::Parse(format!("unknown unreachable policy {text:?}")))
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Top-level navigation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    pub tile: TileGeometry,
    pub agent: AgentDims,
    pub movement: MovementTuning,
    /// Fallback behaviour for goals the search cannot reach.
    pub unreachable: UnreachablePolicy,
    /// Delta handed to `advance` by the session driver on every frame.
    pub frame_delta: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            tile:        TileGeometry::default(),
            agent:       AgentDims::default(),
            movement:    MovementTuning::default(),
            unreachable: UnreachablePolicy::default(),
            frame_delta: 1.0,
        }
    }
}

impl NavConfig {
    /// Reject dimensions and speeds that would make projection or movement
    /// degenerate (zero, negative or non-finite).
    pub fn validate(&self) -> TwResult<()> {
        let checks = [
            ("tile.width", self.tile.width),
            ("tile.height", self.tile.height),
            ("agent.width", self.agent.width),
            ("agent.height", self.agent.height),
            ("movement.base_speed", self.movement.base_speed),
            ("movement.straight_speed", self.movement.straight_speed),
            ("movement.max_fall_speed", self.movement.max_fall_speed),
            ("movement.downward_acceleration", self.movement.downward_acceleration),
            ("frame_delta", self.frame_delta),
        ];
        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(TwError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.tile.thickness.is_finite() && self.tile.thickness >= 0.0) {
            return Err(TwError::Config(format!(
                "tile.thickness must be non-negative, got {}",
                self.tile.thickness
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl NavConfig {
    /// Parse and validate a TOML document.  Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> TwResult<Self> {
        let config: NavConfig =
            toml::from_str(text).map_err(|e| TwError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &std::path::Path) -> TwResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
