//! `tw-motion` — walks one agent along routes, a frame at a time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`state`]    | `MovementState`, `WalkStep`, `MoveTicket`, `WalkStatus`, `StepEvent` |
//! | [`speed`]    | `step_speed` — direction and descent speed rule                   |
//! | [`executor`] | `MovementExecutor<P>` — `move_to` / `advance` state machine       |
//! | [`error`]    | `MotionError`, `MotionResult<T>`                                  |
//!
//! # Movement model
//!
//! 1. [`MovementExecutor::move_to`] asks the [`Pathfinder`][tw_spatial::Pathfinder]
//!    for a route from the agent's tile (or from the tile it is heading to, if
//!    a walk is in flight), bumps the movement generation and switches to
//!    `Following`.  Any earlier walk is dropped on the spot.
//! 2. The host calls [`MovementExecutor::advance`] once per frame.  The agent
//!    moves straight towards the active waypoint's standing point and snaps
//!    onto it once it is within one frame's reach.
//! 3. After the last waypoint the executor returns to `Idle`.
//!
//! A [`MoveTicket`] captures the generation its walk was issued under;
//! [`MovementExecutor::status`] reports it `Superseded` as soon as any later
//! command replaces that walk.

pub mod error;
pub mod executor;
pub mod speed;
pub mod state;


pub use error::{MotionError, MotionResult};
pub use executor::MovementExecutor;
pub use speed::step_speed;
pub use state::{MoveTicket, MovementState, StepEvent, WalkStatus, WalkStep};
