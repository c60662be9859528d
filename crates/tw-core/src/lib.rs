//! `tw-core` — foundational types for the `tilewalk` navigation core.
//!
//! This crate is a dependency of every other `tw-*` crate.  It has no `tw-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`/`toml`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`geom`]       | `TilePos` (discrete), `Vec3` (continuous)                  |
//! | [`projection`] | `TileGeometry`, isometric grid ↔ world projection          |
//! | [`config`]     | `AgentDims`, `MovementTuning`, `NavConfig`, `UnreachablePolicy` |
//! | [`time`]       | `Tick`, `FrameClock`                                       |
//! | [`generation`] | `Generation` — movement cancellation counter               |
//! | [`error`]      | `TwError`, `TwResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types and     |
//! |         | enables `NavConfig::from_toml_str` / `NavConfig::load`.    |

pub mod config;
pub mod error;
pub mod generation;
pub mod geom;
pub mod projection;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AgentDims, MovementTuning, NavConfig, UnreachablePolicy};
pub use error::{TwError, TwResult};
pub use generation::Generation;
pub use geom::{TilePos, Vec3};
pub use projection::TileGeometry;
pub use time::{FrameClock, Tick};
