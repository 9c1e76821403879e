//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the world simulation of Farm Quest. It has **no
//! dependencies** on the terminal or on input handling, so every rule can be
//! driven and checked from plain unit tests.
//!
//! # Module Structure
//!
//! - [`map`]: the static 78x27 village and terrain walkability
//! - [`object`]: trees, stumps, farm plots and crops layered over terrain
//! - [`clock`]: monotonic in-game minute counter
//! - [`status`]: the transient status line message
//! - [`world`]: player state and the rules for every [`GameAction`](types::GameAction)
//! - [`menu`]: main and pause menu selection
//! - [`save`]: versioned JSON snapshots and save slot repositories
//! - [`rng`]: seeded LCG for wood and harvest yields
//!
//! # Game Rules
//!
//! - **Energy**: walking costs 1, tool use costs 5; sleeping restores it all
//! - **Trees**: three axe hits fell a tree into a stump that regrows after an hour
//! - **Crops**: watered crops advance one stage every 10 minutes until ready
//! - **Shop**: buys wood, stone and wheat; sells seed packs when you have nothing to sell
//!
//! # Example
//!
//! ```
//! use farm_quest_core::{Outcome, World};
//! use farm_quest_core::types::{Direction, GameAction, MAX_ENERGY};
//!
//! let mut world = World::new(12345);
//!
//! // Walking costs energy and advances the clock.
//! assert_eq!(world.apply(GameAction::Move(Direction::Right)), Outcome::Applied);
//! assert_eq!(world.player().energy, MAX_ENERGY - 1);
//!
//! // Using a tool with nothing equipped is refused.
//! assert_eq!(world.apply(GameAction::UseTool), Outcome::Rejected);
//! assert_eq!(world.status().message(), Some("Select a tool first! (1-4)"));
//! ```
//!
//! # Timing
//!
//! World time only moves when the player acts (one minute per paid step) or
//! sleeps. Call [`World::tick_frame`] once per rendered frame to expire status
//! messages and let due stumps and crops catch up.

pub mod clock;
pub mod map;
pub mod menu;
pub mod object;
pub mod rng;
pub mod save;
pub mod status;
pub mod world;

pub use farm_quest_types as types;

// Re-export commonly used types for convenience
pub use clock::GameClock;
pub use map::{MapError, Terrain, TileMap};
pub use menu::{Menu, MenuChoice, MenuKind};
pub use object::{Crop, CropStage, WorldObject};
pub use rng::SimpleRng;
pub use save::{FileSaveRepository, MemorySaveRepository, SaveData, SaveError, SaveRepository};
pub use status::StatusLine;
pub use world::{Hint, Hints, Outcome, Player, TilePos, World};
