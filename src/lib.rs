//! Farm Quest (workspace facade crate).
//!
//! The game logic, renderer and input layers live in dedicated crates under
//! `crates/`; this package re-exports them as `farm_quest::{core,input,term,types}`
//! and adds the pieces the binary needs: the screen state machine, runtime
//! configuration and log setup.

pub use farm_quest_core as core;
pub use farm_quest_input as input;
pub use farm_quest_term as term;
pub use farm_quest_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, AppError, Flow, Screen};
pub use config::Config;
