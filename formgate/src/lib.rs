// formgate/src/lib.rs
//! # FormGate CLI
//!
//! Command-line binding for `formgate-core`. It plays the part of the page:
//! it turns arguments or JSON Lines into submit events, runs them through a
//! gatekeeper and reports the outcome.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::replay::{replay_session, ReplaySummary};
