//! # CLI Layer
//!
//! One possible client of the addrctl library, and the only place that knows
//! about terminal I/O, argument parsing and exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: context start-up, dispatch and per-command handlers
//! - `render`: table and message output

pub mod commands;
pub mod render;
pub mod setup;

pub use commands::run;
