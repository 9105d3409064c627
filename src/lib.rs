//! FxGrid - Effect Configuration Schema & Grid Engine
//!
//! FxGrid is the schema core of a preset-sharing service for a multi-effect
//! hardware loop station. It answers two questions:
//! 1. Schema - which parameters an effect type exposes, with what bounds,
//!    options, and defaults
//! 2. Grid - how a preset's effects are laid out in memory while editing,
//!    and how they flatten to the persisted wire array
//!
//! # Architecture
//!
//! - `schema`: effect catalog, parameter registry, sequencer block
//!   generation, placement-based filtering of selectable types
//! - `grid`: the 2x4x4 copy-on-write effect grid and the tolerant legacy
//!   wire codec
//!
//! Everything is a synchronous pure function over value types; the crate
//! itself does no I/O.

pub mod cli;
pub mod error;
pub mod grid;
pub mod schema;

pub use error::{FxGridError, Result};
