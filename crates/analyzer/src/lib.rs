//! Analyzer CLI for the chess game-state classifier
//!
//! This crate provides the glue around the numeric core:
//! - Command-line parsing for the train/predict modes
//! - Dataset line parsing (FEN plus optional label)
//! - Training orchestration and prediction reporting
//!
//! # Usage
//!
//! ```bash
//! # Train a network on labeled positions and save it back
//! analyzer --train --save trained.nn basic.nn positions.txt
//!
//! # Score positions, with accuracy reporting when labels are present
//! analyzer --predict trained.nn positions.txt
//! ```

mod args;
mod dataset;
mod predict;
mod train;

pub use args::*;
pub use dataset::*;
pub use predict::*;
pub use train::*;
