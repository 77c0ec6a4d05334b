//! Optiseg CLI library
//!
//! This library provides the command-line interface for the optiseg
//! optimal subword segmentation engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod vocab_source;

pub use error::{CliError, CliResult};
