//! CLI library components for the Olympics data-quality pipeline.

pub mod cli;
pub mod commands;
pub mod logging;
