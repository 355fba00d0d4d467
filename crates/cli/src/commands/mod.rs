//! CLI subcommands.

pub mod preview;
pub mod steps;
