//! Command-line front end

pub mod commands;
pub mod report;
pub mod script;

pub use commands::*;
