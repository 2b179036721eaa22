//! Storage layer for the selection journal and its projections

pub mod journal;
pub mod projection;

pub use journal::*;
pub use projection::*;
