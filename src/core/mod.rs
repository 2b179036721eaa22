//! Core data types and models

pub mod catalog;
pub mod event;
pub mod money;
pub mod preset;
pub mod selection;
pub mod temporal;

pub use catalog::*;
pub use event::*;
pub use money::*;
pub use preset::*;
pub use selection::*;
pub use temporal::*;
