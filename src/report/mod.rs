//! Report module - summarizing cleaning runs

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
