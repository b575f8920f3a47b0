//! playclean: Play Store Dataset Normalization Library
//!
//! A library for turning the raw Play Store apps table into a cleaned,
//! fully numeric dataset through an ordered sequence of per-column rules.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
