//! Core configuration shared by the extraction pipeline and its users

pub mod config;

pub use config::{ExtractionConfig, Winding};
