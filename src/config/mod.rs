//! Configuration loading and management for the checkroll engine.
//!
//! This module provides functionality to load the classification tables
//! (valid job type set, norm thresholds, reference id lists, sampling
//! tunables) from YAML files. The tables are external input; nothing in
//! the engine hardcodes them.
//!
//! # Example
//!
//! ```no_run
//! use checkroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/agrigen").unwrap();
//! println!("Estate: {}", loader.master().estate().estate_id);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AmountRange, AmountRanges, EstateMetadata, JobTypeWeight, MasterConfig, MasterData,
    NormConfig, ReferenceLists, SamplingConfig,
};
