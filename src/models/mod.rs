//! Core data models for the checkroll engine.
//!
//! This module contains the domain models used throughout the engine.

mod day_type;
mod job_type;
mod record;

pub use day_type::DayType;
pub use job_type::JobType;
pub use record::AttendanceRecord;
