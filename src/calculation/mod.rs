//! Rule computation for the checkroll engine.
//!
//! This module contains the pure decision logic of the scheme: resolving
//! the legal day type and holiday flag for a job type, computing the
//! OverKilo excess-output quantity, and computing the fractional ManDays
//! credit. Every function here is a pure function over its explicit
//! inputs; randomness only enters through an injected sampler.

mod constraints;
mod man_days;
mod over_kilo;

pub use constraints::{resolve_day_type, resolve_is_holiday};
pub use man_days::compute_man_days;
pub use over_kilo::compute_over_kilo;
