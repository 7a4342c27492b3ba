//! Constraint resolution for day type and holiday flags.
//!
//! The classification rules pair each job type with a legal set of day
//! types and holiday flags. The resolver picks a legal value, delegating
//! any free choice to an injected [`Sampler`] so synthesis stays
//! deterministic under a seeded source.

use crate::generator::Sampler;
use crate::models::{DayType, JobType};

/// Resolves a legal day type for a job type.
///
/// Job types that require the non-quota day (sundry, tapping, other work)
/// always get [`DayType::NonQuota`]. Quota-bound job types work either a
/// full or a half day; the choice is delegated to the sampler.
///
/// Invalid job type ids cannot reach this function; they fail with
/// `InvalidJobType` at the id-to-enum boundary.
pub fn resolve_day_type(job_type: JobType, sampler: &mut impl Sampler) -> DayType {
    if job_type.requires_non_quota_day() {
        return DayType::NonQuota;
    }

    if sampler.int_in_range(1, 2) == 1 {
        DayType::FullDay
    } else {
        DayType::HalfDay
    }
}

/// Resolves a legal holiday flag for a (job type, day type) pairing.
///
/// Other work never works holidays, and fixed-credit jobs on the non-quota
/// day are not holiday-based. Everything else is flagged as holiday work at
/// the configured probability (20% in the shipped master data).
pub fn resolve_is_holiday(
    job_type: JobType,
    day_type: DayType,
    holiday_probability: f64,
    sampler: &mut impl Sampler,
) -> bool {
    if !job_type.holiday_allowed() {
        return false;
    }

    if job_type.is_fixed_credit() && day_type == DayType::NonQuota {
        return false;
    }

    sampler.chance(holiday_probability)
}
