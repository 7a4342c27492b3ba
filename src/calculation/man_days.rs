//! ManDays computation.
//!
//! ManDays is the fractional worked-day credit awarded for a record, based
//! on output versus norm, shift length, and holiday status.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayType, JobType};

/// Full-day credit on a holiday.
fn full_day_holiday() -> Decimal {
    Decimal::new(15, 1)
}

/// Half-day credit on a holiday.
fn half_day_holiday() -> Decimal {
    Decimal::new(75, 2)
}

/// Half-day credit on an ordinary day.
fn half_day() -> Decimal {
    Decimal::new(5, 1)
}

/// Computes the ManDays credit for a record.
///
/// Quota-bound job types (tea plucking, other plucking) earn their credit
/// against the norm, with inclusive thresholds:
///
/// * full day, `amount >= norm_value` → 1.5 on a holiday, 1 otherwise
/// * half day, `amount >= norm_value / 2` → 0.75 on a holiday, 0.5 otherwise
/// * threshold not met → 0
///
/// Fixed-credit job types (sundry, tapping) and other work always earn a
/// full day regardless of amount, day type, and holiday status.
///
/// # Errors
///
/// A quota-bound job type paired with the non-quota day type is outside the
/// engine's domain and fails with `UnsupportedDayType`. The reference data
/// generator silently credited a full day here; that default masked
/// malformed pairings, so this engine refuses them instead.
///
/// # Examples
///
/// ```
/// use checkroll_engine::calculation::compute_man_days;
/// use checkroll_engine::models::{DayType, JobType};
/// use rust_decimal::Decimal;
///
/// let credit = compute_man_days(
///     Decimal::from(22),
///     Decimal::from(20),
///     JobType::TeaPlucking,
///     DayType::FullDay,
///     true,
/// )
/// .unwrap();
/// assert_eq!(credit, Decimal::new(15, 1)); // 1.5
/// ```
pub fn compute_man_days(
    amount: Decimal,
    norm_value: Decimal,
    job_type: JobType,
    day_type: DayType,
    is_holiday: bool,
) -> EngineResult<Decimal> {
    if job_type.is_quota_bound() {
        return match day_type {
            DayType::FullDay => {
                if amount >= norm_value {
                    Ok(if is_holiday {
                        full_day_holiday()
                    } else {
                        Decimal::ONE
                    })
                } else {
                    Ok(Decimal::ZERO)
                }
            }
            DayType::HalfDay => {
                if amount >= norm_value / Decimal::TWO {
                    Ok(if is_holiday { half_day_holiday() } else { half_day() })
                } else {
                    Ok(Decimal::ZERO)
                }
            }
            DayType::NonQuota => Err(EngineError::UnsupportedDayType {
                job_type_id: job_type.id(),
                day_type: day_type.id(),
            }),
        };
    }

    // Fixed-credit and other work always earn one day, independent of
    // amount, day type, and holiday status.
    Ok(Decimal::ONE)
}
