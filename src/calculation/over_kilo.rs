//! OverKilo computation.
//!
//! OverKilo is the output collected in excess of the daily norm, eligible
//! for supplemental piece-rate compensation.

use rust_decimal::Decimal;

use crate::models::JobType;

/// Computes the OverKilo quantity for a record.
///
/// Fixed-credit job types (sundry, tapping) carry no norm consideration and
/// always yield zero. Every other job type earns `amount - norm_value` only
/// when the amount is strictly above the norm; an amount exactly equal to
/// the norm yields zero. The norm threshold for the ManDays credit is
/// inclusive, this one is not.
///
/// # Arguments
///
/// * `amount` - The output collected, in kilograms
/// * `norm_value` - The daily output quota
/// * `job_type` - The work category of the record
///
/// # Examples
///
/// ```
/// use checkroll_engine::calculation::compute_over_kilo;
/// use checkroll_engine::models::JobType;
/// use rust_decimal::Decimal;
///
/// let over = compute_over_kilo(Decimal::from(22), Decimal::from(20), JobType::TeaPlucking);
/// assert_eq!(over, Decimal::from(2));
///
/// // Exactly meeting the norm earns no OverKilo.
/// let at_norm = compute_over_kilo(Decimal::from(20), Decimal::from(20), JobType::TeaPlucking);
/// assert_eq!(at_norm, Decimal::ZERO);
/// ```
pub fn compute_over_kilo(amount: Decimal, norm_value: Decimal, job_type: JobType) -> Decimal {
    if job_type.is_fixed_credit() {
        return Decimal::ZERO;
    }

    if amount > norm_value {
        amount - norm_value
    } else {
        Decimal::ZERO
    }
}
