//! Record auditing against the checkroll business rules.
//!
//! The validator re-derives the expected OverKilo and ManDays for any
//! record, however it was produced, and cross-checks the pairing and
//! holiday rules against the stored fields. It never fails: malformed
//! input, including an unknown job type id, surfaces as a violation in the
//! report rather than an error.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{compute_man_days, compute_over_kilo};
use crate::models::{AttendanceRecord, DayType};

/// A single business rule breached by a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The stored job type id is outside the classification set.
    UnknownJobType {
        /// The unrecognised job type id.
        job_type_id: i32,
    },
    /// The stored day type id is outside the valid set.
    UnknownDayType {
        /// The unrecognised day type id.
        day_type: i32,
    },
    /// The stored OverKilo disagrees with the rule engine.
    OverKiloMismatch {
        /// The OverKilo the rule engine derives for this record.
        expected: Decimal,
        /// The OverKilo stored on the record.
        actual: Decimal,
    },
    /// The stored ManDays disagrees with the rule engine.
    ManDaysMismatch {
        /// The ManDays the rule engine derives for this record.
        expected: Decimal,
        /// The ManDays stored on the record.
        actual: Decimal,
    },
    /// A holiday-excluded job type is flagged as holiday work.
    HolidayNotAllowed {
        /// The job type id of the record.
        job_type_id: i32,
    },
    /// A quota-bound job type is recorded on the non-quota day.
    DayTypeNotAllowed {
        /// The job type id of the record.
        job_type_id: i32,
        /// The day type id of the record.
        day_type: i32,
    },
    /// A job type that requires the non-quota day is recorded on another
    /// day type.
    NonQuotaDayRequired {
        /// The job type id of the record.
        job_type_id: i32,
        /// The day type id of the record.
        day_type: i32,
    },
    /// The record carries overtime, which the scheme excludes entirely.
    OvertimePresent {
        /// The stored day overtime.
        day_ot: Decimal,
        /// The stored night overtime.
        night_ot: Decimal,
    },
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::UnknownJobType { job_type_id } => {
                write!(f, "job type {} is outside the classification set", job_type_id)
            }
            ViolationKind::UnknownDayType { day_type } => {
                write!(f, "day type {} is outside the valid set", day_type)
            }
            ViolationKind::OverKiloMismatch { expected, actual } => {
                write!(f, "expected overKilo {}, got {}", expected, actual)
            }
            ViolationKind::ManDaysMismatch { expected, actual } => {
                write!(f, "expected manDays {}, got {}", expected, actual)
            }
            ViolationKind::HolidayNotAllowed { job_type_id } => {
                write!(f, "job type {} cannot be holiday work", job_type_id)
            }
            ViolationKind::DayTypeNotAllowed {
                job_type_id,
                day_type,
            } => write!(
                f,
                "job type {} cannot be recorded on day type {}",
                job_type_id, day_type
            ),
            ViolationKind::NonQuotaDayRequired {
                job_type_id,
                day_type,
            } => write!(
                f,
                "job type {} must be recorded on day type 3, got {}",
                job_type_id, day_type
            ),
            ViolationKind::OvertimePresent { day_ot, night_ot } => write!(
                f,
                "overtime is excluded from the scheme (dayOT={}, nightOT={})",
                day_ot, night_ot
            ),
        }
    }
}

/// One violated rule, with a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationReport {
    /// The rule that was breached, with its relevant values.
    #[serde(flatten)]
    pub kind: ViolationKind,
    /// Human-readable description of the breach.
    pub message: String,
}

impl ViolationReport {
    fn new(kind: ViolationKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

/// The outcome of auditing one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True iff no rule was breached.
    pub compliant: bool,
    /// One entry per breached rule, in audit order.
    pub violations: Vec<ViolationReport>,
}

/// Audits a record against every business rule of the scheme.
///
/// The expected OverKilo and ManDays are recomputed through the rule
/// engine using the record's own `norm_value`, and compared exactly to the
/// stored values; a stored ManDays that should be zero is flagged like any
/// other mismatch. The pairing, holiday, and overtime rules are checked
/// directly against the stored fields. A record can accumulate multiple
/// independent violations; the report order is deterministic.
///
/// This function never fails. Unknown job or day type ids become
/// violations, and the remaining rules that do not depend on the unknown
/// field are still checked.
///
/// # Example
///
/// ```
/// # use checkroll_engine::models::AttendanceRecord;
/// use checkroll_engine::validation::validate;
/// # fn demo(record: &AttendanceRecord) {
/// let report = validate(record);
/// if !report.compliant {
///     for violation in &report.violations {
///         eprintln!("{}", violation.message);
///     }
/// }
/// # }
/// ```
pub fn validate(record: &AttendanceRecord) -> ValidationReport {
    let mut violations = Vec::new();

    let job_type = match record.job_type() {
        Ok(job_type) => Some(job_type),
        Err(_) => {
            violations.push(ViolationReport::new(ViolationKind::UnknownJobType {
                job_type_id: record.job_type_id,
            }));
            None
        }
    };
    let day_type = match record.day_type() {
        Ok(day_type) => Some(day_type),
        Err(_) => {
            violations.push(ViolationReport::new(ViolationKind::UnknownDayType {
                day_type: record.day_type_id,
            }));
            None
        }
    };

    if let Some(job_type) = job_type {
        let expected_over_kilo = compute_over_kilo(record.amount, record.norm_value, job_type);
        if record.over_kilo != expected_over_kilo {
            violations.push(ViolationReport::new(ViolationKind::OverKiloMismatch {
                expected: expected_over_kilo,
                actual: record.over_kilo,
            }));
        }

        if let Some(day_type) = day_type {
            if job_type.is_quota_bound() && day_type == DayType::NonQuota {
                violations.push(ViolationReport::new(ViolationKind::DayTypeNotAllowed {
                    job_type_id: record.job_type_id,
                    day_type: record.day_type_id,
                }));
            }
            if job_type.requires_non_quota_day() && day_type != DayType::NonQuota {
                violations.push(ViolationReport::new(ViolationKind::NonQuotaDayRequired {
                    job_type_id: record.job_type_id,
                    day_type: record.day_type_id,
                }));
            }

            match compute_man_days(
                record.amount,
                record.norm_value,
                job_type,
                day_type,
                record.is_holiday,
            ) {
                Ok(expected_man_days) => {
                    if record.man_days != expected_man_days {
                        violations.push(ViolationReport::new(ViolationKind::ManDaysMismatch {
                            expected: expected_man_days,
                            actual: record.man_days,
                        }));
                    }
                }
                // The pairing violation recorded above stands in for the
                // ManDays comparison; there is no expected value to compare.
                Err(_) => {}
            }
        }

        if !job_type.holiday_allowed() && record.is_holiday {
            violations.push(ViolationReport::new(ViolationKind::HolidayNotAllowed {
                job_type_id: record.job_type_id,
            }));
        }
    }

    if record.day_ot != Decimal::ZERO || record.night_ot != Decimal::ZERO {
        violations.push(ViolationReport::new(ViolationKind::OvertimePresent {
            day_ot: record.day_ot,
            night_ot: record.night_ot,
        }));
    }

    ValidationReport {
        compliant: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// A compliant full-day tea plucking record meeting the norm.
    fn base_record() -> AttendanceRecord {
        AttendanceRecord {
            employee_attendance_id: 0,
            group_id: 1112,
            amount: dec("22"),
            collected_date: DateTime::parse_from_rfc3339("2026-01-15T06:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            division_id: 13,
            employee_number: "1001".to_string(),
            employee_type_id: 3,
            estate_id: 4224,
            field_id: 156,
            gang_id: 0,
            job_type_id: 3,
            session_id: 0,
            work_type_id: 0,
            day_type_id: 1,
            day_ot: Decimal::ZERO,
            night_ot: Decimal::ZERO,
            noam: dec("20"),
            created_by: 1,
            is_active: true,
            is_holiday: false,
            muster_chit_id: 1,
            main_division_id: 13,
            over_kilo: dec("2"),
            operator_id: 0,
            man_days: Decimal::ONE,
            employee_id: 10001,
            registration_number: "1001".to_string(),
            employee_name: "Employee_1001".to_string(),
            gender_id: 1,
            norm_value: dec("20"),
            min_norm_value: dec("18"),
            error_message: String::new(),
        }
    }

    fn kinds(report: &ValidationReport) -> Vec<&ViolationKind> {
        report.violations.iter().map(|v| &v.kind).collect()
    }

    #[test]
    fn test_compliant_record_has_empty_report() {
        let report = validate(&base_record());
        assert!(report.compliant);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_stale_over_kilo_is_flagged() {
        let mut record = base_record();
        record.over_kilo = dec("5");
        let report = validate(&record);

        assert!(!report.compliant);
        assert_eq!(
            kinds(&report),
            vec![&ViolationKind::OverKiloMismatch {
                expected: dec("2"),
                actual: dec("5"),
            }]
        );
    }

    #[test]
    fn test_fixed_credit_record_with_over_kilo_is_flagged() {
        let mut record = base_record();
        record.job_type_id = 5;
        record.day_type_id = 3;
        record.amount = dec("25");
        record.over_kilo = dec("5");
        let report = validate(&record);

        assert_eq!(
            kinds(&report),
            vec![&ViolationKind::OverKiloMismatch {
                expected: Decimal::ZERO,
                actual: dec("5"),
            }]
        );
    }

    #[test]
    fn test_nonzero_man_days_below_threshold_is_flagged() {
        // The reference validator only compared against nonzero
        // expectations, so a record credited a day without meeting the
        // norm slipped through. The expected value here is exactly zero.
        let mut record = base_record();
        record.amount = dec("15");
        record.over_kilo = Decimal::ZERO;
        record.man_days = Decimal::ONE;
        let report = validate(&record);

        assert_eq!(
            kinds(&report),
            vec![&ViolationKind::ManDaysMismatch {
                expected: Decimal::ZERO,
                actual: Decimal::ONE,
            }]
        );
    }

    #[test]
    fn test_missing_holiday_uplift_is_flagged() {
        let mut record = base_record();
        record.is_holiday = true; // expected 1.5, stored 1
        let report = validate(&record);

        assert_eq!(
            kinds(&report),
            vec![&ViolationKind::ManDaysMismatch {
                expected: dec("1.5"),
                actual: Decimal::ONE,
            }]
        );
    }

    #[test]
    fn test_other_work_holiday_is_flagged() {
        let mut record = base_record();
        record.job_type_id = 8;
        record.day_type_id = 3;
        record.amount = dec("5");
        record.over_kilo = Decimal::ZERO;
        record.man_days = Decimal::ONE;
        record.is_holiday = true;
        let report = validate(&record);

        assert_eq!(
            kinds(&report),
            vec![&ViolationKind::HolidayNotAllowed { job_type_id: 8 }]
        );
    }

    #[test]
    fn test_quota_job_on_non_quota_day_is_flagged_without_man_days_noise() {
        let mut record = base_record();
        record.day_type_id = 3;
        record.over_kilo = dec("2");
        let report = validate(&record);

        // The pairing breach is the violation; no ManDays comparison is
        // possible for an out-of-domain pairing.
        assert_eq!(
            kinds(&report),
            vec![&ViolationKind::DayTypeNotAllowed {
                job_type_id: 3,
                day_type: 3,
            }]
        );
    }

    #[test]
    fn test_fixed_credit_job_off_non_quota_day_is_flagged() {
        let mut record = base_record();
        record.job_type_id = 7;
        record.day_type_id = 1;
        record.amount = dec("3");
        record.over_kilo = Decimal::ZERO;
        record.man_days = Decimal::ONE;
        let report = validate(&record);

        assert_eq!(
            kinds(&report),
            vec![&ViolationKind::NonQuotaDayRequired {
                job_type_id: 7,
                day_type: 1,
            }]
        );
    }

    #[test]
    fn test_overtime_is_flagged() {
        let mut record = base_record();
        record.day_ot = dec("2");
        let report = validate(&record);

        assert_eq!(
            kinds(&report),
            vec![&ViolationKind::OvertimePresent {
                day_ot: dec("2"),
                night_ot: Decimal::ZERO,
            }]
        );
    }

    #[test]
    fn test_unknown_job_type_becomes_a_violation_not_a_panic() {
        let mut record = base_record();
        record.job_type_id = 99;
        record.night_ot = dec("1");
        let report = validate(&record);

        assert!(!report.compliant);
        assert_eq!(
            kinds(&report),
            vec![
                &ViolationKind::UnknownJobType { job_type_id: 99 },
                &ViolationKind::OvertimePresent {
                    day_ot: Decimal::ZERO,
                    night_ot: dec("1"),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_day_type_still_audits_over_kilo() {
        let mut record = base_record();
        record.day_type_id = 7;
        record.over_kilo = dec("9");
        let report = validate(&record);

        assert_eq!(
            kinds(&report),
            vec![
                &ViolationKind::UnknownDayType { day_type: 7 },
                &ViolationKind::OverKiloMismatch {
                    expected: dec("2"),
                    actual: dec("9"),
                },
            ]
        );
    }

    #[test]
    fn test_violations_accumulate() {
        let mut record = base_record();
        record.job_type_id = 8;
        record.day_type_id = 1; // must be the non-quota day
        record.is_holiday = true; // holiday-excluded category
        record.amount = dec("25");
        record.over_kilo = Decimal::ZERO; // rule engine expects 5
        record.man_days = dec("1.5"); // other work always earns 1
        record.night_ot = dec("1");
        let report = validate(&record);

        assert!(!report.compliant);
        assert_eq!(report.violations.len(), 5);
    }

    #[test]
    fn test_report_serializes_with_rule_tags() {
        let mut record = base_record();
        record.over_kilo = dec("5");
        let report = validate(&record);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["compliant"], serde_json::json!(false));
        assert_eq!(
            json["violations"][0]["rule"],
            serde_json::json!("over_kilo_mismatch")
        );
        assert!(json["violations"][0]["message"].is_string());
    }
}
