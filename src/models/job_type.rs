//! Job type classification.
//!
//! This module defines the closed set of work categories recognised by the
//! checkroll scheme. The upstream ERP identifies categories by numeric id;
//! the engine works with the [`JobType`] enum so the compiler enforces
//! exhaustive handling of every category.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A work category in the plucking checkroll scheme.
///
/// Each variant corresponds to a fixed numeric id used on the wire:
///
/// | Variant         | Id | Norm rules                                |
/// |-----------------|----|-------------------------------------------|
/// | `TeaPlucking`   | 3  | quota-bound, full or half day             |
/// | `Sundry`        | 5  | fixed credit, non-quota day only          |
/// | `OtherPlucking` | 6  | quota-bound, full or half day             |
/// | `Tapping`       | 7  | fixed credit, non-quota day only          |
/// | `OtherWork`     | 8  | fixed credit, non-quota day, no holidays  |
///
/// # Example
///
/// ```
/// use checkroll_engine::models::JobType;
///
/// let job_type = JobType::try_from(3).unwrap();
/// assert_eq!(job_type, JobType::TeaPlucking);
/// assert!(job_type.is_quota_bound());
/// assert!(JobType::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum JobType {
    /// Tea plucking - quota-bound harvest work measured against the norm.
    TeaPlucking,
    /// Sundry estate work - fixed day credit, no norm consideration.
    Sundry,
    /// Other plucking work - quota-bound, same norm rules as tea plucking.
    OtherPlucking,
    /// Rubber tapping - fixed day credit, no norm consideration.
    Tapping,
    /// Other general work - fixed day credit, excluded from holiday uplift.
    OtherWork,
}

impl JobType {
    /// Every job type in the scheme, in wire id order.
    pub const ALL: [JobType; 5] = [
        JobType::TeaPlucking,
        JobType::Sundry,
        JobType::OtherPlucking,
        JobType::Tapping,
        JobType::OtherWork,
    ];

    /// Returns the numeric id used on the wire for this job type.
    pub fn id(self) -> i32 {
        match self {
            JobType::TeaPlucking => 3,
            JobType::Sundry => 5,
            JobType::OtherPlucking => 6,
            JobType::Tapping => 7,
            JobType::OtherWork => 8,
        }
    }

    /// Returns true if this category is measured against the daily norm.
    ///
    /// Quota-bound categories earn OverKilo above the norm and fractional
    /// ManDays against the norm thresholds.
    pub fn is_quota_bound(self) -> bool {
        matches!(self, JobType::TeaPlucking | JobType::OtherPlucking)
    }

    /// Returns true if this category earns a fixed full day credit with no
    /// norm consideration and no OverKilo.
    pub fn is_fixed_credit(self) -> bool {
        matches!(self, JobType::Sundry | JobType::Tapping)
    }

    /// Returns true if this category must be recorded on the non-quota day
    /// type.
    pub fn requires_non_quota_day(self) -> bool {
        matches!(
            self,
            JobType::Sundry | JobType::Tapping | JobType::OtherWork
        )
    }

    /// Returns true if records in this category may be flagged as holiday
    /// work. `OtherWork` is excluded from the holiday uplift entirely.
    pub fn holiday_allowed(self) -> bool {
        self != JobType::OtherWork
    }
}

impl TryFrom<i32> for JobType {
    type Error = EngineError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            3 => Ok(JobType::TeaPlucking),
            5 => Ok(JobType::Sundry),
            6 => Ok(JobType::OtherPlucking),
            7 => Ok(JobType::Tapping),
            8 => Ok(JobType::OtherWork),
            other => Err(EngineError::InvalidJobType { job_type_id: other }),
        }
    }
}

impl From<JobType> for i32 {
    fn from(job_type: JobType) -> i32 {
        job_type.id()
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobType::TeaPlucking => "tea plucking",
            JobType::Sundry => "sundry",
            JobType::OtherPlucking => "other plucking",
            JobType::Tapping => "tapping",
            JobType::OtherWork => "other work",
        };
        write!(f, "{} ({})", name, self.id())
    }
}
