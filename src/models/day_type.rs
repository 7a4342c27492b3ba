//! Day type (shift classification).

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The shift classification of an attendance record.
///
/// Quota-bound job types work either a full or a half day against the norm;
/// fixed-credit job types are always recorded on the non-quota day type.
///
/// # Example
///
/// ```
/// use checkroll_engine::models::DayType;
///
/// assert_eq!(DayType::try_from(2).unwrap(), DayType::HalfDay);
/// assert_eq!(DayType::HalfDay.id(), 2);
/// assert!(DayType::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum DayType {
    /// A full working day measured against the full norm.
    FullDay,
    /// A half working day measured against half the norm.
    HalfDay,
    /// Non-quota work carrying a fixed day credit.
    NonQuota,
}

impl DayType {
    /// Returns the numeric id used on the wire for this day type.
    pub fn id(self) -> i32 {
        match self {
            DayType::FullDay => 1,
            DayType::HalfDay => 2,
            DayType::NonQuota => 3,
        }
    }
}

impl TryFrom<i32> for DayType {
    type Error = EngineError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(DayType::FullDay),
            2 => Ok(DayType::HalfDay),
            3 => Ok(DayType::NonQuota),
            other => Err(EngineError::InvalidDayType { day_type: other }),
        }
    }
}

impl From<DayType> for i32 {
    fn from(day_type: DayType) -> i32 {
        day_type.id()
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::FullDay => write!(f, "full day"),
            DayType::HalfDay => write!(f, "half day"),
            DayType::NonQuota => write!(f, "non-quota"),
        }
    }
}
