//! The attendance record model.
//!
//! This module defines [`AttendanceRecord`], the flat wire record posted to
//! the checkroll bulk-upload endpoint. Field names on the JSON wire must
//! match the upstream ERP contract exactly, including its `ID`/`OT`
//! capitalisation, so the serde renames here are explicit where the default
//! camelCase rule would disagree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{DayType, JobType};

/// A single attendance record for one employee on one collection date.
///
/// The classification fields (`job_type_id`, `day_type_id`) are stored as
/// raw wire ids rather than enums so that externally supplied records with
/// out-of-set ids still deserialize and can be audited by the validator.
/// Use [`AttendanceRecord::job_type`] and [`AttendanceRecord::day_type`]
/// for the checked conversions.
///
/// `over_kilo` and `man_days` are derived quantities. The generator always
/// computes them through the rule engine; the validator recomputes them and
/// flags any record whose stored values disagree. Records are immutable
/// once constructed; a corrected record is a new synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Server-assigned row id; always 0 for new uploads.
    #[serde(rename = "employeeAttendanceID")]
    pub employee_attendance_id: i64,
    /// Estate group the record belongs to.
    #[serde(rename = "groupID")]
    pub group_id: i32,
    /// Output collected, in kilograms.
    pub amount: Decimal,
    /// The date the output was collected.
    pub collected_date: DateTime<Utc>,
    /// Division within the estate.
    #[serde(rename = "divisionID")]
    pub division_id: i32,
    /// Employee muster number.
    pub employee_number: String,
    /// Employee type classification in the upstream ERP.
    #[serde(rename = "employeeTypeID")]
    pub employee_type_id: i32,
    /// Estate the record belongs to.
    #[serde(rename = "estateID")]
    pub estate_id: i32,
    /// Field the output was collected from.
    #[serde(rename = "fieldID")]
    pub field_id: i32,
    /// Work gang assignment.
    #[serde(rename = "gangID")]
    pub gang_id: i32,
    /// Work category id; see [`JobType`] for the valid set.
    #[serde(rename = "jobTypeID")]
    pub job_type_id: i32,
    /// Muster session.
    #[serde(rename = "sessionID")]
    pub session_id: i32,
    /// Work type within the job category.
    #[serde(rename = "workTypeID")]
    pub work_type_id: i32,
    /// Shift classification id; see [`DayType`] for the valid set.
    #[serde(rename = "dayType")]
    pub day_type_id: i32,
    /// Day overtime hours. The checkroll scheme excludes overtime; always 0.
    #[serde(rename = "dayOT")]
    pub day_ot: Decimal,
    /// Night overtime hours. The checkroll scheme excludes overtime; always 0.
    #[serde(rename = "nightOT")]
    pub night_ot: Decimal,
    /// Name of a measure carried through from the upstream master data.
    pub noam: Decimal,
    /// User id that created the record.
    pub created_by: i32,
    /// Soft-delete flag carried through to the upload endpoint.
    pub is_active: bool,
    /// Whether the work was performed on a holiday.
    pub is_holiday: bool,
    /// Muster chit the record was captured on.
    #[serde(rename = "musterChitID")]
    pub muster_chit_id: i32,
    /// Main division; mirrors `division_id` for single-division employees.
    #[serde(rename = "mainDivisionID")]
    pub main_division_id: i32,
    /// Output in excess of the norm, derived by the rule engine.
    pub over_kilo: Decimal,
    /// Weighing machine operator.
    #[serde(rename = "operatorID")]
    pub operator_id: i32,
    /// Fractional worked-day credit, derived by the rule engine.
    pub man_days: Decimal,
    /// Employee primary key in the upstream ERP.
    #[serde(rename = "employeeID")]
    pub employee_id: i32,
    /// Employee registration number; mirrors the muster number.
    pub registration_number: String,
    /// Employee display name.
    pub employee_name: String,
    /// Gender reference id.
    #[serde(rename = "genderID")]
    pub gender_id: i32,
    /// The daily norm the amount is measured against.
    pub norm_value: Decimal,
    /// The minimum norm threshold from the master data.
    pub min_norm_value: Decimal,
    /// Server-side error slot; empty on upload.
    pub error_message: String,
}

impl AttendanceRecord {
    /// Returns the record's job type, or `InvalidJobType` if the stored id
    /// is outside the classification set.
    pub fn job_type(&self) -> EngineResult<JobType> {
        JobType::try_from(self.job_type_id)
    }

    /// Returns the record's day type, or `InvalidDayType` if the stored id
    /// is outside the valid set.
    pub fn day_type(&self) -> EngineResult<DayType> {
        DayType::try_from(self.day_type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_record() -> AttendanceRecord {
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

    #[test]
    fn test_job_type_accessor_converts_stored_id() {
        let record = sample_record();
        assert_eq!(record.job_type().unwrap(), JobType::TeaPlucking);
        assert_eq!(record.day_type().unwrap(), DayType::FullDay);
    }

    #[test]
    fn test_job_type_accessor_rejects_unknown_id() {
        let mut record = sample_record();
        record.job_type_id = 42;
        assert!(record.job_type().is_err());
    }

    #[test]
    fn test_wire_field_names_match_upload_contract() {
        let record = sample_record();
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        // The upstream contract capitalises ID/OT suffixes, which the
        // default camelCase rename would get wrong.
        for field in [
            "employeeAttendanceID",
            "groupID",
            "amount",
            "collectedDate",
            "divisionID",
            "employeeNumber",
            "employeeTypeID",
            "estateID",
            "fieldID",
            "gangID",
            "jobTypeID",
            "sessionID",
            "workTypeID",
            "dayType",
            "dayOT",
            "nightOT",
            "noam",
            "createdBy",
            "isActive",
            "isHoliday",
            "musterChitID",
            "mainDivisionID",
            "overKilo",
            "operatorID",
            "manDays",
            "employeeID",
            "registrationNumber",
            "employeeName",
            "genderID",
            "normValue",
            "minNormValue",
            "errorMessage",
        ] {
            assert!(object.contains_key(field), "missing wire field {}", field);
        }
        assert_eq!(object.len(), 32);
    }

    #[test]
    fn test_quantities_serialize_as_plain_numbers() {
        let record = sample_record();
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert!(json["amount"].is_number());
        assert!(json["manDays"].is_number());
        assert_eq!(json["jobTypeID"], serde_json::json!(3));
    }

    #[test]
    fn test_record_with_unknown_ids_still_deserializes() {
        let record = sample_record();
        let mut json: serde_json::Value = serde_json::to_value(&record).unwrap();
        json["jobTypeID"] = serde_json::json!(99);
        json["dayType"] = serde_json::json!(7);

        let parsed: AttendanceRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.job_type_id, 99);
        assert!(parsed.job_type().is_err());
        assert!(parsed.day_type().is_err());
    }
}
