//! Synthetic attendance record generation.
//!
//! The generator produces wire-complete [`AttendanceRecord`]s that satisfy
//! every classification rule by construction: it picks a legal day type and
//! holiday flag through the constraint resolver, samples an amount
//! conditioned on the job and day type, and always derives OverKilo and
//! ManDays through the rule engine rather than fabricating them.
//!
//! # Example
//!
//! ```no_run
//! use checkroll_engine::config::ConfigLoader;
//! use checkroll_engine::generator::{RecordGenerator, RecordOverrides, RngSampler};
//!
//! let master = ConfigLoader::load("./config/agrigen").unwrap().into_master();
//! let generator = RecordGenerator::new(&master);
//! let mut sampler = RngSampler::from_entropy();
//!
//! let record = generator
//!     .generate_record(&RecordOverrides::default(), &mut sampler)
//!     .unwrap();
//! println!("{} earned {} man days", record.employee_name, record.man_days);
//! ```

mod sampler;

pub use sampler::{RngSampler, Sampler};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{
    compute_man_days, compute_over_kilo, resolve_day_type, resolve_is_holiday,
};
use crate::config::MasterData;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, DayType, JobType};

/// Per-field overrides for record generation.
///
/// Any field set here takes the literal override value; every other field
/// is derived or sampled. Overrides are applied verbatim, so an override
/// combination that breaks the pairing rules fails generation (raw ids at
/// the enum boundary, pairing breaches in the rule engine), and an
/// overridden holiday flag on a holiday-excluded job type produces a record
/// the validator will flag.
#[derive(Debug, Clone, Default)]
pub struct RecordOverrides {
    /// Employee muster number.
    pub employee_number: Option<String>,
    /// Employee primary key.
    pub employee_id: Option<i32>,
    /// Employee display name.
    pub employee_name: Option<String>,
    /// Registration number; defaults to the muster number.
    pub registration_number: Option<String>,
    /// Raw job type id; checked against the classification set.
    pub job_type_id: Option<i32>,
    /// Division id.
    pub division_id: Option<i32>,
    /// Field id.
    pub field_id: Option<i32>,
    /// Gender reference id.
    pub gender_id: Option<i32>,
    /// Raw day type id; checked against the valid set.
    pub day_type_id: Option<i32>,
    /// Holiday flag.
    pub is_holiday: Option<bool>,
    /// Output amount; must not be negative.
    pub amount: Option<Decimal>,
    /// Collection date; defaults to now.
    pub collected_date: Option<DateTime<Utc>>,
    /// Work gang id.
    pub gang_id: Option<i32>,
    /// Muster session id.
    pub session_id: Option<i32>,
    /// Work type id.
    pub work_type_id: Option<i32>,
    /// Creating user id.
    pub created_by: Option<i32>,
    /// Active flag.
    pub is_active: Option<bool>,
    /// Muster chit id.
    pub muster_chit_id: Option<i32>,
    /// Weighing operator id.
    pub operator_id: Option<i32>,
}

/// Generates synthetic attendance records from the master data tables.
///
/// The generator is stateless: every call is a pure function of the master
/// data, the overrides, and the injected sampler, so batches may be
/// partitioned across workers as long as each worker owns its sampler.
#[derive(Debug, Clone)]
pub struct RecordGenerator<'a> {
    master: &'a MasterData,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a generator over the given master data.
    pub fn new(master: &'a MasterData) -> Self {
        Self { master }
    }

    /// Generates a single attendance record.
    ///
    /// Fields present in `overrides` are taken verbatim; everything else is
    /// sampled from the master data, with the day type and holiday flag
    /// resolved through the constraint rules and OverKilo/ManDays computed
    /// by the rule engine.
    ///
    /// # Errors
    ///
    /// * `InvalidJobType` / `InvalidDayType` - a raw override id outside
    ///   the valid set
    /// * `InvalidArgument` - a negative amount override
    /// * `UnsupportedDayType` - an override pairing a quota job type with
    ///   the non-quota day
    pub fn generate_record(
        &self,
        overrides: &RecordOverrides,
        sampler: &mut impl Sampler,
    ) -> EngineResult<AttendanceRecord> {
        let master = self.master;

        let job_type = match overrides.job_type_id {
            Some(id) => JobType::try_from(id)?,
            None => *sampler.pick(master.job_types()),
        };

        let day_type = match overrides.day_type_id {
            Some(id) => DayType::try_from(id)?,
            None => resolve_day_type(job_type, sampler),
        };

        let is_holiday = match overrides.is_holiday {
            Some(flag) => flag,
            None => resolve_is_holiday(
                job_type,
                day_type,
                master.sampling().holiday_probability,
                sampler,
            ),
        };

        let amount = match overrides.amount {
            Some(amount) => {
                if amount < Decimal::ZERO {
                    return Err(EngineError::InvalidArgument {
                        message: format!("amount must not be negative, got {}", amount),
                    });
                }
                amount
            }
            None => self.sample_amount(job_type, day_type, sampler),
        };

        let norm_value = master.norms().norm_value;
        let over_kilo = compute_over_kilo(amount, norm_value, job_type);
        let man_days = compute_man_days(amount, norm_value, job_type, day_type, is_holiday)?;

        let employee_number = match &overrides.employee_number {
            Some(number) => number.clone(),
            None => sampler.int_in_range(1000, 9999).to_string(),
        };
        let employee_id = match overrides.employee_id {
            Some(id) => id,
            None => sampler.int_in_range(10_000, 15_000) as i32,
        };
        let employee_name = match &overrides.employee_name {
            Some(name) => name.clone(),
            None => format!("Employee_{}", employee_number),
        };
        let registration_number = overrides
            .registration_number
            .clone()
            .unwrap_or_else(|| employee_number.clone());

        let division_id = match overrides.division_id {
            Some(id) => id,
            None => *sampler.pick(&master.reference().division_ids),
        };
        let field_id = match overrides.field_id {
            Some(id) => id,
            None => *sampler.pick(&master.reference().field_ids),
        };
        let gender_id = match overrides.gender_id {
            Some(id) => id,
            None => *sampler.pick(&master.reference().gender_ids),
        };

        Ok(AttendanceRecord {
            employee_attendance_id: 0,
            group_id: master.estate().group_id,
            amount,
            collected_date: overrides.collected_date.unwrap_or_else(Utc::now),
            division_id,
            employee_number,
            employee_type_id: master.estate().employee_type_id,
            estate_id: master.estate().estate_id,
            field_id,
            gang_id: overrides.gang_id.unwrap_or(0),
            job_type_id: job_type.id(),
            session_id: overrides.session_id.unwrap_or(0),
            work_type_id: overrides.work_type_id.unwrap_or(0),
            day_type_id: day_type.id(),
            // The scheme excludes overtime entirely.
            day_ot: Decimal::ZERO,
            night_ot: Decimal::ZERO,
            noam: master.norms().noam,
            created_by: overrides.created_by.unwrap_or(1),
            is_active: overrides.is_active.unwrap_or(true),
            is_holiday,
            muster_chit_id: overrides.muster_chit_id.unwrap_or(1),
            main_division_id: division_id,
            over_kilo,
            operator_id: overrides.operator_id.unwrap_or(0),
            man_days,
            employee_id,
            registration_number,
            employee_name,
            gender_id,
            norm_value,
            min_norm_value: master.norms().min_norm_value,
            error_message: String::new(),
        })
    }

    /// Generates `count` independent records with shared overrides.
    ///
    /// The call is atomic: the first generation error aborts the whole
    /// batch and no partial batch is returned. A count of zero yields an
    /// empty batch.
    pub fn generate_batch(
        &self,
        count: usize,
        overrides: &RecordOverrides,
        sampler: &mut impl Sampler,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        debug!(count, "generating attendance batch");
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.generate_record(overrides, sampler)?);
        }
        Ok(records)
    }

    /// Generates one record per employee with a realistic job type mix.
    ///
    /// Employees are numbered sequentially from 1000 (ids from 10000) and
    /// share a collection date. Job types follow the weighted distribution
    /// from the master data (50/20/15/10/5 in the shipped tables) instead
    /// of the uniform draw used by [`generate_batch`].
    ///
    /// [`generate_batch`]: RecordGenerator::generate_batch
    pub fn generate_realistic_batch(
        &self,
        employee_count: usize,
        date: Option<DateTime<Utc>>,
        sampler: &mut impl Sampler,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        debug!(employee_count, "generating realistic attendance batch");
        let collected_date = date.unwrap_or_else(Utc::now);

        let mut records = Vec::with_capacity(employee_count);
        for i in 0..employee_count {
            let employee_number = (1000 + i).to_string();
            let overrides = RecordOverrides {
                employee_number: Some(employee_number.clone()),
                registration_number: Some(employee_number.clone()),
                employee_id: Some(10_000 + i as i32),
                employee_name: Some(format!("Employee_{}", employee_number)),
                collected_date: Some(collected_date),
                job_type_id: Some(self.pick_weighted_job_type(sampler).id()),
                ..RecordOverrides::default()
            };
            records.push(self.generate_record(&overrides, sampler)?);
        }
        Ok(records)
    }

    /// Samples an amount conditioned on the job and day type.
    fn sample_amount(
        &self,
        job_type: JobType,
        day_type: DayType,
        sampler: &mut impl Sampler,
    ) -> Decimal {
        let amounts = &self.master.sampling().amounts;
        let range = if job_type.is_quota_bound() {
            match day_type {
                DayType::HalfDay => amounts.half_day,
                // A quota job on the non-quota day is refused by the rule
                // engine before the amount matters.
                DayType::FullDay | DayType::NonQuota => amounts.full_day,
            }
        } else if job_type.is_fixed_credit() {
            amounts.fixed_credit
        } else {
            amounts.other_work
        };
        Decimal::from(sampler.int_in_range(range.min, range.max))
    }

    /// Draws a job type from the configured weighted distribution.
    fn pick_weighted_job_type(&self, sampler: &mut impl Sampler) -> JobType {
        let weights = self.master.weighted_job_types();
        let total: i64 = weights.iter().map(|(_, w)| i64::from(*w)).sum();
        // Master data validation guarantees a positive total.
        let mut roll = sampler.int_in_range(1, total);
        for (job_type, weight) in weights {
            roll -= i64::from(*weight);
            if roll <= 0 {
                return *job_type;
            }
        }
        weights[weights.len() - 1].0
    }
}
