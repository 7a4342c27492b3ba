//! Configuration types for the checkroll master data.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files. The engine never hardcodes
//! classification tables; everything here is supplied by the external
//! configuration source and treated as read-only.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::JobType;

/// Identifying master data for the estate the records belong to.
#[derive(Debug, Clone, Deserialize)]
pub struct EstateMetadata {
    /// Estate group id.
    pub group_id: i32,
    /// Estate id.
    pub estate_id: i32,
    /// Employee type id applied to every generated record.
    pub employee_type_id: i32,
}

/// Norm thresholds for quota-bound work.
#[derive(Debug, Clone, Deserialize)]
pub struct NormConfig {
    /// The daily output quota, in kilograms.
    pub norm_value: Decimal,
    /// The minimum norm threshold from the master data.
    pub min_norm_value: Decimal,
    /// Name-of-measure value carried through on each record.
    pub noam: Decimal,
}

/// Reference id lists sampled for record identity fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceLists {
    /// Divisions within the estate.
    pub division_ids: Vec<i32>,
    /// Fields output may be collected from.
    pub field_ids: Vec<i32>,
    /// Gender reference ids.
    pub gender_ids: Vec<i32>,
}

/// An inclusive integer range an amount is sampled from.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AmountRange {
    /// The smallest amount in the range.
    pub min: i64,
    /// The largest amount in the range.
    pub max: i64,
}

/// Amount sampling ranges conditioned on job and day type.
///
/// These are tunable: the only expectation is that full-day quota work
/// usually meets the norm and half-day work usually meets half the norm,
/// so that a generated batch looks realistic.
#[derive(Debug, Clone, Deserialize)]
pub struct AmountRanges {
    /// Quota-bound work on a full day; should straddle the norm from above.
    pub full_day: AmountRange,
    /// Quota-bound work on a half day; should straddle half the norm.
    pub half_day: AmountRange,
    /// Sundry and tapping work; small amounts with no norm relationship.
    pub fixed_credit: AmountRange,
    /// Other general work.
    pub other_work: AmountRange,
}

/// A job type and its weight in the realistic distribution.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct JobTypeWeight {
    /// The job type id being weighted.
    pub job_type_id: i32,
    /// Relative weight; weights need not sum to any particular total.
    pub weight: u32,
}

/// Sampling configuration for the record generator.
#[derive(Debug, Clone, Deserialize)]
pub struct SamplingConfig {
    /// Probability that a record eligible for holiday work is flagged as
    /// holiday. Must lie in [0, 1].
    pub holiday_probability: f64,
    /// Amount ranges by job/day type.
    pub amounts: AmountRanges,
    /// Weighted job type distribution for realistic batches.
    pub job_type_weights: Vec<JobTypeWeight>,
}

/// Raw master configuration file structure, as deserialized from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct MasterConfig {
    /// Estate identity.
    pub estate: EstateMetadata,
    /// Norm thresholds.
    pub norms: NormConfig,
    /// The valid job type id set.
    pub job_type_ids: Vec<i32>,
    /// Reference id lists.
    pub reference: ReferenceLists,
    /// Sampling tunables.
    pub sampling: SamplingConfig,
}

/// The complete validated master data consumed by the engine.
///
/// Built from a [`MasterConfig`] by [`MasterData::new`], which checks the
/// classification set, reference lists, sampling ranges, and weights up
/// front so the generator never has to re-validate them per record.
#[derive(Debug, Clone)]
pub struct MasterData {
    estate: EstateMetadata,
    norms: NormConfig,
    job_types: Vec<JobType>,
    reference: ReferenceLists,
    sampling: SamplingConfig,
    weighted_job_types: Vec<(JobType, u32)>,
}

impl MasterData {
    /// Validates a raw [`MasterConfig`] and builds the master data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidJobType` if the job type set or weight table names
    /// an id outside the scheme, and `InvalidArgument` for empty reference
    /// lists, inverted or negative amount ranges, an out-of-range holiday
    /// probability, or an all-zero weight table.
    pub fn new(config: MasterConfig) -> EngineResult<Self> {
        if config.job_type_ids.is_empty() {
            return Err(EngineError::InvalidArgument {
                message: "job_type_ids must not be empty".to_string(),
            });
        }
        let job_types = config
            .job_type_ids
            .iter()
            .map(|&id| JobType::try_from(id))
            .collect::<EngineResult<Vec<_>>>()?;

        for (name, list) in [
            ("division_ids", &config.reference.division_ids),
            ("field_ids", &config.reference.field_ids),
            ("gender_ids", &config.reference.gender_ids),
        ] {
            if list.is_empty() {
                return Err(EngineError::InvalidArgument {
                    message: format!("{} must not be empty", name),
                });
            }
        }

        let probability = config.sampling.holiday_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(EngineError::InvalidArgument {
                message: format!(
                    "holiday_probability must lie in [0, 1], got {}",
                    probability
                ),
            });
        }

        let amounts = &config.sampling.amounts;
        for (name, range) in [
            ("full_day", amounts.full_day),
            ("half_day", amounts.half_day),
            ("fixed_credit", amounts.fixed_credit),
            ("other_work", amounts.other_work),
        ] {
            if range.min < 0 || range.min > range.max {
                return Err(EngineError::InvalidArgument {
                    message: format!(
                        "amount range '{}' is invalid: min={}, max={}",
                        name, range.min, range.max
                    ),
                });
            }
        }

        let weighted_job_types = config
            .sampling
            .job_type_weights
            .iter()
            .map(|w| Ok((JobType::try_from(w.job_type_id)?, w.weight)))
            .collect::<EngineResult<Vec<_>>>()?;
        if weighted_job_types.iter().map(|(_, w)| u64::from(*w)).sum::<u64>() == 0 {
            return Err(EngineError::InvalidArgument {
                message: "job_type_weights must have a positive total weight".to_string(),
            });
        }

        Ok(Self {
            estate: config.estate,
            norms: config.norms,
            job_types,
            reference: config.reference,
            sampling: config.sampling,
            weighted_job_types,
        })
    }

    /// Returns the estate identity.
    pub fn estate(&self) -> &EstateMetadata {
        &self.estate
    }

    /// Returns the norm thresholds.
    pub fn norms(&self) -> &NormConfig {
        &self.norms
    }

    /// Returns the valid job type set.
    pub fn job_types(&self) -> &[JobType] {
        &self.job_types
    }

    /// Returns the reference id lists.
    pub fn reference(&self) -> &ReferenceLists {
        &self.reference
    }

    /// Returns the sampling tunables.
    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    /// Returns the parsed weighted job type distribution.
    pub fn weighted_job_types(&self) -> &[(JobType, u32)] {
        &self.weighted_job_types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_config() -> MasterConfig {
        MasterConfig {
            estate: EstateMetadata {
                group_id: 1112,
                estate_id: 4224,
                employee_type_id: 3,
            },
            norms: NormConfig {
                norm_value: dec("20"),
                min_norm_value: dec("18"),
                noam: dec("20"),
            },
            job_type_ids: vec![3, 5, 6, 7, 8],
            reference: ReferenceLists {
                division_ids: vec![13, 17],
                field_ids: vec![156, 157, 158],
                gender_ids: vec![1, 2],
            },
            sampling: SamplingConfig {
                holiday_probability: 0.2,
                amounts: AmountRanges {
                    full_day: AmountRange { min: 18, max: 28 },
                    half_day: AmountRange { min: 10, max: 15 },
                    fixed_credit: AmountRange { min: 0, max: 5 },
                    other_work: AmountRange { min: 0, max: 10 },
                },
                job_type_weights: vec![
                    JobTypeWeight { job_type_id: 3, weight: 50 },
                    JobTypeWeight { job_type_id: 6, weight: 20 },
                    JobTypeWeight { job_type_id: 5, weight: 15 },
                    JobTypeWeight { job_type_id: 7, weight: 10 },
                    JobTypeWeight { job_type_id: 8, weight: 5 },
                ],
            },
        }
    }

    #[test]
    fn test_valid_config_builds_master_data() {
        let master = MasterData::new(sample_config()).unwrap();
        assert_eq!(master.job_types().len(), 5);
        assert_eq!(master.estate().group_id, 1112);
        assert_eq!(master.norms().norm_value, dec("20"));
        assert_eq!(master.weighted_job_types()[0], (JobType::TeaPlucking, 50));
    }

    #[test]
    fn test_unknown_job_type_id_is_rejected() {
        let mut config = sample_config();
        config.job_type_ids.push(4);
        match MasterData::new(config) {
            Err(EngineError::InvalidJobType { job_type_id }) => assert_eq!(job_type_id, 4),
            other => panic!("Expected InvalidJobType, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_reference_list_is_rejected() {
        let mut config = sample_config();
        config.reference.gender_ids.clear();
        let error = MasterData::new(config).unwrap_err();
        assert!(error.to_string().contains("gender_ids"));
    }

    #[test]
    fn test_out_of_range_holiday_probability_is_rejected() {
        let mut config = sample_config();
        config.sampling.holiday_probability = 1.5;
        assert!(MasterData::new(config).is_err());
    }

    #[test]
    fn test_inverted_amount_range_is_rejected() {
        let mut config = sample_config();
        config.sampling.amounts.half_day = AmountRange { min: 15, max: 10 };
        let error = MasterData::new(config).unwrap_err();
        assert!(error.to_string().contains("half_day"));
    }

    #[test]
    fn test_zero_total_weight_is_rejected() {
        let mut config = sample_config();
        for weight in &mut config.sampling.job_type_weights {
            weight.weight = 0;
        }
        assert!(MasterData::new(config).is_err());
    }
}
