//! Checkroll engine for plantation piece-rate attendance.
//!
//! This crate generates and audits synthetic payroll-attendance records for
//! a norm-based plucking checkroll scheme: output measured against a daily
//! quota earns an excess-output quantity (OverKilo) and a fractional
//! worked-day credit (ManDays). The rule engine derives both quantities
//! from a record's job classification, shift classification, holiday flag,
//! and measured output; the validator re-derives them for any record and
//! reports every rule it breaches.
//!
//! HTTP transport, load shaping, and presentation are owned by the
//! external harness; this crate exposes plain in-process APIs over
//! structured data.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod validation;
