//! crewroster-core — shared types for the schedule extraction engine.
//!
//! This crate holds everything the pipeline layers agree on: the per-day
//! [`ScheduleEvent`] and its date-keyed [`ScheduleMap`], the assumed-month
//! [`ScheduleConfig`], and the static correction tables the normalizer and
//! extractor consult. No parsing logic lives here.

pub mod config;
pub mod tables;
pub mod types;

pub use config::{Config, ConfigError, ScheduleConfig};
pub use types::{date_key, merge_schedules, Route, ScheduleEvent, ScheduleMap};
