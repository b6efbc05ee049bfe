//! crewroster — reconstructs a structured crew schedule from the noisy text
//! of a scanned roster image.
//!
//! The OCR (or vision-model) pass that produces the text is a black box with
//! well-known failure modes: misread characters, merged and split tokens,
//! inconsistent line breaks. This crate exposes the pipeline layers as public
//! modules so that integration tests and embedding applications can import
//! them directly.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► Ingest ──► Normalizer ──► Extractor ──► ScheduleMap
//!                 │                                        ▲
//!                 └────── structured vision JSON ──────────┘
//! ```
//!
//! The engine is a pure, synchronous function from text (plus an assumed
//! year/month) to a date-keyed event map. It holds no state across
//! invocations and is total over all input strings.

pub mod extractor;
pub mod ingest;
pub mod normalizer;

pub use crewroster_core::{
    date_key, merge_schedules, Config, ConfigError, Route, ScheduleConfig, ScheduleEvent,
    ScheduleMap,
};
pub use extractor::extract;
pub use ingest::parse_schedule;
