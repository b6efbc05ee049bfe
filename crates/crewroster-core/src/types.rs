//! Core types for crewroster — the structured schedule the engine produces.
//!
//! A schedule is a map from a zero-padded `YYYY-MM-DD` key to exactly one
//! [`ScheduleEvent`]. Keys are plain strings rather than calendar dates on
//! purpose: a detected day is placed in the configured month verbatim, with
//! no rollover or range validation, so `2026-02-31` is a legal key. Range
//! checking belongs to downstream consumers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The engine's sole output: one event per calendar date.
///
/// `BTreeMap` keeps serialization order deterministic.
pub type ScheduleMap = BTreeMap<String, ScheduleEvent>;

/// A parsed per-day schedule entry.
///
/// Partially-filled flights are valid intermediate states — a route can be
/// discovered before the flight number, and either may never arrive at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScheduleEvent {
    /// A flight assignment day.
    Flight {
        #[serde(
            rename = "flightNumber",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        flight_number: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
        /// Accumulated `HH:MM` tokens for the day, joined with `-`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// A rest / off-duty day.
    RestDay {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl ScheduleEvent {
    /// A flight day with no fields filled in yet.
    pub fn empty_flight() -> Self {
        ScheduleEvent::Flight {
            flight_number: None,
            route: None,
            time: None,
            note: None,
        }
    }

    /// A rest day with no note.
    pub fn rest_day() -> Self {
        ScheduleEvent::RestDay { note: None }
    }

    pub fn is_flight(&self) -> bool {
        matches!(self, ScheduleEvent::Flight { .. })
    }
}

/// An origin/destination pair of 3-letter airport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

/// Format the date key for a detected day-of-month under the configured
/// year/month. Always zero-padded; the day is taken verbatim.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Overlay `update` onto `base`: dates present in both take `update`'s event.
///
/// This is how a freshly parsed roster is folded into a schedule the caller
/// already holds.
pub fn merge_schedules(base: &mut ScheduleMap, update: ScheduleMap) {
    base.extend(update);
}
