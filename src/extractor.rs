//! Stream Extractor — folds the normalized token stream into a per-date
//! schedule map.
//!
//! The only state carried across tokens is the current day context. Matchers
//! run in a fixed priority order: day detection is independent and always
//! runs first; among the field matchers (flight → route → time → status) the
//! first match wins. The matchers are an ordered list of predicate/action
//! pairs so the precedence rules stay auditable and independently testable.
//!
//! The extractor is total: any string in, a (possibly empty) map out. It
//! never panics and never errors.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalizer::{self, Token};
use crewroster_core::tables;
use crewroster_core::types::{date_key, Route, ScheduleEvent, ScheduleMap};
use crewroster_core::ScheduleConfig;

/// Joins accumulated `HH:MM` tokens in an event's time field.
const TIME_JOIN: char = '-';

// ---------------------------------------------------------------------------
// Pattern table
// ---------------------------------------------------------------------------

/// Leading 1-2 digit run, not followed by another digit or a colon. Rejects
/// `2026` (year), `19:30` (time), and anything time-like.
static DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})(?:[^\d:].*)?$").unwrap());

/// 2-char airline prefix + 3-4 digit flight number. The prefix is validated
/// and digit-corrected in [`match_flight`]; the character class here only has
/// to let corrupted prefixes through.
static FLIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9]{2})(\d{3,4})$").unwrap());

/// Two route halves joined by a separator glyph. Halves may arrive truncated
/// (2 chars) or with a digit misread; correction happens per half.
static ROUTE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9]{2,3})[-–~/]([A-Z0-9]{2,3})$").unwrap());

/// Six letters with the separator dropped entirely; split 3/3.
static ROUTE_JOINED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{3})([A-Z]{3})$").unwrap());

/// Strict wall-clock `HH:MM`.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").unwrap());

// ---------------------------------------------------------------------------
// Matchers
// ---------------------------------------------------------------------------

/// A classified event-field token.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldMatch {
    Flight(String),
    Route(Route),
    Time(String),
    Status,
}

type Matcher = fn(&str) -> Option<FieldMatch>;

/// Field matchers in precedence order. The first that fires wins the token.
const FIELD_MATCHERS: &[Matcher] = &[match_flight, match_route, match_time, match_status];

/// Day detection, checked independently of (and before) the field matchers.
/// A day token does not itself create an event.
fn match_day(token: &str) -> Option<u32> {
    let caps = DAY_RE.captures(token)?;
    let day: u32 = caps[1].parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

fn match_flight(token: &str) -> Option<FieldMatch> {
    let caps = FLIGHT_RE.captures(token)?;
    let prefix = &caps[1];
    // A fully numeric prefix is a number, not a corrupted airline code.
    if !prefix.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let fixed: String = prefix
        .chars()
        .map(|c| *tables::FLIGHT_PREFIX_FIXES.get(&c).unwrap_or(&c))
        .collect();
    if !fixed.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    Some(FieldMatch::Flight(format!("{fixed}{}", &caps[2])))
}

fn match_route(token: &str) -> Option<FieldMatch> {
    if let Some(caps) = ROUTE_SPLIT_RE.captures(token) {
        let origin = correct_airport(&caps[1])?;
        let destination = correct_airport(&caps[2])?;
        return Some(FieldMatch::Route(Route::new(origin, destination)));
    }
    if let Some(caps) = ROUTE_JOINED_RE.captures(token) {
        return Some(FieldMatch::Route(Route::new(&caps[1], &caps[2])));
    }
    None
}

/// Resolve one route half to a clean 3-letter code, or reject the route.
fn correct_airport(half: &str) -> Option<String> {
    let half = tables::TOKEN_CORRECTIONS.get(half).copied().unwrap_or(half);
    let half = if half.len() == 2 {
        *tables::ROUTE_FRAGMENTS.get(half)?
    } else {
        half
    };
    (half.len() == 3 && half.chars().all(|c| c.is_ascii_uppercase()))
        .then(|| half.to_string())
}

fn match_time(token: &str) -> Option<FieldMatch> {
    TIME_RE
        .is_match(token)
        .then(|| FieldMatch::Time(token.to_string()))
}

fn match_status(token: &str) -> Option<FieldMatch> {
    tables::STATUS_CODES
        .contains(token)
        .then_some(FieldMatch::Status)
}

// ---------------------------------------------------------------------------
// Fold
// ---------------------------------------------------------------------------

/// Extract a schedule from raw OCR text under the assumed year/month.
pub fn extract(raw: &str, config: &ScheduleConfig) -> ScheduleMap {
    let tokens = normalizer::normalize(raw);
    let map = run(&tokens, config);
    tracing::debug!(
        tokens = tokens.len(),
        events = map.len(),
        "extraction complete"
    );
    map
}

/// Fold an already-normalized token stream into a schedule map.
///
/// Exposed separately from [`extract`] so matcher precedence can be exercised
/// on hand-built token streams.
pub fn run(tokens: &[Token], config: &ScheduleConfig) -> ScheduleMap {
    let (_, map) = tokens.iter().fold(
        (None::<u32>, ScheduleMap::new()),
        |(mut current_day, mut map), token| {
            if let Some(day) = match_day(&token.text) {
                tracing::trace!(day, token = %token.text, "day context set");
                current_day = Some(day);
            }

            // Without a day context the token cannot be attributed to a date.
            let Some(day) = current_day else {
                return (current_day, map);
            };

            if let Some(matched) = FIELD_MATCHERS.iter().find_map(|m| m(&token.text)) {
                let key = date_key(config.year, config.month, day);
                apply(&mut map, key, matched);
            }
            (current_day, map)
        },
    );
    map
}

/// Merge one classified field into the event for `key`, enforcing the
/// type-level precedence rules (flight evidence dominates status evidence).
fn apply(map: &mut ScheduleMap, key: String, matched: FieldMatch) {
    match matched {
        FieldMatch::Flight(number) => {
            let event = map.entry(key).or_insert_with(ScheduleEvent::empty_flight);
            // Flight evidence always upgrades the day; a prior rest note is kept.
            if let ScheduleEvent::RestDay { note } = event {
                *event = ScheduleEvent::Flight {
                    flight_number: None,
                    route: None,
                    time: None,
                    note: note.take(),
                };
            }
            if let ScheduleEvent::Flight { flight_number, .. } = event {
                *flight_number = Some(number);
            }
        }
        FieldMatch::Route(route) => {
            // A bare route implies a flight day even without a flight number,
            // but an established rest day keeps its type.
            let event = map.entry(key).or_insert_with(ScheduleEvent::empty_flight);
            if let ScheduleEvent::Flight { route: slot, .. } = event {
                *slot = Some(route);
            }
        }
        FieldMatch::Time(time) => {
            // Times only attach to an event that already exists; the rest-day
            // variant carries no time field.
            if let Some(ScheduleEvent::Flight { time: slot, .. }) = map.get_mut(&key) {
                match slot {
                    None => *slot = Some(time),
                    Some(existing) => {
                        if !existing.split(TIME_JOIN).any(|t| t == time) {
                            existing.push(TIME_JOIN);
                            existing.push_str(&time);
                        }
                    }
                }
            }
        }
        FieldMatch::Status => {
            // Flight evidence strictly dominates: a flight day is never
            // simultaneously a rest day.
            if !map.get(&key).is_some_and(ScheduleEvent::is_flight) {
                map.insert(key, ScheduleEvent::rest_day());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests — matcher level (the fold is covered by the integration harnesses)
// ---------------------------------------------------------------------------
