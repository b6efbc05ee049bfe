//! Domain-specific assertion macros for crewroster harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! schedule invariant was violated and *what* the map actually held, so a
//! failing precedence test never degenerates into an opaque `Option` unwrap.

// ---------------------------------------------------------------------------
// Event type assertions
// ---------------------------------------------------------------------------

/// Assert that the map holds a `Flight`-typed event for a date key.
///
/// ```rust
/// assert_flight!(map, "2026-01-01");
/// ```
#[macro_export]
macro_rules! assert_flight {
    ($map:expr, $key:expr) => {{
        let map: &crewroster::ScheduleMap = &$map;
        let key: &str = $key;
        match map.get(key) {
            Some(event) if event.is_flight() => {}
            Some(event) => panic!(
                "assert_flight! failed: {key} is not a flight day.\n  actual: {event:?}"
            ),
            None => panic!(
                "assert_flight! failed: no event for {key}.\n  Available dates: {:?}",
                map.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that the map holds a `RestDay`-typed event for a date key.
#[macro_export]
macro_rules! assert_rest_day {
    ($map:expr, $key:expr) => {{
        let map: &crewroster::ScheduleMap = &$map;
        let key: &str = $key;
        match map.get(key) {
            Some(crewroster::ScheduleEvent::RestDay { .. }) => {}
            Some(event) => panic!(
                "assert_rest_day! failed: {key} is not a rest day.\n  actual: {event:?}"
            ),
            None => panic!(
                "assert_rest_day! failed: no event for {key}.\n  Available dates: {:?}",
                map.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Flight field assertions
// ---------------------------------------------------------------------------

/// Assert the flight number recorded for a date.
///
/// ```rust
/// assert_flight_number!(map, "2026-01-01", "KE085");
/// ```
#[macro_export]
macro_rules! assert_flight_number {
    ($map:expr, $key:expr, $expected:expr) => {{
        let map: &crewroster::ScheduleMap = &$map;
        let key: &str = $key;
        let expected: &str = $expected;
        match map.get(key) {
            Some(crewroster::ScheduleEvent::Flight { flight_number, .. }) => {
                match flight_number.as_deref() {
                    Some(actual) if actual == expected => {}
                    actual => panic!(
                        "assert_flight_number! failed for {key}:\n  expected: {expected:?}\n  actual:   {actual:?}"
                    ),
                }
            }
            other => panic!(
                "assert_flight_number! failed: {key} is not a flight day.\n  actual: {other:?}"
            ),
        }
    }};
}

/// Assert the route recorded for a date, written `"ICN-JFK"`.
#[macro_export]
macro_rules! assert_route {
    ($map:expr, $key:expr, $expected:expr) => {{
        let map: &crewroster::ScheduleMap = &$map;
        let key: &str = $key;
        let expected: &str = $expected;
        match map.get(key) {
            Some(crewroster::ScheduleEvent::Flight { route, .. }) => match route {
                Some(actual) if actual.to_string() == expected => {}
                actual => panic!(
                    "assert_route! failed for {key}:\n  expected: {expected:?}\n  actual:   {actual:?}"
                ),
            },
            other => panic!(
                "assert_route! failed: {key} is not a flight day.\n  actual: {other:?}"
            ),
        }
    }};
}

/// Assert the accumulated time field for a date, e.g. `"19:30"` or
/// `"12:00-20:45"`.
#[macro_export]
macro_rules! assert_time {
    ($map:expr, $key:expr, $expected:expr) => {{
        let map: &crewroster::ScheduleMap = &$map;
        let key: &str = $key;
        let expected: Option<&str> = $expected;
        match map.get(key) {
            Some(crewroster::ScheduleEvent::Flight { time, .. }) => {
                if time.as_deref() != expected {
                    panic!(
                        "assert_time! failed for {key}:\n  expected: {expected:?}\n  actual:   {:?}",
                        time.as_deref()
                    );
                }
            }
            other => panic!(
                "assert_time! failed: {key} is not a flight day.\n  actual: {other:?}"
            ),
        }
    }};
}
