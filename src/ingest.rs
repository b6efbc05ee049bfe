//! Ingest — the engine's front door.
//!
//! Parsing is attempted in order: pre-structured schedule JSON → heuristic
//! token-stream extraction. A vision-model backend is permitted to hand back
//! a ready-made schedule document; only unstructured OCR text goes through
//! the normalizer/extractor pipeline.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::extractor;
use crewroster_core::{ScheduleConfig, ScheduleMap};

/// Parse any supported input into a schedule.
///
/// Total over all strings: structured-JSON detection failures fall through
/// silently to the heuristic engine, which itself never fails.
pub fn parse_schedule(input: &str, config: &ScheduleConfig) -> ScheduleMap {
    if let Some(map) = try_structured(input) {
        tracing::debug!(events = map.len(), "input was pre-structured schedule JSON");
        return map;
    }
    extractor::extract(input, config)
}

/// Attempt to read the input as a vision-model schedule document.
fn try_structured(input: &str) -> Option<ScheduleMap> {
    let body = strip_fences(input.trim());
    if !body.starts_with('{') {
        return None;
    }
    match serde_json::from_str::<ScheduleMap>(body) {
        Ok(map) => Some(map),
        Err(err) => {
            tracing::debug!(%err, "not schedule JSON, falling back to heuristics");
            None
        }
    }
}

/// Vision models habitually wrap their JSON in Markdown code fences.
fn strip_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.trim().strip_suffix("```") {
        Some(body) => body.trim(),
        None => text,
    }
}

/// Read roster text from a file, or from stdin when no path was given.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read roster text from {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read roster text from stdin")?;
            Ok(buffer)
        }
    }
}
