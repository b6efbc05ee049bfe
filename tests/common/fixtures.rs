//! Static roster corpora used across harnesses.
//!
//! All corpora assume the default configuration month (January 2026). The
//! noisy corpus exercises every correction table at least once; the garbage
//! corpus deliberately contains nothing that can establish a day context.

/// A clean, well-separated roster: one day per line, as a good scan reads.
pub const ROSTER_CLEAN: &str = "\
01 MON KE085 ICN-JFK 19:30
04 THU ATDO
08 MON KE082 JFK-ICN 12:00
";

/// The same schedule as [`ROSTER_CLEAN`] after a bad scan: currency glyphs
/// for letters, digit-for-letter confusions, doubled column rules, a
/// duplicated time token, and a route with its separator dropped.
pub const ROSTER_NOISY: &str = "\
01 ₩ED K3085 1CN-JFK 19:30 ||
04 ATD0 ||
08 KE082 JFKICN 12:00 12:00
";

/// OCR output of something that is not a roster at all. No token starts with
/// a 1-2 digit day number, so no day context can ever be established.
pub const ROSTER_GARBAGE: &str = "\
lorem ipsum dolor sit amet ===== ?????
total pages: none // scanned by unit 99
";

/// A multi-day roster where day rows and event evidence are separated by
/// unrelated filler tokens.
pub const ROSTER_SPARSE: &str = "\
05 crew briefing room b KE123 GMP-NRT 07:45
standby remarks apply
06 OFF
";

/// What the vision-model backend returns: a ready-made schedule document.
pub const VISION_JSON: &str = r#"{
  "2026-01-01": {
    "type": "Flight",
    "flightNumber": "KE085",
    "route": { "origin": "ICN", "destination": "JFK" },
    "time": "19:30"
  },
  "2026-01-04": { "type": "RestDay" }
}"#;

/// The same document wrapped in the Markdown fences vision models emit.
pub fn vision_json_fenced() -> String {
    format!("```json\n{VISION_JSON}\n```")
}

/// Generate a large synthetic roster for throughput-style tests: `rows`
/// flight rows cycling through 28 days and a small route vocabulary.
pub fn roster_high_volume(rows: u32) -> String {
    (0..rows)
        .map(|i| {
            let day = i % 28 + 1;
            let route = ["ICN-JFK", "JFK-ICN", "GMP-NRT", "NRT-GMP"][i as usize % 4];
            format!(
                "{day:02} KE{:03} {route} {:02}:{:02}\n",
                i % 900 + 100,
                i % 24,
                i % 60,
            )
        })
        .collect()
}
