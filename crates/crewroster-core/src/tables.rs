//! Static correction tables for known OCR failure modes.
//!
//! These are plain data — the matching algorithms in the root crate consult
//! them but never hardcode entries, so the vocabulary can grow without
//! touching any matcher. All token-level entries are uppercase because the
//! normalizer uppercases before lookup.

use phf::{phf_map, phf_set, Map, Set};

/// Character-level glyph confusions, applied to the whole document before
/// tokenization. Currency-like glyphs routinely stand in for the letter they
/// resemble on low-quality scans.
pub static GLYPH_SUBSTITUTIONS: Map<char, char> = phf_map! {
    '₩' => 'W',
    '€' => 'E',
    '£' => 'E',
    '$' => 'S',
};

/// Pipe-like glyphs that OCR emits for table column rules. Collapsed to
/// spaces together with line breaks so the document reads as one stream.
pub const SEPARATOR_GLYPHS: &[char] = &['|', '¦', '│', '║', '┃', '┆'];

/// Whole-token misreads, applied after uppercasing. Covers status codes with
/// digit-for-letter confusions and a handful of airport codes the scanner
/// reliably mangles.
pub static TOKEN_CORRECTIONS: Map<&'static str, &'static str> = phf_map! {
    "ATD0" => "ATDO",
    "0FF" => "OFF",
    "D0" => "DO",
    "1CN" => "ICN",
    "ICM" => "ICN",
    "JEK" => "JFK",
    "JFX" => "JFK",
    "6MP" => "GMP",
};

/// Two-letter fragments that are truncations of a specific 3-letter airport
/// code. Consulted only for route halves that arrive one character short.
pub static ROUTE_FRAGMENTS: Map<&'static str, &'static str> = phf_map! {
    "CN" => "ICN",
    "IC" => "ICN",
    "JF" => "JFK",
    "FK" => "JFK",
    "MP" => "GMP",
    "GM" => "GMP",
    "RT" => "NRT",
    "NR" => "NRT",
    "AX" => "LAX",
};

/// Digit-for-letter fixes that are only safe inside a 2-character airline
/// prefix. A global substitution would destroy day numbers and times, so the
/// flight matcher applies these positionally.
pub static FLIGHT_PREFIX_FIXES: Map<char, char> = phf_map! {
    '0' => 'O',
    '1' => 'I',
    '3' => 'E',
    '5' => 'S',
    '6' => 'G',
    '8' => 'B',
};

/// Closed vocabulary of rest / off-duty status codes.
pub static STATUS_CODES: Set<&'static str> = phf_set! {
    "ATDO",
    "DO",
    "AL",
    "OFF",
    "SBY",
};
