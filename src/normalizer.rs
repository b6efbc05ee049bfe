//! Normalizer — cleans raw OCR text into an ordered token stream.
//!
//! Cleanup runs in order: glyph substitution → separator collapse →
//! tokenization → whole-token corrections. Grid geometry is never
//! reconstructed; the document is treated as one linear stream in the order
//! the OCR pass emitted it.

use crewroster_core::tables;

/// A normalized token: uppercased, confusion-corrected, with its position in
/// the stream. Positions are for ordering only; absolute text offsets are not
/// retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub index: usize,
}

/// Turn raw OCR output into the token sequence the extractor walks.
///
/// Pure function; never fails. Tokens shorter than 2 characters are dropped
/// as noise — isolated single glyphs from a scan are overwhelmingly artifacts
/// of broken column rules, not data.
pub fn normalize(raw: &str) -> Vec<Token> {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if let Some(&substitute) = tables::GLYPH_SUBSTITUTIONS.get(&c) {
                substitute
            } else if c == '\n' || c == '\r' || tables::SEPARATOR_GLYPHS.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2)
        .map(|t| {
            let upper = t.to_uppercase();
            match tables::TOKEN_CORRECTIONS.get(upper.as_str()) {
                Some(corrected) => (*corrected).to_string(),
                None => upper,
            }
        })
        .enumerate()
        .map(|(index, text)| Token { text, index })
        .collect()
}
