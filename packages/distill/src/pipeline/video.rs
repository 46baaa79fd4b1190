//! Video identifier parsing and duration estimation.

use regex::Regex;
use std::sync::OnceLock;

/// Rough speaking pace used to estimate duration for pasted transcripts.
/// A placeholder heuristic, not a precise contract.
const WORDS_PER_MINUTE: f64 = 130.0;

fn id_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"[?&]v=([a-zA-Z0-9_-]{11})").unwrap(),
            Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})").unwrap(),
            Regex::new(r"embed/([a-zA-Z0-9_-]{11})").unwrap(),
        ]
    })
}

fn bare_id_pattern() -> &'static Regex {
    static BARE: OnceLock<Regex> = OnceLock::new();
    BARE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap())
}

/// Extract a video id from any common URL form, or a raw id.
///
/// Accepts bare 11-character ids, `watch?v=`, `youtu.be/`, and `embed/`
/// forms. Unrecognized input is passed through trimmed; the fetch call
/// surfaces its own error for a bad id.
pub fn extract_video_id(url_or_id: &str) -> String {
    let trimmed = url_or_id.trim();

    if bare_id_pattern().is_match(trimmed) {
        return trimmed.to_string();
    }

    for pattern in id_patterns() {
        if let Some(captures) = pattern.captures(trimmed) {
            return captures[1].to_string();
        }
    }

    trimmed.to_string()
}

/// Estimate source duration for pasted (non-transcribed) text.
pub fn estimate_duration_minutes(text: &str) -> f64 {
    text.split_whitespace().count() as f64 / WORDS_PER_MINUTE
}
