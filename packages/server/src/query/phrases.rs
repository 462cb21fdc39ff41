//! Canned phrase table.
//!
//! Trivial inputs ("hi", "gm") map straight to a fixed intent without
//! touching the cache or the model. Lookup is exact-match on the normalized
//! query; a pure function, no failure modes.

use super::intent::{Intent, Params};

/// Match a normalized (lower-cased, trimmed) query against the phrase table.
pub fn match_phrase(normalized: &str) -> Option<(Intent, Params)> {
    match normalized {
        "hello" | "hi" | "gm" | "hey" => Some((Intent::Greeting, Params::new())),
        _ => None,
    }
}
