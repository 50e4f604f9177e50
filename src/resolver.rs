//! Fuzzy player-name resolution.
//!
//! Free-form names typed by a user (or an LLM) are matched against the
//! canonical display names of the player directory. Similarity is the
//! normalized indel ratio on a 0-100 scale: `200 * LCS / (len(a) + len(b))`,
//! rounded half-to-even.

use rapidfuzz::fuzz;

/// A best match must score strictly above this to replace the input.
pub const MATCH_THRESHOLD: u8 = 80;

/// Closest candidate for an input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatch<'a> {
    pub candidate: &'a str,
    pub score: u8,
}

impl NameMatch<'_> {
    pub fn is_confident(&self) -> bool {
        self.score > MATCH_THRESHOLD
    }
}

/// Symmetric similarity score between two names, 0 (disjoint) to 100 (equal).
pub fn similarity(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    (fuzz::ratio(a.chars(), b.chars()) * 100.0).round_ties_even() as u8
}

/// Highest scoring candidate; ties go to the earliest candidate.
pub fn best_match<'a, I>(input: &str, candidates: I) -> Option<NameMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<NameMatch<'a>> = None;
    for candidate in candidates {
        let score = similarity(input, candidate);
        if best.map_or(true, |b| score > b.score) {
            best = Some(NameMatch { candidate, score });
            if score == 100 {
                break;
            }
        }
    }
    best
}

/// Map `input` to the closest candidate, or echo it back when nothing
/// scores above [`MATCH_THRESHOLD`].
///
/// # Examples
///
/// ```rust
/// use ffl_tools::resolver::resolve;
///
/// let names = ["Patrick Mahomes", "Josh Allen"];
/// assert_eq!(resolve("Patrick Mahomed", names), "Patrick Mahomes");
/// assert_eq!(resolve("Tom Brady", names), "Tom Brady");
/// ```
pub fn resolve<'a, I>(input: &str, candidates: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    match best_match(input, candidates) {
        Some(m) if m.is_confident() => m.candidate.to_string(),
        _ => input.to_string(),
    }
}
