//! Occurrence counting over a word sequence.

use ahash::AHashMap;

/// Count how often each distinct word appears in `words`.
///
/// ```
/// use bayestag::analysis::occurrences::occurrences;
///
/// let counts = occurrences(["zombie", "horror", "zombie"]);
/// assert_eq!(counts["zombie"], 2);
/// assert_eq!(counts["horror"], 1);
/// ```
pub fn occurrences<I, S>(words: I) -> AHashMap<String, u64>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts = AHashMap::new();
    for word in words {
        *counts.entry(word.into()).or_insert(0) += 1;
    }
    counts
}
