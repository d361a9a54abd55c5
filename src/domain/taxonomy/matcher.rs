//! Approximate string matching for specialty labels.
//!
//! The classifier returns specialty labels as free text that may be
//! misspelled, truncated, or differently cased. The matcher scores each
//! canonical name with an edit-distance-based similarity percentage and
//! picks the best candidate.

/// A scored candidate produced while matching a label against the catalog.
///
/// Ephemeral: created and consumed within a single matching call.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate<'a> {
    /// Canonical specialty name this score belongs to.
    pub specialty: &'a str,
    /// Similarity percentage in `[0, 100]`.
    pub score: f64,
}

/// Computes the Levenshtein edit distance between two strings.
///
/// Operates on Unicode scalar values, single-row dynamic programming.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;

        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let next = (prev_diag + cost).min(row[j] + 1).min(row[j + 1] + 1);
            prev_diag = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[b.len()]
}

/// Computes the similarity between two strings as a percentage in `[0, 100]`.
///
/// `similarity = (1 - distance / max(len(a), len(b))) * 100`, with comparison
/// done case-insensitively. Two empty strings are identical (100).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let max_len = a.chars().count().max(b.chars().count());

    if max_len == 0 {
        return 100.0;
    }

    let distance = levenshtein(&a, &b);
    (1.0 - (distance as f64 / max_len as f64)) * 100.0
}

/// Scores `label` against every candidate name and returns the best one.
///
/// Ties at the maximum score resolve to the first candidate in iteration
/// order, so callers that need determinism must pass candidates in a
/// stable order. Returns `None` only for an empty candidate list.
pub fn best_match<'a, I>(candidates: I, label: &str) -> Option<MatchCandidate<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<MatchCandidate<'a>> = None;

    for specialty in candidates {
        let score = similarity(label, specialty);
        let better = match &best {
            Some(current) => score > current.score,
            None => true,
        };
        if better {
            best = Some(MatchCandidate { specialty, score });
        }
    }

    best
}
