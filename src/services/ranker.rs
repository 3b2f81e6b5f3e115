use std::cmp::Ordering;

use crate::store::SimilarityMatrix;

/// Number of neighbors returned by default
pub const DEFAULT_K: usize = 8;

/// Returns the top-`k` most similar catalog indices for `index`, ordered by
/// descending similarity score with ties broken by lower index.
///
/// The query index itself is never included. A row shorter than `k + 1`
/// entries yields a correspondingly shorter result.
///
/// Panics when `index` is out of range: an invalid index reaching the
/// ranker means the resolver upstream is broken, which is a bug rather
/// than a recoverable condition.
pub fn rank(similarity: &SimilarityMatrix, index: usize, k: usize) -> Vec<usize> {
    let row = similarity
        .row(index)
        .unwrap_or_else(|| panic!("catalog index {} out of range for similarity matrix", index));

    let mut scored: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    scored
        .into_iter()
        .filter(|&(j, _)| j != index)
        .take(k)
        .map(|(j, _)| j)
        .collect()
}
