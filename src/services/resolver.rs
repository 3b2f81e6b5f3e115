use crate::store::Catalog;

/// Minimum similarity ratio for a fuzzy title match to be accepted
const FUZZY_THRESHOLD: f64 = 0.6;

/// Resolves a free-text title to a catalog index.
///
/// The query is trimmed, then matched case-insensitively against every
/// catalog title; the first matching row by index order wins. If no exact
/// match exists, the closest title by similarity ratio is accepted when it
/// clears the 0.6 threshold, ties going to the lowest catalog index. An
/// empty or unmatched query resolves to `None`.
pub fn resolve(catalog: &Catalog, query: &str) -> Option<usize> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let lowered = query.to_lowercase();
    if let Some(index) = catalog
        .iter()
        .position(|m| m.title.to_lowercase() == lowered)
    {
        return Some(index);
    }

    fuzzy_resolve(catalog, query)
}

/// Best fuzzy candidate above the threshold, resolved to the first row
/// whose title equals the candidate exactly.
fn fuzzy_resolve(catalog: &Catalog, query: &str) -> Option<usize> {
    let mut best: Option<(&str, f64)> = None;
    for movie in catalog.iter() {
        let ratio = similarity_ratio(query, &movie.title);
        if ratio >= FUZZY_THRESHOLD && best.map_or(true, |(_, r)| ratio > r) {
            best = Some((&movie.title, ratio));
        }
    }

    let (candidate, ratio) = best?;
    tracing::debug!(query = %query, candidate = %candidate, ratio, "Fuzzy title match");

    catalog.iter().position(|m| m.title == candidate)
}

/// Similarity ratio on a 0-1 scale: normalized Levenshtein distance.
fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Levenshtein edit distance between two strings.
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

    fn catalog(titles: &[&str]) -> Catalog {
        Catalog::new(
            titles
                .iter()
                .map(|t| Movie {
                    title: t.to_string(),
                    tmdb_id: None,
                    genre_names: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn resolves_every_catalog_title_to_its_own_row() {
        let c = catalog(&["Inception", "Interstellar", "Tenet"]);
        for (i, title) in ["Inception", "Interstellar", "Tenet"].iter().enumerate() {
            assert_eq!(resolve(&c, title), Some(i));
        }
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let c = catalog(&["Inception", "Interstellar", "Tenet"]);
        assert_eq!(resolve(&c, "inception"), resolve(&c, "Inception"));
        assert_eq!(resolve(&c, "INCEPTION"), Some(0));
    }

    #[test]
    fn exact_match_trims_whitespace() {
        let c = catalog(&["Inception"]);
        assert_eq!(resolve(&c, "  Inception  "), Some(0));
    }

    #[test]
    fn exact_match_prefers_lowest_index_on_duplicates() {
        let c = catalog(&["Dracula", "dracula"]);
        assert_eq!(resolve(&c, "DRACULA"), Some(0));
    }

    #[test]
    fn exact_match_never_falls_through_to_fuzzy() {
        // Short titles never clear the fuzzy threshold against "us", so a
        // hit here proves the exact case-insensitive pass claimed it.
        let c = catalog(&["Up", "Us"]);
        assert_eq!(resolve(&c, "us"), Some(1));
    }

    #[test]
    fn typo_resolves_via_fuzzy_match() {
        let c = catalog(&["Inception", "Interstellar", "Tenet"]);
        // ratio("Incepton", "Inception") = 1 - 1/9, well above 0.6
        assert_eq!(resolve(&c, "Incepton"), Some(0));
    }

    #[test]
    fn distant_query_is_not_found() {
        let c = catalog(&["Inception", "Interstellar", "Tenet"]);
        assert_eq!(resolve(&c, "Zzyzx Road Chronicles"), None);
    }

    #[test]
    fn empty_and_whitespace_queries_are_not_found() {
        let c = catalog(&["Inception"]);
        assert_eq!(resolve(&c, ""), None);
        assert_eq!(resolve(&c, "   "), None);
    }

    #[test]
    fn fuzzy_ties_go_to_the_lowest_index() {
        // Both candidates are one edit away from the query, same ratio.
        let c = catalog(&["Heat", "Hear"]);
        assert_eq!(resolve(&c, "Heax"), Some(0));
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("Incepton", "Inception"), 1);
    }

    #[test]
    fn ratio_is_one_for_identical_strings() {
        assert_eq!(similarity_ratio("Tenet", "Tenet"), 1.0);
    }
}
