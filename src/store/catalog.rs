use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::models::Movie;

/// Maximum number of suggestions returned by a substring search
const SEARCH_LIMIT: usize = 10;

/// Immutable, in-memory movie catalog.
///
/// Loaded once at startup; a row's position in the vector is its catalog
/// index, shared with the similarity matrix.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Loads the catalog artifact (a JSON array of movie rows)
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open catalog artifact {:?}", path))?;
        let movies: Vec<Movie> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse catalog artifact {:?}", path))?;

        tracing::info!(movies = movies.len(), path = %path.display(), "Catalog loaded");

        Ok(Self { movies })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Iterates rows in catalog index order
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    /// Case-insensitive substring search over titles, in catalog index
    /// order, capped at 10 suggestions. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .map(|m| m.title.clone())
            .take(SEARCH_LIMIT)
            .collect()
    }

    /// Titles of rows whose genre labels contain `genre` case-insensitively,
    /// in catalog index order.
    pub fn titles_in_genre(&self, genre: &str) -> Vec<&str> {
        let needle = genre.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.genre_names.to_lowercase().contains(&needle))
            .map(|m| m.title.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genres: &str) -> Movie {
        Movie {
            title: title.to_string(),
            tmdb_id: None,
            genre_names: genres.to_string(),
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            movie("Inception", "Action Science Fiction"),
            movie("Interstellar", "Adventure Drama Science Fiction"),
            movie("Tenet", "Action Thriller"),
            movie("The Incredibles", "Animation Action Family"),
        ])
    }

    #[test]
    fn search_empty_query_returns_nothing() {
        assert!(test_catalog().search("").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let results = test_catalog().search("incep");
        assert_eq!(results, vec!["Inception".to_string()]);
    }

    #[test]
    fn search_preserves_catalog_order() {
        let results = test_catalog().search("in");
        assert_eq!(
            results,
            vec![
                "Inception".to_string(),
                "Interstellar".to_string(),
                "The Incredibles".to_string(),
            ]
        );
    }

    #[test]
    fn search_caps_at_ten_results() {
        let movies: Vec<Movie> = (0..25).map(|i| movie(&format!("Movie {}", i), "")).collect();
        let catalog = Catalog::new(movies);
        assert_eq!(catalog.search("movie").len(), 10);
    }

    #[test]
    fn genre_filter_is_case_insensitive() {
        let catalog = test_catalog();
        let titles = catalog.titles_in_genre("ACTION");
        assert_eq!(titles, vec!["Inception", "Tenet", "The Incredibles"]);
    }

    #[test]
    fn genre_filter_no_match_is_empty() {
        assert!(test_catalog().titles_in_genre("western").is_empty());
    }
}
