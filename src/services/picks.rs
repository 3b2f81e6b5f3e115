use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::store::Catalog;

/// Seed for the movie-of-the-day pick. Fixed on purpose: every call within
/// a process run (and across runs over the same catalog) returns the same
/// title. See DESIGN.md for the open question about date-derived reseeding.
const MOVIE_OF_THE_DAY_SEED: u64 = 12;

/// Seed for the genre pick
const GENRE_PICK_SEED: u64 = 4;

/// Deterministic pseudo-random pick over the whole catalog.
pub fn movie_of_the_day(catalog: &Catalog) -> Option<String> {
    let titles: Vec<&str> = catalog.iter().map(|m| m.title.as_str()).collect();
    seeded_choice(&titles, MOVIE_OF_THE_DAY_SEED)
}

/// Deterministic pseudo-random pick over rows whose genre labels contain
/// `genre` case-insensitively. `None` when no row matches.
pub fn genre_pick(catalog: &Catalog, genre: &str) -> Option<String> {
    let titles = catalog.titles_in_genre(genre);
    seeded_choice(&titles, GENRE_PICK_SEED)
}

fn seeded_choice(titles: &[&str], seed: u64) -> Option<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    titles.choose(&mut rng).map(|t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

    fn catalog() -> Catalog {
        Catalog::new(
            [
                ("Inception", "Action Science Fiction"),
                ("Interstellar", "Adventure Drama Science Fiction"),
                ("Tenet", "Action Thriller"),
                ("Paddington", "Comedy Family"),
            ]
            .iter()
            .map(|(title, genres)| Movie {
                title: title.to_string(),
                tmdb_id: None,
                genre_names: genres.to_string(),
            })
            .collect(),
        )
    }

    #[test]
    fn movie_of_the_day_is_stable_across_calls() {
        let c = catalog();
        let first = movie_of_the_day(&c);
        assert!(first.is_some());
        assert_eq!(movie_of_the_day(&c), first);
    }

    #[test]
    fn genre_pick_only_returns_matching_titles() {
        let c = catalog();
        let pick = genre_pick(&c, "action").unwrap();
        assert!(["Inception", "Tenet"].contains(&pick.as_str()));
        assert_eq!(genre_pick(&c, "action"), genre_pick(&c, "ACTION"));
    }

    #[test]
    fn genre_pick_with_no_match_is_none() {
        assert_eq!(genre_pick(&catalog(), "western"), None);
    }

    #[test]
    fn empty_catalog_yields_no_pick() {
        let empty = Catalog::new(Vec::new());
        assert_eq!(movie_of_the_day(&empty), None);
    }
}
