use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Recommendation,
    services::{ranker, resolver},
    store::{Catalog, SimilarityMatrix},
};

use super::posters::PosterProvider;

/// Produces the ranked, poster-enriched recommendation list for a title.
///
/// Resolution failure is the only error path; poster enrichment is fanned
/// out one task per neighbor and degrades per-neighbor on failure.
pub async fn recommend(
    catalog: &Catalog,
    similarity: &SimilarityMatrix,
    posters: Arc<dyn PosterProvider>,
    movie_name: &str,
) -> AppResult<Vec<Recommendation>> {
    let index = resolver::resolve(catalog, movie_name)
        .ok_or_else(|| AppError::NotFound(format!("Movie '{}' not found", movie_name.trim())))?;

    let neighbors = ranker::rank(similarity, index, ranker::DEFAULT_K);

    tracing::info!(
        query = %movie_name.trim(),
        index,
        neighbors = neighbors.len(),
        "Recommendation computed"
    );

    // Fan out poster lookups, then collect back in rank order.
    let mut tasks = Vec::with_capacity(neighbors.len());
    for &neighbor in &neighbors {
        let movie = catalog
            .get(neighbor)
            .unwrap_or_else(|| panic!("ranked index {} missing from catalog", neighbor));
        let title = movie.title.clone();
        let tmdb_id = movie.tmdb_id;
        let provider = Arc::clone(&posters);

        tasks.push((
            title,
            tokio::spawn(async move { provider.fetch_poster(tmdb_id).await }),
        ));
    }

    let mut recommendations = Vec::with_capacity(tasks.len());
    for (title, task) in tasks {
        let poster = match task.await {
            Ok(poster) => poster,
            Err(e) => {
                tracing::warn!(error = %e, "Poster task failed");
                None
            }
        };
        recommendations.push(Recommendation { title, poster });
    }

    Ok(recommendations)
}
