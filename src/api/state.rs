use std::sync::Arc;

use crate::services::posters::PosterProvider;
use crate::store::{Catalog, SimilarityMatrix};

/// Shared application state.
///
/// The catalog and similarity matrix are read-only for the process
/// lifetime, so handlers share them through plain `Arc`s with no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub similarity: Arc<SimilarityMatrix>,
    pub posters: Arc<dyn PosterProvider>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        similarity: SimilarityMatrix,
        posters: Arc<dyn PosterProvider>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            similarity: Arc::new(similarity),
            posters,
        }
    }
}
