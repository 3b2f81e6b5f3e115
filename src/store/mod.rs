pub mod cache;
pub mod catalog;
pub mod similarity;

pub use cache::PosterCache;
pub use catalog::Catalog;
pub use similarity::SimilarityMatrix;
