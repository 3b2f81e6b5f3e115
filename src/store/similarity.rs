use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context};

/// Immutable precomputed similarity matrix.
///
/// Entry `[i][j]` is the similarity score between catalog rows `i` and `j`;
/// the index space is identical to the catalog's. The matrix is trusted as
/// produced (symmetry is not enforced), but its shape is validated at load.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// Loads the similarity artifact (a JSON 2-D array of scores)
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open similarity artifact {:?}", path))?;
        let rows: Vec<Vec<f32>> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse similarity artifact {:?}", path))?;

        tracing::info!(rows = rows.len(), path = %path.display(), "Similarity matrix loaded");

        Ok(Self { rows })
    }

    /// Checks that the matrix is square with one row per catalog entry.
    /// A mismatched artifact pair is fatal to startup.
    pub fn validate_shape(&self, catalog_len: usize) -> anyhow::Result<()> {
        if self.rows.len() != catalog_len {
            bail!(
                "Similarity matrix has {} rows but catalog has {} movies",
                self.rows.len(),
                catalog_len
            );
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != catalog_len {
                bail!(
                    "Similarity row {} has {} entries but catalog has {} movies",
                    i,
                    row.len(),
                    catalog_len
                );
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(|r| r.as_slice())
    }
}
