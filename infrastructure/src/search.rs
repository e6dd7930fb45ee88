use shared::error::ChatError;
use std::cmp::Ordering;

/// Dense matrix of unit-length question embeddings.
///
/// Built once at startup and read-only afterwards; row i corresponds to
/// example pair i. Safe to share across sessions without locking.
#[derive(Debug)]
pub struct EmbeddingIndex {
    rows: Vec<Vec<f32>>,
    dim: usize,
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// L2-normalize in place; `None` if the vector has zero norm.
fn normalize(mut v: Vec<f32>) -> Option<Vec<f32>> {
    let norm = l2_norm(&v);
    if norm == 0.0 {
        return None;
    }
    for x in &mut v {
        *x /= norm;
    }
    Some(v)
}

impl EmbeddingIndex {
    /// Build the index from one embedding per question.
    ///
    /// `expected` is the number of questions the embeddings were computed
    /// for; a mismatched count means the embedding collaborator returned
    /// inconsistent output and the index must not be built.
    pub fn from_vectors(vectors: Vec<Vec<f32>>, expected: usize) -> Result<Self, ChatError> {
        if vectors.len() != expected {
            return Err(ChatError::Embedding(format!(
                "expected {expected} embeddings, got {}",
                vectors.len()
            )));
        }
        if vectors.is_empty() {
            return Err(ChatError::Embedding("embedding set is empty".to_string()));
        }
        let dim = vectors[0].len();
        let mut rows = Vec::with_capacity(vectors.len());
        for (i, vector) in vectors.into_iter().enumerate() {
            if vector.len() != dim {
                return Err(ChatError::Embedding(format!(
                    "embedding {i} has dimension {}, expected {dim}",
                    vector.len()
                )));
            }
            let row = normalize(vector).ok_or_else(|| {
                ChatError::Embedding(format!("embedding {i} has zero norm"))
            })?;
            rows.push(row);
        }
        Ok(Self { rows, dim })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.rows[i]
    }

    /// Cosine similarity of the query against every row, in row order.
    ///
    /// The query is normalized here, so all products are plain dot products
    /// of unit vectors in [-1, 1]. A zero-norm or wrong-dimension query
    /// scores 0.0 everywhere.
    fn similarities(&self, query_vec: &[f32]) -> Vec<f32> {
        if query_vec.len() != self.dim {
            return vec![0.0; self.rows.len()];
        }
        match normalize(query_vec.to_vec()) {
            Some(q) => self.rows.iter().map(|row| dot(row, &q)).collect(),
            None => vec![0.0; self.rows.len()],
        }
    }

    /// Return the best-matching row index and its similarity score.
    ///
    /// Exact ties resolve to the lowest index. There is no minimum-score
    /// threshold; the top-1 match is returned even when similarity is low.
    pub fn lookup(&self, query_vec: &[f32]) -> (usize, f32) {
        let sims = self.similarities(query_vec);
        let mut best = 0;
        let mut best_score = sims[0];
        for (i, &score) in sims.iter().enumerate().skip(1) {
            if score > best_score {
                best = i;
                best_score = score;
            }
        }
        (best, best_score)
    }

    /// Indices of the up-to-`k` most similar rows, excluding `exclude` and
    /// any row whose question equals the query text verbatim.
    ///
    /// Returns fewer than `k` when fewer rows qualify; never pads.
    pub fn related_top_k(
        &self,
        query_vec: &[f32],
        query_text: &str,
        questions: &[String],
        exclude: usize,
        k: usize,
    ) -> Vec<usize> {
        let sims = self.similarities(query_vec);
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| {
            sims[b]
                .partial_cmp(&sims[a])
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });
        order
            .into_iter()
            .filter(|&i| i != exclude)
            .filter(|&i| questions.get(i).map(|q| q != query_text).unwrap_or(true))
            .take(k)
            .collect()
    }
}
