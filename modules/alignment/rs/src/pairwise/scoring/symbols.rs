use std::fmt::{Display, Formatter};

use eyre::Result;

use crate::pairwise::AlignError;

/// Square matrix of substitution scores addressed by symbol indices. Symmetry is not required:
/// `score(a, b)` is the score of target symbol `a` aligned to query symbol `b`.
#[derive(Clone, PartialEq, Debug)]
pub struct SubstitutionMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SubstitutionMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(AlignError::config("substitution matrix is empty"));
        }

        let mut scores = Vec::with_capacity(size * size);
        for (ind, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AlignError::config(format!(
                    "substitution matrix must be square, row {ind} has {} items instead of {size}",
                    row.len()
                )));
            }
            if let Some(score) = row.iter().find(|x| !x.is_finite()) {
                return Err(AlignError::config(format!(
                    "substitution matrix row {ind} contains a non-finite score ({score})"
                )));
            }
            scores.extend(row);
        }
        Ok(Self { size, scores })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn score(&self, target: usize, query: usize) -> f64 {
        self.scores[target * self.size + query]
    }
}

impl Display for SubstitutionMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}x{} matrix>", self.size, self.size)
    }
}

/// Scores of aligned symbol pairs.
#[derive(Clone, PartialEq, Debug)]
pub enum Substitutions {
    /// Identical symbols score `matches`, other pairs score `mismatches`. Pairs involving the
    /// wildcard score zero.
    Scalars { matches: f64, mismatches: f64 },
    /// Explicit scores for every pair of symbol indices. The wildcard has no special meaning.
    Matrix(SubstitutionMatrix),
}

impl Default for Substitutions {
    fn default() -> Self {
        Substitutions::Scalars {
            matches: 1.0,
            mismatches: 0.0,
        }
    }
}
