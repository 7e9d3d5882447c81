use derive_more::Display;

use super::scoring::{Gaps, Mode};

/// Dynamic programming recurrence used to fill the alignment matrices.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Algorithm {
    /// Single matrix with a constant cost per gapped symbol (Needleman-Wunsch / Smith-Waterman).
    Simple,
    /// Three-state affine gap recurrence (Gotoh).
    Affine,
    /// Arbitrary gap cost of the gap length and position (Waterman-Smith-Beyer).
    General,
}

impl Algorithm {
    /// Cheapest recurrence able to express the given gap costs.
    pub fn select(target: &Gaps, query: &Gaps) -> Self {
        if target.function().is_some() || query.function().is_some() {
            Algorithm::General
        } else if target.is_uniform() && query.is_uniform() {
            Algorithm::Simple
        } else {
            Algorithm::Affine
        }
    }

    pub fn name(&self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Algorithm::Simple, Mode::Global) => "Needleman-Wunsch",
            (Algorithm::Simple, Mode::Local) => "Smith-Waterman",
            (Algorithm::Affine, Mode::Global) => "Gotoh global alignment algorithm",
            (Algorithm::Affine, Mode::Local) => "Gotoh local alignment algorithm",
            (Algorithm::General, Mode::Global) => {
                "Waterman-Smith-Beyer global alignment algorithm"
            }
            (Algorithm::General, Mode::Local) => "Waterman-Smith-Beyer local alignment algorithm",
        }
    }
}
