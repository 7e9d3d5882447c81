use std::fmt::{Display, Formatter};

use derive_getters::Getters;
use eyre::Result;
use paste::paste;

use biobit_core_rs::alignment::Symbol;

use super::gaps::{GapFunction, Gaps, Region, Side};
use super::mode::Mode;
use super::symbols::{SubstitutionMatrix, Substitutions};
use crate::pairwise::algorithm::Algorithm;
use crate::pairwise::AlignError;

/// Frozen scoring parameters of a pairwise alignment. Use [`ScoringConfig::builder`] to assemble
/// one; the configuration can't be changed once built.
#[derive(Clone, Debug, Getters)]
pub struct ScoringConfig<S> {
    /// Symbol that scores zero against anything when scalar match/mismatch scores are used.
    wildcard: Option<S>,
    /// Allowed symbols. With a substitution matrix, a symbol's position in the alphabet is its
    /// matrix index.
    alphabet: Option<Vec<S>>,
    substitutions: Substitutions,
    target_gaps: Gaps,
    query_gaps: Gaps,
    mode: Mode,
    /// Scores closer than epsilon are considered equal.
    epsilon: f64,
}

impl<S> ScoringConfig<S> {
    pub fn builder() -> Builder<S> {
        Builder {
            config: Self::default(),
        }
    }

    /// Start a new builder from the current parameters.
    pub fn to_builder(&self) -> Builder<S>
    where
        S: Clone,
    {
        Builder {
            config: self.clone(),
        }
    }

    /// Gap costs applied to gaps in the given sequence.
    pub fn gaps(&self, side: Side) -> &Gaps {
        match side {
            Side::Target => &self.target_gaps,
            Side::Query => &self.query_gaps,
        }
    }

    /// DP recurrence that will be used for these parameters.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::select(&self.target_gaps, &self.query_gaps)
    }
}

impl<S> Default for ScoringConfig<S> {
    fn default() -> Self {
        Self {
            wildcard: None,
            alphabet: None,
            substitutions: Substitutions::default(),
            target_gaps: Gaps::default(),
            query_gaps: Gaps::default(),
            mode: Mode::default(),
            epsilon: 1e-6,
        }
    }
}

impl<S: Symbol> Display for ScoringConfig<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pairwise sequence aligner with parameters")?;
        match &self.substitutions {
            Substitutions::Scalars {
                matches,
                mismatches,
            } => {
                match &self.wildcard {
                    Some(wildcard) => writeln!(f, "  wildcard: '{}'", wildcard.label())?,
                    None => writeln!(f, "  wildcard: None")?,
                }
                writeln!(f, "  match_score: {matches:.6}")?;
                writeln!(f, "  mismatch_score: {mismatches:.6}")?;
            }
            Substitutions::Matrix(matrix) => writeln!(f, "  substitution_matrix: {matrix}")?,
        }

        for (name, gaps) in [("target", &self.target_gaps), ("query", &self.query_gaps)] {
            if let Some(function) = gaps.function() {
                writeln!(f, "  {name}_gap_function: {}", function.name())?;
                continue;
            }
            for (region, tag) in [
                (Region::Internal, "internal"),
                (Region::Left, "left"),
                (Region::Right, "right"),
            ] {
                let affine = gaps.affine(region);
                writeln!(f, "  {name}_{tag}_open_gap_score: {:.6}", affine.open())?;
                writeln!(f, "  {name}_{tag}_extend_gap_score: {:.6}", affine.extend())?;
            }
        }
        writeln!(f, "  mode: {}", self.mode)
    }
}

/// Step-by-step assembly of a [`ScoringConfig`]. Every numeric setter validates its argument
/// and fails with a configuration error right away.
#[derive(Clone, Debug)]
pub struct Builder<S> {
    config: ScoringConfig<S>,
}

fn finite(name: &str, score: f64) -> Result<f64> {
    if !score.is_finite() {
        return Err(AlignError::config(format!(
            "{name} must be a finite number, got {score}"
        )));
    }
    Ok(score)
}

// Generates `<prefix>gap_score`, `<prefix>open_gap_score` and `<prefix>extend_gap_score` setters
// that update the listed sides and regions at once.
macro_rules! gap_setters {
    ($([$($prefix:ident)?] => [$($side:ident),+] [$($region:ident),+];)+) => {
        paste! {
            $(
                pub fn [<$($prefix)? gap_score>](self, score: f64) -> Result<Self> {
                    self.set_gaps(
                        stringify!([<$($prefix)? gap_score>]),
                        &[$(Side::$side),+],
                        &[$(Region::$region),+],
                        Some(score),
                        Some(score),
                    )
                }

                pub fn [<$($prefix)? open_gap_score>](self, score: f64) -> Result<Self> {
                    self.set_gaps(
                        stringify!([<$($prefix)? open_gap_score>]),
                        &[$(Side::$side),+],
                        &[$(Region::$region),+],
                        Some(score),
                        None,
                    )
                }

                pub fn [<$($prefix)? extend_gap_score>](self, score: f64) -> Result<Self> {
                    self.set_gaps(
                        stringify!([<$($prefix)? extend_gap_score>]),
                        &[$(Side::$side),+],
                        &[$(Region::$region),+],
                        None,
                        Some(score),
                    )
                }
            )+
        }
    };
}

impl<S> Builder<S> {
    /// Score of identical symbols. Drops a previously configured substitution matrix.
    pub fn match_score(mut self, score: f64) -> Result<Self> {
        let score = finite("match_score", score)?;
        self.config.substitutions = match self.config.substitutions {
            Substitutions::Scalars { mismatches, .. } => Substitutions::Scalars {
                matches: score,
                mismatches,
            },
            Substitutions::Matrix(_) => Substitutions::Scalars {
                matches: score,
                mismatches: 0.0,
            },
        };
        Ok(self)
    }

    /// Score of different symbols. Drops a previously configured substitution matrix.
    pub fn mismatch_score(mut self, score: f64) -> Result<Self> {
        let score = finite("mismatch_score", score)?;
        self.config.substitutions = match self.config.substitutions {
            Substitutions::Scalars { matches, .. } => Substitutions::Scalars {
                matches,
                mismatches: score,
            },
            Substitutions::Matrix(_) => Substitutions::Scalars {
                matches: 1.0,
                mismatches: score,
            },
        };
        Ok(self)
    }

    pub fn substitution_matrix(mut self, matrix: SubstitutionMatrix) -> Self {
        self.config.substitutions = Substitutions::Matrix(matrix);
        self
    }

    pub fn wildcard(mut self, wildcard: Option<S>) -> Self {
        self.config.wildcard = wildcard;
        self
    }

    pub fn alphabet(mut self, alphabet: Vec<S>) -> Result<Self>
    where
        S: PartialEq,
    {
        if alphabet.is_empty() {
            return Err(AlignError::config("alphabet is empty"));
        }
        for (ind, symbol) in alphabet.iter().enumerate() {
            if alphabet[..ind].contains(symbol) {
                return Err(AlignError::config(format!(
                    "alphabet item {ind} is a duplicate"
                )));
            }
        }
        self.config.alphabet = Some(alphabet);
        Ok(self)
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Result<Self> {
        let epsilon = finite("epsilon", epsilon)?;
        if epsilon < 0.0 {
            return Err(AlignError::config(format!(
                "epsilon must be non-negative, got {epsilon}"
            )));
        }
        self.config.epsilon = epsilon;
        Ok(self)
    }

    gap_setters! {
        [] => [Target, Query] [Internal, Left, Right];
        [internal_] => [Target, Query] [Internal];
        [end_] => [Target, Query] [Left, Right];
        [left_] => [Target, Query] [Left];
        [right_] => [Target, Query] [Right];
        [target_] => [Target] [Internal, Left, Right];
        [target_internal_] => [Target] [Internal];
        [target_end_] => [Target] [Left, Right];
        [target_left_] => [Target] [Left];
        [target_right_] => [Target] [Right];
        [query_] => [Query] [Internal, Left, Right];
        [query_internal_] => [Query] [Internal];
        [query_end_] => [Query] [Left, Right];
        [query_left_] => [Query] [Left];
        [query_right_] => [Query] [Right];
    }

    /// Use the function for gaps in both sequences.
    pub fn gap_function(self, function: GapFunction) -> Self {
        self.target_gap_function(function.clone())
            .query_gap_function(function)
    }

    pub fn target_gap_function(mut self, function: GapFunction) -> Self {
        self.config.target_gaps.set_function(function);
        self
    }

    pub fn query_gap_function(mut self, function: GapFunction) -> Self {
        self.config.query_gaps.set_function(function);
        self
    }

    pub fn build(self) -> Result<ScoringConfig<S>> {
        if let (Some(alphabet), Substitutions::Matrix(matrix)) =
            (&self.config.alphabet, &self.config.substitutions)
        {
            if alphabet.len() != matrix.size() {
                return Err(AlignError::config(format!(
                    "alphabet has {} symbols, but the substitution matrix is {}x{}",
                    alphabet.len(),
                    matrix.size(),
                    matrix.size()
                )));
            }
        }
        Ok(self.config)
    }

    fn set_gaps(
        mut self,
        name: &str,
        sides: &[Side],
        regions: &[Region],
        open: Option<f64>,
        extend: Option<f64>,
    ) -> Result<Self> {
        for score in open.iter().chain(extend.iter()) {
            finite(name, *score)?;
        }
        for side in sides {
            let gaps = match side {
                Side::Target => &mut self.config.target_gaps,
                Side::Query => &mut self.config.query_gaps,
            };
            for region in regions {
                if let Some(open) = open {
                    gaps.set_open(*region, open);
                }
                if let Some(extend) = extend {
                    gaps.set_extend(*region, extend);
                }
            }
        }
        Ok(self)
    }
}
