use eyre::Result;

use biobit_core_rs::alignment::{Alignable, Symbol};
use biobit_core_rs::loc::Strand;

use super::config::ScoringConfig;
use super::gaps::{Affine, Region, Side};
use super::mode::Mode;
use super::symbols::Substitutions;
use crate::pairwise::alignment::{Alignment, Op};
use crate::pairwise::AlignError;

const WILDCARD: usize = usize::MAX;

/// Target and query translated into dense symbol codes. Equal codes denote identical symbols,
/// except for the wildcard which is never identical to anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    target: Vec<usize>,
    query: Vec<usize>,
}

impl Encoded {
    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    pub fn query_len(&self) -> usize {
        self.query.len()
    }

    #[inline(always)]
    pub fn is_identical(&self, i: usize, j: usize) -> bool {
        let code = self.target[i];
        code == self.query[j] && code != WILDCARD
    }
}

/// Scoring model bound to a particular pair of sequences.
///
/// Positions are computational: a reverse-strand query is indexed as it was passed in, i.e.
/// already reverse-complemented. The model maps query positions back to the forward orientation
/// wherever the configuration distinguishes sequence ends or calls a gap function.
pub struct Model<'a, S> {
    config: &'a ScoringConfig<S>,
    codes: Encoded,
    strand: Strand,
}

impl<'a, S: Symbol> Model<'a, S> {
    pub fn new<T, Q>(
        config: &'a ScoringConfig<S>,
        target: &T,
        query: &Q,
        strand: Strand,
    ) -> Result<Self>
    where
        T: Alignable<Symbol = S> + ?Sized,
        Q: Alignable<Symbol = S> + ?Sized,
    {
        let mut interned = Vec::new();
        let target = encode(config, target, &mut interned)?;
        let query = encode(config, query, &mut interned)?;
        Ok(Self {
            config,
            codes: Encoded { target, query },
            strand,
        })
    }
}

impl<S> Model<'_, S> {
    pub fn target_len(&self) -> usize {
        self.codes.target_len()
    }

    pub fn query_len(&self) -> usize {
        self.codes.query_len()
    }

    pub fn mode(&self) -> Mode {
        *self.config.mode()
    }

    pub fn epsilon(&self) -> f64 {
        *self.config.epsilon()
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn codes(&self) -> &Encoded {
        &self.codes
    }

    pub fn into_codes(self) -> Encoded {
        self.codes
    }

    /// Score of target symbol `i` aligned to query symbol `j`.
    #[inline(always)]
    pub fn pair_score(&self, i: usize, j: usize) -> f64 {
        let (a, b) = (self.codes.target[i], self.codes.query[j]);
        match self.config.substitutions() {
            Substitutions::Scalars {
                matches,
                mismatches,
            } => {
                if a == WILDCARD || b == WILDCARD {
                    0.0
                } else if a == b {
                    *matches
                } else {
                    *mismatches
                }
            }
            Substitutions::Matrix(matrix) => matrix.score(a, b),
        }
    }

    /// Total cost of a gap with `length` symbols placed at the boundary `position` of the
    /// sequence that receives the gap.
    pub fn gap_score(&self, side: Side, position: usize, length: usize) -> Result<f64> {
        let (region, position) = self.locate(side, position);
        self.config.gaps(side).score(region, position, length)
    }

    /// Affine slot that governs gaps at the given boundary. Meaningless for gap functions.
    pub fn affine(&self, side: Side, position: usize) -> &Affine {
        let (region, _) = self.locate(side, position);
        self.config.gaps(side).affine(region)
    }

    /// Recompute the score of an alignment from scratch.
    pub fn rescore(&self, alignment: &Alignment) -> Result<f64> {
        if *alignment.target_len() != self.target_len()
            || *alignment.query_len() != self.query_len()
        {
            return Err(AlignError::input(format!(
                "alignment of {}x{} sequences can't be scored against {}x{} sequences",
                alignment.target_len(),
                alignment.query_len(),
                self.target_len(),
                self.query_len()
            )));
        }

        let (mut i, mut j) = (alignment.target().start, alignment.query().start);
        let mut total = 0.0;
        for step in alignment.steps() {
            let len = *step.len();
            total += match step.op() {
                Op::Match | Op::Mismatch => {
                    (0..len).map(|k| self.pair_score(i + k, j + k)).sum::<f64>()
                }
                Op::GapFirst => self.gap_score(Side::Target, i, len)?,
                Op::GapSecond => self.gap_score(Side::Query, j, len)?,
            };
            step.op().apply(&mut i, &mut j, len);
        }
        Ok(total)
    }

    // Region and forward-orientation position of a gap boundary
    fn locate(&self, side: Side, position: usize) -> (Region, usize) {
        match side {
            Side::Target => (Region::classify(position, self.target_len()), position),
            Side::Query => {
                let len = self.query_len();
                let region = Region::classify(position, len);
                match self.strand {
                    Strand::Forward => (region, position),
                    Strand::Reverse => (region.mirrored(), self.strand.to_forward(position, len)),
                }
            }
        }
    }
}

fn encode<'s, S, T>(
    config: &ScoringConfig<S>,
    sequence: &'s T,
    interned: &mut Vec<&'s S>,
) -> Result<Vec<usize>>
where
    S: Symbol,
    T: Alignable<Symbol = S> + ?Sized,
{
    if sequence.is_empty() {
        return Err(AlignError::input("sequence has zero length"));
    }
    if let Some(ind) = sequence.split_symbol() {
        return Err(AlignError::input(format!(
            "sequence item {ind} is not an ASCII character, align Unicode text as chars"
        )));
    }

    let mut codes = Vec::with_capacity(sequence.len());
    for ind in 0..sequence.len() {
        let symbol = sequence.at(ind);
        let code = match config.substitutions() {
            Substitutions::Scalars { .. } => {
                if config.wildcard().as_ref() == Some(symbol) {
                    WILDCARD
                } else if let Some(alphabet) = config.alphabet() {
                    position_in(alphabet, symbol)?
                } else {
                    match interned.iter().position(|x| *x == symbol) {
                        Some(code) => code,
                        None => {
                            interned.push(symbol);
                            interned.len() - 1
                        }
                    }
                }
            }
            Substitutions::Matrix(matrix) => match config.alphabet() {
                Some(alphabet) => position_in(alphabet, symbol)?,
                None => {
                    let ordinal = symbol.ordinal().ok_or_else(|| {
                        AlignError::input(format!("sequence item {ind} has no integer index"))
                    })?;
                    if ordinal < 0 {
                        return Err(AlignError::input(format!(
                            "sequence item {ind} is negative ({ordinal})"
                        )));
                    }
                    if ordinal as u64 >= matrix.size() as u64 {
                        return Err(AlignError::input(format!(
                            "sequence item {ind} is out of bound ({ordinal}, should be < {})",
                            matrix.size()
                        )));
                    }
                    ordinal as usize
                }
            },
        };
        codes.push(code);
    }
    Ok(codes)
}

fn position_in<S: PartialEq>(alphabet: &[S], symbol: &S) -> Result<usize> {
    alphabet
        .iter()
        .position(|x| x == symbol)
        .ok_or_else(|| AlignError::input("sequence contains letters not in the alphabet"))
}
