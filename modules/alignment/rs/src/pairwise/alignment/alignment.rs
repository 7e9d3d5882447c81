use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use biobit_core_rs::loc::Strand;

use super::op::Op;
use super::step::Step;

/// Maximal ungapped run of aligned symbols, in the computational orientation.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters, Constructor)]
pub struct Block {
    target: Range<usize>,
    query: Range<usize>,
}

impl Block {
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}

/// One optimal alignment of a target and a query sequence.
///
/// Coordinates are 0-based, half-open and computational: a reverse-strand query is indexed as it
/// was aligned, i.e. after reverse-complementing. Use [`Alignment::aligned`] to get coordinates
/// in the forward orientation of the query.
#[derive(Clone, PartialEq, Debug, Getters, Constructor, Dissolve)]
pub struct Alignment {
    score: f64,
    /// Alignment path starting at (`target.start`, `query.start`).
    steps: Vec<Step<usize>>,
    /// Target region covered by the alignment path.
    target: Range<usize>,
    /// Query region covered by the alignment path.
    query: Range<usize>,
    target_len: usize,
    query_len: usize,
    strand: Strand,
}

impl Alignment {
    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        // Note: length of each step is guaranteed to be non-zero.
        self.steps.is_empty()
    }

    /// Number of alignment columns, i.e. the sum of all step lengths.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len()).sum()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Ungapped blocks in the computational orientation. Matches and mismatches share a block.
    pub fn blocks(&self) -> Vec<Block> {
        let (mut target, mut query) = (self.target.start, self.query.start);
        let mut blocks: Vec<Block> = Vec::new();
        let mut extend = false;

        for step in &self.steps {
            let len = *step.len();
            if step.op().is_diagonal() {
                match blocks.last_mut() {
                    Some(last) if extend => {
                        last.target.end += len;
                        last.query.end += len;
                    }
                    _ => blocks.push(Block::new(target..target + len, query..query + len)),
                }
                extend = true;
            } else {
                extend = false;
            }
            step.op().apply(&mut target, &mut query, len);
        }
        blocks
    }

    /// Block boundaries as `[target, query]` lists of `[start, end]` pairs. Query boundaries are
    /// mapped to the forward orientation: for the reverse strand they run in descending order.
    pub fn aligned(&self) -> [Vec<[usize; 2]>; 2] {
        let blocks = self.blocks();
        let target = blocks
            .iter()
            .map(|x| [x.target.start, x.target.end])
            .collect();
        let query = blocks
            .iter()
            .map(|x| {
                [
                    self.strand.to_forward(x.query.start, self.query_len),
                    self.strand.to_forward(x.query.end, self.query_len),
                ]
            })
            .collect();
        [target, query]
    }

    /// Total number of symbols in gaps of the given kind, including end gaps.
    pub fn gapped(&self, op: Op) -> usize {
        self.steps
            .iter()
            .filter(|x| *x.op() == op)
            .map(|x| *x.len())
            .sum()
    }
}
