use eyre::Result;

use crate::pairwise::algorithm::Algorithm;

pub mod affine;
pub mod general;
pub mod simple;

// Matrix states of the three-state recurrences
pub const M: usize = 0;
/// Gap in the query: the target advances alone.
pub const IX: usize = 1;
/// Gap in the target: the query advances alone.
pub const IY: usize = 2;

/// Number of matrix states per DP cell.
pub fn states(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::Simple => 1,
        Algorithm::Affine | Algorithm::General => 3,
    }
}

// All engines fill matrices row-by-row, left-to-right, and notify the tracer about every
// reachable node in increasing node order.
#[allow(unused_variables)]
pub trait Tracer {
    /// The node starts alignments: global origin or a local start point with zero score.
    fn start(&mut self, node: usize) {}

    /// Optimal predecessors of the node, in the tie-break order.
    fn edges(&mut self, node: usize, preds: &[usize]) -> Result<()> {
        Ok(())
    }
}

/// Tracer for score-only runs.
pub struct NoTrace;

impl Tracer for NoTrace {}

/// Outcome of a matrix fill.
#[derive(Clone, PartialEq, Debug)]
pub struct Fill {
    pub score: f64,
    /// Nodes where optimal alignments end.
    pub sinks: Vec<usize>,
}

/// Best finite candidate score. `ties` receives the nodes of all candidates within epsilon of
/// the best one, in the candidates order.
pub fn best(candidates: &[(f64, usize)], epsilon: f64, ties: &mut Vec<usize>) -> f64 {
    ties.clear();
    let mut best = f64::NEG_INFINITY;
    for &(score, node) in candidates {
        if score == f64::NEG_INFINITY {
            continue;
        }
        if score > best + epsilon {
            best = score;
            ties.clear();
            ties.push(node);
        } else if score >= best - epsilon {
            ties.push(node);
        }
    }
    best
}

/// Running maximum of local alignment end points.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Endpoints {
    score: f64,
    nodes: Vec<usize>,
}

impl Endpoints {
    pub fn offer(&mut self, node: usize, score: f64, epsilon: f64) {
        if score > self.score + epsilon {
            self.score = score;
            self.nodes.clear();
            self.nodes.push(node);
        } else if score >= self.score - epsilon {
            self.nodes.push(node);
        }
    }

    pub fn into_fill(self) -> Fill {
        Fill {
            score: self.score,
            sinks: self.nodes,
        }
    }
}
