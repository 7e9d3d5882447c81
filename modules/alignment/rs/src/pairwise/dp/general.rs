use eyre::Result;

use super::affine::gap;
use super::{best, Endpoints, Fill, Tracer, IX, IY, M};
use crate::pairwise::scoring::{Mode, Model, Side};
use crate::pairwise::traceback::Grid;

/// Waterman-Smith-Beyer recurrence: a gap of any length is a single transition, scored as a
/// whole by the gap function. Every gap run is therefore entered from `M` or from the opposite
/// gap state, never from itself.
pub fn fill<S, T: Tracer>(model: &Model<'_, S>, tracer: &mut T) -> Result<Fill> {
    let (n, m) = (model.target_len(), model.query_len());
    let grid = Grid::new(n, m, 3);
    let epsilon = model.epsilon();
    let local = model.mode() == Mode::Local;

    // Gap functions are evaluated upfront, a failing one aborts before any DP work
    let qgaps = GapTable::new(model, Side::Query, m, n)?;
    let tgaps = GapTable::new(model, Side::Target, n, m)?;

    let mut scores = vec![f64::NEG_INFINITY; grid.len()];
    let mut endpoints = Endpoints::default();
    let mut ties = Vec::with_capacity(8);
    let mut candidates = Vec::with_capacity(2 * (n.max(m) + 1));

    for i in 0..=n {
        for j in 0..=m {
            // Aligned pair
            let node = grid.node(i, j, M);
            if i == 0 || j == 0 {
                if local || (i == 0 && j == 0) {
                    scores[node] = 0.0;
                    tracer.start(node);
                }
            } else {
                let pair = model.pair_score(i - 1, j - 1);
                let diagonal = [M, IX, IY].map(|state| {
                    let pred = grid.node(i - 1, j - 1, state);
                    (scores[pred] + pair, pred)
                });

                let score = best(&diagonal, epsilon, &mut ties);
                if local && score < epsilon {
                    scores[node] = 0.0;
                    tracer.start(node);
                } else if !ties.is_empty() {
                    scores[node] = score;
                    tracer.edges(node, &ties)?;
                    if local {
                        endpoints.offer(node, score, epsilon);
                    }
                }
            }

            // Gap in the query covering target symbols i-k..i
            if i > 0 {
                candidates.clear();
                for origin in [M, IY] {
                    for k in 1..=i {
                        let pred = grid.node(i - k, j, origin);
                        candidates.push((scores[pred] + qgaps.score(j, k), pred));
                    }
                }
                gap(
                    grid.node(i, j, IX),
                    &candidates,
                    local,
                    epsilon,
                    &mut scores,
                    &mut ties,
                    tracer,
                )?;
            }

            // Gap in the target covering query symbols j-k..j
            if j > 0 {
                candidates.clear();
                for origin in [M, IX] {
                    for k in 1..=j {
                        let pred = grid.node(i, j - k, origin);
                        candidates.push((scores[pred] + tgaps.score(i, k), pred));
                    }
                }
                gap(
                    grid.node(i, j, IY),
                    &candidates,
                    local,
                    epsilon,
                    &mut scores,
                    &mut ties,
                    tracer,
                )?;
            }
        }
    }

    if local {
        return Ok(endpoints.into_fill());
    }

    let candidates = [M, IX, IY].map(|state| {
        let node = grid.node(n, m, state);
        (scores[node], node)
    });
    let score = best(&candidates, epsilon, &mut ties);
    Ok(Fill {
        score,
        sinks: ties,
    })
}

// Costs of every gap a sequence can receive: `positions + 1` boundaries times `1..=lengths`
struct GapTable {
    lengths: usize,
    scores: Vec<f64>,
}

impl GapTable {
    fn new<S>(model: &Model<'_, S>, side: Side, positions: usize, lengths: usize) -> Result<Self> {
        let mut scores = Vec::with_capacity((positions + 1) * lengths);
        for position in 0..=positions {
            for length in 1..=lengths {
                scores.push(model.gap_score(side, position, length)?);
            }
        }
        Ok(Self { lengths, scores })
    }

    #[inline(always)]
    fn score(&self, position: usize, length: usize) -> f64 {
        self.scores[position * self.lengths + length - 1]
    }
}
