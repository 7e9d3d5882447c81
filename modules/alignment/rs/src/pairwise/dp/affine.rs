use eyre::Result;

use super::{best, Endpoints, Fill, Tracer, IX, IY, M};
use crate::pairwise::scoring::{Mode, Model, Side};
use crate::pairwise::traceback::Grid;

/// Gotoh recurrence with separate open/extend costs for every sequence end.
///
/// `M` ends with an aligned pair, `IX` with a gap in the query and `IY` with a gap in the target.
/// Gap states may follow each other directly, each switch opens a new gap.
pub fn fill<S, T: Tracer>(model: &Model<'_, S>, tracer: &mut T) -> Result<Fill> {
    let (n, m) = (model.target_len(), model.query_len());
    let grid = Grid::new(n, m, 3);
    let epsilon = model.epsilon();
    let local = model.mode() == Mode::Local;

    let mut scores = vec![f64::NEG_INFINITY; grid.len()];
    let mut endpoints = Endpoints::default();
    let mut ties = Vec::with_capacity(3);

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
                let candidates = [M, IX, IY].map(|state| {
                    let pred = grid.node(i - 1, j - 1, state);
                    (scores[pred] + pair, pred)
                });

                let score = best(&candidates, epsilon, &mut ties);
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

            // Gap in the query
            if i > 0 {
                let affine = model.affine(Side::Query, j);
                let (open, extend) = (*affine.open(), *affine.extend());
                let candidates = [(M, open), (IX, extend), (IY, open)].map(|(state, cost)| {
                    let pred = grid.node(i - 1, j, state);
                    (scores[pred] + cost, pred)
                });
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

            // Gap in the target
            if j > 0 {
                let affine = model.affine(Side::Target, i);
                let (open, extend) = (*affine.open(), *affine.extend());
                let candidates = [(M, open), (IX, open), (IY, extend)].map(|(state, cost)| {
                    let pred = grid.node(i, j - 1, state);
                    (scores[pred] + cost, pred)
                });
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

// Gap states never start a local alignment
pub(super) fn gap<T: Tracer>(
    node: usize,
    candidates: &[(f64, usize)],
    local: bool,
    epsilon: f64,
    scores: &mut [f64],
    ties: &mut Vec<usize>,
    tracer: &mut T,
) -> Result<()> {
    let score = best(candidates, epsilon, ties);
    if ties.is_empty() || (local && score < epsilon) {
        return Ok(());
    }
    scores[node] = score;
    tracer.edges(node, ties)
}
