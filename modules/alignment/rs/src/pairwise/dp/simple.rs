use eyre::Result;

use super::{best, Endpoints, Fill, Tracer};
use crate::pairwise::scoring::{Mode, Model, Side};
use crate::pairwise::traceback::Grid;

/// Needleman-Wunsch (global) and Smith-Waterman (local) recurrence with a constant cost per
/// gapped symbol.
pub fn fill<S, T: Tracer>(model: &Model<'_, S>, tracer: &mut T) -> Result<Fill> {
    let (n, m) = (model.target_len(), model.query_len());
    let grid = Grid::new(n, m, 1);
    let epsilon = model.epsilon();
    let local = model.mode() == Mode::Local;

    // Costs are identical in all regions, any position will do
    let tgap = model.gap_score(Side::Target, 0, 1)?;
    let qgap = model.gap_score(Side::Query, 0, 1)?;

    let mut scores = vec![f64::NEG_INFINITY; grid.len()];
    let mut endpoints = Endpoints::default();
    let mut ties = Vec::with_capacity(3);

    for i in 0..=n {
        for j in 0..=m {
            let node = grid.node(i, j, 0);
            if (i == 0 && j == 0) || (local && (i == 0 || j == 0)) {
                scores[node] = 0.0;
                tracer.start(node);
                continue;
            }

            let mut candidates = [(f64::NEG_INFINITY, 0); 3];
            if j > 0 {
                let pred = grid.node(i, j - 1, 0);
                candidates[0] = (scores[pred] + tgap, pred);
            }
            if i > 0 {
                let pred = grid.node(i - 1, j, 0);
                candidates[1] = (scores[pred] + qgap, pred);
            }
            let diagonal = if i > 0 && j > 0 {
                let pred = grid.node(i - 1, j - 1, 0);
                candidates[2] = (scores[pred] + model.pair_score(i - 1, j - 1), pred);
                Some(pred)
            } else {
                None
            };

            let score = best(&candidates, epsilon, &mut ties);
            if local && score < epsilon {
                scores[node] = 0.0;
                tracer.start(node);
                continue;
            }

            scores[node] = score;
            if !ties.is_empty() {
                tracer.edges(node, &ties)?;
            }
            if local && diagonal.is_some_and(|x| ties.contains(&x)) {
                endpoints.offer(node, score, epsilon);
            }
        }
    }

    if local {
        Ok(endpoints.into_fill())
    } else {
        let sink = grid.node(n, m, 0);
        Ok(Fill {
            score: scores[sink],
            sinks: vec![sink],
        })
    }
}
