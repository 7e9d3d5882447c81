use eyre::Result;
use rayon::prelude::*;

use biobit_core_rs::alignment::{Alignable, Symbol};
use biobit_core_rs::loc::Strand;

use super::algorithm::Algorithm;
use super::alignment::{Alignment, Op, Step};
use super::dp::{self, Fill, NoTrace, Tracer};
use super::scoring::{Encoded, Model, ScoringConfig};
use super::traceback::{Graph, GraphBuilder, Grid, Paths};
use super::AlignError;

/// Exhaustive pairwise aligner.
///
/// The recurrence is picked from the scoring configuration: constant per-symbol gap costs run the
/// single-matrix algorithm, distinct open/extend or end costs run Gotoh and gap functions run
/// Waterman-Smith-Beyer.
#[derive(Clone, Debug)]
pub struct Aligner<S> {
    config: ScoringConfig<S>,
}

impl<S> Default for Aligner<S> {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl<S> Aligner<S> {
    pub fn new(config: ScoringConfig<S>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig<S> {
        &self.config
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm()
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm().name(*self.config.mode())
    }
}

impl<S: Symbol> Aligner<S> {
    /// Optimal alignment score, no traceback is stored.
    pub fn score<T, Q>(&self, target: &T, query: &Q) -> Result<f64>
    where
        T: Alignable<Symbol = S> + ?Sized,
        Q: Alignable<Symbol = S> + ?Sized,
    {
        self.score_with_strand(target, query, Strand::Forward)
    }

    /// Same as [`Aligner::score`] for a query that was reverse-complemented by the caller when the
    /// strand is [`Strand::Reverse`]. The strand only affects end-gap regions and gap function
    /// positions of the query.
    pub fn score_with_strand<T, Q>(&self, target: &T, query: &Q, strand: Strand) -> Result<f64>
    where
        T: Alignable<Symbol = S> + ?Sized,
        Q: Alignable<Symbol = S> + ?Sized,
    {
        let model = Model::new(&self.config, target, query, strand)?;
        Ok(self.fill(&model, &mut NoTrace)?.score)
    }

    /// All co-optimal alignments of the target and the query.
    pub fn align<T, Q>(&self, target: &T, query: &Q) -> Result<AlignmentSet>
    where
        T: Alignable<Symbol = S> + ?Sized,
        Q: Alignable<Symbol = S> + ?Sized,
    {
        self.align_with_strand(target, query, Strand::Forward)
    }

    pub fn align_with_strand<T, Q>(
        &self,
        target: &T,
        query: &Q,
        strand: Strand,
    ) -> Result<AlignmentSet>
    where
        T: Alignable<Symbol = S> + ?Sized,
        Q: Alignable<Symbol = S> + ?Sized,
    {
        let model = Model::new(&self.config, target, query, strand)?;
        let grid = Grid::new(
            model.target_len(),
            model.query_len(),
            dp::states(self.algorithm()),
        );

        let mut builder = GraphBuilder::new(grid);
        let fill = self.fill(&model, &mut builder)?;
        let graph = builder.finish(fill.sinks, model.mode());
        let paths = Paths::count(&graph);

        log::trace!(
            "Traceback graph: {} nodes, {} edges, {} end points",
            graph.nodes(),
            graph.edges(),
            paths.sinks().len()
        );
        if paths.total().is_none() {
            log::warn!("Number of optimal alignments overflows usize, only a prefix is addressable");
        }

        Ok(AlignmentSet {
            score: fill.score,
            graph,
            paths,
            codes: model.into_codes(),
            strand,
        })
    }

    /// Score of an existing alignment under this aligner's scoring configuration.
    pub fn rescore<T, Q>(&self, target: &T, query: &Q, alignment: &Alignment) -> Result<f64>
    where
        T: Alignable<Symbol = S> + ?Sized,
        Q: Alignable<Symbol = S> + ?Sized,
    {
        Model::new(&self.config, target, query, *alignment.strand())?.rescore(alignment)
    }

    /// Optimal scores of independent forward-strand pairs, computed in parallel on the current
    /// rayon thread pool. Fails with the first error in the input order.
    pub fn score_batch<T, Q>(&self, pairs: &[(&T, &Q)]) -> Result<Vec<f64>>
    where
        S: Sync,
        T: Alignable<Symbol = S> + Sync + ?Sized,
        Q: Alignable<Symbol = S> + Sync + ?Sized,
    {
        log::debug!("Scoring {} sequence pairs", pairs.len());
        pairs
            .par_iter()
            .map(|(target, query)| self.score(*target, *query))
            .collect()
    }

    fn fill<Tr: Tracer>(&self, model: &Model<'_, S>, tracer: &mut Tr) -> Result<Fill> {
        let algorithm = self.algorithm();
        log::debug!(
            "Aligning {}x{} sequences with {}",
            model.target_len(),
            model.query_len(),
            algorithm.name(model.mode())
        );

        let fill = match algorithm {
            Algorithm::Simple => dp::simple::fill(model, tracer)?,
            Algorithm::Affine => dp::affine::fill(model, tracer)?,
            Algorithm::General => dp::general::fill(model, tracer)?,
        };
        log::debug!("Optimal score: {}", fill.score);
        Ok(fill)
    }
}

/// Lazily materialized collection of all co-optimal alignments.
///
/// Alignments are addressed by a 0-based index in a fixed order, each one is rebuilt from the
/// traceback graph on request.
#[derive(Clone, Debug)]
pub struct AlignmentSet {
    score: f64,
    graph: Graph,
    paths: Paths,
    codes: Encoded,
    strand: Strand,
}

impl AlignmentSet {
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Number of optimal alignments. Fails with [`AlignError::Overflow`] if it doesn't fit into
    /// `usize`; individual alignments are still available through [`AlignmentSet::get`].
    pub fn len(&self) -> Result<usize> {
        self.paths
            .total()
            .ok_or_else(|| AlignError::Overflow.into())
    }

    pub fn is_empty(&self) -> bool {
        self.paths.sinks().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Alignment> {
        let path = self.paths.path(&self.graph, index)?;
        let grid = self.graph.grid();

        let (start, end) = (grid.cell(*path.first()?), grid.cell(*path.last()?));
        let mut steps = Vec::with_capacity(path.len());
        for (&from, &to) in path.iter().zip(path.iter().skip(1)) {
            let (i, j) = grid.cell(from);
            let (ni, nj) = grid.cell(to);
            // Graph edges always advance, so no step is empty
            let step = match (ni - i, nj - j) {
                (0, len) => Step::new_unchecked(Op::GapFirst, len),
                (len, 0) => Step::new_unchecked(Op::GapSecond, len),
                _ if self.codes.is_identical(i, j) => Step::new_unchecked(Op::Match, 1),
                _ => Step::new_unchecked(Op::Mismatch, 1),
            };
            steps.push(step);
        }
        Step::collapse(&mut steps);

        Some(Alignment::new(
            self.score,
            steps,
            start.0..end.0,
            start.1..end.1,
            self.codes.target_len(),
            self.codes.query_len(),
            self.strand,
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = Alignment> + '_ {
        (0..=usize::MAX).map_while(|index| self.get(index))
    }
}

impl<'a> IntoIterator for &'a AlignmentSet {
    type Item = Alignment;
    type IntoIter = Box<dyn Iterator<Item = Alignment> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
