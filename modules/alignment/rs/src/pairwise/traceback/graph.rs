use eyre::Result;

use crate::pairwise::dp::Tracer;
use crate::pairwise::scoring::Mode;
use crate::pairwise::AlignError;

/// Layout of DP nodes: `(i * (m + 1) + j) * states + state`.
///
/// Row-major order of cells guarantees that every predecessor of a node has a smaller id.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Grid {
    cols: usize,
    states: usize,
    len: usize,
}

impl Grid {
    pub fn new(n: usize, m: usize, states: usize) -> Self {
        let cols = m + 1;
        Self {
            cols,
            states,
            len: (n + 1) * cols * states,
        }
    }

    #[inline(always)]
    pub fn node(&self, i: usize, j: usize, state: usize) -> usize {
        (i * self.cols + j) * self.states + state
    }

    /// Matrix cell `(i, j)` of the node.
    #[inline(always)]
    pub fn cell(&self, node: usize) -> (usize, usize) {
        let cell = node / self.states;
        (cell / self.cols, cell % self.cols)
    }

    pub fn states(&self) -> usize {
        self.states
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Collects optimal predecessors reported during the matrix fill into a compact graph.
pub struct GraphBuilder {
    grid: Grid,
    offsets: Vec<usize>,
    preds: Vec<usize>,
    sources: Vec<bool>,
    next: usize,
}

impl GraphBuilder {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            offsets: vec![0; grid.len() + 1],
            preds: Vec::new(),
            sources: vec![false; grid.len()],
            next: 0,
        }
    }

    pub fn finish(mut self, sinks: Vec<usize>, mode: Mode) -> Graph {
        let total = self.preds.len();
        for offset in &mut self.offsets[self.next..] {
            *offset = total;
        }

        let mut graph = Graph {
            grid: self.grid,
            offsets: self.offsets,
            preds: self.preds,
            sources: self.sources,
            sinks,
        };
        if mode == Mode::Local {
            graph.detach_sinks();
        }
        graph
    }
}

impl Tracer for GraphBuilder {
    fn start(&mut self, node: usize) {
        self.sources[node] = true;
    }

    fn edges(&mut self, node: usize, preds: &[usize]) -> Result<()> {
        if node < self.next {
            return Err(AlignError::internal(format!(
                "predecessors of node {node} were reported out of order"
            )));
        }
        if let Some(pred) = preds.iter().find(|&&x| x >= node) {
            return Err(AlignError::internal(format!(
                "edge {node} -> {pred} doesn't point backwards"
            )));
        }

        let start = self.preds.len();
        for offset in &mut self.offsets[self.next..=node] {
            *offset = start;
        }
        self.preds.extend_from_slice(preds);
        self.next = node + 1;
        Ok(())
    }
}

/// Directed acyclic graph of all optimal alignment paths. Edges point from a node to its optimal
/// predecessors, sources are the nodes where alignments start.
#[derive(Clone, PartialEq, Debug)]
pub struct Graph {
    grid: Grid,
    offsets: Vec<usize>,
    preds: Vec<usize>,
    sources: Vec<bool>,
    sinks: Vec<usize>,
}

impl Graph {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Optimal predecessors of the node, in the tie-break order.
    #[inline(always)]
    pub fn preds(&self, node: usize) -> &[usize] {
        &self.preds[self.offsets[node]..self.offsets[node + 1]]
    }

    #[inline(always)]
    pub fn is_source(&self, node: usize) -> bool {
        self.sources[node]
    }

    /// Nodes where optimal alignments end.
    pub fn sinks(&self) -> &[usize] {
        &self.sinks
    }

    pub fn nodes(&self) -> usize {
        self.grid.len()
    }

    pub fn edges(&self) -> usize {
        self.preds.len()
    }

    // A local alignment ends with an aligned pair and never passes through another end point
    fn detach_sinks(&mut self) {
        let mut is_sink = vec![false; self.grid.len()];
        for &sink in &self.sinks {
            is_sink[sink] = true;
        }

        let mut offsets = Vec::with_capacity(self.offsets.len());
        let mut preds = Vec::with_capacity(self.preds.len());
        offsets.push(0);
        for node in 0..self.grid.len() {
            let (i, j) = self.grid.cell(node);
            for &pred in &self.preds[self.offsets[node]..self.offsets[node + 1]] {
                if is_sink[pred] {
                    continue;
                }
                if is_sink[node] {
                    let (pi, pj) = self.grid.cell(pred);
                    if pi + 1 != i || pj + 1 != j {
                        continue;
                    }
                }
                preds.push(pred);
            }
            offsets.push(preds.len());
        }

        self.offsets = offsets;
        self.preds = preds;
    }
}
