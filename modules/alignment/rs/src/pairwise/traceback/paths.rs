use super::graph::Graph;

/// Number of optimal paths reaching every node of a traceback graph.
///
/// `None` marks counts that don't fit into `usize`. Such nodes are still walkable, but paths
/// through them can't be addressed exactly.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Paths {
    counts: Vec<Option<usize>>,
    sinks: Vec<usize>,
    total: Option<usize>,
}

impl Paths {
    pub fn count(graph: &Graph) -> Self {
        let mut counts = vec![Some(0); graph.nodes()];
        for node in 0..graph.nodes() {
            let mut count = Some(graph.is_source(node) as usize);
            for &pred in graph.preds(node) {
                count = count.zip(counts[pred]).and_then(|(x, y)| x.checked_add(y));
            }
            counts[node] = count;
        }

        let sinks: Vec<usize> = graph
            .sinks()
            .iter()
            .copied()
            .filter(|&x| counts[x] != Some(0))
            .collect();
        let total = sinks
            .iter()
            .try_fold(0usize, |total, &x| counts[x].and_then(|c| total.checked_add(c)));

        Self {
            counts,
            sinks,
            total,
        }
    }

    /// Total number of optimal alignments, `None` if it overflows.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// Sinks with at least one path leading to them.
    pub fn sinks(&self) -> &[usize] {
        &self.sinks
    }

    /// Nodes of the `index`-th path, from its source to its sink.
    ///
    /// Paths are ordered by sinks first, then by the predecessor choices made from the sink
    /// backwards: the choice closest to the sink is the most significant one.
    pub fn path(&self, graph: &Graph, index: usize) -> Option<Vec<usize>> {
        let mut index = index;
        let mut node = None;
        for &sink in &self.sinks {
            match self.counts[sink] {
                Some(count) if index >= count => index -= count,
                _ => {
                    node = Some(sink);
                    break;
                }
            }
        }
        let mut node = node?;

        let mut path = vec![node];
        loop {
            if graph.is_source(node) {
                if index == 0 {
                    break;
                }
                index -= 1;
            }

            let mut next = None;
            for &pred in graph.preds(node) {
                match self.counts[pred] {
                    Some(count) if index >= count => index -= count,
                    _ => {
                        next = Some(pred);
                        break;
                    }
                }
            }
            node = next?;
            path.push(node);
        }

        path.reverse();
        Some(path)
    }
}
