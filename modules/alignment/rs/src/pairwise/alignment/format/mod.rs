use std::str::FromStr;

use eyre::Result;

use biobit_core_rs::alignment::{Alignable, Symbol};

use super::alignment::Alignment;
use crate::pairwise::AlignError;

mod bed;
mod psl;
mod sam;
mod text;

/// Supported representations of a single alignment.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Format {
    /// Target, match line and query, one line each.
    #[default]
    Text,
    Psl,
    Bed,
    Sam,
}

impl FromStr for Format {
    type Err = eyre::Report;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "" | "text" => Ok(Format::Text),
            "psl" => Ok(Format::Psl),
            "bed" => Ok(Format::Bed),
            "sam" => Ok(Format::Sam),
            _ => Err(AlignError::config(format!(
                "unknown alignment format {value:?}"
            ))),
        }
    }
}

/// Renders alignments of one target/query pair.
pub struct Formatter<'a, T: ?Sized, Q: ?Sized> {
    target: &'a T,
    query: &'a Q,
    target_name: &'a str,
    query_name: &'a str,
}

impl<'a, S, T, Q> Formatter<'a, T, Q>
where
    S: Symbol,
    T: Alignable<Symbol = S> + ?Sized,
    Q: Alignable<Symbol = S> + ?Sized,
{
    /// Sequences must be the ones passed to the aligner, i.e. a reverse-strand query is expected
    /// to be reverse-complemented already.
    pub fn new(target: &'a T, query: &'a Q) -> Self {
        Self {
            target,
            query,
            target_name: "target",
            query_name: "query",
        }
    }

    pub fn with_names(mut self, target: &'a str, query: &'a str) -> Self {
        self.target_name = target;
        self.query_name = query;
        self
    }

    pub fn render(&self, alignment: &Alignment, format: Format) -> Result<String> {
        if *alignment.target_len() != self.target.len()
            || *alignment.query_len() != self.query.len()
        {
            return Err(AlignError::input(format!(
                "alignment of {}x{} sequences can't be rendered with {}x{} sequences",
                alignment.target_len(),
                alignment.query_len(),
                self.target.len(),
                self.query.len()
            )));
        }

        let rendered = match format {
            Format::Text => text::render(self.target, self.query, alignment),
            Format::Psl => psl::render(self, alignment),
            Format::Bed => bed::render(self, alignment),
            Format::Sam => sam::render(self, alignment),
        };
        Ok(rendered)
    }
}

// Boundaries of the aligned core: from the first to the last aligned pair of symbols
struct Core {
    target: (usize, usize),
    query: (usize, usize),
}

impl Core {
    fn new(alignment: &Alignment, blocks: &[super::Block]) -> Self {
        match (blocks.first(), blocks.last()) {
            (Some(first), Some(last)) => Self {
                target: (first.target().start, last.target().end),
                query: (first.query().start, last.query().end),
            },
            _ => Self {
                target: (alignment.target().start, alignment.target().start),
                query: (alignment.query().start, alignment.query().start),
            },
        }
    }
}
