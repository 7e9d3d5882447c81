use derive_more::{Display, Error};

/// Failures raised by the alignment engine itself.
///
/// All public functions return [`eyre::Result`]; use `report.downcast_ref::<AlignError>()` to
/// classify a failure. Errors raised by user gap functions are propagated untouched and are never
/// wrapped into this type.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AlignError {
    /// Invalid scoring parameters, rejected when they are assigned.
    #[display("{_0}")]
    Config(#[error(not(source))] String),
    /// Invalid sequences, rejected before any DP work begins.
    #[display("{_0}")]
    Input(#[error(not(source))] String),
    /// The exact number of co-optimal alignments doesn't fit into `usize`.
    #[display("number of optimal alignments is larger than {}", usize::MAX)]
    Overflow,
    /// Broken internal invariant, e.g. a cycle in the traceback graph.
    #[display("internal error: {_0}")]
    Internal(#[error(not(source))] String),
}

impl AlignError {
    pub(crate) fn config(msg: impl Into<String>) -> eyre::Report {
        AlignError::Config(msg.into()).into()
    }

    pub(crate) fn input(msg: impl Into<String>) -> eyre::Report {
        AlignError::Input(msg.into()).into()
    }

    pub(crate) fn internal(msg: impl Into<String>) -> eyre::Report {
        AlignError::Internal(msg.into()).into()
    }
}
