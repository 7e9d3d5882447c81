use std::str::FromStr;

use derive_more::Display;

use crate::pairwise::AlignError;

/// Alignment mode: end-to-end (global) or best-scoring subsequences (local).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default, Display)]
pub enum Mode {
    #[default]
    #[display("global")]
    Global,
    #[display("local")]
    Local,
}

impl FromStr for Mode {
    type Err = eyre::Report;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "global" => Ok(Mode::Global),
            "local" => Ok(Mode::Local),
            _ => Err(AlignError::config(format!(
                "invalid mode {value:?}, expected 'global' or 'local'"
            ))),
        }
    }
}
