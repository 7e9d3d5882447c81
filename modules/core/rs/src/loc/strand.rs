use std::fmt::Display;
use std::str::FromStr;

use eyre::{eyre, Report};

/// Strand of the query sequence relative to the target.
///
/// A reverse-strand query is expected to be reverse-complemented by the caller before alignment,
/// all computations then run in this "computational" orientation and the strand is only used to
/// map coordinates back to the original (forward) indexing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(i8)]
pub enum Strand {
    /// The forward strand, also known as the positive strand or Watson strand.
    #[default]
    Forward = 1,
    /// The reverse strand, also known as the negative strand or Crick strand.
    Reverse = -1,
}

impl Strand {
    /// Get the symbolic representation of the strand.
    pub fn symbol(&self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }

    /// Map a boundary coordinate of a sequence with the given length from the computational
    /// orientation to the forward one. Boundaries are positions between symbols, i.e. `0..=len`.
    pub fn to_forward(&self, pos: usize, len: usize) -> usize {
        debug_assert!(pos <= len);
        match self {
            Self::Forward => pos,
            Self::Reverse => len - pos,
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Strand {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Self::Forward),
            '-' => Ok(Self::Reverse),
            _ => Err(()),
        }
    }
}

impl FromStr for Strand {
    type Err = Report;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "+" => Ok(Self::Forward),
            "-" => Ok(Self::Reverse),
            _ => Err(eyre!("strand must be '+' or '-', got {value:?}")),
        }
    }
}

impl TryFrom<i8> for Strand {
    type Error = ();

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Forward),
            -1 => Ok(Self::Reverse),
            _ => Err(()),
        }
    }
}
