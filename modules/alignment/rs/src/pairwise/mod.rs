pub use aligner::{Aligner, AlignmentSet};
pub use algorithm::Algorithm;
pub use error::AlignError;

pub mod alignment;
pub mod scoring;
pub mod traceback;

mod aligner;
mod algorithm;
mod dp;
mod error;
