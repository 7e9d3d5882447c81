pub use config::{Builder, ScoringConfig};
pub use gaps::{Affine, GapFunction, Gaps, Region, Side};
pub use mode::Mode;
pub use model::{Encoded, Model};
pub use symbols::{SubstitutionMatrix, Substitutions};

mod config;
mod gaps;
mod mode;
mod model;
mod symbols;
