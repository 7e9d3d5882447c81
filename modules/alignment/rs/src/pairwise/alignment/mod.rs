pub use alignment::{Alignment, Block};
pub use format::{Format, Formatter};
pub use op::Op;
pub use step::Step;

mod alignment;
mod format;
mod op;
mod step;
