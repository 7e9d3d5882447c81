pub use alignable::Alignable;
pub use symbol::Symbol;

mod alignable;
mod symbol;
