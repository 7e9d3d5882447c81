pub mod alignment;
pub mod loc;
pub mod num;
