//! Command implementations

pub mod check;
pub mod roots;
pub mod simple;

pub use check::{CheckEntry, CheckReport, check_words};
pub use roots::list_roots;
pub use simple::run_simple;
