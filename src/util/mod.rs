//! Utilities Module
//!
//! The static registry of constants and tables, plus the helpers that turn
//! Kubernetes objects and raw numbers into report cells.

pub mod cas;
pub mod column;
pub mod constant;
pub mod printer;
pub mod units;
pub mod volume;

pub use cas::*;
pub use column::*;
pub use printer::*;
pub use units::*;
pub use volume::*;
