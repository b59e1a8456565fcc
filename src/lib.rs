//! OpenEBS Tables
//!
//! Constants, cas-type mappings and report column definitions shared by the
//! OpenEBS kubectl tooling, with the helpers that format command output
//! from them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        CLI / callers                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────────┐  │
//! │  │   Printer    │  │   Cas Type   │  │  Volume / Units    │  │
//! │  │ (table/json) │  │  Resolution  │  │     Helpers        │  │
//! │  └──────┬───────┘  └──────┬───────┘  └─────────┬──────────┘  │
//! │         └─────────────────┼────────────────────┘             │
//! │                ┌──────────┴──────────┐                       │
//! │                │   Static Registry   │                       │
//! │                │ (compile-time data) │                       │
//! │                └─────────────────────┘                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`util`]: registry, column model, printer and resolution helpers
//! - [`error`]: Error types and handling

pub mod error;
pub mod util;

// Re-export commonly used types
pub use error::{Error, Result};

pub use util::constant;
pub use util::{
    Cell, ColumnType, OutputFormat, ReportKind, Table, TableColumnDefinition, TableRow,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
