//! Cdlfix - CDL netlist normalization library
//!
//! Rewrites CDL/SPICE-family netlists into the form a downstream layout tool
//! expects: lower-cases attribute keys, inserts missing declaration sections,
//! derives geometric device parameters, and optionally injects per-pin
//! direction annotations from an external module/port descriptor.
//!
//! # Quick Start
//!
//! ```
//! use cdlfix::{FixOptions, NetlistFixer};
//!
//! let report = NetlistFixer::fix_text(
//!     "M1 d g s b nch W=2u L=180n\n",
//!     None,
//!     &FixOptions::default(),
//! );
//! assert!(report.text.contains("w=2u l=180n fw=2u"));
//! ```
//!
//! # Features
//!
//! - **Case normalization**: ` W=` and friends become lower-case
//! - **Section insertion**: missing `.PARAM`/`*.CAPVAL`/... defaults
//! - **Geometric recovery**: `fw` from `w`/`fingers`, `w`/`l` from `area`/`pj`
//! - **Pin directions**: `*.PININFO` lines built from a `.soc_mod` descriptor

pub mod core;
pub mod parser;
pub mod passes;
pub mod si;
pub mod store;

// Re-export main types
pub use crate::core::{FixError, FixOptions, FixReport, FixStats, NetlistFixer};
pub use crate::parser::socmod::{Direction, Module, ModuleTable, Port};
pub use crate::store::LineStore;

/// Parse a module/port descriptor file (convenience wrapper).
pub fn parse_soc_modules(path: &std::path::Path) -> Result<ModuleTable, FixError> {
    ModuleTable::parse_file(path).map_err(FixError::from)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FixError, FixOptions, FixReport, FixStats, ModuleTable, NetlistFixer};
}
