//! Pipeline orchestration shared by library users and the CLI.
//! No terminal or argument-parsing dependencies.

use std::fs;
use std::path::Path;

use crate::parser::socmod::ModuleTable;
use crate::passes::case::normalize_case;
use crate::passes::geometry::derive_geometry;
use crate::passes::pininfo::merge_pininfo;
use crate::passes::sections::insert_missing_sections;
use crate::store::LineStore;

#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// Options for one fix run. Every pass defaults to enabled; the CLI's
/// `--no-*` flags clear them.
#[derive(Clone, Copy, Debug)]
pub struct FixOptions {
    /// Prepend defaults for missing declaration sections.
    pub insert_sections: bool,
    /// Lower-case the known upper-case attribute keys.
    pub normalize_case: bool,
    /// Derive `fw` and recover `w`/`l` from `area`/`pj`.
    pub derive_geometry: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            insert_sections: true,
            normalize_case: true,
            derive_geometry: true,
        }
    }
}

/// Counts of what one run did, for reporting and CI consumption.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct FixStats {
    pub lines_in: usize,
    pub lines_out: usize,
    pub sections_inserted: usize,
    pub lines_case_normalized: usize,
    pub fw_derived: usize,
    pub wl_derived: usize,
    pub pininfo_inserted: usize,
    pub pininfo_replaced: usize,
}

/// Result of one pipeline run: the fixed netlist text plus run statistics.
#[derive(Debug, Clone)]
pub struct FixReport {
    pub text: String,
    pub stats: FixStats,
}

const RULE: &str =
    "************************************************************************";

/// Prepended before section normalization; ends up below the inserted
/// section defaults in the output.
const NETLIST_BANNER: [&str; 4] = ["", RULE, "* CDL netlist", RULE];

/// Prepended after section normalization; tops the output.
const GENERATED_BANNER: [&str; 5] = [RULE, "* Generated by cdlfix", "", "* CDL parameter", RULE];

/// Single-shot batch transform. Each run owns its own line store and module
/// table; there is no cross-run state.
pub struct NetlistFixer;

impl NetlistFixer {
    /// Fix netlist text in memory. Infallible: every recoverable condition
    /// is a local skip, and file handling lives in [`NetlistFixer::fix_file`].
    pub fn fix_text(input: &str, modules: Option<&ModuleTable>, options: &FixOptions) -> FixReport {
        let mut store = LineStore::from_text(input);
        let mut stats = FixStats {
            lines_in: store.len(),
            ..FixStats::default()
        };

        store.prepend_block(&NETLIST_BANNER);
        if options.insert_sections {
            stats.sections_inserted = insert_missing_sections(&mut store);
        }
        store.prepend_block(&GENERATED_BANNER);

        if options.normalize_case {
            stats.lines_case_normalized = normalize_case(&mut store);
        }
        if options.derive_geometry {
            let counts = derive_geometry(&mut store);
            stats.fw_derived = counts.fw_derived;
            stats.wl_derived = counts.wl_derived;
        }
        if let Some(modules) = modules {
            let counts = merge_pininfo(&mut store, modules);
            stats.pininfo_inserted = counts.inserted;
            stats.pininfo_replaced = counts.replaced;
        }

        stats.lines_out = store.len();
        FixReport {
            text: store.to_text(),
            stats,
        }
    }

    /// Fix a netlist file, optionally merging pin directions from a
    /// module/port descriptor file.
    pub fn fix_file(
        input: &Path,
        soc_module: Option<&Path>,
        options: &FixOptions,
    ) -> Result<FixReport, FixError> {
        let text = fs::read_to_string(input)?;
        let modules = match soc_module {
            Some(path) => Some(ModuleTable::parse_file(path)?),
            None => None,
        };
        Ok(Self::fix_text(&text, modules.as_ref(), options))
    }
}
