//! `*.PININFO` annotation merge.
//!
//! For every `.SUBCKT` declaration whose module appears in the descriptor
//! table, a pin-direction annotation line is placed directly after the
//! declaration. The annotation is regenerated wholesale each run: an existing
//! `*.PININFO` line right after the declaration is replaced, never patched
//! field-by-field.

use crate::parser::socmod::{Module, ModuleTable};
use crate::store::LineStore;

const SUBCKT_PREFIX: &str = ".SUBCKT";
const PININFO_PREFIX: &str = "*.PININFO";

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeCounts {
    pub inserted: usize,
    pub replaced: usize,
}

/// Insert or replace pin-info lines after subcircuit declarations. Unknown
/// module names and modules without ports are skipped silently; any existing
/// pin-info line is then left untouched.
pub fn merge_pininfo(store: &mut LineStore, modules: &ModuleTable) -> MergeCounts {
    let mut counts = MergeCounts::default();
    let mut idx = 0;
    while idx < store.len() {
        // owned copy so the store can be mutated below
        let name = store
            .line(idx)
            .strip_prefix(SUBCKT_PREFIX)
            .and_then(|rest| rest.split_whitespace().next())
            .map(str::to_string);
        if let Some(name) = name {
            match modules.get(&name) {
                Some(module) if !module.ports.is_empty() => {
                    let pininfo = build_pininfo(module);
                    if idx + 1 < store.len() && store.line(idx + 1).starts_with(PININFO_PREFIX) {
                        store.replace(idx + 1, pininfo);
                        counts.replaced += 1;
                    } else {
                        store.insert_after(idx, pininfo);
                        counts.inserted += 1;
                    }
                    // step over the annotation we just wrote
                    idx += 1;
                }
                Some(_) => {}
                None => {
                    tracing::debug!(module = %name, "no descriptor entry for subcircuit");
                }
            }
        }
        idx += 1;
    }
    counts
}

fn build_pininfo(module: &Module) -> String {
    let mut line = String::from(PININFO_PREFIX);
    for port in &module.ports {
        line.push_str(&format!(" {}:{}", port.name, port.direction.code()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = "\
inv:
    A:
      direction: in
    Y:
      direction: out
    VDD
    VSS
empty
";

    #[test]
    fn inserts_after_declaration() {
        let modules = ModuleTable::parse(DESCRIPTOR);
        let mut store = LineStore::from_text(".SUBCKT inv A Y VDD VSS\nM1 Y A VDD VDD pch\n.ENDS\n");
        let counts = merge_pininfo(&mut store, &modules);
        assert_eq!(counts.inserted, 1);
        assert_eq!(counts.replaced, 0);
        assert_eq!(store.line(1), "*.PININFO A:I Y:O VDD:B VSS:B");
        assert_eq!(store.line(2), "M1 Y A VDD VDD pch");
    }

    #[test]
    fn second_merge_replaces_instead_of_duplicating() {
        let modules = ModuleTable::parse(DESCRIPTOR);
        let mut store = LineStore::from_text(".SUBCKT inv A Y VDD VSS\n.ENDS\n");
        merge_pininfo(&mut store, &modules);
        let counts = merge_pininfo(&mut store, &modules);
        assert_eq!(counts.inserted, 0);
        assert_eq!(counts.replaced, 1);
        assert_eq!(
            store.iter().filter(|l| l.starts_with("*.PININFO")).count(),
            1
        );
    }

    #[test]
    fn stale_annotation_is_rebuilt_wholesale() {
        let modules = ModuleTable::parse(DESCRIPTOR);
        let mut store =
            LineStore::from_text(".SUBCKT inv A Y VDD VSS\n*.PININFO A:O stale:B\n.ENDS\n");
        let counts = merge_pininfo(&mut store, &modules);
        assert_eq!(counts.replaced, 1);
        assert_eq!(store.line(1), "*.PININFO A:I Y:O VDD:B VSS:B");
    }

    #[test]
    fn unknown_module_is_left_alone() {
        let modules = ModuleTable::parse(DESCRIPTOR);
        let text = ".SUBCKT nand2 A B Y\n.ENDS\n";
        let mut store = LineStore::from_text(text);
        let counts = merge_pininfo(&mut store, &modules);
        assert_eq!(counts.inserted + counts.replaced, 0);
        assert_eq!(store.to_text(), text);
    }

    #[test]
    fn module_without_ports_is_skipped() {
        let modules = ModuleTable::parse(DESCRIPTOR);
        let text = ".SUBCKT empty\n*.PININFO stale:B\n.ENDS\n";
        let mut store = LineStore::from_text(text);
        let counts = merge_pininfo(&mut store, &modules);
        // existing annotation is neither replaced nor removed
        assert_eq!(counts.inserted + counts.replaced, 0);
        assert_eq!(store.to_text(), text);
    }

    #[test]
    fn declaration_on_last_line_still_gets_annotated() {
        let modules = ModuleTable::parse(DESCRIPTOR);
        let mut store = LineStore::from_text(".SUBCKT inv A Y VDD VSS\n");
        let counts = merge_pininfo(&mut store, &modules);
        assert_eq!(counts.inserted, 1);
        assert_eq!(store.line(1), "*.PININFO A:I Y:O VDD:B VSS:B");
    }
}
