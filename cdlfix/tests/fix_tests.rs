//! End-to-end tests for the fix pipeline

use cdlfix::{FixOptions, ModuleTable, NetlistFixer};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn fixes_sample_netlist_with_descriptor() {
    let report = NetlistFixer::fix_file(
        &fixture_path("sample.cdl"),
        Some(&fixture_path("sample.soc_mod")),
        &FixOptions::default(),
    )
    .expect("fixture should process");

    let lines: Vec<&str> = report.text.lines().collect();

    // generated banner tops the output, netlist banner sits below the defaults
    assert_eq!(lines[1], "* Generated by cdlfix");
    assert!(lines.contains(&".PARAM"));
    assert!(lines.contains(&"* CDL netlist"));

    // attribute keys are lower-cased and fw derived per device
    assert!(report
        .text
        .contains("MP1 Y A VDD VDD pch w=2u l=180n m=1 fw=2u"));
    assert!(report
        .text
        .contains("MN1 Y A VSS VSS nch w=1u l=180n fingers=2 fw=500n"));

    // w/l recovered from area/pj (w=2u, l=8u solves both constraints)
    assert!(report
        .text
        .contains("D1 PAD VSS dio area=16p pj=20u w=2u l=8u"));

    // pin directions from the descriptor, inserted right after .SUBCKT
    let subckt = lines
        .iter()
        .position(|l| l.starts_with(".SUBCKT inv"))
        .expect("inv declaration");
    assert_eq!(lines[subckt + 1], "*.PININFO A:I Y:O VDD:B VSS:B");

    let esd = lines
        .iter()
        .position(|l| l.starts_with(".SUBCKT esd"))
        .expect("esd declaration");
    assert_eq!(lines[esd + 1], "*.PININFO PAD:B VSS:B");

    assert_eq!(report.stats.pininfo_inserted, 2);
    assert_eq!(report.stats.wl_derived, 1);
    assert_eq!(report.stats.fw_derived, 2);
}

#[test]
fn descriptor_module_missing_from_netlist_is_harmless() {
    let modules = ModuleTable::parse("orphan:\n    A:\n      direction: in\n");
    let report = NetlistFixer::fix_text(
        ".SUBCKT other X Y\n.ENDS\n",
        Some(&modules),
        &FixOptions::default(),
    );
    assert!(!report.text.contains("*.PININFO"));
    assert_eq!(report.stats.pininfo_inserted, 0);
}

#[test]
fn refixing_replaces_the_pininfo_line() {
    let modules = ModuleTable::parse("inv:\n    A:\n      direction: in\n    Y:\n      direction: out\n");
    let options = FixOptions::default();
    let first = NetlistFixer::fix_text(".SUBCKT inv A Y\n.ENDS\n", Some(&modules), &options);
    let second = NetlistFixer::fix_text(&first.text, Some(&modules), &options);
    assert_eq!(
        second
            .text
            .lines()
            .filter(|l| l.starts_with("*.PININFO"))
            .count(),
        1
    );
    assert_eq!(second.stats.pininfo_inserted, 0);
    assert_eq!(second.stats.pininfo_replaced, 1);
}

#[test]
fn sections_are_not_reinserted_on_a_second_run() {
    let first = NetlistFixer::fix_text("M1 d g s b nch\n", None, &FixOptions::default());
    assert_eq!(first.stats.sections_inserted, 8);
    let second = NetlistFixer::fix_text(&first.text, None, &FixOptions::default());
    assert_eq!(second.stats.sections_inserted, 0);
}

#[test]
fn fixes_crlf_input_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dos.cdl");
    std::fs::write(&path, "M1 d g s b nch W=2u L=180n\r\n\r\n").expect("write input");

    let report =
        NetlistFixer::fix_file(&path, None, &FixOptions::default()).expect("fix succeeds");
    assert!(report.text.contains("M1 d g s b nch w=2u l=180n fw=2u"));
    assert_eq!(report.stats.lines_in, 1);
}

#[test]
fn missing_descriptor_file_fails_the_run() {
    let err = NetlistFixer::fix_file(
        &fixture_path("sample.cdl"),
        Some(&fixture_path("no_such.soc_mod")),
        &FixOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, cdlfix::FixError::Io(_)));
}
