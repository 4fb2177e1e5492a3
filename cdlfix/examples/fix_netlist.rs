//! Simple fix example: normalize a netlist file and print the result.

use cdlfix::prelude::*;
use std::path::Path;

fn main() -> Result<(), FixError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/sample.cdl".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example fix_netlist [path/to/netlist.cdl]");
        std::process::exit(1);
    }

    let report = NetlistFixer::fix_file(path, None, &FixOptions::default())?;

    print!("{}", report.text);
    eprintln!();
    eprintln!("lines in:           {}", report.stats.lines_in);
    eprintln!("lines out:          {}", report.stats.lines_out);
    eprintln!("sections inserted:  {}", report.stats.sections_inserted);
    eprintln!("fw derived:         {}", report.stats.fw_derived);
    eprintln!("w/l recovered:      {}", report.stats.wl_derived);

    Ok(())
}
