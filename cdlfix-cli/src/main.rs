//! Cdlfix CLI - CDL netlist normalization from the command line.

use clap::Parser;
use cdlfix::{FixOptions, ModuleTable, NetlistFixer};
use std::io::Read;
use std::path::PathBuf;
use std::process;
use std::{fs, io};

#[derive(Parser)]
#[command(name = "cdlfix")]
#[command(about = "Fix CDL netlists for layout-tool import", long_about = None)]
#[command(version)]
struct Cli {
    /// Input netlist file (defaults to standard input)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (defaults to standard output)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Disable insertion of missing declaration sections
    #[arg(long = "no-param")]
    no_param: bool,

    /// Disable attribute-key case conversion
    #[arg(long = "no-case-conversion")]
    no_case_conversion: bool,

    /// Disable geometric parameter derivation
    #[arg(long = "no-calc-data")]
    no_calc_data: bool,

    /// Module/port descriptor used to build *.PININFO lines
    #[arg(short = 'm', long = "soc-module", value_name = "FILE")]
    soc_module: Option<PathBuf>,

    /// Print run statistics as JSON on standard error
    #[arg(long)]
    stats: bool,

    /// Enable debug logging on standard error
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let options = FixOptions {
        insert_sections: !cli.no_param,
        normalize_case: !cli.no_case_conversion,
        derive_geometry: !cli.no_calc_data,
    };

    let text = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: failed to open {}: {}", path.display(), e);
                return 1;
            }
        },
        None => {
            let mut text = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut text) {
                eprintln!("Error: failed to read standard input: {}", e);
                return 1;
            }
            text
        }
    };

    let modules = match &cli.soc_module {
        Some(path) => match ModuleTable::parse_file(path) {
            Ok(table) => Some(table),
            Err(e) => {
                eprintln!("Error: failed to open {}: {}", path.display(), e);
                return 1;
            }
        },
        None => None,
    };

    let report = NetlistFixer::fix_text(&text, modules.as_ref(), &options);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &report.text) {
                eprintln!("Error: failed to write {}: {}", path.display(), e);
                return 1;
            }
        }
        None => print!("{}", report.text),
    }

    if cli.stats {
        eprintln!("{}", serde_json::to_string_pretty(&report.stats).unwrap());
    }

    0
}
