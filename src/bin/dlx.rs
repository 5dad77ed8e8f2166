//! Solve an exact-cover instance read from a file.
//!
//! Usage: dlx <input_file> [-p] [-c] [-m] [-i]
//!
//!   -p  print every solution as the chosen row ids
//!   -c  only count solutions
//!   -m  print the matrix before solving
//!   -i  use the explicit-stack search instead of recursion
//!
//! Set `RUST_LOG=debug` for build and search statistics.

use std::env;
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process;

use dlx::{Instance, SearchConfig, Strategy};

#[derive(Debug, Default)]
struct Options {
    path: Option<String>,
    print_solutions: bool,
    count_only: bool,
    print_matrix: bool,
    strategy: Strategy,
}

fn parse_args(args: impl Iterator<Item = String>) -> Options {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "-p" => options.print_solutions = true,
            "-c" => options.count_only = true,
            "-m" => options.print_matrix = true,
            "-i" => options.strategy = Strategy::Iterative,
            _ => options.path = Some(arg),
        }
    }
    options
}

fn try_main(path: &str, options: &Options) -> Result<(), Box<dyn Error>> {
    let instance = Instance::open(path)?;
    let mut dlx = instance.build()?;
    let config = SearchConfig::default().with_strategy(options.strategy);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if options.print_matrix {
        write!(out, "{}", dlx)?;
    }

    let report = if options.count_only {
        dlx.count_with(&config)
    } else {
        writeln!(out, "Finding all solutions...")?;
        let mut write_error = None;
        let report = dlx.search(&config, |rows| {
            if !options.print_solutions || write_error.is_some() {
                return;
            }
            let line: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
            if let Err(e) = writeln!(out, "{}", line.join(" ")) {
                write_error = Some(e);
            }
        });
        if let Some(e) = write_error {
            return Err(e.into());
        }
        report
    };
    log::info!(
        "explored {} search nodes, deepest solution path {}",
        report.nodes,
        report.max_depth
    );

    writeln!(out, "Total number of solutions found: {}", report.solutions)?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "dlx".to_string());
    let options = parse_args(args);

    let Some(path) = options.path.as_deref() else {
        eprintln!("Usage: {} <input_file> [-p] [-c] [-m] [-i]", program);
        process::exit(1);
    };

    if let Err(e) = try_main(path, &options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
