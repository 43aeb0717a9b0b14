//! findouts: list every checkout for a range of starting points.
//!
//! Uses the built-in double-out board unless `--table` names a delimited-text
//! export. Prints the permutation estimate, the checkouts and the search time.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use checkout::{estimate_last, Points, ResultSet, Search, TransitionTable, STANDARD};
use checkout_toolkit::{load, PrintExt};

struct Args {
    table: Option<PathBuf>,
    from: Points,
    to: Points,
    throws: usize,
    estimate: Points,
    output: Option<PathBuf>,
    quiet: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            table: None,
            from: 2,
            to: 10,
            throws: checkout::DEFAULT_THROW_BUDGET,
            estimate: checkout::STANDARD_MAX_POINTS,
            output: None,
            quiet: false,
        }
    }
}

fn main() {
    let args = parse_args();

    let loaded;
    let table: &TransitionTable = match &args.table {
        Some(path) => {
            loaded = load::from_path(path).unwrap_or_else(|e| {
                eprintln!("Failed to load {}: {e}", path.display());
                process::exit(1);
            });
            &loaded
        }
        None => &*STANDARD,
    };

    println!("=== findouts ===");
    println!(
        "Table: {} rows x {} throws | Points: {}..={} | Throws: {}",
        table.len(),
        table.throw_count(),
        args.from,
        args.to,
        args.throws
    );

    match estimate_last(args.estimate) {
        Ok(d) => println!(
            "Estimated permutations to check out {} points: {d}",
            args.estimate
        ),
        Err(e) => eprintln!("Skipping estimate: {e}"),
    }

    let search = Search::builder().budget(args.throws).build(table);
    let start = Instant::now();
    let results = ResultSet::from_search(&search, args.from..=args.to).unwrap_or_else(|e| {
        eprintln!("Search failed: {e}");
        process::exit(1);
    });
    let elapsed = start.elapsed();

    if !args.quiet {
        println!();
        results.print_table();
    }
    println!(
        "Found {} checkouts in {:.4} seconds",
        results.total(),
        elapsed.as_secs_f64()
    );

    if let Some(path) = &args.output {
        if let Err(e) = results.save_csv(path) {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        }
        println!("Wrote {}", path.display());
    }
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let mut args = Args::default();

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--table" => args.table = Some(PathBuf::from(value(&argv, &mut i))),
            "--from" => args.from = number(&argv, &mut i),
            "--to" => args.to = number(&argv, &mut i),
            "--points" => {
                let p = number(&argv, &mut i);
                args.from = p;
                args.to = p;
            }
            "--throws" => args.throws = number(&argv, &mut i),
            "--estimate" => args.estimate = number(&argv, &mut i),
            "--output" | "-o" => args.output = Some(PathBuf::from(value(&argv, &mut i))),
            "--quiet" | "-q" => args.quiet = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if args.from > args.to {
        eprintln!("--from {} is above --to {}", args.from, args.to);
        process::exit(1);
    }
    args
}

fn value<'a>(argv: &'a [String], i: &mut usize) -> &'a str {
    let flag = &argv[*i];
    *i += 1;
    argv.get(*i).map(String::as_str).unwrap_or_else(|| {
        eprintln!("Missing value for {flag}");
        process::exit(1);
    })
}

fn number<T>(argv: &[String], i: &mut usize) -> T
where
    T: FromStr,
{
    let flag = argv[*i].clone();
    let text = value(argv, i);
    text.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {flag}: {text}");
        process::exit(1);
    })
}

fn print_usage() {
    println!("Usage: findouts [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --table PATH     Transition table as CSV/TSV (default: built-in double-out board)");
    println!("  --from P         First starting point value (default: 2)");
    println!("  --to P           Last starting point value (default: 10)");
    println!("  --points P       Search a single starting point value");
    println!("  --throws N       Maximum throws per checkout (default: 3)");
    println!("  --estimate N     Point value for the permutation estimate (default: 501)");
    println!("  -o, --output F   Write the checkouts as CSV");
    println!("  -q, --quiet      Do not print the checkout table");
    println!("  -h, --help       Show this help");
}
