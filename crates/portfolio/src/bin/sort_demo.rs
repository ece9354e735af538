//! `sort-demo`: run an instrumented sort and print its trace.
//!
//! Usage:
//!   sort-demo <bubble|selection|insertion|merge|quick> [size]
//!
//! Size defaults to 10 and must be within [5, 50].

use dsa_portfolio::run_sort;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let Some(algorithm) = args.get(1) else {
        eprintln!("First argument must be an algorithm key (bubble, selection, insertion, merge, quick).");
        std::process::exit(1);
    };
    let size = match args.get(2) {
        Some(raw) => match raw.parse() {
            Ok(size) => size,
            Err(_) => {
                eprintln!("Size must be an integer.");
                std::process::exit(1);
            }
        },
        None => 10,
    };

    match run_sort(algorithm, size) {
        Ok(report) => {
            println!("Original: {:?}", report.original);
            println!("Sorted:   {:?}", report.sorted);
            println!();
            for line in &report.steps {
                println!("{line}");
            }
            println!();
            println!(
                "{} comparisons, {} swaps, {} shifts over {} steps",
                report.comparisons, report.swaps, report.shifts, report.total_steps
            );
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
