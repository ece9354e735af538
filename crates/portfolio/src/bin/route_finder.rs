//! `route-finder`: shortest metro route between two stations.
//!
//! Usage:
//!   route-finder
//!
//! Prompts for a starting station and a destination on stdin, then prints
//! the breadth-first route over the bundled Manila metro dataset.

use std::io::{self, BufRead, Write};

use dsa_portfolio::{build_metro_graph, manila_metro};

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn main() {
    let graph = build_metro_graph(&manila_metro());

    let (start, end) = match (
        prompt("Enter a starting station: "),
        prompt("Enter a destination: "),
    ) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match graph.bfs(&start, &end) {
        Ok(route) => {
            println!("Fastest route:");
            println!("{}", route.join("-->"));
        }
        Err(_) => println!("No route found"),
    }
}
