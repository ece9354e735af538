//! Static Manila metro dataset and the graph built from it.
//!
//! The route-finder page works over three rail lines. Stations become
//! vertices, consecutive stations on a line become a bidirectional edge
//! pair, and each interchange pair gets its own bidirectional link. The
//! graph is built on demand from an explicit dataset parameter, so callers
//! that want a different network (tests do) pass their own.

use dsa_collections::Graph;

pub const LRT1: &[&str] = &[
    "Baclaran",
    "EDSA",
    "Libertad",
    "Gil Puyat",
    "Vito Cruz",
    "Quirino",
    "Pedro Gil",
    "UN Avenue",
    "Central Terminal",
    "Carriedo",
    "Doroteo Jose",
    "Bambang",
    "Tayuman",
    "Blumentritt",
    "Abad Santos",
    "R. Papa",
    "5th Avenue",
    "Monumento",
    "Balintawak",
    "Roosevelt",
];

pub const LRT2: &[&str] = &[
    "Recto",
    "Legarda",
    "Pureza",
    "V. Mapa",
    "J. Ruiz",
    "Gilmore",
    "Betty Go-Belmonte",
    "Araneta Center-Cubao",
    "Anonas",
    "Katipunan",
    "Santolan",
];

pub const MRT3: &[&str] = &[
    "North Avenue",
    "Quezon Avenue",
    "GMA Kamuning",
    "Araneta Center-Cubao",
    "Santolan-Annapolis",
    "Ortigas",
    "Shaw Boulevard",
    "Boni",
    "Guadalupe",
    "Buendia",
    "Ayala",
    "Magallanes",
    "Taft Avenue",
];

/// Walkway links between stations with different names. Araneta
/// Center-Cubao sits on both LRT-2 and MRT-3 under one label, so that
/// interchange is a shared vertex rather than a pair here.
pub const INTERCHANGES: &[(&str, &str)] = &[
    ("Doroteo Jose", "Recto"),
    ("EDSA", "Taft Avenue"),
    ("Roosevelt", "North Avenue"),
];

/// A rail network: ordered station lists per line plus interchange pairs.
#[derive(Debug, Clone, Copy)]
pub struct MetroDataset {
    pub lines: &'static [&'static [&'static str]],
    pub interchanges: &'static [(&'static str, &'static str)],
}

/// The dataset the portfolio site ships with.
pub fn manila_metro() -> MetroDataset {
    MetroDataset {
        lines: &[LRT1, LRT2, MRT3],
        interchanges: INTERCHANGES,
    }
}

/// Build the station graph from a dataset.
pub fn build_metro_graph(dataset: &MetroDataset) -> Graph {
    let mut graph = Graph::new();
    for line in dataset.lines {
        for station in *line {
            // A station on two lines triggers the duplicate-vertex
            // advisory on its second line; the shared vertex is the point.
            let _ = graph.add_vertex(*station);
        }
    }
    for line in dataset.lines {
        for hop in line.windows(2) {
            let _ = graph.add_edge(hop[0], hop[1]);
            let _ = graph.add_edge(hop[1], hop[0]);
        }
    }
    for (a, b) in dataset.interchanges {
        let _ = graph.add_edge(a, b);
        let _ = graph.add_edge(b, a);
    }
    graph
}
