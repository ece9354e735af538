use dsa_portfolio::stations::{INTERCHANGES, LRT1, LRT2, MRT3};
use dsa_portfolio::{build_metro_graph, manila_metro};

#[test]
fn every_line_hop_is_bidirectional_matrix() {
    let graph = build_metro_graph(&manila_metro());
    for line in [LRT1, LRT2, MRT3] {
        for hop in line.windows(2) {
            assert!(
                graph.neighbors(hop[0]).unwrap().iter().any(|n| n == hop[1]),
                "{} -> {} missing",
                hop[0],
                hop[1]
            );
            assert!(
                graph.neighbors(hop[1]).unwrap().iter().any(|n| n == hop[0]),
                "{} -> {} missing",
                hop[1],
                hop[0]
            );
        }
    }
}

#[test]
fn interchanges_link_both_ways_matrix() {
    let graph = build_metro_graph(&manila_metro());
    for (a, b) in INTERCHANGES {
        assert!(graph.neighbors(a).unwrap().iter().any(|n| n == b));
        assert!(graph.neighbors(b).unwrap().iter().any(|n| n == a));
    }
}

#[test]
fn shared_cubao_vertex_joins_two_lines_matrix() {
    let graph = build_metro_graph(&manila_metro());
    // One vertex, neighbors from both LRT-2 and MRT-3.
    let neighbors = graph.neighbors("Araneta Center-Cubao").unwrap();
    for expected in ["Betty Go-Belmonte", "Anonas", "GMA Kamuning", "Santolan-Annapolis"] {
        assert!(
            neighbors.iter().any(|n| n == expected),
            "Cubao should touch {expected}"
        );
    }
}

#[test]
fn cross_line_route_exists_matrix() {
    let graph = build_metro_graph(&manila_metro());
    // LRT-1 to MRT-3 by way of an interchange.
    let route = graph.bfs("Monumento", "Ortigas").unwrap();
    assert_eq!(route.first().map(String::as_str), Some("Monumento"));
    assert_eq!(route.last().map(String::as_str), Some("Ortigas"));
    for hop in route.windows(2) {
        assert!(
            graph.neighbors(&hop[0]).unwrap().contains(&hop[1]),
            "{} -> {} is not an edge",
            hop[0],
            hop[1]
        );
    }
}

#[test]
fn unknown_station_reports_no_route_matrix() {
    let graph = build_metro_graph(&manila_metro());
    assert!(graph.bfs("Monumento", "Narnia").is_err());
}

#[test]
fn custom_dataset_is_injectable_matrix() {
    use dsa_portfolio::MetroDataset;

    const TOY_LINE: &[&str] = &["One", "Two", "Three"];
    let dataset = MetroDataset {
        lines: &[TOY_LINE],
        interchanges: &[],
    };
    let graph = build_metro_graph(&dataset);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(
        graph.bfs("One", "Three").unwrap(),
        ["One", "Two", "Three"]
    );
}
