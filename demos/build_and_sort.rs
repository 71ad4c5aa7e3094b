//! End-to-end tour: build a graph, walk it, find the cycle, break it,
//! and stream a dependency-safe order.

use quiver::{has_cycle, topological_sort, Digraph};

fn main() {
    let labels = ["A", "B", "C", "D", "E", "F", "G", "H"];

    let mut graph = Digraph::new();
    let v: Vec<_> = labels.iter().map(|_| graph.add_vertex()).collect();

    let edges = [
        (0, 1), // A -> B
        (0, 2), // A -> C
        (0, 4), // A -> E
        (1, 3), // B -> D
        (1, 4), // B -> E
        (2, 3), // C -> D
        (3, 4), // D -> E
        (3, 5), // D -> F
        (5, 3), // F -> D
        (5, 7), // F -> H
        (6, 7), // G -> H
    ];
    for (s, t) in edges {
        graph.add_edge(v[s], v[t]);
    }

    println!("{} vertices, {} edges", graph.num_vertices(), graph.num_edges());
    for e in graph.edges() {
        println!("  {} -> {}", labels[e.source().index()], labels[e.target().index()]);
    }

    println!("cycle reachable from {}: {}", labels[0], has_cycle(&graph));

    // D -> F -> D is the only cycle; drop one side and order the rest.
    graph.remove_edge(v[3], v[5]);
    println!("after removing D -> F:    {}", has_cycle(&graph));

    print!("successors-first order:");
    topological_sort(&graph, |u| print!(" {}", labels[u.index()]));
    println!();
}
