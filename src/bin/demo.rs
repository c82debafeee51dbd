//! Builds two small digraphs and prints shortest-path trees for each engine.
//!
//! Run with `RUST_LOG=debug` to see the engines' relaxation logging.

use sssp_core::{BellmanFordSP, DijkstraSP, EdgeWeightedDigraph, ShortestPaths};

fn tiny_ewd() -> EdgeWeightedDigraph<f64> {
    let mut g = EdgeWeightedDigraph::new(8);
    for &(v, w, weight) in &[
        (4, 5, 0.35),
        (5, 4, 0.35),
        (4, 7, 0.37),
        (5, 7, 0.28),
        (7, 5, 0.28),
        (5, 1, 0.32),
        (0, 4, 0.38),
        (0, 2, 0.26),
        (7, 3, 0.39),
        (1, 3, 0.29),
        (2, 7, 0.34),
        (6, 2, 0.40),
        (3, 6, 0.52),
        (6, 0, 0.58),
        (6, 4, 0.93),
    ] {
        g.add(v, w, weight).expect("valid edge");
    }
    g
}

fn tiny_ewdnc() -> EdgeWeightedDigraph<f64> {
    let mut g = tiny_ewd();
    // overwrite nothing; add the edge that closes a negative cycle 4->5->4
    g.add(5, 4, -0.66).expect("valid edge");
    g
}

fn print_tree(engine: &impl ShortestPaths<f64>, graph: &EdgeWeightedDigraph<f64>) {
    let s = engine.source();
    for v in 0..graph.vertex_count() {
        match engine.path_to(v) {
            Ok(Some(path)) => {
                print!("{} to {} ({:5.2}) ", s, v, engine.dist_to(v).unwrap_or(f64::NAN));
                for e in path {
                    print!(" {}", e);
                }
                println!();
            }
            Ok(None) => println!("{} to {}  no path", s, v),
            Err(err) => println!("{} to {}  {}", s, v, err),
        }
    }
}

fn main() {
    env_logger::init();

    let g = tiny_ewd();
    println!("Dijkstra from 0:");
    match DijkstraSP::new(&g, 0) {
        Ok(sp) => print_tree(&sp, &g),
        Err(err) => println!("  construction failed: {}", err),
    }

    let gnc = tiny_ewdnc();
    println!("\nBellman-Ford from 0 on a digraph with a negative cycle:");
    match BellmanFordSP::new(&gnc, 0) {
        Ok(sp) => {
            if let Some(cycle) = sp.negative_cycle() {
                println!("  negative cycle:");
                for e in cycle {
                    println!("    {}", e);
                }
            } else {
                print_tree(&sp, &gnc);
            }
        }
        Err(err) => println!("  construction failed: {}", err),
    }
}
