mod common;

use common::{approx, digraph, tiny_ewdag};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sssp_core::graph::generators::random_dag;
use sssp_core::{AcyclicLP, AcyclicSP, Error, ShortestPaths};

#[test]
fn longest_paths_on_tiny_ewdag() {
    let g = tiny_ewdag();
    let lp = AcyclicLP::new(&g, 5).unwrap();

    let expected = [2.44, 0.32, 2.77, 0.61, 2.06, 0.00, 1.13, 2.43];
    for (v, &d) in expected.iter().enumerate() {
        assert!(
            approx(lp.dist_to(v).unwrap(), d),
            "dist_to({}) = {}, expected {}",
            v,
            lp.dist_to(v).unwrap(),
            d
        );
    }

    let hops: Vec<_> = lp
        .path_to(0)
        .unwrap()
        .unwrap()
        .iter()
        .map(|e| (e.from(), e.to()))
        .collect();
    assert_eq!(hops, vec![(5, 1), (1, 3), (3, 6), (6, 4), (4, 0)]);
}

#[test]
fn shortest_paths_on_tiny_ewdag() {
    let g = tiny_ewdag();
    let sp = AcyclicSP::new(&g, 5).unwrap();

    let expected = [0.73, 0.32, 0.62, 0.61, 0.35, 0.00, 1.13, 0.28];
    for (v, &d) in expected.iter().enumerate() {
        assert!(
            approx(sp.dist_to(v).unwrap(), d),
            "dist_to({}) = {}, expected {}",
            v,
            sp.dist_to(v).unwrap(),
            d
        );
    }
}

#[test]
fn any_cycle_fails_construction() {
    let g = digraph(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
    assert_eq!(AcyclicSP::new(&g, 0).err(), Some(Error::NotADag));
    assert_eq!(AcyclicLP::new(&g, 0).err(), Some(Error::NotADag));

    let with_self_loop = digraph(2, &[(0, 1, 1.0), (1, 1, 1.0)]);
    assert_eq!(AcyclicSP::new(&with_self_loop, 0).err(), Some(Error::NotADag));
}

#[test]
fn negative_weights_are_fine_on_a_dag() {
    let g = digraph(4, &[(0, 1, -2.0), (1, 2, -3.0), (0, 2, 1.0), (2, 3, 0.5)]);
    let sp = AcyclicSP::new(&g, 0).unwrap();
    assert!(approx(sp.dist_to(2).unwrap(), -5.0));
    assert!(approx(sp.dist_to(3).unwrap(), -4.5));
}

#[test]
fn longest_dominates_shortest_for_reachable_vertices() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..10 {
        let g = random_dag::<f64, _>(40, 160, -5.0..5.0, &mut rng).unwrap();
        let sp = AcyclicSP::new(&g, 0).unwrap();
        let lp = AcyclicLP::new(&g, 0).unwrap();
        for v in 0..g.vertex_count() {
            if sp.has_path_to(v).unwrap() {
                assert!(lp.dist_to(v).unwrap() >= sp.dist_to(v).unwrap() - common::EPS);
            }
        }
    }
}

#[test]
fn unreachable_vertices_use_the_engine_sentinel() {
    let g = digraph(3, &[(0, 1, 1.0)]);
    let sp = AcyclicSP::new(&g, 0).unwrap();
    let lp = AcyclicLP::new(&g, 0).unwrap();

    assert!(!sp.has_path_to(2).unwrap());
    assert!(!lp.has_path_to(2).unwrap());
    assert_eq!(sp.dist_to(2).unwrap(), f64::INFINITY);
    assert_eq!(lp.dist_to(2).unwrap(), f64::NEG_INFINITY);
    assert!(sp.path_to(2).unwrap().is_none());
    assert!(lp.path_to(2).unwrap().is_none());
}

#[test]
fn source_state_and_validation() {
    let g = tiny_ewdag();
    let lp = AcyclicLP::new(&g, 5).unwrap();
    assert_eq!(lp.source(), 5);
    assert_eq!(lp.dist_to(5).unwrap(), 0.0);
    assert_eq!(lp.path_to(5).unwrap().unwrap().len(), 0);
    assert_eq!(lp.dist_to(8), Err(Error::InvalidVertex(8)));
    assert!(AcyclicSP::new(&g, 99).is_err());
}
