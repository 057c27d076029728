use edit_distance::{align_general, distance_general, distance_string, distance_string_full};
use max_flow::Graph;

#[test]
fn edit_distance_public_api_agrees_with_alignment() {
    let (distance, lcs) = distance_string_full("abcde", "abfde");
    assert_eq!(distance, 1);
    assert_eq!(lcs, "abde");
    assert_eq!(distance_string("abcde", "abfde"), distance);
}

#[test]
fn general_alignment_round_trips_through_rolling_row_distance() {
    let a = "kitten";
    let b = "sitting";
    let av: Vec<char> = a.chars().collect();
    let bv: Vec<char> = b.chars().collect();

    let cost_change = |i: usize, j: usize| if av[i] == bv[j] { 0 } else { 1 };
    let alignment = align_general(av.len(), bv.len(), cost_change, |_| 1, |_| 1);
    let rolling = distance_general(av.len(), bv.len(), cost_change, |_| 1, |_| 1);

    assert_eq!(alignment.distance, rolling);
    assert!(alignment.is_consistent());
}

#[test]
fn identical_sequences_align_position_for_position() {
    let alignment = align_general(3, 3, |i, j| if i == j { 0 } else { 1 }, |_| 1, |_| 1);
    assert_eq!(alignment.distance, 0);
    assert_eq!(alignment.mat_a, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn max_flow_bipartite_example() {
    let mut g = Graph::new();
    let nodes: Vec<_> = (0..4).map(|_| g.add_node()).collect();
    g.set_tweights(nodes[0], 3, 0);
    g.set_tweights(nodes[1], 3, 0);
    g.set_tweights(nodes[2], 0, 2);
    g.set_tweights(nodes[3], 0, 3);
    g.add_edge(nodes[0], nodes[1], 2, 0);
    g.add_edge(nodes[0], nodes[2], 3, 0);
    g.add_edge(nodes[1], nodes[3], 2, 0);
    g.add_edge(nodes[2], nodes[3], 4, 0);
    g.run();

    assert_eq!(g.flow(), 5);
    assert_eq!(
        nodes.iter().map(|&n| g.is_source(n)).collect::<Vec<_>>(),
        vec![true, true, false, false]
    );
}
