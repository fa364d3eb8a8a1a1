use super::*;

fn names(sea: &Sea, path: &[IslandId]) -> Vec<String> {
    path.iter()
        .map(|&id| sea.island(id).name().to_string())
        .collect()
}

/// Three islands in a line: A -> B (5), B -> C (3)
fn line_sea() -> Sea {
    let mut sea = Sea::new();
    sea.add_island("A", 1);
    sea.add_island("B", 2);
    sea.add_island("C", 3);
    sea.add_route("A", "B", 5.0).unwrap();
    sea.add_route("B", "C", 3.0).unwrap();
    sea
}

#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        island: IslandId(0),
        travel_time: 1.0,
    };
    let entry2 = HeapEntry {
        island: IslandId(1),
        travel_time: 2.0,
    };
    let entry3 = HeapEntry {
        island: IslandId(2),
        travel_time: 1.0,
    };

    // Lower travel time compares as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal travel times with different islands
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Equal);
}

#[test]
fn test_path_along_a_line() {
    let sea = line_sea();
    let path = shortest_path(&sea, "A", "C");

    assert_eq!(names(&sea, &path), ["A", "B", "C"]);

    let result = shortest_path_result(&sea, "A", "C");
    assert!(result.found);
    assert_eq!(result.total_time, 8.0);
}

#[test]
fn test_start_equals_end_is_a_single_island() {
    let sea = line_sea();
    let path = shortest_path(&sea, "B", "B");
    assert_eq!(names(&sea, &path), ["B"]);

    let result = shortest_path_result(&sea, "B", "B");
    assert!(result.found);
    assert_eq!(result.total_time, 0.0);
}

#[test]
fn test_unknown_endpoints_yield_empty_path() {
    let sea = line_sea();
    assert!(shortest_path(&sea, "A", "Atlantis").is_empty());
    assert!(shortest_path(&sea, "Atlantis", "A").is_empty());
    assert!(shortest_path(&sea, "Atlantis", "Lemuria").is_empty());
}

#[test]
fn test_unreachable_end_yields_empty_path() {
    let mut sea = line_sea();
    sea.add_island("D", 4);

    assert!(shortest_path(&sea, "A", "D").is_empty());
    // Routes are directed, so C cannot reach A either
    assert!(shortest_path(&sea, "C", "A").is_empty());

    let result = shortest_path_result(&sea, "A", "D");
    assert!(!result.found);
    assert!(result.islands.is_empty());
    assert_eq!(result.total_time, 0.0);
}

#[test]
fn test_picks_the_cheaper_of_two_routes() {
    let mut sea = Sea::new();
    sea.add_island("A", 1);
    sea.add_island("B", 1);
    sea.add_island("C", 1);
    sea.add_island("D", 1);
    sea.add_route("A", "B", 5.0).unwrap();
    sea.add_route("A", "C", 5.0).unwrap();
    sea.add_route("B", "D", 3.0).unwrap();
    sea.add_route("C", "D", 4.0).unwrap();

    let path = shortest_path(&sea, "A", "D");
    assert_eq!(names(&sea, &path), ["A", "B", "D"]);
    assert_eq!(shortest_path_result(&sea, "A", "D").total_time, 8.0);
}

#[test]
fn test_equal_cost_tie_keeps_first_predecessor() {
    let mut sea = Sea::new();
    sea.add_island("A", 1);
    sea.add_island("B", 1);
    sea.add_island("C", 1);
    sea.add_island("D", 1);
    // Two routes to D with the same total travel time (7). B settles before
    // C (3 < 4), so B becomes D's predecessor first; the strict less-than
    // comparison never replaces it with the equal-cost route through C.
    sea.add_route("A", "B", 3.0).unwrap();
    sea.add_route("A", "C", 4.0).unwrap();
    sea.add_route("B", "D", 4.0).unwrap();
    sea.add_route("C", "D", 3.0).unwrap();

    let path = shortest_path(&sea, "A", "D");
    assert_eq!(names(&sea, &path), ["A", "B", "D"]);
    assert_eq!(shortest_path_result(&sea, "A", "D").total_time, 7.0);
}

#[test]
fn test_indirect_route_beats_expensive_direct_route() {
    let mut sea = Sea::new();
    sea.add_island("A", 1);
    sea.add_island("B", 1);
    sea.add_island("C", 1);
    sea.add_route("A", "C", 3.0).unwrap();
    sea.add_route("A", "B", 1.0).unwrap();
    sea.add_route("B", "C", 1.0).unwrap();

    let path = shortest_path(&sea, "A", "C");
    assert_eq!(names(&sea, &path), ["A", "B", "C"]);
    assert_eq!(shortest_path_result(&sea, "A", "C").total_time, 2.0);
}
