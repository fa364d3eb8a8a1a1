use super::*;

#[test]
fn test_add_island_and_lookup() {
    let mut sea = Sea::new();
    let id = sea.add_island("Hawaii", 1_400_000);

    assert_eq!(sea.len(), 1);
    assert_eq!(sea.island_id("Hawaii"), Some(id));
    assert_eq!(sea.island(id).name(), "Hawaii");
    assert_eq!(sea.island(id).population(), 1_400_000);
    assert!(sea.get("Tahiti").is_none());
}

#[test]
fn test_re_adding_a_name_resets_the_slot() {
    let mut sea = Sea::new();
    let hawaii = sea.add_island("Hawaii", 100);
    sea.add_island("Tahiti", 200);
    sea.add_route("Hawaii", "Tahiti", 5.9).unwrap();
    sea.island_mut(hawaii).add_resource("Food", 50);

    let again = sea.add_island("Hawaii", 300);

    assert_eq!(again, hawaii);
    assert_eq!(sea.len(), 2);
    assert_eq!(sea.island(hawaii).population(), 300);
    assert!(sea.routes_from(hawaii).is_empty());
    assert!(sea.island(hawaii).resource("Food").is_none());
}

#[test]
fn test_add_route_unknown_endpoint_is_a_noop() {
    let mut sea = Sea::new();
    let hawaii = sea.add_island("Hawaii", 100);

    sea.add_route("Hawaii", "Atlantis", 1.0).unwrap();
    sea.add_route("Atlantis", "Hawaii", 1.0).unwrap();

    assert!(sea.routes_from(hawaii).is_empty());
}

#[test]
fn test_add_route_rejects_negative_and_nan_travel_time() {
    let mut sea = Sea::new();
    sea.add_island("Hawaii", 100);
    sea.add_island("Tahiti", 200);

    assert!(matches!(
        sea.add_route("Hawaii", "Tahiti", -1.0),
        Err(AtollError::InvalidRoute { .. })
    ));
    assert!(matches!(
        sea.add_route("Hawaii", "Tahiti", f64::NAN),
        Err(AtollError::InvalidRoute { .. })
    ));
}

#[test]
fn test_add_route_is_directed_and_last_write_wins() {
    let mut sea = Sea::new();
    let hawaii = sea.add_island("Hawaii", 100);
    let tahiti = sea.add_island("Tahiti", 200);

    sea.add_route("Hawaii", "Tahiti", 5.9).unwrap();
    assert_eq!(sea.route_time(hawaii, tahiti), Some(5.9));
    // No implicit reverse route
    assert_eq!(sea.route_time(tahiti, hawaii), None);

    sea.add_route("Hawaii", "Tahiti", 7.5).unwrap();
    assert_eq!(sea.routes_from(hawaii).len(), 1);
    assert_eq!(sea.route_time(hawaii, tahiti), Some(7.5));
}

#[test]
fn test_resources_accumulate_and_debit_saturates() {
    let mut sea = Sea::new();
    let id = sea.add_island("Hawaii", 100);

    sea.island_mut(id).add_resource("Food", 30);
    sea.island_mut(id).add_resource("Food", 20);
    assert_eq!(sea.island(id).resource("Food"), Some(50));

    sea.island_mut(id).debit_resource("Food", 80);
    assert_eq!(sea.island(id).resource("Food"), Some(0));

    // Debiting an unknown kind does not create it
    sea.island_mut(id).debit_resource("Water", 10);
    assert!(sea.island(id).resource("Water").is_none());
}
