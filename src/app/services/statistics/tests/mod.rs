//! Tests for bay plan statistics and container queries


use crate::app::models::{Container, StowagePosition};

/// Create a container bound for `destination` at a 7-digit cell code
pub fn create_test_container(number: &str, destination: &str, position: &str) -> Container {
    let mut container = Container::new(number, "22G0");
    container.port_destination = destination.to_string();
    container.position = StowagePosition::parse(position);
    container
}

/// Create a container with a weight
pub fn create_weighted_container(number: &str, weight: Option<i64>) -> Container {
    let mut container = create_test_container(number, "USLAX", "");
    container.weight = weight;
    container
}

/// Mixed fleet: two dry, one reefer, one damaged reefer, one damaged dry
pub fn create_mixed_fleet() -> Vec<Container> {
    let dry_a = create_test_container("ABCU1000001", "USLAX", "0130204");
    let dry_b = create_test_container("ABCU1000002", "NLRTM", "0130206");

    let mut reefer = create_test_container("MSCU2000001", "USLAX", "0250082");
    reefer.set_temperature(-18.0);

    let mut damaged_reefer = create_test_container("MSCU2000002", "", "0250084");
    damaged_reefer.set_temperature(4.0);
    damaged_reefer.mark_damaged();

    let mut damaged = create_test_container("TGHU3000001", "CNSHA", "0070402");
    damaged.mark_damaged();

    vec![dry_a, dry_b, reefer, damaged_reefer, damaged]
}
