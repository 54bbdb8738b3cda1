//! Tests for container reconciliation

pub mod deduplication_tests;

use crate::app::models::{Container, StowagePosition};

/// Create a container at the given cell code
pub fn create_test_container(number: &str, position: &str) -> Container {
    let mut container = Container::new(number, "22G0");
    container.position = StowagePosition::parse(position);
    container
}

/// Container numbers in list order
pub fn numbers(containers: &[Container]) -> Vec<&str> {
    containers
        .iter()
        .map(|c| c.container_number.as_str())
        .collect()
}
