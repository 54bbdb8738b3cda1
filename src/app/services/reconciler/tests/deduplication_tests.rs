//! Tests for identity and position deduplication

use super::*;
use crate::app::models::Conflict;
use crate::app::services::reconciler::reconcile_containers;

#[test]
fn test_unique_containers_are_kept_in_order() {
    let containers = vec![
        create_test_container("C", "0130204"),
        create_test_container("A", "0130206"),
        create_test_container("B", "0130208"),
    ];

    let result = reconcile_containers(containers);

    assert_eq!(numbers(&result.containers), vec!["C", "A", "B"]);
    assert!(result.is_clean());
}

#[test]
fn test_duplicate_identity_keeps_first() {
    let mut first = create_test_container("ABCU1234567", "0130204");
    first.weight = Some(15000);
    let mut second = create_test_container("ABCU1234567", "0250082");
    second.weight = Some(99);

    let result = reconcile_containers(vec![first, second]);

    assert_eq!(result.containers.len(), 1);
    assert_eq!(result.containers[0].weight, Some(15000));
    assert_eq!(
        result.conflicts,
        vec![Conflict::DuplicateIdentity {
            container_number: "ABCU1234567".to_string(),
            index: 1,
        }]
    );
}

#[test]
fn test_duplicate_position_keeps_first() {
    let containers = vec![
        create_test_container("A", "0130204"),
        create_test_container("B", "0130204"),
    ];

    let result = reconcile_containers(containers);

    assert_eq!(numbers(&result.containers), vec!["A"]);
    assert_eq!(
        result.conflicts,
        vec![Conflict::DuplicatePosition {
            container_number: "B".to_string(),
            occupied_by: "A".to_string(),
            position: "0130204".to_string(),
            index: 1,
        }]
    );
}

#[test]
fn test_six_and_seven_digit_codes_collide() {
    let containers = vec![
        create_test_container("A", "0130204"),
        create_test_container("B", "130204"),
    ];

    let result = reconcile_containers(containers);

    assert_eq!(result.position_conflicts(), 1);
}

#[test]
fn test_unspecified_positions_never_conflict() {
    let containers = vec![
        create_test_container("A", ""),
        create_test_container("B", ""),
        create_test_container("C", "12A0204"),
        create_test_container("D", "12A0204"),
    ];

    let result = reconcile_containers(containers);

    assert_eq!(numbers(&result.containers), vec!["A", "B", "C", "D"]);
    assert!(result.is_clean());
}

#[test]
fn test_dropped_container_does_not_claim_its_cell() {
    // B is dropped as a duplicate identity, so its cell stays free for C
    let containers = vec![
        create_test_container("B", "0130204"),
        create_test_container("B", "0130206"),
        create_test_container("C", "0130206"),
    ];

    let result = reconcile_containers(containers);

    assert_eq!(numbers(&result.containers), vec!["B", "C"]);
    assert_eq!(result.identity_conflicts(), 1);
    assert_eq!(result.position_conflicts(), 0);
}

#[test]
fn test_reconciliation_is_idempotent() {
    let containers = vec![
        create_test_container("A", "0130204"),
        create_test_container("A", "0130206"),
        create_test_container("B", "0130204"),
        create_test_container("C", "0130208"),
    ];

    let once = reconcile_containers(containers);
    let twice = reconcile_containers(once.containers.clone());

    assert_eq!(twice.containers, once.containers);
    assert!(twice.is_clean());
}

#[test]
fn test_empty_container_numbers_are_identities() {
    let containers = vec![create_test_container("", ""), create_test_container("", "")];

    let result = reconcile_containers(containers);

    assert_eq!(result.containers.len(), 1);
    assert_eq!(result.identity_conflicts(), 1);
}

#[test]
fn test_placeholder_cells_do_not_collide() {
    let containers = vec![
        create_test_container("A", "0000000"),
        create_test_container("B", "0000000"),
        create_test_container("C", "0130200"),
        create_test_container("D", "0130200"),
    ];

    let result = reconcile_containers(containers);

    assert_eq!(numbers(&result.containers), vec!["A", "B", "C", "D"]);
    assert!(result.is_clean());
}

#[test]
fn test_centre_row_cells_still_collide() {
    let containers = vec![
        create_test_container("A", "0200082"),
        create_test_container("B", "0200082"),
    ];

    let result = reconcile_containers(containers);

    assert_eq!(numbers(&result.containers), vec!["A"]);
    assert_eq!(result.conflicts.len(), 1);
}
