//! Tests for the segment dispatcher and container state machine

use super::*;
use crate::app::models::ContainerStatus;
use crate::app::services::baplie_parser::stats::SegmentOrder;

#[test]
fn test_voyage_header() {
    let output = dispatch_all(&create_test_message(""));
    let voyage = &output.voyage;

    assert_eq!(voyage.vessel_name, "MSC AURORA");
    assert_eq!(voyage.voyage_number, "V123N");
    assert_eq!(voyage.port_origin, "ECGYE");
    assert_eq!(voyage.port_destination, "USLAX");
    assert_eq!(voyage.arrival_date, "20/03/2024 12:00");
    // UNB wins over the later DTM+137
    assert_eq!(voyage.transmission_date, "15/03/2024 14:30");
}

#[test]
fn test_first_document_date_sets_transmission() {
    let output = dispatch_all("DTM+137:202403151430:203'DTM+137:202401010000:203'");
    assert_eq!(output.voyage.transmission_date, "15/03/2024 14:30");
}

#[test]
fn test_unreadable_date_kept_raw() {
    let output = dispatch_all("DTM+133:NEXT WEEK'");
    assert_eq!(output.voyage.arrival_date, "NEXT WEEK");
}

#[test]
fn test_voyage_reference_only_without_transport_number() {
    let output = dispatch_all("RFF+VON:V999'");
    assert_eq!(output.voyage.voyage_number, "V999");

    let output = dispatch_all("TDT+20+V123N'RFF+VON:V999'");
    assert_eq!(output.voyage.voyage_number, "V123N");
}

#[test]
fn test_equipment_first_groups() {
    let output = dispatch_all(&create_test_message(EQUIPMENT_FIRST_CONTAINERS));

    assert_eq!(
        output.stats.segment_order,
        Some(SegmentOrder::EquipmentFirst)
    );
    assert_eq!(output.containers.len(), 2);

    let dry = &output.containers[0];
    assert_eq!(dry.container_number, "ABCU1234567");
    assert_eq!(dry.container_type, "22G0");
    assert_eq!((dry.bay(), dry.row(), dry.tier()), (13, 2, 4));
    assert_eq!(dry.port_origin, "ECGYE");
    assert_eq!(dry.port_destination, "USLAX");
    assert_eq!(dry.weight, Some(15000));
    assert_eq!(dry.cargo_type, "BANANAS");
    assert_eq!(dry.carrier.as_deref(), Some("MSC"));
    assert_eq!(dry.status, ContainerStatus::Ok);

    let reefer = &output.containers[1];
    assert_eq!(reefer.container_number, "MSCU7654321");
    assert_eq!((reefer.bay(), reefer.row(), reefer.tier()), (25, 0, 82));
    assert_eq!(reefer.port_destination, "NLRTM");
    assert_eq!(reefer.weight, Some(22000));
    assert_eq!(reefer.temperature, Some(-18.0));
    assert_eq!(reefer.status, ContainerStatus::Reefer);
    assert_eq!(reefer.cargo_type, "FROZEN FISH");
    assert_eq!(reefer.carrier, None);
}

#[test]
fn test_location_first_groups_match_equipment_first() {
    let equipment_first = dispatch_all(&create_test_message(EQUIPMENT_FIRST_CONTAINERS));
    let location_first = dispatch_all(&create_test_message(LOCATION_FIRST_CONTAINERS));

    assert_eq!(
        location_first.stats.segment_order,
        Some(SegmentOrder::LocationFirst)
    );
    assert_eq!(location_first.containers, equipment_first.containers);
    assert_eq!(location_first.voyage, equipment_first.voyage);
    assert_eq!(location_first.stats.orphaned_fields, 0);
}

#[test]
fn test_containers_keep_equipment_order() {
    let output = dispatch_all(
        "EQD+CN+CCCU0000003+22G0'EQD+CN+AAAU0000001+22G0'EQD+CN+BBBU0000002+22G0'",
    );
    let numbers: Vec<_> = output
        .containers
        .iter()
        .map(|c| c.container_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["CCCU0000003", "AAAU0000001", "BBBU0000002"]);
    assert_eq!(output.stats.containers_parsed, 3);
}

#[test]
fn test_fields_before_first_equipment_are_buffered() {
    let output = dispatch_all("MEA+WT++KGM:100'TMP+2+5:CEL'EQD+CN+ABCU1234567+22R1'");

    let container = &output.containers[0];
    assert_eq!(container.weight, Some(100));
    assert_eq!(container.temperature, Some(5.0));
}

#[test]
fn test_damaged_after_temperature_wins() {
    let output = dispatch_all("EQD+CN+ABCU1234567+45R1'TMP+2+4.0:CEL'FTX+AAI++DAMAGED'");

    let container = &output.containers[0];
    assert_eq!(container.status, ContainerStatus::Damaged);
    assert_eq!(container.temperature, Some(4.0));
    assert!(container.is_reefer());
}

#[test]
fn test_temperature_after_damaged_wins() {
    let output = dispatch_all("EQD+CN+ABCU1234567+45R1'FTX+AAI++DAMAGED'TMP+2+4.0:CEL'");

    assert_eq!(output.containers[0].status, ContainerStatus::Reefer);
}

#[test]
fn test_buffered_status_updates_replay_in_order() {
    let output = dispatch_all(
        "LOC+147+0130204'FTX+AAI++DAMAGED'TMP+2+4.0:CEL'EQD+CN+ABCU1234567+45R1'\
LOC+147+0130206'TMP+2+4.0:CEL'FTX+AAI++DAMAGED'EQD+CN+MSCU7654321+45R1'",
    );

    assert_eq!(output.containers[0].status, ContainerStatus::Reefer);
    assert_eq!(output.containers[1].status, ContainerStatus::Damaged);
}

#[test]
fn test_other_general_text_is_ignored() {
    let output = dispatch_all("EQD+CN+ABCU1234567+22G0'FTX+AAI++HANDLE WITH CARE'");
    assert_eq!(output.containers[0].status, ContainerStatus::Ok);
}

#[test]
fn test_damage_marker_is_matched_exactly() {
    let output = dispatch_all(
        "EQD+CN+ABCU1234567+22G0'FTX+AAI++damaged'EQD+CN+MSCU7654321+22G0'FTX+AAI++Damaged'",
    );

    assert_eq!(output.containers[0].status, ContainerStatus::Ok);
    assert_eq!(output.containers[1].status, ContainerStatus::Ok);
}

#[test]
fn test_non_transport_temperature_is_ignored() {
    let output = dispatch_all("EQD+CN+ABCU1234567+22G0'TMP+1+4.0:CEL'");
    assert_eq!(output.containers[0].temperature, None);
    assert_eq!(output.containers[0].status, ContainerStatus::Ok);
}

#[test]
fn test_unreadable_weight_degrades() {
    let output = dispatch_all("EQD+CN+ABCU1234567+22G0'MEA+WT++KGM:abc'");

    assert_eq!(output.containers[0].weight, None);
    assert_eq!(output.stats.degraded_fields, 1);
    assert!(output.stats.warnings[0].contains("abc"));
}

#[test]
fn test_later_weight_overrides_earlier() {
    let output = dispatch_all(
        "EQD+CN+ABCU1234567+22G0'MEA+WT++KGM:15000'MEA+VGM++KGM:15250'",
    );
    assert_eq!(output.containers[0].weight, Some(15250));
}

#[test]
fn test_unreadable_weight_clears_earlier_weight() {
    let output = dispatch_all("EQD+CN+ABCU1234567+22G0'MEA+WT++KGM:15000'MEA+WT++KGM:x'");

    assert_eq!(output.containers[0].weight, None);
    assert_eq!(output.stats.degraded_fields, 1);
}

#[test]
fn test_buffered_unreadable_weight_clears_earlier_weight() {
    let output = dispatch_all(
        "LOC+147+0130204'MEA+WT+KGM:15000'MEA+WT+KGM:abc'EQD+CN+A+22G0'",
    );
    assert_eq!(output.containers[0].weight, None);
}

#[test]
fn test_malformed_position_degrades_but_keeps_raw() {
    let output = dispatch_all("EQD+CN+ABCU1234567+22G0'LOC+147+BAY13'");

    let container = &output.containers[0];
    assert_eq!(container.position.raw, "BAY13");
    assert_eq!(
        (container.bay(), container.row(), container.tier()),
        (0, 0, 0)
    );
    assert_eq!(output.stats.degraded_fields, 1);
}

#[test]
fn test_clearance_does_not_overwrite_cargo() {
    let output = dispatch_all(
        "EQD+CN+ABCU1234567+22G0'GDS+BANANAS'FTX+CLR++CUSTOMS CLEARED'",
    );
    assert_eq!(output.containers[0].cargo_type, "BANANAS");

    let output = dispatch_all("EQD+CN+ABCU1234567+22G0'FTX+CLR++CUSTOMS CLEARED'");
    assert_eq!(output.containers[0].cargo_type, "CUSTOMS CLEARED");

    let output = dispatch_all(
        "EQD+CN+ABCU1234567+22G0'FTX+CLR++CUSTOMS CLEARED'FTX+AAA++COFFEE'",
    );
    assert_eq!(output.containers[0].cargo_type, "COFFEE");
}

#[test]
fn test_carrier_without_open_container_is_dropped() {
    let output = dispatch_all("NAD+CA+MSC'EQD+CN+ABCU1234567+22G0'");

    assert_eq!(output.containers[0].carrier, None);
    assert_eq!(output.stats.carriers_dropped, 1);
}

#[test]
fn test_carrier_in_location_group_before_equipment_is_dropped() {
    let output = dispatch_all("LOC+147+0130204'NAD+CA+MSC'EQD+CN+ABCU1234567+22G0'");

    assert_eq!(output.containers[0].carrier, None);
    assert_eq!(output.stats.carriers_dropped, 1);
}

#[test]
fn test_non_carrier_party_is_ignored() {
    let output = dispatch_all("EQD+CN+ABCU1234567+22G0'NAD+CF+SHIPPER'");
    assert_eq!(output.containers[0].carrier, None);
    assert_eq!(output.stats.carriers_dropped, 0);
}

#[test]
fn test_booking_reference() {
    let output = dispatch_all("EQD+CN+ABCU1234567+22G0'RFF+BN:BK001'");
    assert_eq!(
        output.containers[0].booking_reference.as_deref(),
        Some("BK001")
    );
}

#[test]
fn test_location_group_without_equipment_is_discarded() {
    let output = dispatch_all(
        "LOC+147+0130204'MEA+WT++KGM:100'LOC+147+0250082'EQD+CN+ABCU1234567+22G0'",
    );

    assert_eq!(output.containers.len(), 1);
    let container = &output.containers[0];
    assert_eq!(container.position.raw, "0250082");
    assert_eq!(container.weight, None);
    assert_eq!(output.stats.orphaned_fields, 2);
}

#[test]
fn test_trailing_fields_are_orphaned() {
    let output = dispatch_all(
        "LOC+147+0130204'EQD+CN+ABCU1234567+22G0'LOC+147+0250082'MEA+WT++KGM:5'",
    );

    assert_eq!(output.containers.len(), 1);
    assert_eq!(output.stats.orphaned_fields, 2);
    assert!(!output.stats.is_clean());
}

#[test]
fn test_state_accessors_track_open_container() {
    let segments = tokenize(
        "LOC+147+0130204'MEA+WT++KGM:100'EQD+CN+ABCU1234567+22G0'",
        &Delimiters::default(),
    );
    let mut state = ParseState::new();

    state.dispatch(&segments[0]);
    state.dispatch(&segments[1]);
    assert!(state.current().is_none());
    assert_eq!(state.pending_len(), 2);
    assert_eq!(state.segment_order(), Some(SegmentOrder::LocationFirst));

    state.dispatch(&segments[2]);
    assert_eq!(state.pending_len(), 0);
    assert_eq!(
        state.current().map(|c| c.container_number.as_str()),
        Some("ABCU1234567")
    );
    assert!(state.finished().is_empty());
}

#[test]
fn test_segment_counts() {
    let output = dispatch_all(&create_test_message(EQUIPMENT_FIRST_CONTAINERS));

    assert_eq!(output.stats.segment_counts["EQD"], 2);
    assert_eq!(output.stats.segment_counts["LOC"], 8);
    assert_eq!(output.stats.segment_counts["DTM"], 2);
    // UNH, BGM, UNT and UNZ
    assert_eq!(output.stats.unrecognized_segments, 4);
    assert_eq!(output.stats.total_segments, 24);
}
