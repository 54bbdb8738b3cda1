//! Segment dispatcher and parser state machine
//!
//! [`ParseState`] owns everything under construction during one parse: the
//! voyage, the open container, the pending buffer and the finished list.
//! Segments are fed in message order through [`ParseState::dispatch`]; the
//! open container is moved into the finished list at each boundary.

use tracing::{debug, trace};

use super::field_parsers::{format_edi_datetime, format_interchange_datetime};
use super::pending::{ContainerField, PendingBuffer};
use super::segment::Segment;
use super::stats::{ParseStats, SegmentOrder};
use super::tokenizer::RawSegment;
use crate::app::models::{Container, StowagePosition, Voyage};
use crate::constants::{datetime, free_text, location, party, reference, tags, temperature};

/// Voyage and containers produced by a completed dispatch
#[derive(Debug, Clone)]
pub struct DispatchOutput {
    pub voyage: Voyage,
    /// Containers in `EQD` order, not yet reconciled
    pub containers: Vec<Container>,
    pub stats: ParseStats,
}

/// Parser state for a single message
#[derive(Debug, Default)]
pub struct ParseState {
    voyage: Voyage,
    current: Option<Container>,
    pending: PendingBuffer,
    containers: Vec<Container>,
    order: Option<SegmentOrder>,
    stats: ParseStats,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn voyage(&self) -> &Voyage {
        &self.voyage
    }

    /// Container currently receiving field updates
    pub fn current(&self) -> Option<&Container> {
        self.current.as_ref()
    }

    /// Containers already closed
    pub fn finished(&self) -> &[Container] {
        &self.containers
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn segment_order(&self) -> Option<SegmentOrder> {
        self.order
    }

    /// Route one segment to its handler
    pub fn dispatch(&mut self, raw: &RawSegment<'_>) {
        self.stats.total_segments += 1;

        let segment = Segment::from_raw(raw);
        if let Segment::Unrecognized { tag } = &segment {
            trace!("Ignoring segment {} ({})", raw.index, tag);
            self.stats.unrecognized_segments += 1;
            return;
        }
        self.stats.record_segment(segment.tag());

        match segment {
            Segment::Interchange { date, time } => self.handle_interchange(&date, &time),
            Segment::Transport {
                voyage_number,
                vessel_name,
            } => self.handle_transport(voyage_number, vessel_name),
            Segment::Location { qualifier, code } => {
                self.handle_location(raw.index, &qualifier, code)
            }
            Segment::DateTime {
                qualifier,
                value,
                format,
            } => self.handle_datetime(&qualifier, &value, &format),
            Segment::Reference { qualifier, value } => self.handle_reference(&qualifier, value),
            Segment::Goods { description } => {
                if !description.is_empty() {
                    self.assign(ContainerField::CargoDescription(description));
                }
            }
            Segment::Equipment {
                container_number,
                container_type,
            } => self.handle_equipment(container_number, container_type),
            Segment::Weight { value, raw: text } => {
                if value.is_none() && !text.is_empty() {
                    self.stats.record_degraded(format!(
                        "Segment {}: non-numeric weight '{}'",
                        raw.index, text
                    ));
                }
                self.assign(ContainerField::Weight(value));
            }
            Segment::OtherMeasurement { qualifier } => {
                trace!("Ignoring MEA qualifier '{}'", qualifier);
            }
            Segment::FreeText { qualifier, text } => self.handle_free_text(&qualifier, text),
            Segment::Temperature {
                qualifier,
                value,
                raw: text,
            } => {
                if qualifier != temperature::TRANSPORT {
                    return;
                }
                match value {
                    Some(celsius) => self.assign(ContainerField::Temperature(celsius)),
                    None if !text.is_empty() => self.stats.record_degraded(format!(
                        "Segment {}: unreadable temperature '{}'",
                        raw.index, text
                    )),
                    None => {}
                }
            }
            Segment::NameAddress {
                qualifier,
                party: code,
            } => self.handle_name_address(&qualifier, code),
            Segment::Unrecognized { .. } => {}
        }
    }

    /// Close the open container and hand back the results
    pub fn finish(mut self) -> DispatchOutput {
        self.close_container();

        if !self.pending.is_empty() {
            let discarded = self.pending.clear();
            debug!("Discarding {} buffered fields with no container", discarded);
            self.stats.orphaned_fields += discarded;
        }

        self.stats.segment_order = self.order;

        DispatchOutput {
            voyage: self.voyage,
            containers: self.containers,
            stats: self.stats,
        }
    }

    fn handle_interchange(&mut self, date: &str, time: &str) {
        if !date.is_empty() {
            self.voyage.transmission_date = format_interchange_datetime(date, time);
        }
    }

    fn handle_transport(&mut self, voyage_number: String, vessel_name: String) {
        if !voyage_number.is_empty() {
            self.voyage.voyage_number = voyage_number;
        }
        if !vessel_name.is_empty() {
            self.voyage.vessel_name = vessel_name;
        }
    }

    fn handle_location(&mut self, index: usize, qualifier: &str, code: String) {
        match qualifier {
            location::PORT_OF_LOADING => self.voyage.port_origin = code,
            location::PORT_OF_DISCHARGE => self.voyage.port_destination = code,
            location::STOWAGE_CELL => {
                let order = *self.order.get_or_insert(SegmentOrder::LocationFirst);
                if order == SegmentOrder::LocationFirst {
                    self.start_location_group();
                }

                let position = StowagePosition::parse(&code);
                if !position.raw.is_empty() && !position.is_fully_specified() {
                    self.stats.record_degraded(format!(
                        "Segment {}: malformed stowage position '{}'",
                        index, position.raw
                    ));
                }
                self.assign(ContainerField::Position(position));
            }
            location::CONTAINER_ORIGIN => self.assign(ContainerField::PortOrigin(code)),
            location::CONTAINER_DESTINATION => self.assign(ContainerField::PortDestination(code)),
            _ => {}
        }
    }

    fn handle_datetime(&mut self, qualifier: &str, value: &str, format: &str) {
        if value.is_empty() {
            return;
        }
        match qualifier {
            datetime::ESTIMATED_ARRIVAL => {
                self.voyage.arrival_date = format_edi_datetime(value, format);
            }
            datetime::DOCUMENT if self.voyage.transmission_date.is_empty() => {
                self.voyage.transmission_date = format_edi_datetime(value, format);
            }
            _ => {}
        }
    }

    fn handle_reference(&mut self, qualifier: &str, value: String) {
        if value.is_empty() {
            return;
        }
        match qualifier {
            reference::VOYAGE_NUMBER if self.voyage.voyage_number.is_empty() => {
                self.voyage.voyage_number = value;
            }
            reference::BOOKING => self.assign(ContainerField::BookingReference(value)),
            _ => {}
        }
    }

    fn handle_equipment(&mut self, container_number: String, container_type: String) {
        self.order.get_or_insert(SegmentOrder::EquipmentFirst);
        self.close_container();

        let mut container = Container::new(container_number, container_type);
        let flushed = self.pending.flush_into(&mut container);
        debug!(
            "Opened container {} ({} buffered fields)",
            container.container_number, flushed
        );

        self.stats.containers_parsed += 1;
        self.current = Some(container);
    }

    fn handle_free_text(&mut self, qualifier: &str, text: String) {
        match qualifier {
            free_text::CARGO if !text.is_empty() => {
                self.assign(ContainerField::CargoDescription(text))
            }
            free_text::GENERAL if text == free_text::DAMAGED_MARKER => {
                self.assign(ContainerField::Damaged)
            }
            free_text::CLEARANCE if !text.is_empty() => {
                self.assign(ContainerField::ClearanceText(text))
            }
            _ => {}
        }
    }

    fn handle_name_address(&mut self, qualifier: &str, code: String) {
        if qualifier != party::CARRIER {
            return;
        }
        match self.current.as_mut() {
            Some(container) => ContainerField::Carrier(code).apply_to(container),
            None => {
                debug!(
                    "Dropping {} carrier '{}' with no open container",
                    tags::NAD,
                    code
                );
                self.stats.carriers_dropped += 1;
            }
        }
    }

    /// Apply to the open container, or buffer until the next `EQD`
    fn assign(&mut self, field: ContainerField) {
        match self.current.as_mut() {
            Some(container) => field.apply_to(container),
            None => self.pending.push(field),
        }
    }

    /// A `LOC+147` in a location-first message starts a new container group
    fn start_location_group(&mut self) {
        self.close_container();

        if self.pending.has_position() {
            let discarded = self.pending.clear();
            debug!(
                "Discarding {} buffered fields from a group without EQD",
                discarded
            );
            self.stats.orphaned_fields += discarded;
        }
    }

    fn close_container(&mut self) {
        if let Some(container) = self.current.take() {
            trace!("Closed container {}", container.container_number);
            self.containers.push(container);
        }
    }
}
