//! Container field updates and the pending buffer
//!
//! In location-first messages (BAPLIE 2.0/2.2) a container's stowage,
//! weight and temperature segments arrive before the `EQD` that creates it.
//! Those updates are held here in arrival order and replayed onto the
//! container once it exists.

use crate::app::models::{Container, StowagePosition};

/// A single update to a container, produced by a field handler
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerField {
    Position(StowagePosition),
    PortOrigin(String),
    PortDestination(String),
    /// `None` clears a weight an earlier segment set
    Weight(Option<i64>),
    /// `GDS` or `FTX+AAA`; replaces any earlier cargo text
    CargoDescription(String),
    /// `FTX+CLR`; only fills an empty cargo type
    ClearanceText(String),
    Damaged,
    Temperature(f64),
    BookingReference(String),
    Carrier(String),
}

impl ContainerField {
    pub fn apply_to(self, container: &mut Container) {
        match self {
            ContainerField::Position(position) => container.position = position,
            ContainerField::PortOrigin(code) => container.port_origin = code,
            ContainerField::PortDestination(code) => container.port_destination = code,
            ContainerField::Weight(weight) => container.weight = weight,
            ContainerField::CargoDescription(text) => container.cargo_type = text,
            ContainerField::ClearanceText(text) => container.fill_cargo_type(&text),
            ContainerField::Damaged => container.mark_damaged(),
            ContainerField::Temperature(celsius) => container.set_temperature(celsius),
            ContainerField::BookingReference(reference) => {
                container.booking_reference = Some(reference)
            }
            ContainerField::Carrier(code) => container.carrier = Some(code),
        }
    }

    /// Check if this update sets the stowage position
    pub fn is_position(&self) -> bool {
        matches!(self, ContainerField::Position(_))
    }
}

/// Field updates waiting for their container
#[derive(Debug, Clone, Default)]
pub struct PendingBuffer {
    fields: Vec<ContainerField>,
}

impl PendingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: ContainerField) {
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check if a stowage position is already buffered
    pub fn has_position(&self) -> bool {
        self.fields.iter().any(ContainerField::is_position)
    }

    /// Replay all buffered updates onto `container` in arrival order, emptying the buffer
    pub fn flush_into(&mut self, container: &mut Container) -> usize {
        let count = self.fields.len();
        for field in self.fields.drain(..) {
            field.apply_to(container);
        }
        count
    }

    /// Drop all buffered updates, returning how many were discarded
    pub fn clear(&mut self) -> usize {
        let count = self.fields.len();
        self.fields.clear();
        count
    }
}
