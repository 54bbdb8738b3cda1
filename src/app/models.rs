//! Data models for BAPLIE processing
//!
//! This module contains the core data structures for representing a vessel voyage
//! and the containers stowed aboard it, as read from an EDIFACT BAPLIE message.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Voyage
// =============================================================================

/// Voyage header assembled from the interchange and transport segments
///
/// Every field defaults to an empty string and is filled in as the relevant
/// segments are encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voyage {
    /// Vessel name from the `TDT` transport identification
    pub vessel_name: String,

    /// Voyage number from `TDT`, or `RFF+VON` when `TDT` carried none
    pub voyage_number: String,

    /// Voyage port of loading (`LOC+5`)
    pub port_origin: String,

    /// Voyage port of discharge (`LOC+61`)
    pub port_destination: String,

    /// Estimated arrival (`DTM+133`), display formatted
    pub arrival_date: String,

    /// Transmission timestamp (`UNB` or `DTM+137`), display formatted
    pub transmission_date: String,
}

// =============================================================================
// Stowage Position
// =============================================================================

/// Decomposed stowage cell aboard the vessel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Longitudinal section
    pub bay: u16,
    /// Lateral offset from the centre line (`00` is the centre row)
    pub row: u8,
    /// Vertical level
    pub tier: u8,
}

impl Slot {
    /// Key used when checking for two containers in one cell
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.bay, self.row, self.tier)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}{:02}{:02}", self.bay, self.row, self.tier)
    }
}

/// Stowage position as given in the message plus its decomposition
///
/// `slot` is `None` when the raw code is absent or not a 6/7 digit cell code;
/// the raw string is kept either way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StowagePosition {
    /// Raw position code
    pub raw: String,

    /// Bay/row/tier when the code decomposed cleanly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,
}

impl StowagePosition {
    /// Decompose a cell code using the fixed-width 3-2-2 rule
    ///
    /// Six digit codes (`BBRRTT`) are padded to seven before splitting.
    pub fn parse(code: &str) -> Self {
        let raw = code.trim().to_string();
        let slot = decompose_cell(&raw);
        Self { raw, slot }
    }

    /// Bay number, 0 when unknown
    pub fn bay(&self) -> u16 {
        self.slot.map_or(0, |slot| slot.bay)
    }

    /// Row number, 0 when unknown
    pub fn row(&self) -> u8 {
        self.slot.map_or(0, |slot| slot.row)
    }

    /// Tier number, 0 when unknown
    pub fn tier(&self) -> u8 {
        self.slot.map_or(0, |slot| slot.tier)
    }

    /// Check if bay, row and tier are all known
    pub fn is_fully_specified(&self) -> bool {
        self.slot.is_some()
    }

    /// Key identifying the physical cell, if the code names one
    ///
    /// Bay and tier zero are placeholders for an unknown cell. Row zero is
    /// the centre row and stays a real position.
    pub fn occupancy_key(&self) -> Option<String> {
        self.slot
            .filter(|slot| slot.bay != 0 && slot.tier != 0)
            .map(|slot| slot.key())
    }
}

fn decompose_cell(raw: &str) -> Option<Slot> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let padded = match raw.len() {
        7 => raw.to_string(),
        6 => format!("0{}", raw),
        _ => return None,
    };

    Some(Slot {
        bay: padded[0..3].parse().ok()?,
        row: padded[3..5].parse().ok()?,
        tier: padded[5..7].parse().ok()?,
    })
}

// =============================================================================
// Container
// =============================================================================

/// Display status of a container
///
/// `Reefer` is a derived hint set when a temperature is read; consumers that
/// need to know whether a container is refrigerated should check
/// [`Container::is_reefer`] instead, since a damaged reefer keeps its temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContainerStatus {
    #[default]
    Ok,
    Damaged,
    Reefer,
}

impl ContainerStatus {
    /// Status label as used in exports and filters
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerStatus::Ok => "OK",
            ContainerStatus::Damaged => "DAMAGED",
            ContainerStatus::Reefer => "REEFER",
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerStatus {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OK" => Ok(ContainerStatus::Ok),
            "DAMAGED" => Ok(ContainerStatus::Damaged),
            "REEFER" => Ok(ContainerStatus::Reefer),
            _ => Err(Error::configuration(format!(
                "Invalid container status '{}': must be OK, DAMAGED or REEFER",
                s
            ))),
        }
    }
}

/// A container stowed aboard the vessel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Carrier-assigned container number (`EQD` element 2)
    pub container_number: String,

    /// ISO 6346 size/type code
    pub container_type: String,

    /// Stowage cell (`LOC+147`)
    pub position: StowagePosition,

    /// Container port of loading (`LOC+9`)
    pub port_origin: String,

    /// Container port of discharge (`LOC+11`)
    pub port_destination: String,

    /// Gross weight in the source mass unit (normally KGM)
    pub weight: Option<i64>,

    /// Cargo description or code
    pub cargo_type: String,

    /// Transport temperature; present for refrigerated containers
    pub temperature: Option<f64>,

    pub status: ContainerStatus,

    /// Carrier code from `NAD+CA`
    pub carrier: Option<String>,

    /// Booking reference from `RFF+BN`
    pub booking_reference: Option<String>,
}

impl Container {
    /// Create a container from its equipment details with default values elsewhere
    pub fn new(container_number: impl Into<String>, container_type: impl Into<String>) -> Self {
        Self {
            container_number: container_number.into(),
            container_type: container_type.into(),
            ..Default::default()
        }
    }

    pub fn bay(&self) -> u16 {
        self.position.bay()
    }

    pub fn row(&self) -> u8 {
        self.position.row()
    }

    pub fn tier(&self) -> u8 {
        self.position.tier()
    }

    /// Check if a temperature was read for this container
    pub fn is_reefer(&self) -> bool {
        self.temperature.is_some()
    }

    pub fn is_damaged(&self) -> bool {
        self.status == ContainerStatus::Damaged
    }

    /// Record a temperature reading; the status becomes `Reefer` unconditionally
    pub fn set_temperature(&mut self, celsius: f64) {
        self.temperature = Some(celsius);
        self.status = ContainerStatus::Reefer;
    }

    pub fn mark_damaged(&mut self) {
        self.status = ContainerStatus::Damaged;
    }

    /// Fill the cargo type only if nothing has supplied one yet
    pub fn fill_cargo_type(&mut self, cargo: &str) {
        if self.cargo_type.is_empty() {
            self.cargo_type = cargo.to_string();
        }
    }
}

// =============================================================================
// Reconciliation Conflicts
// =============================================================================

/// A container dropped during reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conflict {
    /// A container number seen earlier in the message
    DuplicateIdentity {
        container_number: String,
        /// Index of the dropped container in parse order
        index: usize,
    },

    /// A stowage cell already occupied by an earlier container
    DuplicatePosition {
        container_number: String,
        /// Container that keeps the cell
        occupied_by: String,
        position: String,
        index: usize,
    },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::DuplicateIdentity {
                container_number,
                index,
            } => write!(
                f,
                "duplicate container {} at index {} dropped",
                container_number, index
            ),
            Conflict::DuplicatePosition {
                container_number,
                occupied_by,
                position,
                index,
            } => write!(
                f,
                "container {} at index {} dropped: position {} already occupied by {}",
                container_number, index, position, occupied_by
            ),
        }
    }
}
