//! Typed BAPLIE segments
//!
//! Each recognized tag is read from its [`RawSegment`] into an explicit
//! variant, so handlers work on named fields instead of element positions.
//! Missing elements read as empty strings; unreadable numbers read as `None`
//! with the raw text kept for diagnostics.

use super::field_parsers::{parse_temperature, parse_weight};
use super::tokenizer::RawSegment;
use crate::constants::{measurement, tags};

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// `UNB` interchange header
    Interchange { date: String, time: String },

    /// `TDT` details of transport
    Transport {
        voyage_number: String,
        vessel_name: String,
    },

    /// `LOC` place/location identification
    Location { qualifier: String, code: String },

    /// `DTM` date/time/period
    DateTime {
        qualifier: String,
        value: String,
        format: String,
    },

    /// `RFF` reference
    Reference { qualifier: String, value: String },

    /// `GDS` nature of cargo
    Goods { description: String },

    /// `EQD` equipment details
    Equipment {
        container_number: String,
        container_type: String,
    },

    /// `MEA` gross weight measurement
    Weight { value: Option<i64>, raw: String },

    /// `MEA` with a qualifier other than gross weight
    OtherMeasurement { qualifier: String },

    /// `FTX` free text
    FreeText { qualifier: String, text: String },

    /// `TMP` temperature
    Temperature {
        qualifier: String,
        value: Option<f64>,
        raw: String,
    },

    /// `NAD` name and address
    NameAddress { qualifier: String, party: String },

    /// Any tag the dispatcher does not handle
    Unrecognized { tag: String },
}

impl Segment {
    /// Read a raw segment into its typed form
    pub fn from_raw(raw: &RawSegment<'_>) -> Self {
        match raw.tag {
            tags::UNB => Segment::Interchange {
                date: raw.component(4, 0).to_string(),
                time: raw.component(4, 1).to_string(),
            },
            tags::TDT => Segment::Transport {
                voyage_number: raw.element(2).to_string(),
                vessel_name: read_vessel_name(raw),
            },
            tags::LOC => Segment::Location {
                qualifier: raw.element(1).to_string(),
                code: raw.component(2, 0).to_string(),
            },
            tags::DTM => Segment::DateTime {
                qualifier: raw.component(1, 0).to_string(),
                value: raw.component(1, 1).to_string(),
                format: raw.component(1, 2).to_string(),
            },
            tags::RFF => Segment::Reference {
                qualifier: raw.component(1, 0).to_string(),
                value: raw.component(1, 1).to_string(),
            },
            tags::GDS => Segment::Goods {
                description: raw.component(1, 0).to_string(),
            },
            tags::EQD => Segment::Equipment {
                container_number: raw.element(2).to_string(),
                container_type: raw.component(3, 0).to_string(),
            },
            tags::MEA => read_measurement(raw),
            tags::FTX => Segment::FreeText {
                qualifier: raw.element(1).to_string(),
                text: read_free_text(raw),
            },
            tags::TMP => {
                let value = raw.component(2, 0);
                Segment::Temperature {
                    qualifier: raw.element(1).to_string(),
                    value: parse_temperature(value),
                    raw: value.to_string(),
                }
            }
            tags::NAD => Segment::NameAddress {
                qualifier: raw.element(1).to_string(),
                party: raw.component(2, 0).to_string(),
            },
            other => Segment::Unrecognized {
                tag: other.to_string(),
            },
        }
    }

    /// Tag this segment was read from
    pub fn tag(&self) -> &str {
        match self {
            Segment::Interchange { .. } => tags::UNB,
            Segment::Transport { .. } => tags::TDT,
            Segment::Location { .. } => tags::LOC,
            Segment::DateTime { .. } => tags::DTM,
            Segment::Reference { .. } => tags::RFF,
            Segment::Goods { .. } => tags::GDS,
            Segment::Equipment { .. } => tags::EQD,
            Segment::Weight { .. } | Segment::OtherMeasurement { .. } => tags::MEA,
            Segment::FreeText { .. } => tags::FTX,
            Segment::Temperature { .. } => tags::TMP,
            Segment::NameAddress { .. } => tags::NAD,
            Segment::Unrecognized { tag } => tag,
        }
    }
}

/// Vessel name from the `TDT` transport identification composite
///
/// The name normally sits in component 4 (`IMO:146:11:NAME`); some senders
/// put it in component 3.
fn read_vessel_name(raw: &RawSegment<'_>) -> String {
    let components = raw.components(8);
    [3, 2]
        .iter()
        .filter_map(|&i| components.get(i).copied())
        .find(|name| !name.is_empty())
        .unwrap_or("")
        .to_string()
}

/// `MEA` weight in either the `WT`/`VGM` or the `AAE+G`/`AAE+VGM` layout
///
/// The measure composite is `unit:value` in element 3, or in element 2 when
/// the empty element has been omitted.
fn read_measurement(raw: &RawSegment<'_>) -> Segment {
    let qualifier = raw.element(1);
    let property = raw.component(2, 0);

    let is_weight = match qualifier {
        measurement::WEIGHT | measurement::VGM => true,
        measurement::PURPOSE_AAE => {
            property == measurement::PROPERTY_GROSS || property == measurement::VGM
        }
        _ => false,
    };

    if !is_weight {
        return Segment::OtherMeasurement {
            qualifier: qualifier.to_string(),
        };
    }

    let value = [3, 2]
        .iter()
        .map(|&position| raw.component(position, 1))
        .find(|value| !value.is_empty())
        .unwrap_or("");

    Segment::Weight {
        value: parse_weight(value),
        raw: value.to_string(),
    }
}

/// `FTX` text lines, joined with single spaces
fn read_free_text(raw: &RawSegment<'_>) -> String {
    raw.components(3)
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
