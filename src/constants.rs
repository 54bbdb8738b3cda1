//! Application constants for BAPLIE processor
//!
//! This module contains the EDIFACT segment tags, qualifier codes, default
//! delimiters and labels used throughout the BAPLIE processor application.

// =============================================================================
// Delimiters
// =============================================================================

/// Default segment terminator
pub const DEFAULT_SEGMENT_TERMINATOR: char = '\'';

/// Default data element separator
pub const DEFAULT_ELEMENT_SEPARATOR: char = '+';

/// Default component data element separator
pub const DEFAULT_COMPONENT_SEPARATOR: char = ':';

/// Tag of the service string advice segment
pub const UNA_TAG: &str = "UNA";

/// Minimum length of a `UNA` service string advice (tag plus six characters)
pub const UNA_LENGTH: usize = 9;

// =============================================================================
// Segment Tags
// =============================================================================

/// Segment tags recognized by the dispatcher
pub mod tags {
    /// Interchange header
    pub const UNB: &str = "UNB";
    /// Details of transport
    pub const TDT: &str = "TDT";
    /// Place/location identification
    pub const LOC: &str = "LOC";
    /// Date/time/period
    pub const DTM: &str = "DTM";
    /// Reference
    pub const RFF: &str = "RFF";
    /// Nature of cargo
    pub const GDS: &str = "GDS";
    /// Equipment details
    pub const EQD: &str = "EQD";
    /// Measurements
    pub const MEA: &str = "MEA";
    /// Free text
    pub const FTX: &str = "FTX";
    /// Temperature
    pub const TMP: &str = "TMP";
    /// Name and address
    pub const NAD: &str = "NAD";
}

// =============================================================================
// Qualifiers
// =============================================================================

/// `LOC` place qualifiers (DE 3227)
pub mod location {
    /// Voyage port of loading
    pub const PORT_OF_LOADING: &str = "5";
    /// Voyage port of discharge
    pub const PORT_OF_DISCHARGE: &str = "61";
    /// Stowage cell
    pub const STOWAGE_CELL: &str = "147";
    /// Container port of loading
    pub const CONTAINER_ORIGIN: &str = "9";
    /// Container port of discharge
    pub const CONTAINER_DESTINATION: &str = "11";
}

/// `DTM` date/time qualifiers (DE 2005) and format codes (DE 2379)
pub mod datetime {
    /// Estimated date/time of arrival
    pub const ESTIMATED_ARRIVAL: &str = "133";
    /// Document/message date/time
    pub const DOCUMENT: &str = "137";

    /// YYMMDD
    pub const FORMAT_YYMMDD: &str = "101";
    /// YYMMDDHHMM
    pub const FORMAT_YYMMDDHHMM: &str = "201";
    /// CCYYMMDDHHMM
    pub const FORMAT_CCYYMMDDHHMM: &str = "203";
}

/// `RFF` reference qualifiers (DE 1153)
pub mod reference {
    /// Voyage number
    pub const VOYAGE_NUMBER: &str = "VON";
    /// Booking reference
    pub const BOOKING: &str = "BN";
}

/// `MEA` measurement qualifiers (DE 6311 / 6313)
pub mod measurement {
    /// Gross weight
    pub const WEIGHT: &str = "WT";
    /// Verified gross mass
    pub const VGM: &str = "VGM";
    /// Measurement purpose "AAE" (newer directories carry the property in element 2)
    pub const PURPOSE_AAE: &str = "AAE";
    /// Gross weight property under `AAE`
    pub const PROPERTY_GROSS: &str = "G";
}

/// `FTX` text subject qualifiers (DE 4451)
pub mod free_text {
    /// Cargo description
    pub const CARGO: &str = "AAA";
    /// General information, used for damage markers
    pub const GENERAL: &str = "AAI";
    /// Clearance text
    pub const CLEARANCE: &str = "CLR";
    /// Damage marker text
    pub const DAMAGED_MARKER: &str = "DAMAGED";
}

/// `TMP` temperature qualifiers (DE 6245)
pub mod temperature {
    /// Transport temperature
    pub const TRANSPORT: &str = "2";
}

/// `NAD` party qualifiers (DE 3035)
pub mod party {
    /// Container operator / carrier
    pub const CARRIER: &str = "CA";
}

// =============================================================================
// Statistics and Display
// =============================================================================

/// Destination key used when a container has no destination port
pub const UNKNOWN_DESTINATION: &str = "Unknown";

/// Divisor converting raw weight sums (kilograms) to tonnes
pub const DEFAULT_WEIGHT_DIVISOR: f64 = 1000.0;

/// Display format for parsed timestamps
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Display format for parsed timestamps carrying a time of day
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// File extensions picked up when validating a directory
pub const BAPLIE_FILE_EXTENSIONS: &[&str] = &["edi", "baplie", "txt"];

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";
