//! Tests for the BAPLIE parser module
//!
//! Fixtures describe the same two containers in both sub-formats so that
//! results can be compared across segment orders.

pub mod state_tests;
pub mod tokenizer_tests;

use super::state::{DispatchOutput, ParseState};
use super::tokenizer::{Delimiters, tokenize};

/// Interchange header, voyage segments and estimated arrival
pub const HEADER: &str = "UNB+UNOA:2+SENDER+RECIPIENT+240315:1430+REF001'\
UNH+1+BAPLIE:D:95B:UN:SMDG20'\
BGM++REF001+9'\
DTM+137:202401010000:203'\
TDT+20+V123N+++CARRIER:172:20+++9123456:146:11:MSC AURORA'\
LOC+5+ECGYE:139:6'\
LOC+61+USLAX:139:6'\
DTM+133:2403201200:201'";

pub const TRAILER: &str = "UNT+20+1'UNZ+1+REF001'";

/// BAPLIE 2.1 container groups: `EQD` first
pub const EQUIPMENT_FIRST_CONTAINERS: &str = "EQD+CN+ABCU1234567+22G0+++5'\
LOC+147+0130204::5'\
LOC+9+ECGYE'\
LOC+11+USLAX'\
MEA+WT++KGM:15000'\
GDS+BANANAS'\
NAD+CA+MSC:172:20'\
EQD+CN+MSCU7654321+45R1+++5'\
LOC+147+0250082::5'\
LOC+9+ECGYE'\
LOC+11+NLRTM'\
MEA+VGM++KGM:22000'\
TMP+2+-18.0:CEL'\
FTX+AAA++FROZEN FISH'";

/// The same containers in BAPLIE 2.0/2.2 order: `LOC+147` first
pub const LOCATION_FIRST_CONTAINERS: &str = "LOC+147+0130204::5'\
LOC+9+ECGYE'\
LOC+11+USLAX'\
MEA+WT++KGM:15000'\
GDS+BANANAS'\
EQD+CN+ABCU1234567+22G0+++5'\
NAD+CA+MSC:172:20'\
LOC+147+0250082::5'\
LOC+9+ECGYE'\
LOC+11+NLRTM'\
MEA+VGM++KGM:22000'\
TMP+2+-18.0:CEL'\
FTX+AAA++FROZEN FISH'\
EQD+CN+MSCU7654321+45R1+++5'";

/// Complete message with the given container segments
pub fn create_test_message(containers: &str) -> String {
    format!("{}{}{}", HEADER, containers, TRAILER)
}

/// Run content through the dispatcher with default delimiters
pub fn dispatch_all(content: &str) -> DispatchOutput {
    let mut state = ParseState::new();
    for segment in &tokenize(content, &Delimiters::default()) {
        state.dispatch(segment);
    }
    state.finish()
}
