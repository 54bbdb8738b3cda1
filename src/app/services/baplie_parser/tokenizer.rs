//! EDIFACT tokenizer for BAPLIE interchanges
//!
//! Splits raw interchange text into segments and data elements. Component
//! splitting is left to the segment readers, which ask for individual
//! components through [`RawSegment::component`].

use crate::config::DelimiterConfig;
use crate::constants::{UNA_LENGTH, UNA_TAG};
use crate::{Error, Result};
use tracing::debug;

/// Delimiters in effect for one interchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub segment_terminator: char,
    pub element_separator: char,
    pub component_separator: char,
}

impl From<DelimiterConfig> for Delimiters {
    fn from(config: DelimiterConfig) -> Self {
        Self {
            segment_terminator: config.segment_terminator,
            element_separator: config.element_separator,
            component_separator: config.component_separator,
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        DelimiterConfig::default().into()
    }
}

/// One segment split into data elements
///
/// `elements[0]` is the tag, so element indices line up with EDIFACT
/// positions (`LOC+147+...` has its qualifier at index 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment<'a> {
    /// Position of the segment in the interchange
    pub index: usize,
    pub tag: &'a str,
    pub elements: Vec<&'a str>,
    component_separator: char,
}

impl<'a> RawSegment<'a> {
    /// Data element at `position`, empty when absent
    pub fn element(&self, position: usize) -> &'a str {
        self.elements.get(position).copied().map_or("", str::trim)
    }

    /// Check if the segment carries a data element at `position`
    pub fn has_element(&self, position: usize) -> bool {
        position < self.elements.len()
    }

    /// Component `component` of data element `position`, empty when absent
    pub fn component(&self, position: usize, component: usize) -> &'a str {
        self.components(position)
            .get(component)
            .copied()
            .unwrap_or("")
    }

    /// All components of data element `position`, each trimmed
    pub fn components(&self, position: usize) -> Vec<&'a str> {
        match self.elements.get(position).copied() {
            Some(element) => element
                .split(self.component_separator)
                .map(str::trim)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Resolve the delimiters for `content` and return the text after any `UNA`
///
/// A `UNA` advice is read only when `honor_una` is set; otherwise it is left
/// in the body and later ignored as an unrecognized segment.
pub fn resolve_delimiters<'a>(
    content: &'a str,
    defaults: Delimiters,
    honor_una: bool,
) -> Result<(Delimiters, &'a str)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    if !honor_una || !trimmed.starts_with(UNA_TAG) {
        return Ok((defaults, trimmed));
    }

    let advice: Vec<(usize, char)> = trimmed.char_indices().take(UNA_LENGTH).collect();
    if advice.len() < UNA_LENGTH {
        return Err(Error::tokenization(format!(
            "UNA service string advice is truncated: expected {} characters, found {}",
            UNA_LENGTH,
            advice.len()
        )));
    }

    let delimiters = Delimiters {
        component_separator: advice[3].1,
        element_separator: advice[4].1,
        segment_terminator: advice[8].1,
    };

    let (last_index, last_char) = advice[UNA_LENGTH - 1];
    let body = &trimmed[last_index + last_char.len_utf8()..];

    debug!(
        "UNA advice: component '{}', element '{}', terminator '{}'",
        delimiters.component_separator, delimiters.element_separator, delimiters.segment_terminator
    );

    Ok((delimiters, body))
}

/// Split interchange text into segments
///
/// Segments that are empty after trimming are discarded; the tag is the
/// trimmed first data element.
pub fn tokenize<'a>(content: &'a str, delimiters: &Delimiters) -> Vec<RawSegment<'a>> {
    content
        .split(delimiters.segment_terminator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(index, segment)| {
            let elements: Vec<&str> = segment.split(delimiters.element_separator).collect();
            let tag = elements.first().copied().map_or("", str::trim);
            RawSegment {
                index,
                tag,
                elements,
                component_separator: delimiters.component_separator,
            }
        })
        .collect()
}
