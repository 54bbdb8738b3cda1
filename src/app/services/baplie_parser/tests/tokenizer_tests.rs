//! Tests for delimiter resolution and segment splitting

use crate::Error;
use crate::app::services::baplie_parser::tokenizer::{Delimiters, resolve_delimiters, tokenize};

#[test]
fn test_tokenize_splits_segments_and_elements() {
    let segments = tokenize(
        "LOC+147+0130204::5'MEA+WT++KGM:15000'",
        &Delimiters::default(),
    );

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].tag, "LOC");
    assert_eq!(segments[0].element(1), "147");
    assert_eq!(segments[0].component(2, 0), "0130204");
    assert_eq!(segments[0].component(2, 2), "5");
    assert_eq!(segments[1].index, 1);
    assert_eq!(segments[1].element(2), "");
    assert_eq!(segments[1].component(3, 1), "15000");
}

#[test]
fn test_missing_elements_read_empty() {
    let segments = tokenize("EQD+CN'", &Delimiters::default());
    let eqd = &segments[0];

    assert!(eqd.has_element(1));
    assert!(!eqd.has_element(2));
    assert_eq!(eqd.element(5), "");
    assert_eq!(eqd.component(5, 3), "");
    assert!(eqd.components(7).is_empty());
}

#[test]
fn test_blank_segments_and_line_breaks_are_dropped() {
    let content = "LOC+5+ECGYE'\r\n\r\n'  EQD+CN+ABCU1234567+22G0'\n";
    let segments = tokenize(content, &Delimiters::default());

    let tags: Vec<_> = segments.iter().map(|s| s.tag).collect();
    assert_eq!(tags, vec!["LOC", "EQD"]);
    assert_eq!(segments[1].index, 1);
}

#[test]
fn test_no_una_uses_defaults() {
    let (delimiters, body) =
        resolve_delimiters("\u{feff}  LOC+5+ECGYE'", Delimiters::default(), true).unwrap();

    assert_eq!(delimiters, Delimiters::default());
    assert_eq!(body, "LOC+5+ECGYE'");
}

#[test]
fn test_una_overrides_delimiters() {
    let (delimiters, body) =
        resolve_delimiters("UNA|*.? ~LOC*5*ECGYE~", Delimiters::default(), true).unwrap();

    assert_eq!(delimiters.component_separator, '|');
    assert_eq!(delimiters.element_separator, '*');
    assert_eq!(delimiters.segment_terminator, '~');
    assert_eq!(body, "LOC*5*ECGYE~");
}

#[test]
fn test_una_ignored_when_disabled() {
    let content = "UNA|*.? ~LOC+5+ECGYE'";
    let (delimiters, body) = resolve_delimiters(content, Delimiters::default(), false).unwrap();

    assert_eq!(delimiters, Delimiters::default());
    assert_eq!(body, content);
}

#[test]
fn test_truncated_una_is_an_error() {
    let result = resolve_delimiters("UNA:+", Delimiters::default(), true);
    assert!(matches!(result, Err(Error::Tokenization { .. })));
}
