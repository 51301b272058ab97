//! Continuation reassembly through the full pipeline
//!
//! CONC/CONT are exercised here end to end rather than at the tree layer, so
//! the assertions see what a consumer of the typed model sees: fully folded
//! values with no trace of the physical line splits.

use ged_parser::ged::testing::{parse_str, SampleBuilder};

#[test]
fn test_cont_inserts_line_break() {
    let source = SampleBuilder::new()
        .raw("0 @N1@ NOTE Hello\n1 CONT World")
        .finish();
    let file = parse_str(&source);

    let note = file.gedcom.note(&"@N1@".into()).unwrap();
    assert_eq!(note.text.as_deref(), Some("Hello\nWorld"));
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
}

#[test]
fn test_conc_appends_without_separator() {
    let source = SampleBuilder::new()
        .raw("0 @N1@ NOTE Hello\n1 CONC World")
        .finish();
    let file = parse_str(&source);

    let note = file.gedcom.note(&"@N1@".into()).unwrap();
    assert_eq!(note.text.as_deref(), Some("HelloWorld"));
}

#[test]
fn test_mixed_continuations_build_paragraphs() {
    let source = SampleBuilder::new()
        .raw(
            "0 @N1@ NOTE This note was split by the\n\
             1 CONC  exporting system mid-sentence.\n\
             1 CONT \n\
             1 CONT Second paragraph.",
        )
        .finish();
    let file = parse_str(&source);

    let note = file.gedcom.note(&"@N1@".into()).unwrap();
    assert_eq!(
        note.text.as_deref(),
        Some("This note was split by the exporting system mid-sentence.\n\nSecond paragraph.")
    );
}

#[test]
fn test_continuation_on_nested_field() {
    // Continuations are not limited to records; any value line can be split.
    let source = SampleBuilder::new()
        .raw(
            "0 @I1@ INDI\n\
             1 NAME X /Y/\n\
             1 NOTE first half\n\
             2 CONT second half",
        )
        .finish();
    let file = parse_str(&source);

    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(
        indi.notes[0].text.as_deref(),
        Some("first half\nsecond half")
    );
}

#[test]
fn test_continuation_inside_custom_subtree() {
    // Folding happens before mapping, so even unrecognized tags carry merged
    // values.
    let source = SampleBuilder::new()
        .raw("0 @I1@ INDI\n1 NAME X /Y/\n1 _BLOB part one\n2 CONC , part two")
        .finish();
    let file = parse_str(&source);

    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(indi.custom[0].tag, "_BLOB");
    assert_eq!(indi.custom[0].value.as_deref(), Some("part one, part two"));
    assert!(indi.custom[0].children.is_empty());
}

#[test]
fn test_field_after_continuation_still_attaches() {
    let source = SampleBuilder::new()
        .raw(
            "0 @I1@ INDI\n\
             1 NAME X /Y/\n\
             1 NOTE split\n\
             2 CONT note\n\
             1 SEX M",
        )
        .finish();
    let file = parse_str(&source);

    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(indi.notes[0].text.as_deref(), Some("split\nnote"));
    assert_eq!(indi.sex.as_deref(), Some("M"));
}
