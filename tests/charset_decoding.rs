//! Charset detection through the full pipeline
//!
//! The unit tests in the encoding module cover the decoders in isolation;
//! these check that a declared or BOM-marked charset carries all the way to
//! the typed model.

use ged_parser::parse_gedcom;

#[test]
fn test_utf16_le_with_bom() {
    let text = "0 HEAD\n1 GEDC\n2 VERS 5.5.1\n1 CHAR UNICODE\n\
                0 @I1@ INDI\n1 NAME J\u{00F8}rgen /Aal/\n0 TRLR\n";
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }

    let file = parse_gedcom(&bytes).unwrap();
    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(indi.names[0].basic.as_deref(), Some("J\u{00F8}rgen /Aal/"));
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
}

#[test]
fn test_utf16_be_without_bom() {
    let text = "0 HEAD\n1 GEDC\n2 VERS 5.5.1\n1 CHAR UNICODE\n0 TRLR\n";
    let mut bytes = Vec::new();
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }

    let file = parse_gedcom(&bytes).unwrap();
    let charset = file.gedcom.header.character_set.unwrap();
    assert_eq!(charset.value.as_deref(), Some("UNICODE"));
}

#[test]
fn test_ansel_name_with_diacritic() {
    // The acute precedes its base in ANSEL; the decoded name must carry it
    // after the 'e' as a Unicode combining mark.
    let mut bytes = b"0 HEAD\n1 GEDC\n2 VERS 5.5\n1 CHAR ANSEL\n\
                      0 @I1@ INDI\n1 NAME Ren"
        .to_vec();
    bytes.push(0xE2);
    bytes.extend_from_slice(b"e /Dupont/\n0 TRLR\n");

    let file = parse_gedcom(&bytes).unwrap();
    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(
        indi.names[0].basic.as_deref(),
        Some("Rene\u{0301} /Dupont/")
    );
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
}

#[test]
fn test_ascii_high_byte_is_replaced_and_flagged() {
    let mut bytes = b"0 HEAD\n1 GEDC\n2 VERS 5.5.1\n1 CHAR ASCII\n\
                      0 @N1@ NOTE caf"
        .to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"\n0 TRLR\n");

    let file = parse_gedcom(&bytes).unwrap();
    let note = file.gedcom.note(&"@N1@".into()).unwrap();
    assert_eq!(note.text.as_deref(), Some("caf\u{FFFD}"));
    assert!(file
        .diagnostics
        .iter()
        .any(|d| d.code.as_deref() == Some("non-ascii-byte")));
}

#[test]
fn test_utf8_bom_then_clean_parse() {
    let text = "0 HEAD\n1 GEDC\n2 VERS 5.5.1\n1 CHAR UTF-8\n0 TRLR\n";
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(text.as_bytes());

    let file = parse_gedcom(&bytes).unwrap();
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
}

#[test]
fn test_unrecognized_charset_still_loads() {
    let bytes = b"0 HEAD\n1 GEDC\n2 VERS 5.5.1\n1 CHAR IBMPC\n\
                  0 @I1@ INDI\n1 NAME X /Y/\n0 TRLR\n";

    let file = parse_gedcom(bytes).unwrap();
    assert!(file.gedcom.individual(&"@I1@".into()).is_some());
    assert!(file
        .diagnostics
        .iter()
        .any(|d| d.code.as_deref() == Some("unrecognized-charset")));
}
