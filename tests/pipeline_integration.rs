//! Whole-pipeline behavior
//!
//! Determinism, envelope checks, and one sample touching every record
//! category at once.

use ged_parser::ged::testing::{parse_str, SampleBuilder};
use ged_parser::parse_gedcom;

fn kitchen_sink() -> String {
    SampleBuilder::new()
        .submitter("@U1@", "Test Submitter")
        .raw(
            "0 @I1@ INDI\n\
             1 NAME John /Doe/\n\
             2 GIVN John\n\
             2 SURN Doe\n\
             1 SEX M\n\
             1 BIRT\n\
             2 DATE 1 JAN 1900\n\
             2 PLAC Springfield\n\
             2 SOUR @S1@\n\
             3 PAGE p. 3\n\
             1 FAMS @F1@\n\
             1 NOTE @N1@\n\
             1 _UID 1234",
        )
        .individual("@I2@", "Jane /Roe/")
        .raw(
            "0 @F1@ FAM\n\
             1 HUSB @I1@\n\
             1 WIFE @I2@\n\
             1 MARR\n\
             2 DATE 1925",
        )
        .raw("0 @S1@ SOUR\n1 TITL County records\n1 AUTH Clerk")
        .raw("0 @N1@ NOTE A shared note\n1 CONT with two lines")
        .finish()
}

#[test]
fn test_kitchen_sink_loads_every_category() {
    let file = parse_str(&kitchen_sink());
    let gedcom = &file.gedcom;

    assert_eq!(gedcom.individuals.len(), 2);
    assert_eq!(gedcom.families.len(), 1);
    assert_eq!(gedcom.sources.len(), 1);
    assert_eq!(gedcom.submitters.len(), 1);
    assert_eq!(gedcom.notes.len(), 1);
    assert!(gedcom.header.gedcom_version.is_some());

    let indi = gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(indi.custom[0].tag, "_UID");
    assert_eq!(
        indi.notes[0].resolved_text(gedcom),
        Some("A shared note\nwith two lines")
    );
    assert!(file.is_clean(), "{:?}", file.diagnostics);
}

#[test]
fn test_parse_is_deterministic() {
    let source = kitchen_sink();
    let first = parse_str(&source);
    let second = parse_str(&source);

    assert_eq!(first.gedcom, second.gedcom);
    assert_eq!(first.diagnostics, second.diagnostics);
    // Serialized form is byte-identical too; the record tables are ordered.
    let a = serde_json::to_string(&first.gedcom).unwrap();
    let b = serde_json::to_string(&second.gedcom).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_missing_trailer_warns() {
    let source = "0 HEAD\n1 GEDC\n2 VERS 5.5.1\n1 CHAR UTF-8\n0 @I1@ INDI\n1 NAME X /Y/\n";
    let file = parse_str(source);

    assert!(file.gedcom.individual(&"@I1@".into()).is_some());
    assert!(file
        .diagnostics
        .iter()
        .any(|d| d.code.as_deref() == Some("missing-trailer")));
}

#[test]
fn test_missing_header_warns() {
    let file = parse_str("0 @I1@ INDI\n1 NAME X /Y/\n0 TRLR\n");

    assert!(file.gedcom.individual(&"@I1@".into()).is_some());
    let codes: Vec<_> = file
        .diagnostics
        .iter()
        .filter_map(|d| d.code.as_deref())
        .collect();
    assert!(codes.contains(&"missing-header"));
    // No header means no declared version and no charset; the validator
    // flags both.
    assert!(codes.contains(&"missing-gedcom-version"));
    assert!(codes.contains(&"missing-character-set"));
}

#[test]
fn test_diagnostics_accumulate_in_stage_order() {
    // "duplicate-xref" comes from index building, "dangling-family-link"
    // from the validator; their positions must reflect the stage order.
    let source = SampleBuilder::new()
        .individual("@I2@", "First /Copy/")
        .individual("@I2@", "Second /Copy/")
        .raw("0 @I1@ INDI\n1 NAME X /Y/\n1 FAMC @I2@")
        .finish();
    let file = parse_str(&source);

    let position = |code: &str| {
        file.diagnostics
            .iter()
            .position(|d| d.code.as_deref() == Some(code))
    };
    let index_stage = position("duplicate-xref").expect("no duplicate-xref");
    let validate_stage = position("dangling-family-link").expect("no dangling-family-link");
    assert!(index_stage < validate_stage, "{:?}", file.diagnostics);
}

#[test]
fn test_record_without_id_kept_as_custom() {
    let source = SampleBuilder::new().raw("0 INDI\n1 NAME Lost /Record/").finish();
    let file = parse_str(&source);

    assert!(file.gedcom.individuals.is_empty());
    assert_eq!(file.gedcom.custom.len(), 1);
    assert_eq!(file.gedcom.custom[0].tag, "INDI");
    assert!(file
        .diagnostics
        .iter()
        .any(|d| d.code.as_deref() == Some("missing-record-id")));
}

#[test]
fn test_fatal_errors_return_no_partial_model() {
    assert!(parse_gedcom(b"").is_err());
    assert!(parse_gedcom(b"0 HEAD\nnot a level\n").is_err());
}
