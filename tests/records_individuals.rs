//! Integration tests for individual record mapping
//!
//! Built on SampleBuilder sources so every test exercises a well-formed
//! header/trailer envelope; the record under test is the only variable.

use ged_parser::ged::model::shared::EventKind;
use ged_parser::ged::testing::{parse_str, SampleBuilder};

#[test]
fn test_minimal_individual() {
    let source = SampleBuilder::new().individual("@I1@", "John /Doe/").finish();
    let file = parse_str(&source);

    let indi = file
        .gedcom
        .individual(&"@I1@".into())
        .expect("individual not mapped");
    assert_eq!(indi.names.len(), 1);
    assert_eq!(indi.names[0].basic.as_deref(), Some("John /Doe/"));
    assert_eq!(indi.names[0].surname_from_basic(), Some("Doe"));
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
}

#[test]
fn test_structured_name_parts() {
    let source = SampleBuilder::new()
        .raw(
            "0 @I1@ INDI\n\
             1 NAME John /Doe/ Jr.\n\
             2 GIVN John\n\
             2 SURN Doe\n\
             2 NSFX Jr.\n\
             2 NICK Johnny",
        )
        .finish();
    let file = parse_str(&source);

    let name = &file.gedcom.individual(&"@I1@".into()).unwrap().names[0];
    assert_eq!(name.given.as_deref(), Some("John"));
    assert_eq!(name.surname.as_deref(), Some("Doe"));
    assert_eq!(name.suffix.as_deref(), Some("Jr."));
    assert_eq!(name.nickname.as_deref(), Some("Johnny"));
}

#[test]
fn test_sex_and_birth_event() {
    let source = SampleBuilder::new()
        .raw(
            "0 @I1@ INDI\n\
             1 NAME Jane /Roe/\n\
             1 SEX F\n\
             1 BIRT\n\
             2 DATE 12 JAN 1901\n\
             2 PLAC Springfield, Ohio\n\
             1 DEAT Y",
        )
        .finish();
    let file = parse_str(&source);

    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(indi.sex.as_deref(), Some("F"));
    assert_eq!(indi.events.len(), 2);

    let birth = &indi.events[0];
    assert_eq!(birth.kind, Some(EventKind::Birth));
    assert_eq!(birth.date.as_deref(), Some("12 JAN 1901"));
    assert_eq!(
        birth.place.as_ref().and_then(|p| p.name.as_deref()),
        Some("Springfield, Ohio")
    );

    let death = &indi.events[1];
    assert_eq!(death.kind, Some(EventKind::Death));
    assert!(death.y_flag);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
}

#[test]
fn test_event_with_description_violates_standard() {
    let source = SampleBuilder::new()
        .raw("0 @I1@ INDI\n1 NAME X /Y/\n1 DEAT of old age")
        .finish();
    let file = parse_str(&source);

    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(indi.events[0].description.as_deref(), Some("of old age"));
    assert!(!indi.events[0].y_flag);
    let warnings: Vec<_> = file
        .diagnostics
        .iter()
        .filter(|d| d.code.as_deref() == Some("event-description"))
        .collect();
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_duplicate_singular_field_keeps_last() {
    let source = SampleBuilder::new()
        .raw("0 @I1@ INDI\n1 NAME X /Y/\n1 SEX M\n1 SEX F")
        .finish();
    let file = parse_str(&source);

    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(indi.sex.as_deref(), Some("F"));
    let warnings: Vec<_> = file
        .diagnostics
        .iter()
        .filter(|d| d.code.as_deref() == Some("multiplicity"))
        .collect();
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_family_links_resolve() {
    let source = SampleBuilder::new()
        .individual("@I1@", "Child /Doe/")
        .family("@F1@", Some("@I2@"), None, &["@I1@"])
        .individual("@I2@", "Father /Doe/")
        .raw("0 @I3@ INDI\n1 NAME Linked /Doe/\n1 FAMC @F1@\n2 PEDI birth\n1 FAMS @F1@")
        .finish();
    let file = parse_str(&source);

    let indi = file.gedcom.individual(&"@I3@".into()).unwrap();
    assert_eq!(indi.child_of.len(), 1);
    assert_eq!(indi.child_of[0].pedigree.as_deref(), Some("birth"));
    let families: Vec<_> = indi.families_as_child(&file.gedcom).collect();
    assert_eq!(families.len(), 1);
    assert_eq!(families[0].xref.as_str(), "@F1@");
    let spouse_in: Vec<_> = indi.families_as_spouse(&file.gedcom).collect();
    assert_eq!(spouse_in.len(), 1);
}

#[test]
fn test_individual_notes_inline_and_pointer() {
    let source = SampleBuilder::new()
        .raw("0 @I1@ INDI\n1 NAME X /Y/\n1 NOTE inline text\n1 NOTE @N1@")
        .raw("0 @N1@ NOTE shared text")
        .finish();
    let file = parse_str(&source);

    let gedcom = &file.gedcom;
    let indi = gedcom.individual(&"@I1@".into()).unwrap();
    assert_eq!(indi.notes.len(), 2);
    assert_eq!(indi.notes[0].resolved_text(gedcom), Some("inline text"));
    assert_eq!(indi.notes[1].resolved_text(gedcom), Some("shared text"));
    assert_eq!(indi.notes[1].record.as_ref().map(|x| x.as_str()), Some("@N1@"));
}

#[test]
fn test_citation_with_page_and_quality() {
    let source = SampleBuilder::new()
        .raw("0 @S1@ SOUR\n1 TITL Parish register")
        .raw(
            "0 @I1@ INDI\n\
             1 NAME X /Y/\n\
             1 SOUR @S1@\n\
             2 PAGE p. 14\n\
             2 QUAY 3",
        )
        .finish();
    let file = parse_str(&source);

    let indi = file.gedcom.individual(&"@I1@".into()).unwrap();
    let citation = &indi.citations[0];
    assert_eq!(citation.source.as_ref().map(|x| x.as_str()), Some("@S1@"));
    assert_eq!(citation.page.as_deref(), Some("p. 14"));
    assert_eq!(citation.quality.as_deref(), Some("3"));
    assert_eq!(
        file.gedcom
            .source(citation.source.as_ref().unwrap())
            .and_then(|s| s.title.as_deref()),
        Some("Parish register")
    );
}
