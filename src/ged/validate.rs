//! Post-mapping validation
//!
//! Invariant checks that span multiple fields or records, run over the
//! finished graph. The mapper already warned about pointers to ids that were
//! never defined; this pass catches the subtler case where an id resolved to
//! a record of the wrong category (a family's HUSB pointing at a source, say)
//! and flags required-but-missing singular fields. It never mutates the model
//! and never fabricates values.
//!
//! Diagnostics carry no line numbers here — they describe whole records, not
//! source lines. Order is deterministic: header first, then submitters,
//! individuals, families, each table in key order.

use super::diagnostics::{Diagnostic, Severity};
use super::model::shared::{Citation, Note};
use super::model::{Gedcom, Xref};

pub fn validate(gedcom: &Gedcom) -> Vec<Diagnostic> {
    let mut report = Report::default();

    validate_header(gedcom, &mut report);
    for (xref, submitter) in &gedcom.submitters {
        if submitter.name.is_none() {
            report.warn(
                "missing-submitter-name",
                format!("Submitter {} has no name, which is required", xref),
            );
        }
    }
    for (xref, indi) in &gedcom.individuals {
        for link in &indi.child_of {
            report.check_family_link(gedcom, xref, "FAMC", link.family.as_ref());
        }
        for link in &indi.spouse_in {
            report.check_family_link(gedcom, xref, "FAMS", link.family.as_ref());
        }
        report.check_notes(gedcom, xref, &indi.notes);
        report.check_citations(gedcom, xref, &indi.citations);
        for event in &indi.events {
            report.check_notes(gedcom, xref, &event.notes);
            report.check_citations(gedcom, xref, &event.citations);
        }
    }
    for (xref, family) in &gedcom.families {
        report.check_member(gedcom, xref, "husband", family.husband.as_ref());
        report.check_member(gedcom, xref, "wife", family.wife.as_ref());
        for child in &family.children {
            report.check_member(gedcom, xref, "child", Some(child));
        }
        report.check_notes(gedcom, xref, &family.notes);
        report.check_citations(gedcom, xref, &family.citations);
        for event in &family.events {
            report.check_notes(gedcom, xref, &event.notes);
            report.check_citations(gedcom, xref, &event.citations);
        }
    }

    report.diagnostics
}

fn validate_header(gedcom: &Gedcom, report: &mut Report) {
    let header = &gedcom.header;
    if header
        .gedcom_version
        .as_ref()
        .and_then(|v| v.version.as_ref())
        .is_none()
    {
        report.warn(
            "missing-gedcom-version",
            "Header does not carry a GEDC version, which is required",
        );
    }
    if header.character_set.is_none() {
        report.warn(
            "missing-character-set",
            "Header does not declare a character set, which is required",
        );
    }
    if let Some(submitter) = &header.submitter {
        if gedcom.submitter(submitter).is_none() {
            report.warn(
                "dangling-submitter",
                format!(
                    "Header submitter {} does not resolve to a submitter record",
                    submitter
                ),
            );
        }
    }
}

#[derive(Default)]
struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    fn warn(&mut self, code: &str, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::new(Severity::Warning, None, message.into()).with_code(code));
    }

    /// A family member field must name an individual record.
    fn check_member(&mut self, gedcom: &Gedcom, family: &Xref, role: &str, member: Option<&Xref>) {
        if let Some(member) = member {
            if gedcom.individual(member).is_none() {
                self.warn(
                    "dangling-family-member",
                    format!(
                        "Family {} {} {} does not resolve to an individual record",
                        family, role, member
                    ),
                );
            }
        }
    }

    /// An individual's FAMC/FAMS link must name a family record.
    fn check_family_link(
        &mut self,
        gedcom: &Gedcom,
        individual: &Xref,
        kind: &str,
        family: Option<&Xref>,
    ) {
        if let Some(family) = family {
            if gedcom.family(family).is_none() {
                self.warn(
                    "dangling-family-link",
                    format!(
                        "Individual {} {} {} does not resolve to a family record",
                        individual, kind, family
                    ),
                );
            }
        }
    }

    fn check_notes(&mut self, gedcom: &Gedcom, owner: &Xref, notes: &[Note]) {
        for note in notes {
            if let Some(record) = &note.record {
                if gedcom.note(record).is_none() {
                    self.warn(
                        "dangling-note",
                        format!(
                            "Note {} on {} does not resolve to a note record",
                            record, owner
                        ),
                    );
                }
            }
        }
    }

    fn check_citations(&mut self, gedcom: &Gedcom, owner: &Xref, citations: &[Citation]) {
        for citation in citations {
            if let Some(source) = &citation.source {
                if gedcom.source(source).is_none() {
                    self.warn(
                        "dangling-citation",
                        format!(
                            "Citation {} on {} does not resolve to a source record",
                            source, owner
                        ),
                    );
                }
            }
        }
    }
}
