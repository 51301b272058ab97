//! Source, submitter and note record mapping

use super::Mapper;
use crate::ged::model::{Gedcom, NoteRecord, Source, Submitter};
use crate::ged::parsing::NodeId;

impl<'a> Mapper<'a> {
    pub(crate) fn insert_source(&mut self, gedcom: &mut Gedcom, id: NodeId) {
        let Some(xref) = self.record_xref(gedcom, id, "SOUR") else {
            return;
        };
        let mut source = Source::new(xref.clone());

        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "TITL" => self.scalar(child, "source TITL", &mut source.title, &mut source.custom),
                "ABBR" => self.scalar(
                    child,
                    "source ABBR",
                    &mut source.abbreviation,
                    &mut source.custom,
                ),
                "AUTH" => self.scalar(child, "source AUTH", &mut source.author, &mut source.custom),
                "PUBL" => self.scalar(
                    child,
                    "source PUBL",
                    &mut source.publication,
                    &mut source.custom,
                ),
                "TEXT" => self.scalar(child, "source TEXT", &mut source.text, &mut source.custom),
                "REFN" => {
                    let user_ref = self.map_user_reference(child);
                    source.user_references.push(user_ref);
                }
                "RIN" => self.scalar(child, "RIN", &mut source.record_id, &mut source.custom),
                "NOTE" => {
                    let note = self.map_note(child);
                    source.notes.push(note);
                }
                _ => source.custom.push(self.custom_tag(child)),
            }
        }
        gedcom.sources.insert(xref, source);
    }

    pub(crate) fn insert_submitter(&mut self, gedcom: &mut Gedcom, id: NodeId) {
        let Some(xref) = self.record_xref(gedcom, id, "SUBM") else {
            return;
        };
        let mut submitter = Submitter::new(xref.clone());

        for child in self.children(id) {
            let line = self.node(child).line_num;
            match self.node(child).tag.as_str() {
                "NAME" => self.scalar(
                    child,
                    "submitter NAME",
                    &mut submitter.name,
                    &mut submitter.custom,
                ),
                "ADDR" => {
                    if submitter.address.is_some() {
                        self.warn_multiplicity(line, "submitter ADDR");
                    }
                    submitter.address = Some(self.map_address(child));
                }
                "PHON" => self.list_value(child, &mut submitter.phones, &mut submitter.custom),
                "EMAIL" => {
                    self.check_551_tag(child);
                    self.list_value(child, &mut submitter.emails, &mut submitter.custom);
                }
                "FAX" => {
                    self.check_551_tag(child);
                    self.list_value(child, &mut submitter.faxes, &mut submitter.custom);
                }
                "WWW" => {
                    self.check_551_tag(child);
                    self.list_value(child, &mut submitter.www, &mut submitter.custom);
                }
                "LANG" => self.list_value(child, &mut submitter.language, &mut submitter.custom),
                "REFN" => {
                    let user_ref = self.map_user_reference(child);
                    submitter.user_references.push(user_ref);
                }
                "RIN" => self.scalar(child, "RIN", &mut submitter.record_id, &mut submitter.custom),
                "NOTE" => {
                    let note = self.map_note(child);
                    submitter.notes.push(note);
                }
                _ => submitter.custom.push(self.custom_tag(child)),
            }
        }
        gedcom.submitters.insert(xref, submitter);
    }

    /// A top-level `NOTE` record; its text arrives fully folded from the tree
    /// builder.
    pub(crate) fn insert_note_record(&mut self, gedcom: &mut Gedcom, id: NodeId) {
        let Some(xref) = self.record_xref(gedcom, id, "NOTE") else {
            return;
        };
        let mut note = NoteRecord::new(xref.clone());
        note.text = self.node(id).value.clone();

        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "REFN" => {
                    let user_ref = self.map_user_reference(child);
                    note.user_references.push(user_ref);
                }
                "RIN" => self.scalar(child, "RIN", &mut note.record_id, &mut note.custom),
                _ => note.custom.push(self.custom_tag(child)),
            }
        }
        gedcom.notes.insert(xref, note);
    }
}
