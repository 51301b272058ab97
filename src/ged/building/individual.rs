//! Individual record mapping

use super::Mapper;
use crate::ged::model::individual::{FamilyChild, FamilySpouse, Individual};
use crate::ged::model::shared::EventKind;
use crate::ged::model::{Gedcom, UserReference};
use crate::ged::parsing::NodeId;

impl<'a> Mapper<'a> {
    pub(crate) fn insert_individual(&mut self, gedcom: &mut Gedcom, id: NodeId) {
        let Some(xref) = self.record_xref(gedcom, id, "INDI") else {
            return;
        };
        let mut indi = Individual::new(xref.clone());

        for child in self.children(id) {
            let tag = self.node(child).tag.as_str();
            match tag {
                "NAME" => {
                    let name = self.map_personal_name(child);
                    indi.names.push(name);
                }
                "SEX" => self.scalar(child, "SEX", &mut indi.sex, &mut indi.custom),
                "FAMC" => {
                    let link = self.map_family_child(child);
                    indi.child_of.push(link);
                }
                "FAMS" => {
                    let link = self.map_family_spouse(child);
                    indi.spouse_in.push(link);
                }
                // RESN on the individual record itself is legal 5.5; only the
                // event-level notice is 5.5.1.
                "RESN" => self.scalar(child, "RESN", &mut indi.restriction, &mut indi.custom),
                "REFN" => {
                    let user_ref = self.map_user_reference(child);
                    indi.user_references.push(user_ref);
                }
                "RIN" => self.scalar(child, "RIN", &mut indi.record_id, &mut indi.custom),
                "NOTE" => {
                    let note = self.map_note(child);
                    indi.notes.push(note);
                }
                "SOUR" => {
                    let citation = self.map_citation(child);
                    indi.citations.push(citation);
                }
                _ if EventKind::from_tag(tag).is_some() => {
                    let event = self.map_event(child, false);
                    indi.events.push(event);
                }
                _ => indi.custom.push(self.custom_tag(child)),
            }
        }
        gedcom.individuals.insert(xref, indi);
    }

    fn map_family_child(&mut self, id: NodeId) -> FamilyChild {
        let mut link = FamilyChild {
            family: self.pointer(id, "FAMC"),
            ..Default::default()
        };
        for child in self.children(id) {
            let line = self.node(child).line_num;
            match self.node(child).tag.as_str() {
                "PEDI" => self.scalar(child, "FAMC PEDI", &mut link.pedigree, &mut link.custom),
                "STAT" => {
                    self.warn_551(line, "child-to-family link status");
                    self.scalar(child, "FAMC STAT", &mut link.status, &mut link.custom);
                }
                "NOTE" => {
                    let note = self.map_note(child);
                    link.notes.push(note);
                }
                _ => link.custom.push(self.custom_tag(child)),
            }
        }
        link
    }

    fn map_family_spouse(&mut self, id: NodeId) -> FamilySpouse {
        let mut link = FamilySpouse {
            family: self.pointer(id, "FAMS"),
            ..Default::default()
        };
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "NOTE" => {
                    let note = self.map_note(child);
                    link.notes.push(note);
                }
                _ => link.custom.push(self.custom_tag(child)),
            }
        }
        link
    }

    pub(crate) fn map_user_reference(&mut self, id: NodeId) -> UserReference {
        let mut user_ref = UserReference {
            value: self.node(id).value.clone(),
            ..Default::default()
        };
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "TYPE" => self.scalar(
                    child,
                    "REFN TYPE",
                    &mut user_ref.ref_type,
                    &mut user_ref.custom,
                ),
                _ => user_ref.custom.push(self.custom_tag(child)),
            }
        }
        user_ref
    }
}
