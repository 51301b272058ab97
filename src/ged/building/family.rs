//! Family record mapping

use super::Mapper;
use crate::ged::model::shared::EventKind;
use crate::ged::model::{Family, Gedcom};
use crate::ged::parsing::NodeId;

impl<'a> Mapper<'a> {
    pub(crate) fn insert_family(&mut self, gedcom: &mut Gedcom, id: NodeId) {
        let Some(xref) = self.record_xref(gedcom, id, "FAM") else {
            return;
        };
        let mut family = Family::new(xref.clone());

        for child in self.children(id) {
            let tag = self.node(child).tag.as_str();
            let line = self.node(child).line_num;
            match tag {
                "HUSB" => {
                    if family.husband.is_some() {
                        self.warn_multiplicity(line, "family HUSB");
                    }
                    family.husband = self.pointer(child, "HUSB");
                }
                "WIFE" => {
                    if family.wife.is_some() {
                        self.warn_multiplicity(line, "family WIFE");
                    }
                    family.wife = self.pointer(child, "WIFE");
                }
                "CHIL" => {
                    if let Some(xref) = self.pointer(child, "CHIL") {
                        family.children.push(xref);
                    }
                }
                "NCHI" => self.scalar(child, "NCHI", &mut family.num_children, &mut family.custom),
                "RESN" => {
                    self.warn_551(line, "a restriction notice on a family");
                    self.scalar(child, "family RESN", &mut family.restriction, &mut family.custom);
                }
                "REFN" => {
                    let user_ref = self.map_user_reference(child);
                    family.user_references.push(user_ref);
                }
                "RIN" => self.scalar(child, "RIN", &mut family.record_id, &mut family.custom),
                "NOTE" => {
                    let note = self.map_note(child);
                    family.notes.push(note);
                }
                "SOUR" => {
                    let citation = self.map_citation(child);
                    family.citations.push(citation);
                }
                _ if EventKind::from_tag(tag).map(|k| k.is_family_event()) == Some(true) => {
                    let event = self.map_event(child, true);
                    family.events.push(event);
                }
                _ => family.custom.push(self.custom_tag(child)),
            }
        }
        gedcom.families.insert(xref, family);
    }
}
