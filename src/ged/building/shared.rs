//! Sub-mappers for structures shared across record contexts: events, places,
//! addresses, citations, notes and personal names.
//!
//! The event mapper follows the family-event grammar most closely, since that
//! is where the dialect differences concentrate (5.5.1 contact fields,
//! restriction notices, religious affiliation).

use super::Mapper;
use crate::ged::model::individual::{NameVariant, PersonalName};
use crate::ged::model::shared::{Address, Citation, Event, EventKind, Note, Place};
use crate::ged::parsing::NodeId;
use crate::ged::xref::is_pointer;

impl<'a> Mapper<'a> {
    /// Map one event subtree. `family_context` selects the family-event
    /// grammar (HUSB/WIFE ages, 5.5.1 gating of religious affiliation).
    pub(crate) fn map_event(&mut self, id: NodeId, family_context: bool) -> Event {
        let node = self.node(id);
        let mut event = Event::new(EventKind::from_tag(&node.tag));

        // The event line value must be "Y" or absent; anything else is a
        // description in the wild and kept, with a warning.
        match node.value.as_deref() {
            Some("Y") => event.y_flag = true,
            None => {}
            Some(text) if text.trim().is_empty() => {}
            Some(text) => {
                event.description = Some(text.to_string());
                self.sink.warn(
                    node.line_num,
                    "event-description",
                    format!(
                        "{} had a description rather than [Y|<NULL>], which violates the standard",
                        node.tag
                    ),
                );
            }
        }

        for child in self.children(id) {
            let tag = self.node(child).tag.as_str();
            let line = self.node(child).line_num;
            match tag {
                "TYPE" => self.scalar(child, "event TYPE", &mut event.subtype, &mut event.custom),
                "DATE" => self.scalar(child, "event DATE", &mut event.date, &mut event.custom),
                "PLAC" => {
                    if event.place.is_some() {
                        self.warn_multiplicity(line, "event PLAC");
                    }
                    event.place = Some(self.map_place(child));
                }
                "ADDR" => {
                    if event.address.is_some() {
                        self.warn_multiplicity(line, "event ADDR");
                    }
                    event.address = Some(self.map_address(child));
                }
                "AGE" => self.scalar(child, "event AGE", &mut event.age, &mut event.custom),
                "HUSB" if family_context => {
                    self.map_spouse_age(child, &mut event.husband_age, &mut event.custom)
                }
                "WIFE" if family_context => {
                    self.map_spouse_age(child, &mut event.wife_age, &mut event.custom)
                }
                "CAUS" => self.scalar(child, "event CAUS", &mut event.cause, &mut event.custom),
                "AGNC" => self.scalar(child, "event AGNC", &mut event.agency, &mut event.custom),
                "RELI" => {
                    if family_context {
                        self.warn_551(line, "religious affiliation on a family event");
                    }
                    self.scalar(child, "event RELI", &mut event.religion, &mut event.custom);
                }
                "RESN" => {
                    self.warn_551(line, "a restriction notice on an event");
                    self.scalar(child, "event RESN", &mut event.restriction, &mut event.custom);
                }
                "PHON" => self.list_value(child, &mut event.phones, &mut event.custom),
                "EMAIL" => {
                    self.check_551_tag(child);
                    self.list_value(child, &mut event.emails, &mut event.custom);
                }
                "FAX" => {
                    self.check_551_tag(child);
                    self.list_value(child, &mut event.faxes, &mut event.custom);
                }
                "WWW" => {
                    self.check_551_tag(child);
                    self.list_value(child, &mut event.www, &mut event.custom);
                }
                "NOTE" => {
                    let note = self.map_note(child);
                    event.notes.push(note);
                }
                "SOUR" => {
                    let citation = self.map_citation(child);
                    event.citations.push(citation);
                }
                _ => event.custom.push(self.custom_tag(child)),
            }
        }
        event
    }

    /// `HUSB`/`WIFE` under a family event carry only an `AGE` child.
    fn map_spouse_age(
        &mut self,
        id: NodeId,
        slot: &mut Option<String>,
        custom: &mut Vec<crate::ged::model::CustomTag>,
    ) {
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "AGE" => self.scalar(child, "spouse AGE", slot, custom),
                _ => custom.push(self.custom_tag(child)),
            }
        }
    }

    pub(crate) fn map_place(&mut self, id: NodeId) -> Place {
        let mut place = Place {
            name: self.node(id).value.clone(),
            ..Default::default()
        };
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "MAP" => {
                    self.check_551_tag(child);
                    for coord in self.children(child) {
                        match self.node(coord).tag.as_str() {
                            "LATI" => self.scalar(
                                coord,
                                "place LATI",
                                &mut place.latitude,
                                &mut place.custom,
                            ),
                            "LONG" => self.scalar(
                                coord,
                                "place LONG",
                                &mut place.longitude,
                                &mut place.custom,
                            ),
                            _ => place.custom.push(self.custom_tag(coord)),
                        }
                    }
                }
                "NOTE" => {
                    let note = self.map_note(child);
                    place.notes.push(note);
                }
                _ => place.custom.push(self.custom_tag(child)),
            }
        }
        place
    }

    pub(crate) fn map_address(&mut self, id: NodeId) -> Address {
        let mut address = Address {
            value: self.node(id).value.clone(),
            ..Default::default()
        };
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "ADR1" => self.scalar(child, "ADR1", &mut address.addr1, &mut address.custom),
                "ADR2" => self.scalar(child, "ADR2", &mut address.addr2, &mut address.custom),
                "CITY" => self.scalar(child, "CITY", &mut address.city, &mut address.custom),
                "STAE" => self.scalar(child, "STAE", &mut address.state, &mut address.custom),
                "POST" => {
                    self.scalar(child, "POST", &mut address.postal_code, &mut address.custom)
                }
                "CTRY" => self.scalar(child, "CTRY", &mut address.country, &mut address.custom),
                _ => address.custom.push(self.custom_tag(child)),
            }
        }
        address
    }

    /// A note sub-structure: a pointer to a shared note record, or inline
    /// (already folded) text.
    pub(crate) fn map_note(&mut self, id: NodeId) -> Note {
        let node = self.node(id);
        let mut note = Note::default();
        match node.value.as_deref() {
            Some(value) if is_pointer(value) => {
                note.record = self.pointer(id, "NOTE");
            }
            value => note.text = value.map(str::to_string),
        }
        self.sweep_children(id, &mut note.custom);
        note
    }

    /// A source citation: pointer form or inline description form.
    pub(crate) fn map_citation(&mut self, id: NodeId) -> Citation {
        let node = self.node(id);
        let mut citation = Citation::default();
        match node.value.as_deref() {
            Some(value) if is_pointer(value) => {
                citation.source = self.pointer(id, "SOUR citation");
            }
            value => citation.description = value.map(str::to_string),
        }
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "PAGE" => self.scalar(
                    child,
                    "citation PAGE",
                    &mut citation.page,
                    &mut citation.custom,
                ),
                "QUAY" => self.scalar(
                    child,
                    "citation QUAY",
                    &mut citation.quality,
                    &mut citation.custom,
                ),
                "NOTE" => {
                    let note = self.map_note(child);
                    citation.notes.push(note);
                }
                _ => citation.custom.push(self.custom_tag(child)),
            }
        }
        citation
    }

    pub(crate) fn map_personal_name(&mut self, id: NodeId) -> PersonalName {
        let mut name = PersonalName {
            basic: self.node(id).value.clone(),
            ..Default::default()
        };
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "GIVN" => self.scalar(child, "GIVN", &mut name.given, &mut name.custom),
                "SURN" => self.scalar(child, "SURN", &mut name.surname, &mut name.custom),
                "NPFX" => self.scalar(child, "NPFX", &mut name.prefix, &mut name.custom),
                "NSFX" => self.scalar(child, "NSFX", &mut name.suffix, &mut name.custom),
                "NICK" => self.scalar(child, "NICK", &mut name.nickname, &mut name.custom),
                "SPFX" => {
                    self.scalar(child, "SPFX", &mut name.surname_prefix, &mut name.custom)
                }
                "FONE" => {
                    self.check_551_tag(child);
                    let variant = self.map_name_variant(child);
                    name.phonetic.push(variant);
                }
                "ROMN" => {
                    self.check_551_tag(child);
                    let variant = self.map_name_variant(child);
                    name.romanized.push(variant);
                }
                "NOTE" => {
                    let note = self.map_note(child);
                    name.notes.push(note);
                }
                "SOUR" => {
                    let citation = self.map_citation(child);
                    name.citations.push(citation);
                }
                _ => name.custom.push(self.custom_tag(child)),
            }
        }
        name
    }

    fn map_name_variant(&mut self, id: NodeId) -> NameVariant {
        let mut variant = NameVariant {
            value: self.node(id).value.clone(),
            ..Default::default()
        };
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "TYPE" => self.scalar(
                    child,
                    "name variant TYPE",
                    &mut variant.variant_type,
                    &mut variant.custom,
                ),
                _ => variant.custom.push(self.custom_tag(child)),
            }
        }
        variant
    }
}
