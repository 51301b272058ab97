//! Header mapping

use super::Mapper;
use crate::ged::model::header::{CharacterSet, GedcomVersion, Header, SourceSystem};
use crate::ged::parsing::NodeId;

impl<'a> Mapper<'a> {
    pub(crate) fn map_header(&mut self, id: NodeId) -> Header {
        let mut header = Header::default();
        for child in self.children(id) {
            let line = self.node(child).line_num;
            match self.node(child).tag.as_str() {
                "SOUR" => {
                    if header.source.is_some() {
                        self.warn_multiplicity(line, "header SOUR");
                    }
                    header.source = Some(self.map_source_system(child));
                }
                "DEST" => self.scalar(
                    child,
                    "header DEST",
                    &mut header.destination,
                    &mut header.custom,
                ),
                "DATE" => self.map_header_date(child, &mut header),
                "SUBM" => {
                    if header.submitter.is_some() {
                        self.warn_multiplicity(line, "header SUBM");
                    }
                    header.submitter = self.pointer(child, "header SUBM");
                }
                "FILE" => self.scalar(
                    child,
                    "header FILE",
                    &mut header.file_name,
                    &mut header.custom,
                ),
                "COPR" => self.scalar(
                    child,
                    "header COPR",
                    &mut header.copyright,
                    &mut header.custom,
                ),
                "GEDC" => {
                    if header.gedcom_version.is_some() {
                        self.warn_multiplicity(line, "header GEDC");
                    }
                    header.gedcom_version = Some(self.map_gedcom_version(child));
                }
                "CHAR" => {
                    if header.character_set.is_some() {
                        self.warn_multiplicity(line, "header CHAR");
                    }
                    header.character_set = Some(self.map_character_set(child));
                }
                "LANG" => self.scalar(
                    child,
                    "header LANG",
                    &mut header.language,
                    &mut header.custom,
                ),
                "NOTE" => {
                    let note = self.map_note(child);
                    header.notes.push(note);
                }
                _ => header.custom.push(self.custom_tag(child)),
            }
        }
        header
    }

    /// `HEAD.DATE` carries the optional `TIME` as a child.
    fn map_header_date(&mut self, id: NodeId, header: &mut Header) {
        if header.date.is_some() {
            self.warn_multiplicity(self.node(id).line_num, "header DATE");
        }
        header.date = self.node(id).value.clone();
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "TIME" => self.scalar(child, "header TIME", &mut header.time, &mut header.custom),
                _ => header.custom.push(self.custom_tag(child)),
            }
        }
    }

    fn map_source_system(&mut self, id: NodeId) -> SourceSystem {
        let mut system = SourceSystem {
            system_id: self.node(id).value.clone(),
            ..Default::default()
        };
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "VERS" => self.scalar(child, "system VERS", &mut system.version, &mut system.custom),
                "NAME" => self.scalar(
                    child,
                    "system NAME",
                    &mut system.product_name,
                    &mut system.custom,
                ),
                "CORP" => self.scalar(
                    child,
                    "system CORP",
                    &mut system.corporation,
                    &mut system.custom,
                ),
                _ => system.custom.push(self.custom_tag(child)),
            }
        }
        system
    }

    fn map_gedcom_version(&mut self, id: NodeId) -> GedcomVersion {
        let mut version = GedcomVersion::default();
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "VERS" => self.scalar(child, "GEDC VERS", &mut version.version, &mut version.custom),
                "FORM" => self.scalar(child, "GEDC FORM", &mut version.form, &mut version.custom),
                _ => version.custom.push(self.custom_tag(child)),
            }
        }
        version
    }

    fn map_character_set(&mut self, id: NodeId) -> CharacterSet {
        let mut charset = CharacterSet {
            value: self.node(id).value.clone(),
            ..Default::default()
        };
        for child in self.children(id) {
            match self.node(child).tag.as_str() {
                "VERS" => self.scalar(child, "CHAR VERS", &mut charset.version, &mut charset.custom),
                _ => charset.custom.push(self.custom_tag(child)),
            }
        }
        charset
    }
}
