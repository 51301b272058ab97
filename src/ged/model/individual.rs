//! Individual record

use super::shared::{Citation, Event, Note, UserReference};
use super::{CustomTag, Gedcom, Xref};
use serde::{Deserialize, Serialize};

/// One `INDI` record.
///
/// Family relationships are stored as [Xref] keys and navigated through the
/// accessor methods taking `&Gedcom`; an individual never owns the families it
/// appears in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub xref: Xref,
    pub names: Vec<PersonalName>,
    pub sex: Option<String>,
    pub events: Vec<Event>,
    /// Families this individual is a child in (`FAMC`)
    pub child_of: Vec<FamilyChild>,
    /// Families this individual is a spouse in (`FAMS`)
    pub spouse_in: Vec<FamilySpouse>,
    /// `RESN` restriction notice
    pub restriction: Option<String>,
    pub user_references: Vec<UserReference>,
    /// `RIN` automated record id
    pub record_id: Option<String>,
    pub notes: Vec<Note>,
    pub citations: Vec<Citation>,
    pub custom: Vec<CustomTag>,
}

impl Individual {
    pub fn new(xref: Xref) -> Self {
        Individual {
            xref,
            names: Vec::new(),
            sex: None,
            events: Vec::new(),
            child_of: Vec::new(),
            spouse_in: Vec::new(),
            restriction: None,
            user_references: Vec::new(),
            record_id: None,
            notes: Vec::new(),
            citations: Vec::new(),
            custom: Vec::new(),
        }
    }

    /// Families where this individual appears as a child.
    pub fn families_as_child<'a>(
        &'a self,
        gedcom: &'a Gedcom,
    ) -> impl Iterator<Item = &'a super::Family> + 'a {
        self.child_of
            .iter()
            .filter_map(|link| link.family.as_ref())
            .filter_map(|xref| gedcom.family(xref))
    }

    /// Families where this individual appears as a spouse.
    pub fn families_as_spouse<'a>(
        &'a self,
        gedcom: &'a Gedcom,
    ) -> impl Iterator<Item = &'a super::Family> + 'a {
        self.spouse_in
            .iter()
            .filter_map(|link| link.family.as_ref())
            .filter_map(|xref| gedcom.family(xref))
    }
}

/// One `NAME` structure on an individual.
///
/// `basic` is the name line value as written (`John /Doe/`); the remaining
/// scalar parts come from the structured sub-tags when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonalName {
    pub basic: Option<String>,
    pub given: Option<String>,
    pub surname: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub nickname: Option<String>,
    pub surname_prefix: Option<String>,
    /// `FONE` phonetic variants, 5.5.1-only
    pub phonetic: Vec<NameVariant>,
    /// `ROMN` romanized variants, 5.5.1-only
    pub romanized: Vec<NameVariant>,
    pub notes: Vec<Note>,
    pub citations: Vec<Citation>,
    pub custom: Vec<CustomTag>,
}

impl PersonalName {
    /// The surname portion of `basic`, between the slashes.
    pub fn surname_from_basic(&self) -> Option<&str> {
        let basic = self.basic.as_deref()?;
        let start = basic.find('/')?;
        let end = basic[start + 1..].find('/')?;
        Some(&basic[start + 1..start + 1 + end])
    }
}

/// A phonetic or romanized rendition of a name, with its method (`TYPE`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NameVariant {
    pub value: Option<String>,
    pub variant_type: Option<String>,
    pub custom: Vec<CustomTag>,
}

/// `FAMC` child-to-family link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FamilyChild {
    /// Absent when the pointer did not resolve
    pub family: Option<Xref>,
    /// `PEDI` pedigree linkage type
    pub pedigree: Option<String>,
    /// `STAT` link status, 5.5.1-only
    pub status: Option<String>,
    pub notes: Vec<Note>,
    pub custom: Vec<CustomTag>,
}

/// `FAMS` spouse-to-family link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FamilySpouse {
    pub family: Option<Xref>,
    pub notes: Vec<Note>,
    pub custom: Vec<CustomTag>,
}
