//! Structures shared across record types: events, places, addresses,
//! citations, note references and user reference numbers.
//!
//! Field sets follow what the 5.5/5.5.1 grammars actually allow on each
//! structure; 5.5.1-only fields are still plain fields here — the dialect gate
//! lives in the mapper, not the model.

use super::{CustomTag, Xref};
use serde::{Deserialize, Serialize};

/// The closed set of event tags, with a catch-all for the generic `EVEN`
/// carrying a classification of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    // Individual events
    Adoption,
    Baptism,
    BarMitzvah,
    BasMitzvah,
    Birth,
    Burial,
    Census,
    Christening,
    AdultChristening,
    Confirmation,
    Cremation,
    Death,
    Emigration,
    FirstCommunion,
    Graduation,
    Immigration,
    Naturalization,
    Ordination,
    Probate,
    Residence,
    Retirement,
    Will,
    // Family events
    Annulment,
    Divorce,
    DivorceFiled,
    Engagement,
    Marriage,
    MarriageBanns,
    MarriageContract,
    MarriageLicense,
    MarriageSettlement,
    /// Generic `EVEN`
    Generic,
}

impl EventKind {
    /// Map an event tag to its kind. Returns `None` for non-event tags.
    pub fn from_tag(tag: &str) -> Option<EventKind> {
        let kind = match tag {
            "ADOP" => EventKind::Adoption,
            "BAPM" => EventKind::Baptism,
            "BARM" => EventKind::BarMitzvah,
            "BASM" => EventKind::BasMitzvah,
            "BIRT" => EventKind::Birth,
            "BURI" => EventKind::Burial,
            "CENS" => EventKind::Census,
            "CHR" => EventKind::Christening,
            "CHRA" => EventKind::AdultChristening,
            "CONF" => EventKind::Confirmation,
            "CREM" => EventKind::Cremation,
            "DEAT" => EventKind::Death,
            "EMIG" => EventKind::Emigration,
            "FCOM" => EventKind::FirstCommunion,
            "GRAD" => EventKind::Graduation,
            "IMMI" => EventKind::Immigration,
            "NATU" => EventKind::Naturalization,
            "ORDN" => EventKind::Ordination,
            "PROB" => EventKind::Probate,
            "RESI" => EventKind::Residence,
            "RETI" => EventKind::Retirement,
            "WILL" => EventKind::Will,
            "ANUL" => EventKind::Annulment,
            "DIV" => EventKind::Divorce,
            "DIVF" => EventKind::DivorceFiled,
            "ENGA" => EventKind::Engagement,
            "MARR" => EventKind::Marriage,
            "MARB" => EventKind::MarriageBanns,
            "MARC" => EventKind::MarriageContract,
            "MARL" => EventKind::MarriageLicense,
            "MARS" => EventKind::MarriageSettlement,
            "EVEN" => EventKind::Generic,
            _ => return None,
        };
        Some(kind)
    }

    /// True for kinds that can appear on a family record.
    pub fn is_family_event(&self) -> bool {
        matches!(
            self,
            EventKind::Annulment
                | EventKind::Census
                | EventKind::Divorce
                | EventKind::DivorceFiled
                | EventKind::Engagement
                | EventKind::Marriage
                | EventKind::MarriageBanns
                | EventKind::MarriageContract
                | EventKind::MarriageLicense
                | EventKind::MarriageSettlement
                | EventKind::Generic
        )
    }
}

/// One event on an individual or family.
///
/// The line value of an event tag is supposed to be `Y` or nothing; files that
/// put a description there instead get it preserved in `description` plus a
/// structural warning from the mapper.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    pub kind: Option<EventKind>,
    /// `Y` confirmation flag from the event line itself
    pub y_flag: bool,
    /// Non-standard description found on the event line
    pub description: Option<String>,
    /// `TYPE` classification
    pub subtype: Option<String>,
    pub date: Option<String>,
    pub place: Option<Place>,
    pub address: Option<Address>,
    pub age: Option<String>,
    /// `HUSB.AGE` on family events
    pub husband_age: Option<String>,
    /// `WIFE.AGE` on family events
    pub wife_age: Option<String>,
    pub cause: Option<String>,
    /// Responsible agency (`AGNC`)
    pub agency: Option<String>,
    /// Religious affiliation; 5.5.1-only on family events
    pub religion: Option<String>,
    /// Restriction notice; 5.5.1-only on events
    pub restriction: Option<String>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub faxes: Vec<String>,
    pub www: Vec<String>,
    pub notes: Vec<Note>,
    pub citations: Vec<Citation>,
    pub custom: Vec<CustomTag>,
}

impl Event {
    pub fn new(kind: Option<EventKind>) -> Self {
        Event {
            kind,
            ..Default::default()
        }
    }
}

/// A place name, with the optional 5.5.1 coordinate pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Place {
    pub name: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub notes: Vec<Note>,
    pub custom: Vec<CustomTag>,
}

/// A mailing address: the free-form lines plus the structured 5.5 fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    /// The folded `ADDR`/`CONT` value, line breaks preserved
    pub value: Option<String>,
    pub addr1: Option<String>,
    pub addr2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub custom: Vec<CustomTag>,
}

/// A source citation: either a pointer to a [Source](super::Source) record or
/// an inline description, per the two forms the format allows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Citation {
    pub source: Option<Xref>,
    pub description: Option<String>,
    /// `PAGE` — where within the source
    pub page: Option<String>,
    /// `QUAY` — certainty assessment, 0..=3 by convention
    pub quality: Option<String>,
    pub notes: Vec<Note>,
    pub custom: Vec<CustomTag>,
}

/// A note attached to a record: a pointer to a shared
/// [NoteRecord](super::NoteRecord) or inline (already folded) text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Note {
    pub record: Option<Xref>,
    pub text: Option<String>,
    pub custom: Vec<CustomTag>,
}

impl Note {
    /// The note text, following the pointer through `gedcom` if needed.
    pub fn resolved_text<'a>(&'a self, gedcom: &'a super::Gedcom) -> Option<&'a str> {
        match &self.record {
            Some(xref) => gedcom.note(xref).and_then(|n| n.text.as_deref()),
            None => self.text.as_deref(),
        }
    }
}

/// `REFN` user reference number with its optional `TYPE`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserReference {
    pub value: Option<String>,
    pub ref_type: Option<String>,
    pub custom: Vec<CustomTag>,
}
