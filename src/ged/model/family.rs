//! Family record

use super::shared::{Citation, Event, Note, UserReference};
use super::{CustomTag, Gedcom, Individual, Xref};
use serde::{Deserialize, Serialize};

/// One `FAM` record.
///
/// Member fields hold [Xref] keys into the root aggregate's individual table;
/// the accessor methods resolve them. A key that pointed at a record missing
/// from the file is simply absent (the mapper warned when it failed to
/// resolve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub xref: Xref,
    pub husband: Option<Xref>,
    pub wife: Option<Xref>,
    /// Children in source order
    pub children: Vec<Xref>,
    pub events: Vec<Event>,
    /// `NCHI` reported number of children
    pub num_children: Option<String>,
    /// `RESN` restriction notice, 5.5.1-only on families
    pub restriction: Option<String>,
    pub user_references: Vec<UserReference>,
    /// `RIN` automated record id
    pub record_id: Option<String>,
    pub notes: Vec<Note>,
    pub citations: Vec<Citation>,
    pub custom: Vec<CustomTag>,
}

impl Family {
    pub fn new(xref: Xref) -> Self {
        Family {
            xref,
            husband: None,
            wife: None,
            children: Vec::new(),
            events: Vec::new(),
            num_children: None,
            restriction: None,
            user_references: Vec::new(),
            record_id: None,
            notes: Vec::new(),
            citations: Vec::new(),
            custom: Vec::new(),
        }
    }

    pub fn husband_record<'a>(&self, gedcom: &'a Gedcom) -> Option<&'a Individual> {
        self.husband.as_ref().and_then(|x| gedcom.individual(x))
    }

    pub fn wife_record<'a>(&self, gedcom: &'a Gedcom) -> Option<&'a Individual> {
        self.wife.as_ref().and_then(|x| gedcom.individual(x))
    }

    /// Child records that resolve, in source order.
    pub fn child_records<'a>(
        &'a self,
        gedcom: &'a Gedcom,
    ) -> impl Iterator<Item = &'a Individual> + 'a {
        self.children.iter().filter_map(|x| gedcom.individual(x))
    }
}
