//! Registry Data Types
//!
//! Defines the person record as stored in the registry and the draft shape
//! accepted from clients. Both serialize with camelCase field names to match
//! the wire format of the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::RegistryError;

/// A person record as stored in the registry and returned to clients.
///
/// The `code` is assigned by the registry at creation time and is the only
/// immutable field; everything else can be rewritten by an update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub code: u64,
    pub name: String,
    pub national_id: String,
    pub region: String,
    pub birth_date: Option<NaiveDate>,
}

/// The request body for create and update: a person without a code.
///
/// Missing JSON fields deserialize to their defaults (empty string / `None`)
/// so that an absent required field surfaces as the registry's own
/// missing-field error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonDraft {
    pub name: String,
    pub national_id: String,
    pub region: String,
    pub birth_date: Option<NaiveDate>,
}

impl Person {
    /// True when this record carries the same case-insensitive
    /// (name, national id, region) triple as the draft.
    pub(crate) fn matches_triple(&self, draft: &PersonDraft) -> bool {
        eq_fold(&self.name, &draft.name)
            && eq_fold(&self.national_id, &draft.national_id)
            && eq_fold(&self.region, &draft.region)
    }
}

impl PersonDraft {
    pub(crate) fn check_required(&self) -> Result<(), RegistryError> {
        if self.name.is_empty() || self.national_id.is_empty() || self.region.is_empty() {
            return Err(RegistryError::MissingFields);
        }
        Ok(())
    }

    pub(crate) fn into_person(self, code: u64) -> Person {
        Person {
            code,
            name: self.name,
            national_id: self.national_id,
            region: self.region,
            birth_date: self.birth_date,
        }
    }
}

/// Case-insensitive comparison used for the duplicate triple and region
/// lookups. Full lowercase folding, not ASCII-only, since names and regions
/// may carry accented characters.
pub(crate) fn eq_fold(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
