//! In-Memory Person Store
//!
//! `PersonRegistry` owns the record list behind a single mutex and enforces
//! the registry invariants on every mutation. All operations are plain linear
//! scans; the collection is expected to stay small and no index is kept.

use std::sync::{Mutex, MutexGuard};

use super::error::RegistryError;
use super::types::{eq_fold, Person, PersonDraft};

pub struct PersonRegistry {
    people: Mutex<Vec<Person>>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self {
            people: Mutex::new(Vec::new()),
        }
    }

    fn people(&self) -> MutexGuard<'_, Vec<Person>> {
        // No code path panics while holding the guard, so a poisoned lock
        // still contains a consistent list.
        self.people.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// All records in insertion order. Always succeeds, may be empty.
    pub fn list_all(&self) -> Vec<Person> {
        self.people().clone()
    }

    /// The record carrying `code`. Codes are unique, so at most one match
    /// exists.
    pub fn get_by_code(&self, code: u64) -> Result<Person, RegistryError> {
        self.people()
            .iter()
            .find(|p| p.code == code)
            .cloned()
            .ok_or(RegistryError::NotFound(code))
    }

    /// All records whose region matches `region` case-insensitively.
    ///
    /// An empty match is an error, not an empty list; see
    /// [`RegistryError::NoRegionMatch`].
    pub fn list_by_region(&self, region: &str) -> Result<Vec<Person>, RegistryError> {
        let matches: Vec<Person> = self
            .people()
            .iter()
            .filter(|p| eq_fold(&p.region, region))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(RegistryError::NoRegionMatch(region.to_string()));
        }
        Ok(matches)
    }

    /// Validates the draft, assigns the next code and appends the record.
    pub fn create(&self, draft: PersonDraft) -> Result<Person, RegistryError> {
        let mut people = self.people();

        // The duplicate check runs before field validation: resubmitting an
        // existing record is reported as a duplicate even when its fields
        // would also fail the required-field check.
        if people.iter().any(|p| p.matches_triple(&draft)) {
            return Err(RegistryError::Duplicate);
        }
        draft.check_required()?;

        // Codes are handed out from the current list size. A delete followed
        // by a create can therefore mint a code that is still in use; kept
        // as-is to match the observable numbering of the original API.
        let person = draft.into_person(people.len() as u64 + 1);
        people.push(person.clone());
        Ok(person)
    }

    /// Overwrites every field of the record carrying `code` except the code
    /// itself.
    pub fn update(&self, code: u64, draft: PersonDraft) -> Result<Person, RegistryError> {
        let mut people = self.people();

        let index = people
            .iter()
            .position(|p| p.code == code)
            .ok_or(RegistryError::NotFound(code))?;

        // A record may keep its own triple; only a collision with a
        // different record is a duplicate.
        if people
            .iter()
            .any(|p| p.code != code && p.matches_triple(&draft))
        {
            return Err(RegistryError::Duplicate);
        }
        draft.check_required()?;

        let person = &mut people[index];
        person.name = draft.name;
        person.national_id = draft.national_id;
        person.region = draft.region;
        person.birth_date = draft.birth_date;
        Ok(person.clone())
    }

    /// Removes the record carrying `code`. Hard removal, no tombstone.
    pub fn delete(&self, code: u64) -> Result<(), RegistryError> {
        let mut people = self.people();

        let index = people
            .iter()
            .position(|p| p.code == code)
            .ok_or(RegistryError::NotFound(code))?;

        people.remove(index);
        Ok(())
    }
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new()
    }
}
