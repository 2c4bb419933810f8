//! Patient directory: the in-memory table behind the portal "login".
//!
//! Lookup is a static ID match, no credentials. A missing ID is an
//! expected, recoverable outcome and surfaces as a [LookupError] value.

use std::collections::HashMap;
use std::fmt;

use bevy_ecs::prelude::Resource;

use crate::records::Patient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No patient record is linked to the given health ID.
    UnknownId(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownId(id) => {
                write!(f, "no patient record linked to health ID {id}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Keyed by normalized health ID.
#[derive(Debug, Default, Resource)]
pub struct PatientDirectory {
    patients: HashMap<String, Patient>,
}

impl PatientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_patients(patients: Vec<Patient>) -> Self {
        let mut directory = Self::new();
        for patient in patients {
            directory.insert(patient);
        }
        directory
    }

    pub fn insert(&mut self, patient: Patient) {
        self.patients
            .insert(normalize_id(&patient.health_id), patient);
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Looks up a raw user-entered ID. Input is normalized (trimmed,
    /// uppercased) before the match, mirroring what the portal form does.
    pub fn lookup(&self, raw_id: &str) -> Result<&Patient, LookupError> {
        let id = normalize_id(raw_id);
        self.patients
            .get(&id)
            .ok_or(LookupError::UnknownId(id))
    }
}

fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::demo::demo_patients;

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        let directory = PatientDirectory::from_patients(demo_patients());
        let patient = directory.lookup("  abha1234 ").expect("lookup");
        assert_eq!(patient.health_id, "ABHA1234");
        assert_eq!(patient.name, "Piyush Kumar");
    }

    #[test]
    fn unknown_id_is_an_expected_error() {
        let directory = PatientDirectory::from_patients(demo_patients());
        let err = directory.lookup("ABHA0000").expect_err("unknown id");
        assert_eq!(err, LookupError::UnknownId("ABHA0000".to_string()));
        assert!(err.to_string().contains("ABHA0000"));
    }

    #[test]
    fn inserting_same_id_replaces_entry() {
        let mut directory = PatientDirectory::from_patients(demo_patients());
        let mut replacement = demo_patients().remove(0);
        replacement.name = "Renamed".to_string();
        directory.insert(replacement);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.lookup("ABHA1234").expect("lookup").name, "Renamed");
    }
}
