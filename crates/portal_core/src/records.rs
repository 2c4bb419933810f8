//! Patient health records: demographics, vitals, and medical history.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Category of a medical record entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    LabReport,
    Prescription,
    Diagnosis,
    TestResult,
}

/// Severity flag attached to a record entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordFlag {
    Normal,
    Critical,
    Attention,
    Info,
}

/// One entry in a patient's medical history. Dates and measurements are
/// kept as display strings; this is demo data, not a clinical format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    pub kind: RecordKind,
    pub date: String,
    pub doctor: String,
    pub hospital: String,
    pub summary: String,
    pub flag: RecordFlag,
}

/// Most recent vitals snapshot shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub heart_rate: String,
    pub blood_pressure: String,
    pub weight: String,
    pub height: String,
    pub last_checkup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub health_id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub blood_group: String,
    pub emergency_contact: String,
    pub allergies: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub records: Vec<MedicalRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitals: Option<Vitals>,
}

impl Patient {
    /// The `n` most recent entries, assuming records are stored newest-first.
    pub fn recent_records(&self, n: usize) -> &[MedicalRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Entries flagged `Critical`.
    pub fn critical_records(&self) -> impl Iterator<Item = &MedicalRecord> {
        self.records
            .iter()
            .filter(|r| r.flag == RecordFlag::Critical)
    }
}
