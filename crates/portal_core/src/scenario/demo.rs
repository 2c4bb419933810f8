//! Canonical demo fixtures: the five-unit fleet and two linked patients.

use crate::fleet::{Ambulance, Capability, UnitStatus};
use crate::grid::Coordinate;
use crate::records::{
    Gender, MedicalRecord, Patient, RecordFlag, RecordKind, Vitals,
};

fn unit(
    id: &str,
    operator: &str,
    plate: &str,
    x: f64,
    y: f64,
    status: UnitStatus,
    capability: Capability,
) -> Ambulance {
    Ambulance {
        id: id.to_string(),
        operator: operator.to_string(),
        plate: plate.to_string(),
        location: Coordinate::new(x, y),
        status,
        capability,
        distance_km: None,
        eta_minutes: None,
    }
}

/// The demo fleet. AMB-05 sits two cells off the requester's default
/// position, AMB-04 is on a job.
pub fn demo_roster() -> Vec<Ambulance> {
    use Capability::{Advanced, Basic};
    use UnitStatus::{Available, Busy};

    vec![
        unit("AMB-01", "Ramesh Singh", "RJ-14-GA-1234", 10.0, 10.0, Available, Basic),
        unit("AMB-02", "Suresh Patel", "RJ-14-GA-5678", 45.0, 55.0, Available, Advanced),
        unit("AMB-03", "Mahesh Verma", "RJ-14-GA-9012", 80.0, 20.0, Available, Basic),
        unit("AMB-04", "Dinesh Kumar", "RJ-14-GA-3456", 60.0, 80.0, Busy, Advanced),
        unit("AMB-05", "Rajesh Koothrappali", "RJ-14-GA-7890", 48.0, 52.0, Available, Advanced),
    ]
}

fn record(
    id: &str,
    kind: RecordKind,
    date: &str,
    doctor: &str,
    hospital: &str,
    summary: &str,
    flag: RecordFlag,
) -> MedicalRecord {
    MedicalRecord {
        id: id.to_string(),
        kind,
        date: date.to_string(),
        doctor: doctor.to_string(),
        hospital: hospital.to_string(),
        summary: summary.to_string(),
        flag,
    }
}

/// The two demo patients reachable from the login form.
pub fn demo_patients() -> Vec<Patient> {
    vec![
        Patient {
            health_id: "ABHA1234".to_string(),
            name: "Piyush Kumar".to_string(),
            age: 24,
            gender: Gender::Male,
            blood_group: "O+".to_string(),
            emergency_contact: "+91 98765 43210".to_string(),
            allergies: vec!["Penicillin".to_string()],
            chronic_conditions: vec!["None".to_string()],
            vitals: Some(Vitals {
                heart_rate: "72 bpm".to_string(),
                blood_pressure: "120/80".to_string(),
                weight: "70 kg".to_string(),
                height: "175 cm".to_string(),
                last_checkup: "15 Oct 2023".to_string(),
            }),
            records: vec![
                record(
                    "REC-001",
                    RecordKind::Diagnosis,
                    "2023-10-15",
                    "Dr. Sharma",
                    "City General Hospital",
                    "Viral Fever - Prescribed Antipyretics",
                    RecordFlag::Info,
                ),
                record(
                    "REC-002",
                    RecordKind::LabReport,
                    "2023-10-15",
                    "Lab Technician",
                    "City General Hospital",
                    "CBC - Platelet count normal",
                    RecordFlag::Normal,
                ),
                record(
                    "REC-003",
                    RecordKind::Prescription,
                    "2023-08-01",
                    "Dr. Gupta",
                    "Apollo Clinic",
                    "Multivitamins and Calcium supplements",
                    RecordFlag::Info,
                ),
            ],
        },
        Patient {
            health_id: "ABHA5678".to_string(),
            name: "Abhishek Kumar Gupta".to_string(),
            age: 28,
            gender: Gender::Male,
            blood_group: "B+".to_string(),
            emergency_contact: "+91 99999 88888".to_string(),
            allergies: vec!["Peanuts".to_string(), "Dust".to_string()],
            chronic_conditions: vec!["Asthma".to_string()],
            vitals: Some(Vitals {
                heart_rate: "88 bpm".to_string(),
                blood_pressure: "135/90".to_string(),
                weight: "82 kg".to_string(),
                height: "180 cm".to_string(),
                last_checkup: "20 Nov 2023".to_string(),
            }),
            records: vec![
                record(
                    "REC-101",
                    RecordKind::Diagnosis,
                    "2023-11-20",
                    "Dr. Reddy",
                    "Max Healthcare",
                    "Acute Asthma Attack - Nebulization administered",
                    RecordFlag::Critical,
                ),
                record(
                    "REC-102",
                    RecordKind::Prescription,
                    "2023-11-20",
                    "Dr. Reddy",
                    "Max Healthcare",
                    "Inhaler refill (Salbutamol)",
                    RecordFlag::Attention,
                ),
            ],
        },
    ]
}
