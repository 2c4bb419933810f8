//! Ambulance fleet: unit records and their ECS component wrapper.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::grid::Coordinate;

/// Mutually exclusive availability states. Only `Available` units are
/// eligible for matching; transitions are owned by the dispatch systems,
/// never by the matcher itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStatus {
    Available,
    Busy,
    Dispatched,
}

/// Capability class of a unit: basic or advanced life support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    Basic,
    Advanced,
}

/// One ambulance in the roster.
///
/// `distance_km` and `eta_minutes` are populated only on the annotated copy
/// returned by a successful match; roster entries carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ambulance {
    pub id: String,
    pub operator: String,
    pub plate: String,
    pub location: Coordinate,
    pub status: UnitStatus,
    pub capability: Capability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_minutes: Option<u32>,
}

impl Ambulance {
    pub fn is_available(&self) -> bool {
        self.status == UnitStatus::Available
    }
}

/// ECS component holding one unit's roster record.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Unit(pub Ambulance);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::available_unit;

    #[test]
    fn only_available_status_is_available() {
        let mut unit = available_unit("AMB-01", 10.0, 10.0);
        assert!(unit.is_available());

        unit.status = UnitStatus::Busy;
        assert!(!unit.is_available());

        unit.status = UnitStatus::Dispatched;
        assert!(!unit.is_available());
    }

    #[test]
    fn roster_record_serializes_without_empty_annotations() {
        let unit = available_unit("AMB-01", 10.0, 10.0);
        let json = serde_json::to_string(&unit).expect("serialize");
        assert!(!json.contains("distance_km"));
        assert!(!json.contains("eta_minutes"));
    }
}
