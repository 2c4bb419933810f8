//! Exports the dispatch log as CSV for offline analysis.

use std::fs::File;
use std::path::Path;

use crate::telemetry::PortalTelemetry;

/// Writes one row per resolved dispatch.
pub fn export_dispatch_log(
    telemetry: &PortalTelemetry,
    file: File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "requested_at_ms",
        "resolved_at_ms",
        "unit_id",
        "distance_km",
        "eta_minutes",
        "time_to_dispatch_ms",
    ])?;

    for record in &telemetry.dispatch_log {
        wtr.write_record([
            record.requested_at_ms.to_string(),
            record.resolved_at_ms.to_string(),
            record.unit_id.clone(),
            record.distance_km.to_string(),
            record.eta_minutes.to_string(),
            record.time_to_dispatch_ms().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Convenience wrapper: creates (or truncates) `path` and exports into it.
pub fn export_dispatch_log_to_path(
    telemetry: &PortalTelemetry,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    export_dispatch_log(telemetry, file)
}
