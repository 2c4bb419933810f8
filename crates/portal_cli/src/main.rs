use std::fs::File;
use std::path::PathBuf;

use bevy_ecs::prelude::World;
use clap::{Parser, Subcommand};

use portal_core::actions::{begin_lookup, cancel_dispatch, request_dispatch};
use portal_core::fleet::Ambulance;
use portal_core::records::Patient;
use portal_core::runner::{portal_schedule, run_next_event_with_hook, run_until_empty};
use portal_core::scenario::{build_scenario, generated_roster, ScenarioParams};
use portal_core::session::{EmergencyState, LookupState, PortalSession, ViewState};
use portal_core::telemetry::PortalTelemetry;
use portal_core::telemetry_export::export_dispatch_log_to_path;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "portal",
    about = "Patient portal and emergency dispatch demo",
    long_about = "Drives a simulated patient-portal session: a health-ID lookup\n\
                  against the in-memory directory, then an emergency request\n\
                  matched to the nearest available ambulance on the grid."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with a health ID, request a dispatch, and print the outcome
    Run {
        /// Health ID to look up (demo IDs: ABHA1234, ABHA5678)
        #[arg(long, default_value = "ABHA1234")]
        patient_id: String,
        /// Roster fixture (JSON array of units); defaults to the demo fleet
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Patient fixture (JSON array); defaults to the demo patients
        #[arg(long)]
        patients: Option<PathBuf>,
        /// Extra randomly placed available units on top of the roster
        #[arg(long, default_value_t = 0)]
        units: usize,
        /// Seed for generated units
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Cancel the dispatch after it resolves
        #[arg(long)]
        cancel: bool,
        /// Print each processed clock event
        #[arg(long)]
        trace: bool,
        /// Export the dispatch log as CSV
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },
    /// Generate a random roster and print it as JSON
    Roster {
        #[arg(long, default_value_t = 5)]
        units: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Side length of the square grid
        #[arg(long, default_value_t = 100.0, value_parser = parse_grid_size)]
        grid_size: f64,
    },
}

fn parse_grid_size(raw: &str) -> Result<f64, String> {
    let size: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if size > 0.0 {
        Ok(size)
    } else {
        Err(format!("grid size must be positive, got {size}"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Commands::Run {
            patient_id,
            roster,
            patients,
            units,
            seed,
            cancel,
            trace,
            export_csv,
        } => run_session(
            &patient_id,
            roster,
            patients,
            units,
            seed,
            cancel,
            trace,
            export_csv,
        ),
        Commands::Roster {
            units,
            seed,
            grid_size,
        } => {
            let roster = generated_roster(units, seed, grid_size);
            println!("{}", serde_json::to_string_pretty(&roster)?);
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_session(
    patient_id: &str,
    roster: Option<PathBuf>,
    patients: Option<PathBuf>,
    units: usize,
    seed: u64,
    cancel: bool,
    trace: bool,
    export_csv: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut params = ScenarioParams::demo()
        .with_generated_units(units)
        .with_seed(seed);
    if let Some(path) = roster {
        let fleet: Vec<Ambulance> = serde_json::from_reader(File::open(path)?)?;
        params = params.with_roster(fleet);
    }
    if let Some(path) = patients {
        let directory: Vec<Patient> = serde_json::from_reader(File::open(path)?)?;
        params = params.with_patients(directory);
    }

    let mut world = World::new();
    build_scenario(&mut world, params);
    let mut schedule = portal_schedule();

    begin_lookup(&mut world, patient_id);
    drain_events(&mut world, &mut schedule, trace);
    report_login(&world);

    world
        .resource_mut::<PortalSession>()
        .open_view(ViewState::Emergency);
    request_dispatch(&mut world);
    drain_events(&mut world, &mut schedule, trace);
    report_dispatch(&world);

    if cancel {
        cancel_dispatch(&mut world);
        drain_events(&mut world, &mut schedule, trace);
        println!("dispatch cancelled; unit returned to the roster");
    }

    if let Some(path) = export_csv {
        let telemetry = world.resource::<PortalTelemetry>();
        export_dispatch_log_to_path(telemetry, &path)?;
        println!("dispatch log written to {}", path.display());
    }

    Ok(())
}

fn drain_events(world: &mut World, schedule: &mut bevy_ecs::prelude::Schedule, trace: bool) {
    if trace {
        while run_next_event_with_hook(world, schedule, |_, event| {
            println!("[{:>6} ms] {:?}", event.timestamp_ms, event.kind);
        }) {}
    } else {
        run_until_empty(world, schedule, 1_000);
    }
}

fn report_login(world: &World) {
    let session = world.resource::<PortalSession>();
    match (&session.lookup, session.active_patient()) {
        (_, Some(id)) => println!("logged in as {id}"),
        (LookupState::Failed { message }, None) => println!("login failed: {message}"),
        _ => println!("login did not resolve"),
    }
}

fn report_dispatch(world: &World) {
    let session = world.resource::<PortalSession>();
    match &session.emergency {
        EmergencyState::Dispatched(unit) => {
            println!(
                "unit {} dispatched: {} ({}), {:.2} km away, ETA {} min",
                unit.id,
                unit.operator,
                unit.plate,
                unit.distance_km.unwrap_or_default(),
                unit.eta_minutes.unwrap_or_default(),
            );
        }
        EmergencyState::Unserved => {
            println!("no ambulance currently available; please retry or call 102");
        }
        other => println!("dispatch did not resolve: {other:?}"),
    }
}
