//! Drone operations coordinator CLI
//!
//! Lists the roster, scans the fleet for conflicts, validates and suggests
//! pilot/drone assignments, and records status changes back to the
//! workbook.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use droneops_core::{logging, Config};
use droneops_domain::{DroneStatus, PilotStatus};
use droneops_roster::{
    Coordinator, DroneFilter, MemoryRoster, MissionFilter, PilotFilter, Workbook,
};

mod report;

#[derive(Parser)]
#[command(author, version, about = "Drone operations coordinator", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, env = "DRONEOPS_CONFIG")]
    config: Option<PathBuf>,

    /// Workbook path, overriding the configuration
    #[arg(long)]
    workbook: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pilots
    Pilots {
        #[arg(short, long)]
        available: bool,
        #[arg(short, long)]
        location: Option<String>,
    },
    /// List drones
    Drones {
        #[arg(short, long)]
        available: bool,
        #[arg(short, long)]
        capability: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
    },
    /// List missions
    Missions {
        #[arg(short, long)]
        urgent: bool,
    },
    /// Pilot and drone counts by status
    Summary,
    /// Fleet-wide conflict scan
    Conflicts,
    /// Validate a specific pilot, drone and mission
    Check {
        pilot_id: String,
        drone_id: String,
        project_id: String,
    },
    /// Suggest a pilot and drone for a mission
    Suggest {
        project_id: String,
        /// Record the suggestion in the workbook if it has no conflicts
        #[arg(long)]
        commit: bool,
    },
    /// Set a pilot's status (Available, Assigned, On Leave)
    SetPilotStatus { pilot_id: String, status: String },
    /// Set a drone's status (Available, Assigned, Maintenance)
    SetDroneStatus { drone_id: String, status: String },
    /// Set a pilot's current assignment
    AssignPilot {
        pilot_id: String,
        assignment: String,
        #[arg(long, default_value = droneops_domain::SENTINEL)]
        available_from: String,
    },
    /// Set a drone's current assignment
    AssignDrone { drone_id: String, assignment: String },
}

#[derive(Serialize)]
struct SummaryOutput {
    pilots: droneops_roster::PilotSummary,
    drones: droneops_roster::DroneSummary,
}

#[derive(Serialize)]
struct UpdateOutput<'a> {
    id: &'a str,
    updated: &'static str,
    value: &'a str,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default_config(),
    };
    let mut config = config.apply_env();
    if let Some(workbook) = &cli.workbook {
        config.roster.workbook = workbook.clone();
    }
    Ok(config)
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn save(coordinator: Coordinator<MemoryRoster>, path: &Path) -> Result<()> {
    let store = coordinator.into_store();
    Workbook::from(&store)
        .save(path)
        .with_context(|| format!("Failed to save workbook {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.log_json {
        logging::init_json(&config.logging.level);
    } else {
        logging::init_from_config(&config.logging);
    }

    let workbook_path = config.roster.workbook.clone();
    let store = Workbook::load(&workbook_path)
        .and_then(Workbook::into_store)
        .with_context(|| format!("Failed to open workbook {}", workbook_path.display()))?;
    let mut coordinator = Coordinator::new(store);
    let json = cli.json;

    match cli.command {
        Commands::Pilots {
            available,
            location,
        } => {
            let pilots = coordinator.find_pilots(&PilotFilter {
                available_only: available,
                location,
            });
            emit(json, &pilots, || {
                report::listing(
                    "pilot",
                    &pilots,
                    report::pilot,
                    "No pilots found matching your criteria.",
                )
            })?;
        }
        Commands::Drones {
            available,
            capability,
            location,
        } => {
            let drones = coordinator.find_drones(&DroneFilter {
                available_only: available,
                capability,
                location,
            });
            emit(json, &drones, || {
                report::listing(
                    "drone",
                    &drones,
                    report::drone,
                    "No drones found matching your criteria.",
                )
            })?;
        }
        Commands::Missions { urgent } => {
            let missions = coordinator.find_missions(&MissionFilter {
                urgent_only: urgent,
            });
            emit(json, &missions, || {
                report::listing(
                    "mission",
                    &missions,
                    report::mission,
                    "No missions found matching your criteria.",
                )
            })?;
        }
        Commands::Summary => {
            let output = SummaryOutput {
                pilots: coordinator.pilot_summary(),
                drones: coordinator.drone_summary(),
            };
            emit(json, &output, || {
                report::summary(&output.pilots, &output.drones)
            })?;
        }
        Commands::Conflicts => {
            let issues = coordinator.fleet_conflicts();
            emit(json, &issues, || report::fleet_conflicts(&issues))?;
        }
        Commands::Check {
            pilot_id,
            drone_id,
            project_id,
        } => {
            let verdict = coordinator.check_assignment(&pilot_id, &drone_id, &project_id)?;
            emit(json, &verdict, || report::verdict(&verdict))?;
        }
        Commands::Suggest { project_id, commit } => {
            let suggestion = coordinator.suggest_assignment(&project_id)?;
            emit(json, &suggestion, || report::suggestion(&suggestion))?;

            if commit {
                coordinator.commit_assignment(
                    &suggestion.pilot.pilot_id,
                    &suggestion.drone.drone_id,
                    &suggestion.mission.project_id,
                )?;
                save(coordinator, &workbook_path)?;
                info!(project_id = %project_id, "Suggestion committed to workbook");
            }
        }
        Commands::SetPilotStatus { pilot_id, status } => {
            let status = PilotStatus::parse_strict(&status)?;
            coordinator.update_pilot_status(&pilot_id, &status)?;
            save(coordinator, &workbook_path)?;
            emit(
                json,
                &UpdateOutput {
                    id: &pilot_id,
                    updated: "status",
                    value: status.as_str(),
                },
                || format!("Pilot {pilot_id} status set to {status}\n"),
            )?;
        }
        Commands::SetDroneStatus { drone_id, status } => {
            let status = DroneStatus::parse_strict(&status)?;
            coordinator.update_drone_status(&drone_id, &status)?;
            save(coordinator, &workbook_path)?;
            emit(
                json,
                &UpdateOutput {
                    id: &drone_id,
                    updated: "status",
                    value: status.as_str(),
                },
                || format!("Drone {drone_id} status set to {status}\n"),
            )?;
        }
        Commands::AssignPilot {
            pilot_id,
            assignment,
            available_from,
        } => {
            coordinator.update_pilot_assignment(&pilot_id, &assignment, &available_from)?;
            save(coordinator, &workbook_path)?;
            emit(
                json,
                &UpdateOutput {
                    id: &pilot_id,
                    updated: "current_assignment",
                    value: &assignment,
                },
                || format!("Pilot {pilot_id} assigned to {assignment}\n"),
            )?;
        }
        Commands::AssignDrone {
            drone_id,
            assignment,
        } => {
            coordinator.update_drone_assignment(&drone_id, &assignment)?;
            save(coordinator, &workbook_path)?;
            emit(
                json,
                &UpdateOutput {
                    id: &drone_id,
                    updated: "current_assignment",
                    value: &assignment,
                },
                || format!("Drone {drone_id} assigned to {assignment}\n"),
            )?;
        }
    }

    Ok(())
}
