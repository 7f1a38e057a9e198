//! MediConnect portal demo CLI.
//!
//! Drives the portal core from the command line. The session is kept in a
//! file-backed store under `--state-dir`, so `login` in one invocation is seen
//! by `dashboard` in the next.
//!
//! Usage:
//!   cargo run -p demo -- login --role doctor --email jane@example.com --password x
//!   cargo run -p demo -- visit /patient/dashboard
//!   cargo run -p demo -- --fast patient PAT001
//!   cargo run -p demo -- logout

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mediconnect_contracts::{
    error::{PortalError, PortalResult},
    records::{OutgoingMessage, Sender},
    session::{LoginRequest, Role, Session},
};
use mediconnect_mock::LatencyProfile;
use mediconnect_policy::TomlRoutePolicy;
use mediconnect_portal::{Navigation, Portal};
use mediconnect_storage::FileStore;

/// The conversation every chat message is filed under.
const EMERGENCY_CONVERSATION: &str = "emergency";

// ── CLI definition ────────────────────────────────────────────────────────────

/// MediConnect: a session-gated healthcare portal over mock clinic data.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MediConnect portal demo",
    long_about = "Logs in as a doctor or patient, checks route access, and queries\n\
                  the mock clinic backend. Data commands print JSON."
)]
struct Cli {
    /// Directory holding the persisted session.
    #[arg(long, global = true, default_value = ".mediconnect")]
    state_dir: PathBuf,

    /// Route policy TOML. The built-in policy is used when omitted.
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    /// Resolve every call immediately instead of simulating latency.
    #[arg(long, global = true)]
    fast: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Doctor,
    Patient,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Doctor => Role::Doctor,
            RoleArg::Patient => Role::Patient,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Log in. Any email and password are accepted.
    Login {
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Medical license id (doctors).
        #[arg(long)]
        license_id: Option<String>,
    },
    /// Clear the stored session.
    Logout,
    /// Print the stored session.
    Whoami,
    /// Check whether a path renders or where it redirects.
    Visit { path: String },
    /// Print the navigation menu for the current role.
    Menu,
    /// Print the dashboard for the current role.
    Dashboard,
    /// List the doctor's patients.
    Patients,
    /// Print one patient's chart.
    Patient { id: String },
    /// List appointments for the current role.
    Appointments,
    /// Look up first-aid steps.
    FirstAid { query: String },
    /// Send a message to the emergency chat and print the automated reply.
    Chat { text: String },
    /// Transcribe a consultation recording.
    Transcribe {
        /// Audio file; its contents are not inspected.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "command failed");
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn build_portal(cli: &Cli) -> PortalResult<Portal> {
    let store = FileStore::open(&cli.state_dir)?;
    let policy = match &cli.policy {
        Some(path) => TomlRoutePolicy::from_file(path)?,
        None => TomlRoutePolicy::portal_default()?,
    };
    let latency = if cli.fast {
        LatencyProfile::instant()
    } else {
        LatencyProfile::default()
    };
    Ok(Portal::new(Arc::new(store), policy).with_latency(latency))
}

async fn run(cli: Cli) -> PortalResult<()> {
    let portal = build_portal(&cli)?;

    match cli.command {
        Command::Login {
            role,
            email,
            password,
            license_id,
        } => {
            let session = portal
                .login(LoginRequest {
                    email,
                    password,
                    role: role.into(),
                    license_id,
                })
                .await?;
            println!("Logged in as {} ({}).", session.name, session.role);
            if let Some(home) = portal.navigator().current() {
                println!("-> {}", home);
            }
            Ok(())
        }
        Command::Logout => {
            portal.logout().await?;
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => match portal.sessions().current() {
            Some(session) => print_json(&session),
            None => {
                println!("Not logged in.");
                Ok(())
            }
        },
        Command::Visit { path } => {
            match portal.visit(&path) {
                Navigation::Render { path } => println!("{}: renders", path),
                Navigation::Redirect { from, to } => println!("{}: redirected to {}", from, to),
            }
            Ok(())
        }
        Command::Menu => {
            let menu = portal.current_menu();
            if menu.is_empty() {
                println!("Not logged in.");
                return Ok(());
            }
            for item in menu {
                println!("{:<16} {}", item.title, item.path);
            }
            Ok(())
        }
        Command::Dashboard => {
            let Some(session) = require_session(&portal) else {
                return Ok(());
            };
            let home = portal.policy().home_route(session.role).to_string();
            if !guarded(&portal, &home) {
                return Ok(());
            }
            match session.role {
                Role::Doctor => print_json(&portal.remote().doctor_dashboard().await),
                Role::Patient => print_json(&portal.remote().patient_dashboard().await),
            }
        }
        Command::Patients => {
            if !guarded(&portal, "/doctor/patients") {
                return Ok(());
            }
            print_json(&portal.remote().patient_list().await)
        }
        Command::Patient { id } => {
            if !guarded(&portal, &format!("/doctor/patients/{}", id)) {
                return Ok(());
            }
            match portal.remote().patient_details(&id).await {
                Some(record) => print_json(&record),
                None => {
                    println!("No patient with id {}.", id);
                    Ok(())
                }
            }
        }
        Command::Appointments => {
            let Some(session) = require_session(&portal) else {
                return Ok(());
            };
            match session.role {
                Role::Doctor => {
                    if !guarded(&portal, "/doctor/appointments") {
                        return Ok(());
                    }
                    print_json(&portal.remote().doctor_appointments().await)
                }
                Role::Patient => {
                    if !guarded(&portal, "/patient/appointments") {
                        return Ok(());
                    }
                    print_json(&portal.remote().patient_appointments().await)
                }
            }
        }
        Command::FirstAid { query } => {
            if !guarded(&portal, "/first-aid") {
                return Ok(());
            }
            print_json(&portal.remote().first_aid_info(&query).await)
        }
        Command::Chat { text } => {
            let Some(session) = require_session(&portal) else {
                return Ok(());
            };
            if !guarded(&portal, &format!("/{}/emergency-chat", session.role)) {
                return Ok(());
            }
            let sender = match session.role {
                Role::Doctor => Sender::Doctor,
                Role::Patient => Sender::Patient,
            };
            let sent = portal
                .remote()
                .send_chat_message(
                    EMERGENCY_CONVERSATION,
                    OutgoingMessage {
                        sender,
                        sender_name: session.name.clone(),
                        content: text.clone(),
                    },
                )
                .await;
            let reply = portal.remote().ai_chat_response(&text).await;
            print_json(&[sent, reply])
        }
        Command::Transcribe { file } => {
            if !guarded(&portal, "/doctor/consultation") {
                return Ok(());
            }
            let audio = match file {
                Some(path) => std::fs::read(&path).map_err(|e| PortalError::Storage {
                    reason: format!("failed to read audio '{}': {}", path.display(), e),
                })?,
                None => Vec::new(),
            };
            print_json(&portal.remote().transcribe_audio(&audio).await)
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn require_session(portal: &Portal) -> Option<Session> {
    let session = portal.sessions().current();
    if session.is_none() {
        println!("Not logged in. Redirected to {}.", portal.policy().login_route());
    }
    session
}

/// Run the guard for `path`; print the redirect and return false if it fails.
fn guarded(portal: &Portal, path: &str) -> bool {
    match portal.visit(path) {
        Navigation::Render { .. } => true,
        Navigation::Redirect { from, to } => {
            println!("{}: redirected to {}", from, to);
            false
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> PortalResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| PortalError::Serialization {
        reason: format!("failed to encode output: {}", e),
    })?;
    println!("{}", json);
    Ok(())
}
