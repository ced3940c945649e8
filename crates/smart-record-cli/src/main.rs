//! Smart Record - patient vitals recordkeeping CLI
//!
//! The `smart-record` command keeps a small ward's patient list, vitals
//! history and care notes in a local data directory and flags abnormal
//! vitals.
//!
//! ## Commands
//!
//! - `add` / `update`: record intake and new vitals
//! - `list` / `search`: show patients, abnormal values highlighted
//! - `alerts`: per-patient priority alerts (critical, warning, info)
//! - `summary` / `abnormal` / `handoff`: shift reports
//! - `task`, `note`, `med`, `goals`, `discharge`, `photo`: care file upkeep

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use record_store::{
    CareTask, FsRecordStore, HistoryEntry, IntakeForm, MedicationEntry, PatientFile,
    PatientRecord, Priority, StoreConfig, TimelineEntry, VitalsUpdate, DEFAULT_RECENT_LIMIT,
};
use tracing::{info, Level};
use vitals_core::obs::{self, CommandSpan};
use vitals_core::{
    abnormal_overview, abnormal_patients, abnormal_summary, priority_alerts,
    render_handoff_summary, AbnormalOverview, FallbackPolicy, PatientAlert, PatientSnapshot,
    SeverityCounts, SummaryRow, ThresholdConfig, ThresholdPreset, ThresholdSettings, VitalKind,
};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Parser)]
#[command(name = "smart-record")]
#[command(author = "Smart Record Maintainers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Patient vitals recordkeeping with abnormal-value alerts", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Data directory (default: $SMART_RECORD_DATA_DIR, then .smart-record)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// TOML file overriding the threshold presets
    #[arg(long, global = true, env = "SMART_RECORD_THRESHOLDS")]
    thresholds: Option<PathBuf>,

    /// Refuse vitals that do not parse instead of storing them as typed
    #[arg(long, global = true)]
    strict: bool,

    /// Disable ANSI colour in listings
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new patient
    Add {
        /// Patient ID
        id: String,
        /// Patient name
        name: String,
        /// Date of birth (MM/DD/YYYY; loose forms like "3 5 99" accepted)
        #[arg(long)]
        dob: String,
        /// Heart rate
        #[arg(long, default_value = "")]
        hr: String,
        /// Blood pressure (e.g. "120/80", "120 / 80")
        #[arg(long, default_value = "")]
        bp: String,
        /// Temperature in °F
        #[arg(long, default_value = "")]
        temp: String,
        /// Chief complaint
        #[arg(long, default_value = "")]
        cc: String,
        /// Diagnosis
        #[arg(long, default_value = "")]
        dx: String,
        /// Initials of the recording nurse
        #[arg(long, default_value = "")]
        rn: String,
    },

    /// List all patients
    List,

    /// Look up a patient by ID
    Search {
        /// Patient ID
        id: String,
    },

    /// Record new vitals for a patient (omitted fields are kept)
    Update {
        /// Patient ID
        id: String,
        #[arg(long)]
        hr: Option<String>,
        #[arg(long)]
        bp: Option<String>,
        #[arg(long)]
        temp: Option<String>,
        #[arg(long)]
        dx: Option<String>,
        #[arg(long)]
        rn: Option<String>,
    },

    /// Priority alerts for every patient outside its bands
    Alerts {
        /// Print alerts as JSON
        #[arg(long)]
        json: bool,
    },

    /// HR/BP status table with abnormal counts
    Summary,

    /// Patients with one vital out of range
    Abnormal {
        /// Vital to check
        #[arg(value_enum)]
        vital: VitalArg,

        /// Threshold preset (standard, critical, display)
        #[arg(long, default_value = "standard")]
        preset: ThresholdPreset,
    },

    /// Shift handoff summary
    Handoff,

    /// Export the patient list as CSV
    Export {
        /// Output path
        #[arg(short, long, default_value = "report.csv")]
        output: PathBuf,
    },

    /// Vitals history and chartable trend points for a patient
    History {
        /// Patient ID
        id: String,
    },

    /// Recent ward events, newest first
    Timeline {
        /// Maximum number of events to show
        #[arg(short, long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },

    /// Manage care tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Show or set a patient's care goals
    Goals {
        /// Patient ID
        id: String,
        /// New goals (replace the current list); omit to show
        goals: Vec<String>,
        /// Who assigned the goals
        #[arg(long, default_value = "")]
        by: String,
    },

    /// Show or set discharge readiness
    Discharge {
        /// Patient ID
        id: String,
        /// New status; omit to show
        #[arg(value_enum)]
        status: Option<DischargeArg>,
    },

    /// Attach a photo path to a patient's file
    Photo {
        /// Patient ID
        id: String,
        /// Path to the photo
        path: String,
    },

    /// Soft-needs notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Medication administration list
    Med {
        #[command(subcommand)]
        action: MedAction,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VitalArg {
    Hr,
    Bp,
    Temp,
}

impl From<VitalArg> for VitalKind {
    fn from(v: VitalArg) -> Self {
        match v {
            VitalArg::Hr => VitalKind::HeartRate,
            VitalArg::Bp => VitalKind::BloodPressure,
            VitalArg::Temp => VitalKind::Temperature,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DischargeArg {
    Ready,
    NotReady,
}

#[derive(Subcommand)]
enum TaskAction {
    /// Add a task for a patient
    Add {
        patient_id: String,
        description: String,
        #[arg(long, default_value = "")]
        due: String,
        /// do now, do soon or do later
        #[arg(long, default_value = "do soon")]
        priority: Priority,
    },
    /// List a patient's tasks
    List { patient_id: String },
    /// Flip a task between pending and done
    Toggle { task_id: String },
    /// Delete a task
    Delete { task_id: String },
}

#[derive(Subcommand)]
enum NoteAction {
    /// Add a soft-needs note
    Add { patient_id: String, note: String },
    /// List a patient's notes
    List { patient_id: String },
}

#[derive(Subcommand)]
enum MedAction {
    /// Add a medication
    Add {
        patient_id: String,
        name: String,
        #[arg(long, default_value = "")]
        dose: String,
        #[arg(long, default_value = "")]
        schedule: String,
        #[arg(long, default_value = "do soon")]
        priority: Priority,
    },
    /// List a patient's medications (with index)
    List { patient_id: String },
    /// Flip the given flag of the medication at INDEX
    Toggle { patient_id: String, index: usize },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::List => "list",
            Commands::Search { .. } => "search",
            Commands::Update { .. } => "update",
            Commands::Alerts { .. } => "alerts",
            Commands::Summary => "summary",
            Commands::Abnormal { .. } => "abnormal",
            Commands::Handoff => "handoff",
            Commands::Export { .. } => "export",
            Commands::History { .. } => "history",
            Commands::Timeline { .. } => "timeline",
            Commands::Task { .. } => "task",
            Commands::Goals { .. } => "goals",
            Commands::Discharge { .. } => "discharge",
            Commands::Photo { .. } => "photo",
            Commands::Note { .. } => "note",
            Commands::Med { .. } => "med",
        }
    }
}

/// Everything a command needs: the store, the bands and the output options.
struct App {
    store: FsRecordStore,
    settings: ThresholdSettings,
    policy: FallbackPolicy,
    color: bool,
}

impl App {
    fn open(cli: &Cli) -> Result<Self> {
        let config = match &cli.data_dir {
            Some(dir) => StoreConfig::new(dir),
            None => StoreConfig::from_env(),
        };
        let store = FsRecordStore::open(&config).with_context(|| {
            format!("Failed to open data directory {}", config.data_dir.display())
        })?;
        let settings = ThresholdSettings::load_or_default(cli.thresholds.as_deref())
            .context("Failed to load threshold overrides")?;
        let policy = if cli.strict {
            FallbackPolicy::Reject
        } else {
            FallbackPolicy::Passthrough
        };

        Ok(Self {
            store,
            settings,
            policy,
            color: !cli.no_color,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    vitals_core::init_tracing(cli.log_json, level);

    let app = App::open(&cli)?;
    let _span = CommandSpan::enter(cli.command.name());

    match cli.command {
        Commands::Add {
            id,
            name,
            dob,
            hr,
            bp,
            temp,
            cc,
            dx,
            rn,
        } => {
            let intake = IntakeForm {
                patient_id: id,
                name,
                date_of_birth: dob,
                heart_rate: hr,
                blood_pressure: bp,
                temperature: temp,
                chief_complaint: cc,
                diagnosis: dx,
                recorded_by: rn,
            };
            cmd_add(&app, &intake)
        }
        Commands::List => cmd_list(&app),
        Commands::Search { id } => cmd_search(&app, &id),
        Commands::Update {
            id,
            hr,
            bp,
            temp,
            dx,
            rn,
        } => {
            let updates = VitalsUpdate {
                heart_rate: hr,
                blood_pressure: bp,
                temperature: temp,
                diagnosis: dx,
                recorded_by: rn,
            };
            cmd_update(&app, &id, &updates)
        }
        Commands::Alerts { json } => cmd_alerts(&app, json),
        Commands::Summary => cmd_summary(&app),
        Commands::Abnormal { vital, preset } => cmd_abnormal(&app, vital.into(), preset),
        Commands::Handoff => cmd_handoff(&app),
        Commands::Export { output } => cmd_export(&app, &output),
        Commands::History { id } => cmd_history(&app, &id),
        Commands::Timeline { limit } => cmd_timeline(&app, limit),
        Commands::Task { action } => cmd_task(&app, action),
        Commands::Goals { id, goals, by } => cmd_goals(&app, &id, goals, &by),
        Commands::Discharge { id, status } => cmd_discharge(&app, &id, status),
        Commands::Photo { id, path } => cmd_photo(&app, &id, &path),
        Commands::Note { action } => cmd_note(&app, action),
        Commands::Med { action } => cmd_med(&app, action),
    }
}

// ---------------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------------

fn cmd_add(app: &App, intake: &IntakeForm) -> Result<()> {
    let patient = record_store::add_patient(&app.store, intake, app.policy)
        .with_context(|| format!("Failed to add patient '{}'", intake.patient_id.trim()))?;

    println!("New patient added: {} ({})", patient.patient_id, patient.name);
    println!("{}", render_patient_table(&[patient.clone()], &app.settings.display, app.color));
    if app.settings.standard.any_abnormal(&patient) {
        println!("⚠️  {}'s vitals are abnormal!", patient.name);
    }
    Ok(())
}

fn cmd_list(app: &App) -> Result<()> {
    let patients = record_store::list_patients(&app.store)?;
    if patients.is_empty() {
        println!("No patient records yet");
        return Ok(());
    }
    println!("{}", render_patient_table(&patients, &app.settings.display, app.color));
    Ok(())
}

fn cmd_search(app: &App, id: &str) -> Result<()> {
    match record_store::find_patient(&app.store, id)? {
        Some(patient) => {
            println!("Patient record found");
            println!("{}", render_patient_table(&[patient], &app.settings.display, app.color));
        }
        None => println!("No patient found with ID '{}'", id),
    }
    Ok(())
}

fn cmd_update(app: &App, id: &str, updates: &VitalsUpdate) -> Result<()> {
    if updates.is_empty() {
        bail!("Nothing to update: pass at least one of --hr, --bp, --temp, --dx, --rn");
    }
    let patient = record_store::update_vitals(&app.store, id, updates, app.policy)
        .with_context(|| format!("Failed to update patient '{}'", id))?;

    println!("Vitals updated for {}", patient.patient_id);
    println!("{}", render_patient_table(&[patient], &app.settings.display, app.color));
    Ok(())
}

fn cmd_history(app: &App, id: &str) -> Result<()> {
    let history = record_store::patient_history(&app.store, id)?;
    if history.is_empty() {
        println!("No history recorded for '{}'", id);
        return Ok(());
    }
    println!("{}", render_history(&history));
    Ok(())
}

fn cmd_export(app: &App, output: &Path) -> Result<()> {
    let patients = record_store::list_patients(&app.store)?;
    record_store::export_report(&patients, output)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;
    println!("Report saved as {}", output.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

fn cmd_alerts(app: &App, json: bool) -> Result<()> {
    let patients = record_store::list_patients(&app.store)?;
    let alerts = priority_alerts(&patients, &app.settings.alert_policy());
    obs::emit_alerts_evaluated(patients.len(), &SeverityCounts::from_alerts(&alerts));

    if json {
        println!("{}", serde_json::to_string_pretty(&alerts)?);
    } else {
        println!("{}", render_alerts(&alerts));
    }
    Ok(())
}

fn cmd_summary(app: &App) -> Result<()> {
    let patients = record_store::list_patients(&app.store)?;
    if patients.is_empty() {
        println!("No patient records yet");
        return Ok(());
    }
    let rows = abnormal_summary(&patients, &app.settings.standard);
    let overview = abnormal_overview(&patients, &app.settings.standard);
    println!("{}", render_summary(&rows, &overview, app.color));
    Ok(())
}

fn cmd_abnormal(app: &App, kind: VitalKind, preset: ThresholdPreset) -> Result<()> {
    let patients = record_store::list_patients(&app.store)?;
    let config = app.settings.preset(preset);
    let hits = abnormal_patients(&patients, kind, config);
    println!("{}", render_abnormal(&hits, kind, preset));
    Ok(())
}

fn cmd_handoff(app: &App) -> Result<()> {
    let patients = record_store::list_patients(&app.store)?;
    let open_tasks = record_store::open_task_counts(&app.store)?;
    println!(
        "{}",
        render_handoff_summary(&patients, &open_tasks, &app.settings.standard)
    );
    Ok(())
}

fn cmd_timeline(app: &App, limit: usize) -> Result<()> {
    let events = record_store::recent_events(&app.store, limit)?;
    if events.is_empty() {
        println!("No events yet");
        return Ok(());
    }
    println!("{}", render_timeline(&events));
    Ok(())
}

// ---------------------------------------------------------------------------
// Care file
// ---------------------------------------------------------------------------

fn cmd_task(app: &App, action: TaskAction) -> Result<()> {
    match action {
        TaskAction::Add {
            patient_id,
            description,
            due,
            priority,
        } => {
            let task =
                record_store::add_task(&app.store, &patient_id, &description, &due, priority)?;
            println!("Added task {} for {}", task.id, task.patient_id);
        }
        TaskAction::List { patient_id } => {
            let tasks = record_store::tasks_for_patient(&app.store, &patient_id)?;
            if tasks.is_empty() {
                println!("No tasks for '{}'", patient_id);
            } else {
                println!("{}", render_tasks(&tasks));
            }
        }
        TaskAction::Toggle { task_id } => {
            let task = record_store::toggle_task(&app.store, &task_id)?;
            println!("Task {} is now {}", task.id, task.status.as_str());
        }
        TaskAction::Delete { task_id } => {
            if record_store::delete_task(&app.store, &task_id)? {
                println!("Deleted task {}", task_id);
            } else {
                bail!("Task not found: {}", task_id);
            }
        }
    }
    Ok(())
}

fn cmd_goals(app: &App, id: &str, goals: Vec<String>, assigned_by: &str) -> Result<()> {
    let file = if goals.is_empty() {
        record_store::ensure_record(&app.store, id)?
    } else {
        let file = record_store::update_goals(&app.store, id, goals, assigned_by)?;
        info!(event = "goals.updated", patient_id = %id, goals = file.goals.len());
        file
    };
    println!("{}", render_patient_file(id, &file));
    Ok(())
}

fn cmd_discharge(app: &App, id: &str, status: Option<DischargeArg>) -> Result<()> {
    let file = match status {
        Some(s) => record_store::set_discharge_status(
            &app.store,
            id,
            matches!(s, DischargeArg::Ready),
        )?,
        None => record_store::ensure_record(&app.store, id)?,
    };
    let label = if file.discharge_ready {
        "ready"
    } else {
        "not ready"
    };
    println!("{}: discharge {}", id, label);
    Ok(())
}

fn cmd_photo(app: &App, id: &str, path: &str) -> Result<()> {
    let file = record_store::set_photo(&app.store, id, path)?;
    println!(
        "Photo for {} set to {} (first attached {})",
        id,
        file.photo,
        file.photo_updated.as_deref().unwrap_or("-")
    );
    Ok(())
}

fn cmd_note(app: &App, action: NoteAction) -> Result<()> {
    match action {
        NoteAction::Add { patient_id, note } => {
            let entry = record_store::add_soft_note(&app.store, &patient_id, &note)?;
            println!("Noted for {} at {}", patient_id, entry.timestamp);
        }
        NoteAction::List { patient_id } => {
            let notes = record_store::soft_notes(&app.store, &patient_id)?;
            if notes.is_empty() {
                println!("No notes for '{}'", patient_id);
            }
            for n in notes {
                println!("[{}] {}", n.timestamp, n.note);
            }
        }
    }
    Ok(())
}

fn cmd_med(app: &App, action: MedAction) -> Result<()> {
    match action {
        MedAction::Add {
            patient_id,
            name,
            dose,
            schedule,
            priority,
        } => {
            record_store::add_medication(&app.store, &patient_id, &name, &dose, &schedule, priority)?;
            println!("Added {} for {}", name, patient_id);
        }
        MedAction::List { patient_id } => {
            let meds = record_store::medications(&app.store, &patient_id)?;
            if meds.is_empty() {
                println!("No medications for '{}'", patient_id);
            } else {
                println!("{}", render_medications(&meds));
            }
        }
        MedAction::Toggle { patient_id, index } => {
            match record_store::toggle_given(&app.store, &patient_id, index)? {
                Some(med) => println!(
                    "{} marked {}",
                    med.name,
                    if med.given { "given" } else { "not given" }
                ),
                None => bail!("No medication #{} for '{}'", index, patient_id),
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Wrap already-padded `text` in red when `abnormal` and colour is on.
fn paint(text: String, abnormal: bool, color: bool) -> String {
    if abnormal && color {
        format!("{RED}{text}{RESET}")
    } else {
        text
    }
}

fn render_patient_table(patients: &[PatientRecord], display: &ThresholdConfig, color: bool) -> String {
    let mut out = format!(
        "{:<12}{:<15}{:<13}{:<6}{:<10}{:<8}{:<15}{:<15}{:<6}{}\n{}",
        "patient_id", "name", "DOB", "HR", "BP", "Temp", "CC", "Diagnosis", "RN_AP", "Time",
        "-".repeat(104)
    );
    for p in patients {
        let hr = paint(
            format!("{:<6}", p.heart_rate),
            display.is_abnormal(VitalKind::HeartRate, &p.heart_rate),
            color,
        );
        let bp = paint(
            format!("{:<10}", p.blood_pressure),
            display.is_abnormal(VitalKind::BloodPressure, &p.blood_pressure),
            color,
        );
        let temp = paint(
            format!("{:<8}", p.temperature),
            display.is_abnormal(VitalKind::Temperature, &p.temperature),
            color,
        );
        out.push_str(&format!(
            "\n{:<12}{:<15}{:<13}{}{}{}{:<15}{:<15}{:<6}{}",
            p.patient_id,
            p.name,
            p.date_of_birth,
            hr,
            bp,
            temp,
            p.chief_complaint,
            p.diagnosis,
            p.recorded_by,
            p.time
        ));
    }
    out
}

fn render_alerts(alerts: &[PatientAlert]) -> String {
    if alerts.is_empty() {
        return "All patients within range.".to_string();
    }
    alerts
        .iter()
        .map(|a| {
            format!(
                "[{}] {} {}: {}",
                a.severity.as_str().to_uppercase(),
                a.patient_id,
                a.name,
                a.details()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_summary(rows: &[SummaryRow], overview: &AbnormalOverview, color: bool) -> String {
    let mut out = format!("{:<8}{:<15}{:<8}{:<10}{}", "ID", "Name", "HR", "BP", "Status");
    for r in rows {
        out.push_str(&format!(
            "\n{:<8}{:<15}{}{}{}",
            r.patient_id,
            r.name,
            paint(format!("{:<8}", r.heart_rate), r.heart_rate_abnormal, color),
            paint(format!("{:<10}", r.blood_pressure), r.blood_pressure_abnormal, color),
            r.status()
        ));
    }
    out.push_str(&format!(
        "\n\nAbnormal HR: {} | Abnormal BP: {} | Abnormal Temp: {}",
        overview.heart_rate, overview.blood_pressure, overview.temperature
    ));
    out
}

fn render_abnormal<S: PatientSnapshot>(hits: &[&S], kind: VitalKind, preset: ThresholdPreset) -> String {
    let mut out = format!(
        "Abnormal {} patients ({} preset)\n{:<10}{:<15}{:<15}{}\n{}",
        kind.label(),
        preset.as_str(),
        "ID",
        "Name",
        "DOB",
        kind.label(),
        "-".repeat(45)
    );
    for p in hits {
        out.push_str(&format!(
            "\n{:<10}{:<15}{:<15}{}",
            p.patient_id(),
            p.name(),
            p.date_of_birth(),
            p.vital(kind)
        ));
    }
    out.push_str(&format!("\n\nTotal: {}", hits.len()));
    out
}

fn render_history(history: &[HistoryEntry]) -> String {
    let mut out = format!("{:<12}{:<6}{:<10}{:<8}{}", "Time", "HR", "BP", "Temp", "Diagnosis");
    for h in history {
        out.push_str(&format!(
            "\n{:<12}{:<6}{:<10}{:<8}{}",
            h.time, h.heart_rate, h.blood_pressure, h.temperature, h.diagnosis
        ));
    }
    let points = record_store::trend_points(history);
    if points.is_empty() {
        out.push_str("\n\nNo chartable entries yet.");
    } else {
        out.push_str("\n\nTrend (HR, systolic/diastolic):");
        for pt in points {
            out.push_str(&format!(
                "\n  {:<12}{:>4}  {}/{}",
                pt.label, pt.heart_rate, pt.systolic, pt.diastolic
            ));
        }
    }
    out
}

fn render_timeline(events: &[TimelineEntry]) -> String {
    events
        .iter()
        .map(|e| format!("{}  {:<8}{:<15}{}", e.timestamp, e.patient_id, e.event, e.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tasks(tasks: &[CareTask]) -> String {
    tasks
        .iter()
        .map(|t| {
            let mark = if t.is_open() { "[ ]" } else { "[x]" };
            let due = if t.due.is_empty() {
                String::new()
            } else {
                format!(" (due {})", t.due)
            };
            format!("{} {} {} [{}]{}", mark, t.id, t.description, t.priority, due)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_medications(meds: &[MedicationEntry]) -> String {
    meds.iter()
        .enumerate()
        .map(|(i, m)| {
            let mark = if m.given { "[x]" } else { "[ ]" };
            format!(
                "{} {}. {} {} {} [{}]",
                mark, i, m.name, m.dose, m.schedule, m.priority
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_patient_file(id: &str, file: &PatientFile) -> String {
    let mut out = format!(
        "{} • discharge {}",
        id,
        if file.discharge_ready {
            "ready"
        } else {
            "not ready"
        }
    );
    if file.goals.is_empty() {
        out.push_str("\nNo goals set.");
    } else {
        let by = if file.assigned_by.is_empty() {
            String::new()
        } else {
            format!(" (assigned by {})", file.assigned_by)
        };
        out.push_str(&format!("\nGoals{}:", by));
        for g in &file.goals {
            out.push_str(&format!("\n  - {}", g));
        }
    }
    out
}
