//! Command-line front end for the attendance tracker.
//!
//! # Responsibility
//! - Parse one command, run it against a freshly loaded session, render output.
//! - Hold no business rules; every decision is made by `attendance_core`.

mod render;

use anyhow::Context;
use attendance_core::model::attendance::{parse_calendar_date, parse_time_of_day};
use attendance_core::{
    default_log_level, init_logging, AttendanceConfig, AttendanceError, AttendanceSession,
    AttendanceStatus, AttendanceSubmission, PhotoUpload,
};
use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "attendance", version, about = "Employee attendance tracker")]
struct Cli {
    /// Directory holding the roster, the attendance log and photos.
    #[arg(long, global = true, default_value = attendance_core::config::DEFAULT_DATA_ROOT)]
    data_root: PathBuf,
    /// Directory for rolling log files; relative paths resolve against the cwd.
    #[arg(long, global = true, default_value = "logs")]
    log_dir: PathBuf,
    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the data directory and empty tables.
    Init,
    /// Register a new employee.
    Register {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        position: String,
    },
    /// Show the employee roster.
    Employees,
    /// Record a check-in or check-out with a photo.
    Submit {
        #[arg(long)]
        employee_id: String,
        /// YYYY-MM-DD; defaults to today.
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        /// HH:MM or HH:MM:SS; defaults to now.
        #[arg(long, value_parser = parse_time_arg)]
        time: Option<NaiveTime>,
        /// IN or OUT.
        #[arg(long, default_value = "IN")]
        status: AttendanceStatus,
        /// Image file (.jpg/.jpeg/.png).
        #[arg(long)]
        photo: PathBuf,
        #[arg(long)]
        location: String,
    },
    /// Show attendance counts per day.
    Dashboard,
    /// Show all attendance rows.
    Records,
    /// Delete every attendance row for an employee id.
    Delete {
        #[arg(long)]
        employee_id: String,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("fatal: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, absolute(&cli.log_dir)?)
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;

    let config = AttendanceConfig::new(cli.data_root.clone());
    let mut session = AttendanceSession::open(&config).with_context(|| {
        format!(
            "failed to open attendance data at `{}`",
            config.data_root().display()
        )
    })?;

    let outcome = match cli.command {
        Command::Init => {
            println!(
                "Attendance data ready at {}",
                config.data_root().display()
            );
            Ok(())
        }
        Command::Register { id, name, position } => session
            .register_employee(&id, &name, &position)
            .map(|employee| println!("Employee {} registered successfully!", employee.name)),
        Command::Employees => {
            render::print_employees(session.employees());
            Ok(())
        }
        Command::Submit {
            employee_id,
            date,
            time,
            status,
            photo,
            location,
        } => {
            let upload = read_photo(&photo)?;
            let now = Local::now().naive_local();
            let submission = AttendanceSubmission {
                employee_id,
                date: date.unwrap_or(now.date()),
                time: time.unwrap_or_else(|| now.time().with_nanosecond(0).unwrap_or(now.time())),
                status,
                photo: upload,
                location,
            };
            submit(&mut session, submission)
        }
        Command::Dashboard => match session.dashboard() {
            Ok(summary) => {
                render::print_dashboard(&summary);
                Ok(())
            }
            Err(AttendanceError::NoData) => {
                eprintln!("warning: No attendance data available yet.");
                Ok(())
            }
            Err(err) => Err(err),
        },
        Command::Records => {
            if session.attendance_rows().is_empty() {
                eprintln!("warning: No attendance data available to manage!");
            } else {
                render::print_records(session.attendance_rows());
                println!("IDs available to delete: {}", session.deletable_ids().join(", "));
            }
            Ok(())
        }
        Command::Delete { employee_id } => {
            session.delete_attendance(&employee_id).map(|outcome| {
                println!(
                    "Entry with ID {} has been deleted ({} rows removed).",
                    outcome.employee_id, outcome.removed
                )
            })
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            info!(
                "event=cli_command module=cli status=error error_kind={}",
                err.kind()
            );
            eprintln!("error[{}]: {err}", err.kind());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn submit(
    session: &mut AttendanceSession,
    submission: AttendanceSubmission,
) -> Result<(), AttendanceError> {
    let profile = session.employee_profile(&submission.employee_id)?;
    println!("Employee Name: {}", profile.name);
    println!("Position: {}", profile.position);

    let recorded = session.submit_attendance(submission)?;
    println!("Attendance recorded successfully!");
    println!(
        "{} {} {} photo={}",
        recorded.record.date, recorded.record.time, recorded.record.status, recorded.record.photo
    );
    Ok(())
}

fn read_photo(path: &Path) -> anyhow::Result<PhotoUpload> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read photo `{}`", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(PhotoUpload::new(file_name, bytes))
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(value).ok_or_else(|| format!("invalid date `{value}`; expected YYYY-MM-DD"))
}

fn parse_time_arg(value: &str) -> Result<NaiveTime, String> {
    parse_time_of_day(value).ok_or_else(|| format!("invalid time `{value}`; expected HH:MM[:SS]"))
}
