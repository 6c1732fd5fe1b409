mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use clap::{Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{Employee, ValidationError};
use tracing::{debug, error, info};

use crate::config::{AppConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "hr-orientation", version, about = "New-hire orientation workflow")]
struct Cli {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long, help = "9 to 11 characters, hyphens allowed")]
    ssn: String,
    #[arg(long, value_enum, help = "Overrides HR_OUTPUT_FORMAT")]
    format: Option<OutputFormat>,
    #[arg(long, value_name = "FILE", help = "Also write the report here (overrides HR_REPORT_PATH)")]
    report_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full first-time orientation.
    Orient {
        #[arg(long)]
        cube: String,
    },
    /// Record a department policy review.
    ReviewPolicies {
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Move into a cubicle.
    Move {
        #[arg(long)]
        cube: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?.with_overrides(cli.format, cli.report_path.clone());
    init_tracing(ObsConfig {
        env_filter: config.log_filter.clone(),
        ..ObsConfig::default()
    })?;
    debug!(?config, "configuration loaded");

    let employee = run(&cli)?;
    info!(
        employee = %employee,
        met_with_hr = employee.met_with_hr(),
        met_dept_staff = employee.met_dept_staff(),
        reviewed_dept_policies = employee.reviewed_dept_policies(),
        moved_in = employee.moved_in(),
        "orientation recorded"
    );

    print!("{}", render(&employee, config.output_format)?);
    if let Some(path) = &config.report_path {
        write_report(&employee, path)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<Employee> {
    let mut employee =
        Employee::new(&cli.first_name, &cli.last_name, &cli.ssn).map_err(rejected)?;

    match &cli.command {
        Command::Orient { cube } => employee.do_first_time_orientation(cube).map_err(rejected)?,
        Command::ReviewPolicies { date } => {
            if let Some(date) = date {
                employee.set_orientation_date(local_moment(*date)?);
            }
            employee.review_dept_policies().map_err(rejected)?
        }
        Command::Move { cube, date } => {
            if let Some(date) = date {
                employee.set_orientation_date(local_moment(*date)?);
            }
            employee.move_into_cubicle(cube).map_err(rejected)?
        }
    }
    Ok(employee)
}

fn rejected(err: ValidationError) -> anyhow::Error {
    error!(field = err.field(), %err, "employee record rejected");
    anyhow::Error::new(err).context("orientation aborted")
}

fn local_moment(date: NaiveDate) -> Result<DateTime<Local>> {
    let start = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("invalid time of day for {date}"))?;
    Local
        .from_local_datetime(&start)
        .earliest()
        .ok_or_else(|| anyhow!("{date} has no local midnight"))
}

fn render(employee: &Employee, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}{}\n",
            employee.report_service().report_text(),
            employee
        )),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(employee).context("failed to serialize employee")?;
            Ok(json + "\n")
        }
    }
}

fn write_report(employee: &Employee, path: &Path) -> Result<()> {
    std::fs::write(path, employee.report_service().report_text())
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}
