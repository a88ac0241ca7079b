//! Command implementations for the launch records CLI.
//!
//! Each subcommand loads the launch CSV into the same in-memory database the
//! dashboard uses and prints what the matching widget would show.

use clap::{Args, Subcommand};
use launch_data::slider::PayloadSlider;
use launch_db::Database;
use launch_records::{PayloadRange, SiteSelection, ALL_SITES};
use std::io::Write;
use std::path::Path;

pub mod report;

/// Dataset location relative to the workspace root.
pub const DEFAULT_DATA_PATH: &str = "fixtures/spacex_launch_dash.csv";

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Path to the launch records CSV
    #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
    pub data: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the site dropdown options
    Sites {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Print the success pie chart for a site (or ALL)
    Pie {
        #[command(flatten)]
        data: DataArgs,

        /// Launch site name, or ALL for every site
        #[arg(short = 's', long, default_value = ALL_SITES)]
        site: String,

        /// Emit the figure as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the payload vs outcome scatter points
    Scatter {
        #[command(flatten)]
        data: DataArgs,

        /// Launch site name, or ALL for every site
        #[arg(short = 's', long, default_value = ALL_SITES)]
        site: String,

        /// Lower payload bound in kg (defaults to the dataset minimum)
        #[arg(long)]
        min: Option<f64>,

        /// Upper payload bound in kg (defaults to the dataset maximum)
        #[arg(long)]
        max: Option<f64>,

        /// Emit the figure as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(command, &mut out)
}

/// Run a command, writing its report to `out`.
pub fn execute<W: Write>(command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Sites { data } => {
            let db = open_database(&data.data)?;
            report::write_sites(&db, out)
        }
        Command::Pie { data, site, json } => {
            let db = open_database(&data.data)?;
            report::write_pie(&db, &SiteSelection::from_value(&site), json, out)
        }
        Command::Scatter {
            data,
            site,
            min,
            max,
            json,
        } => {
            let db = open_database(&data.data)?;
            let range = resolve_range(&db, min, max)?;
            report::write_scatter(&db, &SiteSelection::from_value(&site), Some(range), json, out)
        }
    }
}

/// Fill in missing bounds the way the dashboard slider starts: the
/// dataset's min/max payload, or the full slider track when it is empty.
pub fn resolve_range(
    db: &Database,
    min: Option<f64>,
    max: Option<f64>,
) -> anyhow::Result<PayloadRange> {
    if let (Some(low), Some(high)) = (min, max) {
        return Ok(PayloadRange::new(low, high));
    }
    let initial = PayloadSlider::default().initial_range(db.query_payload_bounds()?);
    Ok(PayloadRange::new(min.unwrap_or(initial.low), max.unwrap_or(initial.high)))
}

/// Read the CSV at `path` into a fresh in-memory database.
pub fn open_database(path: &str) -> anyhow::Result<Database> {
    let csv_path = Path::new(path);
    if !csv_path.exists() {
        anyhow::bail!("{} not found. Pass --data with the launch records CSV.", path);
    }
    let csv_data = std::fs::read_to_string(csv_path)?;
    log::info!("loading launch records from {}", path);
    Database::from_csv(&csv_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_db() -> Database {
        Database::from_csv(
            "\
Launch Site,Payload Mass (kg),Booster Version Category,class
SiteA,500,v1.1,1
SiteA,1500,FT,0
SiteB,2000,FT,1
",
        )
        .unwrap()
    }

    #[test]
    fn missing_bounds_come_from_dataset() {
        let db = example_db();
        assert_eq!(
            resolve_range(&db, None, None).unwrap(),
            PayloadRange::new(500.0, 2000.0)
        );
        assert_eq!(
            resolve_range(&db, Some(1000.0), None).unwrap(),
            PayloadRange::new(1000.0, 2000.0)
        );
        assert_eq!(
            resolve_range(&db, None, Some(1200.0)).unwrap(),
            PayloadRange::new(500.0, 1200.0)
        );
    }

    #[test]
    fn explicit_bounds_are_used_as_given() {
        let db = Database::new().unwrap();
        assert_eq!(
            resolve_range(&db, Some(3000.0), Some(1000.0)).unwrap(),
            PayloadRange::new(3000.0, 1000.0)
        );
    }

    #[test]
    fn empty_dataset_keeps_the_given_bound() {
        let db = Database::new().unwrap();
        assert_eq!(
            resolve_range(&db, Some(5.0), None).unwrap(),
            PayloadRange::new(5.0, 10000.0)
        );
        assert_eq!(
            resolve_range(&db, None, Some(4000.0)).unwrap(),
            PayloadRange::new(0.0, 4000.0)
        );
        assert_eq!(
            resolve_range(&db, None, None).unwrap(),
            PayloadRange::new(0.0, 10000.0)
        );
    }

    #[test]
    fn missing_data_file_is_an_error() {
        let err = match open_database("does/not/exist.csv") {
            Ok(_) => panic!("expected an error"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn bundled_dataset_runs_every_command() {
        let data = DataArgs {
            data: concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/spacex_launch_dash.csv")
                .to_string(),
        };
        let commands = vec![
            Command::Sites { data: data.clone() },
            Command::Pie {
                data: data.clone(),
                site: "ALL".to_string(),
                json: false,
            },
            Command::Scatter {
                data,
                site: "KSC LC-39A".to_string(),
                min: Some(2000.0),
                max: Some(6000.0),
                json: true,
            },
        ];
        for command in commands {
            let mut out = Vec::new();
            execute(command, &mut out).unwrap();
            assert!(!out.is_empty());
        }
    }
}
