//! Launch record type and CSV parsing for the launch dataset.
//!
//! # CSV Format
//!
//! Headers are required. Columns are located by name, so ordering and any
//! extra columns (such as the unnamed pandas index column) do not matter:
//!
//! ```text
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ```
//!
//! `Flight Number` and `Booster Version` are optional.

use anyhow::Context;
use serde::Deserialize;
use std::fmt;

/// Binary outcome of a launch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Convert the dataset's `class` column (1 = success, 0 = failure).
    pub fn from_class(class: i64) -> anyhow::Result<Self> {
        match class {
            1 => Ok(Outcome::Success),
            0 => Ok(Outcome::Failure),
            other => anyhow::bail!("class must be 0 or 1, got {}", other),
        }
    }

    pub fn class(&self) -> i64 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the dataset: a single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    pub booster_version: Option<String>,
    pub booster_category: String,
    pub outcome: Outcome,
}

#[derive(Debug, Deserialize)]
struct LaunchRow {
    #[serde(rename = "Flight Number")]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl TryFrom<LaunchRow> for LaunchRecord {
    type Error = anyhow::Error;

    fn try_from(row: LaunchRow) -> anyhow::Result<Self> {
        if row.launch_site.is_empty() {
            anyhow::bail!("empty launch site");
        }
        Ok(LaunchRecord {
            flight_number: row.flight_number,
            launch_site: row.launch_site,
            payload_mass_kg: row.payload_mass_kg,
            booster_version: row.booster_version.filter(|v| !v.is_empty()),
            booster_category: row.booster_category,
            outcome: Outcome::from_class(row.class)?,
        })
    }
}

/// Parse the launch dataset from a CSV string.
///
/// Any malformed row fails the whole parse; the dataset is loaded once
/// and a partial table would silently skew the charts.
pub fn parse_launch_csv(csv_data: &str) -> anyhow::Result<Vec<LaunchRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<LaunchRow>().enumerate() {
        let row = result.with_context(|| format!("failed to read launch row {}", index + 1))?;
        let record = LaunchRecord::try_from(row)
            .with_context(|| format!("invalid launch row {}", index + 1))?;
        records.push(record);
    }
    log::info!("parsed {} launch records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,29,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
2,31,KSC LC-39A,1,3696.65,F9 FT B1032.1,FT
";

    #[test]
    fn parses_full_dataset_format() {
        let records = parse_launch_csv(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].launch_site, "CCAFS LC-40");
        assert_eq!(records[0].flight_number, Some(1));
        assert_eq!(records[0].outcome, Outcome::Failure);
        assert_eq!(records[1].payload_mass_kg, 9600.0);
        assert_eq!(records[1].booster_category, "FT");
        assert_eq!(records[2].booster_version.as_deref(), Some("F9 FT B1032.1"));
        assert_eq!(records[2].outcome, Outcome::Success);
    }

    #[test]
    fn parses_minimal_columns_in_any_order() {
        let csv = "\
class,Booster Version Category,Payload Mass (kg),Launch Site
1,FT,500,SiteA
0,B4,1500,SiteA
";
        let records = parse_launch_csv(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].flight_number, None);
        assert_eq!(records[0].booster_version, None);
        assert_eq!(records[1].outcome, Outcome::Failure);
        assert_eq!(records[1].payload_mass_kg, 1500.0);
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
  SiteA , 500 , FT , 1
";
        let records = parse_launch_csv(csv).unwrap();
        assert_eq!(records[0].launch_site, "SiteA");
        assert_eq!(records[0].booster_category, "FT");
    }

    #[test]
    fn rejects_class_outside_binary() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
SiteA,500,FT,2
";
        assert!(parse_launch_csv(csv).is_err());
    }

    #[test]
    fn rejects_non_numeric_payload() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
SiteA,heavy,FT,1
";
        assert!(parse_launch_csv(csv).is_err());
    }

    #[test]
    fn rejects_missing_required_column() {
        let csv = "\
Launch Site,Payload Mass (kg),class
SiteA,500,1
";
        assert!(parse_launch_csv(csv).is_err());
    }

    #[test]
    fn empty_body_yields_no_records() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";
        assert!(parse_launch_csv(csv).unwrap().is_empty());
    }

    #[test]
    fn outcome_class_conversion() {
        assert_eq!(Outcome::from_class(1).unwrap(), Outcome::Success);
        assert_eq!(Outcome::from_class(0).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }
}
