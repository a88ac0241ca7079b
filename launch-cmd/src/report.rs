//! Plain-text and JSON reports for the CLI subcommands.

use launch_data::figure::{payload_scatter, success_pie, PieFigure, ScatterFigure};
use launch_data::options::site_options;
use launch_db::Database;
use launch_records::{PayloadRange, SiteSelection};
use std::io::Write;

/// One line per dropdown option: `value<TAB>label`.
pub fn write_sites<W: Write>(db: &Database, out: &mut W) -> anyhow::Result<()> {
    let sites = db.query_launch_sites()?;
    for option in site_options(&sites) {
        writeln!(out, "{}\t{}", option.value, option.label)?;
    }
    Ok(())
}

pub fn write_pie<W: Write>(
    db: &Database,
    selection: &SiteSelection,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let figure = success_pie(db, selection)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&figure)?)?;
    } else {
        write_pie_table(&figure, out)?;
    }
    Ok(())
}

pub fn write_scatter<W: Write>(
    db: &Database,
    selection: &SiteSelection,
    range: Option<PayloadRange>,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let figure = payload_scatter(db, selection, range)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&figure)?)?;
    } else {
        write_scatter_table(&figure, out)?;
    }
    Ok(())
}

fn write_pie_table<W: Write>(figure: &PieFigure, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{}", figure.title)?;
    if figure.is_empty() {
        writeln!(out, "  (no launches)")?;
        return Ok(());
    }
    let width = figure
        .slices
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0);
    for slice in &figure.slices {
        writeln!(
            out,
            "  {:<width$}  {:>4}  {:>5.1}%",
            slice.label,
            slice.value,
            slice.percent,
            width = width
        )?;
    }
    writeln!(out, "  {:<width$}  {:>4}", "Total", figure.total, width = width)?;
    Ok(())
}

fn write_scatter_table<W: Write>(figure: &ScatterFigure, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{} ({} points)", figure.title, figure.points.len())?;
    writeln!(
        out,
        "  {:>6}  {:<14}  {:>10}  {:<7}  {}",
        "Flight", "Site", "Payload kg", "Outcome", "Booster"
    )?;
    for p in &figure.points {
        let flight = p
            .flight_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        let outcome = if p.class == 1 { "Success" } else { "Failure" };
        writeln!(
            out,
            "  {:>6}  {:<14}  {:>10.1}  {:<7}  {}",
            flight, p.launch_site, p.payload_mass_kg, outcome, p.booster_category
        )?;
    }
    Ok(())
}
