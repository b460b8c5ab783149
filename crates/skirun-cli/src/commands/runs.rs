use anyhow::Result;
use skirun_core::ski_run::{SkiRun, SkiRunRepository};
use std::io::Write;

fn format_run(run: &SkiRun) -> String {
    format!("{:>6}  {:<30}  {:>6} ft", run.id, run.name, run.vertical)
}

fn print_runs(runs: &[SkiRun], json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(runs)?)?;
        return Ok(());
    }

    if runs.is_empty() {
        writeln!(out, "No ski runs.")?;
        return Ok(());
    }

    writeln!(out, "{:>6}  {:<30}  {:>9}", "ID", "Name", "Vertical")?;
    for run in runs {
        writeln!(out, "{}", format_run(run))?;
    }
    Ok(())
}

pub fn list(store: &impl SkiRunRepository, json: bool, out: &mut impl Write) -> Result<()> {
    print_runs(&store.get_all()?, json, out)
}

pub fn get(store: &impl SkiRunRepository, id: i32, json: bool, out: &mut impl Write) -> Result<()> {
    match store.get_by_id(id)? {
        Some(run) if json => writeln!(out, "{}", serde_json::to_string_pretty(&run)?)?,
        Some(run) => writeln!(out, "{}", format_run(&run))?,
        None => writeln!(out, "No ski run with ID {}", id)?,
    }
    Ok(())
}

pub fn add(store: &mut impl SkiRunRepository, run: SkiRun, out: &mut impl Write) -> Result<()> {
    let id = run.id;
    store.insert(run)?;
    writeln!(out, "Added ski run {}", id)?;
    Ok(())
}

pub fn update(store: &mut impl SkiRunRepository, run: SkiRun, out: &mut impl Write) -> Result<()> {
    let id = run.id;
    store.update(run)?;
    writeln!(out, "Updated ski run {}", id)?;
    Ok(())
}

pub fn delete(store: &mut impl SkiRunRepository, id: i32, out: &mut impl Write) -> Result<()> {
    let before = store.len()?;
    store.delete_by_id(id)?;
    let removed = before - store.len()?;
    writeln!(out, "Deleted {} ski run(s) with ID {}", removed, id)?;
    Ok(())
}

pub fn query(
    store: &impl SkiRunRepository,
    min: i32,
    max: i32,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    print_runs(&store.query_by_vertical(min, max)?, json, out)
}
