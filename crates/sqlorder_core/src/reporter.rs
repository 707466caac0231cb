use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::{
    constants::TYPED_DIRS,
    types::{LoadPlan, SourceSet},
};

/// Prints the sorted files, one per line, or the whole plan as JSON.
pub fn print_load_order<W: Write>(writer: &mut W, plan: &LoadPlan, json: bool) -> io::Result<()> {
    debug!("Printing load order of {} files (json: {})", plan.files.len(), json);
    if json {
        serde_json::to_writer_pretty(&mut *writer, plan)?;
        writeln!(writer)?;
    } else {
        for file in &plan.files {
            writeln!(writer, "{}", file)?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn print_check_summary<W: Write>(writer: &mut W, sources: &SourceSet) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} is ready to load ({} sql files)",
        "✓".green().bold(),
        sources.root.display().to_string().blue(),
        sources.len().to_string().cyan()
    )?;

    let present: Vec<_> =
        TYPED_DIRS.iter().filter(|c| !sources.files(**c).is_empty()).collect();
    for (idx, category) in present.iter().enumerate() {
        let prefix = if idx == present.len() - 1 { "└──" } else { "├──" };
        let count = sources.files(**category).len();
        writeln!(writer, "{}  {}/ ({} files)", prefix.dimmed(), category.dir_name(), count)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn print_error<W: Write>(writer: &mut W, err: &anyhow::Error) -> io::Result<()> {
    writeln!(writer, "{} {:#}", "✗".red().bold(), err)?;
    writer.flush()?;
    Ok(())
}
