use std::path::Path;

use unicode_range_finder::ucd::Database;
use unicode_range_finder::AllowedBounds;

use crate::Error;
use crate::Logger;

/// Rebuilds the codepoint table from Unicode Character Database XML.
pub fn generate(ucd_file: &Path, bounds: AllowedBounds, table_file: &Path) -> Result<(), Error> {
    log::info!("Reading {}", ucd_file.display());
    let database = Database::open(ucd_file)?;
    let table = {
        let progress = Logger::progress(
            database.assignments().len() as u64,
            "Building codepoint table",
        );
        database.to_table(bounds, || progress.inc(1))
    };
    table.save(table_file)?;
    log::info!(
        "Wrote {} codepoints ({}) to {}",
        table.len(),
        bounds,
        table_file.display()
    );
    Ok(())
}
