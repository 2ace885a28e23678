use std::path::Path;

use anyhow::{Context, Error};
use csv::QuoteStyle;
use planning::assignment::AssignmentLedger;
use tracing::info;

use crate::csv::LedgerRecord;

/// Writes the assignment ledger in the ERP import layout:
/// garment reference, garment color, garment size, component name,
/// consumption, unit.
pub fn store_ledger(output_path: &Path, ledger: &AssignmentLedger) -> Result<(), Error> {
    info!("Storing ledger. path: {}, records: {}", output_path.display(), ledger.len());

    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(output_path)
        .with_context(|| format!("Error writing ledger. file: {}", output_path.display()))?;

    for record in ledger.records() {
        writer.serialize(LedgerRecord::from(record))?;
    }

    writer.flush()?;

    Ok(())
}
