use itertools::Itertools;
use planning::assignment::{self, DestinationFilter};
use planning::purchase::calculate_purchase_requirements;
use planning::session::Session;
use stores::catalog;
use stores::ledger::store_ledger;
use tracing::{debug, info};
use util::source::Source;

use crate::opts::Command;

/// Applies one command to the session. Returns 'true' if the session was
/// modified and needs to be saved.
pub(crate) fn execute(session: &mut Session, command: &Command) -> anyhow::Result<bool> {
    match command {
        Command::Create => {
            info!("Created session.");
            Ok(true)
        }

        Command::Add {
            garments,
            eans,
        } => {
            let source = Source::try_from_path(garments.clone())?;
            let garment_catalog = catalog::load_garments(&source)?;
            let variants = catalog::find_garments_by_eans(&garment_catalog, eans)?;

            let added = session.work_table.add(variants);
            info!("Added garment variants. requested: {}, added: {}", eans.len(), added);

            Ok(true)
        }

        Command::Select {
            ean,
            action,
        } => {
            session
                .work_table
                .set_selection(ean, action.to_selected())?;
            Ok(true)
        }

        Command::SelectAll {
            action,
        } => {
            session
                .work_table
                .set_all_selection(action.to_selected());
            Ok(true)
        }

        Command::SetQuantity {
            ean,
            quantity,
        } => {
            session
                .work_table
                .set_quantity(ean, *quantity)?;
            Ok(true)
        }

        Command::AdjustQuantity {
            delta,
            size,
        } => {
            let adjusted = session
                .work_table
                .bulk_adjust_quantity(size.as_deref(), *delta);
            info!("Adjusted quantities. delta: {}, adjusted: {}", delta, adjusted);
            Ok(true)
        }

        Command::RemoveSelected => {
            let removed = session.work_table.remove_selected();
            info!("Removed selected items. removed: {}", removed);
            Ok(true)
        }

        Command::Assign {
            components,
            ean,
            consumption,
            references,
            colors,
            sizes,
        } => {
            let source = Source::try_from_path(components.clone())?;
            let component_catalog = catalog::load_components(&source)?;
            let component = catalog::find_component_by_ean(&component_catalog, ean)?;

            let filter = DestinationFilter {
                references: references.iter().cloned().collect(),
                colors: colors.iter().cloned().collect(),
                sizes: sizes.iter().cloned().collect(),
            };

            debug!(
                "Destination filter. references: [{}], colors: [{}], sizes: [{}]",
                references.iter().join(", "),
                colors.iter().join(", "),
                sizes.iter().join(", ")
            );

            let outcome = assignment::assign(session, &component, *consumption, &filter)?;
            info!(
                "Assignment complete. batch: {}, matched: {}, created: {}",
                outcome.batch, outcome.matched, outcome.created
            );

            Ok(true)
        }

        Command::Undo => {
            let removed = assignment::undo_last(session);
            info!("Undo complete. removed: {}", removed);
            Ok(true)
        }

        Command::SetConsumption {
            row,
            consumption,
        } => {
            session
                .ledger
                .set_consumption(*row, *consumption)?;
            Ok(true)
        }

        Command::RemoveRecord {
            row,
        } => {
            session.ledger.remove_record(*row)?;
            Ok(true)
        }

        Command::ExportLedger {
            output,
        } => {
            store_ledger(output, &session.ledger)?;
            Ok(false)
        }

        Command::Purchases => {
            let requirements = calculate_purchase_requirements(session);

            println!("{:<14} {:<24} {:<14} {:<6} {:>14}", "Reference", "Name", "Color", "Unit", "Total");
            for requirement in requirements.iter() {
                println!(
                    "{:<14} {:<24} {:<14} {:<6} {:>14}",
                    requirement.reference, requirement.name, requirement.color, requirement.unit, requirement.total
                );
            }

            Ok(false)
        }

        Command::Status => {
            println!(
                "Work table: {} items, {} pieces",
                session.work_table.len(),
                session.work_table.total_quantity()
            );
            for item in session.work_table.items() {
                println!(
                    "{} {} '{}' {} / {} quantity: {} selected: {}",
                    item.variant.ean,
                    item.variant.reference,
                    item.variant.name,
                    item.variant.color,
                    item.variant.size,
                    item.quantity,
                    item.selected
                );
            }

            println!("Ledger: {} records", session.ledger.len());
            for (row, record) in session.ledger.records().iter().enumerate() {
                println!(
                    "{}: {} {} / {} <- '{}' {} {} batch: {}",
                    row,
                    record.garment_reference,
                    record.garment_color,
                    record.garment_size,
                    record.component_name,
                    record.consumption,
                    record.unit,
                    record.batch
                );
            }

            Ok(false)
        }

        Command::Reset => {
            session.reset();
            Ok(true)
        }
    }
}
