use std::collections::BTreeSet;

use apparel::component::ComponentVariant;
use apparel::ean::Ean;
use apparel::garment::GarmentVariant;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::batch::BatchId;
use crate::session::Session;

/// One ledger row: this component, at this consumption rate, is required
/// for this garment variant. Tagged with the batch that created it.
#[derive(Debug, Clone)]
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct AssignmentRecord {
    pub garment_name: String,
    pub garment_reference: String,
    pub garment_color: String,
    pub garment_size: String,
    pub garment_ean: Ean,

    pub component_reference: String,
    pub component_name: String,
    pub component_color: String,
    pub component_ean: Ean,
    pub unit: String,

    pub consumption: Decimal,
    pub batch: BatchId,
}

impl AssignmentRecord {
    pub fn new(garment: &GarmentVariant, component: &ComponentVariant, consumption: Decimal, batch: BatchId) -> Self {
        Self {
            garment_name: garment.name.clone(),
            garment_reference: garment.reference.clone(),
            garment_color: garment.color.clone(),
            garment_size: garment.size.clone(),
            garment_ean: garment.ean.clone(),
            component_reference: component.reference.clone(),
            component_name: component.name.clone(),
            component_color: component.color.clone(),
            component_ean: component.ean.clone(),
            unit: component.unit.clone(),
            consumption,
            batch,
        }
    }
}

/// The bill-of-materials, an ordered list of assignment records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct AssignmentLedger {
    #[serde(default)]
    records: Vec<AssignmentRecord>,
}

impl AssignmentLedger {
    /// Appends records, silently dropping any that are already present
    /// field-for-field (idempotent union, not strict append).
    pub fn append(&mut self, records: Vec<AssignmentRecord>) -> usize {
        let mut appended = 0;

        for record in records {
            if self.records.contains(&record) {
                trace!("Dropping duplicate assignment record. record: {:?}", record);
                continue;
            }
            self.records.push(record);
            appended += 1;
        }

        appended
    }

    /// Removes every record tagged with the given batch id.
    /// Returns the number of records removed.
    pub fn remove_batch(&mut self, batch: &BatchId) -> usize {
        let before = self.records.len();
        self.records
            .retain(|record| !record.batch.eq(batch));
        before - self.records.len()
    }

    /// Replaces the consumption value of the record at `row`. Identity
    /// columns are read-only on the edit surface; only consumption changes.
    pub fn set_consumption(&mut self, row: usize, consumption: Decimal) -> Result<(), LedgerError> {
        if consumption < Decimal::ZERO {
            return Err(LedgerError::NegativeConsumption(consumption));
        }

        let len = self.records.len();
        let record = self
            .records
            .get_mut(row)
            .ok_or(LedgerError::RowOutOfRange {
                row,
                len,
            })?;

        info!(
            "Consumption updated. row: {}, old: {}, new: {}",
            row, record.consumption, consumption
        );
        record.consumption = consumption;

        Ok(())
    }

    pub fn remove_record(&mut self, row: usize) -> Result<AssignmentRecord, LedgerError> {
        if row >= self.records.len() {
            return Err(LedgerError::RowOutOfRange {
                row,
                len: self.records.len(),
            });
        }

        let record = self.records.remove(row);
        info!("Removed assignment record. row: {}, record: {:?}", row, record);

        Ok(record)
    }

    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        info!("Assignment ledger cleared.");
    }
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Consumption must not be negative. consumption: {0}")]
    NegativeConsumption(Decimal),

    #[error("Row out of range. row: {row}, rows: {len}")]
    RowOutOfRange { row: usize, len: usize },
}

/// Destination selection over the work table: three value sets, applied as
/// successive narrowing stages. An empty set passes everything at that
/// stage, so the composition is the conjunction of the membership tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct DestinationFilter {
    pub references: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
}

impl DestinationFilter {
    pub fn matches(&self, variant: &GarmentVariant) -> bool {
        fn stage(allowed: &BTreeSet<String>, value: &str) -> bool {
            allowed.is_empty() || allowed.contains(value)
        }

        stage(&self.references, &variant.reference)
            && stage(&self.colors, &variant.color)
            && stage(&self.sizes, &variant.size)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.references.is_empty() && self.colors.is_empty() && self.sizes.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("Consumption must not be negative. consumption: {0}")]
    NegativeConsumption(Decimal),
}

#[derive(Debug, PartialEq, Eq)]
pub struct AssignmentOutcome {
    pub batch: BatchId,
    /// Work items matched by the destination filter.
    pub matched: usize,
    /// Records actually appended; duplicates are dropped on append.
    pub created: usize,
}

/// Emits one assignment record per work item surviving the destination
/// filter, all sharing a fresh batch id, and stores that id as the
/// single-slot undo token.
///
/// All-or-nothing: a negative consumption is rejected before any mutation.
/// An empty match is not an error; the engine emits an empty batch.
pub fn assign(
    session: &mut Session,
    component: &ComponentVariant,
    consumption: Decimal,
    filter: &DestinationFilter,
) -> Result<AssignmentOutcome, AssignmentError> {
    if consumption < Decimal::ZERO {
        return Err(AssignmentError::NegativeConsumption(consumption));
    }

    let destinations: Vec<GarmentVariant> = session
        .work_table
        .items()
        .filter(|item| filter.matches(&item.variant))
        .map(|item| item.variant.clone())
        .collect();

    if destinations.is_empty() {
        warn!("Destination filter matched no work items. filter: {:?}", filter);
    }

    let batch = session.next_batch_id();

    let records = destinations
        .iter()
        .map(|garment| AssignmentRecord::new(garment, component, consumption, batch))
        .collect::<Vec<_>>();

    let created = session.ledger.append(records);
    session.last_batch = Some(batch);

    info!(
        "Assigned component. component: {}, consumption: {}, batch: {}, matched: {}, created: {}",
        component.ean,
        consumption,
        batch,
        destinations.len(),
        created
    );

    Ok(AssignmentOutcome {
        batch,
        matched: destinations.len(),
        created,
    })
}

/// Removes every record of the last batch and clears the undo token.
/// Undo is single-level; with no token this is a no-op.
pub fn undo_last(session: &mut Session) -> usize {
    match session.last_batch.take() {
        Some(batch) => {
            let removed = session.ledger.remove_batch(&batch);
            info!("Undid last assignment. batch: {}, removed: {}", batch, removed);
            removed
        }
        None => {
            debug!("No assignment to undo.");
            0
        }
    }
}
