use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::session::Session;

/// Aggregate demand for one distinct component across the whole plan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PurchaseRequirement {
    pub reference: String,
    pub name: String,
    pub color: String,
    pub unit: String,
    pub total: Decimal,
}

/// Computes the total required quantity per distinct component.
///
/// Each ledger record is joined to the work table on garment EAN; a garment
/// removed from the table after assignment contributes quantity 0 rather
/// than an error. Records are grouped by (reference, name, color, unit) and
/// groups whose summed total is not strictly positive are suppressed.
pub fn calculate_purchase_requirements(session: &Session) -> Vec<PurchaseRequirement> {
    let mut totals: BTreeMap<(String, String, String, String), Decimal> = BTreeMap::new();

    for record in session.ledger.records() {
        let quantity = session
            .work_table
            .quantity_for(&record.garment_ean)
            .unwrap_or(0);

        let line_total = record.consumption * Decimal::from(quantity);

        debug!(
            "Purchase line. component: {}, garment: {}, consumption: {}, quantity: {}, line_total: {}",
            record.component_ean, record.garment_ean, record.consumption, quantity, line_total
        );

        let key = (
            record.component_reference.clone(),
            record.component_name.clone(),
            record.component_color.clone(),
            record.unit.clone(),
        );

        *totals.entry(key).or_insert(Decimal::ZERO) += line_total;
    }

    totals
        .into_iter()
        .filter(|(_key, total)| *total > Decimal::ZERO)
        .map(|((reference, name, color, unit), total)| PurchaseRequirement {
            reference,
            name,
            color,
            unit,
            total,
        })
        .collect()
}
