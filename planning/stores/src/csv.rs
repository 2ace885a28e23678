use std::str::FromStr;

use apparel::component::ComponentVariant;
use apparel::ean::{Ean, EanError};
use apparel::garment::GarmentVariant;
use planning::assignment::AssignmentRecord;
use rust_decimal::Decimal;
use util::text::normalize_cell;

/// One row of the garment master catalog.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GarmentRecord {
    pub reference: String,
    pub name: String,
    pub color: String,
    pub size: String,
    pub ean: String,
}

impl GarmentRecord {
    pub fn build_garment_variant(&self) -> Result<GarmentVariant, EanError> {
        let ean = Ean::from_str(&normalize_cell(&self.ean))?;

        Ok(GarmentVariant::new(
            normalize_cell(&self.reference),
            normalize_cell(&self.name),
            normalize_cell(&self.color),
            normalize_cell(&self.size),
            ean,
        ))
    }
}

/// One row of the component master catalog.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentRecord {
    pub reference: String,
    pub name: String,
    pub color: String,
    pub unit: String,
    pub ean: String,
}

impl ComponentRecord {
    pub fn build_component_variant(&self) -> Result<ComponentVariant, EanError> {
        let ean = Ean::from_str(&normalize_cell(&self.ean))?;

        Ok(ComponentVariant::new(
            normalize_cell(&self.reference),
            normalize_cell(&self.name),
            normalize_cell(&self.color),
            normalize_cell(&self.unit),
            ean,
        ))
    }
}

/// Export row for the assignment ledger. Column order is what the ERP
/// import expects; the batch id is deliberately excluded.
#[derive(Debug, serde::Serialize)]
pub struct LedgerRecord {
    #[serde(rename = "Reference")]
    pub garment_reference: String,

    #[serde(rename = "Color")]
    pub garment_color: String,

    #[serde(rename = "Size")]
    pub garment_size: String,

    #[serde(rename = "Component")]
    pub component_name: String,

    #[serde(rename = "Consumption")]
    pub consumption: Decimal,

    #[serde(rename = "Unit")]
    pub unit: String,
}

impl From<&AssignmentRecord> for LedgerRecord {
    fn from(record: &AssignmentRecord) -> Self {
        Self {
            garment_reference: record.garment_reference.clone(),
            garment_color: record.garment_color.clone(),
            garment_size: record.garment_size.clone(),
            component_name: record.component_name.clone(),
            consumption: record.consumption,
            unit: record.unit.clone(),
        }
    }
}
