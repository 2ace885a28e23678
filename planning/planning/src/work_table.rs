use apparel::ean::Ean;
use apparel::garment::GarmentVariant;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_with::serde_as;
use thiserror::Error;
use tracing::{debug, info};

/// One garment variant slated for production.
///
/// `selected` is the single authoritative selection flag; bulk operations
/// read it directly rather than via any derived "all selected" state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct WorkItem {
    pub variant: GarmentVariant,
    pub selected: bool,
    pub quantity: u32,
}

impl WorkItem {
    pub fn new(variant: GarmentVariant) -> Self {
        Self {
            variant,
            selected: false,
            quantity: 0,
        }
    }
}

/// The set of garment variants currently on the cutting table, keyed by EAN.
///
/// Invariant: at most one item per EAN. Insertion order is preserved.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct WorkTable {
    #[serde_as(as = "Vec<(_, _)>")]
    #[serde(default)]
    items: IndexMap<Ean, WorkItem>,
}

impl WorkTable {
    /// Adds variants, skipping any EAN already present (set union keyed by
    /// EAN). Returns the number of items actually added.
    pub fn add(&mut self, variants: Vec<GarmentVariant>) -> usize {
        let mut added = 0;

        for variant in variants {
            match self.items.entry(variant.ean.clone()) {
                Entry::Vacant(entry) => {
                    info!("Added garment variant to work table. ean: {}", variant.ean);
                    entry.insert(WorkItem::new(variant));
                    added += 1;
                }
                Entry::Occupied(_) => {
                    debug!("Garment variant already on work table. ean: {}", variant.ean);
                }
            }
        }

        added
    }

    pub fn set_selection(&mut self, ean: &Ean, selected: bool) -> Result<(), WorkTableError> {
        let item = self
            .items
            .get_mut(ean)
            .ok_or(WorkTableError::UnknownVariant(ean.clone()))?;

        item.selected = selected;
        debug!("Selection changed. ean: {}, selected: {}", ean, selected);

        Ok(())
    }

    pub fn set_all_selection(&mut self, selected: bool) {
        for item in self.items.values_mut() {
            item.selected = selected;
        }
        info!("Selection changed for all items. selected: {}", selected);
    }

    /// Adjusts the quantity of every *selected* item that passes the optional
    /// size filter. Quantities saturate at 0 for negative deltas.
    /// Returns the number of items adjusted.
    pub fn bulk_adjust_quantity(&mut self, size: Option<&str>, delta: i32) -> usize {
        let mut adjusted = 0;

        for item in self.items.values_mut() {
            if !item.selected {
                continue;
            }
            if matches!(size, Some(size) if !item.variant.size.eq(size)) {
                continue;
            }

            let old_quantity = item.quantity;
            item.quantity = item.quantity.saturating_add_signed(delta);
            adjusted += 1;

            debug!(
                "Quantity adjusted. ean: {}, old: {}, new: {}",
                item.variant.ean, old_quantity, item.quantity
            );
        }

        info!("Bulk quantity adjustment. delta: {}, size: {:?}, adjusted: {}", delta, size, adjusted);

        adjusted
    }

    /// Removes every selected item. Returns the number of items removed.
    pub fn remove_selected(&mut self) -> usize {
        let before = self.items.len();

        self.items.retain(|ean, item| {
            if item.selected {
                info!("Removed garment variant from work table. ean: {}", ean);
            }
            !item.selected
        });

        before - self.items.len()
    }

    pub fn set_quantity(&mut self, ean: &Ean, quantity: u32) -> Result<(), WorkTableError> {
        let item = self
            .items
            .get_mut(ean)
            .ok_or(WorkTableError::UnknownVariant(ean.clone()))?;

        info!("Quantity set. ean: {}, old: {}, new: {}", ean, item.quantity, quantity);
        item.quantity = quantity;

        Ok(())
    }

    pub fn get(&self, ean: &Ean) -> Option<&WorkItem> {
        self.items.get(ean)
    }

    pub fn quantity_for(&self, ean: &Ean) -> Option<u32> {
        self.items.get(ean).map(|item| item.quantity)
    }

    pub fn items(&self) -> impl Iterator<Item = &WorkItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total pieces in production across the whole table.
    pub fn total_quantity(&self) -> u64 {
        self.items
            .values()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        info!("Work table cleared.");
    }
}

#[derive(Debug, Error)]
pub enum WorkTableError {
    #[error("Unknown garment variant. ean: {0}")]
    UnknownVariant(Ean),
}
