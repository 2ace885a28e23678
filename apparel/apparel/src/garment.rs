use crate::ean::Ean;

/// A single sellable garment variation, e.g. one (reference, color, size)
/// combination. Immutable, sourced from the garment catalog.
#[derive(Debug, Clone)]
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GarmentVariant {
    pub reference: String,
    pub name: String,
    pub color: String,
    pub size: String,
    pub ean: Ean,
}

impl GarmentVariant {
    pub fn new(reference: String, name: String, color: String, size: String, ean: Ean) -> Self {
        Self {
            reference,
            name,
            color,
            size,
            ean,
        }
    }
}

#[cfg(feature = "testing")]
impl Default for GarmentVariant {
    fn default() -> Self {
        Self {
            reference: "Default Reference".to_string(),
            name: "Default Garment".to_string(),
            color: "Default Color".to_string(),
            size: "Default Size".to_string(),
            ean: Ean::from("0000000000000"),
        }
    }
}
