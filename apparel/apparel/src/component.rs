use crate::ean::Ean;

/// A raw-material variant (fabric, button, zip, thread), identified by EAN.
/// Immutable, sourced from the component catalog.
#[derive(Debug, Clone)]
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ComponentVariant {
    pub reference: String,
    pub name: String,
    pub color: String,
    /// Unit of measure the component is purchased in, e.g. 'm', 'Un'.
    pub unit: String,
    pub ean: Ean,
}

impl ComponentVariant {
    pub fn new(reference: String, name: String, color: String, unit: String, ean: Ean) -> Self {
        Self {
            reference,
            name,
            color,
            unit,
            ean,
        }
    }
}

#[cfg(feature = "testing")]
impl Default for ComponentVariant {
    fn default() -> Self {
        Self {
            reference: "Default Reference".to_string(),
            name: "Default Component".to_string(),
            color: "Default Color".to_string(),
            unit: "Un".to_string(),
            ean: Ean::from("0000000000001"),
        }
    }
}
