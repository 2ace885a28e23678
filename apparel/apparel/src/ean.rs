use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use thiserror::Error;

/// Barcode identity of a catalog variant, garment or component alike.
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash
)]
pub struct Ean(String);

impl FromStr for Ean {
    type Err = EanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EanError::Empty);
        }
        Ok(Ean(trimmed.to_string()))
    }
}

impl Display for Ean {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for Ean {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Deref for Ean {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum EanError {
    #[error("EAN must not be empty")]
    Empty,
}
