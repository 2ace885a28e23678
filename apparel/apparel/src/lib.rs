pub mod component;
pub mod ean;
pub mod garment;
