use std::fs::File;

use anyhow::{anyhow, Context, Error};
use apparel::component::ComponentVariant;
use apparel::ean::Ean;
use apparel::garment::GarmentVariant;
use csv::StringRecord;
use thiserror::Error;
use tracing::Level;
use tracing::{info, trace};
use util::source::Source;
use util::text::normalize_header;

pub type CatalogSource = Source;

#[tracing::instrument(level = Level::DEBUG)]
pub fn load_garments(source: &CatalogSource) -> Result<Vec<GarmentVariant>, Error> {
    info!("Loading garment catalog. source: {}", source);

    let path = source
        .path()
        .map_err(|error| anyhow!("Unsupported source type. cause: {:?}", error))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .from_path(path.clone())
        .with_context(|| format!("Error reading garment catalog. file: {}", path.display()))?;

    normalize_headers(&mut csv_reader)?;

    let mut garments: Vec<GarmentVariant> = vec![];

    for result in csv_reader.deserialize() {
        let record: crate::csv::GarmentRecord =
            result.with_context(|| "Deserializing garment record".to_string())?;

        trace!("{:?}", record);

        let garment = record
            .build_garment_variant()
            .with_context(|| format!("Building garment variant from record. record: {:?}", record))?;

        garments.push(garment);
    }
    Ok(garments)
}

#[tracing::instrument(level = Level::DEBUG)]
pub fn load_components(source: &CatalogSource) -> Result<Vec<ComponentVariant>, Error> {
    info!("Loading component catalog. source: {}", source);

    let path = source
        .path()
        .map_err(|error| anyhow!("Unsupported source type. cause: {:?}", error))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .from_path(path.clone())
        .with_context(|| format!("Error reading component catalog. file: {}", path.display()))?;

    normalize_headers(&mut csv_reader)?;

    let mut components: Vec<ComponentVariant> = vec![];

    for result in csv_reader.deserialize() {
        let record: crate::csv::ComponentRecord =
            result.with_context(|| "Deserializing component record".to_string())?;

        trace!("{:?}", record);

        let component = record
            .build_component_variant()
            .with_context(|| format!("Building component variant from record. record: {:?}", record))?;

        components.push(component);
    }
    Ok(components)
}

/// Catalog headers vary in case and surrounding whitespace between exports;
/// they are normalized before deserialization.
fn normalize_headers(reader: &mut csv::Reader<File>) -> Result<(), csv::Error> {
    let headers = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect::<Vec<_>>();

    reader.set_headers(StringRecord::from(headers));

    Ok(())
}

#[derive(Debug, Error)]
pub enum CatalogLookupError {
    #[error("No catalog row matches. ean: {0}")]
    UnknownEan(Ean),
}

pub fn find_garments_by_eans(
    catalog: &[GarmentVariant],
    eans: &[Ean],
) -> Result<Vec<GarmentVariant>, CatalogLookupError> {
    eans.iter()
        .map(|ean| {
            catalog
                .iter()
                .find(|garment| garment.ean.eq(ean))
                .cloned()
                .ok_or(CatalogLookupError::UnknownEan(ean.clone()))
        })
        .collect()
}

pub fn find_component_by_ean(
    catalog: &[ComponentVariant],
    ean: &Ean,
) -> Result<ComponentVariant, CatalogLookupError> {
    catalog
        .iter()
        .find(|component| component.ean.eq(ean))
        .cloned()
        .ok_or(CatalogLookupError::UnknownEan(ean.clone()))
}
