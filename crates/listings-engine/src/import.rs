//! Bulk import of already-tabular property records.
//!
//! Each record's description goes through the same parser contract as the
//! editor: JSON block arrays are normalized, legacy text is wrapped as a
//! single Text block. A failing record is reported and skipped; the rest of
//! the batch still lands.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;

use crate::description::Description;
use crate::io::PropertyStore;
use crate::models::{ListingType, Property, PropertyId, PropertyType};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportRecord {
    /// Existing id to update; a new property is created when absent
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub price: u64,
    pub location: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub area_sqm: Option<u32>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportFailure {
    /// Zero-based position in the batch
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub created: usize,
    pub updated: usize,
    pub failed: Vec<ImportFailure>,
}

/// Read a JSON array of records from disk
pub fn load_records(path: &Path) -> anyhow::Result<Vec<ImportRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file {}", path.display()))?;
    let records = serde_json::from_str(&content)
        .with_context(|| format!("Import file {} is not a JSON array of records", path.display()))?;
    Ok(records)
}

pub fn import_records(
    store: &impl PropertyStore,
    records: impl IntoIterator<Item = ImportRecord>,
) -> ImportReport {
    let mut report = ImportReport::default();

    for (row, record) in records.into_iter().enumerate() {
        match import_one(store, record) {
            Ok(true) => report.created += 1,
            Ok(false) => report.updated += 1,
            Err(e) => {
                log::warn!("Import row {row} failed: {e:#}");
                report.failed.push(ImportFailure {
                    row,
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    log::info!(
        "Import finished: {} created, {} updated, {} failed",
        report.created,
        report.updated,
        report.failed.len()
    );
    report
}

/// Returns `true` when a new property was created
fn import_one(store: &impl PropertyStore, record: ImportRecord) -> anyhow::Result<bool> {
    if record.title.trim().is_empty() {
        anyhow::bail!("title is empty");
    }

    let existing = match &record.id {
        Some(id) => store.get(&PropertyId::from(id.as_str()))?,
        None => None,
    };
    let created = existing.is_none();

    let mut property = existing.unwrap_or_else(|| {
        let mut fresh = Property::new(
            record.title.clone(),
            record.price,
            record.location.clone(),
            record.property_type,
            record.listing_type,
        );
        if let Some(id) = &record.id {
            fresh.id = PropertyId::from(id.as_str());
        }
        fresh
    });

    property.title = record.title;
    property.price = record.price;
    property.location = record.location;
    property.property_type = record.property_type;
    property.listing_type = record.listing_type;
    property.bedrooms = record.bedrooms;
    property.bathrooms = record.bathrooms;
    property.area_sqm = record.area_sqm;
    property.images = record.images;
    property.featured = record.featured;
    property.description = Description::from_legacy(&record.description).to_json()?;
    property.updated_at = Utc::now();

    store.upsert(&property)?;
    Ok(created)
}
