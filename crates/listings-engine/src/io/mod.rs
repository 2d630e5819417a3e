//! Property persistence.
//!
//! The engine only needs read-by-id and upsert from the store; the
//! description is written back as the opaque string produced by the editor.
//! Writes are last-write-wins with no locking or merging.

mod json_dir;
mod memory;

use std::path::{Path, PathBuf};

use crate::models::{Enquiry, Property, PropertyId};

pub use json_dir::JsonDirStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid data directory: {0}")]
    InvalidDataDir(String),
    #[error("Invalid record id: {0:?}")]
    InvalidId(String),
    #[error("Malformed record {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait PropertyStore {
    fn get(&self, id: &PropertyId) -> Result<Option<Property>, IoError>;

    /// Insert or replace by id
    fn upsert(&self, property: &Property) -> Result<(), IoError>;

    fn list(&self) -> Result<Vec<Property>, IoError>;

    fn record_enquiry(&self, enquiry: &Enquiry) -> Result<(), IoError>;

    fn enquiries_for(&self, property_id: &PropertyId) -> Result<Vec<Enquiry>, IoError>;

    /// Replace only the description field. Returns `false` if the property
    /// does not exist.
    fn save_description(&self, id: &PropertyId, description: &str) -> Result<bool, IoError> {
        let Some(mut property) = self.get(id)? else {
            return Ok(false);
        };
        property.description = description.to_string();
        property.updated_at = chrono::Utc::now();
        self.upsert(&property)?;
        log::info!("Saved description for property {id}");
        Ok(true)
    }
}

pub fn validate_data_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDataDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Ids become file names, so only a conservative character set is allowed
pub(crate) fn check_id(id: &str) -> Result<(), IoError> {
    let ok = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(IoError::InvalidId(id.to_string()))
    }
}
