use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{IoError, PropertyStore, check_id, validate_data_dir};
use crate::models::{Enquiry, Property, PropertyId};

const PROPERTIES_DIR: &str = "properties";
const ENQUIRIES_DIR: &str = "enquiries";

/// Stores each record as a pretty-printed JSON file under a data directory:
///
/// ```text
/// <root>/properties/<property-id>.json
/// <root>/enquiries/<property-id>/<enquiry-id>.json
/// ```
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Open an existing data directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, IoError> {
        let root = root.into();
        validate_data_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn property_path(id: &PropertyId) -> Result<RelativePathBuf, IoError> {
        check_id(id.as_str())?;
        Ok(RelativePath::new(PROPERTIES_DIR).join(format!("{id}.json")))
    }

    fn read_record<T: DeserializeOwned>(
        &self,
        relative_path: &RelativePath,
    ) -> Result<Option<T>, IoError> {
        let content = match read_file(relative_path, &self.root) {
            Ok(content) => content,
            Err(IoError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| IoError::Malformed {
                path: relative_path.to_path(&self.root),
                source,
            })
    }

    fn write_record<T: Serialize>(
        &self,
        relative_path: &RelativePath,
        record: &T,
    ) -> Result<(), IoError> {
        let content = serde_json::to_string_pretty(record)?;
        write_file(relative_path, &self.root, &content)
    }

    /// Every parseable record in a directory. Unreadable files are logged
    /// and skipped so one bad record does not hide the rest.
    fn read_all<T: DeserializeOwned>(&self, dir: &RelativePath) -> Result<Vec<T>, IoError> {
        let absolute = dir.to_path(&self.root);
        if !absolute.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&absolute)? {
            let path = entry?.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == "json")
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
            {
                names.push(name.to_string());
            }
        }
        names.sort();

        let mut records = Vec::with_capacity(names.len());
        for name in names {
            match self.read_record(&dir.join(&name)) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => log::warn!("Skipping unreadable record: {e}"),
            }
        }
        Ok(records)
    }
}

impl PropertyStore for JsonDirStore {
    fn get(&self, id: &PropertyId) -> Result<Option<Property>, IoError> {
        let path = Self::property_path(id)?;
        self.read_record(&path)
    }

    fn upsert(&self, property: &Property) -> Result<(), IoError> {
        let path = Self::property_path(&property.id)?;
        self.write_record(&path, property)?;
        log::info!("Wrote property {} ({})", property.id, property.title);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Property>, IoError> {
        self.read_all(RelativePath::new(PROPERTIES_DIR))
    }

    fn record_enquiry(&self, enquiry: &Enquiry) -> Result<(), IoError> {
        check_id(enquiry.property_id.as_str())?;
        check_id(&enquiry.id)?;
        let path = RelativePath::new(ENQUIRIES_DIR)
            .join(enquiry.property_id.as_str())
            .join(format!("{}.json", enquiry.id));
        self.write_record(&path, enquiry)?;
        log::info!("Recorded enquiry for property {}", enquiry.property_id);
        Ok(())
    }

    fn enquiries_for(&self, property_id: &PropertyId) -> Result<Vec<Enquiry>, IoError> {
        check_id(property_id.as_str())?;
        let dir = RelativePath::new(ENQUIRIES_DIR).join(property_id.as_str());
        let mut enquiries: Vec<Enquiry> = self.read_all(&dir)?;
        enquiries.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(enquiries)
    }
}

fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}
