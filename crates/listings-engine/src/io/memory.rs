use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::{IoError, PropertyStore};
use crate::models::{Enquiry, Property, PropertyId};

#[derive(Debug, Default)]
struct Inner {
    properties: BTreeMap<PropertyId, Property>,
    enquiries: Vec<Enquiry>,
}

/// Volatile store, for previews and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock still holds consistent data: every write is a single insert
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PropertyStore for MemoryStore {
    fn get(&self, id: &PropertyId) -> Result<Option<Property>, IoError> {
        Ok(self.lock().properties.get(id).cloned())
    }

    fn upsert(&self, property: &Property) -> Result<(), IoError> {
        self.lock()
            .properties
            .insert(property.id.clone(), property.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Property>, IoError> {
        Ok(self.lock().properties.values().cloned().collect())
    }

    fn record_enquiry(&self, enquiry: &Enquiry) -> Result<(), IoError> {
        self.lock().enquiries.push(enquiry.clone());
        Ok(())
    }

    fn enquiries_for(&self, property_id: &PropertyId) -> Result<Vec<Enquiry>, IoError> {
        Ok(self
            .lock()
            .enquiries
            .iter()
            .filter(|e| &e.property_id == property_id)
            .cloned()
            .collect())
    }
}
