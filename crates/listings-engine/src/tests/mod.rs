use crate::models::{ListingType, Property, PropertyType};
use tempfile::TempDir;

pub fn create_test_data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn sample_property(title: &str) -> Property {
    let mut property = Property::new(
        title,
        275000,
        "Frome",
        PropertyType::House,
        ListingType::Sale,
    );
    property.bedrooms = 3;
    property.bathrooms = 1;
    property
}
