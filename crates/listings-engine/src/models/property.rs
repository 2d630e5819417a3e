use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::description::{Description, DescriptionError, parse_description};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn fresh() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PropertyId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Land,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Land,
        PropertyType::Commercial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn label(self) -> &'static str {
        match self {
            ListingType::Sale => "For sale",
            ListingType::Rent => "For rent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A listed property.
///
/// `description` is the opaque persisted form of the block description; use
/// [`Property::description_blocks`] to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
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
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn new(
        title: impl Into<String>,
        price: u64,
        location: impl Into<String>,
        property_type: PropertyType,
        listing_type: ListingType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PropertyId::fresh(),
            title: title.into(),
            price,
            location: location.into(),
            property_type,
            listing_type,
            bedrooms: 0,
            bathrooms: 0,
            area_sqm: None,
            coordinates: None,
            images: Vec::new(),
            featured: false,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn description_blocks(&self) -> Description {
        parse_description(self.description.as_str())
    }

    pub fn set_description(&mut self, description: &Description) -> Result<(), DescriptionError> {
        self.description = description.to_json()?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Price with thousands separators, suffixed for rentals
    pub fn display_price(&self) -> String {
        let digits = self.price.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        match self.listing_type {
            ListingType::Sale => format!("${grouped}"),
            ListingType::Rent => format!("${grouped} / month"),
        }
    }

    /// OpenStreetMap embed for the detail page, when coordinates are known
    pub fn map_embed_url(&self) -> Option<String> {
        let Coordinates {
            latitude,
            longitude,
        } = self.coordinates?;
        let delta = 0.01;
        Some(format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={latitude},{longitude}",
            longitude - delta,
            latitude - delta,
            longitude + delta,
            latitude + delta,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{Block, BlockKind};
    use pretty_assertions::assert_eq;

    fn cottage() -> Property {
        Property::new(
            "Riverside cottage",
            350000,
            "Bath",
            PropertyType::House,
            ListingType::Sale,
        )
    }

    #[test]
    fn test_display_price_groups_thousands() {
        let mut property = cottage();
        assert_eq!(property.display_price(), "$350,000");

        property.price = 1250;
        property.listing_type = ListingType::Rent;
        assert_eq!(property.display_price(), "$1,250 / month");

        property.price = 999;
        assert_eq!(property.display_price(), "$999 / month");
    }

    #[test]
    fn test_description_round_trips_through_property() {
        let mut property = cottage();
        let description =
            crate::description::parse_description(r#"[{"id":"d","type":"Divider"}]"#);

        property.set_description(&description).unwrap();

        assert_eq!(
            property.description_blocks().as_slice(),
            &[Block::with_id("d", BlockKind::Divider)]
        );
    }

    #[test]
    fn test_legacy_description_reads_as_empty() {
        let mut property = cottage();
        property.description = "<p>Old listing text</p>".to_string();
        assert!(property.description_blocks().is_empty());
    }

    #[test]
    fn test_map_embed_only_with_coordinates() {
        let mut property = cottage();
        assert_eq!(property.map_embed_url(), None);

        property.coordinates = Some(Coordinates {
            latitude: 51.38,
            longitude: -2.36,
        });
        let url = property.map_embed_url().unwrap();
        assert!(url.contains("marker=51.38,-2.36"));
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{
            "id": "p1",
            "title": "Plot",
            "price": 90000,
            "location": "Wells",
            "property_type": "land",
            "listing_type": "sale",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, PropertyId::from("p1"));
        assert_eq!(property.bedrooms, 0);
        assert!(property.description.is_empty());
        assert!(!property.featured);
    }
}
