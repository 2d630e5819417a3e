use super::property::{ListingType, Property, PropertyType};

/// Public search criteria. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Case-insensitive match against title and location
    pub query: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub featured_only: bool,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(query) = self.query.as_deref().map(str::trim)
            && !query.is_empty()
        {
            let query = query.to_lowercase();
            let hit = property.title.to_lowercase().contains(&query)
                || property.location.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }
        if self.min_bedrooms.is_some_and(|min| property.bedrooms < min) {
            return false;
        }
        if self
            .property_type
            .is_some_and(|t| property.property_type != t)
        {
            return false;
        }
        if self
            .listing_type
            .is_some_and(|t| property.listing_type != t)
        {
            return false;
        }
        !(self.featured_only && !property.featured)
    }

    /// Matching properties, featured first then newest first
    pub fn apply<'a>(&self, properties: impl IntoIterator<Item = &'a Property>) -> Vec<&'a Property> {
        let mut matched: Vec<&Property> = properties
            .into_iter()
            .filter(|p| self.matches(p))
            .collect();
        matched.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn listings() -> Vec<Property> {
        let now = Utc::now();
        let mut flat = Property::new(
            "City centre flat",
            1200,
            "Bristol",
            PropertyType::Apartment,
            ListingType::Rent,
        );
        flat.bedrooms = 1;
        flat.created_at = now - Duration::days(3);

        let mut house = Property::new(
            "Family house",
            450000,
            "Bath",
            PropertyType::House,
            ListingType::Sale,
        );
        house.bedrooms = 4;
        house.created_at = now - Duration::days(2);

        let mut barn = Property::new(
            "Barn conversion",
            600000,
            "Near Bath",
            PropertyType::House,
            ListingType::Sale,
        );
        barn.bedrooms = 3;
        barn.featured = true;
        barn.created_at = now - Duration::days(10);

        vec![flat, house, barn]
    }

    fn titles(found: Vec<&Property>) -> Vec<&str> {
        found.into_iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_sorts_featured_then_newest() {
        let all = listings();
        assert_eq!(
            titles(PropertyFilter::default().apply(&all)),
            vec!["Barn conversion", "Family house", "City centre flat"]
        );
    }

    #[test]
    fn test_query_matches_location_case_insensitively() {
        let all = listings();
        let filter = PropertyFilter {
            query: Some("  bath ".to_string()),
            ..PropertyFilter::default()
        };
        assert_eq!(
            titles(filter.apply(&all)),
            vec!["Barn conversion", "Family house"]
        );
    }

    #[test]
    fn test_price_and_bedroom_bounds() {
        let all = listings();
        let filter = PropertyFilter {
            min_price: Some(100000),
            max_price: Some(500000),
            min_bedrooms: Some(4),
            ..PropertyFilter::default()
        };
        assert_eq!(titles(filter.apply(&all)), vec!["Family house"]);
    }

    #[test]
    fn test_type_and_listing_filters() {
        let all = listings();
        let rentals = PropertyFilter {
            listing_type: Some(ListingType::Rent),
            ..PropertyFilter::default()
        };
        assert_eq!(titles(rentals.apply(&all)), vec!["City centre flat"]);

        let houses_featured = PropertyFilter {
            property_type: Some(PropertyType::House),
            featured_only: true,
            ..PropertyFilter::default()
        };
        assert_eq!(titles(houses_featured.apply(&all)), vec!["Barn conversion"]);
    }
}
