use dioxus::prelude::*;
use listings_engine::{ListingType, PropertyFilter, PropertyType};

const LISTING_TYPES: [ListingType; 2] = [ListingType::Sale, ListingType::Rent];

fn property_type_key(property_type: PropertyType) -> &'static str {
    match property_type {
        PropertyType::House => "house",
        PropertyType::Apartment => "apartment",
        PropertyType::Land => "land",
        PropertyType::Commercial => "commercial",
    }
}

fn listing_type_key(listing_type: ListingType) -> &'static str {
    match listing_type {
        ListingType::Sale => "sale",
        ListingType::Rent => "rent",
    }
}

fn parse_property_type(key: &str) -> Option<PropertyType> {
    PropertyType::ALL
        .into_iter()
        .find(|t| property_type_key(*t) == key)
}

fn parse_listing_type(key: &str) -> Option<ListingType> {
    LISTING_TYPES.into_iter().find(|t| listing_type_key(*t) == key)
}

/// Blank or non-numeric input clears the bound. Thousands separators are accepted.
fn parse_amount(input: &str) -> Option<u64> {
    let digits: String = input.chars().filter(|c| *c != ',' && *c != '_').collect();
    digits.trim().parse().ok()
}

fn amount_text(amount: Option<u64>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_default()
}

/// Search and filter controls for the property list
#[component]
pub fn FilterBar(filter: PropertyFilter, on_change: EventHandler<PropertyFilter>) -> Element {
    let query = filter.query.clone().unwrap_or_default();
    let min_price = amount_text(filter.min_price);
    let max_price = amount_text(filter.max_price);
    let min_bedrooms = filter
        .min_bedrooms
        .map(|b| b.to_string())
        .unwrap_or_default();
    let property_type = filter.property_type.map(property_type_key).unwrap_or("");
    let listing_type = filter.listing_type.map(listing_type_key).unwrap_or("");

    // Each control edits a copy of the current filter
    let update = {
        let filter = filter.clone();
        move |edit: fn(&mut PropertyFilter, String)| {
            let filter = filter.clone();
            move |evt: FormEvent| {
                let mut next = filter.clone();
                edit(&mut next, evt.value());
                on_change.call(next);
            }
        }
    };

    rsx! {
        div {
            class: "filter-bar",
            input {
                class: "filter-query",
                r#type: "search",
                placeholder: "Search title or location",
                value: "{query}",
                oninput: update(|f, v| f.query = Some(v).filter(|q| !q.trim().is_empty())),
            }
            input {
                class: "filter-price",
                placeholder: "Min price",
                value: "{min_price}",
                onchange: update(|f, v| f.min_price = parse_amount(&v)),
            }
            input {
                class: "filter-price",
                placeholder: "Max price",
                value: "{max_price}",
                onchange: update(|f, v| f.max_price = parse_amount(&v)),
            }
            select {
                value: "{min_bedrooms}",
                onchange: update(|f, v| f.min_bedrooms = v.parse().ok()),
                option { value: "", selected: min_bedrooms.is_empty(), "Any beds" }
                for beds in 1..=5u32 {
                    option {
                        key: "{beds}",
                        value: "{beds}",
                        selected: min_bedrooms == beds.to_string(),
                        "{beds}+ beds"
                    }
                }
            }
            select {
                value: "{property_type}",
                onchange: update(|f, v| f.property_type = parse_property_type(&v)),
                option { value: "", selected: property_type.is_empty(), "Any type" }
                for t in PropertyType::ALL {
                    option {
                        value: property_type_key(t),
                        selected: property_type == property_type_key(t),
                        {t.label()}
                    }
                }
            }
            select {
                value: "{listing_type}",
                onchange: update(|f, v| f.listing_type = parse_listing_type(&v)),
                option { value: "", selected: listing_type.is_empty(), "Sale or rent" }
                for t in LISTING_TYPES {
                    option {
                        value: listing_type_key(t),
                        selected: listing_type == listing_type_key(t),
                        {t.label()}
                    }
                }
            }
            label {
                class: "filter-featured",
                input {
                    r#type: "checkbox",
                    checked: filter.featured_only,
                    onchange: {
                        let filter = filter.clone();
                        move |evt: FormEvent| {
                            let mut next = filter.clone();
                            next.featured_only = evt.checked();
                            on_change.call(next);
                        }
                    },
                }
                span { "Featured only" }
            }
        }
    }
}
