use dioxus::prelude::*;
use listings_engine::{Property, PropertyId};

#[component]
pub fn PropertyList(
    properties: Vec<Property>,
    selected: Option<PropertyId>,
    on_select: EventHandler<PropertyId>,
) -> Element {
    rsx! {
        div {
            class: "property-list",
            if properties.is_empty() {
                p { class: "property-list-empty", "No properties match your search" }
            }
            for property in properties.iter() {
                PropertyCard {
                    key: "{property.id}",
                    is_selected: selected.as_ref() == Some(&property.id),
                    property: property.clone(),
                    on_select,
                }
            }
        }
    }
}

#[component]
fn PropertyCard(property: Property, is_selected: bool, on_select: EventHandler<PropertyId>) -> Element {
    let price = property.display_price();
    let facts = format!(
        "{} · {} bed · {} bath",
        property.property_type.label(),
        property.bedrooms,
        property.bathrooms
    );
    let class = if is_selected {
        "property-card selected"
    } else {
        "property-card"
    };
    let id = property.id.clone();

    rsx! {
        div {
            class: class,
            onclick: move |_| on_select.call(id.clone()),
            if let Some(image) = property.images.first() {
                img { class: "property-thumb", src: "{image}", alt: "{property.title}" }
            }
            div {
                class: "property-card-body",
                h3 {
                    if property.featured {
                        span { class: "badge-featured", "Featured" }
                    }
                    "{property.title}"
                }
                p { class: "property-price", "{price}" }
                p { class: "property-location", "{property.location}" }
                p { class: "property-facts", "{facts}" }
                span { class: "badge-listing", {property.listing_type.label()} }
            }
        }
    }
}
