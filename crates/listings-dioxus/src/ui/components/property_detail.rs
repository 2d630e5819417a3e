use dioxus::prelude::*;
use listings_engine::{Description, Enquiry, Property, render_description};

use crate::ui::components::{DescriptionView, EnquiryForm};

#[component]
pub fn PropertyDetail(
    property: Property,
    on_edit: EventHandler<()>,
    on_enquiry: EventHandler<Enquiry>,
) -> Element {
    // Listings that predate the builder still show their plain text
    let nodes = render_description(&Description::from_legacy(&property.description));
    let price = property.display_price();
    let map_url = property.map_embed_url();
    let area = property.area_sqm.map(|a| format!("{a} sqm"));

    rsx! {
        article {
            class: "property-detail",
            header {
                class: "property-detail-header",
                div {
                    h1 { "{property.title}" }
                    p { class: "property-location", "{property.location}" }
                }
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| on_edit.call(()),
                    "Edit description"
                }
            }
            div {
                class: "property-facts",
                span { class: "property-price", "{price}" }
                span { {property.listing_type.label()} }
                span { {property.property_type.label()} }
                span { "{property.bedrooms} bed" }
                span { "{property.bathrooms} bath" }
                if let Some(area) = area {
                    span { "{area}" }
                }
            }
            if !property.images.is_empty() {
                div {
                    class: "property-gallery",
                    for (index, image) in property.images.iter().enumerate() {
                        img { key: "{index}", src: "{image}", alt: "{property.title}" }
                    }
                }
            }
            DescriptionView { nodes }
            if let Some(url) = map_url {
                iframe {
                    class: "property-map",
                    title: "Map",
                    src: "{url}",
                }
            }
            EnquiryForm { property_id: property.id.clone(), on_submit: on_enquiry }
        }
    }
}
