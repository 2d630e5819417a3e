use dioxus::prelude::*;
use listings_engine::{Enquiry, JsonDirStore, Property, PropertyFilter, PropertyId, PropertyStore};
use std::path::PathBuf;

use crate::ui::components::{
    DescriptionBuilder, ErrorScreen, FilterBar, PropertyDetail, PropertyList,
};

const LISTINGS_CSS: &str = include_str!("assets/listings.css");

fn load_properties(store: &JsonDirStore) -> Vec<Property> {
    match store.list() {
        Ok(properties) => properties,
        Err(e) => {
            log::error!("Error listing properties in {}: {e}", store.root().display());
            Vec::new()
        }
    }
}

#[component]
pub fn App(data_path: PathBuf, site_name: String) -> Element {
    let store = use_hook(|| JsonDirStore::open(&data_path).map_err(|e| e.to_string()));
    let mut properties = use_signal(|| store.as_ref().map(load_properties).unwrap_or_default());
    let mut filter = use_signal(PropertyFilter::default);
    let mut selected = use_signal(|| None::<PropertyId>);
    let mut editing = use_signal(|| false);

    let store = match store {
        Ok(store) => store,
        Err(e) => {
            return rsx! {
                ErrorScreen {
                    title: "Cannot open data directory",
                    message: data_path.display().to_string(),
                    details: Some(e),
                }
            };
        }
    };

    let visible: Vec<Property> = filter
        .read()
        .apply(properties.read().iter())
        .into_iter()
        .cloned()
        .collect();
    let current = selected.read().as_ref().and_then(|id| {
        properties
            .read()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    });

    rsx! {
        style { {LISTINGS_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "{site_name}" }
                FilterBar {
                    filter: filter.read().clone(),
                    on_change: move |next: PropertyFilter| filter.set(next),
                }
                PropertyList {
                    properties: visible,
                    selected: selected.read().clone(),
                    on_select: move |id: PropertyId| {
                        selected.set(Some(id));
                        editing.set(false);
                    },
                }
            }
            div {
                class: "main-content",
                if let Some(property) = current {
                    if *editing.read() {
                        DescriptionBuilder {
                            key: "{property.id}",
                            initial: property.description.clone(),
                            on_save: {
                                let store = store.clone();
                                let id = property.id.clone();
                                move |payload: String| {
                                    match store.save_description(&id, &payload) {
                                        Ok(true) => properties.set(load_properties(&store)),
                                        Ok(false) => log::warn!("Property {id} no longer exists, description not saved"),
                                        Err(e) => log::error!("Error saving description for {id}: {e}"),
                                    }
                                }
                            },
                            on_close: move |_| editing.set(false),
                        }
                    } else {
                        PropertyDetail {
                            key: "{property.id}",
                            property: property.clone(),
                            on_edit: move |_| editing.set(true),
                            on_enquiry: {
                                let store = store.clone();
                                move |enquiry: Enquiry| {
                                    if let Err(e) = store.record_enquiry(&enquiry) {
                                        log::error!("Error recording enquiry for {}: {e}", enquiry.property_id);
                                    }
                                }
                            },
                        }
                    }
                } else {
                    div {
                        class: "welcome",
                        h1 { "{site_name}" }
                        p { "Select a property from the sidebar to view its details" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use listings_engine::{ListingType, PropertyType};

    fn render_app(data_path: PathBuf) -> String {
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                data_path,
                site_name: "Harbour Homes".to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_app_lists_stored_properties() {
        let data_dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(data_dir.path()).unwrap();
        let mut featured = Property::new(
            "Quayside loft",
            495000,
            "Bristol",
            PropertyType::Apartment,
            ListingType::Sale,
        );
        featured.featured = true;
        store.upsert(&featured).unwrap();
        store
            .upsert(&Property::new(
                "Garden plot",
                60000,
                "Stroud",
                PropertyType::Land,
                ListingType::Sale,
            ))
            .unwrap();

        let html = render_app(data_dir.path().to_path_buf());

        assert!(html.contains("Harbour Homes"));
        let loft = html.find("Quayside loft").unwrap();
        let plot = html.find("Garden plot").unwrap();
        assert!(loft < plot, "featured properties list first");
        assert!(html.contains("Select a property from the sidebar"));
    }

    #[test]
    fn test_missing_data_dir_shows_error_screen() {
        let data_dir = tempfile::tempdir().unwrap();
        let missing = data_dir.path().join("nowhere");

        let html = render_app(missing);

        assert!(html.contains("Cannot open data directory"));
    }
}
