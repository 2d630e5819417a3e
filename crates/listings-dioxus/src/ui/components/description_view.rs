use dioxus::prelude::*;
use listings_engine::RenderNode;

/// Read-only description, as shown on the property page
#[component]
pub fn DescriptionView(nodes: Vec<RenderNode>) -> Element {
    rsx! {
        div {
            class: "description",
            if nodes.is_empty() {
                p { class: "description-empty", "No description yet" }
            }
            for (index, node) in nodes.into_iter().enumerate() {
                RenderNodeView { key: "{index}", node }
            }
        }
    }
}

#[component]
pub fn RenderNodeView(node: RenderNode) -> Element {
    match node {
        RenderNode::Text { text, classes } => rsx! {
            p { class: "description-text {classes}", "{text}" }
        },
        RenderNode::Button {
            label,
            href,
            classes,
        } => rsx! {
            a { class: "{classes}", href: "{href}", "{label}" }
        },
        RenderNode::Table { headers, rows } => rsx! {
            table {
                class: "description-table",
                thead {
                    tr {
                        for header in headers {
                            th { "{header}" }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            for cell in row {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        },
        RenderNode::TablePlaceholder => rsx! {
            div { class: "table-placeholder", "No table data" }
        },
        RenderNode::Image { src, alt } => rsx! {
            img { class: "description-image", src: "{src}", alt: "{alt}" }
        },
        RenderNode::Spacer { class } => rsx! {
            div { class: "{class}", "aria-hidden": "true" }
        },
        RenderNode::Divider => rsx! {
            hr { class: "description-divider" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use listings_engine::description::parse_description;
    use listings_engine::render_description;

    fn render_json(json: &str) -> String {
        let nodes = render_description(&parse_description(json));
        let mut dom = VirtualDom::new_with_props(DescriptionView, DescriptionViewProps { nodes });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_renders_each_block_kind() {
        let html = render_json(
            r##"[
                {"id":"t","type":"Text","text":"Sunny garden","size":"lg","style":["bold"]},
                {"id":"b","type":"Button","text":"Enquire","href":"#enquiry","variant":"outline"},
                {"id":"g","type":"Table","headers":["Feature","Value"],"rows":[["Bedrooms","3"]]},
                {"id":"i","type":"Image","src":"front.jpg","alt":"Front view"},
                {"id":"s","type":"Spacer","size":"lg"},
                {"id":"d","type":"Divider"}
            ]"##,
        );

        assert!(html.contains("Sunny garden"));
        assert!(html.contains("font-bold"));
        assert!(html.contains("btn btn-outline btn-md"));
        assert!(html.contains("<th>Feature</th>"));
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains("front.jpg"));
        assert!(html.contains("h-16"));
        assert!(html.contains("description-divider"));
    }

    #[test]
    fn test_empty_table_shows_placeholder() {
        let html = render_json(r#"[{"id":"g","type":"Table","headers":["A"],"rows":[]}]"#);

        assert!(html.contains("No table data"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_empty_description_message() {
        let html = render_json("not json");
        assert!(html.contains("No description yet"));
    }

    #[test]
    fn test_script_href_is_neutralised() {
        let html = render_json(
            r#"[{"id":"b","type":"Button","text":"Click","href":"javascript:alert(1)"}]"#,
        );

        assert!(!html.contains("javascript:"));
    }
}
