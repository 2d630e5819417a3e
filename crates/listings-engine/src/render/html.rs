use std::fmt::{self, Display, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::RenderNode;

/// Render nodes as an HTML fragment for the public property page
pub fn render_html(nodes: &[RenderNode]) -> String {
    HtmlFragment(nodes).to_string()
}

struct HtmlFragment<'a>(&'a [RenderNode]);

impl Display for HtmlFragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.0 {
            write_node(f, node)?;
        }
        Ok(())
    }
}

fn write_node(out: &mut impl Write, node: &RenderNode) -> fmt::Result {
    match node {
        RenderNode::Text { text, classes } => {
            write!(
                out,
                r#"<p class="{}">"#,
                encode_double_quoted_attribute(classes)
            )?;
            for (index, line) in text.lines().enumerate() {
                if index > 0 {
                    out.write_str("<br>")?;
                }
                out.write_str(&encode_text(line))?;
            }
            out.write_str("</p>")
        }
        RenderNode::Button {
            label,
            href,
            classes,
        } => write!(
            out,
            r#"<a class="{}" href="{}">{}</a>"#,
            encode_double_quoted_attribute(classes),
            encode_double_quoted_attribute(href),
            encode_text(label)
        ),
        RenderNode::Table { headers, rows } => {
            out.write_str(r#"<table class="description-table"><thead><tr>"#)?;
            for header in headers {
                write!(out, "<th>{}</th>", encode_text(header))?;
            }
            out.write_str("</tr></thead><tbody>")?;
            for row in rows {
                out.write_str("<tr>")?;
                for cell in row {
                    write!(out, "<td>{}</td>", encode_text(cell))?;
                }
                out.write_str("</tr>")?;
            }
            out.write_str("</tbody></table>")
        }
        RenderNode::TablePlaceholder => {
            out.write_str(r#"<div class="table-placeholder">No table data</div>"#)
        }
        RenderNode::Image { src, alt } => write!(
            out,
            r#"<img class="description-image" src="{}" alt="{}">"#,
            encode_double_quoted_attribute(src),
            encode_double_quoted_attribute(alt)
        ),
        RenderNode::Spacer { class } => write!(
            out,
            r#"<div class="{}" aria-hidden="true"></div>"#,
            encode_double_quoted_attribute(class)
        ),
        RenderNode::Divider => out.write_str(r#"<hr class="description-divider">"#),
    }
}
