use super::RenderNode;

/// Render nodes as terminal lines
pub fn render_plain(nodes: &[RenderNode]) -> Vec<String> {
    let mut lines = Vec::new();

    for node in nodes {
        match node {
            RenderNode::Text { text, .. } => {
                lines.extend(text.lines().map(str::to_string));
                lines.push(String::new());
            }
            RenderNode::Button { label, href, .. } => {
                if href.is_empty() {
                    lines.push(format!("[ {label} ]"));
                } else {
                    lines.push(format!("[ {label} ] -> {href}"));
                }
                lines.push(String::new());
            }
            RenderNode::Table { headers, rows } => {
                let widths = column_widths(headers, rows);
                lines.push(table_row(headers, &widths));
                lines.push(
                    widths
                        .iter()
                        .map(|w| "-".repeat(*w))
                        .collect::<Vec<_>>()
                        .join("-+-"),
                );
                for row in rows {
                    lines.push(table_row(row, &widths));
                }
                lines.push(String::new());
            }
            RenderNode::TablePlaceholder => {
                lines.push("(empty table)".to_string());
                lines.push(String::new());
            }
            RenderNode::Image { src, alt } => {
                lines.push(format!("[image: {alt}] {src}"));
                lines.push(String::new());
            }
            RenderNode::Spacer { .. } => lines.push(String::new()),
            RenderNode::Divider => {
                lines.push("─".repeat(40));
                lines.push(String::new());
            }
        }
    }

    lines
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
