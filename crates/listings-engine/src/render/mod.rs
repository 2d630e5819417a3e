//! Read-only view of a description.
//!
//! [`render_description`] maps blocks to [`RenderNode`]s, one rule per
//! variant. The same nodes feed the builder canvas, the public property page
//! ([`html::render_html`]) and the terminal browser ([`plain::render_plain`]).
//! Rendering never mutates the blocks.

pub mod html;
pub mod plain;

use serde::Serialize;

use crate::description::{
    Block, BlockKind, ButtonBlock, ButtonSize, ButtonVariant, SpacerSize, TableBlock, TextAlign,
    TextBlock, TextColor, TextSize, TextStyle,
};

pub use html::render_html;
pub use plain::render_plain;

/// Display-only node produced from one block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderNode {
    Text {
        text: String,
        classes: String,
    },
    Button {
        label: String,
        href: String,
        classes: String,
    },
    /// Rows are padded or truncated to the header count
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A table with no headers or no rows
    TablePlaceholder,
    Image {
        src: String,
        alt: String,
    },
    Spacer {
        class: String,
    },
    Divider,
}

pub fn render_description(blocks: &[Block]) -> Vec<RenderNode> {
    blocks.iter().map(render_block).collect()
}

pub fn render_block(block: &Block) -> RenderNode {
    match &block.kind {
        BlockKind::Text(text) => RenderNode::Text {
            text: text.text.clone(),
            classes: text_classes(text),
        },
        BlockKind::Button(button) => RenderNode::Button {
            label: button.text.clone(),
            href: safe_href(&button.href),
            classes: button_classes(button),
        },
        BlockKind::Table(table) => render_table(table),
        BlockKind::Image(image) => RenderNode::Image {
            src: image.src.clone(),
            alt: image.alt.clone(),
        },
        BlockKind::Spacer(spacer) => RenderNode::Spacer {
            class: match spacer.size {
                SpacerSize::Sm => "h-4",
                SpacerSize::Md => "h-8",
                SpacerSize::Lg => "h-16",
            }
            .to_string(),
        },
        BlockKind::Divider => RenderNode::Divider,
    }
}

fn render_table(table: &TableBlock) -> RenderNode {
    if table.headers.is_empty() || table.rows.is_empty() {
        return RenderNode::TablePlaceholder;
    }
    let width = table.headers.len();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = row.iter().take(width).cloned().collect();
            cells.resize(width, String::new());
            cells
        })
        .collect();
    RenderNode::Table {
        headers: table.headers.clone(),
        rows,
    }
}

pub fn text_classes(text: &TextBlock) -> String {
    let mut classes = vec![
        match text.size {
            TextSize::Sm => "text-sm",
            TextSize::Md => "text-base",
            TextSize::Lg => "text-lg",
            TextSize::Xl => "text-xl",
        },
        match text.align {
            TextAlign::Left => "text-left",
            TextAlign::Center => "text-center",
            TextAlign::Right => "text-right",
        },
        match text.color {
            TextColor::Default => "text-foreground",
            TextColor::Primary => "text-primary",
            TextColor::Muted => "text-muted-foreground",
        },
    ];
    for style in &text.style {
        classes.push(match style {
            TextStyle::Bold => "font-bold",
            TextStyle::Italic => "italic",
        });
    }
    classes.join(" ")
}

pub fn button_classes(button: &ButtonBlock) -> String {
    let variant = match button.variant {
        ButtonVariant::Default => "btn-default",
        ButtonVariant::Destructive => "btn-destructive",
        ButtonVariant::Outline => "btn-outline",
        ButtonVariant::Secondary => "btn-secondary",
        ButtonVariant::Ghost => "btn-ghost",
        ButtonVariant::Link => "btn-link",
    };
    let size = match button.size {
        ButtonSize::Default => "btn-md",
        ButtonSize::Sm => "btn-sm",
        ButtonSize::Lg => "btn-lg",
        ButtonSize::Icon => "btn-icon",
    };
    format!("btn {variant} {size}")
}

/// Script URLs are replaced with `#`
fn safe_href(href: &str) -> String {
    let lowered = href.trim().to_ascii_lowercase();
    if lowered.starts_with("javascript:") || lowered.starts_with("vbscript:") {
        return "#".to_string();
    }
    href.to_string()
}
