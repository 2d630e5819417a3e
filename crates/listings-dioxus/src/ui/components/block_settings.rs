use dioxus::prelude::*;
use listings_engine::description::{TableBlock, TextStyle};
use listings_engine::{Block, BlockId, BlockKind, Cmd};
use serde_json::{Map, Value, json};

type Options = &'static [(&'static str, &'static str)];

const TEXT_SIZES: Options = &[
    ("sm", "Small"),
    ("md", "Medium"),
    ("lg", "Large"),
    ("xl", "Extra large"),
];
const TEXT_ALIGNS: Options = &[("left", "Left"), ("center", "Center"), ("right", "Right")];
const TEXT_COLORS: Options = &[
    ("default", "Default"),
    ("primary", "Primary"),
    ("muted", "Muted"),
];
const BUTTON_VARIANTS: Options = &[
    ("default", "Default"),
    ("destructive", "Destructive"),
    ("outline", "Outline"),
    ("secondary", "Secondary"),
    ("ghost", "Ghost"),
    ("link", "Link"),
];
const BUTTON_SIZES: Options = &[
    ("default", "Default"),
    ("sm", "Small"),
    ("lg", "Large"),
    ("icon", "Icon"),
];
const SPACER_SIZES: Options = &[("sm", "Small"), ("md", "Medium"), ("lg", "Large")];

/// Persisted spelling of a field enum
fn wire_name(value: serde_json::Result<Value>) -> String {
    match value {
        Ok(Value::String(name)) => name,
        _ => String::new(),
    }
}

/// Handler that writes a string field of one block
fn string_setter(
    id: &BlockId,
    key: &'static str,
    on_command: EventHandler<Cmd>,
) -> impl FnMut(String) + 'static {
    let id = id.clone();
    move |value| on_command.call(Cmd::set_field(id.clone(), key, Value::String(value)))
}

/// Settings form for the selected block
#[component]
pub fn BlockSettings(block: Block, on_command: EventHandler<Cmd>) -> Element {
    let id = block.id.clone();

    let body = match block.kind {
        BlockKind::Text(text) => {
            let toggle_style = |style: TextStyle| {
                let mut styles = text.style.clone();
                let id = id.clone();
                move |on: bool| {
                    if on {
                        styles.insert(style);
                    } else {
                        styles.remove(&style);
                    }
                    let value = serde_json::to_value(&styles).unwrap_or(Value::Null);
                    on_command.call(Cmd::set_field(id.clone(), "style", value));
                }
            };
            rsx! {
                TextAreaField { label: "Text", value: text.text.clone(), on_input: string_setter(&id, "text", on_command) }
                SelectField { label: "Size", value: wire_name(serde_json::to_value(text.size)), options: TEXT_SIZES, on_change: string_setter(&id, "size", on_command) }
                SelectField { label: "Align", value: wire_name(serde_json::to_value(text.align)), options: TEXT_ALIGNS, on_change: string_setter(&id, "align", on_command) }
                SelectField { label: "Color", value: wire_name(serde_json::to_value(text.color)), options: TEXT_COLORS, on_change: string_setter(&id, "color", on_command) }
                CheckboxField { label: "Bold", checked: text.style.contains(&TextStyle::Bold), on_toggle: toggle_style(TextStyle::Bold) }
                CheckboxField { label: "Italic", checked: text.style.contains(&TextStyle::Italic), on_toggle: toggle_style(TextStyle::Italic) }
            }
        }
        BlockKind::Button(button) => rsx! {
            InputField { label: "Label", value: button.text.clone(), on_input: string_setter(&id, "text", on_command) }
            InputField { label: "Link", value: button.href.clone(), on_input: string_setter(&id, "href", on_command) }
            SelectField { label: "Variant", value: wire_name(serde_json::to_value(button.variant)), options: BUTTON_VARIANTS, on_change: string_setter(&id, "variant", on_command) }
            SelectField { label: "Size", value: wire_name(serde_json::to_value(button.size)), options: BUTTON_SIZES, on_change: string_setter(&id, "size", on_command) }
        },
        BlockKind::Table(table) => rsx! {
            TableEditor { id: id.clone(), table, on_command }
        },
        BlockKind::Image(image) => rsx! {
            InputField { label: "Image URL", value: image.src.clone(), on_input: string_setter(&id, "src", on_command) }
            InputField { label: "Alt text", value: image.alt.clone(), on_input: string_setter(&id, "alt", on_command) }
        },
        BlockKind::Spacer(spacer) => rsx! {
            SelectField { label: "Size", value: wire_name(serde_json::to_value(spacer.size)), options: SPACER_SIZES, on_change: string_setter(&id, "size", on_command) }
        },
        BlockKind::Divider => rsx! {
            p { class: "settings-empty", "Dividers have no settings" }
        },
    };

    rsx! {
        div {
            class: "block-settings",
            h3 { "Block settings" }
            {body}
        }
    }
}

#[component]
fn InputField(label: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "field",
            span { "{label}" }
            input {
                r#type: "text",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}

#[component]
fn TextAreaField(label: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "field",
            span { "{label}" }
            textarea {
                rows: 4,
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}

#[component]
fn SelectField(
    label: String,
    value: String,
    options: Options,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { "{label}" }
            select {
                value: "{value}",
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                for (option_value, option_label) in options.iter() {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: *option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn CheckboxField(label: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "field field-checkbox",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| on_toggle.call(evt.checked()),
            }
            span { "{label}" }
        }
    }
}

/// Grid edits always send `headers` and `rows` together
fn table_update(id: &BlockId, headers: Vec<String>, rows: Vec<Vec<String>>) -> Cmd {
    let mut fields = Map::new();
    fields.insert("headers".to_string(), json!(headers));
    fields.insert("rows".to_string(), json!(rows));
    Cmd::UpdateField {
        id: id.clone(),
        fields,
    }
}

fn set_header(table: &TableBlock, column: usize, value: String) -> TableBlock {
    let mut next = table.clone();
    if let Some(header) = next.headers.get_mut(column) {
        *header = value;
    }
    next
}

/// Rows shorter than the target column are padded before writing
fn set_cell(table: &TableBlock, row: usize, column: usize, value: String) -> TableBlock {
    let mut next = table.clone();
    if let Some(cells) = next.rows.get_mut(row) {
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value;
    }
    next
}

fn add_row(table: &TableBlock) -> TableBlock {
    let mut next = table.clone();
    next.rows.push(vec![String::new(); next.headers.len()]);
    next
}

fn remove_row(table: &TableBlock, row: usize) -> TableBlock {
    let mut next = table.clone();
    if row < next.rows.len() {
        next.rows.remove(row);
    }
    next
}

fn add_column(table: &TableBlock) -> TableBlock {
    let mut next = table.clone();
    next.headers.push(format!("Column {}", next.headers.len() + 1));
    for cells in &mut next.rows {
        cells.push(String::new());
    }
    next
}

fn remove_column(table: &TableBlock, column: usize) -> TableBlock {
    let mut next = table.clone();
    if column < next.headers.len() {
        next.headers.remove(column);
        for cells in &mut next.rows {
            if column < cells.len() {
                cells.remove(column);
            }
        }
    }
    next
}

#[component]
fn TableEditor(id: BlockId, table: TableBlock, on_command: EventHandler<Cmd>) -> Element {
    let send = {
        let id = id.clone();
        move |next: TableBlock| on_command.call(table_update(&id, next.headers, next.rows))
    };

    let columns = table.headers.len();

    rsx! {
        div {
            class: "table-editor",
            div {
                class: "table-editor-row table-editor-headers",
                for (column, header) in table.headers.iter().enumerate() {
                    div {
                        key: "h{column}",
                        class: "table-editor-cell",
                        input {
                            value: "{header}",
                            oninput: {
                                let table = table.clone();
                                let send = send.clone();
                                move |evt: FormEvent| send(set_header(&table, column, evt.value()))
                            },
                        }
                        button {
                            title: "Remove column",
                            onclick: {
                                let table = table.clone();
                                let send = send.clone();
                                move |_| send(remove_column(&table, column))
                            },
                            "✕"
                        }
                    }
                }
            }
            for (row, cells) in table.rows.iter().enumerate() {
                div {
                    key: "r{row}",
                    class: "table-editor-row",
                    for column in 0..columns {
                        input {
                            key: "c{row}-{column}",
                            value: cells.get(column).cloned().unwrap_or_default(),
                            oninput: {
                                let table = table.clone();
                                let send = send.clone();
                                move |evt: FormEvent| send(set_cell(&table, row, column, evt.value()))
                            },
                        }
                    }
                    button {
                        title: "Remove row",
                        onclick: {
                            let table = table.clone();
                            let send = send.clone();
                            move |_| send(remove_row(&table, row))
                        },
                        "✕"
                    }
                }
            }
            div {
                class: "table-editor-actions",
                button {
                    onclick: {
                        let table = table.clone();
                        let send = send.clone();
                        move |_| send(add_row(&table))
                    },
                    "Add row"
                }
                button {
                    onclick: {
                        let table = table.clone();
                        let send = send.clone();
                        move |_| send(add_column(&table))
                    },
                    "Add column"
                }
            }
        }
    }
}
