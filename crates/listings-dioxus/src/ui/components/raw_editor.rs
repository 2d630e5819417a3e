use dioxus::prelude::*;
use listings_engine::Cmd;

/// JSON view of the description. Every keystroke is sent as `EditRaw`; the
/// editor decides whether the text is valid.
#[component]
pub fn RawEditor(text: String, error: Option<String>, on_command: EventHandler<Cmd>) -> Element {
    let textarea_class = if error.is_some() {
        "raw-textarea invalid"
    } else {
        "raw-textarea"
    };

    rsx! {
        div {
            class: "raw-editor",
            textarea {
                class: textarea_class,
                spellcheck: false,
                rows: 24,
                value: "{text}",
                oninput: move |evt: FormEvent| on_command.call(Cmd::EditRaw { text: evt.value() }),
            }
            if let Some(message) = error {
                p { class: "raw-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn invalid() -> Element {
        rsx! {
            RawEditor {
                text: "[{",
                error: Some("Invalid JSON at line 1, column 3: EOF while parsing".to_string()),
                on_command: move |_| {},
            }
        }
    }

    fn valid() -> Element {
        rsx! {
            RawEditor { text: "[]", error: None, on_command: move |_| {} }
        }
    }

    #[test]
    fn test_error_is_shown_under_textarea() {
        let mut dom = VirtualDom::new(invalid);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("raw-textarea invalid"));
        assert!(html.contains("Invalid JSON at line 1, column 3"));
    }

    #[test]
    fn test_valid_text_has_no_error() {
        let mut dom = VirtualDom::new(valid);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(!html.contains("raw-error"));
    }
}
