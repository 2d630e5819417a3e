use dioxus::prelude::*;
use listings_engine::{Enquiry, PropertyId};

/// Lead capture form on the property page. Validation happens here so the
/// store only ever sees well-formed enquiries.
#[component]
pub fn EnquiryForm(property_id: PropertyId, on_submit: EventHandler<Enquiry>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let phone_value = phone.read().clone();
        let enquiry = Enquiry::new(
            property_id.clone(),
            name.read().as_str(),
            email.read().as_str(),
            Some(phone_value),
            message.read().as_str(),
        );
        match enquiry.validate() {
            Ok(()) => {
                on_submit.call(enquiry);
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());
                error.set(None);
                sent.set(true);
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                sent.set(false);
            }
        }
    };

    rsx! {
        form {
            id: "enquiry",
            class: "enquiry-form",
            onsubmit: submit,
            h2 { "Ask about this property" }
            input {
                placeholder: "Your name",
                value: "{name}",
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                r#type: "tel",
                placeholder: "Phone (optional)",
                value: "{phone}",
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }
            textarea {
                placeholder: "Message",
                rows: 4,
                value: "{message}",
                oninput: move |evt: FormEvent| message.set(evt.value()),
            }
            if let Some(text) = error.read().as_ref() {
                p { class: "enquiry-error", "{text}" }
            }
            if *sent.read() {
                p { class: "enquiry-sent", "Thanks, the agent will be in touch" }
            }
            button { class: "btn btn-default btn-md", r#type: "submit", "Send enquiry" }
        }
    }
}
