use super::search_hooks::use_search_context;
use dioxus::prelude::*;

/// Search text input with submit and reset buttons
#[component]
pub fn SearchForm() -> Element {
    let session = use_search_context();
    let state = session.state.read();
    let is_submitting = state.is_submitting;
    let search_query = state.search_query.clone();
    drop(state);

    let submit_handle = session.handle.clone();
    let input_handle = session.handle.clone();
    let reset_handle = session.handle.clone();

    rsx! {
        form {
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                submit_handle.submit();
            },
            input {
                r#type: "text",
                value: "{search_query}",
                disabled: is_submitting,
                oninput: move |event: FormEvent| {
                    input_handle.set_search_query(event.value());
                },
            }
            button {
                class: "button-primary",
                r#type: "submit",
                disabled: is_submitting,
                "fetch data"
            }
            button {
                r#type: "button",
                disabled: is_submitting,
                onclick: move |_| reset_handle.reset(),
                "reset"
            }
        }
    }
}
