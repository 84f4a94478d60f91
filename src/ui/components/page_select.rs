use super::search_hooks::use_search_context;
use crate::search::PAGE_CHOICES;
use dioxus::prelude::*;
use tracing::warn;

/// Page selector; picking a page fetches it right away
#[component]
pub fn PageSelect() -> Element {
    let session = use_search_context();
    let state = session.state.read();
    let is_submitting = state.is_submitting;
    let page_number = state.page_number;
    drop(state);

    let handle = session.handle.clone();

    rsx! {
        label {
            "Page"
            select {
                value: "{page_number}",
                disabled: is_submitting,
                onchange: move |event: FormEvent| {
                    match event.value().parse::<u32>() {
                        Ok(page) => handle.change_page(page),
                        Err(e) => warn!("Unparseable page selection {:?}: {}", event.value(), e),
                    }
                },
                for choice in PAGE_CHOICES {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == page_number,
                        "{choice}"
                    }
                }
            }
        }
    }
}
