use super::search_hooks::use_search_context;
use dioxus::prelude::*;

/// Result lines of the last completed fetch
#[component]
pub fn SearchResults() -> Element {
    let session = use_search_context();
    let results = session.state.read().results.clone();

    rsx! {
        div {
            b { "Submitted request parameters:" }
            for (i, result) in results.into_iter().enumerate() {
                div { key: "{i}",
                    p { style: "margin-bottom: 2px", "{result}" }
                }
            }
        }
    }
}

/// Banner for the most recent failed fetch
#[component]
pub fn FetchErrorBanner() -> Element {
    let session = use_search_context();
    let last_error = session.state.read().last_error.clone();

    if let Some(error) = last_error {
        rsx! {
            div { style: "color: #b00020; margin-bottom: 1rem",
                p { "Fetch failed: {error}" }
            }
        }
    } else {
        rsx! {}
    }
}
