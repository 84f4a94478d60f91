use super::explanation::Explanation;
use super::page_select::PageSelect;
use super::search_form::SearchForm;
use super::search_hooks::use_search_session;
use super::search_results::{FetchErrorBanner, SearchResults};
use crate::navigation::NavigationSnapshot;
use crate::search::FetchTrigger;
use crate::ui::Route;
use dioxus::prelude::*;

/// Search page where only submit and page selection fetch
#[component]
#[allow(non_snake_case)]
pub fn ExplicitSearch(pageNumber: ReadSignal<String>, searchQuery: ReadSignal<String>) -> Element {
    rsx! {
        SearchPage {
            trigger: FetchTrigger::Explicit,
            page_number: pageNumber,
            search_query: searchQuery,
        }
    }
}

/// Search page that fetches on every change, keystrokes included
#[component]
#[allow(non_snake_case)]
pub fn LiveSearch(pageNumber: ReadSignal<String>, searchQuery: ReadSignal<String>) -> Element {
    rsx! {
        SearchPage {
            trigger: FetchTrigger::EveryChange,
            page_number: pageNumber,
            search_query: searchQuery,
        }
    }
}

/// Search page body shared by both variants.
///
/// Reports the route's query arguments to the session on mount and whenever
/// the route changes (including back/forward).
#[component]
pub fn SearchPage(
    trigger: FetchTrigger,
    page_number: ReadSignal<String>,
    search_query: ReadSignal<String>,
) -> Element {
    let pathname = Route::pathname(trigger);
    let session = use_search_session(trigger, pathname.to_string());
    use_context_provider(|| session.clone());

    let handle = session.handle.clone();
    use_effect(move || {
        let snapshot =
            NavigationSnapshot::from_route_args(pathname, &page_number.read(), &search_query.read());
        handle.navigated(snapshot);
    });

    let route = use_route::<Route>();

    rsx! {
        div { style: "padding: 20px; max-width: 500px",
            VariantLink { trigger }
            p { "Location: " code { "{route}" } }

            SearchForm {}
            PageSelect {}
            FetchErrorBanner {}
            SearchResults {}

            Explanation {}
        }
    }
}

/// Link to the other page variant
#[component]
fn VariantLink(trigger: FetchTrigger) -> Element {
    let (target, label) = match trigger {
        FetchTrigger::Explicit => (FetchTrigger::EveryChange, "/live"),
        FetchTrigger::EveryChange => (FetchTrigger::Explicit, "/"),
    };

    rsx! {
        Link {
            to: Route::search(target, String::new(), String::new()),
            "{label}"
        }
    }
}
