use crate::search::FetchTrigger;
use crate::ui::components::*;
use dioxus::prelude::*;

/// Skeleton CSS, the stylesheet the demo pages are laid out for
pub const SKELETON_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/skeleton/2.0.4/skeleton.min.css";

#[derive(Debug, Clone, Routable, PartialEq)]
#[allow(non_snake_case)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:pageNumber&:searchQuery")]
    ExplicitSearch { pageNumber: String, searchQuery: String },
    #[route("/live?:pageNumber&:searchQuery")]
    LiveSearch { pageNumber: String, searchQuery: String },
}

impl Route {
    /// Route for the page variant driven by `trigger`, with the given query arguments
    pub fn search(trigger: FetchTrigger, page_number: String, search_query: String) -> Self {
        match trigger {
            FetchTrigger::Explicit => Route::ExplicitSearch {
                pageNumber: page_number,
                searchQuery: search_query,
            },
            FetchTrigger::EveryChange => Route::LiveSearch {
                pageNumber: page_number,
                searchQuery: search_query,
            },
        }
    }

    /// Path of the page variant, without query
    pub fn pathname(trigger: FetchTrigger) -> &'static str {
        match trigger {
            FetchTrigger::Explicit => "/",
            FetchTrigger::EveryChange => "/live",
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: "{SKELETON_CSS}" }
        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
pub fn make_config() -> dioxus::desktop::Config {
    dioxus::desktop::Config::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> dioxus::desktop::WindowBuilder {
    dioxus::desktop::WindowBuilder::new()
        .with_title("searchsync")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(640, 720))
}
