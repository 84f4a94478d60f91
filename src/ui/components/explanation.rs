use dioxus::prelude::*;

/// What the demo shows and why
#[component]
pub fn Explanation() -> Element {
    rsx! {
        div { style: "margin-top: 40px",
            hr {}
            h4 { "Explanation" }
            h5 {
                "TLDR: On mount AND route change - extract query parameters, update local app state, and fetch some data - with only one fetch request. "
                sup { "(no multiple fetches due to multiple re-renders)" }
            }
            p { "The local state remains the source of truth; the URL mirrors it." }
            p {
                "This page has a form with a couple of inputs. When the form is submitted the app fetches data. "
                "The input values are added to the query string of the fetch request like "
                code { "api/whatever?pageNumber=1&searchQuery=foo" }
                "."
            }
            p {
                "On submission the input values are added to the url as query params. "
                "The page dropdown submits on change."
            }
            p {
                "This means the url is sharable - so on mount and when going back and forward the app "
                "extracts those query params, updates local state, and fetches the data."
            }
        }
    }
}
