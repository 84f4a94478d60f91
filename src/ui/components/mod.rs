pub mod explanation;
pub mod page_select;
pub mod search_form;
pub mod search_hooks;
pub mod search_page;
pub mod search_results;

pub use explanation::Explanation;
pub use page_select::PageSelect;
pub use search_form::SearchForm;
pub use search_hooks::{use_search_context, use_search_session, SearchSessionContext};
pub use search_page::{ExplicitSearch, LiveSearch, SearchPage};
pub use search_results::{FetchErrorBanner, SearchResults};
