pub mod controller;
pub mod query;
pub mod session;
pub mod types;

pub use controller::SearchController;
pub use query::{SearchParams, PAGE_CHOICES};
pub use session::{SearchHandle, SearchSession, SessionError};
pub use types::{
    FetchCycle, FetchOutcome, FetchTrigger, SearchCommand, SearchEvent, SearchState,
};
