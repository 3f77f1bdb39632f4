//! Transport-layer types and pure presentation logic shared by the frontend.
//! Everything here is target independent so it can be tested natively while
//! the frontend crate itself only builds for the browser.

pub mod currency;
pub mod error;
pub mod profile;
pub mod recommendation;
pub mod results;
pub mod submission;

pub use currency::format_usd;
pub use error::RecommendError;
pub use profile::{EDUCATION_LEVELS, ProfileField, ProfileSubmission};
pub use recommendation::{RecommendResponse, RecommendationItem};
pub use results::{EMPTY_MESSAGE, IDLE_HINT, LOADING_MESSAGE, MAX_DISPLAYED, ResultsState};
pub use submission::{SubmissionTicket, SubmissionTracker};

/// Path of the recommendation endpoint, relative to the API origin.
pub const RECOMMEND_ENDPOINT: &str = "/api/recommend";
