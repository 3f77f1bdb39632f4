use crate::error::RecommendError;
use crate::recommendation::RecommendationItem;

/// Maximum number of cards shown for one response.
pub const MAX_DISPLAYED: usize = 10;

pub const IDLE_HINT: &str = "Submit your profile to see matching scholarships.";
pub const LOADING_MESSAGE: &str = "Analyzing profile...";
pub const EMPTY_MESSAGE: &str = "No scholarships found.";

/// What the results list currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    Loading,
    /// Between one and [`MAX_DISPLAYED`] items, in service order.
    Populated(Vec<RecommendationItem>),
    /// Single muted line: the empty-state text or an error message.
    Message(String),
}

impl ResultsState {
    pub fn from_recommendations(mut items: Vec<RecommendationItem>) -> Self {
        if items.is_empty() {
            return Self::Message(EMPTY_MESSAGE.to_string());
        }
        items.truncate(MAX_DISPLAYED);
        Self::Populated(items)
    }

    pub fn from_outcome(outcome: Result<Vec<RecommendationItem>, RecommendError>) -> Self {
        match outcome {
            Ok(items) => Self::from_recommendations(items),
            Err(err) => Self::Message(err.to_string()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Muted text rendered in place of cards, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Message(text) => Some(text.as_str()),
            Self::Idle | Self::Populated(_) => None,
        }
    }

    pub fn items(&self) -> &[RecommendationItem] {
        match self {
            Self::Populated(items) => items,
            _ => &[],
        }
    }
}
