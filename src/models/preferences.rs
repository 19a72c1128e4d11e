use serde::{Deserialize, Serialize};

/// Upper bound on the view-history list. Oldest entries are evicted first.
pub const MAX_VIEW_HISTORY: usize = 100;

/// Reading preferences accumulated from a user's interactions with the feed.
///
/// Single-writer by contract: membership checks and appends are
/// read-then-write, so concurrent updates against the same record need
/// external synchronization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    /// Top-3 categories by favorite frequency, most frequent first.
    pub favorite_categories: Vec<String>,
    /// Ids of recently viewed items, oldest first, capped at `MAX_VIEW_HISTORY`.
    pub view_history: Vec<String>,
    /// Ids of items the user favorited or shared.
    pub favorited_news: Vec<String>,
}

/// A user interaction that feeds back into preference tracking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceAction {
    View,
    Favorite,
    Share,
}

impl std::fmt::Display for PreferenceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceAction::View => write!(f, "view"),
            PreferenceAction::Favorite => write!(f, "favorite"),
            PreferenceAction::Share => write!(f, "share"),
        }
    }
}

impl std::str::FromStr for PreferenceAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(PreferenceAction::View),
            "favorite" => Ok(PreferenceAction::Favorite),
            "share" => Ok(PreferenceAction::Share),
            _ => Err(format!("Invalid preference action: {}", s)),
        }
    }
}
