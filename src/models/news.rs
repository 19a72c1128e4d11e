use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news story as surfaced in the product feed.
///
/// Engagement counters come straight from the feed; `views` counts every
/// impression while `favorites` and `shares` are explicit reader actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub views: u32,
    pub favorites: u32,
    pub shares: u32,
    pub timestamp: DateTime<Utc>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

/// Score breakdown attached to each ranked item for traceability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NewsScores {
    pub popularity: f64,
    pub freshness: f64,
    pub personalization: f64,
    #[serde(rename = "final")]
    pub final_score: f64,
}

/// A news item together with the scores that determined its rank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredNewsItem {
    #[serde(flatten)]
    pub item: NewsItem,
    pub scores: NewsScores,
}

/// Canonical coffee-domain news categories.
///
/// Items carry free-form category labels; this enum names the set the
/// product itself publishes under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CoffeeCategory {
    Market,
    Weather,
    Technology,
    Sustainability,
    Export,
    Research,
}

impl CoffeeCategory {
    pub const ALL: [CoffeeCategory; 6] = [
        CoffeeCategory::Market,
        CoffeeCategory::Weather,
        CoffeeCategory::Technology,
        CoffeeCategory::Sustainability,
        CoffeeCategory::Export,
        CoffeeCategory::Research,
    ];
}

impl std::fmt::Display for CoffeeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoffeeCategory::Market => write!(f, "Mercado"),
            CoffeeCategory::Weather => write!(f, "Clima"),
            CoffeeCategory::Technology => write!(f, "Tecnologia"),
            CoffeeCategory::Sustainability => write!(f, "Sustentabilidade"),
            CoffeeCategory::Export => write!(f, "Exportação"),
            CoffeeCategory::Research => write!(f, "Pesquisa"),
        }
    }
}

impl std::str::FromStr for CoffeeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mercado" => Ok(CoffeeCategory::Market),
            "Clima" => Ok(CoffeeCategory::Weather),
            "Tecnologia" => Ok(CoffeeCategory::Technology),
            "Sustentabilidade" => Ok(CoffeeCategory::Sustainability),
            "Exportação" => Ok(CoffeeCategory::Export),
            "Pesquisa" => Ok(CoffeeCategory::Research),
            _ => Err(format!("Invalid coffee category: {}", s)),
        }
    }
}
