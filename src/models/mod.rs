mod news;
mod preferences;
mod theme;

pub use news::{CoffeeCategory, NewsItem, NewsScores, ScoredNewsItem};
pub use preferences::{PreferenceAction, UserPreferences, MAX_VIEW_HISTORY};
pub use theme::{
    BackgroundColors, BorderColors, BrandScale, GeneratedTheme, StatusColors, TextColors,
    ThemeColors, TradingColors,
};
