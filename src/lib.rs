pub mod data;
pub mod errors;
pub mod logging;
pub mod models;
pub mod services;

pub use errors::AppError;
pub use models::{
    BrandScale, CoffeeCategory, GeneratedTheme, NewsItem, NewsScores, PreferenceAction,
    ScoredNewsItem, UserPreferences,
};
pub use services::color::Rgb;
pub use services::news_ranking::{coffee_ranking_options, rerank_news, RerankOptions};
pub use services::preference_service::update_user_preferences;
pub use services::theme_generator::{brand_palette, generate_theme, predefined_themes};
pub use services::theme_service::ThemeManager;
