pub mod color;
pub mod news_ranking;
pub mod preference_service;
pub mod theme_generator;
pub mod theme_service;
