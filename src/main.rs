use anyhow::anyhow;
use tracing::info;

use globalcoffee_core::data::sample_news;
use globalcoffee_core::logging::{init_logging, LoggingConfig};
use globalcoffee_core::services::news_ranking::coffee_ranking_options;
use globalcoffee_core::{
    brand_palette, rerank_news, update_user_preferences, PreferenceAction, ThemeManager,
    UserPreferences,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env()).map_err(|e| anyhow!(e))?;

    let news = sample_news();

    // Simulate a reader that follows the market closely.
    let mut prefs = UserPreferences::default();
    prefs = update_user_preferences(&prefs, PreferenceAction::View, &news[0], &news);
    prefs = update_user_preferences(&prefs, PreferenceAction::Favorite, &news[0], &news);
    prefs = update_user_preferences(&prefs, PreferenceAction::Favorite, &news[5], &news);
    prefs = update_user_preferences(&prefs, PreferenceAction::Share, &news[3], &news);

    info!(
        favorite_categories = ?prefs.favorite_categories,
        "simulated reader preferences"
    );

    let ranked = rerank_news(&news, &prefs, &coffee_ranking_options());
    for (position, scored) in ranked.iter().enumerate() {
        println!(
            "{:2}. [{:<16}] {:.4}  {}",
            position + 1,
            scored.item.category,
            scored.scores.final_score,
            scored.item.title
        );
    }

    let mut themes = ThemeManager::new();
    themes.set_theme("coffee")?;
    let palette = brand_palette(themes.current());

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "theme": themes.current(),
            "brand": palette,
        }))?
    );

    Ok(())
}
