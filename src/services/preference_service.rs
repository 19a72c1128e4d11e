use std::collections::HashMap;

use tracing::debug;

use crate::models::{NewsItem, PreferenceAction, UserPreferences, MAX_VIEW_HISTORY};

/// Applies one user interaction to a preferences record.
///
/// Pure copy-on-write: the input is never mutated. `catalog` is the
/// explicit id-to-category lookup used to recompute favorite categories;
/// favorited ids that cannot be resolved against it simply don't count.
pub fn update_user_preferences(
    prefs: &UserPreferences,
    action: PreferenceAction,
    item: &NewsItem,
    catalog: &[NewsItem],
) -> UserPreferences {
    let mut updated = prefs.clone();

    debug!(action = %action, id = %item.id, "updating user preferences");

    match action {
        PreferenceAction::View => {
            if !updated.view_history.contains(&item.id) {
                updated.view_history.push(item.id.clone());
                if updated.view_history.len() > MAX_VIEW_HISTORY {
                    updated.view_history.remove(0);
                }
            }
        }
        PreferenceAction::Favorite => {
            if !updated.favorited_news.contains(&item.id) {
                updated.favorited_news.push(item.id.clone());
                updated.favorite_categories = top_categories(&updated.favorited_news, catalog);
            }
        }
        PreferenceAction::Share => {
            // shares signal interest the same way favorites do
            if !updated.favorited_news.contains(&item.id) {
                updated.favorited_news.push(item.id.clone());
            }
        }
    }

    updated
}

/// Top-3 categories by favorite frequency, ties broken alphabetically.
fn top_categories(favorited: &[String], catalog: &[NewsItem]) -> Vec<String> {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for id in favorited {
        if let Some(news) = catalog.iter().find(|n| &n.id == id) {
            *frequency.entry(news.category.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(3)
        .map(|(category, _)| category.to_string())
        .collect()
}
