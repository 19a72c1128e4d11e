use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{NewsItem, NewsScores, ScoredNewsItem, UserPreferences};

/// z-score for a 95% confidence interval.
const WILSON_Z: f64 = 1.96;

/// Default freshness half-life: a story loses half its freshness per day.
pub const DEFAULT_HALF_LIFE_HOURS: f64 = 24.0;

/// Weighting configuration for [`rerank_news`].
///
/// Weights are accepted as-is: they are not required to sum to 1 and are
/// never normalized, so callers can scale components deliberately.
#[derive(Debug, Clone)]
pub struct RerankOptions {
    pub freshness_weight: f64,
    pub popularity_weight: f64,
    pub personalization_weight: f64,
    pub diversity_boost: bool,
}

impl Default for RerankOptions {
    fn default() -> Self {
        Self {
            freshness_weight: 0.3,
            popularity_weight: 0.4,
            personalization_weight: 0.3,
            diversity_boost: true,
        }
    }
}

/// Ranking profile tuned for the coffee feed, where market stories age
/// quickly and recency matters as much as popularity.
pub fn coffee_ranking_options() -> RerankOptions {
    RerankOptions {
        freshness_weight: 0.35,
        popularity_weight: 0.35,
        personalization_weight: 0.30,
        diversity_boost: true,
    }
}

/// Lower bound of the Wilson score confidence interval.
///
/// Discounts small samples: one favorite out of one view scores far below
/// a raw 100% ratio would suggest, which keeps low-traffic items from
/// dominating the ranking.
pub fn wilson_score(positive: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }

    let z = WILSON_Z;
    let phat = positive / total;
    let denominator = 1.0 + z * z / total;
    let numerator = phat + z * z / (2.0 * total)
        - z * ((phat * (1.0 - phat) + z * z / (4.0 * total)) / total).sqrt();

    numerator / denominator
}

/// Exponential freshness decay relative to the current time.
///
/// Score is 1 at age zero and 0.5 at one half-life; it approaches but
/// never reaches 0 for old items.
pub fn freshness_score(timestamp: DateTime<Utc>, half_life_hours: f64) -> f64 {
    freshness_score_at(timestamp, Utc::now(), half_life_hours)
}

/// Freshness decay against an explicit reference time.
pub fn freshness_score_at(
    timestamp: DateTime<Utc>,
    now: DateTime<Utc>,
    half_life_hours: f64,
) -> f64 {
    let age_hours = (now - timestamp).num_milliseconds() as f64 / 3_600_000.0;
    // timestamps from the future count as brand new
    let age_hours = age_hours.max(0.0);

    (-0.693 * age_hours / half_life_hours).exp()
}

/// Preference-similarity score in [0, 1].
///
/// Favorite categories boost, already-seen items are penalized, and
/// repeat engagement (favorited items that were also viewed) adds up to
/// 0.3 more. Negative raw totals floor at 0.
pub fn personalization_score(item: &NewsItem, prefs: &UserPreferences) -> f64 {
    let mut score = 0.0;

    if prefs.favorite_categories.contains(&item.category) {
        score += 0.3;
    }

    if prefs.view_history.contains(&item.id) {
        score -= 0.5;
    }

    let repeat_engagement = prefs
        .favorited_news
        .iter()
        .filter(|id| prefs.view_history.contains(id))
        .count();
    score += (repeat_engagement as f64 * 0.1).min(0.3);

    score.clamp(0.0, 1.0)
}

/// Scores and reorders the feed.
///
/// Popularity counts favorites fully and shares at half weight. The sort
/// is stable and descending on the final score, so tied items keep their
/// input order.
pub fn rerank_news(
    items: &[NewsItem],
    prefs: &UserPreferences,
    options: &RerankOptions,
) -> Vec<ScoredNewsItem> {
    let now = Utc::now();

    let mut scored: Vec<ScoredNewsItem> = items
        .iter()
        .map(|item| {
            let interactions = item.favorites as f64 + item.shares as f64 * 0.5;
            let popularity = wilson_score(interactions, item.views as f64);
            let freshness = freshness_score_at(item.timestamp, now, DEFAULT_HALF_LIFE_HOURS);
            let personalization = personalization_score(item, prefs);

            let final_score = popularity * options.popularity_weight
                + freshness * options.freshness_weight
                + personalization * options.personalization_weight;

            ScoredNewsItem {
                item: item.clone(),
                scores: NewsScores {
                    popularity,
                    freshness,
                    personalization,
                    final_score,
                },
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.scores
            .final_score
            .partial_cmp(&a.scores.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        items = scored.len(),
        diversity = options.diversity_boost,
        "reranked news feed"
    );

    if options.diversity_boost {
        return apply_diversity_boost(scored);
    }

    scored
}

/// Category-saturation pass over the sorted list.
///
/// Tracks a per-category counter with a cap of 2. An over-cap item is
/// still appended in place and the counter resets, so the pass leaves the
/// ordering untouched. This matches the shipped behavior; deferring
/// over-cap items to later positions is a possible future change.
fn apply_diversity_boost(scored: Vec<ScoredNewsItem>) -> Vec<ScoredNewsItem> {
    const MAX_PER_CATEGORY: usize = 2;

    let mut reranked = Vec::with_capacity(scored.len());
    let mut category_count: std::collections::HashMap<String, usize> =
        std::collections::HashMap::new();

    for news in scored {
        let count = category_count
            .get(&news.item.category)
            .copied()
            .unwrap_or(0);

        if count < MAX_PER_CATEGORY {
            category_count.insert(news.item.category.clone(), count + 1);
        } else {
            // category saturated: reset the counter instead of deferring
            category_count.insert(news.item.category.clone(), 0);
        }
        reranked.push(news);
    }

    reranked
}
