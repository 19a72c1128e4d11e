use chrono::{Duration, Utc};

use crate::models::NewsItem;

fn entry(
    id: &str,
    title: &str,
    category: &str,
    hours_ago: i64,
    views: u32,
    favorites: u32,
    shares: u32,
) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        views,
        favorites,
        shares,
        timestamp: Utc::now() - Duration::hours(hours_ago),
        category: category.to_string(),
        relevance: None,
    }
}

/// The product's mocked coffee-news feed, with timestamps staggered
/// relative to now so freshness scores stay meaningful.
pub fn sample_news() -> Vec<NewsItem> {
    vec![
        entry(
            "news-1",
            "Preços do café arábica atingem maior valor dos últimos 3 meses",
            "Mercado",
            2,
            1245,
            89,
            34,
        ),
        entry(
            "news-2",
            "Alerta de geada mobiliza produtores no Sul de Minas",
            "Clima",
            4,
            856,
            67,
            45,
        ),
        entry(
            "news-3",
            "Nova técnica de irrigação aumenta produtividade em 30%",
            "Tecnologia",
            6,
            623,
            41,
            18,
        ),
        entry(
            "news-4",
            "Brasil mantém liderança nas exportações globais de café",
            "Exportação",
            8,
            432,
            28,
            12,
        ),
        entry(
            "news-5",
            "Certificação sustentável valoriza café brasileiro em 15%",
            "Sustentabilidade",
            10,
            378,
            33,
            21,
        ),
        entry(
            "news-6",
            "Governo anuncia nova linha de crédito para cafeicultores",
            "Mercado",
            12,
            567,
            45,
            29,
        ),
        entry(
            "news-7",
            "Embrapa desenvolve nova variedade resistente à seca",
            "Pesquisa",
            24,
            892,
            76,
            52,
        ),
        entry(
            "news-8",
            "Exportadores fecham contratos recordes com a Ásia",
            "Mercado",
            36,
            701,
            54,
            38,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        let news = sample_news();
        let mut ids: Vec<&str> = news.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), news.len());
    }

    #[test]
    fn test_sample_uses_canonical_categories() {
        use crate::models::CoffeeCategory;
        for news in sample_news() {
            assert!(
                news.category.parse::<CoffeeCategory>().is_ok(),
                "unexpected category {}",
                news.category
            );
        }
    }

    #[test]
    fn test_sample_timestamps_are_in_the_past() {
        let now = Utc::now();
        for news in sample_news() {
            assert!(news.timestamp < now);
        }
    }
}
