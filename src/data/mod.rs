mod sample_news;

pub use sample_news::sample_news;
