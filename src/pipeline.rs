//! Post-fetch stages: deduplicate, rank, truncate, number.
//!
//! Each stage takes the whole list produced by the previous one and returns
//! a new list. [`run_pipeline`] chains them in order.

use crate::config::TITLE_KEY_CHARS;
use crate::models::{Article, Category};
use crate::utils::lowercase_prefix;
use itertools::Itertools;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Drop articles whose title prefix was already seen.
///
/// Two titles collide when the lowercase form of their first 30 characters
/// is identical. The first occurrence in input order is kept.
#[instrument(level = "info", skip_all, fields(input = articles.len()))]
pub fn deduplicate(articles: Vec<Article>) -> Vec<Article> {
    articles
        .into_iter()
        .unique_by(|a| lowercase_prefix(&a.title, TITLE_KEY_CHARS))
        .collect()
}

/// Order hot articles first, then by date, newest first.
///
/// Sorts ascending on `(hot, date)` and reverses the result, so articles with
/// the same hotness and date end up in the reverse of their input order.
#[instrument(level = "info", skip_all, fields(input = articles.len()))]
pub fn prioritize(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| (a.hot, &a.date).cmp(&(b.hot, &b.date)));
    articles.reverse();
    articles
}

/// Keep at most `max` articles.
pub fn truncate(mut articles: Vec<Article>, max: usize) -> Vec<Article> {
    articles.truncate(max);
    articles
}

/// Number articles 1..=N in list order.
pub fn assign_ids(articles: &mut [Article]) {
    for (i, article) in articles.iter_mut().enumerate() {
        article.id = i + 1;
    }
}

/// Deduplicate, rank, truncate to `max`, and assign ids.
pub fn run_pipeline(articles: Vec<Article>, max: usize) -> Vec<Article> {
    let articles = deduplicate(articles);
    info!(count = articles.len(), "Articles remaining after deduplication");

    let mut articles = truncate(prioritize(articles), max);
    info!(count = articles.len(), max, "Articles kept after ranking");

    assign_ids(&mut articles);
    articles
}

/// Number of articles per category, in table order.
///
/// Every category is present, with `0` for those no article landed in.
pub fn category_counts(articles: &[Article]) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> = Category::ALL.iter().map(|c| (*c, 0)).collect();
    for (cat, n) in articles.iter().map(|a| a.cat).counts() {
        counts.insert(cat, n);
    }
    counts
}

/// Number of hot articles.
pub fn hot_count(articles: &[Article]) -> usize {
    articles.iter().filter(|a| a.hot).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{categorize, is_hot, tags_or_default};

    fn article(title: &str, date: &str, hot: bool) -> Article {
        Article {
            id: 0,
            title: title.to_string(),
            summary: "summary".to_string(),
            source: "Test Feed".to_string(),
            date: date.to_string(),
            url: "#".to_string(),
            cat: Category::News,
            hot,
            tags: vec!["AI".to_string()],
        }
    }

    fn classified(title: &str, summary: &str) -> Article {
        Article {
            id: 0,
            title: title.to_string(),
            summary: summary.to_string(),
            source: "Test Feed".to_string(),
            date: "2026-10-16".to_string(),
            url: "#".to_string(),
            cat: categorize(title, summary),
            hot: is_hot(title, summary),
            tags: tags_or_default(title, summary),
        }
    }

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_deduplicate_by_lowercase_prefix() {
        let input = vec![
            article("OpenAI launches new reasoning model today", "2026-10-15", true),
            article("OPENAI LAUNCHES NEW REASONING MODEL for devs", "2026-10-16", true),
            article("Something else entirely", "2026-10-16", false),
        ];
        let out = deduplicate(input);
        assert_eq!(
            titles(&out),
            vec!["OpenAI launches new reasoning model today", "Something else entirely"]
        );
    }

    #[test]
    fn test_deduplicate_short_titles_must_match_whole() {
        let input = vec![
            article("OpenAI launches new model", "2026-10-15", true),
            article("OpenAI launches new model X", "2026-10-15", true),
        ];
        assert_eq!(deduplicate(input).len(), 2);
    }

    #[test]
    fn test_deduplicate_preserves_order() {
        let input = vec![
            article("c", "2026-10-01", false),
            article("a", "2026-10-01", false),
            article("C", "2026-10-01", false),
            article("b", "2026-10-01", false),
        ];
        assert_eq!(titles(&deduplicate(input)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_prioritize_hot_first_then_newest() {
        let input = vec![
            article("cold new", "2026-10-16", false),
            article("hot old", "2026-01-01", true),
            article("cold old", "2025-12-31", false),
            article("hot new", "2026-10-15", true),
        ];
        assert_eq!(
            titles(&prioritize(input)),
            vec!["hot new", "hot old", "cold new", "cold old"]
        );
    }

    #[test]
    fn test_prioritize_inverts_exact_ties() {
        let input = vec![
            article("first", "2026-10-16", true),
            article("second", "2026-10-16", true),
            article("third", "2026-10-16", true),
        ];
        assert_eq!(
            titles(&prioritize(input)),
            vec!["third", "second", "first"]
        );
    }

    #[test]
    fn test_truncate() {
        let input: Vec<Article> = (0..40)
            .map(|i| article(&format!("title {}", i), "2026-10-16", false))
            .collect();
        assert_eq!(truncate(input.clone(), 30).len(), 30);
        assert_eq!(truncate(input[..5].to_vec(), 30).len(), 5);
    }

    #[test]
    fn test_assign_ids_contiguous() {
        let mut list = vec![
            article("a", "2026-10-16", false),
            article("b", "2026-10-16", false),
            article("c", "2026-10-16", false),
        ];
        assign_ids(&mut list);
        let ids: Vec<usize> = list.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_run_pipeline_bounds_and_ids() {
        let input: Vec<Article> = (0..45)
            .map(|i| article(&format!("distinct headline number {:02}", i), "2026-10-16", i % 3 == 0))
            .collect();
        let out = run_pipeline(input, 30);

        assert_eq!(out.len(), 30);
        let ids: Vec<usize> = out.iter().map(|a| a.id).collect();
        assert_eq!(ids, (1..=30).collect::<Vec<_>>());
        // all 15 hot articles come before any cold one
        assert!(out[..15].iter().all(|a| a.hot));
        assert!(out[15..].iter().all(|a| !a.hot));
    }

    #[test]
    fn test_run_pipeline_end_to_end_scenario() {
        let input = vec![
            classified(
                "OpenAI launches new reasoning model today",
                "Researchers call it a breakthrough in planning.",
            ),
            classified(
                "OpenAI launches new reasoning model for developers",
                "Available through the API.",
            ),
            classified("Local bakery opens", "Fresh bread every morning."),
        ];
        let out = run_pipeline(input, 30);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "OpenAI launches new reasoning model today");
        assert_eq!(out[0].id, 1);
        assert!(out[0].hot);
        assert!(matches!(out[0].cat, Category::Research | Category::News));

        assert_eq!(out[1].title, "Local bakery opens");
        assert_eq!(out[1].id, 2);
        assert_eq!(out[1].cat, Category::News);
        assert_eq!(out[1].tags, vec!["AI"]);
    }

    #[test]
    fn test_category_counts_and_hot_count() {
        let mut list = vec![
            article("a", "2026-10-16", true),
            article("b", "2026-10-16", false),
            article("c", "2026-10-16", true),
        ];
        list[1].cat = Category::Safety;

        let counts = category_counts(&list);
        assert_eq!(counts.get(&Category::News), Some(&2));
        assert_eq!(counts.get(&Category::Safety), Some(&1));
        assert_eq!(counts.get(&Category::Tools), Some(&0));
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), Category::ALL.to_vec());
        assert_eq!(hot_count(&list), 2);
    }
}
