//! Keyword-based classification of articles.
//!
//! Every function here is pure: it looks only at the title and summary text
//! and at the constant keyword tables below.
//!
//! - [`categorize`]: Highest keyword count wins, ties go to the earlier category
//! - [`is_hot`]: Any hot keyword present
//! - [`extract_tags`]: Known entities and technology terms, in table order
//!
//! Matching is plain substring search, so `app` also hits `apply` and `law`
//! also hits `lawsuit`.

use crate::models::Category;
use tracing::trace;

/// Keywords per category, in tie-break order.
pub const CATEGORY_KEYWORDS: [(Category, &[&str]); 5] = [
    (
        Category::News,
        &[
            "breakthrough", "announce", "launch", "release", "trend", "industry", "market",
            "partnership", "acquisition",
        ],
    ),
    (
        Category::Tools,
        &[
            "tool", "platform", "app", "software", "service", "product", "chatgpt", "claude",
            "gemini", "copilot",
        ],
    ),
    (
        Category::Research,
        &[
            "research", "paper", "study", "model", "algorithm", "deepmind", "openai", "anthropic",
            "breakthrough",
        ],
    ),
    (
        Category::Industry,
        &[
            "business", "investment", "funding", "revenue", "market", "enterprise", "startup",
            "ipo",
        ],
    ),
    (
        Category::Safety,
        &[
            "safety", "ethics", "regulation", "policy", "privacy", "bias", "risk", "governance",
            "law",
        ],
    ),
];

/// Keywords that mark an article as hot.
pub const HOT_KEYWORDS: &[&str] = &[
    "breakthrough", "chatgpt", "openai", "google", "microsoft", "anthropic", "billion", "major",
    "revolutionary",
];

/// Company and product names, matched case-insensitively.
pub const ENTITIES: &[&str] = &[
    "ChatGPT", "OpenAI", "Google", "Microsoft", "Anthropic", "Claude", "DeepMind", "Meta", "Apple",
    "Amazon", "Tesla", "Nvidia",
];

/// Technology terms, matched exactly as written.
pub const TECH_KEYWORDS: &[&str] = &[
    "机器学习", "深度学习", "大模型", "LLM", "智能体", "AGI", "生成式AI", "计算机视觉", "NLP",
    "强化学习",
];

/// Maximum number of tags kept per article.
pub const MAX_TAGS: usize = 5;

/// Tag used when nothing in the vocabulary matches.
pub const FALLBACK_TAG: &str = "AI";

fn normalized(title: &str, summary: &str) -> String {
    format!("{} {}", title, summary).to_lowercase()
}

/// Pick the category whose keywords appear most often in the text.
///
/// Each keyword counts at most once. If no keyword from any category is
/// present the result is [`Category::News`].
pub fn categorize(title: &str, summary: &str) -> Category {
    let text = normalized(title, summary);

    let mut best = Category::News;
    let mut best_score = 0usize;
    for (category, keywords) in CATEGORY_KEYWORDS.iter() {
        let score = keywords.iter().filter(|kw| text.contains(*kw)).count();
        trace!(%category, score, "Category score");
        if score > best_score {
            best = *category;
            best_score = score;
        }
    }
    best
}

/// Whether any hot keyword appears in the text.
pub fn is_hot(title: &str, summary: &str) -> bool {
    let text = normalized(title, summary);
    HOT_KEYWORDS.iter().any(|kw| text.contains(kw))
}

/// Collect matching entities, then technology terms, capped at [`MAX_TAGS`].
///
/// Returns an empty vector when nothing matches; see [`tags_or_default`].
pub fn extract_tags(title: &str, summary: &str) -> Vec<String> {
    let text = format!("{} {}", title, summary);
    let lower = text.to_lowercase();

    ENTITIES
        .iter()
        .filter(|entity| lower.contains(&entity.to_lowercase()))
        .chain(TECH_KEYWORDS.iter().filter(|kw| text.contains(*kw)))
        .take(MAX_TAGS)
        .map(|tag| tag.to_string())
        .collect()
}

/// [`extract_tags`], falling back to a single `"AI"` tag.
pub fn tags_or_default(title: &str, summary: &str) -> Vec<String> {
    let tags = extract_tags(title, summary);
    if tags.is_empty() {
        vec![FALLBACK_TAG.to_string()]
    } else {
        tags
    }
}
