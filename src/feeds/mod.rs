//! Feed fetching for the configured RSS and Atom sources.
//!
//! Each configured URL goes through the same two phases:
//!
//! 1. **Fetching**: Download the feed document over HTTP
//! 2. **Mapping**: Parse it and turn the leading entries into classified
//!    [`Article`](crate::models::Article)s
//!
//! # Default Sources
//!
//! | Source | Feed |
//! |--------|------|
//! | TechCrunch | AI tag feed |
//! | MIT Technology Review | Artificial intelligence topic |
//! | VentureBeat | AI category |
//! | AI News | Site-wide feed |
//!
//! # Common Patterns
//!
//! - Feeds are fetched one at a time with a fixed pause between them
//! - Graceful error handling (a failed feed is logged and yields no articles)
//! - RSS 2.0, RSS 1.0 and Atom are parsed through the same code path

pub mod rss;
