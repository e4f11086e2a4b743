//! Output generation for the news snapshot.
//!
//! # Submodules
//!
//! - [`json`]: Writes the ranked [`Snapshot`](crate::models::Snapshot) as a
//!   pretty-printed JSON document
//!
//! # Output Structure
//!
//! ```text
//! news_data.json
//! {
//!   "last_update": "2026-10-16T08:30:00.123456+00:00",
//!   "total_count": 2,
//!   "articles": [ { "id": 1, ... }, { "id": 2, ... } ]
//! }
//! ```
//!
//! The file is fully replaced on every run; nothing from a previous snapshot
//! is carried over.

pub mod json;
