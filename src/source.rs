//! Posts manifest loading.
//!
//! The gallery consumes an already-prepared list of image posts. At the CLI
//! boundary that list arrives as a JSON manifest written by whatever content
//! pipeline owns the posts:
//!
//! ```json
//! {
//!   "cover": { "src": "/images/tiny-paintings.jpg", "width": 1100, "height": 619 },
//!   "posts": [
//!     {
//!       "id": "a1",
//!       "path": "/tiny-paintings/koala/",
//!       "title": "Koala",
//!       "date": "2019-03-02",
//!       "categories": ["tiny-paintings"],
//!       "image": { "src": "/images/koala.jpg" },
//!       "thumbnail": { "src": "/images/koala-thumb.jpg" }
//!     }
//!   ]
//! }
//! ```
//!
//! [`select_posts`] narrows the manifest to one category and orders it newest
//! first, which is the order the gallery renders in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::{ImageRef, PostSummary};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate post id: {0}")]
    DuplicateId(String),
    #[error("Invalid date {date:?} on post {id} (expected YYYY-MM-DD)")]
    InvalidDate { id: String, date: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsManifest {
    /// Decorative cover image shown above the grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageRef>,
    #[serde(default)]
    pub posts: Vec<PostSummary>,
}

/// Read and check a posts manifest.
pub fn load_manifest(path: &Path) -> Result<PostsManifest, SourceError> {
    let content = fs::read_to_string(path)?;
    let manifest: PostsManifest = serde_json::from_str(&content)?;
    check_manifest(&manifest)?;
    tracing::debug!(
        path = %path.display(),
        posts = manifest.posts.len(),
        "loaded posts manifest"
    );
    Ok(manifest)
}

/// Reject duplicate ids and malformed dates.
///
/// An empty date is allowed; undated posts sort last.
pub fn check_manifest(manifest: &PostsManifest) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for post in &manifest.posts {
        if !seen.insert(post.id.as_str()) {
            return Err(SourceError::DuplicateId(post.id.clone()));
        }
        if !post.date.is_empty() && !is_iso_date(&post.date) {
            return Err(SourceError::InvalidDate {
                id: post.id.clone(),
                date: post.date.clone(),
            });
        }
    }
    Ok(())
}

/// A real calendar date in zero-padded `YYYY-MM-DD` form.
///
/// chrono accepts unpadded fields, which would break string ordering in
/// [`select_posts`], so the parsed date must format back to the input.
fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .is_ok_and(|date| date.format(DATE_FORMAT).to_string() == s)
}

/// Posts in `category` (all posts when `None`), newest first.
///
/// `YYYY-MM-DD` dates order correctly as strings. The sort is stable, so
/// posts sharing a date keep their manifest order.
pub fn select_posts(posts: &[PostSummary], category: Option<&str>) -> Vec<PostSummary> {
    let mut selected: Vec<PostSummary> = posts
        .iter()
        .filter(|p| category.is_none_or(|c| p.categories.iter().any(|pc| pc == c)))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}
