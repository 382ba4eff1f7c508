//! Search and tag filtering over the article catalog.
//!
//! Filtering is a total, pure function: the same inputs always produce the same
//! ordered subsequence of the catalog, and no input is ever rejected.

use super::posts::Post;
use super::tags::ALL_TAG;

/// Per-request filter selection. Both fields are independent last-write-wins values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_tag: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_tag: ALL_TAG.to_string(),
        }
    }
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, selected_tag: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_tag: selected_tag.into(),
        }
    }

    /// Build a state from optional request inputs; a missing or empty tag means [`ALL_TAG`].
    pub fn from_parts(search_term: Option<String>, selected_tag: Option<String>) -> Self {
        let selected_tag = selected_tag
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| ALL_TAG.to_string());

        Self {
            search_term: search_term.unwrap_or_default(),
            selected_tag,
        }
    }

    pub fn has_tag_filter(&self) -> bool {
        self.selected_tag != ALL_TAG
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        filter_posts(posts, &self.search_term, &self.selected_tag)
    }
}

/// Posts whose title or excerpt contains `search_term` (case-insensitive, literal)
/// and which carry `selected_tag` unless it is [`ALL_TAG`]. Catalog order is kept.
pub fn filter_posts<'a>(posts: &'a [Post], search_term: &str, selected_tag: &str) -> Vec<&'a Post> {
    let needle = search_term.to_lowercase();

    posts
        .iter()
        .filter(|post| matches_search(post, &needle) && matches_tag(post, selected_tag))
        .collect()
}

fn matches_search(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle) || post.excerpt.to_lowercase().contains(needle)
}

fn matches_tag(post: &Post, selected_tag: &str) -> bool {
    selected_tag == ALL_TAG || post.has_tag(selected_tag)
}
