//! The immutable article catalog and its load-time validation.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use super::error::DomainError;
use super::posts::{self, Post};
use super::tags::{ALL_TAG, tag_index};

/// Ordered, read-only collection of posts shared across requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    posts: Arc<[Post]>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    posts: Vec<Post>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            posts: posts::builtin().into(),
        }
    }

    pub fn from_posts(posts: Vec<Post>) -> Result<Self, DomainError> {
        for (index, post) in posts.iter().enumerate() {
            validate_post(index, post)?;
        }

        Ok(Self {
            posts: posts.into(),
        })
    }

    /// Parse a TOML document with a `[[posts]]` array of tables.
    pub fn from_toml_str(source: &str) -> Result<Self, DomainError> {
        let document: CatalogDocument = toml::from_str(source)?;
        Self::from_posts(document.posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn tag_index(&self) -> Vec<&str> {
        tag_index(&self.posts)
    }
}

fn validate_post(index: usize, post: &Post) -> Result<(), DomainError> {
    let position = index + 1;

    if post.title.trim().is_empty() {
        return Err(DomainError::validation(format!(
            "post #{position} has an empty title"
        )));
    }

    if post.tags.is_empty() {
        return Err(DomainError::validation(format!(
            "post `{}` must carry at least one tag",
            post.title
        )));
    }

    let mut seen = HashSet::with_capacity(post.tags.len());
    for tag in &post.tags {
        if tag.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "post `{}` has a blank tag",
                post.title
            )));
        }
        if tag == ALL_TAG {
            return Err(DomainError::validation(format!(
                "post `{}` uses the reserved tag `{ALL_TAG}`",
                post.title
            )));
        }
        if !seen.insert(tag.as_str()) {
            return Err(DomainError::validation(format!(
                "post `{}` lists tag `{tag}` more than once",
                post.title
            )));
        }
    }

    let image = Url::parse(&post.image).map_err(|err| {
        DomainError::validation(format!("post `{}` has an invalid image url: {err}", post.title))
    })?;
    if !matches!(image.scheme(), "http" | "https") {
        return Err(DomainError::validation(format!(
            "post `{}` image must use http or https",
            post.title
        )));
    }

    Ok(())
}
