mod data;

use serde::Deserialize;

pub use data::POSTS;

/// Compile-time description of a built-in article.
#[derive(Clone, Copy)]
pub struct PostSeed {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub tags: &'static [&'static str],
    pub read_time: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

/// An article summary shown on the blog grid.
///
/// `read_time` and `date` are display labels only; nothing parses or sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub read_time: String,
    pub date: String,
    pub image: String,
}

impl Post {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

impl From<&PostSeed> for Post {
    fn from(seed: &PostSeed) -> Self {
        Self {
            title: seed.title.to_string(),
            excerpt: seed.excerpt.to_string(),
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
            read_time: seed.read_time.to_string(),
            date: seed.date.to_string(),
            image: seed.image.to_string(),
        }
    }
}

pub fn builtin() -> Vec<Post> {
    POSTS.iter().map(Post::from).collect()
}

