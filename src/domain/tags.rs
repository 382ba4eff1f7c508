//! Tag index derived from the article catalog.

use std::collections::HashSet;

use super::posts::Post;

/// Sentinel tag meaning "no tag filter". Never stored on a post.
pub const ALL_TAG: &str = "All";

/// Distinct tags across `posts` in first-seen order, with [`ALL_TAG`] first.
pub fn tag_index(posts: &[Post]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::from([ALL_TAG]);
    let mut tags = vec![ALL_TAG];

    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.as_str());
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::posts;

    fn post(tags: &[&str]) -> Post {
        Post {
            title: "title".to_string(),
            excerpt: "excerpt".to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            read_time: "1 min".to_string(),
            date: "January 1, 2024".to_string(),
            image: "https://example.com/a.png".to_string(),
        }
    }

    #[test]
    fn empty_catalog_yields_only_all() {
        assert_eq!(tag_index(&[]), vec![ALL_TAG]);
    }

    #[test]
    fn builtin_catalog_tags_keep_first_seen_order() {
        let catalog = posts::builtin();
        insta::assert_debug_snapshot!(tag_index(&catalog), @r#"
        [
            "All",
            "DSA",
            "Competitive Programming",
            "Algorithms",
            "AI",
            "Web Development",
            "Technology",
            "Networking",
            "Web Servers",
            "Backend",
        ]
        "#);
    }

    #[test]
    fn repeated_tags_are_listed_once() {
        let catalog = vec![post(&["rust", "web"]), post(&["web", "db"]), post(&["rust"])];
        assert_eq!(tag_index(&catalog), vec![ALL_TAG, "rust", "web", "db"]);
    }

    #[test]
    fn tags_differing_only_in_case_stay_distinct() {
        let catalog = vec![post(&["AI"]), post(&["ai"])];
        assert_eq!(tag_index(&catalog), vec![ALL_TAG, "AI", "ai"]);
    }
}
