use std::sync::Arc;

use axum::response::Response;
use metrics::{counter, histogram};
use serde_json::json;
use url::form_urlencoded;

use crate::application::error::HttpError;
use crate::application::stream::StreamBuilder;
use crate::domain::catalog::Catalog;
use crate::domain::filter::FilterState;
use crate::domain::posts::Post;
use crate::domain::tags::ALL_TAG;
use crate::presentation::views::{
    BlogPageContext, NewsletterView, PostCard, PostGridPartial, ResultsContext, TagBarContext,
    TagBarPartial, TagButton, render_fragment,
};

const SOURCE: &str = "application::blog::BlogService";
pub const RESULTS_ENDPOINT: &str = "/ui/posts";
pub const TAG_BAR_SELECTOR: &str = "#tag-bar";
pub const POST_GRID_SELECTOR: &str = "#post-grid";

/// Rendered fragments for one filter selection.
pub struct ResultsUpdate {
    pub tag_bar_html: String,
    pub grid_html: String,
    pub result_count: usize,
}

#[derive(Clone)]
pub struct BlogService {
    catalog: Arc<Catalog>,
}

impl BlogService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn results_context(&self, filter: &FilterState) -> ResultsContext {
        let matches = filter.apply(self.catalog.posts());

        counter!(
            "folio_blog_filter_total",
            "tag_filter" => if filter.has_tag_filter() { "true" } else { "false" },
            "search" => if filter.has_search() { "true" } else { "false" }
        )
        .increment(1);
        histogram!("folio_blog_filter_results").record(matches.len() as f64);

        let posts: Vec<PostCard> = matches.into_iter().map(post_to_card).collect();
        ResultsContext {
            post_count: posts.len(),
            total_count: self.catalog.len(),
            posts,
        }
    }

    pub fn tag_bar_context(&self, filter: &FilterState) -> TagBarContext {
        let tags = self
            .catalog
            .tag_index()
            .into_iter()
            .map(|tag| TagButton {
                label: tag.to_string(),
                href: filter_href(&filter.search_term, tag),
                on_click: select_tag_expression(tag),
                is_active: tag == filter.selected_tag,
            })
            .collect();

        TagBarContext { tags }
    }

    pub fn results_update(&self, filter: &FilterState) -> Result<ResultsUpdate, HttpError> {
        let results = self.results_context(filter);
        let result_count = results.post_count;

        let tag_bar_html = render_fragment(
            &TagBarPartial {
                content: self.tag_bar_context(filter),
            },
            SOURCE,
        )?;
        let grid_html = render_fragment(&PostGridPartial { content: results }, SOURCE)?;

        Ok(ResultsUpdate {
            tag_bar_html,
            grid_html,
            result_count,
        })
    }

    pub fn page_context(&self, filter: &FilterState) -> Result<BlogPageContext, HttpError> {
        let update = self.results_update(filter)?;
        let signals = json!({
            "search": filter.search_term,
            "tag": filter.selected_tag,
            "resultCount": update.result_count,
        });

        Ok(BlogPageContext {
            search_term: filter.search_term.clone(),
            selected_tag: filter.selected_tag.clone(),
            signals_json: signals.to_string(),
            tag_bar_html: update.tag_bar_html,
            grid_html: update.grid_html,
            newsletter: NewsletterView::default(),
        })
    }
}

/// Stream the re-rendered tag bar and grid back to a datastar client.
pub fn build_datastar_results_response(update: ResultsUpdate) -> Response {
    let ResultsUpdate {
        tag_bar_html,
        grid_html,
        result_count,
    } = update;

    let mut stream = StreamBuilder::new();
    stream
        .replace(TAG_BAR_SELECTOR, tag_bar_html)
        .replace(POST_GRID_SELECTOR, grid_html)
        .signals(&json!({ "resultCount": result_count }));
    stream.into_response()
}

fn post_to_card(post: &Post) -> PostCard {
    PostCard {
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        tags: post.tags.clone(),
        read_time: post.read_time.clone(),
        date: post.date.clone(),
        image: post.image.clone(),
    }
}

/// Link reproducing a filter selection without scripting.
pub fn filter_href(search_term: &str, tag: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !search_term.is_empty() {
        query.append_pair("search", search_term);
    }
    if tag != ALL_TAG {
        query.append_pair("tag", tag);
    }

    let query = query.finish();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

fn select_tag_expression(tag: &str) -> String {
    // JSON string literals are valid JavaScript string literals.
    let literal = serde_json::Value::from(tag);
    format!("$tag = {literal}; @get('{RESULTS_ENDPOINT}')")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> BlogService {
        BlogService::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn filter_href_omits_defaults() {
        assert_eq!(filter_href("", ALL_TAG), "/");
        assert_eq!(filter_href("", "Web Development"), "/?tag=Web+Development");
        assert_eq!(filter_href("tcp & udp", ALL_TAG), "/?search=tcp+%26+udp");
        assert_eq!(filter_href("dsa", "DSA"), "/?search=dsa&tag=DSA");
    }

    #[test]
    fn select_tag_expression_quotes_the_tag() {
        assert_eq!(
            select_tag_expression("AI"),
            r#"$tag = "AI"; @get('/ui/posts')"#
        );
        assert_eq!(
            select_tag_expression(r#"say "hi""#),
            r#"$tag = "say \"hi\""; @get('/ui/posts')"#
        );
    }

    #[test]
    fn tag_bar_marks_only_selected_tag_active() {
        let bar = service().tag_bar_context(&FilterState::new("", "Backend"));
        let active: Vec<&str> = bar
            .tags
            .iter()
            .filter(|tag| tag.is_active)
            .map(|tag| tag.label.as_str())
            .collect();
        assert_eq!(active, vec!["Backend"]);
        assert_eq!(bar.tags.first().map(|tag| tag.label.as_str()), Some(ALL_TAG));
        assert_eq!(bar.tags.len(), 10);
    }

    #[test]
    fn tag_bar_has_no_active_button_for_unknown_tag() {
        let bar = service().tag_bar_context(&FilterState::new("", "Gardening"));
        assert!(bar.tags.iter().all(|tag| !tag.is_active));
    }

    #[test]
    fn tag_links_keep_current_search() {
        let bar = service().tag_bar_context(&FilterState::new("web", ALL_TAG));
        let ai = bar
            .tags
            .iter()
            .find(|tag| tag.label == "AI")
            .expect("AI tag present");
        assert_eq!(ai.href, "/?search=web&tag=AI");
    }

    #[test]
    fn results_context_counts_matches_and_catalog() {
        let results = service().results_context(&FilterState::new("web", ALL_TAG));
        assert_eq!(results.post_count, 2);
        assert_eq!(results.total_count, 3);
        let titles: Vec<&str> = results.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "AI in Modern Web Development",
                "Understanding the TCP Handshake"
            ]
        );
    }

    #[test]
    fn page_context_embeds_signals_and_fragments() {
        let page = service()
            .page_context(&FilterState::new("TCP", ALL_TAG))
            .expect("page context");

        let signals: serde_json::Value =
            serde_json::from_str(&page.signals_json).expect("signals json");
        assert_eq!(
            signals,
            json!({ "search": "TCP", "tag": "All", "resultCount": 1 })
        );
        assert!(page.tag_bar_html.contains(r#"id="tag-bar""#));
        assert!(page.grid_html.contains("Understanding the TCP Handshake"));
        assert!(!page.grid_html.contains("AI in Modern Web Development"));
    }

    #[test]
    fn empty_result_renders_an_empty_grid() {
        let update = service()
            .results_update(&FilterState::new("zzz", ALL_TAG))
            .expect("update");
        assert_eq!(update.result_count, 0);
        assert!(update.grid_html.contains(r#"id="post-grid""#));
        assert!(update.grid_html.contains(r#"data-count="0""#));
        assert!(!update.grid_html.contains("<article"));
    }
}
