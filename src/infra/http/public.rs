use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::{
    application::{
        blog::{self, BlogService, RESULTS_ENDPOINT},
        chrome::ChromeService,
        error::HttpError,
    },
    domain::filter::FilterState,
    presentation::views::{
        BlogTemplate, LayoutContext, PostGridPartial, render_not_found_response,
        render_template_response,
    },
};

use super::{
    DATASTAR_REQUEST_HEADER,
    middleware::{log_responses, set_request_context},
};

#[derive(Clone)]
pub struct HttpState {
    pub blog: Arc<BlogService>,
    pub chrome: Arc<ChromeService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(RESULTS_ENDPOINT, get(posts_partial))
        .route("/_health", get(health))
        .route(
            "/static/public/{*path}",
            get(crate::infra::assets::serve_public),
        )
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FilterQuery {
    search: Option<String>,
    tag: Option<String>,
}

impl FilterQuery {
    fn into_filter_state(self) -> FilterState {
        FilterState::from_parts(self.search, self.tag)
    }
}

/// Query accepted by the results endpoint: plain `search`/`tag` parameters, or the
/// JSON signal store datastar sends in `datastar` on GET requests.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialQuery {
    search: Option<String>,
    tag: Option<String>,
    datastar: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FilterSignals {
    search: Option<String>,
    tag: Option<String>,
}

impl PartialQuery {
    fn into_filter_state(self) -> Result<FilterState, HttpError> {
        let Some(raw) = self.datastar else {
            return Ok(FilterState::from_parts(self.search, self.tag));
        };

        let signals: FilterSignals = serde_json::from_str(&raw).map_err(|err| {
            HttpError::from_error(
                "infra::http::public::posts_partial",
                StatusCode::BAD_REQUEST,
                "Invalid filter signals",
                &err,
            )
        })?;

        Ok(FilterState::from_parts(signals.search, signals.tag))
    }
}

async fn index(State(state): State<HttpState>, Query(query): Query<FilterQuery>) -> Response {
    let chrome = state.chrome.load();
    let filter = query.into_filter_state();

    match state.blog.page_context(&filter) {
        Ok(content) => {
            let view = LayoutContext::new(chrome, content);
            render_template_response(BlogTemplate { view }, StatusCode::OK)
        }
        Err(err) => err.into_response(),
    }
}

async fn posts_partial(
    State(state): State<HttpState>,
    headers: HeaderMap,
    Query(params): Query<PartialQuery>,
) -> Result<Response, HttpError> {
    let filter = params.into_filter_state()?;

    if headers.contains_key(DATASTAR_REQUEST_HEADER) {
        let update = state.blog.results_update(&filter)?;
        return Ok(blog::build_datastar_results_response(update));
    }

    let content = state.blog.results_context(&filter);
    Ok(render_template_response(
        PostGridPartial { content },
        StatusCode::OK,
    ))
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn fallback(State(state): State<HttpState>) -> Response {
    render_not_found_response(state.chrome.load())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_query_builds_filter_state() {
        let query = PartialQuery {
            search: Some("tcp".to_string()),
            tag: Some("Backend".to_string()),
            datastar: None,
        };
        let state = query.into_filter_state().expect("filter state");
        assert_eq!(state, FilterState::new("tcp", "Backend"));
    }

    #[test]
    fn datastar_signals_take_precedence() {
        let query = PartialQuery {
            search: Some("ignored".to_string()),
            tag: None,
            datastar: Some(r#"{"search":"AI","tag":"Technology","resultCount":3}"#.to_string()),
        };
        let state = query.into_filter_state().expect("filter state");
        assert_eq!(state, FilterState::new("AI", "Technology"));
    }

    #[test]
    fn malformed_signals_are_a_bad_request() {
        let query = PartialQuery {
            datastar: Some("{not json".to_string()),
            ..Default::default()
        };
        let err = query.into_filter_state().expect_err("invalid json");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
