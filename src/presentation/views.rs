use crate::application::error::{ErrorReport, HttpError};
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// An askama failure tagged with the call site that rendered it.
#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

/// Render a full page; failures become a 500 carrying the askama error chain.
pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

/// Render a fragment that is embedded in a page or streamed as a patch.
pub fn render_fragment<T: Template>(template: &T, source: &'static str) -> Result<String, HttpError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(source, "Template rendering failed", err).into())
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

/// The themed 404 page, with a report so the miss is logged as a client error.
pub fn render_not_found_response(chrome: LayoutChrome) -> Response {
    let view = LayoutContext::new(chrome, ErrorPageView::not_found());
    let mut response = render_template_response(ErrorTemplate { view }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}

#[derive(Clone)]
pub struct BrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct PageMetaView {
    pub title: String,
    pub description: String,
}

/// Everything `base.html` needs besides the page body.
#[derive(Clone)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub meta: PageMetaView,
    pub theme: &'static str,
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub meta: PageMetaView,
    pub theme: &'static str,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            brand: chrome.brand,
            meta: chrome.meta,
            theme: chrome.theme,
            content,
        }
    }
}

#[derive(Clone)]
pub struct PostCard {
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub read_time: String,
    pub date: String,
    pub image: String,
}

/// The filtered grid. An empty `posts` renders an empty grid.
pub struct ResultsContext {
    pub posts: Vec<PostCard>,
    pub post_count: usize,
    pub total_count: usize,
}

#[derive(Clone)]
pub struct TagButton {
    pub label: String,
    /// Plain link used when scripting is unavailable.
    pub href: String,
    /// datastar expression run on click.
    pub on_click: String,
    pub is_active: bool,
}

pub struct TagBarContext {
    pub tags: Vec<TagButton>,
}

/// Static newsletter block. The subscribe button is intentionally inert.
#[derive(Clone)]
pub struct NewsletterView {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub placeholder: &'static str,
    pub button_label: &'static str,
}

impl Default for NewsletterView {
    fn default() -> Self {
        Self {
            heading: "Subscribe to My Newsletter",
            blurb: "Get the latest articles on AI, ML, and web development delivered to your inbox.",
            placeholder: "Enter your email",
            button_label: "Subscribe",
        }
    }
}

pub struct BlogPageContext {
    pub search_term: String,
    pub selected_tag: String,
    pub signals_json: String,
    pub tag_bar_html: String,
    pub grid_html: String,
    pub newsletter: NewsletterView,
}

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub view: LayoutContext<BlogPageContext>,
}

#[derive(Template)]
#[template(path = "partials/post_grid.html")]
pub struct PostGridPartial {
    pub content: ResultsContext,
}

#[derive(Template)]
#[template(path = "partials/tag_bar.html")]
pub struct TagBarPartial {
    pub content: TagBarContext,
}

pub struct ErrorPageView {
    pub status_code: u16,
    pub title: String,
    pub message: String,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            status_code: 404,
            title: "Page not found".to_string(),
            message: "The page you were looking for does not exist.".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}
