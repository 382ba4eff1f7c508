//! Server-sent event responses understood by the datastar client.

use std::convert::Infallible;

use async_stream::stream;
use axum::response::{
    IntoResponse, Response,
    sse::{Event, Sse},
};
use datastar::prelude::{ElementPatchMode, PatchElements, PatchSignals};
use serde_json::Value;

/// Ordered batch of datastar events flushed as one SSE response.
#[derive(Default)]
pub struct StreamBuilder {
    events: Vec<Event>,
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the element matched by `selector` with `html`.
    pub fn replace(&mut self, selector: &str, html: String) -> &mut Self {
        let event = PatchElements::new(html)
            .selector(selector)
            .mode(ElementPatchMode::Replace)
            .write_as_axum_sse_event();
        self.events.push(event);
        self
    }

    /// Merge `signals` into the client signal store.
    pub fn signals(&mut self, signals: &Value) -> &mut Self {
        let event = PatchSignals::new(signals.to_string()).write_as_axum_sse_event();
        self.events.push(event);
        self
    }

    pub fn into_response(self) -> Response {
        let events = self.events;
        let stream = stream! {
            for event in events {
                yield Ok::<Event, Infallible>(event);
            }
        };
        Sse::new(stream).into_response()
    }
}
