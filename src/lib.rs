//! Server-rendered blog section: a static article catalog with live search and
//! tag filtering, streamed to the browser through datastar.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
