//! Typed JSON-over-HTTP client.
//!
//! # Overview
//! `JsonHttpClient` sends GET, POST and PUT requests with JSON bodies and
//! decodes JSON responses into a caller-chosen type. Each operation exists in
//! a blocking form (`get`, `post`, `put`) and an async form (`get_async`,
//! `post_async`, `put_async`) with the same semantics; the contract is the
//! `JsonService` trait.
//!
//! # Design
//! - The client is stateless apart from its base URL (`url_service`).
//! - Every request sends `accept: application/json`; bodies are sent as
//!   `application/json; charset=utf-8`.
//! - A non-2xx response is not an error: the `JsonService` methods return
//!   `T::default()`. `send`/`send_async` return a `Reply` that keeps the
//!   status for callers that need to tell "not found" from "empty".
//! - Transport failures and undecodable 2xx bodies are `ClientError`s.

pub mod client;
pub mod content;
pub mod error;
pub mod http;
pub mod reply;
pub mod service;

pub use client::JsonHttpClient;
pub use content::JsonContent;
pub use error::{ClientError, Result};
pub use http::{HttpMethod, JsonRequest, APPLICATION_JSON};
pub use reply::Reply;
pub use service::JsonService;
