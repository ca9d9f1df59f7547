//! Plain-data description of a single JSON call.
//!
//! # Design
//! A `JsonRequest` is built before any I/O happens, so the headers and body
//! a call will send can be inspected in unit tests without a server. The
//! transports in `client` only translate it to `ureq` or `reqwest` builders.

use std::fmt;

use serde::Serialize;

use crate::content::JsonContent;
use crate::error::Result;

/// Media type sent in the `accept` header of every request.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON request described as plain data.
#[derive(Debug, Clone)]
pub struct JsonRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<JsonContent>,
}

impl JsonRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![("accept".to_string(), APPLICATION_JSON.to_string())],
            body: None,
        }
    }

    pub fn post<B: Serialize + ?Sized>(url: impl Into<String>, body: &B) -> Result<Self> {
        Self::with_body(HttpMethod::Post, url.into(), body)
    }

    pub fn put<B: Serialize + ?Sized>(url: impl Into<String>, body: &B) -> Result<Self> {
        Self::with_body(HttpMethod::Put, url.into(), body)
    }

    fn with_body<B: Serialize + ?Sized>(method: HttpMethod, url: String, body: &B) -> Result<Self> {
        let content = JsonContent::new(body)?;
        Ok(Self {
            method,
            url,
            headers: vec![
                ("accept".to_string(), APPLICATION_JSON.to_string()),
                ("content-type".to_string(), JsonContent::CONTENT_TYPE.to_string()),
            ],
            body: Some(content),
        })
    }

    /// Value of the first header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
