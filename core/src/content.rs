//! JSON request bodies.

use serde::Serialize;

use crate::error::{ClientError, Result};

/// A payload already serialized to JSON text, ready to be sent as a request
/// body with `CONTENT_TYPE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonContent {
    text: String,
}

impl JsonContent {
    /// Media type plus the text encoding of the serialized body.
    pub const CONTENT_TYPE: &'static str = "application/json; charset=utf-8";

    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let text =
            serde_json::to_string(value).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
