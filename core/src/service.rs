//! The typed JSON-over-HTTP contract.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Typed GET/POST/PUT against a JSON web service, in blocking and async
/// forms with identical semantics.
///
/// A 2xx response body is decoded into `T`. Any other status yields
/// `T::default()` and no error. Transport failures and undecodable 2xx
/// bodies are returned as errors.
#[async_trait]
pub trait JsonService: Send + Sync {
    /// Base address of the web service. Callers concatenate it with a path.
    fn url_service(&self) -> &str;

    fn set_url_service(&mut self, url: impl Into<String>);

    fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Default;

    fn post<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized;

    fn put<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized;

    async fn get_async<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Default + Send;

    async fn post_async<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + Sync + ?Sized;

    async fn put_async<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + Sync + ?Sized;
}
