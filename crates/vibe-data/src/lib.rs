//! HTTP client utilities and REST bindings for the Vibe Store.
//!
//! [`FetchClient`] is a small builder API over a pluggable
//! [`HttpTransport`]; [`StoreApi`] uses it to talk to the products and
//! contacts functions.
//!
//! # Example
//!
//! ```rust,ignore
//! use vibe_data::{ApiConfig, StoreApi};
//!
//! let api = StoreApi::new(ApiConfig::new(
//!     "https://functions.example.dev/products",
//!     "https://functions.example.dev/contacts",
//! ));
//!
//! let products = api.list_products().await?;
//! let contacts = api.get_contacts().await?;
//! ```

mod api;
mod error;
mod request;
mod response;
mod transport;

pub use api::{ApiConfig, IdPlacement, StoreApi};
pub use error::FetchError;
pub use request::{Method, Request, RequestBuilder};
pub use response::Response;
pub use transport::{HttpTransport, ReqwestTransport};

use std::collections::HashMap;
use std::sync::Arc;

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    default_headers: HashMap<String, String>,
    transport: Arc<dyn HttpTransport>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client that sends requests with `reqwest`.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }

    /// Create a client over a custom transport.
    pub fn with_transport(transport: impl HttpTransport + 'static) -> Self {
        Self::with_shared_transport(Arc::new(transport))
    }

    /// Create a client over a shared transport.
    pub fn with_shared_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            default_headers: HashMap::new(),
            transport,
        }
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let mut builder = RequestBuilder::new(method, url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn HttpTransport>,
}

impl ClientRequestBuilder {
    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let request = self.builder.build();
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiConfig, FetchClient, FetchError, Method, Response, StoreApi};
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;

    #[tokio::test]
    async fn test_default_headers_on_every_request() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.respond(200, "[]");
        transport.respond(204, "");

        let client = FetchClient::with_shared_transport(transport.clone())
            .with_default_header("Content-Type", "application/json");

        let listed: Vec<u32> = client
            .get("https://api.example.com/products")
            .send()
            .await
            .unwrap()
            .json()
            .unwrap();
        assert!(listed.is_empty());
        client
            .delete("https://api.example.com/products/3")
            .send()
            .await
            .unwrap();

        let requests = transport.requests.lock();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].url, "https://api.example.com/products/3");
        assert_eq!(requests[1].method, Method::Delete);
        assert!(requests
            .iter()
            .all(|r| r.header("content-type") == Some("application/json")));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.fail(FetchError::RequestError("connection refused".into()));

        let client = FetchClient::with_shared_transport(transport);
        let err = client.get("http://localhost:1").send().await.unwrap_err();
        assert!(matches!(err, FetchError::RequestError(_)));
    }
}
