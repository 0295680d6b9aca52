// Responsible for talking to a running catalog API over HTTP.

use crate::domain::{Book, BookPatch, NewBook};
use crate::transport::http::types::{ErrorBody, MessageBody};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// How a request to the API failed.
///
/// `Unreachable` means no response came back at all (connection refused, timeout); it is
/// kept apart from `Api`, which carries the status and `error` message of a real response.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Cannot connect to server at {url}. Please make sure the server is running.")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{message} (status {status})")]
    Api { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid API url: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),
}

impl ClientError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClientError::Unreachable { .. })
    }
}

pub struct CatalogClient {
    http: reqwest::Client,
    base: Url,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Setup)?;
        Ok(Self { http, base })
    }

    /// Liveness check: returns the server's status message.
    pub async fn ping(&self) -> Result<String, ClientError> {
        let body: MessageBody = self.send(self.http.get(self.url(&[]))).await?;
        Ok(body.message)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        self.send(self.http.get(self.url(&["books"]))).await
    }

    pub async fn get_book(&self, book_id: &str) -> Result<Book, ClientError> {
        self.send(self.http.get(self.url(&["books", book_id]))).await
    }

    pub async fn add_book(&self, book: &NewBook) -> Result<Book, ClientError> {
        self.send(self.http.post(self.url(&["books"])).json(book))
            .await
    }

    pub async fn update_book(&self, book_id: &str, patch: &BookPatch) -> Result<Book, ClientError> {
        self.send(self.http.put(self.url(&["books", book_id])).json(patch))
            .await
    }

    pub async fn delete_book(&self, book_id: &str) -> Result<String, ClientError> {
        let body: MessageBody = self
            .send(self.http.delete(self.url(&["books", book_id])))
            .await?;
        Ok(body.message)
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for s in segments {
                path.push(s);
            }
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| ClientError::Unreachable {
            url: self.base.to_string(),
            source: e,
        })?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(ClientError::Decode);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Server error ({})", status.as_u16()),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
