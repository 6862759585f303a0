//! HTTP client for network-based API calls

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::models::{FieldValue, FormField};
use url::Url;

use crate::config::{ClientConfig, IMAGE_SEGMENT, PathStyle};
use crate::error::{ClientError, ClientResult};
use crate::storage::TokenStore;

/// HTTP client bound to one base URL.
///
/// The `Authorization` header is decided once, when the client is built,
/// from the token in the [`TokenStore`]. A later login or logout is only
/// seen by a client built afterwards.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    path_style: PathStyle,
    authorized: bool,
}

impl HttpClient {
    /// Build a client from the configuration and the stored token.
    ///
    /// No network I/O happens here. The token is sent verbatim
    /// (`Authorization: <token>`); one that is not a legal header value is
    /// skipped with a warning.
    pub fn build(config: &ClientConfig, store: &dyn TokenStore) -> ClientResult<Self> {
        let base_url = config.parsed_base_url()?;

        let mut headers = HeaderMap::new();
        if let Some(token) = store.load() {
            match HeaderValue::from_str(&token) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!("Stored token is not a valid header value, sending no Authorization")
                }
            }
        }
        let authorized = headers.contains_key(AUTHORIZATION);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(seconds) = config.timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %base_url, authorized, "HTTP client built");

        Ok(Self {
            client,
            base_url,
            path_style: config.path_style,
            authorized,
        })
    }

    /// Base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry an `Authorization` header.
    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub fn path_style(&self) -> PathStyle {
        self.path_style
    }

    /// Base URL of backend images (`<base>images/`).
    pub fn image_path(&self) -> String {
        format!("{}{}", self.base_url, IMAGE_SEGMENT)
    }

    /// Resolve an image reference returned by the backend.
    pub fn image_url(&self, reference: &str) -> String {
        format!("{}{}", self.image_path(), reference.trim_start_matches('/'))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.client.get(self.url(path));
        self.send("GET", path, req).await
    }

    /// Make a POST request with a multipart body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<FormField>,
    ) -> ClientResult<T> {
        let req = self.client.post(self.url(path)).multipart(to_form(fields)?);
        self.send("POST", path, req).await
    }

    /// Make a PUT request with a multipart body
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<FormField>,
    ) -> ClientResult<T> {
        let req = self.client.put(self.url(path)).multipart(to_form(fields)?);
        self.send("PUT", path, req).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.client.delete(self.url(path));
        self.send("DELETE", path, req).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        tracing::debug!(method, path, "Sending request");
        let response = req.send().await.map_err(|e| {
            tracing::warn!(method, path, error = %e, "Request failed");
            ClientError::from(e)
        })?;
        Self::handle_response(method, path, response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        method: &'static str,
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_else(|e| {
                tracing::debug!(method, path, error = %e, "Failed to read error body");
                String::new()
            });
            tracing::warn!(method, path, status = status.as_u16(), "Request rejected");
            return Err(ClientError::from_status(status, text));
        }

        let bytes = response.bytes().await?;
        // empty bodies (typical for DELETE) decode as JSON null
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };
        serde_json::from_slice(body)
            .map_err(|e| ClientError::InvalidResponse(format!("{method} {path}: {e}")))
    }
}

/// Encode form fields as multipart parts, one per field.
fn to_form(fields: Vec<FormField>) -> ClientResult<Form> {
    let mut form = Form::new();
    for field in fields {
        form = match field.value {
            FieldValue::Text(text) => form.text(field.name, text),
            FieldValue::File(upload) => {
                let part = Part::bytes(upload.bytes)
                    .file_name(upload.file_name)
                    .mime_str(&upload.content_type)
                    .map_err(|e| {
                        ClientError::Config(format!("Invalid content type for {}: {e}", field.name))
                    })?;
                form.part(field.name, part)
            }
        };
    }
    Ok(form)
}
