use crate::{ClientError, ClientResult};

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client shared by the auth and settings endpoints
#[derive(Clone)]
pub struct BackendClient {
    pub base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl BackendClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "https://xyz.supabase.co")
    /// * `api_key` - Anonymous key sent as `apikey`; none for the settings service
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Build a request carrying the API key and a bearer token.
    ///
    /// The bearer falls back to the API key when no access token is given.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref api_key) = self.api_key {
            req = req.header("apikey", api_key);
        }

        if let Some(token) = access_token.or(self.api_key.as_deref()) {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and handle errors. An empty success body yields `None`.
    pub(crate) async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Option<Value>> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Execute request and decode a JSON body into `T`
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let body = self.execute(req).await?.unwrap_or(Value::Null);
        Ok(serde_json::from_value(body)?)
    }
}

/// Map an error response onto `ClientError::Api`.
///
/// Understands the settings service shape (`{"error": {code, message}}`),
/// PostgREST (`{code, message, details, hint}`) and the auth endpoints
/// (`error` / `error_code` with `error_description` / `msg`).
#[track_caller]
fn api_error(status: StatusCode, body: &str) -> ClientError {
    let parsed = serde_json::from_str::<Value>(body)
        .ok()
        .filter(Value::is_object);

    let Some(value) = parsed else {
        let message = match body.trim() {
            "" => status.canonical_reason().unwrap_or("Unknown error"),
            text => text,
        };
        return ClientError::api_error(status.as_u16().to_string(), message);
    };

    let source = value
        .get("error")
        .filter(|e| e.is_object())
        .unwrap_or(&value);

    let code = first_str(source, &["code", "error_code", "error"])
        .map(String::from)
        .unwrap_or_else(|| status.as_u16().to_string());
    let message = first_str(source, &["error_description", "msg", "message"])
        .unwrap_or("Unknown error");

    ClientError::api_error(code, message)
}

fn first_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
}
