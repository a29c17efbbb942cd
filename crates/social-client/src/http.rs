//! The request client.
//!
//! Every backend call funnels through [`ApiClient::execute`]: attach the
//! bearer token, apply the per-request timeout, send, then normalize the
//! response. Two envelope conventions exist in the wild (`code == 200` vs
//! `code == 0` for success) and which one applies is configuration, not
//! inference. Session-invalidating failures clear the persisted token and
//! cached user as a side effect so the next protected screen redirects to
//! login.

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use social_core::config::{ClientConfig, EnvelopeConvention};
use social_core::{Result, SessionStore, SocialError};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Generic fallback shown when the server supplies no message.
const FALLBACK_MESSAGE: &str = "请求失败";

/// HTTP client bound to one backend and one session store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Creates a client for the configured backend.
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SocialError::network(e.to_string()))?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// GET `path` and decode the unwrapped payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        decode(self.request_value(Method::GET, path, &[], None).await?)
    }

    /// GET `path` with query pairs.
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        decode(self.request_value(Method::GET, path, query, None).await?)
    }

    /// POST a JSON body to `path`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        decode(
            self.request_value(Method::POST, path, &[], Some(body))
                .await?,
        )
    }

    /// POST to `path` without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        decode(self.request_value(Method::POST, path, &[], None).await?)
    }

    /// PUT a JSON body to `path`.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        decode(
            self.request_value(Method::PUT, path, &[], Some(body))
                .await?,
        )
    }

    /// PUT to `path` without a body (status transitions).
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        decode(self.request_value(Method::PUT, path, &[], None).await?)
    }

    /// DELETE `path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        decode(self.request_value(Method::DELETE, path, &[], None).await?)
    }

    /// POST `file` to `path` as a multipart form under the `file` field.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, file: &Path) -> Result<T> {
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| SocialError::invalid_input("upload path has no file name"))?;
        let bytes = tokio::fs::read(file).await?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);
        let builder = self
            .http
            .request(Method::POST, self.url(path))
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .multipart(form);

        decode(self.execute(builder).await?)
    }

    /// Sends one request and returns the unwrapped payload.
    pub async fn request_value(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value> {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .timeout(Duration::from_millis(self.config.timeout_ms));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.execute(builder).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<Value> {
        let mut request = builder
            .build()
            .map_err(|e| SocialError::network(e.to_string()))?;

        // Attach the bearer token unless the caller already supplied one
        if !request.headers().contains_key(AUTHORIZATION) {
            if let Some(token) = self.session.token() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| SocialError::invalid_input("token is not a valid header value"))?;
                request.headers_mut().insert(AUTHORIZATION, value);
            }
        }

        debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let payload = read_payload(response).await;
        let result = unwrap_envelope(status, payload, self.config.envelope);

        if matches!(result, Err(SocialError::Unauthorized)) {
            if let Err(e) = self.session.clear_session() {
                warn!("failed to clear session after auth failure: {}", e);
            }
        }

        result
    }
}

fn map_transport_error(err: reqwest::Error) -> SocialError {
    if err.is_timeout() {
        SocialError::Timeout
    } else {
        SocialError::network(err.to_string())
    }
}

/// Reads the body as JSON, tolerating non-JSON and empty bodies.
async fn read_payload(response: reqwest::Response) -> Value {
    let text = response.text().await.unwrap_or_default();
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Normalizes status and body into the actual payload or a failure.
///
/// A 2xx body carrying a numeric `code` field is treated as a business
/// envelope; a body without one is returned as-is (or its `data` sub-field,
/// when present) to cover both backend generations.
fn unwrap_envelope(
    status: StatusCode,
    payload: Value,
    convention: EnvelopeConvention,
) -> Result<Value> {
    if !status.is_success() {
        return match status.as_u16() {
            401 => Err(SocialError::Unauthorized),
            403 => Err(SocialError::Forbidden),
            s => Err(SocialError::http(
                s,
                error_message(&payload).unwrap_or_else(|| format!("HTTP {}", s)),
            )),
        };
    }

    let code = payload
        .as_object()
        .and_then(|envelope| envelope.get("code"))
        .and_then(Value::as_i64);

    match code {
        None => Ok(extract_data(payload)),
        Some(code) if convention.is_success(code) => Ok(extract_data(payload)),
        Some(code) if ClientConfig::is_session_expired(code) => Err(SocialError::Unauthorized),
        Some(403) => Err(SocialError::Forbidden),
        Some(code) => Err(SocialError::business(
            code,
            error_message(&payload).unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        )),
    }
}

/// Returns the `data` sub-field when present, else the payload itself.
fn extract_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Server-supplied error text: `message` first, then the legacy `msg`.
fn error_message(payload: &Value) -> Option<String> {
    let envelope = payload.as_object()?;
    for key in ["message", "msg"] {
        if let Some(text) = envelope.get(key).and_then(Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(payload: Value) -> Result<Value> {
        unwrap_envelope(StatusCode::OK, payload, EnvelopeConvention::SuccessIs200)
    }

    #[test]
    fn test_success_envelope_unwraps_data() {
        let result = ok(json!({"code": 200, "message": "ok", "data": {"balance": 10}}));
        assert_eq!(result.unwrap(), json!({"balance": 10}));
    }

    #[test]
    fn test_success_envelope_without_data_yields_raw_body() {
        let result = ok(json!({"code": 200, "message": "ok"}));
        assert_eq!(result.unwrap(), json!({"code": 200, "message": "ok"}));
    }

    #[test]
    fn test_success_is_zero_convention() {
        let payload = json!({"code": 0, "data": [1, 2]});
        let result = unwrap_envelope(
            StatusCode::OK,
            payload,
            EnvelopeConvention::SuccessIsZero,
        );
        assert_eq!(result.unwrap(), json!([1, 2]));

        // Under the zero convention a literal 200 is a business failure
        let result = unwrap_envelope(
            StatusCode::OK,
            json!({"code": 200, "message": "x"}),
            EnvelopeConvention::SuccessIsZero,
        );
        assert!(matches!(result, Err(SocialError::Business { code: 200, .. })));
    }

    #[test]
    fn test_session_expired_codes_reject_unauthorized() {
        for code in [401, 1001] {
            let result = ok(json!({"code": code}));
            assert!(matches!(result, Err(SocialError::Unauthorized)), "code {}", code);
        }
    }

    #[test]
    fn test_envelope_403_is_forbidden() {
        assert!(matches!(ok(json!({"code": 403})), Err(SocialError::Forbidden)));
    }

    #[test]
    fn test_business_failure_prefers_message_then_msg() {
        let result = ok(json!({"code": 201, "message": "库存不足"}));
        assert!(matches!(result, Err(SocialError::Business { code: 201, ref message }) if message == "库存不足"));

        let result = ok(json!({"code": 201, "msg": "legacy"}));
        assert!(matches!(result, Err(SocialError::Business { ref message, .. }) if message == "legacy"));

        let result = ok(json!({"code": 201}));
        assert!(matches!(result, Err(SocialError::Business { ref message, .. }) if message == FALLBACK_MESSAGE));
    }

    #[test]
    fn test_body_without_code_passes_through() {
        assert_eq!(ok(json!({"token": "t"})).unwrap(), json!({"token": "t"}));
        assert_eq!(ok(json!([1, 2, 3])).unwrap(), json!([1, 2, 3]));
        assert_eq!(ok(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_body_without_code_but_with_data_unwraps() {
        assert_eq!(ok(json!({"data": {"id": 1}})).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn test_http_401_rejects_regardless_of_body() {
        for payload in [Value::Null, json!({"code": 200, "data": {}}), json!("nope")] {
            let result = unwrap_envelope(
                StatusCode::UNAUTHORIZED,
                payload,
                EnvelopeConvention::SuccessIs200,
            );
            assert!(matches!(result, Err(SocialError::Unauthorized)));
        }
    }

    #[test]
    fn test_http_403_is_forbidden() {
        let result = unwrap_envelope(
            StatusCode::FORBIDDEN,
            Value::Null,
            EnvelopeConvention::SuccessIs200,
        );
        assert!(matches!(result, Err(SocialError::Forbidden)));
    }

    #[test]
    fn test_other_http_errors_carry_server_message() {
        let result = unwrap_envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"message": "boom"}),
            EnvelopeConvention::SuccessIs200,
        );
        assert!(matches!(result, Err(SocialError::Http { status: 500, ref message }) if message == "boom"));

        let result = unwrap_envelope(
            StatusCode::BAD_GATEWAY,
            Value::Null,
            EnvelopeConvention::SuccessIs200,
        );
        assert!(matches!(result, Err(SocialError::Http { status: 502, ref message }) if message == "HTTP 502"));
    }

    #[test]
    fn test_extract_data_keeps_null_data() {
        assert_eq!(extract_data(json!({"data": null})), Value::Null);
    }
}
