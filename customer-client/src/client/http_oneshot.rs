// customer-client/src/client/http_oneshot.rs
// Oneshot HTTP 客户端 - 内存通信
//
// 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{ClientError, ClientResult};

use super::http::HttpClient;

/// Oneshot HTTP 客户端 (内存调用)
///
/// Calls an axum `Router` directly through Tower's `oneshot`, with no
/// socket in between. Used to run the controller against an in-process
/// backend.
///
/// # Example
///
/// ```ignore
/// use customer_client::OneshotHttpClient;
///
/// let client = OneshotHttpClient::new(customer_mock::router(state));
/// let customer: Customer = client.get("customers/1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// # Arguments
    /// * `router` - fully built Router (`with_state` already applied)
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn uri(path: &str) -> String {
        format!("/{}", path.trim_start_matches('/'))
    }

    fn build_request(&self, method: http::Method, path: &str) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(Self::uri(path))
            .body(Body::empty())
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_request_with_body<B: serde::Serialize>(
        &self,
        method: http::Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let body_bytes = serde_json::to_vec(body)?;

        Request::builder()
            .method(method)
            .uri(Self::uri(path))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body_bytes))
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    /// 执行请求, 返回成功响应的 body
    async fn execute(&self, request: Request<Body>) -> ClientResult<axum::body::Bytes> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "oneshot");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ClientError::from_status(status, text));
        }

        Ok(body_bytes)
    }

    async fn execute_json<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let body_bytes = self.execute(request).await?;
        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path)?;
        self.execute_json(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(http::Method::POST, path, body)?;
        self.execute_json(request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(http::Method::PUT, path, body)?;
        self.execute_json(request).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::PUT, path)?;
        self.execute_json(request).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.build_request(http::Method::DELETE, path)?;
        self.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::routing::get;

    #[tokio::test]
    async fn test_unknown_route_is_status_error() {
        let client = OneshotHttpClient::new(Router::new());
        let err = client.get::<serde_json::Value>("nowhere").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.api_message(), None);
    }

    #[tokio::test]
    async fn test_error_body_is_decoded() {
        let router = Router::new().route(
            "/boom",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "message": "name is required" })),
                )
            }),
        );
        let client = OneshotHttpClient::new(router);
        let err = client.get::<serde_json::Value>("/boom").await.unwrap_err();
        assert_eq!(err.api_message(), Some("name is required"));
    }

    #[tokio::test]
    async fn test_non_json_success_is_invalid_response() {
        let router = Router::new().route("/text", get(|| async { "plain" }));
        let client = OneshotHttpClient::new(router);
        let err = client.get::<serde_json::Value>("text").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
