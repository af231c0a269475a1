//! HTTP client for the SeedHub API.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use seedhub_auth::ACCESS_TOKEN_HEADER;
use seedhub_core::error::{AppError, ErrorKind};
use seedhub_core::types::{CommentId, FileId, UserId};
use seedhub_entity::file::{CommentView, FileDetailView, FileListView};
use seedhub_entity::user::UserView;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GradeBody {
    average_grade: f64,
}

/// API client that sends the access token on every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the server at `base_url`. With a token, every
    /// request carries it as `X-Access-Token`.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(token)
                .map_err(|e| AppError::with_source(ErrorKind::Validation, "Malformed token", e))?;
            value.set_sensitive(true);
            headers.insert(ACCESS_TOKEN_HEADER, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Request failed: {e}"), e)
        })?;
        let status = response.status();
        debug!(status = %status.as_u16(), url = %response.url(), "API response");

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.message)
                .unwrap_or_default();
            return Err(AppError::new(kind_for(status), message));
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Unexpected response body", e)
        })?;
        Ok(envelope.data)
    }

    /// Server status string.
    pub async fn health(&self) -> Result<String, AppError> {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }
        let health: Health = self.send(self.http.get(self.url("health"))).await?;
        Ok(health.status)
    }

    /// Lists finished files. `query` holds the raw query-string pairs
    /// (`sort`, `order`, `limit`, `name`, `file_type`, `creator`).
    pub async fn list_files(&self, query: &[(&str, String)]) -> Result<Vec<FileListView>, AppError> {
        self.send(self.http.get(self.url("files")).query(query)).await
    }

    /// Files the signed-in user has locked.
    pub async fn locked_files(
        &self,
        order: &str,
        limit: i64,
    ) -> Result<Vec<FileListView>, AppError> {
        let query = [("order", order.to_string()), ("limit", limit.to_string())];
        self.send(self.http.get(self.url("files/locked")).query(&query))
            .await
    }

    /// File detail.
    pub async fn file(&self, id: FileId) -> Result<FileDetailView, AppError> {
        self.send(self.http.get(self.url(&format!("files/{id}")))).await
    }

    /// Comment thread of a file.
    pub async fn comments(&self, id: FileId) -> Result<Vec<CommentView>, AppError> {
        self.send(self.http.get(self.url(&format!("files/{id}/comments"))))
            .await
    }

    /// Posts a comment.
    pub async fn add_comment(&self, id: FileId, text: &str) -> Result<CommentView, AppError> {
        let body = serde_json::json!({ "text": text });
        self.send(
            self.http
                .post(self.url(&format!("files/{id}/comments")))
                .json(&body),
        )
        .await
    }

    /// Deletes a comment.
    pub async fn delete_comment(&self, id: FileId, comment_id: CommentId) -> Result<(), AppError> {
        let _: serde_json::Value = self
            .send(
                self.http
                    .delete(self.url(&format!("files/{id}/comments/{comment_id}"))),
            )
            .await?;
        Ok(())
    }

    /// Grades a file. Returns the new average.
    pub async fn grade(&self, id: FileId, grade: f64) -> Result<f64, AppError> {
        let body = serde_json::json!({ "grade": grade });
        let result: GradeBody = self
            .send(
                self.http
                    .post(self.url(&format!("files/{id}/grade")))
                    .json(&body),
            )
            .await?;
        Ok(result.average_grade)
    }

    /// Locks a file for the signed-in user.
    pub async fn lock(&self, id: FileId) -> Result<(), AppError> {
        let _: serde_json::Value = self
            .send(self.http.post(self.url(&format!("files/{id}/lock"))))
            .await?;
        Ok(())
    }

    /// Releases the signed-in user's lock.
    pub async fn unlock(&self, id: FileId) -> Result<(), AppError> {
        let _: serde_json::Value = self
            .send(self.http.delete(self.url(&format!("files/{id}/lock"))))
            .await?;
        Ok(())
    }

    /// Counts a download.
    pub async fn record_download(&self, id: FileId) -> Result<(), AppError> {
        let _: serde_json::Value = self
            .send(self.http.post(self.url(&format!("files/{id}/download"))))
            .await?;
        Ok(())
    }

    /// Display view of a user.
    pub async fn user(&self, id: UserId) -> Result<UserView, AppError> {
        self.send(self.http.get(self.url(&format!("users/{id}")))).await
    }
}

fn kind_for(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::BAD_REQUEST => ErrorKind::Validation,
        StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::State,
        _ => ErrorKind::Internal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::http::HeaderMap as AxumHeaders;
    use axum::routing::get;

    async fn echo_token(headers: AxumHeaders) -> Json<serde_json::Value> {
        let token = headers
            .get("x-access-token")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        Json(serde_json::json!({ "success": true, "data": { "status": token } }))
    }

    async fn spawn_echo() -> String {
        let app = Router::new().route("/api/health", get(echo_token));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_token_sent_on_every_request() {
        let base = spawn_echo().await;
        let client = ApiClient::new(&base, Some("tok-123")).unwrap();
        assert_eq!(client.health().await.unwrap(), "tok-123");
        assert_eq!(client.health().await.unwrap(), "tok-123");

        let anonymous = ApiClient::new(&base, None).unwrap();
        assert_eq!(anonymous.health().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_error_status_maps_to_kind() {
        let base = spawn_echo().await;
        let client = ApiClient::new(&base, None).unwrap();
        let err = client.user(UserId::new()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_url_joins_cleanly() {
        let client = ApiClient::new("http://localhost:3000/", None).unwrap();
        assert_eq!(client.url("/files"), "http://localhost:3000/api/files");
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let err = ApiClient::new("http://localhost:3000", Some("bad\ntoken")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
