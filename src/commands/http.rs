//! HTTP Relation API
//!
//! reqwest-backed `RelationApi` speaking the catalog's `{success, data, error}` envelope.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, ApiResult, RelationApi};
use crate::config::EditorConfig;
use crate::credentials::CredentialProvider;
use crate::models::{ApiEnvelope, Page, PageQuery, ParentRef, RelatableItem, RelationChange, RelationIds};

#[derive(Clone)]
pub struct HttpRelationApi {
    http: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpRelationApi {
    pub fn new(config: &EditorConfig, credentials: Arc<dyn CredentialProvider>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("coloring-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn relations_url(&self, parent: ParentRef) -> String {
        format!(
            "{}/{}/{}/coloring-pages",
            self.base_url,
            parent.parent_type.as_path(),
            parent.id
        )
    }

    fn candidates_url(&self) -> String {
        format!("{}/coloring-pages", self.base_url)
    }

    /// Attach the bearer token, failing before any I/O when there is none
    fn authorize(&self, request: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self
            .credentials
            .bearer_token()
            .ok_or(ApiError::MissingCredentials)?;
        Ok(request.bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let res = self.authorize(request)?.send().await.map_err(map_reqwest_error)?;
        let status = res.status();
        let body = res.text().await.map_err(map_reqwest_error)?;

        if status.is_success() {
            return serde_json::from_str::<ApiEnvelope<T>>(&body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .into_result();
        }

        let message = error_message(&body);
        debug!(status = status.as_u16(), %message, "catalog request failed");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized(message)),
            s => Err(ApiError::Http {
                status: s.as_u16(),
                message,
            }),
        }
    }
}

#[async_trait]
impl RelationApi for HttpRelationApi {
    async fn list_related(
        &self,
        parent: ParentRef,
        query: &PageQuery,
    ) -> ApiResult<Page<RelatableItem>> {
        let request = self.http.get(self.relations_url(parent)).query(query);
        self.send(request).await
    }

    async fn list_candidates(&self, query: &PageQuery) -> ApiResult<Page<RelatableItem>> {
        let request = self.http.get(self.candidates_url()).query(query);
        self.send(request).await
    }

    async fn add_relations(&self, parent: ParentRef, ids: &[u32]) -> ApiResult<RelationChange> {
        let body = RelationIds { ids: ids.to_vec() };
        let request = self.http.post(self.relations_url(parent)).json(&body);
        self.send(request).await
    }

    async fn remove_relations(&self, parent: ParentRef, ids: &[u32]) -> ApiResult<RelationChange> {
        let body = RelationIds { ids: ids.to_vec() };
        let request = self.http.delete(self.relations_url(parent)).json(&body);
        self.send(request).await
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(e.to_string())
    }
}

/// Pull `error` out of a failure envelope, falling back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|env| env.error)
        .unwrap_or_else(|| body.trim().to_string())
}
