//! Ghost Admin API publisher

use async_trait::async_trait;
use ghostpress_core::{PostPublisher, PostTransformer, TokenSigner};
use ghostpress_domain::constants::{admin_audience, DIAGNOSTICS_TARGET, JSON_CONTENT_TYPE};
use ghostpress_domain::{Document, PostEnvelope, PublishConfig, PublishResult};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::response::interpret_response;
use crate::errors::PublishError;
use crate::http::HttpClient;

/// Publishes one document per call to `POST /ghost/api/v4/admin/posts/`.
///
/// A fresh token is signed for every call and dropped when the call ends.
/// No request is sent when the credential is malformed.
#[derive(Debug, Clone)]
pub struct GhostAdminClient {
    http: HttpClient,
    signer: TokenSigner,
    transformer: PostTransformer,
}

impl GhostAdminClient {
    /// Client with default HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Config`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, PublishError> {
        let http = HttpClient::builder()
            .user_agent(concat!("ghostpress/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(http))
    }

    /// Client sending through an already configured [`HttpClient`].
    pub fn with_http_client(http: HttpClient) -> Self {
        Self { http, signer: TokenSigner::new(), transformer: PostTransformer::new() }
    }

    async fn try_publish(
        &self,
        document: &Document,
        config: &PublishConfig,
    ) -> Result<PublishResult, PublishError> {
        let token = self.signer.sign(&config.credential, &admin_audience())?;

        let envelope = PostEnvelope::from(self.transformer.transform(document));
        if config.debug_log {
            debug!(
                target: DIAGNOSTICS_TARGET,
                payload = %serde_json::to_string(&envelope)?,
                "Outgoing post payload"
            );
        }

        let request = self
            .http
            .request(Method::POST, config.posts_url())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(AUTHORIZATION, token.authorization_header())
            .body(serde_json::to_vec(&envelope)?);
        drop(token);

        let response = self.http.send(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if config.debug_log {
            debug!(target: DIAGNOSTICS_TARGET, %status, response = %body, "Admin API response");
        }

        Ok(interpret_response(&document.identifier, &body))
    }
}

#[async_trait]
impl PostPublisher for GhostAdminClient {
    #[instrument(skip_all, fields(identifier = %document.identifier))]
    async fn publish_one(&self, document: &Document, config: &PublishConfig) -> PublishResult {
        match self.try_publish(document, config).await {
            Ok(result) if result.success => {
                info!(status = ?result.status, "Post created");
                result
            }
            Ok(result) => {
                warn!(kind = ?result.error_kind, error = ?result.error, "Admin API rejected post");
                result
            }
            Err(err) => {
                warn!(category = ?err.category(), error = %err, "Publish failed");
                err.into_result(&document.identifier)
            }
        }
    }
}
