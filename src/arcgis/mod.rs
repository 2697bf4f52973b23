//! Client for the upstream ArcGIS REST API: token lifecycle plus layer and
//! attachment queries.
//!
//! Transport and upstream application errors on queries are data
//! ([`QueryOutcome::ServiceError`]), not `Err` values; only a token failure
//! propagates as an error, since nothing downstream can proceed without one.

pub mod types;

use std::time::{Duration, Instant};

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, REFERER};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::config::ArcGisConfig;
use crate::error::AuthenticationError;
pub use types::{
    AttachmentInfo, AttachmentsOutcome, Feature, FeatureCollection, Filter, Geometry,
    QueryOutcome, CONTRACTOR_LAYER, MAIN_LAYER, PAVEMENT_LAYER, PHOTO_LAYER,
};

const TOKEN_TIMEOUT: Duration = Duration::from_secs(30);
const QUERY_TIMEOUT: Duration = Duration::from_secs(60);
const ATTACHMENT_LIST_TIMEOUT: Duration = Duration::from_secs(30);
const ATTACHMENT_CONTENT_TIMEOUT: Duration = Duration::from_secs(60);

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Feature service client holding the configuration and the shared token
/// cache. Constructed once and passed by reference to the aggregator.
pub struct ArcGisClient {
    client: reqwest::Client,
    config: ArcGisConfig,
    /// Shared token cache. Reads vastly outnumber refreshes; racing
    /// refreshes are allowed and the last writer wins (tokens are idempotent
    /// credentials, not counters).
    token: RwLock<Option<CachedToken>>,
}

impl ArcGisClient {
    pub fn new(config: ArcGisConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            REFERER,
            HeaderValue::from_str(&config.referer).context("invalid referer value")?,
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config,
            token: RwLock::new(None),
        })
    }

    /// Return a valid token, refreshing through the portal on a cache miss.
    pub async fn get_token(&self) -> Result<String, AuthenticationError> {
        {
            let cached = self.token.read().await;
            if let Some(tok) = cached.as_ref() {
                if tok.expires_at > Instant::now() {
                    debug!("ArcGIS token found in cache");
                    return Ok(tok.value.clone());
                }
            }
        }

        let token = self.request_token().await?;

        // Cache for one minute less than the requested lifetime so a token is
        // never served right at the expiry boundary.
        let lifetime = Duration::from_secs(self.config.token_expiration_minutes * 60)
            .saturating_sub(Duration::from_secs(60));
        let mut cached = self.token.write().await;
        *cached = Some(CachedToken {
            value: token.clone(),
            expires_at: Instant::now() + lifetime,
        });
        debug!(lifetime_secs = lifetime.as_secs(), "token cached");

        Ok(token)
    }

    async fn request_token(&self) -> Result<String, AuthenticationError> {
        info!(
            url = %self.config.portal_url,
            user = %self.config.username,
            "requesting new ArcGIS token"
        );
        let expiration = self.config.token_expiration_minutes.to_string();
        let params = [
            ("username", self.config.username.as_str()),
            ("password", self.config.password.as_str()),
            ("client", "referer"),
            ("referer", self.config.referer.as_str()),
            ("expiration", expiration.as_str()),
            ("f", "json"),
        ];

        let resp = self
            .client
            .post(&self.config.portal_url)
            .timeout(TOKEN_TIMEOUT)
            .form(&params)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("ArcGIS token request failed: {e}");
                AuthenticationError::new(format!("connection error: {e}"))
            })?;

        let data: Value = resp.json().await.map_err(|e| {
            error!("ArcGIS token response unreadable: {e}");
            AuthenticationError::new(format!("connection error: {e}"))
        })?;

        match data.get("token").and_then(Value::as_str) {
            Some(token) => {
                info!(
                    expiration_minutes = self.config.token_expiration_minutes,
                    "obtained ArcGIS token"
                );
                Ok(token.to_string())
            }
            None => {
                let message = data
                    .pointer("/error/message")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown error");
                error!("ArcGIS token generation failed: {message}");
                Err(AuthenticationError::new(format!(
                    "token generation failed: {message}"
                )))
            }
        }
    }

    /// Query a feature layer, returning all fields.
    pub async fn query_layer(
        &self,
        layer: u32,
        filter: &Filter,
    ) -> Result<QueryOutcome, AuthenticationError> {
        self.query_layer_with_fields(layer, filter, "*").await
    }

    /// Query a feature layer with an explicit `outFields` projection.
    pub async fn query_layer_with_fields(
        &self,
        layer: u32,
        filter: &Filter,
        out_fields: &str,
    ) -> Result<QueryOutcome, AuthenticationError> {
        let where_clause = filter.to_where_clause();
        info!(layer, clause = %where_clause, "querying feature layer");

        let token = self.get_token().await?;
        let url = format!("{}/{}/query", self.feature_service_base(), layer);

        let send = self
            .client
            .get(&url)
            .timeout(QUERY_TIMEOUT)
            .query(&[
                ("where", where_clause.as_str()),
                ("outFields", out_fields),
                ("f", "json"),
                ("token", token.as_str()),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status());

        let resp = match send {
            Ok(resp) => resp,
            Err(e) => {
                error!(layer, "ArcGIS query failed: {e}");
                return Ok(QueryOutcome::ServiceError(e.to_string()));
            }
        };

        let body: Value = match resp.json().await {
            Ok(body) => body,
            Err(e) => {
                error!(layer, "ArcGIS query response unreadable: {e}");
                return Ok(QueryOutcome::ServiceError(e.to_string()));
            }
        };

        if body.get("error").is_some() && body.get("features").is_none() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| body["error"].to_string());
            error!(layer, %message, "ArcGIS query returned an error");
            return Ok(QueryOutcome::ServiceError(message));
        }

        match serde_json::from_value::<FeatureCollection>(body) {
            Ok(collection) => {
                info!(layer, count = collection.features.len(), "queried feature layer");
                Ok(QueryOutcome::Features(collection))
            }
            Err(e) => {
                error!(layer, "ArcGIS query response malformed: {e}");
                Ok(QueryOutcome::ServiceError(format!("malformed response: {e}")))
            }
        }
    }

    /// List attachments of a feature.
    pub async fn get_attachments(
        &self,
        layer: u32,
        object_id: i64,
    ) -> Result<AttachmentsOutcome, AuthenticationError> {
        info!(layer, object_id, "fetching attachment list");

        let token = self.get_token().await?;
        let url = format!(
            "{}/{}/{}/attachments",
            self.feature_service_base(),
            layer,
            object_id
        );

        let send = self
            .client
            .get(&url)
            .timeout(ATTACHMENT_LIST_TIMEOUT)
            .query(&[("f", "json"), ("token", token.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status());

        let resp = match send {
            Ok(resp) => resp,
            Err(e) => {
                error!(layer, object_id, "ArcGIS attachments request failed: {e}");
                return Ok(AttachmentsOutcome::ServiceError(e.to_string()));
            }
        };

        let body: Value = match resp.json().await {
            Ok(body) => body,
            Err(e) => {
                error!(layer, object_id, "ArcGIS attachments response unreadable: {e}");
                return Ok(AttachmentsOutcome::ServiceError(e.to_string()));
            }
        };

        if body.get("error").is_some() && body.get("attachmentInfos").is_none() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| body["error"].to_string());
            error!(layer, object_id, %message, "ArcGIS attachments returned an error");
            return Ok(AttachmentsOutcome::ServiceError(message));
        }

        let infos: Vec<AttachmentInfo> = body
            .get("attachmentInfos")
            .cloned()
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .unwrap_or_default();
        debug!(layer, object_id, count = infos.len(), "retrieved attachments");
        Ok(AttachmentsOutcome::Infos(infos))
    }

    /// Download the binary content of an attachment.
    ///
    /// Any transport failure or non-2xx status yields `None`; the caller
    /// treats the attachment as absent rather than failing the pipeline.
    pub async fn get_attachment_content(
        &self,
        layer: u32,
        object_id: i64,
        attachment_id: i64,
    ) -> Result<Option<(Vec<u8>, String)>, AuthenticationError> {
        info!(layer, object_id, attachment_id, "downloading attachment");

        let token = self.get_token().await?;
        let url = format!(
            "{}/{}/{}/attachments/{}",
            self.feature_service_base(),
            layer,
            object_id,
            attachment_id
        );

        let resp = match self
            .client
            .get(&url)
            .timeout(ATTACHMENT_CONTENT_TIMEOUT)
            .query(&[("token", token.as_str())])
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                error!(layer, object_id, attachment_id, "attachment download failed: {e}");
                return Ok(None);
            }
        };

        if !resp.status().is_success() {
            error!(
                status = %resp.status(),
                attachment_id,
                "attachment retrieval failed"
            );
            return Ok(None);
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        match resp.bytes().await {
            Ok(bytes) => {
                info!(
                    attachment_id,
                    size = bytes.len(),
                    %content_type,
                    "attachment downloaded"
                );
                Ok(Some((bytes.to_vec(), content_type)))
            }
            Err(e) => {
                error!(layer, object_id, attachment_id, "attachment body unreadable: {e}");
                Ok(None)
            }
        }
    }

    fn feature_service_base(&self) -> &str {
        self.config.feature_service_url.trim_end_matches('/')
    }
}
