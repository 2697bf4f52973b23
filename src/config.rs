use anyhow::{Context, Result};

/// Connection settings for the ArcGIS portal and feature service.
///
/// Built once at startup and injected into [`crate::ArcGisClient`]; nothing
/// in this crate reads the environment after construction.
#[derive(Debug, Clone)]
pub struct ArcGisConfig {
    /// Token endpoint (`generateToken`) on the portal.
    pub portal_url: String,
    /// Base URL of the feature service, without a trailing layer index.
    pub feature_service_url: String,
    pub username: String,
    pub password: String,
    /// Sent as the `Referer` header on every call and as the token's client
    /// restriction.
    pub referer: String,
    /// Requested token lifetime. The cache holds tokens one minute less.
    pub token_expiration_minutes: u64,
}

impl ArcGisConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();

        let portal_url =
            dotenv::var("ARCGIS_PORTAL_URL").context("ARCGIS_PORTAL_URL required")?;
        let feature_service_url = dotenv::var("ARCGIS_FEATURE_SERVICE_URL")
            .context("ARCGIS_FEATURE_SERVICE_URL required")?;
        let username = dotenv::var("ARCGIS_USERNAME").unwrap_or_default();
        let password = dotenv::var("ARCGIS_PASSWORD").unwrap_or_default();
        let referer = dotenv::var("ARCGIS_REFERER")
            .unwrap_or_else(|_| "https://dtserravalle.altervista.org/".to_string());
        let token_expiration_minutes = dotenv::var("ARCGIS_TOKEN_EXPIRATION_MINUTES")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);

        Ok(Self {
            portal_url,
            feature_service_url,
            username,
            password,
            referer,
            token_expiration_minutes,
        })
    }
}
