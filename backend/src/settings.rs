//! Application configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `XAI_REPORT_*` environment variables over an
//! optional configuration file. Unset values fall back to the defaults
//! exposed by the accessor methods.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::narrative::HttpNarrativeSettings;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_BYTES: usize = 1_000_000;
const DEFAULT_NARRATIVE_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_NARRATIVE_MODEL: &str = "gpt-4o-mini";
const DEFAULT_NARRATIVE_TIMEOUT_SECS: u64 = 20;

/// Runtime settings for the report service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "XAI_REPORT")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Ceiling for JSON request bodies, in bytes.
    pub max_body_bytes: Option<usize>,
    /// API key for the external narrative service; absent means template
    /// narratives only.
    pub narrative_api_key: Option<String>,
    /// Chat-completions URL of the external narrative service.
    pub narrative_endpoint: Option<String>,
    /// Model requested from the external narrative service.
    pub narrative_model: Option<String>,
    /// Deadline for one external narrative call, in seconds.
    pub narrative_timeout_secs: Option<u64>,
    /// Seed the demo user and model at startup. Read from the environment or
    /// a configuration file only.
    #[ortho_config(default = true, skip_cli)]
    pub seed_demo_data: bool,
}

impl AppSettings {
    /// Host and port to bind, with defaults applied.
    pub fn bind_address(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }

    pub fn narrative_timeout(&self) -> Duration {
        Duration::from_secs(
            self.narrative_timeout_secs
                .unwrap_or(DEFAULT_NARRATIVE_TIMEOUT_SECS),
        )
    }

    /// External narrative settings, present only when an API key is set.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured endpoint is not a valid URL.
    pub fn narrative_settings(&self) -> Result<Option<HttpNarrativeSettings>, url::ParseError> {
        let Some(api_key) = self
            .narrative_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        else {
            return Ok(None);
        };
        let endpoint = Url::parse(
            self.narrative_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_NARRATIVE_ENDPOINT),
        )?;
        Ok(Some(HttpNarrativeSettings {
            endpoint,
            api_key: api_key.to_owned(),
            model: self
                .narrative_model
                .clone()
                .unwrap_or_else(|| DEFAULT_NARRATIVE_MODEL.to_owned()),
        }))
    }
}
