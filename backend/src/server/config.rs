//! HTTP server configuration object and helpers.

use std::time::Duration;

use xai_report::AppSettings;
use xai_report::outbound::narrative::HttpNarrativeSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) max_body_bytes: usize,
    pub(crate) narrative: Option<HttpNarrativeSettings>,
    pub(crate) narrative_timeout: Duration,
    pub(crate) seed_demo_data: bool,
}

impl ServerConfig {
    /// Construct a configuration with template-only narratives and no demo
    /// data.
    #[must_use]
    pub fn new(bind_addr: (String, u16), max_body_bytes: usize) -> Self {
        Self {
            bind_addr,
            max_body_bytes,
            narrative: None,
            narrative_timeout: Duration::from_secs(20),
            seed_demo_data: false,
        }
    }

    /// Derive the configuration from loaded application settings.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when the narrative endpoint is not a valid
    /// URL.
    pub fn from_settings(settings: &AppSettings) -> std::io::Result<Self> {
        let narrative = settings.narrative_settings().map_err(|err| {
            std::io::Error::other(format!("invalid narrative endpoint: {err}"))
        })?;
        Ok(Self::new(settings.bind_address(), settings.max_body_bytes())
            .with_narrative(narrative, settings.narrative_timeout())
            .with_demo_data(settings.seed_demo_data))
    }

    /// Attach an external narrative service and its per-call deadline.
    #[must_use]
    pub fn with_narrative(
        mut self,
        narrative: Option<HttpNarrativeSettings>,
        timeout: Duration,
    ) -> Self {
        self.narrative = narrative;
        self.narrative_timeout = timeout;
        self
    }

    /// Seed the demo user and model before serving traffic.
    #[must_use]
    pub fn with_demo_data(mut self, enabled: bool) -> Self {
        self.seed_demo_data = enabled;
        self
    }

    /// Return the host and port the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by server bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> &(String, u16) {
        &self.bind_addr
    }

    pub(crate) fn narrative_enabled(&self) -> bool {
        self.narrative.is_some()
    }
}
