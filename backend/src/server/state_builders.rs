//! Builders for the HTTP state and the narrative composer.

use std::sync::Arc;
use std::time::Duration;

use mockable::{Clock, DefaultClock};

use xai_report::domain::{NarrativeComposer, RegistryService};
use xai_report::inbound::http::state::HttpState;
use xai_report::outbound::memory::InMemoryRecordStore;
use xai_report::outbound::narrative::{HttpNarrativeGenerator, HttpNarrativeSettings};

use super::ServerConfig;

/// Wrap the external generator, when configured, in a deadline-bounded
/// composer that falls back to the template.
pub(crate) fn build_composer(
    narrative: Option<HttpNarrativeSettings>,
    timeout: Duration,
) -> std::io::Result<NarrativeComposer> {
    let Some(settings) = narrative else {
        return Ok(NarrativeComposer::template_only());
    };
    let generator = HttpNarrativeGenerator::new(settings, timeout).map_err(|err| {
        std::io::Error::other(format!("narrative client construction failed: {err}"))
    })?;
    Ok(NarrativeComposer::with_external(Arc::new(generator), timeout))
}

/// Build the handler state over a fresh in-memory store, seeding the demo
/// records first when enabled.
pub(crate) async fn build_http_state(config: &mut ServerConfig) -> std::io::Result<HttpState> {
    let store = Arc::new(InMemoryRecordStore::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    if config.seed_demo_data {
        RegistryService::new(Arc::clone(&store), Arc::clone(&clock))
            .seed_demo_data()
            .await
            .map_err(|err| std::io::Error::other(format!("demo data seeding failed: {err}")))?;
    }

    let composer = build_composer(config.narrative.take(), config.narrative_timeout)?;
    Ok(HttpState::from_store(store, clock, composer))
}
