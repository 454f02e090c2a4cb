//! Reqwest-backed narrative generator for chat-completions services.
//!
//! This adapter owns transport details only: prompt serialisation, bearer
//! authentication, timeout and HTTP error mapping, and decoding the first
//! completion choice. Fallback to the template lives in the domain composer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{ChatMessageDto, ChatRequestDto, ChatResponseDto};
use crate::domain::StructuredReport;
use crate::domain::ports::{NarrativeGenerator, NarrativeGeneratorError};

const SYSTEM_PROMPT: &str = "Eres un asistente de cumplimiento normativo. Redacta en español una \
    justificación clara y profesional de una decisión automatizada de alto impacto para la \
    persona afectada, usando exclusivamente los datos del informe JSON recibido. Estructura el \
    texto en párrafos separados por una línea en blanco: decisión y contexto, factores y \
    técnicas de explicabilidad, supervisión humana y reclamación, limitaciones. No inventes \
    datos.";
const TEMPERATURE: f32 = 0.2;

/// Connection settings for a chat-completions endpoint.
pub struct HttpNarrativeSettings {
    /// Full URL of the chat-completions resource.
    pub endpoint: Url,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Model name placed in the request body.
    pub model: String,
}

/// Narrative generator backed by an external chat-completions service.
pub struct HttpNarrativeGenerator {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl HttpNarrativeGenerator {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(settings: HttpNarrativeSettings, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint,
            api_key: settings.api_key,
            model: settings.model,
        })
    }
}

#[async_trait]
impl NarrativeGenerator for HttpNarrativeGenerator {
    fn source(&self) -> &'static str {
        "http"
    }

    async fn generate(&self, report: &StructuredReport) -> Result<String, NarrativeGeneratorError> {
        let report_json = serde_json::to_string(report).map_err(|error| {
            NarrativeGeneratorError::decode(format!("report serialisation failed: {error}"))
        })?;
        let body = build_request(&self.model, &report_json);

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }
        parse_completion(bytes.as_ref())
    }
}

fn build_request<'a>(model: &'a str, report_json: &'a str) -> ChatRequestDto<'a> {
    ChatRequestDto {
        model,
        temperature: TEMPERATURE,
        messages: [
            ChatMessageDto {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessageDto {
                role: "user",
                content: report_json,
            },
        ],
    }
}

fn parse_completion(body: &[u8]) -> Result<String, NarrativeGeneratorError> {
    let decoded: ChatResponseDto = serde_json::from_slice(body).map_err(|error| {
        NarrativeGeneratorError::decode(format!("invalid completion payload: {error}"))
    })?;
    decoded
        .into_text()
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(NarrativeGeneratorError::empty)
}

fn map_transport_error(error: reqwest::Error) -> NarrativeGeneratorError {
    NarrativeGeneratorError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> NarrativeGeneratorError {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    NarrativeGeneratorError::status(status.as_u16(), preview)
}
