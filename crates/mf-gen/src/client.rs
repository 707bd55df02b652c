//! Streaming chat-completion client.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::prompt::{self, ChatMessage};
use crate::sse::SseDecoder;
use mf_core::{MockupDocument, SelectionItem};
use serde::Serialize;

/// Anything that can stream a chat completion.
///
/// `on_chunk(delta, full_so_far)` is called once per content delta, in
/// arrival order; the resolved value is the full text. Implementors only
/// provide [`chat`](Self::chat); the mockup helpers build their prompts on
/// top of it.
#[allow(async_fn_in_trait)]
pub trait GenerationService {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        on_chunk: &mut dyn FnMut(&str, &str),
    ) -> Result<String, GenerationError>;

    /// Ask for a new mockup described by `prompt`.
    async fn generate_mockup(
        &self,
        prompt: &str,
        on_chunk: &mut dyn FnMut(&str, &str),
    ) -> Result<String, GenerationError> {
        self.chat(&prompt::generate_messages(prompt), on_chunk).await
    }

    /// Ask for a revised copy of `doc`, scoped by the current selection.
    async fn edit_mockup(
        &self,
        doc: &MockupDocument,
        selection: &[SelectionItem],
        request: &str,
        on_chunk: &mut dyn FnMut(&str, &str),
    ) -> Result<String, GenerationError> {
        self.chat(&prompt::edit_messages(doc, selection, request), on_chunk)
            .await
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    max_tokens: u32,
    temperature: f32,
}

/// [`GenerationService`] backed by an OpenAI-compatible NIM endpoint.
///
/// Requests are independent: starting a new one does not cancel an earlier
/// stream, so a caller issuing overlapping requests sees the last one to
/// finish win.
pub struct NimClient {
    http: reqwest::Client,
    config: GenerationConfig,
}

impl NimClient {
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

impl GenerationService for NimClient {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        on_chunk: &mut dyn FnMut(&str, &str),
    ) -> Result<String, GenerationError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(GenerationError::MissingCredential),
        };

        let url = self.config.completions_url();
        log::info!(
            "requesting completion from {url} ({}, {} messages)",
            self.config.model,
            messages.len()
        );

        let body = CompletionRequest {
            model: &self.config.model,
            messages,
            stream: true,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        let mut response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = GenerationError::from_response_body(status.as_u16(), &text);
            log::warn!("completion request failed: {err}");
            return Err(err);
        }

        let mut decoder = SseDecoder::new();
        let mut full = String::new();
        while let Some(bytes) = response.chunk().await? {
            for delta in decoder.feed(&bytes) {
                full.push_str(&delta);
                on_chunk(&delta, &full);
            }
        }
        if let Some(delta) = decoder.finish() {
            full.push_str(&delta);
            on_chunk(&delta, &full);
        }

        log::info!("completion finished: {} chars", full.len());
        Ok(full)
    }
}
