//! Text model access. Handlers only see the [`TextClient`] trait; [`OpenAiClient`] talks to
//! any OpenAI-compatible `/chat/completions` endpoint.

use std::pin::Pin;

use async_stream::stream;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info};

use crate::config::LlmSettings;
use crate::error::ClientError;
use crate::models::LlmOverrides;
use crate::retry::{with_retry, RetryPolicy};

pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, ClientError>> + Send>>;

/// Binary document sent alongside the prompt, e.g. an uploaded PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub mime_type: String,
    /// Base64 body without a data-URL prefix.
    pub data: String,
}

impl Attachment {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextRequest {
    pub system: String,
    pub user: String,
    pub attachment: Option<Attachment>,
    pub overrides: Option<LlmOverrides>,
}

impl TextRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self { system: system.into(), user: user.into(), ..Default::default() }
    }

    pub fn with_attachment(mut self, attachment: Option<Attachment>) -> Self {
        self.attachment = attachment;
        self
    }

    pub fn with_overrides(mut self, overrides: Option<LlmOverrides>) -> Self {
        self.overrides = overrides;
        self
    }
}

#[async_trait]
pub trait TextClient: Send + Sync {
    async fn complete(&self, req: TextRequest) -> Result<String, ClientError>;
    async fn stream(&self, req: TextRequest) -> Result<TextStream, ClientError>;
}

pub struct OpenAiClient {
    http: Client,
    settings: LlmSettings,
    retry: RetryPolicy,
}

fn chat_body(model: &str, req: &TextRequest, stream: bool) -> Value {
    let user_content = match &req.attachment {
        Some(att) => json!([
            { "type": "text", "text": req.user },
            { "type": "image_url", "image_url": { "url": att.data_url() } }
        ]),
        None => json!(req.user),
    };
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": req.system },
            { "role": "user", "content": user_content }
        ],
        "stream": stream,
    })
}

/// Splits a server-sent event byte stream into `data:` payloads.
///
/// Bytes are kept raw until a whole event has arrived, so a multi-byte character cut
/// between two network chunks is decoded intact. Both `\n` and `\r\n` line endings
/// are accepted.
#[derive(Debug, Default)]
struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    /// Appends a chunk and returns the payloads of every event it completed.
    fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);
        let mut payloads = Vec::new();
        while let Some((end, next)) = event_boundary(&self.buffer) {
            let block: Vec<u8> = self.buffer.drain(..next).take(end).collect();
            payloads.extend(data_lines(&block));
        }
        payloads
    }

    /// Payloads of a trailing event that was never terminated by a blank line.
    fn finish(&mut self) -> Vec<String> {
        let rest = std::mem::take(&mut self.buffer);
        data_lines(&rest)
    }
}

/// End of the first event and the start of the next one. An event ends at a newline
/// followed by an empty line.
fn event_boundary(buf: &[u8]) -> Option<(usize, usize)> {
    buf.iter().enumerate().filter(|(_, b)| **b == b'\n').find_map(|(i, _)| {
        let rest = &buf[i + 1..];
        if rest.starts_with(b"\n") {
            Some((i, i + 2))
        } else if rest.starts_with(b"\r\n") {
            Some((i, i + 3))
        } else {
            None
        }
    })
}

fn data_lines(block: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(block)
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| data.trim().to_string())
        .collect()
}

/// Content delta of one `data:` payload, `None` for `[DONE]`.
fn delta_of(data: &str) -> Option<Result<String, ClientError>> {
    if data == "[DONE]" {
        return None;
    }
    match serde_json::from_str::<Value>(data) {
        Ok(v) => Some(Ok(v["choices"][0]["delta"]["content"].as_str().unwrap_or_default().to_string())),
        Err(e) => Some(Err(ClientError::Malformed(format!("stream chunk: {e}")))),
    }
}

impl OpenAiClient {
    pub fn new(settings: LlmSettings, retry: RetryPolicy) -> Self {
        Self { http: Client::new(), settings, retry }
    }

    async fn send(&self, settings: &LlmSettings, body: &Value) -> Result<reqwest::Response, ClientError> {
        if settings.api_key.is_empty() {
            return Err(ClientError::Auth("no API key configured for the text model".into()));
        }
        let url = format!("{}/chat/completions", settings.base_url);
        let response = self.http.post(&url).bearer_auth(&settings.api_key).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, &text));
        }
        Ok(response)
    }
}

#[async_trait]
impl TextClient for OpenAiClient {
    async fn complete(&self, req: TextRequest) -> Result<String, ClientError> {
        let settings = self.settings.merged_with(req.overrides.as_ref());
        let body = chat_body(&settings.model, &req, false);
        info!(model = %settings.model, attachment = req.attachment.is_some(), "🧠 Requesting completion");

        let value: Value = with_retry(&self.retry, "chat_completion", || async {
            let response = self.send(&settings, &body).await?;
            response.json::<Value>().await.map_err(|e| ClientError::Malformed(e.to_string()))
        })
        .await?;

        let content = value["choices"][0]["message"]["content"].as_str().unwrap_or_default().to_string();
        debug!(chars = content.len(), "Completion received");
        Ok(content)
    }

    async fn stream(&self, req: TextRequest) -> Result<TextStream, ClientError> {
        let settings = self.settings.merged_with(req.overrides.as_ref());
        let body = chat_body(&settings.model, &req, true);
        info!(model = %settings.model, attachment = req.attachment.is_some(), "🧠 Opening completion stream");

        // Only establishing the connection is retried; a stream that broke midway is not.
        let response = with_retry(&self.retry, "chat_completion_stream", || self.send(&settings, &body)).await?;
        let mut bytes = response.bytes_stream();

        let out = stream! {
            let mut decoder = SseDecoder::default();
            while let Some(chunk) = bytes.next().await {
                let chunk = match chunk {
                    Ok(c) => c,
                    Err(e) => {
                        yield Err(ClientError::Connection(e.to_string()));
                        return;
                    }
                };
                for data in decoder.push(&chunk) {
                    match delta_of(&data) {
                        None => return,
                        Some(Ok(delta)) if delta.is_empty() => {}
                        Some(item) => yield item,
                    }
                }
            }
            // A last event may arrive without its blank line.
            for data in decoder.finish() {
                match delta_of(&data) {
                    None => return,
                    Some(Ok(delta)) if delta.is_empty() => {}
                    Some(item) => yield item,
                }
            }
        };
        Ok(Box::pin(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn body_without_attachment_is_plain_text() {
        let req = TextRequest::new("sys", "hello");
        let body = chat_body("gpt-4o", &req, false);
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["content"], "hello");
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn attachment_becomes_data_url_part() {
        let req = TextRequest::new("sys", "read this").with_attachment(Some(Attachment {
            mime_type: "application/pdf".into(),
            data: "JVBERi0=".into(),
        }));
        let body = chat_body("m", &req, true);
        let parts = &body["messages"][1]["content"];
        assert_eq!(parts[0]["text"], "read this");
        assert_eq!(parts[1]["image_url"]["url"], "data:application/pdf;base64,JVBERi0=");
    }

    #[test]
    fn stream_payloads() {
        assert!(delta_of("[DONE]").is_none());
        let d = delta_of(r#"{"choices":[{"delta":{"content":"Hi"}}]}"#).unwrap().unwrap();
        assert_eq!(d, "Hi");
        assert!(matches!(delta_of("{oops"), Some(Err(ClientError::Malformed(_)))));
    }

    fn deltas(payloads: Vec<String>) -> Vec<String> {
        payloads.iter().filter_map(|p| delta_of(p)).map(|d| d.unwrap()).collect()
    }

    fn event(text: &str, eol: &str) -> String {
        format!(r#"data: {{"choices":[{{"delta":{{"content":"{text}"}}}}]}}{eol}{eol}"#)
    }

    #[test]
    fn split_multibyte_character_survives() {
        let wire = event("日本", "\n").into_bytes();
        let cut = wire.iter().position(|b| *b == 0xE6).unwrap() + 1;
        let mut decoder = SseDecoder::default();
        let mut out = decoder.push(&wire[..cut]);
        assert!(out.is_empty());
        out.extend(decoder.push(&wire[cut..]));
        assert_eq!(deltas(out), vec!["日本".to_string()]);
    }

    #[test]
    fn crlf_framed_events() {
        let wire = format!("{}data: [DONE]\r\n\r\n", event("Hi", "\r\n"));
        let mut decoder = SseDecoder::default();
        let payloads = decoder.push(wire.as_bytes());
        assert_eq!(payloads.last().map(String::as_str), Some("[DONE]"));
        assert_eq!(deltas(payloads), vec!["Hi".to_string()]);
    }

    #[test]
    fn crlf_boundary_cut_between_chunks() {
        let wire = event("Hi", "\r\n");
        let (a, b) = wire.split_at(wire.len() - 1);
        let mut decoder = SseDecoder::default();
        assert!(decoder.push(a.as_bytes()).is_empty());
        assert_eq!(deltas(decoder.push(b.as_bytes())), vec!["Hi".to_string()]);
    }

    #[test]
    fn unterminated_last_event_is_drained() {
        let mut decoder = SseDecoder::default();
        let wire = event("A", "\n");
        let tail = r#"data: {"choices":[{"delta":{"content":"B"}}]}"#;
        assert_eq!(deltas(decoder.push(format!("{wire}{tail}").as_bytes())), vec!["A".to_string()]);
        assert_eq!(deltas(decoder.finish()), vec!["B".to_string()]);
        assert!(decoder.finish().is_empty());
    }

    #[tokio::test]
    async fn missing_key_is_an_auth_error() {
        let settings = LlmSettings { api_key: String::new(), base_url: "http://127.0.0.1:9/v1".into(), model: "m".into() };
        let client = OpenAiClient::new(settings, RetryPolicy::default());
        let err = client.complete(TextRequest::new("s", "u")).await.unwrap_err();
        assert!(matches!(err, ClientError::Auth(_)));
    }
}
