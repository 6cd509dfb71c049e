use std::time::Duration;

use async_stream::try_stream;
use bytes::BytesMut;
use futures::stream::{BoxStream, StreamExt};
use reqwest::{Client, Response};
use serde_json::Value;

use lexdraft_core::{BackendConfig, GenerationBackend, GenerationOptions, LexdraftError};

use crate::GenerateRequest;

/// Async client for an Ollama-style `/api/generate` endpoint.
#[derive(Clone, Debug)]
pub struct OllamaClient {
    url: String,
    model: String,
    timeout: Duration,
    http: Client,
}

/// Extracts the text carried by one line of a streamed response.
///
/// Blank lines, lines that are not JSON, and records without a non-empty
/// string `response` all yield `None`.
pub fn parse_stream_line(line: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(line);
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(line) {
        Ok(record) => record
            .get("response")
            .and_then(Value::as_str)
            .filter(|chunk| !chunk.is_empty())
            .map(str::to_owned),
        Err(err) => {
            tracing::debug!(error = %err, line, "skipping malformed stream line");
            None
        }
    }
}

impl OllamaClient {
    /// The configured timeout bounds connecting and each individual read.
    /// Single-shot calls also use it as a total deadline; streams have none.
    pub fn new(config: &BackendConfig) -> Result<Self, LexdraftError> {
        config.validate()?;
        let http = Client::builder()
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .build()
            .map_err(|err| LexdraftError::InvalidConfig(err.to_string()))?;
        Ok(Self {
            url: config.url.clone(),
            model: config.model.clone(),
            timeout: config.timeout,
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send(
        &self,
        request: &GenerateRequest,
        deadline: Option<Duration>,
    ) -> Result<Response, LexdraftError> {
        tracing::debug!(
            url = %self.url,
            model = %request.model,
            stream = request.stream,
            "sending generation request"
        );
        let mut builder = self.http.post(&self.url).json(request);
        if let Some(deadline) = deadline {
            builder = builder.timeout(deadline);
        }
        let response = builder
            .send()
            .await
            .map_err(|err| LexdraftError::Backend(format!("request to backend failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("<body unreadable: {err}>"));
            return Err(LexdraftError::Backend(format!(
                "backend returned HTTP {status}: {body}"
            )));
        }
        Ok(response)
    }

    /// Single-shot generation; returns the `response` field of the reply.
    pub async fn call(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LexdraftError> {
        let request = GenerateRequest::new(prompt, &self.model, options, false);
        let body = self
            .send(&request, Some(self.timeout))
            .await?
            .text()
            .await
            .map_err(|err| {
                LexdraftError::Backend(format!("failed to read backend response: {err}"))
            })?;

        let reply: Value = serde_json::from_str(&body)
            .map_err(|err| LexdraftError::Backend(format!("invalid JSON from backend: {err}")))?;
        reply
            .get("response")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| LexdraftError::Backend("missing 'response' in backend output".to_string()))
    }

    /// Streaming generation over newline-delimited JSON.
    ///
    /// Nothing is sent until the stream is first polled. A transport failure
    /// mid-stream is yielded once as an error and ends the stream; dropping the
    /// stream closes the connection.
    pub fn stream_call(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> BoxStream<'static, Result<String, LexdraftError>> {
        let client = self.clone();
        let request = GenerateRequest::new(prompt, &self.model, &options, true);

        try_stream! {
            let response = client.send(&request, None).await?;
            let mut body = response.bytes_stream();
            let mut buffer = BytesMut::new();

            while let Some(bytes) = body.next().await {
                let bytes = bytes.map_err(|err| {
                    LexdraftError::Backend(format!("backend stream interrupted: {err}"))
                })?;
                buffer.extend_from_slice(&bytes);

                while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                    let line = buffer.split_to(pos + 1);
                    if let Some(chunk) = parse_stream_line(&line) {
                        yield chunk;
                    }
                }
            }

            // trailing record without a newline
            if let Some(chunk) = parse_stream_line(&buffer) {
                yield chunk;
            }
        }
        .boxed()
    }
}

#[async_trait::async_trait]
impl GenerationBackend for OllamaClient {
    async fn generate(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> Result<String, LexdraftError> {
        self.call(&prompt, &options).await
    }

    fn generate_stream(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> BoxStream<'_, Result<String, LexdraftError>> {
        self.stream_call(prompt, options)
    }
}
