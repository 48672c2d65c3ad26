use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;

use super::AnalysisError;

/// Fixed sampling parameters sent with every generation request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 800,
            temperature: 0.4,
            top_p: 0.9,
            frequency_penalty: 0.3,
            presence_penalty: 0.2,
        }
    }
}

/// Outbound text-generation capability.
///
/// One prompt in, one raw completion out. All call sites go through this
/// trait so the endpoint can be swapped (or mocked) in one place.
pub trait TextGenClient: Send + Sync {
    fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, AnalysisError>;
}

/// HTTP client for a bearer-authenticated generation endpoint.
pub struct HttpGenClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpGenClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: &GenerationConfig, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
            timeout_secs,
        }
    }

    /// Client configured from the environment with a 2-minute timeout.
    pub fn from_env() -> Self {
        Self::new(&GenerationConfig::from_env(), 120)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Request body for the generation endpoint.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(flatten)]
    params: &'a GenerationParams,
}

/// Response envelope. Only the generated text is read; `response` is
/// accepted as an alias so an Ollama-style endpoint works unchanged.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(alias = "response")]
    text: String,
}

impl TextGenClient for HttpGenClient {
    fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, AnalysisError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            params,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                AnalysisError::Connection(self.endpoint.clone())
            } else if e.is_timeout() {
                AnalysisError::Http(format!("Request timed out after {}s", self.timeout_secs))
            } else {
                AnalysisError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AnalysisError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| AnalysisError::ResponseParsing(e.to_string()))?;

        Ok(parsed.text)
    }
}

/// Mock generation client for testing — returns a configurable reply
/// and counts how many calls reached it.
pub struct MockGenClient {
    reply: String,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockGenClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A client whose every call fails with an HTTP error.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: String::new(),
            fail_with: Some(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of generate calls that reached this client.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextGenClient for MockGenClient {
    fn generate(&self, _prompt: &str, _params: &GenerationParams) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(AnalysisError::Http(message.clone())),
            None => Ok(self.reply.clone()),
        }
    }
}
