use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::ItineraryError,
    text_generator::{GenerationRequest, TextGenerator},
};

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

pub const GEMINI_API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_ENV_VAR: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL_ENV_VAR: &str = "GEMINI_BASE_URL";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_json_schema: &'a serde_json::Value,
}

impl<'a> From<&'a GenerationRequest> for GenerateContentRequest<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_json_schema: &request.response_schema,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined.
    fn into_text(self) -> Result<String, ItineraryError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            Err(ItineraryError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

// Error body returned by the API on non-2xx statuses
#[derive(Debug, Deserialize)]
struct GeminiErrorPayload {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

fn api_error_message(body: String) -> String {
    match serde_json::from_str::<GeminiErrorPayload>(&body) {
        Ok(payload) => payload.error.message,
        Err(_) => body,
    }
}

pub struct GeminiClientParams {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiClientParams {
    /// A missing key is not an error here, the request is sent anyway and the
    /// service rejects it.
    pub fn from_env() -> Self {
        GeminiClientParams {
            api_key: std::env::var(GEMINI_API_KEY_ENV_VAR).unwrap_or_default(),
            model: std::env::var(GEMINI_MODEL_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: std::env::var(GEMINI_BASE_URL_ENV_VAR)
                .unwrap_or_else(|_| GEMINI_API_BASE_URL.to_string()),
        }
    }
}

pub struct GeminiClient {
    params: GeminiClientParams,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(params: GeminiClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.params.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.params.base_url.trim_end_matches('/'),
            self.params.model
        )
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        GeminiClient::new(GeminiClientParams::from_env())
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ItineraryError> {
        let body = GenerateContentRequest::from(request);

        debug!("Gemini: generating content with {}", self.params.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.params.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = api_error_message(response.text().await.unwrap_or_default());
            return Err(ItineraryError::Api { status, message });
        }

        let content: GenerateContentResponse = response.json().await?;
        content.into_text()
    }
}
