use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model the landing experience ships with.
pub const MODEL: &str = "gemini-3-flash-preview";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Persona instruction sent with every request. GOGO never sees the
/// conversation history; each call carries only the latest utterance.
const PERSONA: &str = "You are GOGO, a hyper-curious, optimistic, and cute 3D mascot. \
Your personality is inspired by rounded shapes, soft blue colors, and infinite energy. \
You live in a world of floating interesting things. \
Keep your responses short, playful, and filled with curiosity. \
Occasionally use ghost emojis \u{1F47B} and blue hearts \u{1F499}. \
Your goal is to \"Explore Interesting Things Together\".";

/// Substituted when the endpoint answers with no text at all.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "I'm lost in thought... What were we talking about?";

/// The single error kind the gateway surfaces. Transport, auth, quota and
/// malformed-response failures all collapse into this; callers recover with
/// a canned fallback message rather than inspecting causes.
#[derive(Debug, Error)]
#[error("chat gateway request failed: {0}")]
pub struct GatewayError(#[from] anyhow::Error);

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// A missing key is not an error here; it surfaces as a gateway
    /// failure on the first call, like any other deployment fault.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key,
        }
    }

    /// One request, one reply. The caller guarantees `message` is trimmed
    /// and non-empty. Never returns an empty string: a textless response
    /// becomes the fixed placeholder.
    pub async fn generate(&self, message: &str) -> Result<String, GatewayError> {
        self.generate_inner(message).await.map_err(GatewayError::from)
    }

    async fn generate_inner(&self, message: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GEMINI_API_KEY is not set"))?;

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL);
        let request = build_request(message);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini API error {}: {}", status, body));
        }

        let generated: GenerateResponse = response.json().await?;
        Ok(extract_text(&generated).unwrap_or_else(|| EMPTY_REPLY_PLACEHOLDER.to_string()))
    }
}

fn build_request(message: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: message.to_string(),
            }],
        }],
        system_instruction: Content {
            parts: vec![Part {
                text: PERSONA.to_string(),
            }],
        },
        generation_config: GenerationConfig { temperature: 1.0 },
    }
}

/// Text of the first candidate, or None when the response carries none.
fn extract_text(response: &GenerateResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_persona_and_temperature() {
        let body = serde_json::to_value(build_request("hello")).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["temperature"], 1.0);
        let persona = body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(persona.contains("You are GOGO"));
        assert!(persona.contains("Explore Interesting Things Together"));
    }

    #[test]
    fn test_request_sends_only_the_latest_utterance() {
        let body = serde_json::to_value(build_request("just this")).unwrap();
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_extract_text_joins_candidate_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Ooo! "},{"text":"A question! 👻"}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&response).unwrap(), "Ooo! A question! 👻");
    }

    #[test]
    fn test_extract_text_is_none_for_empty_responses() {
        let no_candidates: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(extract_text(&no_candidates).is_none());

        let empty_parts: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(extract_text(&empty_parts).is_none());

        let blank_text: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#)
                .unwrap();
        assert!(extract_text(&blank_text).is_none());
    }
}
