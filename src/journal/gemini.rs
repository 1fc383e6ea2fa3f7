//! Journal generation through the Gemini `generateContent` REST API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::GeminiConfig;
use crate::traits::JournalGenerator;
use crate::types::*;

const SYSTEM_INSTRUCTION: &str = "You are an expert Indian Chartered Accountant. \
Analyze the transaction provided by the user. \
Identify the accounts involved (Real, Personal, Nominal). \
Determine which account is debited and which is credited according to the Golden Rules. \
Provide the result in a strict JSON format. \
The accounts should follow standard Indian naming (e.g., 'Cash A/c', 'Purchases A/c', 'Capital A/c').";

/// User prompt wrapping the raw transaction text
pub fn transaction_prompt(transaction: &str) -> String {
    format!(
        "Translate the following business transaction into a professional double-entry journal entry following Indian accounting standards: \"{transaction}\""
    )
}

/// JSON schema the model must answer with
pub fn journal_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "date": {
                "type": "STRING",
                "description": "Current date or suggested transaction date"
            },
            "particulars": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "account": { "type": "STRING" },
                        "type": { "type": "STRING", "enum": ["Dr", "Cr"] },
                        "amount": { "type": "NUMBER" }
                    },
                    "required": ["account", "type", "amount"]
                }
            },
            "narration": {
                "type": "STRING",
                "description": "Professional narration starting with 'Being...'"
            },
            "reasoning": {
                "type": "STRING",
                "description": "Brief explanation of the golden rules applied"
            }
        },
        "required": ["date", "particulars", "narration", "reasoning"]
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Body of a `generateContent` call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Request asking for a journal entry for `transaction`
    pub fn for_transaction(transaction: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(transaction_prompt(transaction)),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(SYSTEM_INSTRUCTION.to_string()),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: journal_response_schema(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Successful `generateContent` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Parse the first candidate's text as a journal entry
    pub fn into_journal_entry(self) -> JournalResult<JournalEntry> {
        let text = self.text().ok_or(JournalError::EmptyResponse)?;
        Ok(serde_json::from_str(strip_code_fence(&text))?)
    }
}

/// Pull the human-readable message out of an API error body
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

// Models occasionally wrap JSON output in a markdown fence despite the mime type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Journal generator backed by the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiJournalGenerator {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiJournalGenerator {
    /// Create a generator, building an HTTP client with the configured timeout
    pub fn new(config: GeminiConfig) -> JournalResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(JournalError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Full URL of the `generateContent` endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl JournalGenerator for GeminiJournalGenerator {
    async fn generate(&self, transaction: &str) -> JournalResult<JournalEntry> {
        let request = GenerateContentRequest::for_transaction(transaction);

        info!(model = %self.config.model, "requesting journal entry");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            warn!(status = status.as_u16(), %message, "journal generation failed");
            return Err(JournalError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let entry = payload.into_journal_entry()?;

        if !entry.is_balanced() {
            warn!(
                debits = %entry.total_debits(),
                credits = %entry.total_credits(),
                "generated journal entry is not balanced"
            );
        }

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn response_with_text(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap()
    }

    const ENTRY_JSON: &str = r#"{
        "date": "2024-04-01",
        "particulars": [
            {"account": "Cash A/c", "type": "Dr", "amount": 50000},
            {"account": "Capital A/c", "type": "Cr", "amount": 50000}
        ],
        "narration": "Being business started with cash",
        "reasoning": "Cash is a real account; Capital is a personal account"
    }"#;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest::for_transaction("Started business with 50000 cash");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert!(body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .ends_with("\"Started business with 50000 cash\""));
        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Golden Rules"));
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["date", "particulars", "narration", "reasoning"])
        );
    }

    #[test]
    fn test_parses_entry_from_candidate() {
        let entry = response_with_text(ENTRY_JSON).into_journal_entry().unwrap();

        assert_eq!(entry.particulars.len(), 2);
        assert_eq!(entry.particulars[0].account, "Cash A/c");
        assert_eq!(entry.particulars[1].entry_type, EntryType::Credit);
        assert_eq!(entry.total_debits(), BigDecimal::from(50000));
        assert!(entry.narration.starts_with("Being"));
    }

    #[test]
    fn test_parses_fenced_entry() {
        let fenced = format!("```json\n{ENTRY_JSON}\n```");
        let entry = response_with_text(&fenced).into_journal_entry().unwrap();

        assert!(entry.is_balanced());
    }

    #[test]
    fn test_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();

        assert!(matches!(
            response.into_journal_entry(),
            Err(JournalError::EmptyResponse)
        ));
    }

    #[test]
    fn test_malformed_entry() {
        let result = response_with_text(r#"{"date": "today"}"#).into_journal_entry();

        assert!(matches!(result, Err(JournalError::MalformedEntry(_))));
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;

        assert_eq!(error_message(body), "Quota exceeded");
        assert_eq!(error_message("  bad gateway \n"), "bad gateway");
    }

    #[test]
    fn test_generator_requires_key() {
        let result = GeminiJournalGenerator::new(GeminiConfig::new(""));

        assert!(matches!(result, Err(JournalError::MissingApiKey)));
    }

    #[test]
    fn test_endpoint() {
        let generator = GeminiJournalGenerator::new(
            GeminiConfig::new("key").with_base_url("http://localhost:9000/"),
        )
        .unwrap();

        assert_eq!(
            generator.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
