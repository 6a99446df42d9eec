use crate::config::GeminiConfig;
use crate::models::suggestion::{ActivitySuggestion, SelectionCriteria};
use crate::services::generator::{GenerationError, SuggestionGenerator};
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

const GENERATE_CONTENT_SUFFIX: &str = ":generateContent";
const API_KEY_HEADER: &str = "x-goog-api-key";
const ERROR_BODY_LIMIT: usize = 320;
const SUGGESTIONS_REQUESTED: usize = 4;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with its parts joined by newlines.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }
}

/// Gemini `generateContent` client. One request per call, bounded by the
/// configured timeout, never retried.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    url: Url,
    array_pattern: Regex,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let url = resolve_endpoint(&config.endpoint, &config.model)?;
        let array_pattern = Regex::new(r"(?s)\[.*\]")
            .map_err(|e| GenerationError::ResponseError(format!("Invalid array pattern: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            url,
            array_pattern,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.url
    }

    /// The API key with all but its edges hidden, for status output.
    pub fn masked_key(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() > 8 {
                let head: String = chars[..4].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{}***{}", head, tail)
            } else {
                "***".to_string()
            }
        })
    }

    pub async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response = self
            .client
            .post(self.url.clone())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::StatusError(
                status.as_u16(),
                truncate(&error_text, ERROR_BODY_LIMIT),
            ));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ResponseError(format!("Failed to parse response: {}", e)))?;

        if let Some(reason) = body.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            log::debug!("Gemini finished with reason {}", reason);
        }

        Ok(body.text())
    }

    /// Pulls the suggestion array out of free-form model output. Prose around
    /// the array is ignored; entries missing a field are dropped.
    pub fn parse_suggestions(&self, text: &str) -> Result<Vec<ActivitySuggestion>, GenerationError> {
        let candidate = self
            .array_pattern
            .find(text)
            .map(|m| m.as_str())
            .unwrap_or(text);

        let value: Value = serde_json::from_str(candidate.trim())
            .map_err(|e| GenerationError::ResponseError(format!("Model output is not JSON: {}", e)))?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(GenerationError::ResponseError(format!(
                    "Expected a JSON array, got {}",
                    json_kind(&other)
                )))
            }
        };

        let total = items.len();
        let suggestions: Vec<ActivitySuggestion> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<ActivitySuggestion>(item).ok())
            .filter(ActivitySuggestion::is_complete)
            .collect();

        if suggestions.len() < total {
            log::debug!(
                "Dropped {} of {} generated suggestions with missing fields",
                total - suggestions.len(),
                total
            );
        }

        Ok(suggestions)
    }
}

impl SuggestionGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_generated(
        &self,
        criteria: &SelectionCriteria,
    ) -> Result<Vec<ActivitySuggestion>, GenerationError> {
        let prompt = build_prompt(criteria);
        let text = self.generate_text(&prompt).await?;
        self.parse_suggestions(&text)
    }
}

pub fn build_prompt(criteria: &SelectionCriteria) -> String {
    format!(
        r#"Suggest {count} creative, fun things to do that match these choices:
- Location: {location}
- Time of Day: {time}
- Budget: {budget}

Prefer specific, memorable ideas over generic ones. Instead of "visit a museum", suggest something like "a late-night tour of a specific exhibit".

Respond with only a JSON array in this shape:
[
  {{
    "name": "A short, catchy name for the activity",
    "description": "A one-paragraph description of the activity",
    "estimated_cost": "A brief cost descriptor such as 'Free' or '$10-$20 per person'",
    "location_hint": "Where the activity takes place, e.g. 'Georgetown waterfront'"
  }}
]"#,
        count = SUGGESTIONS_REQUESTED,
        location = criteria.location,
        time = criteria.time_of_day,
        budget = criteria.budget_tier,
    )
}

/// Accepts either a base URL or a full `...:generateContent` URL.
pub fn resolve_endpoint(endpoint: &str, model: &str) -> Result<Url, GenerationError> {
    let full = if endpoint.contains(GENERATE_CONTENT_SUFFIX) {
        endpoint.to_string()
    } else {
        format!(
            "{}/v1beta/models/{}{}",
            endpoint.trim_end_matches('/'),
            model,
            GENERATE_CONTENT_SUFFIX
        )
    };

    Url::parse(&full).map_err(|e| {
        GenerationError::ResponseError(format!("Invalid Gemini endpoint {}: {}", endpoint, e))
    })
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{}...", cut)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
