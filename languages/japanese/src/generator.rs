use async_trait::async_trait;
use koto_core::kana::is_kana_only;
use koto_core::normalize_tokens;
use koto_core::token::validate;
use koto_generator::{EntryGenerator, GenerateError, GenerationRequest, ProviderMetadata};
use koto_types::GeneratedEntry;
use serde_json::{Value, json};

use crate::prompt::build_prompt;
use crate::schema::entry_schema;

/// Gemini structured-output client
#[derive(Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl EntryGenerator for GeminiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedEntry, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::AuthenticationError);
        }

        let body = request_body(request);
        tracing::info!("Generating entry for '{}' with {}", request.target(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(GenerateError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(GenerateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(GenerateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: Value = response.json().await.map_err(|e| {
            GenerateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let entry = parse_response(&json)?;

        let violations = validate(&entry.reading, request.target());
        for violation in &violations {
            tracing::warn!("Generated reading for '{}': {}", request.target(), violation);
        }
        for token in entry.reading.iter().filter(|t| t.furigana.is_none()) {
            if !is_kana_only(&token.text) {
                tracing::warn!("Generated token '{}' has no reading", token.text);
            }
        }

        Ok(entry)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

/// `generateContent` payload, temperature pinned to 0
pub fn request_body(request: &GenerationRequest) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": build_prompt(request) }]
        }],
        "generationConfig": {
            "temperature": 0,
            "responseMimeType": "application/json",
            "responseSchema": entry_schema()
        }
    })
}

/// Pull the entry out of a `generateContent` response and normalize its tokens
pub fn parse_response(json: &Value) -> Result<GeneratedEntry, GenerateError> {
    let text = json["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].get(0))
        .and_then(|p| p["text"].as_str())
        .ok_or_else(|| GenerateError::ApiError("No candidate in response".to_string()))?;

    let entry: GeneratedEntry =
        serde_json::from_str(text).map_err(|e| GenerateError::SchemaError(e.to_string()))?;

    Ok(GeneratedEntry {
        reading: normalize_tokens(entry.reading),
        meaning: entry.meaning,
    })
}

#[cfg(test)]
mod tests {
    use koto_types::FuriganaToken;

    use super::*;

    fn wrap(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn parses_and_normalizes_tokens() {
        let response = wrap(
            r#"{"reading":[{"text":"金","furigana":"きん"},{"text":"メダル","furigana":"めだる"},{"text":"級","furigana":"きゅう"}],"meaning":"金メダルを取るほどすごいこと。"}"#,
        );

        let entry = parse_response(&response).unwrap();

        assert_eq!(
            entry.reading,
            vec![
                FuriganaToken::new("金", Some("きん")),
                FuriganaToken::kana("メダル"),
                FuriganaToken::new("級", Some("きゅう")),
            ]
        );
        assert_eq!(entry.meaning, "金メダルを取るほどすごいこと。");
    }

    #[test]
    fn rejects_flat_schema() {
        let response = wrap(r#"{"reading":"あとのまつり","meaning":"手遅れ。"}"#);
        assert!(matches!(
            parse_response(&response),
            Err(GenerateError::SchemaError(_))
        ));
    }

    #[test]
    fn rejects_extra_fields() {
        let response = wrap(r#"{"reading":[],"meaning":"m","example":"x"}"#);
        assert!(matches!(
            parse_response(&response),
            Err(GenerateError::SchemaError(_))
        ));
    }

    #[test]
    fn no_candidates() {
        assert!(matches!(
            parse_response(&json!({ "candidates": [] })),
            Err(GenerateError::ApiError(_))
        ));
    }

    #[test]
    fn body_carries_schema_and_prompt() {
        let body = request_body(&GenerationRequest::new("春", None));
        assert_eq!(body["generationConfig"]["temperature"], 0);
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["reading", "meaning"])
        );
        assert!(
            body["contents"][0]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("Target: \"春\"")
        );
    }

    #[test]
    fn endpoint_joins_model() {
        let generator = GeminiGenerator::new(
            "key".to_string(),
            "https://example.test/v1beta/models/".to_string(),
            "gemini-2.0-flash".to_string(),
        );
        assert_eq!(
            generator.endpoint(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(generator.metadata().model, "gemini-2.0-flash");
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let generator = GeminiGenerator::new(
            String::new(),
            "http://127.0.0.1:9".to_string(),
            "m".to_string(),
        );
        let result = generator.generate(&GenerationRequest::new("春", None)).await;
        assert!(matches!(result, Err(GenerateError::AuthenticationError)));
    }
}
