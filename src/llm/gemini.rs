use super::{ModelTier, TextGenerator};
use crate::config::Config;
use crate::text::truncate;
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Minimal request/response structs for the Gemini generateContent API.
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates_token_count: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total_token_count: Option<u32>,
}

/// Gemini-based implementation of TextGenerator.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    lite_model: String,
    api_base_url: String,
}

impl GeminiClient {
    pub fn new(cfg: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .expect("failed to build HTTP client");

        GeminiClient {
            client,
            api_key: cfg.gemini_api_key.clone(),
            model: cfg.model.clone(),
            lite_model: cfg.lite_model.clone(),
            api_base_url: API_BASE_URL.trim_end_matches('/').to_string(),
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base_url, model)
    }

    fn call_generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = self.generate_url(model);

        log::info!("Calling Gemini model {:?}", model);
        log::debug!("Prompt:\n{}", truncate(prompt, 2000));

        let req = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let resp = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&req)
            .send()
            .context("failed to send request to Gemini")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            // The API reports failures as {"error": {"message": ...}}.
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(anyhow!(
                "Gemini API error: HTTP {} - {}",
                status.as_u16(),
                detail
            ));
        }

        let gen_resp: GenerateResponse = resp.json().context("failed to parse Gemini response")?;

        if let Some(usage) = &gen_resp.usage_metadata {
            log::info!(
                "Token usage: prompt={}, candidates={}, total={}",
                usage.prompt_token_count.unwrap_or(0),
                usage.candidates_token_count.unwrap_or(0),
                usage.total_token_count.unwrap_or(0)
            );
        }

        let content = gen_resp
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| anyhow!("no candidates returned from Gemini"))?;

        Ok(content)
    }
}

impl TextGenerator for GeminiClient {
    fn generate_text(&self, tier: ModelTier, prompt: &str) -> Result<String> {
        let model = match tier {
            ModelTier::Primary => &self.model,
            ModelTier::Lite => &self.lite_model,
        };
        self.call_generate(model, prompt)
    }
}
