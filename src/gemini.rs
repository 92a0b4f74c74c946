use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::ImageSettings;
use crate::error::ClientError;
use crate::models::GeneratedImage;
use crate::retry::{with_retry, RetryPolicy};

pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
pub const DEFAULT_RESOLUTION: &str = "2K";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    pub aspect_ratio: String,
    pub resolution: String,
    /// Only used to label demo placeholders.
    pub title: Option<String>,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            resolution: DEFAULT_RESOLUTION.to_string(),
            title: None,
        }
    }
}

#[async_trait]
pub trait ImageClient: Send + Sync {
    async fn generate(&self, prompt: &str, opts: &ImageOptions) -> Result<Vec<GeneratedImage>, ClientError>;
}

// Helper function to truncate base64 data in JSON for cleaner logging
fn truncate_base64_in_json(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                match val {
                    serde_json::Value::String(s) if key == "data" && s.len() > 100 && s.is_ascii() => {
                        *val = serde_json::Value::String(format!("{}...[truncated {} chars]", &s[..50], s.len() - 50));
                    }
                    _ => truncate_base64_in_json(val),
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for val in arr.iter_mut() {
                truncate_base64_in_json(val);
            }
        }
        _ => {}
    }
}

fn aspect_description(ratio: &str) -> String {
    match ratio {
        "16:9" => "16:9 landscape widescreen".to_string(),
        "9:16" => "9:16 portrait vertical".to_string(),
        "1:1" => "1:1 square".to_string(),
        "4:3" => "4:3 standard".to_string(),
        "3:4" => "3:4 portrait".to_string(),
        "3:2" => "3:2 photo landscape".to_string(),
        "2:3" => "2:3 photo portrait".to_string(),
        "21:9" => "21:9 ultrawide cinematic".to_string(),
        other => format!("{other} aspect ratio"),
    }
}

/// Prefixes the slide prompt with output format requirements for the image model.
pub fn enhance_prompt(prompt: &str, opts: &ImageOptions) -> String {
    format!(
        "Generate an image with the following specifications:\n- Aspect Ratio: {}\n- Resolution: {}\n- Text Rendering: Use clean, readable fonts. Render all text correctly.\n\n{prompt}",
        aspect_description(&opts.aspect_ratio),
        opts.resolution
    )
}

pub struct GeminiClient {
    client: Client,
    settings: ImageSettings,
    retry: RetryPolicy,
}

impl GeminiClient {
    pub fn new(settings: ImageSettings, retry: RetryPolicy) -> Self {
        Self { client: Client::new(), settings, retry }
    }

    async fn perform_api_call(&self, prompt: &str) -> Result<Vec<GeneratedImage>, ClientError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.settings.base_url, self.settings.model, self.settings.api_key
        );

        debug!("🔗 Making request to: {}", url.replace(&self.settings.api_key, "***"));

        let request_body = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"]
            },
            "safetySettings": [
                {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_ONLY_HIGH"},
                {"category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_ONLY_HIGH"},
                {"category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_ONLY_HIGH"},
                {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_ONLY_HIGH"}
            ]
        });

        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!("❌ API Error response: {}", error_body);
            return Err(ClientError::from_status(status, &error_body));
        }

        let response_text = response.text().await?;

        if let Ok(mut json_value) = serde_json::from_str::<serde_json::Value>(&response_text) {
            truncate_base64_in_json(&mut json_value);
            debug!("📥 Raw Gemini API response: {}", json_value);
        }

        let parsed: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| ClientError::Malformed(format!("parse error: {e}")))?;

        let images = extract_images(&parsed);
        if images.is_empty() {
            return Err(ClientError::Malformed("No images generated".into()));
        }
        Ok(images)
    }

    fn generate_placeholder_image(&self, opts: &ImageOptions) -> GeneratedImage {
        let (width, height) = match opts.aspect_ratio.as_str() {
            "9:16" => (450, 800),
            "1:1" => (600, 600),
            "4:3" => (800, 600),
            "3:4" => (600, 800),
            _ => (800, 450),
        };
        let colors = ["#3B82F6", "#8B5CF6", "#10B981", "#F59E0B", "#EF4444"];
        let title = escape_xml(opts.title.as_deref().unwrap_or("Slide Preview"));
        let color = colors[title.len() % colors.len()];
        let (cx, cy) = (width / 2, height / 2);

        let svg = format!(r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
            <defs>
                <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" style="stop-color:{color};stop-opacity:1" />
                    <stop offset="100%" style="stop-color:{color};stop-opacity:0.6" />
                </linearGradient>
            </defs>
            <rect width="{width}" height="{height}" fill="url(#grad)" />
            <text x="{cx}" y="{cy}" font-family="Arial, sans-serif" font-size="28" font-weight="bold"
                  text-anchor="middle" fill="white">{title}</text>
            <text x="{cx}" y="{sub}" font-family="Arial, sans-serif" font-size="14"
                  text-anchor="middle" fill="white" opacity="0.8">Demo mode placeholder ({ratio})</text>
        </svg>"#, sub = cy + 40, ratio = escape_xml(&opts.aspect_ratio));

        GeneratedImage {
            data: base64::engine::general_purpose::STANDARD.encode(svg.as_bytes()),
            mime_type: "image/svg+xml".to_string(),
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

#[async_trait]
impl ImageClient for GeminiClient {
    async fn generate(&self, prompt: &str, opts: &ImageOptions) -> Result<Vec<GeneratedImage>, ClientError> {
        if self.settings.is_demo() {
            info!("Using demo mode - no real images generated");
            return Ok(vec![self.generate_placeholder_image(opts)]);
        }

        let enhanced = enhance_prompt(prompt, opts);
        info!(model = %self.settings.model, aspect_ratio = %opts.aspect_ratio, "🎨 Generating image with Gemini API...");
        let images = with_retry(&self.retry, "gemini_generate", || self.perform_api_call(&enhanced)).await?;
        info!("✅ Received {} image(s)", images.len());
        Ok(images)
    }
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate { #[serde(default)] content: Content }

#[derive(Debug, Deserialize, Default)]
struct Content { #[serde(default)] parts: Vec<Part> }

#[derive(Debug, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum Part {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData
    },
    Text { text: String },
    Other(serde_json::Value)
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
}

fn extract_images(resp: &GeminiResponse) -> Vec<GeneratedImage> {
    resp.candidates
        .iter()
        .flat_map(|c| c.content.parts.iter())
        .filter_map(|p| match p {
            Part::Inline { inline_data } if !inline_data.data.is_empty() => Some(GeneratedImage {
                data: inline_data.data.clone(),
                mime_type: inline_data.mime_type.clone(),
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo_client() -> GeminiClient {
        GeminiClient::new(
            ImageSettings { api_key: "DEMO_KEY".into(), base_url: "http://unused".into(), model: "m".into() },
            RetryPolicy::default(),
        )
    }

    #[test]
    fn prompt_header_describes_ratio_and_resolution() {
        let opts = ImageOptions { aspect_ratio: "21:9".into(), resolution: "4K".into(), title: None };
        let p = enhance_prompt("A slide", &opts);
        assert!(p.starts_with("Generate an image with the following specifications:"));
        assert!(p.contains("- Aspect Ratio: 21:9 ultrawide cinematic"));
        assert!(p.contains("- Resolution: 4K"));
        assert!(p.ends_with("\n\nA slide"));
        assert!(enhance_prompt("x", &ImageOptions { aspect_ratio: "5:4".into(), ..Default::default() }).contains("5:4 aspect ratio"));
    }

    #[test]
    fn inline_parts_are_extracted() {
        let raw = r#"{"candidates":[{"content":{"parts":[
            {"text":"here you go"},
            {"inlineData":{"mimeType":"image/png","data":"iVBORw0KGgo="}},
            {"inlineData":{"mimeType":"image/jpeg","data":"/9j/"}}
        ]}}]}"#;
        let parsed: GeminiResponse = serde_json::from_str(raw).unwrap();
        let images = extract_images(&parsed);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].mime_type, "image/png");
        assert_eq!(images[1].data, "/9j/");
    }

    #[test]
    fn base64_is_truncated_for_logs() {
        let mut v = json!({"parts": [{"inlineData": {"data": "A".repeat(500)}}]});
        truncate_base64_in_json(&mut v);
        let data = v["parts"][0]["inlineData"]["data"].as_str().unwrap();
        assert!(data.ends_with("[truncated 450 chars]"));
    }

    #[tokio::test]
    async fn demo_mode_returns_labelled_svg() {
        let opts = ImageOptions { title: Some("Growth & <Scale>".into()), ..Default::default() };
        let images = demo_client().generate("ignored", &opts).await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].mime_type, "image/svg+xml");
        let svg = base64::engine::general_purpose::STANDARD.decode(&images[0].data).unwrap();
        let svg = String::from_utf8(svg).unwrap();
        assert!(svg.contains("Growth &amp; &lt;Scale&gt;"));
        assert!(svg.contains("width=\"800\" height=\"450\""));
    }
}
