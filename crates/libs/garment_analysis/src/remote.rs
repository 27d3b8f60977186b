use crate::RemoteError;
use app_state::ClassifierSettings;
use async_trait::async_trait;
use common_types::{BrightnessAnalysis, Category, GarmentDescriptor, MatchingSuggestion, Rgb, Season};
use language_model::{ChatResult, VisionClient};
use serde::Deserialize;
use tracing::debug;

pub const CLASSIFY_PROMPT: &str = r#"
You are a professional fashion stylist. Analyze the piece of clothing in this photo and answer with
a single JSON object in exactly this shape (no markdown, no commentary, JSON only):
{
  "color": "color name, e.g. navy",
  "colorHex": "hex value of the color, e.g. #000080",
  "category": "exactly one of: top, pants, shoes, accessory",
  "confidence": 0.95,
  "suggestedSeason": "exactly one of: spring, summer, autumn, winter, all",
  "occasions": ["suitable occasion 1", "suitable occasion 2"],
  "matching": {
    "tip": "one sentence styling tip",
    "safe": ["safe color 1", "safe color 2"],
    "complementary": ["complementary color 1", "complementary color 2"],
    "analogous": ["analogous color 1", "analogous color 2"]
  },
  "analysis": {
    "brightness": 128,
    "isLight": false,
    "isDark": false
  }
}
Prefer these color names when they fit: black, dark-gray, gray, light-gray, white, red, orange, pink,
yellow-green, cyan, green, purple, teal, blue, yellow, magenta, navy, light-blue, brown, tan, beige.
Brightness is the mean of the R, G and B channels (0-255).
Make sure the category is right: jackets, t-shirts and shirts are top; trousers and skirts are pants;
shoes and boots are shoes; hats, bags and scarves are accessory.
"#;

/// Primary, higher-accuracy classification path.
#[async_trait]
pub trait RemoteClassifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> Result<GarmentDescriptor, RemoteError>;
}

/// Classifies garments with a vision-language model behind an
/// OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct VisionClassifier {
    client: VisionClient,
}

impl VisionClassifier {
    #[must_use]
    pub const fn new(client: VisionClient) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &ClassifierSettings) -> ChatResult<Self> {
        let client = VisionClient::with_base_url(&settings.base_url)
            .model(settings.model.clone())
            .maybe_api_key(settings.api_key.clone())
            .temperature(settings.temperature)
            .max_tokens(settings.max_tokens)
            .maybe_timeout(settings.timeout)
            .build()?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl RemoteClassifier for VisionClassifier {
    async fn classify(&self, image: &[u8]) -> Result<GarmentDescriptor, RemoteError> {
        let response = self.client.chat(CLASSIFY_PROMPT).images(&[image]).call().await?;
        debug!(model = self.client.model(), "Remote classifier answered");
        parse_remote_response(&response)
    }
}

/// Models like to wrap JSON in markdown fences even when told not to.
/// Keeps only the body of the first fenced block, whatever its language tag.
#[must_use]
pub fn strip_code_fences(content: &str) -> String {
    let trimmed = content.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed.to_string();
    };
    let body = trimmed[start + 3..].trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = body.find("```").map_or(body, |end| &body[..end]);
    body.trim().to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Brightness {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteAnalysis {
    brightness: Brightness,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteDescriptor {
    color: String,
    color_hex: String,
    category: Category,
    confidence: f32,
    suggested_season: Season,
    occasions: Vec<String>,
    matching: MatchingSuggestion,
    analysis: RemoteAnalysis,
}

/// Parse and validate the model's answer. Anything that does not describe a
/// usable garment is an error, so the caller can fall back to local analysis.
pub fn parse_remote_response(content: &str) -> Result<GarmentDescriptor, RemoteError> {
    let cleaned = strip_code_fences(content);
    let remote: RemoteDescriptor = serde_json::from_str(&cleaned)?;

    let color = remote.color.trim().to_string();
    if color.is_empty() {
        return Err(RemoteError::Invalid("empty color".to_string()));
    }
    let color_hex = Rgb::from_hex(&remote.color_hex)
        .map_err(|e| RemoteError::Invalid(e.to_string()))?
        .to_hex();
    if !(0.0..=1.0).contains(&remote.confidence) {
        return Err(RemoteError::Invalid(format!(
            "confidence {} outside 0..=1",
            remote.confidence
        )));
    }
    let occasions: Vec<String> = remote
        .occasions
        .into_iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();
    if occasions.is_empty() {
        return Err(RemoteError::Invalid("no occasions".to_string()));
    }
    let brightness = match remote.analysis.brightness {
        Brightness::Number(value) => value,
        Brightness::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| RemoteError::Invalid(format!("brightness {text:?} is not a number")))?,
    };
    if !(0.0..=255.0).contains(&brightness) {
        return Err(RemoteError::Invalid(format!(
            "brightness {brightness} outside 0..=255"
        )));
    }

    Ok(GarmentDescriptor {
        color,
        color_hex,
        category: remote.category,
        confidence: remote.confidence,
        suggested_season: remote.suggested_season,
        occasions,
        matching: remote.matching,
        analysis: BrightnessAnalysis::from_brightness(brightness),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANSWER: &str = r##"{
        "color": "navy",
        "colorHex": "#000080",
        "category": "pants",
        "confidence": 0.92,
        "suggestedSeason": "winter",
        "occasions": ["business meeting", "daily commute"],
        "matching": {
            "tip": "Pair with a white shirt.",
            "safe": ["white", "gray"],
            "complementary": ["orange"],
            "analogous": ["blue"]
        },
        "analysis": { "brightness": 43, "isLight": true, "isDark": false }
    }"##;

    #[test]
    fn parses_plain_json() -> Result<(), RemoteError> {
        let descriptor = parse_remote_response(ANSWER)?;
        assert_eq!(descriptor.color, "navy");
        assert_eq!(descriptor.category, Category::Pants);
        assert_eq!(descriptor.suggested_season, Season::Winter);
        assert_eq!(descriptor.matching.complementary, vec!["orange"]);
        // Flags are derived from brightness, not copied from the answer.
        assert!(!descriptor.analysis.is_light);
        assert!(descriptor.analysis.is_dark);
        Ok(())
    }

    #[test]
    fn strips_markdown_fences() -> Result<(), RemoteError> {
        let fenced = format!("```json\n{ANSWER}\n```");
        assert_eq!(parse_remote_response(&fenced)?, parse_remote_response(ANSWER)?);
        Ok(())
    }

    #[test]
    fn fence_tag_is_case_insensitive() -> Result<(), RemoteError> {
        for tag in ["Json", "JSON", "jsonc", ""] {
            let fenced = format!("```{tag}\n{ANSWER}\n```");
            assert_eq!(parse_remote_response(&fenced)?.color, "navy");
        }
        let chatty = format!("Here is the analysis:\n```Json\n{ANSWER}\n```\nHope it helps!");
        assert_eq!(parse_remote_response(&chatty)?.category, Category::Pants);
        assert_eq!(strip_code_fences("```json{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        Ok(())
    }

    #[test]
    fn accepts_brightness_as_string() -> Result<(), RemoteError> {
        let answer = ANSWER.replace("\"brightness\": 43", "\"brightness\": \"200\"");
        let descriptor = parse_remote_response(&answer)?;
        assert!(descriptor.analysis.is_light);
        Ok(())
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            parse_remote_response("Sorry, I cannot help with that."),
            Err(RemoteError::Json(_))
        ));
    }

    #[test]
    fn rejects_missing_field() {
        let answer = ANSWER.replace("\"suggestedSeason\": \"winter\",", "");
        assert!(matches!(
            parse_remote_response(&answer),
            Err(RemoteError::Json(_))
        ));
    }

    #[test]
    fn rejects_unknown_category() {
        let answer = ANSWER.replace("\"pants\"", "\"dress\"");
        assert!(parse_remote_response(&answer).is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let confidence = ANSWER.replace("0.92", "1.5");
        assert!(matches!(
            parse_remote_response(&confidence),
            Err(RemoteError::Invalid(_))
        ));
        let brightness = ANSWER.replace("\"brightness\": 43", "\"brightness\": 300");
        assert!(matches!(
            parse_remote_response(&brightness),
            Err(RemoteError::Invalid(_))
        ));
        let hex = ANSWER.replace("#000080", "navy blue");
        assert!(matches!(
            parse_remote_response(&hex),
            Err(RemoteError::Invalid(_))
        ));
        let occasions = ANSWER.replace("[\"business meeting\", \"daily commute\"]", "[]");
        assert!(matches!(
            parse_remote_response(&occasions),
            Err(RemoteError::Invalid(_))
        ));
    }
}
