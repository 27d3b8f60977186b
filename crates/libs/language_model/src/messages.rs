use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: MessageContent,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<MessagePart>),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum MessagePart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    pub max_tokens: u32,
}

#[derive(Deserialize)]
pub struct ChatFullResponse {
    pub choices: Vec<FullChoice>,
}

#[derive(Deserialize)]
pub struct FullChoice {
    pub message: FullMessage,
}

#[derive(Deserialize)]
pub struct FullMessage {
    pub content: Option<String>,
}

/// Encodes raw image bytes as a `data:` URL, sniffing the mime type.
#[must_use]
pub fn encode_data_url(bytes: &[u8]) -> String {
    let mime_type = infer::get(bytes).map_or("image/jpeg", |kind| kind.mime_type());
    let b64 = general_purpose::STANDARD.encode(bytes);
    format!("data:{mime_type};base64,{b64}")
}

/// Builds a single user message holding the prompt and one part per image.
#[must_use]
pub fn user_message(prompt: &str, images: &[&[u8]]) -> Message {
    let mut parts = vec![MessagePart::Text {
        text: prompt.to_string(),
    }];
    for bytes in images {
        parts.push(MessagePart::ImageUrl {
            image_url: ImageUrl {
                url: encode_data_url(bytes),
            },
        });
    }
    Message {
        role: "user".to_string(),
        content: MessageContent::Parts(parts),
    }
}
