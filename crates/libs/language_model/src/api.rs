use crate::{
    ChatError, ChatFullResponse, ChatRequest, ChatResult, Message, user_message,
};
use bon::bon;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub max_tokens: u32,
}

/// Client for an OpenAI-compatible `/v1/chat/completions` endpoint that
/// accepts image parts (vision-language models).
#[derive(Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    config: ChatConfig,
}

#[bon]
impl VisionClient {
    #[builder(start_fn = with_base_url)]
    pub fn new(
        #[builder(start_fn)] base_url: &str,
        model: Option<String>,
        api_key: Option<String>,
        temperature: Option<f32>,
        top_p: Option<f32>,
        max_tokens: Option<u32>,
        timeout: Option<Duration>,
    ) -> ChatResult<Self> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            http = http.timeout(timeout);
        }
        Ok(Self {
            http: http.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.unwrap_or_default(),
            api_key: api_key.filter(|key| !key.is_empty()),
            config: ChatConfig {
                temperature: temperature.unwrap_or(0.1),
                top_p,
                max_tokens: max_tokens.unwrap_or(1024),
            },
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one user message (prompt plus optional images) and returns the
    /// text of the first choice.
    #[builder]
    pub async fn chat(
        &self,
        #[builder(start_fn)] prompt: &str,
        images: Option<&[&[u8]]>,
    ) -> ChatResult<String> {
        let msg = user_message(prompt, images.unwrap_or_default());
        self.call(vec![msg]).await
    }

    pub async fn call(&self, messages: Vec<Message>) -> ChatResult<String> {
        let req_body = self.build_request(messages);
        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(%url, model = %self.model, "Sending chat completion request");
        let mut request = self.http.post(url).json(&req_body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ChatError::Api {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let full: ChatFullResponse = response.json().await?;
        full.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatError::EmptyResponse)
    }

    fn build_request(&self, messages: Vec<Message>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages,
            stream: false,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: self.config.max_tokens,
        }
    }
}
