//! OpenAI-compatible client for chat completions and image generation

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{
    ImageGenerationError, ImageGenerationPort, ImageRequest, LlmError, LlmPort,
    LlmRequest, LlmResponse,
};

/// Client for the OpenAI API (or anything speaking its wire format)
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    chat_model: String,
    image_model: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str, chat_model: &str, image_model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            chat_model: chat_model.to_string(),
            image_model: image_model.to_string(),
        }
    }

    /// Send `prompt` as a single user message and return the first choice's text
    pub async fn chat_completion(
        &self,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<ChatCompletion, OpenAiError> {
        let request = ChatCompletionRequest {
            model: &self.chat_model,
            messages: vec![WireMessage::user(prompt)],
            temperature,
        };

        let response: ChatCompletionResponse =
            self.post_json("chat/completions", &request).await?;
        extract_completion(response)
    }

    /// Generate images and return their URLs
    pub async fn create_images(
        &self,
        prompt: &str,
        count: u8,
        size: &str,
    ) -> Result<Vec<String>, OpenAiError> {
        let request = ImageGenerationRequest {
            model: &self.image_model,
            prompt,
            n: count,
            size,
        };

        let response: ImageGenerationResponse =
            self.post_json("images/generations", &request).await?;
        extract_image_urls(response)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, OpenAiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(OpenAiError::ApiError {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| OpenAiError::MalformedResponse(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    ApiError { status: u16, body: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<OpenAiError> for LlmError {
    fn from(error: OpenAiError) -> Self {
        match error {
            OpenAiError::HttpError(e) => LlmError::Request(e.to_string()),
            OpenAiError::ApiError { status, body } => LlmError::Api { status, body },
            OpenAiError::MalformedResponse(msg) => LlmError::MalformedResponse(msg),
        }
    }
}

impl From<OpenAiError> for ImageGenerationError {
    fn from(error: OpenAiError) -> Self {
        match error {
            OpenAiError::HttpError(e) => ImageGenerationError::Request(e.to_string()),
            OpenAiError::ApiError { status, body } => ImageGenerationError::Api { status, body },
            OpenAiError::MalformedResponse(msg) => ImageGenerationError::MalformedResponse(msg),
        }
    }
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> WireMessage<'a> {
    fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Text of a completed chat request
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    pub content: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

fn extract_completion(response: ChatCompletionResponse) -> Result<ChatCompletion, OpenAiError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| OpenAiError::MalformedResponse("completion has no content".to_string()))?;

    Ok(ChatCompletion {
        content,
        model: response.model,
    })
}

fn extract_image_urls(response: ImageGenerationResponse) -> Result<Vec<String>, OpenAiError> {
    response
        .data
        .into_iter()
        .enumerate()
        .map(|(index, image)| {
            image.url.ok_or_else(|| {
                OpenAiError::MalformedResponse(format!("image {} has no url", index))
            })
        })
        .collect()
}

// =============================================================================
// Port Implementations
// =============================================================================

#[async_trait]
impl LlmPort for OpenAiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let completion = self
            .chat_completion(&request.prompt, request.temperature)
            .await?;
        Ok(LlmResponse {
            content: completion.content,
            model: completion.model,
        })
    }
}

#[async_trait]
impl ImageGenerationPort for OpenAiClient {
    async fn generate_images(
        &self,
        request: ImageRequest,
    ) -> Result<Vec<String>, ImageGenerationError> {
        let urls = self
            .create_images(&request.prompt, request.count, &request.size)
            .await?;
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: DeserializeOwned>(json: &str) -> Result<T, OpenAiError> {
        serde_json::from_str(json).map_err(|e| OpenAiError::MalformedResponse(e.to_string()))
    }

    #[test]
    fn test_chat_request_wire_format() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: vec![WireMessage::user("Classify this")],
            temperature: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Classify this"}]
            })
        );

        let request = ChatCompletionRequest {
            temperature: Some(0.0),
            ..request
        };
        assert_eq!(serde_json::to_value(&request).unwrap()["temperature"], 0.0);
    }

    #[test]
    fn test_image_request_wire_format() {
        let request = ImageGenerationRequest {
            model: "dall-e-2",
            prompt: "A rooftop",
            n: 4,
            size: "1024x1024",
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["n"], 4);
        assert_eq!(json["size"], "1024x1024");
        assert_eq!(json["model"], "dall-e-2");
    }

    #[test]
    fn test_extract_completion_takes_first_choice() {
        let response: ChatCompletionResponse = parse(
            r#"{"model": "gpt-3.5-turbo-0125", "choices": [
                {"message": {"role": "assistant", "content": " Story "}},
                {"message": {"role": "assistant", "content": "unclear"}}
            ]}"#,
        )
        .unwrap();

        let completion = extract_completion(response).unwrap();
        assert_eq!(completion.content, " Story ");
        assert_eq!(completion.model, "gpt-3.5-turbo-0125");
    }

    #[test]
    fn test_extract_completion_without_choices_fails() {
        let response: ChatCompletionResponse = parse(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            extract_completion(response),
            Err(OpenAiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_extract_image_urls_keeps_order() {
        let response: ImageGenerationResponse = parse(
            r#"{"created": 1, "data": [
                {"url": "https://img/1.png"}, {"url": "https://img/2.png"},
                {"url": "https://img/3.png"}, {"url": "https://img/4.png"}
            ]}"#,
        )
        .unwrap();

        let urls = extract_image_urls(response).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://img/1.png",
                "https://img/2.png",
                "https://img/3.png",
                "https://img/4.png"
            ]
        );
    }

    #[test]
    fn test_image_response_without_url_list_is_malformed() {
        assert!(parse::<ImageGenerationResponse>(r#"{"created": 1}"#).is_err());
        assert!(parse::<ImageGenerationResponse>(r#"{"data": "nope"}"#).is_err());

        let response: ImageGenerationResponse =
            parse(r#"{"data": [{"url": "https://img/1.png"}, {"b64_json": "abc"}]}"#).unwrap();
        assert!(matches!(
            extract_image_urls(response),
            Err(OpenAiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_errors_map_onto_port_errors() {
        let llm: LlmError = OpenAiError::ApiError {
            status: 401,
            body: "bad key".to_string(),
        }
        .into();
        assert!(matches!(llm, LlmError::Api { status: 401, .. }));

        let image: ImageGenerationError =
            OpenAiError::MalformedResponse("no data".to_string()).into();
        assert!(matches!(image, ImageGenerationError::MalformedResponse(_)));
    }
}
