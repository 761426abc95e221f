// src/assistant/openai.rs

use crate::assistant::{ChatBackend, ChatMessage};
use crate::config::Config;
use crate::error::Result;
use anyhow::{anyhow, Context};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

// --- Request Structures ---

#[derive(Serialize, Debug)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

// --- Response Structures ---

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>, // null for tool calls / refusals
}

#[derive(Deserialize, Debug)]
struct ApiError {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

/// Chat-completion client for OpenAI and servers speaking the same API.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.openai_api_base_url.clone(),
            model: config.openai_model.clone(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut auth_value =
        HeaderValue::from_str(&format!("Bearer {}", api_key)).context("Invalid API key format")?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    Ok(headers)
}

fn parse_completion(status: reqwest::StatusCode, body: &[u8]) -> Result<String> {
    let parsed: ChatCompletionResponse = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(parse_error) => {
            let body_string = String::from_utf8_lossy(body);
            error!(
                status = ?status,
                error = ?parse_error,
                response_body = ?body_string,
                "Failed to parse chat completion response"
            );
            let base_msg = if status.is_success() {
                "Failed to parse successful chat completion response"
            } else {
                "API chat completion request failed"
            };
            return Err(anyhow!("{} (Status: {}): {}. Body: {}", base_msg, status, parse_error, body_string));
        }
    };

    if let Some(api_error) = parsed.error {
        error!(?api_error, "API returned an error in the response body");
        return Err(anyhow!(
            "API Error: {} (Type: {:?}, Code: {:?})",
            api_error.message,
            api_error.error_type,
            api_error.code
        ));
    }
    if !status.is_success() {
        return Err(anyhow!("API chat completion request failed (Status: {})", status));
    }

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Response contained no choices"))?;
    debug!(finish_reason = ?choice.finish_reason, "Received chat completion");
    choice
        .message
        .content
        .ok_or_else(|| anyhow!("Failed to extract text content from response choices"))
}

impl ChatBackend for OpenAiBackend {
    #[instrument(skip(self, api_key, messages), fields(model = %self.model))]
    async fn complete(&self, api_key: &str, messages: &[ChatMessage]) -> Result<String> {
        let url = self.completions_url();
        let headers = build_headers(api_key)?;
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        debug!(%url, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("Failed to read chat completion response body")?;
        parse_completion(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abb::Library;
    use crate::assistant::Assistant;
    use crate::cli::dispatch::{Dispatcher, Registry};
    use crate::error::AssistantError;
    use reqwest::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn local_client() -> Client {
        Client::builder().no_proxy().build().expect("client")
    }

    fn config_for(addr: std::net::SocketAddr) -> Config {
        Config {
            openai_api_base_url: format!("http://{addr}/v1"),
            ..Config::default()
        }
    }

    /// Accepts one connection, answers it with `body` and returns the raw request.
    async fn serve_once(listener: TcpListener, body: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&request[..head_end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= head_end + 4 + length {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8(request).unwrap()
    }

    #[tokio::test]
    async fn complete_posts_question_with_bearer_key() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(
            listener,
            r#"{"choices":[{"message":{"content":"Use MoveL for straight lines"}}]}"#,
        ));

        let backend = OpenAiBackend::new(local_client(), &config_for(addr));
        let messages = [ChatMessage::system("persona"), ChatMessage::user("How do I move straight?")];
        let answer = backend.complete("sk-test", &messages).await.unwrap();
        assert_eq!(answer, "Use MoveL for straight lines");

        let request = server.await.unwrap();
        let (head, body) = request.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with("POST /v1/chat/completions HTTP/1.1"), "{head}");
        assert!(head.to_lowercase().contains("authorization: bearer sk-test"), "{head}");

        let payload: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(payload["model"], "gpt-4");
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][1]["role"], "user");
        assert_eq!(payload["messages"][1]["content"], "How do I move straight?");
    }

    #[tokio::test]
    async fn refused_connection_is_reported_as_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let assistant = Assistant::new(OpenAiBackend::new(local_client(), &config_for(addr)), Some("sk-test".into()));
        let err = assistant.ask("what is MoveJ").await.unwrap_err();
        assert!(matches!(err, AssistantError::Request(_)));
        let msg = err.to_string();
        assert!(msg.starts_with("AI request failed: Failed to send request to http://"), "{msg}");

        let registry = Registry::new();
        let library = Library::new();
        let output = Dispatcher::new(&registry, &library, &assistant)
            .dispatch("ai help what is MoveJ")
            .await
            .unwrap();
        assert!(output.starts_with("Error getting AI help: AI request failed"), "{output}");
    }

    #[test]
    fn request_serializes_system_then_user() {
        let messages = [ChatMessage::system("persona"), ChatMessage::user("question")];
        let payload = ChatCompletionRequest {
            model: "gpt-4",
            messages: &messages,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-4",
                "messages": [
                    {"role": "system", "content": "persona"},
                    {"role": "user", "content": "question"}
                ]
            })
        );
    }

    #[test]
    fn first_choice_is_returned() {
        let body = br#"{"choices":[
            {"index":0,"message":{"role":"assistant","content":"Use MoveL for straight lines"},"finish_reason":"stop"},
            {"index":1,"message":{"role":"assistant","content":"second"},"finish_reason":"stop"}
        ]}"#;
        let text = parse_completion(StatusCode::OK, body).unwrap();
        assert_eq!(text, "Use MoveL for straight lines");
    }

    #[test]
    fn error_body_is_reported() {
        let body = br#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let err = parse_completion(StatusCode::UNAUTHORIZED, body).unwrap_err();
        assert!(err.to_string().contains("Incorrect API key provided"));
    }

    #[test]
    fn non_json_body_is_an_error() {
        let err = parse_completion(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("bad gateway"));
    }

    #[test]
    fn empty_choices_is_an_error() {
        assert!(parse_completion(StatusCode::OK, br#"{"choices":[]}"#).is_err());
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let config = Config {
            openai_api_base_url: "http://localhost:1234/v1/".to_string(),
            ..Config::default()
        };
        let backend = OpenAiBackend::new(Client::new(), &config);
        assert_eq!(backend.completions_url(), "http://localhost:1234/v1/chat/completions");
    }
}
