//! Test helper module for prompt-service integration tests.
//!
//! Spawns the real HTTP server on a random port with a wiremock server
//! standing in for the Groq API.

#![allow(dead_code)]

use prompt_service::config::{GroqConfig, PromptConfig, ServerConfig, TelemetryConfig};
use prompt_service::startup::Application;
use secrecy::Secret;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const GROQ_PATH: &str = "/openai/v1/chat/completions";
pub const TEST_API_KEY: &str = "gsk_test_key";

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub groq: MockServer,
    pub client: reqwest::Client,
}

pub fn test_config(groq_url: String) -> PromptConfig {
    PromptConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        groq: GroqConfig {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            api_url: groq_url,
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout_secs: Some(5),
        },
        telemetry: TelemetryConfig {
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        },
        service_name: "prompt-service".to_string(),
    }
}

/// A Groq success payload whose first choice carries `content`.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 80, "completion_tokens": 20, "total_tokens": 100 }
    })
}

impl TestApp {
    /// Spawn a new test application on a random port.
    pub async fn spawn() -> Self {
        let groq = MockServer::start().await;
        let config = test_config(format!("{}{}", groq.uri(), GROQ_PATH));

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            groq,
            client,
        }
    }

    /// POST a raw JSON body to the chat endpoint.
    pub async fn post_chat(&self, body: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/api/chat", self.address))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Bodies the fake Groq API received, parsed as JSON.
    pub async fn groq_requests(&self) -> Vec<Value> {
        self.groq
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| serde_json::from_slice(&req.body).expect("Groq request body is JSON"))
            .collect()
    }
}
