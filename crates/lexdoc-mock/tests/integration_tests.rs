//! Integration tests for the mock backend over real HTTP

use lexdoc_client::response::{GenerateRequest, GenerateResponse, HealthResponse, ProcessResponse};
use lexdoc_domain::FormValues;
use lexdoc_generator::DISCLAIMER;
use lexdoc_mock::handlers::{fixed_analysis, TEMPLATE_GENERATION_METHOD};
use lexdoc_mock::{serve, MockConfig};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

async fn spawn(config: MockConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, config));
    format!("http://{}", addr)
}

fn image_form() -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(vec![0xFF, 0xD8, 0xFF])
        .file_name("document.jpeg")
        .mime_str("image/jpeg")
        .unwrap();
    reqwest::multipart::Form::new().part("file", part)
}

#[tokio::test]
async fn test_health_over_http() {
    let base = spawn(MockConfig::default_test_config()).await;

    let health: HealthResponse = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health.status, "healthy");
    assert!(!health.llm_available);
}

#[tokio::test]
async fn test_process_document_honors_delay() {
    let base = spawn(MockConfig::default_test_config().with_delay_ms(300)).await;

    let started = Instant::now();
    let response = reqwest::Client::new()
        .post(format!("{}/process_document", base))
        .query(&[("ai_model", "gemini")])
        .multipart(image_form())
        .send()
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(300));
    assert!(response.status().is_success());

    let body: ProcessResponse = response.json().await.unwrap();
    assert_eq!(body.into_result("gemini"), fixed_analysis());
}

#[tokio::test]
async fn test_generate_document_renders_template() {
    let base = spawn(MockConfig::default_test_config()).await;

    let request = GenerateRequest {
        document_type: "rental".to_string(),
        form_data: FormValues::new()
            .with("party1Name", "Alice")
            .with("party2Name", "Bob"),
    };
    let body: GenerateResponse = reqwest::Client::new()
        .post(format!("{}/generate_document", base))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.document_type, "rental");
    assert!(body.generated_document.contains("Alice"));
    assert!(body.generated_document.contains("Bob"));

    let metadata = body.metadata.unwrap();
    assert_eq!(metadata.generation_method.as_deref(), Some(TEMPLATE_GENERATION_METHOD));
    assert_eq!(metadata.disclaimer.as_deref(), Some(DISCLAIMER));
}

#[tokio::test]
async fn test_generate_document_unknown_type_uses_service_template() {
    let base = spawn(MockConfig::default_test_config()).await;

    let request = GenerateRequest {
        document_type: "lease-to-own".to_string(),
        form_data: FormValues::new(),
    };
    let body: GenerateResponse = reqwest::Client::new()
        .post(format!("{}/generate_document", base))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.document_type, "service");
}
