//! End-to-end tests for the Orchestrator and DocumentClient against the mock backend

use lexdoc_client::{
    AnalysisSession, ClientConfig, ClientError, DocumentClient, GenerationMethod, ImageSource,
    Orchestrator, DEMO_PROCESSING_METHOD,
};
use lexdoc_domain::traits::FixedIndex;
use lexdoc_domain::{DocumentType, FormValues};
use lexdoc_mock::handlers::{fixed_analysis, MOCK_PROCESSING_METHOD, TEMPLATE_GENERATION_METHOD};
use lexdoc_mock::{serve, MockConfig, ResponseMode};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

/// Start the mock on an ephemeral port and return its base URL
async fn spawn_mock(config: MockConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, config));
    format!("http://{}", addr)
}

fn png() -> ImageSource {
    ImageSource::Bytes {
        name: "Lease.PNG".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

fn orchestrator(base_url: &str) -> Orchestrator {
    let config = ClientConfig::new(base_url).with_probe_timeout_ms(1_000);
    Orchestrator::new(config)
        .unwrap()
        .with_random_source(FixedIndex(1))
}

#[tokio::test]
async fn test_remote_analysis_success() {
    let base = spawn_mock(MockConfig::default_test_config()).await;

    let outcome = orchestrator(&base).analyze(png(), "gemini").await.unwrap();
    assert!(outcome.fallback.is_none());
    assert!(!outcome.is_demo());
    assert_eq!(outcome.result.summary, fixed_analysis().summary);
    assert_eq!(outcome.result.processing_method, MOCK_PROCESSING_METHOD);
    assert_eq!(outcome.result.key_points.len(), 7);
}

#[tokio::test]
async fn test_unresponsive_backend_falls_back_within_probe_timeout() {
    // Accepts connections at the TCP level but never answers
    let silent = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", silent.local_addr().unwrap());

    let started = Instant::now();
    let outcome = orchestrator(&base).analyze(png(), "gemini").await.unwrap();
    let elapsed = started.elapsed();

    assert!(matches!(outcome.fallback, Some(ClientError::Unreachable(_))));
    assert_eq!(outcome.result.processing_method, DEMO_PROCESSING_METHOD);
    assert!(outcome.result.summary.starts_with("RENTAL"));
    assert!(elapsed >= Duration::from_millis(1_000));
    assert!(elapsed < Duration::from_secs(5));
    drop(silent);
}

#[tokio::test]
async fn test_refused_connection_falls_back() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let outcome = orchestrator(&format!("http://{}", addr))
        .analyze(png(), "gemini")
        .await
        .unwrap();
    assert!(matches!(outcome.fallback, Some(ClientError::Unreachable(_))));
    assert!(outcome.result.is_populated());
}

#[tokio::test]
async fn test_non_success_probe_is_unreachable() {
    // Health lives at /health, not /api/health, so the probe gets a 404
    let base = spawn_mock(MockConfig::default_test_config()).await;

    let outcome = orchestrator(&format!("{}/api", base))
        .analyze(png(), "gemini")
        .await
        .unwrap();
    match outcome.fallback {
        Some(ClientError::Unreachable(msg)) => assert!(msg.contains("404")),
        other => panic!("expected Unreachable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_analysis_is_replaced() {
    let base = spawn_mock(MockConfig::default_test_config().with_mode(ResponseMode::Failing)).await;

    let outcome = orchestrator(&base).analyze(png(), "gemini").await.unwrap();
    assert!(matches!(outcome.fallback, Some(ClientError::ContentFailure(_))));
    assert!(outcome.is_demo());
    assert!(!outcome.result.summary.to_lowercase().contains("failed"));
}

#[tokio::test]
async fn test_slow_analysis_times_out_as_transfer() {
    let base = spawn_mock(MockConfig::default_test_config().with_delay_ms(2_500)).await;
    let config = ClientConfig {
        dispatch_timeout_secs: 2,
        ..ClientConfig::new(&base).with_probe_timeout_ms(1_000)
    };
    let orchestrator = Orchestrator::new(config).unwrap();

    let started = Instant::now();
    let outcome = orchestrator.analyze(png(), "gemini").await.unwrap();
    assert!(matches!(outcome.fallback, Some(ClientError::Transfer(_))));
    assert!(started.elapsed() < Duration::from_millis(2_500));
}

#[tokio::test]
async fn test_invalid_extension_never_reaches_backend() {
    let base = spawn_mock(MockConfig::default_test_config()).await;

    let result = orchestrator(&base)
        .analyze(
            ImageSource::Bytes {
                name: "contract.pdf".to_string(),
                bytes: vec![1, 2, 3],
            },
            "gemini",
        )
        .await;
    assert!(matches!(result, Err(ClientError::Validation(_))));
}

#[tokio::test]
async fn test_session_tracks_reachability() {
    let base = spawn_mock(MockConfig::default_test_config()).await;
    let mut session = AnalysisSession::new(orchestrator(&base));

    assert!(session.check_backend().await);
    session.analyze(png(), "gemini").await.unwrap();
    assert_eq!(session.backend_reachable(), Some(true));
    assert!(!session.is_demo_mode());
}

#[tokio::test]
async fn test_remote_generation() {
    let base = spawn_mock(MockConfig::default_test_config()).await;
    let client = DocumentClient::new(ClientConfig::new(&base)).unwrap();

    let values = FormValues::new()
        .with("landlordName", "Alice")
        .with("tenantName", "Bob")
        .with("monthlyRent", "2000");
    let outcome = client.generate(DocumentType::Rental, &values).await;

    assert!(outcome.fallback.is_none());
    assert_eq!(
        outcome.method,
        GenerationMethod::Remote(TEMPLATE_GENERATION_METHOD.to_string())
    );
    // Aliased form names are canonicalized before the request
    assert!(outcome.document.text().contains("Alice"));
    assert!(outcome.document.text().contains("$2000"));
}

#[tokio::test]
async fn test_generation_falls_back_to_local_template() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = DocumentClient::new(ClientConfig::new(format!("http://{}", addr))).unwrap();

    let values = FormValues::new().with("disclosingParty", "Acme Corp");
    let outcome = client.generate(DocumentType::Nda, &values).await;

    assert_eq!(outcome.method, GenerationMethod::LocalTemplate);
    assert!(matches!(outcome.fallback, Some(ClientError::Unreachable(_))));
    assert_eq!(outcome.document.document_type(), DocumentType::Nda);
    assert!(outcome.document.text().contains("Acme Corp"));
}
