use mockito::{Matcher, Server};
use phish_lens::client::ServiceClient;
use phish_lens::error::AppError;
use phish_lens::model::AnalysisRequest;
use phish_lens::session::AnalysisSession;
use reqwest::Url;
use serde_json::json;

fn client_for(server: &Server) -> ServiceClient {
    ServiceClient::new(Url::parse(&server.url()).unwrap())
}

fn request(text: &str) -> AnalysisRequest {
    AnalysisRequest {
        email_content: text.to_string(),
    }
}

#[tokio::test]
async fn analyze_posts_email_content_and_parses_verdict() {
    let mut server = Server::new_async().await;
    let text = "Dear user, verify your account at http://paypa1-secure.com/login";

    let mock = server
        .mock("POST", "/analyze")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "email_content": text })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "is_phishing": true,
                "url_analysis": [{
                    "url": "http://paypa1-secure.com/login",
                    "domain": "paypa1-secure",
                    "tld": "com",
                    "is_https": false,
                    "suspicious_patterns": ["lookalike domain"]
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = client_for(&server).analyze(&request(text)).await.unwrap();
    mock.assert_async().await;

    assert!(result.is_phishing);
    assert_eq!(result.urls().len(), 1);
    assert_eq!(result.urls()[0].patterns(), ["lookalike domain"]);
}

#[tokio::test]
async fn server_error_message_is_surfaced() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": "model unavailable" }).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .analyze(&request("hello"))
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::Service(msg) if msg == "model unavailable"));
}

#[tokio::test]
async fn non_json_failure_uses_fallback_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .analyze(&request("hello"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Failed to analyze email");
}

#[tokio::test]
async fn error_field_on_success_status_is_a_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(json!({ "error": "No email content provided" }).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .analyze(&request("hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Service(_)));
    assert_eq!(err.user_message(), "No email content provided");
}

#[tokio::test]
async fn unparseable_success_body_is_a_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server)
        .analyze(&request("hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let client = ServiceClient::new(Url::parse("http://127.0.0.1:1").unwrap());
    let err = client.analyze(&request("hello")).await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn report_sends_cached_pair_unmodified() {
    let mut server = Server::new_async().await;
    let verdict = json!({
        "is_phishing": true,
        "risk_score": 85,
        "features": {"pattern_matches": 2},
        "url_analysis": [{"url": "http://[bad", "error": "Invalid IPv6 URL"}],
        "advanced_findings": ["Reply-To mismatch"]
    });

    let mut session = AnalysisSession::default();
    session.store(
        request("suspicious mail"),
        serde_json::from_value(verdict.clone()).unwrap(),
    );

    let mock = server
        .mock("POST", "/report")
        .match_body(Matcher::Json(json!({
            "email_content": "suspicious mail",
            "result": verdict
        })))
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.3 fake")
        .create_async()
        .await;

    let bytes = client_for(&server)
        .report(session.last().unwrap())
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(bytes, b"%PDF-1.3 fake");
}

#[tokio::test]
async fn result_without_verdict_goes_back_without_one() {
    let mut server = Server::new_async().await;
    let verdict = json!({"url_analysis": [{"url": "http://a.com", "domain": null}]});

    let mut session = AnalysisSession::default();
    session.store(
        request("mail"),
        serde_json::from_value(verdict.clone()).unwrap(),
    );

    let mock = server
        .mock("POST", "/report")
        .match_body(Matcher::Json(json!({
            "email_content": "mail",
            "result": verdict
        })))
        .with_status(200)
        .with_body(b"%PDF")
        .create_async()
        .await;

    client_for(&server)
        .report(session.last().unwrap())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn report_failure_mentions_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/report")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let mut session = AnalysisSession::default();
    session.store(
        request("mail"),
        serde_json::from_value(json!({"is_phishing": false})).unwrap(),
    );

    let err = client_for(&server)
        .report(session.last().unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Failed to generate PDF (HTTP 500)");
}
