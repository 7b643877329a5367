//! Router tests driven through `tower::ServiceExt::oneshot`

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use exo_vault::config::Config;
use exo_vault::leads::{InMemoryBackend, LeadAdapter};
use exo_vault::server::{create_router, AppState};

fn app_with(backend: Arc<InMemoryBackend>) -> Router {
    app_with_config(Config::default(), backend)
}

fn app_with_config(config: Config, backend: Arc<InMemoryBackend>) -> Router {
    let adapter = LeadAdapter::new(backend);
    create_router(Arc::new(AppState::new(config, adapter)))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryBackend::new()))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn test_first_visit_shows_gate() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("id=\"vault-gate\""));
    assert!(html.contains("Access Vault"));
    assert!(html.contains("Vault Access"));
}

#[tokio::test]
async fn test_share_link_unlocks_without_cookie() {
    let response = app().oneshot(get("/?user=Alice")).await.unwrap();
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let html = body_string(response).await;
    assert!(!html.contains("id=\"vault-gate\""));
    assert!(html.contains("Master Key Active"));
    assert!(html.contains("<span>Alice</span>"));
    // Filter links keep the share-link name
    assert!(html.contains("href=\"/?user=Alice&amp;category=sales\""));
}

#[tokio::test]
async fn test_share_link_wins_over_cookie() {
    let request = Request::builder()
        .uri("/?user=Alice")
        .header(header::COOKIE, "exo_vault_user=Bob")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    // Persisted name is left as it was
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let html = body_string(response).await;
    assert!(html.contains("<span>Alice</span>"));
    assert!(!html.contains("<span>Bob</span>"));
}

#[tokio::test]
async fn test_cookie_unlocks_returning_visitor() {
    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "theme=dark; exo_vault_user=Jane")
        .body(Body::empty())
        .unwrap();
    let html = body_string(app().oneshot(request).await.unwrap()).await;
    assert!(!html.contains("id=\"vault-gate\""));
    assert!(html.contains("Welcome back,"));
}

#[tokio::test]
async fn test_unlock_sets_cookie_and_redirects() {
    let backend = Arc::new(InMemoryBackend::new());
    let app = app_with(backend.clone());

    let response = app
        .clone()
        .oneshot(form_post(
            "/unlock",
            "name=Jane+Doe&email=jane%40x.com&company=Acme&q=ai&category=operations",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/?user=Jane&q=ai&category=operations"
    );
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("exo_vault_user=Jane;"));
    assert!(cookie.contains("Path=/"));

    let leads = backend.leads();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].first_name, "Jane");
    assert_eq!(leads[0].last_name, "Doe");
    assert_eq!(leads[0].source, "vault_gate");

    // A fresh load carrying the cookie is unlocked
    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "exo_vault_user=Jane")
        .body(Body::empty())
        .unwrap();
    let html = body_string(app.oneshot(request).await.unwrap()).await;
    assert!(html.contains("<span>Jane</span>"));
}

#[tokio::test]
async fn test_unlock_holds_when_cookie_is_dropped() {
    let mut config = Config::default();
    config.gate.secure_cookie = true;
    let app = app_with_config(config, Arc::new(InMemoryBackend::new()));

    let response = app
        .clone()
        .oneshot(form_post("/unlock", "name=Jane+Doe&email=jane%40x.com&company=Acme"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    // Follow the redirect as a browser that refused the Secure cookie over HTTP
    let html = body_string(app.oneshot(get(&location)).await.unwrap()).await;
    assert!(!html.contains("id=\"vault-gate\""));
    assert!(html.contains("<span>Jane</span>"));
}

#[tokio::test]
async fn test_unlock_failure_keeps_gate_open() {
    let backend = Arc::new(InMemoryBackend::failing());
    let app = app_with(backend.clone());

    let response = app
        .oneshot(form_post("/unlock", "name=Jane+Doe&email=jane%40x.com&company=Acme"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(backend.call_count(), 1);

    let html = body_string(response).await;
    assert!(html.contains("id=\"vault-gate\""));
    assert!(html.contains("Something went wrong. Please try again."));
    assert!(html.contains("value=\"jane@x.com\""));
    assert!(html.contains("<button type=\"submit\" class=\"cta-emerald\">"));
}

#[tokio::test]
async fn test_unlock_blank_field_not_submitted() {
    let backend = Arc::new(InMemoryBackend::new());
    let app = app_with(backend.clone());

    let response = app
        .oneshot(form_post("/unlock", "name=Jane&email=&company=Acme"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(backend.call_count(), 0);
    assert!(body_string(response).await.contains("email is required"));
}

#[tokio::test]
async fn test_visitor_text_is_escaped() {
    let html = body_string(
        app()
            .oneshot(get("/?user=%3Cscript%3Ex%3C%2Fscript%3E&q=%22%3E%3Cb%3E"))
            .await
            .unwrap(),
    )
    .await;
    assert!(!html.contains("<script>x</script>"));
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!html.contains("\"><b>"));
}

#[tokio::test]
async fn test_elite_card_opens_interstitial() {
    let html = body_string(app().oneshot(get("/?user=Jane&resource=ai-department")).await.unwrap()).await;
    assert!(html.contains("id=\"elite-modal\""));
    assert!(html.contains("AI Department Blueprint"));

    // Non-elite ids never open it
    let html = body_string(app().oneshot(get("/?user=Jane&resource=roadmap")).await.unwrap()).await;
    assert!(!html.contains("id=\"elite-modal\""));
}

#[tokio::test]
async fn test_elite_modal_dismiss_plays_exit_then_closes() {
    let html = body_string(app().oneshot(get("/?user=Jane&resource=ai-department")).await.unwrap()).await;
    assert!(html.contains("m.classList.add('closing')"));
    assert!(html.contains("},300);"));
    assert!(html.contains("href=\"/?user=Jane\" aria-label=\"Close\""));

    let html = body_string(app().oneshot(get("/?user=Jane")).await.unwrap()).await;
    assert!(!html.contains("id=\"elite-modal\""));
    assert!(html.contains("<span>Jane</span>"));
}

#[tokio::test]
async fn test_elite_resource_redirect_keeps_view() {
    let response = app()
        .oneshot(get("/resources/ai-department?user=Jane&q=ai&category=operations"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/?user=Jane&q=ai&category=operations&resource=ai-department"
    );
}

#[tokio::test]
async fn test_page_assets_are_served() {
    for path in ["/static/logo-mark.svg", "/static/favicon.svg"] {
        let response = app().oneshot(get(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", path);
    }

    let html = body_string(app().oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("src=\"/static/logo-mark.svg\""));
    assert!(html.contains("href=\"/static/favicon.svg\""));
}

#[tokio::test]
async fn test_resource_activation_routes() {
    let response = app().oneshot(get("/resources/ai-department")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/?resource=ai-department"
    );

    let response = app().oneshot(get("/resources/roadmap")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers().get(header::LOCATION).unwrap().to_str().unwrap();
    assert!(!location.contains("resource="));

    let response = app().oneshot(get("/resources/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_resources_partitions() {
    let response = app().oneshot(get("/api/resources?category=sales")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(value["category"], "sales");
    let total = value["total"].as_u64().unwrap() as usize;
    let sum = ["public", "vault", "elite"]
        .iter()
        .map(|tier| value[tier].as_array().unwrap().len())
        .sum::<usize>();
    assert_eq!(total, sum);
    assert!(total > 0);
    for tier in ["public", "vault", "elite"] {
        for resource in value[tier].as_array().unwrap() {
            assert_eq!(resource["category"], "sales");
            assert_eq!(resource["tier"], tier);
        }
    }
}

#[tokio::test]
async fn test_api_gate_reports_source() {
    let value: serde_json::Value =
        serde_json::from_str(&body_string(app().oneshot(get("/api/gate")).await.unwrap()).await).unwrap();
    assert_eq!(value["state"], "locked");
    assert!(value["name"].is_null());

    let value: serde_json::Value =
        serde_json::from_str(&body_string(app().oneshot(get("/api/gate?user=Alice")).await.unwrap()).await).unwrap();
    assert_eq!(value["state"], "unlocked");
    assert_eq!(value["name"], "Alice");
    assert_eq!(value["source"], "shared_link");
}

#[tokio::test]
async fn test_api_leads_success_and_failure() {
    let response = app()
        .oneshot(json_post(
            "/api/leads",
            serde_json::json!({"name": "Madonna", "email": "m@x.com", "company": "Acme"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());
    let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(value["unlocked"], true);
    assert_eq!(value["name"], "Madonna");

    let response = app_with(Arc::new(InMemoryBackend::failing()))
        .oneshot(json_post(
            "/api/leads",
            serde_json::json!({"name": "Jane Doe", "email": "jane@x.com", "company": "Acme"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(value["error"], "Something went wrong. Please try again.");
}
