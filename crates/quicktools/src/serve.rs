use crate::net::headers::{build_client, inspect};
use crate::prelude::{eprintln, *};
use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use quicktools_core::headers::{ErrorBody, FailureClass, HeaderCheckRequest};
use quicktools_core::ip::{client_ip, IpResponse};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the HTTP API")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "QUICKTOOLS_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "QUICKTOOLS_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

pub struct AppState {
    pub client: reqwest::Client,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", app.host, app.port);

    let state = Arc::new(AppState {
        client: build_client(Duration::from_secs(global.timeout))?,
    });

    if global.verbose {
        eprintln!("Listening on http://{}", addr);
        eprintln!("Header inspection: POST http://{}/api/headers", addr);
        eprintln!("Caller address: GET http://{}/api/ip", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("quicktools API listening on {addr}");

    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/headers", post(headers_handler))
        .route("/api/ip", get(ip_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

fn error_response(status: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorBody::new(message))).into_response()
}

async fn headers_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HeaderCheckRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            log::warn!("rejected header check body: {rejection}");
            return error_response(400, "A JSON body with a url field is required");
        }
    };

    match inspect(&state.client, &request.url).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(failure) => {
            log::warn!("header check for {} failed: {}", request.url, failure);
            let class = failure.class;
            error_response(class.status_code(), class.message())
        }
    }
}

async fn ip_handler(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<IpResponse> {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    let ip = client_ip(header("x-forwarded-for"), header("x-real-ip"), peer.ip());

    Json(IpResponse::from(ip))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicktools_core::headers::HeaderCheckResponse;

    async fn spawn(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .unwrap();
        });
        addr
    }

    async fn spawn_api(timeout: Duration) -> SocketAddr {
        let state = Arc::new(AppState {
            client: build_client(timeout).unwrap(),
        });
        spawn(router(state)).await
    }

    async fn spawn_upstream() -> SocketAddr {
        let upstream = Router::new()
            .route(
                "/",
                get(|| async { ([("x-upstream", "1"), ("set-cookie", "a=1")], "hello") }),
            )
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            );
        spawn(upstream).await
    }

    // ============================================================================
    // POST /api/headers
    // ============================================================================

    #[tokio::test]
    async fn test_headers_endpoint_success() {
        let upstream = spawn_upstream().await;
        let api = spawn_api(Duration::from_secs(5)).await;
        let url = format!("http://{upstream}/");

        let response = reqwest::Client::new()
            .post(format!("http://{api}/api/headers"))
            .header("origin", "http://localhost:5173")
            .json(&HeaderCheckRequest { url: url.clone() })
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert!(response.headers().contains_key("access-control-allow-origin"));

        let raw: serde_json::Value = response.json().await.unwrap();
        assert!(raw.get("statusText").is_some());
        assert!(raw.get("responseTime").is_some());

        let body: HeaderCheckResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(body.url, url);
        assert_eq!(body.status, 200);
        assert!(body
            .headers
            .iter()
            .any(|header| header.name == "x-upstream" && header.value == "1"));
    }

    #[tokio::test]
    async fn test_headers_endpoint_invalid_url() {
        let api = spawn_api(Duration::from_secs(5)).await;

        let response = reqwest::Client::new()
            .post(format!("http://{api}/api/headers"))
            .json(&HeaderCheckRequest {
                url: "not a url".to_string(),
            })
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.error, FailureClass::InvalidUrl.message());
    }

    #[tokio::test]
    async fn test_headers_endpoint_missing_body() {
        let api = spawn_api(Duration::from_secs(5)).await;

        let response = reqwest::Client::new()
            .post(format!("http://{api}/api/headers"))
            .header("content-type", "application/json")
            .body("{}")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        let body: ErrorBody = response.json().await.unwrap();
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_headers_endpoint_timeout_is_504() {
        let upstream = spawn_upstream().await;
        let api = spawn_api(Duration::from_millis(200)).await;

        let response = reqwest::Client::new()
            .post(format!("http://{api}/api/headers"))
            .json(&HeaderCheckRequest {
                url: format!("http://{upstream}/slow"),
            })
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 504);
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.error, FailureClass::Timeout.message());
    }

    // ============================================================================
    // GET /api/ip and /health
    // ============================================================================

    #[tokio::test]
    async fn test_ip_endpoint_uses_peer_address() {
        let api = spawn_api(Duration::from_secs(5)).await;

        let body: IpResponse = reqwest::get(format!("http://{api}/api/ip"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body.ip, "127.0.0.1");
    }

    #[tokio::test]
    async fn test_ip_endpoint_prefers_forwarded_for() {
        let api = spawn_api(Duration::from_secs(5)).await;

        let body: IpResponse = reqwest::Client::new()
            .get(format!("http://{api}/api/ip"))
            .header("x-forwarded-for", "198.51.100.2, 10.0.0.1")
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body.ip, "198.51.100.2");
    }

    #[tokio::test]
    async fn test_health() {
        let api = spawn_api(Duration::from_secs(5)).await;

        let response = reqwest::get(format!("http://{api}/health")).await.unwrap();
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "ok");
    }
}
