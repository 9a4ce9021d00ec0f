use crate::prelude::{eprintln, println, *};
use chrono::Utc;
use colored::Colorize;
use futures::future::join_all;
use quicktools_core::headers::{
    build_response, classify_transport_failure, should_fallback_to_get, validate_url, FailureClass,
    HeaderCheckResponse, TransportFailure,
};
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, clap::Args, Clone)]
pub struct HeadersOptions {
    /// URLs to inspect
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A header check that produced no response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub class: FailureClass,
    pub detail: String,
}

impl Failure {
    pub fn new(class: FailureClass, detail: impl Into<String>) -> Self {
        Self {
            class,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.class.message(), self.detail)
    }
}

impl std::error::Error for Failure {}

/// Client shared by the CLI and the server: fixed timeout, redirects followed
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("quicktools/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

fn source_chain(error: &dyn std::error::Error) -> String {
    let mut messages = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }
    messages.join(": ")
}

fn classify(error: &reqwest::Error) -> Failure {
    let detail = source_chain(error);

    if error.is_builder() {
        return Failure::new(FailureClass::Internal, detail);
    }

    let class = classify_transport_failure(&TransportFailure {
        timeout: error.is_timeout(),
        connect: error.is_connect(),
        detail: detail.clone(),
    });

    Failure::new(class, detail)
}

/// Response headers of `url`
///
/// Sends HEAD first. A non-timeout transport error or a 405/501 answer to
/// HEAD is retried once as GET; nothing else is retried. A HEAD timeout is
/// final.
pub async fn inspect(client: &reqwest::Client, url: &str) -> Result<HeaderCheckResponse, Failure> {
    let url = validate_url(url).map_err(|e| Failure::new(FailureClass::InvalidUrl, e.to_string()))?;

    let timestamp = Utc::now();
    let mut started = Instant::now();

    let response = match client.head(&url).send().await {
        Ok(response) if !should_fallback_to_get(response.status().as_u16()) => response,
        Err(error) if error.is_timeout() => return Err(classify(&error)),
        head => {
            match &head {
                Ok(response) => log::debug!("HEAD {url} answered {}, retrying with GET", response.status()),
                Err(error) => log::debug!("HEAD {url} failed ({error}), retrying with GET"),
            }

            started = Instant::now();
            client.get(&url).send().await.map_err(|e| classify(&e))?
        }
    };

    let elapsed = started.elapsed();
    let status = response.status();
    let headers = response.headers().iter().map(|(name, value)| {
        (
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        )
    });

    log::info!("{url} -> {status} in {}ms", elapsed.as_millis());

    Ok(build_response(
        &url,
        status.as_u16(),
        status.canonical_reason(),
        headers,
        timestamp,
        elapsed,
    ))
}

pub async fn run(options: HeadersOptions, global: crate::Global) -> Result<()> {
    let client = build_client(Duration::from_secs(global.timeout))?;

    if global.verbose {
        eprintln!(
            "Inspecting {} URL(s) with a {}s timeout...",
            options.urls.len(),
            global.timeout
        );
    }

    let checks = options.urls.iter().map(|url| inspect(&client, url));
    let results = join_all(checks).await;
    let failed = results.iter().filter(|result| result.is_err()).count();

    if options.json {
        let documents = results
            .iter()
            .map(|result| match result {
                Ok(response) => serde_json::to_value(response),
                Err(failure) => Ok(serde_json::json!({ "error": failure.class.message() })),
            })
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to serialize header check results")?;
        print_json(&documents)?;
    } else {
        for (url, result) in options.urls.iter().zip(&results) {
            match result {
                Ok(response) => print_response(response),
                Err(failure) => eprintln!("{} {}: {}", "✗".red(), url, failure),
            }
        }
    }

    if failed > 0 {
        return Err(Error::Network(f!("{failed} of {} checks failed", results.len())).into());
    }

    Ok(())
}

fn print_response(response: &HeaderCheckResponse) {
    let status = f!("{} {}", response.status, response.status_text);
    let status = if response.status < 400 {
        status.bright_green()
    } else {
        status.bright_red()
    };

    println!(
        "\n{} {} ({}ms)",
        status.bold(),
        response.url.cyan().underline(),
        response.response_time
    );

    let mut table = new_table();
    for header in &response.headers {
        table.add_row(prettytable::row![header.name, header.value]);
    }
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, head};
    use axum::Router;
    use std::net::SocketAddr;

    async fn spawn_upstream(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn upstream() -> Router {
        Router::new()
            .route(
                "/",
                get(|| async { ([("x-served-by", "upstream")], "hello") }),
            )
            .route(
                "/no-head",
                head(|| async { StatusCode::METHOD_NOT_ALLOWED })
                    .get(|| async { ([("x-method", "get")], "ok") }),
            )
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
    }

    // ============================================================================
    // inspect
    // ============================================================================

    #[tokio::test]
    async fn test_inspect_returns_headers() {
        let addr = spawn_upstream(upstream()).await;
        let client = build_client(Duration::from_secs(5)).unwrap();

        let url = format!("http://{addr}/");
        let response = inspect(&client, &url).await.unwrap();

        assert_eq!(response.url, url);
        assert_eq!(response.status, 200);
        assert_eq!(response.status_text, "OK");
        assert!(response
            .headers
            .iter()
            .any(|header| header.name == "x-served-by" && header.value == "upstream"));
    }

    #[tokio::test]
    async fn test_inspect_falls_back_to_get() {
        let addr = spawn_upstream(upstream()).await;
        let client = build_client(Duration::from_secs(5)).unwrap();

        let response = inspect(&client, &format!("http://{addr}/no-head"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response
            .headers
            .iter()
            .any(|header| header.name == "x-method" && header.value == "get"));
    }

    #[tokio::test]
    async fn test_inspect_reports_upstream_error_status_as_success() {
        let addr = spawn_upstream(upstream()).await;
        let client = build_client(Duration::from_secs(5)).unwrap();

        let response = inspect(&client, &format!("http://{addr}/missing"))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.status_text, "Not Found");
    }

    #[tokio::test]
    async fn test_inspect_times_out() {
        let addr = spawn_upstream(upstream()).await;
        let client = build_client(Duration::from_millis(200)).unwrap();

        let failure = inspect(&client, &format!("http://{addr}/slow"))
            .await
            .unwrap_err();

        assert_eq!(failure.class, FailureClass::Timeout);
        assert_eq!(failure.class.status_code(), 504);
    }

    #[tokio::test]
    async fn test_inspect_timeout_is_not_doubled_by_get_fallback() {
        let addr = spawn_upstream(upstream()).await;
        let timeout = Duration::from_millis(500);
        let client = build_client(timeout).unwrap();

        let started = Instant::now();
        let failure = inspect(&client, &format!("http://{addr}/slow"))
            .await
            .unwrap_err();
        let elapsed = started.elapsed();

        assert_eq!(failure.class, FailureClass::Timeout);
        assert!(
            elapsed < timeout.mul_f64(1.5),
            "took {}ms with a {}ms timeout",
            elapsed.as_millis(),
            timeout.as_millis()
        );
    }

    #[tokio::test]
    async fn test_inspect_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = build_client(Duration::from_secs(5)).unwrap();
        let failure = inspect(&client, &format!("http://{addr}/"))
            .await
            .unwrap_err();

        assert_eq!(failure.class, FailureClass::Connection);
    }

    #[tokio::test]
    async fn test_inspect_rejects_invalid_url_without_sending() {
        let client = build_client(Duration::from_secs(5)).unwrap();

        let failure = inspect(&client, "ftp://example.com").await.unwrap_err();
        assert_eq!(failure.class, FailureClass::InvalidUrl);
        assert_eq!(failure.class.status_code(), 400);
    }

    #[tokio::test]
    async fn test_inspect_rejects_invalid_host_as_bad_request() {
        let client = build_client(Duration::from_secs(5)).unwrap();

        for url in ["http://exa<mple.com/", "http://exa^mple.com/", "http://a%zz.com/"] {
            let failure = inspect(&client, url).await.unwrap_err();
            assert_eq!(failure.class, FailureClass::InvalidUrl, "{url}");
            assert_eq!(failure.class.status_code(), 400);
        }
    }
}
