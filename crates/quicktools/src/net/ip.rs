use crate::prelude::{eprintln, println, *};
use color_eyre::eyre::Report;
use quicktools_core::ip::{parse_ip, IpResponse};
use std::net::IpAddr;
use std::time::Duration;

const DEFAULT_IP_SERVICE: &str = "https://api.ipify.org?format=json";

#[derive(Debug, clap::Args, Clone)]
pub struct IpOptions {
    /// Echo service answering `{"ip": "..."}`
    #[arg(long, env = "QUICKTOOLS_IP_SERVICE", default_value = DEFAULT_IP_SERVICE)]
    pub service: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Ask `service` for the caller's public address. One attempt, no retry.
pub async fn lookup_public_ip(client: &reqwest::Client, service: &str) -> Result<IpAddr> {
    let response = client.get(service).send().await.map_err(|e| {
        if e.is_timeout() {
            Report::new(Error::Timeout(f!("{service}: {e}")))
        } else {
            Report::new(Error::Network(f!("Failed to reach {service}: {e}")))
        }
    })?;

    if !response.status().is_success() {
        return Err(Error::Network(f!("{service} answered HTTP {}", response.status())).into());
    }

    let body: IpResponse = response
        .json()
        .await
        .map_err(|e| Error::Network(f!("Unexpected response from {service}: {e}")))?;

    parse_ip(&body.ip).map_err(|e| Error::Network(e.to_string()).into())
}

pub async fn run(options: IpOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Asking {} for the public address...", options.service);
    }

    let client = super::headers::build_client(Duration::from_secs(global.timeout))?;

    let ip = lookup_public_ip(&client, &options.service).await?;

    if options.json {
        print_json(&IpResponse::from(ip))
    } else {
        println!("{ip}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::net::SocketAddr;

    async fn spawn_service(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn service() -> Router {
        Router::new()
            .route(
                "/ok",
                get(|| async {
                    Json(IpResponse {
                        ip: "203.0.113.7".to_string(),
                    })
                }),
            )
            .route("/garbage", get(|| async { Json(serde_json::json!({ "ip": "nope" })) }))
            .route("/down", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
    }

    #[tokio::test]
    async fn test_lookup_public_ip() {
        let addr = spawn_service(service()).await;
        let client = reqwest::Client::new();

        let ip = lookup_public_ip(&client, &format!("http://{addr}/ok"))
            .await
            .unwrap();
        assert_eq!(ip.to_string(), "203.0.113.7");
    }

    #[tokio::test]
    async fn test_lookup_public_ip_failures() {
        let addr = spawn_service(service()).await;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();

        let err = lookup_public_ip(&client, &format!("http://{addr}/garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Network(_))));

        let err = lookup_public_ip(&client, &format!("http://{addr}/down"))
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Network(_))));

        let err = lookup_public_ip(&client, &format!("http://{addr}/slow"))
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Timeout(_))));
    }
}
