use anyhow::{Context, Result};
use crux_http::{
    protocol::{HttpHeader, HttpRequest, HttpResponse, HttpResult},
    HttpError,
};
use log::{error, info};
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use reqwest::{Client, Method};
use trait_variant::make;

/// Executes the core's HTTP effect requests
#[make(Send)]
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait HttpExecutor {
    async fn execute(&self, request: HttpRequest) -> HttpResult;
}

/// HTTP executor backed by `reqwest`
///
/// Requests carry no timeout: a hanging device keeps its request pending
/// until the connection gives up.
#[derive(Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client })
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| HttpError::Url(format!("invalid method {}: {e}", request.method)))?;

        let mut builder = self.client.request(method, request.url.as_str());
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await.map_err(to_http_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| HttpHeader {
                name: name.to_string(),
                value: value.to_str().unwrap_or_default().to_string(),
            })
            .collect();
        let body = response.bytes().await.map_err(to_http_error)?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest) -> HttpResult {
        let description = format!("{} {}", request.method, request.url);
        info!("{description}");

        match self.send(request).await {
            Ok(response) => {
                info!("{description} -> {}", response.status);
                HttpResult::Ok(response)
            }
            Err(e) => {
                error!("{description} failed: {e}");
                HttpResult::Err(e)
            }
        }
    }
}

fn to_http_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, url: &str) -> HttpRequest {
        HttpRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: vec![],
            body: vec![],
        }
    }

    #[tokio::test]
    async fn unreachable_device_is_io_error() {
        let executor = ReqwestExecutor::new().expect("failed to create client");

        // port 9 (discard) on localhost is closed on test machines
        let result = executor
            .execute(request("GET", "http://127.0.0.1:9/api/status"))
            .await;

        assert!(matches!(result, HttpResult::Err(HttpError::Io(_))));
    }

    #[tokio::test]
    async fn invalid_method_is_rejected_before_sending() {
        let executor = ReqwestExecutor::new().expect("failed to create client");

        let result = executor
            .execute(request("GE T", "http://127.0.0.1:9/api/status"))
            .await;

        assert!(matches!(result, HttpResult::Err(HttpError::Url(_))));
    }
}
