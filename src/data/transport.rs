use {
    crate::config::{API, AUTH_TOKEN_HEADER},
    anyhow::{Context, Result},
    async_trait::async_trait,
    reqwest::header::CONTENT_TYPE,
    serde_json::Value,
    std::time::Duration,
    strum_macros::Display,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Which remote service a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Service {
    Auth,
    Ledger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub service: Service,
    pub method: Method,
    pub path: &'static str,
    /// Sent as-is in the auth header; empty when logged out.
    pub token: String,
    pub body: Option<Value>,
}

/// Moves one request to a service and hands back the raw body text.
/// HTTP status codes are not interpreted: the services report failures in the body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<String>;
}

pub struct HttpTransport {
    http: reqwest::Client,
    auth_url: String,
    inv_url: String,
}

impl HttpTransport {
    pub fn new(auth_url: &str, inv_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(API.client.timeout_ms))
            .user_agent(API.client.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            auth_url: auth_url.trim_end_matches('/').to_string(),
            inv_url: inv_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, request: &ApiRequest) -> String {
        let base = match request.service {
            Service::Auth => &self.auth_url,
            Service::Ledger => &self.inv_url,
        };
        format!("{}{}", base, request.path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<String> {
        let url = self.url(&request);

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        }
        .header(CONTENT_TYPE, "application/json")
        .header(AUTH_TOKEN_HEADER, request.token.as_str());

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("{} {} failed", request.method, request.path))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read reply of {} {}", request.method, request.path))?;

        #[cfg(debug_assertions)]
        if DF.log_requests {
            log::info!(
                "{} {} -> {} ({} bytes)",
                request.method,
                url,
                status,
                text.len()
            );
        }
        if !status.is_success() {
            log::debug!("{} service answered {} for {}", request.service, status, request.path);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    #[tokio::test]
    async fn sends_token_header_and_json_body_to_the_right_service() {
        let auth = MockServer::start().await;
        let ledger = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/deposit"))
            .and(header("X-Auth-Token", "tok-1"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({"amount": 2000.0})))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok": true}"#))
            .expect(1)
            .mount(&ledger)
            .await;

        let transport = HttpTransport::new(&auth.uri(), &format!("{}/", ledger.uri())).unwrap();
        let body = transport
            .send(ApiRequest {
                service: Service::Ledger,
                method: Method::Post,
                path: "/deposit",
                token: "tok-1".to_string(),
                body: Some(serde_json::json!({"amount": 2000.0})),
            })
            .await
            .unwrap();

        assert_eq!(body, r#"{"ok": true}"#);
    }

    #[tokio::test]
    async fn error_statuses_still_return_the_body() {
        let auth = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"error": "Не авторизован"}"#),
            )
            .mount(&auth)
            .await;

        let transport = HttpTransport::new(&auth.uri(), "http://127.0.0.1:9").unwrap();
        let body = transport
            .send(ApiRequest {
                service: Service::Auth,
                method: Method::Get,
                path: "/me",
                token: String::new(),
                body: None,
            })
            .await
            .unwrap();

        assert!(body.contains("Не авторизован"));
    }
}
