//! NOSTOS HTTP client

pub mod ai;
pub mod analytics;
pub mod auth;
pub mod campaigns;
mod dispatch;
pub mod donations;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::Session;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Method};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Callback run when the session is torn down after a failed refresh.
/// Receives the configured login path.
pub type SessionExpiredHook = Arc<dyn Fn(&str) + Send + Sync>;

/// NOSTOS API client
///
/// Clones share the session, the HTTP connection pool and the refresh lock.
#[derive(Clone)]
pub struct NostosClient {
    http: Client,
    base_url: String,
    refresh_path: String,
    login_path: String,
    session: Session,
    on_session_expired: Option<SessionExpiredHook>,
    refresh_lock: Arc<Mutex<()>>,
}

impl NostosClient {
    /// Create a new client with default configuration and an in-memory session
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::builder().config(config.clone()).build()
    }

    /// Create a new client builder
    pub fn builder() -> NostosClientBuilder {
        NostosClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session this client reads and writes
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl fmt::Debug for NostosClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NostosClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Method, extra headers and JSON body for one API call
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Set the JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add a header; it overrides the default content type if it names it
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Builder for NostosClient
#[derive(Default)]
pub struct NostosClientBuilder {
    config: Option<ClientConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    session: Option<Session>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl NostosClientBuilder {
    /// Start from a loaded configuration; explicit setters still win
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use an existing session instead of a fresh in-memory one
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Run `hook` with the login path whenever the session is forcibly ended
    pub fn on_session_expired<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<NostosClient, ClientError> {
        let config = self.config.unwrap_or_else(ClientConfig::from_env);

        let base_url = self.base_url.unwrap_or(config.base_url.clone());
        url::Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url {base_url:?}: {e}")))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new()
            .user_agent(self.user_agent.unwrap_or_else(|| config.user_agent.clone()));

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout.or_else(|| config.timeout()) {
            client_builder = client_builder.timeout(timeout);
        }

        let http = client_builder.build()?;

        Ok(NostosClient {
            http,
            base_url,
            refresh_path: config.refresh_path,
            login_path: config.login_path,
            session: self.session.unwrap_or_default(),
            on_session_expired: self.on_session_expired,
            refresh_lock: Arc::new(Mutex::new(())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = NostosClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/campaigns/"), "http://localhost:8000/api/campaigns/");
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = NostosClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_builder_uses_config_base_url() {
        let config = ClientConfig {
            base_url: "https://nostos.test/api".to_string(),
            ..ClientConfig::default()
        };
        let client = NostosClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://nostos.test/api");
    }

    #[test]
    fn test_request_options_body_and_headers() {
        let options = RequestOptions::post()
            .json(&serde_json::json!({"text": "hi"}))
            .unwrap()
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        assert_eq!(options.method, Method::POST);
        assert_eq!(options.body.unwrap()["text"], "hi");
        assert_eq!(options.headers[CONTENT_TYPE], "text/plain");
    }
}
