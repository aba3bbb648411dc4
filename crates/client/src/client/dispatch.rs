//! Request dispatch with transparent access-token renewal
//!
//! Every API call goes through [`NostosClient::request`]. A call that was sent
//! with a bearer token and comes back `401` triggers one refresh through the
//! token endpoint, then the rejected call is replayed exactly once with the
//! new token. The replay's outcome is final, even if it is another `401`.
//!
//! Refreshes are serialized by the client's refresh lock. A call that waited
//! on the lock while another call renewed the token reuses the stored token
//! rather than spending the refresh token again.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::{NostosClient, RequestOptions};
use crate::error::ClientError;
use crate::types::{RefreshRequest, RefreshResponse};

impl NostosClient {
    /// Perform one API call against `endpoint` (appended to the base URL).
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let result = self.dispatch(endpoint, &options, true).await;
        log_outcome(endpoint, &options, &result);
        result
    }

    /// Like [`request`](Self::request), but a failed refresh ends the session
    /// without running the session-expired hook.
    pub(super) async fn request_quietly<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let result = self.dispatch(endpoint, &options, false).await;
        log_outcome(endpoint, &options, &result);
        result
    }

    /// GET `endpoint`
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        self.request(endpoint, RequestOptions::get()).await
    }

    /// POST `body` to `endpoint`
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, RequestOptions::post().json(body)?)
            .await
    }

    /// PUT `body` to `endpoint`
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, RequestOptions::put().json(body)?)
            .await
    }

    /// DELETE `endpoint`
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        self.request(endpoint, RequestOptions::delete()).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: &RequestOptions,
        notify_expiry: bool,
    ) -> Result<T, ClientError> {
        let url = self.url(endpoint);
        let token = self.session.access_token();

        let mut response = self.send(&url, options, token.as_deref()).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // Only a call that actually carried a token can have an expired one
            if let Some(stale) = token {
                let fresh = self.renew_access_token(&stale, notify_expiry).await?;
                debug!(endpoint, "Retrying with refreshed access token");
                response = self.send(&url, options, Some(&fresh)).await?;
            }
        }

        parse_response(response).await
    }

    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
        token: Option<&str>,
    ) -> Result<Response, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers.clone());

        if let Some(token) = token {
            headers.insert(AUTHORIZATION, bearer(token)?);
        }

        let mut request = self
            .http
            .request(options.method.clone(), url)
            .headers(headers);

        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        Ok(request.send().await?)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// `stale` is the token the failed call carried. Fails with
    /// [`ClientError::SessionExpired`] after tearing the session down when no
    /// refresh token is stored or the token endpoint rejects it. The
    /// session-expired hook only runs when `notify_expiry` is set.
    async fn renew_access_token(
        &self,
        stale: &str,
        notify_expiry: bool,
    ) -> Result<String, ClientError> {
        let _guard = self.refresh_lock.lock().await;

        match self.session.access_token() {
            Some(current) if current != stale => {
                debug!("Access token already renewed by a concurrent request");
                return Ok(current);
            }
            None => {
                debug!("Session was cleared while waiting to refresh");
                return Err(ClientError::SessionExpired);
            }
            Some(_) => {}
        }

        let Some(refresh) = self.session.refresh_token() else {
            return Err(self.expire_session("no refresh token stored", notify_expiry));
        };

        let response = self
            .http
            .post(self.url(&self.refresh_path))
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&RefreshRequest { refresh: &refresh })?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Token refresh rejected");
            return Err(self.expire_session("refresh token rejected", notify_expiry));
        }

        let access = match response.json::<RefreshResponse>().await {
            Ok(body) => body.access,
            Err(err) => {
                warn!(error = %err, "Unreadable token refresh response");
                return Err(self.expire_session("refresh response unreadable", notify_expiry));
            }
        };

        // The refresh token is reused as-is; only the access token rotates
        self.session.set_tokens(&access, &refresh);
        info!("Access token refreshed");

        Ok(access)
    }

    fn expire_session(&self, reason: &str, notify: bool) -> ClientError {
        warn!(reason, "Session expired, clearing local session");
        self.session.clear();

        if notify {
            if let Some(hook) = &self.on_session_expired {
                hook(&self.login_path);
            }
        }

        ClientError::SessionExpired
    }
}

fn log_outcome<T>(endpoint: &str, options: &RequestOptions, result: &Result<T, ClientError>) {
    match result {
        Ok(_) => debug!(method = %options.method, endpoint, "API request succeeded"),
        Err(err @ (ClientError::Request(_) | ClientError::Serialization(_))) => {
            error!(method = %options.method, endpoint, error = %err, "API request failed")
        }
        Err(err) => {
            warn!(method = %options.method, endpoint, error = %err, "API request rejected")
        }
    }
}

fn bearer(token: &str) -> Result<HeaderValue, ClientError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        ClientError::Configuration("access token is not a valid header value".into())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        return Err(ClientError::from_response(status, &body));
    }

    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        // 204 and friends
        return Ok(serde_json::from_value(Value::Null)?);
    }

    Ok(serde_json::from_slice(&body)?)
}
