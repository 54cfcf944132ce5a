//! HTTP access layer for the activity REST surface.
//!
//! One [`ApiClient`] value carries the base URL, the standard
//! `X-Requested-With` marker header, and the unauthorized-response policy.
//! Every endpoint the frontend consumes is a typed method here; failures
//! propagate to the caller, no retries.

use activity_core::dto::{Activity, ItemEnvelope, ListEnvelope};
use activity_core::filter::ListFilter;
use activity_core::form::FormFields;
use reqwest::Method;

pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Strategy invoked when the server answers 401. The call still fails with
/// [`ApiError::Unauthorized`] so in-flight callers unwind.
pub trait UnauthorizedPolicy {
    fn on_unauthorized(&self);
}

/// Production policy: leave the page for the login route.
pub struct RedirectToLogin {
    pub login_path: String,
}

impl UnauthorizedPolicy for RedirectToLogin {
    fn on_unauthorized(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&self.login_path);
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    policy: Box<dyn UnauthorizedPolicy>,
}

impl ApiClient {
    pub fn new(base_url: String, policy: Box<dyn UnauthorizedPolicy>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            policy,
        }
    }

    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Activity>, ApiError> {
        let builder = self
            .request(Method::GET, "/activities")
            .query(&filter.query_pairs());
        let envelope: ListEnvelope = self.send(builder).await?.json().await?;
        Ok(envelope.data)
    }

    pub async fn get(&self, id: u64) -> Result<Activity, ApiError> {
        let builder = self.request(Method::GET, &format!("/activities/{id}"));
        let envelope: ItemEnvelope = self.send(builder).await?.json().await?;
        Ok(envelope.data)
    }

    pub async fn create(&self, fields: &FormFields) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "/activities").json(fields);
        self.send(builder).await?;
        Ok(())
    }

    pub async fn update(&self, id: u64, fields: &FormFields) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/activities/{id}"))
            .json(fields);
        self.send(builder).await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &format!("/activities/{id}"));
        self.send(builder).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await?;
        self.screen(response.status().as_u16())?;
        Ok(response)
    }

    /// Response interceptor: 401 triggers the policy and fails the call;
    /// every other non-2xx status is a uniform generic failure.
    fn screen(&self, status: u16) -> Result<(), ApiError> {
        if status == 401 {
            self.policy.on_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !(200..300).contains(&status) {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }
}
