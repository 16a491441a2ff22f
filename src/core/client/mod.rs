//! Public client surface + builder.
//! Default endpoint and payload constants live in `constants`.

pub(crate) mod constants;

use crate::core::NgError;
use constants::{DEFAULT_ENDPOINT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Holds a configured HTTP client and the web service endpoint.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct NgClient {
    http: Client,
    endpoint: Url,
}

impl Default for NgClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NgClient {
    /// Create a new builder.
    pub fn builder() -> NgClientBuilder {
        NgClientBuilder::default()
    }

    /// The SOAP endpoint every snapshot request is posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NgClientBuilder {
    user_agent: Option<String>,
    endpoint: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NgClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the web service endpoint (tests point this at a mock server).
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<NgClient, NgError> {
        let endpoint = match self.endpoint {
            Some(u) => u,
            None => Url::parse(DEFAULT_ENDPOINT)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NgClient { http, endpoint })
    }
}
