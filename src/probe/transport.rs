// Tue Jan 13 2026 - Alex

use crate::probe::error::ProbeError;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Read-only HTTP operations the scanner needs. Every call is a single
/// attempt; implementations never retry.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, ProbeError>;

    /// GET that stops after the status line and headers. The returned body
    /// is always empty, and a body that fails to arrive is not an error.
    fn get_status(&self, url: &str) -> Result<HttpResponse, ProbeError> {
        self.get(url, &[]).map(|response| HttpResponse {
            body: String::new(),
            ..response
        })
    }

    fn head(&self, url: &str) -> Result<HttpResponse, ProbeError>;
}

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        Self::from_builder(Self::builder(timeout))
    }

    fn builder(timeout: Duration) -> reqwest::blocking::ClientBuilder {
        reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("bucket-hunter/", env!("CARGO_PKG_VERSION")))
    }

    fn from_builder(builder: reqwest::blocking::ClientBuilder) -> Result<Self, ProbeError> {
        let client = builder.build().map_err(|e| ProbeError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    fn collect(response: reqwest::blocking::Response, read_body: bool) -> Result<HttpResponse, ProbeError> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();

        let body = if read_body {
            response.text().map_err(|e| ProbeError::Body(e.to_string()))?
        } else {
            String::new()
        };

        Ok(HttpResponse { status, headers, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, ProbeError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().map_err(ProbeError::from)?;
        Self::collect(response, true)
    }

    fn get_status(&self, url: &str) -> Result<HttpResponse, ProbeError> {
        let response = self.client.get(url).send().map_err(ProbeError::from)?;
        Self::collect(response, false)
    }

    fn head(&self, url: &str) -> Result<HttpResponse, ProbeError> {
        let response = self.client.head(url).send().map_err(ProbeError::from)?;
        Self::collect(response, false)
    }
}
