use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::models::{Deploy, Site, SiteProperties};
use crate::{ClientError, ClientResult};

pub const DEFAULT_HOST: &str = "https://api.netlify.com/api/v1";
const DEFAULT_CLIENT_AGENT: &str = "netlifyctl";

pub(crate) mod support {
    use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

    const PATH_SET: &AsciiSet = &CONTROLS
        .add(b' ')
        .add(b'"')
        .add(b'#')
        .add(b'<')
        .add(b'>')
        .add(b'?')
        .add(b'`')
        .add(b'{')
        .add(b'}');

    pub(crate) fn encode_path(pc: &str) -> String {
        utf8_percent_encode(pc, PATH_SET).to_string()
    }
}

pub struct ClientBuilder {
    host: String,
    agent: String,
    auth_token: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            agent: DEFAULT_CLIENT_AGENT.to_string(),
            auth_token: auth_token.into(),
            timeout: None,
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    /// Timeout applied to every outbound call. Defaults to whatever the
    /// transport defaults to.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> ClientResult<Client> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Client {
            host: self.host.trim_end_matches('/').to_string(),
            agent: self.agent,
            auth_token: self.auth_token,
            client: builder.build()?,
        })
    }
}

/// Entrypoint for interacting with the API.
///
/// All I/O is blocking and sequential; a `Client` performs one request at a
/// time. Authentication is a bearer-style token appended to every URL as the
/// `access_token` query parameter.
pub struct Client {
    host: String,
    agent: String,
    auth_token: String,
    client: reqwest::blocking::Client,
}

impl Client {
    pub fn new(auth_token: impl Into<String>) -> ClientResult<Self> {
        ClientBuilder::new(auth_token).build()
    }

    pub fn builder(auth_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(auth_token)
    }

    /// List every site owned by the authenticated account.
    pub fn sites(&self) -> ClientResult<Vec<Site>> {
        self.get(&["sites"], &[StatusCode::OK])
    }

    /// Fetch a single site by id or by custom domain.
    pub fn get_site(&self, id_or_domain: &str) -> ClientResult<Site> {
        self.get(&["sites", id_or_domain], &[StatusCode::OK])
    }

    pub fn create_site(&self, properties: &SiteProperties) -> ClientResult<Site> {
        self.post(&["sites"], properties, &[StatusCode::CREATED])
    }

    pub fn delete_site(&self, site: &Site) -> ClientResult<()> {
        let url = self.url(&["sites", &site.id])?;
        debug!("DELETE {url}");
        let response = self.request(self.client.delete(url))?;
        self.handle_empty(response, &[StatusCode::OK, StatusCode::NO_CONTENT])
    }

    /// Files currently deployed to a site, as raw JSON objects.
    pub fn site_files(&self, site: &Site) -> ClientResult<Vec<serde_json::Value>> {
        self.get(&["sites", &site.id, "files"], &[StatusCode::OK])
    }

    /// Read a deploy record, typically to observe its `state` after creation.
    pub fn get_deploy(&self, deploy_id: &str) -> ClientResult<Deploy> {
        self.get(&["deploys", deploy_id], &[StatusCode::OK])
    }

    /// Build a request URL from path segments, appending the access token.
    /// Segments are joined as-is, so anything needing percent-encoding must
    /// be encoded by the caller.
    pub(crate) fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.host, segments.join("/")))?;
        url.query_pairs_mut()
            .append_pair("access_token", &self.auth_token);
        Ok(url)
    }

    pub(crate) fn get<D>(&self, segments: &[&str], expected: &[StatusCode]) -> ClientResult<D>
    where
        D: DeserializeOwned,
    {
        let url = self.url(segments)?;
        debug!("GET {url}");
        let response = self.request(self.client.get(url))?;
        self.handle_json(response, expected)
    }

    pub(crate) fn post<D, B>(
        &self,
        segments: &[&str],
        body: &B,
        expected: &[StatusCode],
    ) -> ClientResult<D>
    where
        D: DeserializeOwned,
        B: Serialize,
    {
        let url = self.url(segments)?;
        debug!("POST {url}");
        let response = self.request(self.client.post(url).json(body))?;
        self.handle_json(response, expected)
    }

    pub(crate) fn put_raw(
        &self,
        url: Url,
        body: Vec<u8>,
        expected: &[StatusCode],
    ) -> ClientResult<()> {
        debug!("PUT {url}");
        let response = self.request(
            self.client
                .put(url)
                .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
                .body(body),
        )?;
        self.handle_empty(response, expected)
    }

    fn request(&self, req: reqwest::blocking::RequestBuilder) -> ClientResult<Response> {
        Ok(req
            .header(reqwest::header::USER_AGENT, &*self.agent)
            .send()?)
    }

    fn handle_json<D>(&self, response: Response, expected: &[StatusCode]) -> ClientResult<D>
    where
        D: DeserializeOwned,
    {
        let body = self.check_status(response, expected)?;
        debug!("Received successful response. Read payload.");
        Ok(serde_json::from_slice::<D>(&body)?)
    }

    fn handle_empty(&self, response: Response, expected: &[StatusCode]) -> ClientResult<()> {
        self.check_status(response, expected)?;
        Ok(())
    }

    /// Non-success statuses become [`ClientError::HttpError`]. A successful
    /// status outside `expected` is logged but still treated as success.
    fn check_status(&self, response: Response, expected: &[StatusCode]) -> ClientResult<Vec<u8>> {
        let status = response.status();
        let body = response.bytes()?;

        if !status.is_success() {
            let error_msg = if body.is_empty() {
                "empty response".to_string()
            } else {
                String::from_utf8_lossy(&body).to_string()
            };
            return Err(ClientError::HttpError {
                status,
                error: error_msg,
            });
        }

        if !expected.contains(&status) {
            warn!("Unexpected response status code {status}");
        }

        Ok(body.to_vec())
    }
}
