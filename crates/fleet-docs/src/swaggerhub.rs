use crate::provider::{DocsProvider, UpdateOptions};
use crate::{DocsError, Result};
use async_trait::async_trait;
use fleet_config::constants::HTTP_TIMEOUT;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Request, Url};
use tracing::debug;

pub struct SwaggerHubClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl SwaggerHubClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Self::with_client(http, base_url, api_key)
    }

    pub fn with_client(http: Client, base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| DocsError::InvalidUrl(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(DocsError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn apis_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DocsError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("apis")
            .extend(segments);
        Ok(url)
    }

    /// `POST /apis/{organization}/{api_id}`; the version travels in the query string.
    pub fn update_request(
        &self,
        organization: &str,
        api_id: &str,
        version: &str,
        body: &str,
        options: UpdateOptions,
    ) -> Result<Request> {
        let mut url = self.apis_url(&[organization, api_id])?;
        url.query_pairs_mut()
            .append_pair("version", version)
            .append_pair("force", &options.force.to_string())
            .append_pair("isPrivate", &options.is_private.to_string());

        Ok(self
            .http
            .post(url)
            .header(AUTHORIZATION, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .build()?)
    }

    pub fn delete_api_request(&self, organization: &str, api_id: &str) -> Result<Request> {
        let url = self.apis_url(&[organization, api_id])?;
        Ok(self
            .http
            .delete(url)
            .header(AUTHORIZATION, &self.api_key)
            .build()?)
    }

    pub fn delete_version_request(
        &self,
        organization: &str,
        api_id: &str,
        version: &str,
    ) -> Result<Request> {
        let url = self.apis_url(&[organization, api_id, version])?;
        Ok(self
            .http
            .delete(url)
            .header(AUTHORIZATION, &self.api_key)
            .build()?)
    }

    async fn execute(&self, request: Request) -> Result<u16> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await?;
        let status = response.status().as_u16();

        debug!("SwaggerHub {} {} returned {}", method, url.path(), status);

        Ok(status)
    }
}

#[async_trait]
impl DocsProvider for SwaggerHubClient {
    async fn delete_api(&self, organization: &str, api_id: &str) -> Result<u16> {
        let request = self.delete_api_request(organization, api_id)?;
        self.execute(request).await
    }

    async fn delete_api_version(
        &self,
        organization: &str,
        api_id: &str,
        version: &str,
    ) -> Result<u16> {
        let request = self.delete_version_request(organization, api_id, version)?;
        self.execute(request).await
    }

    async fn update_api(
        &self,
        organization: &str,
        api_id: &str,
        version: &str,
        body: &str,
        options: UpdateOptions,
    ) -> Result<u16> {
        let request = self.update_request(organization, api_id, version, body, options)?;
        self.execute(request).await
    }
}
