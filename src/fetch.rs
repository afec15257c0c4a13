//!
//! src/fetch.rs
//!
//! Defines the typed client for the tag catalog endpoint: reqwest
//! client construction, per-operation request builders, and the async
//! operations themselves. Each operation is one independent
//! request/response exchange; nothing here retries.
//!

use reqwest::{Client, header, redirect};
use tracing::{debug, info};

use crate::config::{ClientConfig, HttpConfig};
use crate::decode;
use crate::errors::TagError;
use crate::model::{RemoteFile, Tag, TagQueryResult};
use crate::query::TagQuery;

/// Client building functionality
fn client_helper(http: &HttpConfig) -> reqwest::ClientBuilder {
    Client::builder()
        .timeout(http.timeout)
        .connect_timeout(http.connect_timeout)
        .pool_max_idle_per_host(http.pool_max_idle_per_host)
        .pool_idle_timeout(Some(http.pool_idle_timeout))
        .redirect(redirect::Policy::limited(http.max_redirects as usize))
}

pub fn base_client(http: &HttpConfig) -> Result<Client, TagError> {
    let mut h = header::HeaderMap::new();
    h.insert(header::ACCEPT, header::HeaderValue::from_static("text/xml"));
    client_helper(http)
        .default_headers(h)
        .build()
        .map_err(|e| TagError::Http(format!("build client: {e}")))
}

/// The service signals success with exactly HTTP 200.
fn check_status(status: reqwest::StatusCode) -> Result<(), TagError> {
    if status.as_u16() == 200 {
        Ok(())
    } else {
        Err(TagError::Http(format!("unexpected status {status}")))
    }
}

#[derive(Clone, Debug)]
pub struct TagsClient {
    pub http: Client,
    pub cfg: ClientConfig,
}

impl TagsClient {
    pub fn new(cfg: ClientConfig) -> Result<Self, TagError> {
        let http = base_client(&cfg.http)?;
        Ok(Self { http, cfg })
    }

    fn append_client(&self, params: &mut Vec<(String, String)>) {
        if let Some(name) = &self.cfg.client_name {
            params.push(("client".to_string(), name.clone()));
        }
    }

    /// GET ?id=...[&client=...]
    pub fn tag_request(&self, id: i64) -> reqwest::RequestBuilder {
        let mut params = vec![("id".to_string(), id.to_string())];
        self.append_client(&mut params);
        self.http.get(self.cfg.endpoint.clone()).query(&params)
    }

    /// GET with the query's parameter set [&client=...]
    pub fn query_request(&self, query: &TagQuery) -> reqwest::RequestBuilder {
        let mut params = query.params();
        self.append_client(&mut params);
        self.http.get(self.cfg.endpoint.clone()).query(&params)
    }

    /// GET ?action=rate&id=...&rating=...
    ///
    /// The client identifier is never sent on rate requests.
    pub fn rate_request(&self, id: i64, rating: u8) -> reqwest::RequestBuilder {
        let params = [
            ("action".to_string(), "rate".to_string()),
            ("id".to_string(), id.to_string()),
            ("rating".to_string(), rating.to_string()),
        ];
        self.http.get(self.cfg.endpoint.clone()).query(&params)
    }

    /// Fetch a single tag by its catalog id.
    ///
    /// The service returns at most one record per id; a zero-record
    /// response surfaces as [`TagError::NoTagsFound`].
    pub async fn get_tag_by_id(&self, id: i64) -> Result<Tag, TagError> {
        debug!(id, "tag.fetch");
        let response = self.tag_request(id).send().await?;
        check_status(response.status())?;
        let body = response.text().await?;

        let tags = decode::decode_tag_list(&body)?;
        match tags.into_iter().next() {
            Some(tag) => {
                info!(id = tag.id, title = %tag.title, "tag.fetch.done");
                Ok(tag)
            }
            None => Err(TagError::NoTagsFound),
        }
    }

    /// Run a search query and interpret its envelope.
    pub async fn query(&self, query: &TagQuery) -> Result<TagQueryResult, TagError> {
        debug!(params = ?query.params(), "tag.query");
        let response = self.query_request(query).send().await?;
        check_status(response.status())?;
        let body = response.text().await?;

        let result = decode::decode_query_result(&body)?;
        info!(
            available = result.available,
            count = result.tags.len(),
            "tag.query.done"
        );
        Ok(result)
    }

    /// Submit a rating for a tag. The service's contract is an integer
    /// from 1 to 5 inclusive; the range is not enforced at this layer.
    ///
    /// Not idempotent: never retried, and callers should not retry it
    /// blindly either.
    pub async fn rate(&self, id: i64, rating: u8) -> Result<(), TagError> {
        debug!(id, rating, "tag.rate");
        let response = self.rate_request(id, rating).send().await?;
        check_status(response.status())?;
        let body = response.text().await?;

        if body == "ok" {
            info!(id, rating, "tag.rate.done");
            Ok(())
        } else {
            Err(TagError::Http(format!("unexpected rate response: {body}")))
        }
    }

    /// Download a remote file's payload into the reference. The payload
    /// transitions unset -> set exactly once; fetching an already-fetched
    /// file is a no-op.
    pub async fn fetch_file(&self, file: &mut RemoteFile) -> Result<(), TagError> {
        if file.is_fetched() {
            debug!(url = %file.url, "file.fetch.cached");
            return Ok(());
        }

        debug!(url = %file.url, "file.fetch");
        let response = self.http.get(file.url.clone()).send().await?;
        check_status(response.status())?;
        let bytes = response.bytes().await?;

        info!(url = %file.url, bytes = bytes.len(), "file.fetch.done");
        file.data = Some(bytes.to_vec());
        Ok(())
    }
}
