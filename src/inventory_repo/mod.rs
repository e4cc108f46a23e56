// Interface inventory via the IP Fabric table API

mod filters;

pub use filters::{Condition, EXCLUDE_INTF_NAME, Filters, INTERFACE_COLUMNS};

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::models::InterfaceRecord;
use crate::version::{NAME, VERSION};

/// Longest error body kept in `InventoryError::Status`.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("API token is not a valid header value")]
    InvalidToken,
    #[error("inventory request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inventory API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decoding inventory response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of interface rows. Filtering happens on the source side.
pub trait InventorySource {
    /// Matching row count, or `None` when the source does not report one.
    fn count(
        &self,
        filters: &Filters,
    ) -> impl Future<Output = Result<Option<u64>, InventoryError>> + Send;

    fn all(
        &self,
        columns: &[&str],
        filters: &Filters,
    ) -> impl Future<Output = Result<Vec<InterfaceRecord>, InventoryError>> + Send;
}

#[derive(Serialize)]
struct TableRequest<'a> {
    columns: &'a [&'a str],
    filters: &'a Filters,
    snapshot: &'a str,
    pagination: Pagination,
}

#[derive(Serialize)]
struct Pagination {
    start: u64,
    limit: u32,
}

#[derive(Deserialize)]
struct TablePage<T> {
    data: Vec<T>,
    #[serde(rename = "_meta", default)]
    meta: PageMeta,
}

#[derive(Deserialize, Default)]
struct PageMeta {
    count: Option<u64>,
}

pub struct IpfClient {
    http: reqwest::Client,
    endpoint: String,
    snapshot: String,
    page_size: u32,
}

impl IpfClient {
    pub fn new(api: &ApiConfig) -> Result<Self, InventoryError> {
        let mut token =
            HeaderValue::from_str(&api.token).map_err(|_| InventoryError::InvalidToken)?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert("x-api-token", token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!("{NAME}/{VERSION}"))
            .timeout(Duration::from_secs(api.timeout_secs))
            .danger_accept_invalid_certs(!api.verify_tls)
            .build()?;

        let endpoint = format!(
            "{}/api/{}/tables/inventory/interfaces",
            api.base_url.trim_end_matches('/'),
            api.api_version
        );

        Ok(Self {
            http,
            endpoint,
            snapshot: api.snapshot.clone(),
            page_size: api.page_size,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_page<T>(
        &self,
        columns: &[&str],
        filters: &Filters,
        start: u64,
        limit: u32,
    ) -> Result<TablePage<T>, InventoryError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let body = TableRequest {
            columns,
            filters,
            snapshot: &self.snapshot,
            pagination: Pagination { start, limit },
        };
        let resp = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let mut body = resp.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut end = MAX_ERROR_BODY;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            return Err(InventoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl InventorySource for IpfClient {
    async fn count(&self, filters: &Filters) -> Result<Option<u64>, InventoryError> {
        // limit = 1, so only `_meta.count` says anything about the total
        let page: TablePage<serde_json::Value> = self.fetch_page(&["id"], filters, 0, 1).await?;
        Ok(page.meta.count)
    }

    async fn all(
        &self,
        columns: &[&str],
        filters: &Filters,
    ) -> Result<Vec<InterfaceRecord>, InventoryError> {
        let mut rows = Vec::new();
        let mut start = 0u64;

        loop {
            let page: TablePage<InterfaceRecord> = self
                .fetch_page(columns, filters, start, self.page_size)
                .await?;
            let got = page.data.len() as u64;
            rows.extend(page.data);
            start += got;
            debug!(fetched = start, total = ?page.meta.count, "inventory page");

            let short_page = got < u64::from(self.page_size);
            let reached_total = page.meta.count.is_some_and(|total| start >= total);
            if short_page || reached_total {
                break;
            }
        }

        Ok(rows)
    }
}
