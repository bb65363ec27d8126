use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
    Method,
    StatusCode,
};
use serde::Serialize;

use crate::{config::LocusConfig, LocusApiError};

#[derive(Clone)]
pub struct LocusApi {
    config: LocusConfig,
    client: Arc<Client>,
}

impl std::fmt::Debug for LocusApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocusApi ({})", self.config.base_url)
    }
}

impl LocusApi {
    pub fn new(config: LocusConfig) -> Result<Self, LocusApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        if let Some(key) = &config.api_key {
            let val = HeaderValue::from_str(&format!("Bearer {}", key.reveal()))
                .map_err(|e| LocusApiError::Initialization(e.to_string()))?;
            headers.insert(AUTHORIZATION, val);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| LocusApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &LocusConfig {
        &self.config
    }

    /// Makes a single REST call and returns the response body as text. Only `200 OK` counts as success. Any other
    /// status, including `201` or `202`, becomes [`LocusApiError::QueryError`] carrying the body verbatim.
    pub async fn rest_query<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, LocusApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let response = req.send().await.map_err(|e| LocusApiError::RestResponseError(e.to_string()))?;
        let status = response.status();
        let message = response.text().await.map_err(|e| LocusApiError::RestResponseError(e.to_string()))?;
        if status == StatusCode::OK {
            trace!("REST query successful. {status}");
            Ok(message)
        } else {
            Err(LocusApiError::QueryError { status: status.as_u16(), message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    pub fn send_path(&self) -> String {
        format!("/v1/wallets/{}/send", self.config.wallet_id.as_deref().unwrap_or("null"))
    }

    /// Sends funds from the configured wallet. `transfer` is serialized as the JSON request body.
    pub async fn send<B: Serialize>(&self, transfer: &B) -> Result<String, LocusApiError> {
        let path = self.send_path();
        debug!("Requesting a Locus transfer via {path}");
        let result = self.rest_query(Method::POST, &path, Some(transfer)).await?;
        info!("Locus accepted the transfer");
        Ok(result)
    }
}
