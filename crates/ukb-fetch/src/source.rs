//! Where schema pages and exports come from.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};

/// Source of the download page and schema exports.
pub trait SchemaSource {
    /// HTML of the page listing every schema.
    fn index(&self) -> Result<String>;

    /// Raw tab-separated export of one schema.
    fn download(&self, schema_id: u32) -> Result<Vec<u8>>;
}

/// Blocking HTTP source for the live Showcase.
pub struct HttpSchemaSource {
    client: Client,
    config: FetchConfig,
}

impl HttpSchemaSource {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        debug!(url, "GET");
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }
}

impl SchemaSource for HttpSchemaSource {
    fn index(&self) -> Result<String> {
        Ok(self.get(&self.config.index_url())?.text()?)
    }

    fn download(&self, schema_id: u32) -> Result<Vec<u8>> {
        Ok(self
            .get(&self.config.download_url(schema_id))?
            .bytes()?
            .to_vec())
    }
}
