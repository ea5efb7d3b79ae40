use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ModelType;

/// Page envelope returned by the remote service when a resource is
/// configured for pagination.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub total: i64,
    pub limit: i64,
    pub skip: i64,
    pub data: Vec<T>,
}

/// Shape of a `find` response: either a page envelope or a bare array,
/// depending on how the remote resource is configured.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Found<T> {
    Page(Paginated<T>),
    List(Vec<T>),
}

impl<T> Found<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            Found::Page(page) => page.data,
            Found::List(records) => records,
        }
    }
}

/// Connection to the remote data service. Cheap to clone; resource bindings
/// share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn resource(&self, model: ModelType) -> Resource {
        Resource {
            http: self.http.clone(),
            url: format!("{}/{}", self.base_url, model.as_str()),
        }
    }
}

/// One named resource on the remote service, exposing the four CRUD verbs.
/// Every call is a direct passthrough: no retry, no caching, and any failure
/// propagates unchanged to the caller.
#[derive(Debug, Clone)]
pub struct Resource {
    http: Client,
    url: String,
}

impl Resource {
    pub async fn find<T: DeserializeOwned>(&self) -> Result<Found<T>> {
        let response = self.http.get(&self.url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn create<T, P>(&self, data: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(&self.url)
            .json(data)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn update<T, P>(&self, id: i64, data: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let response = self
            .http
            .put(format!("{}/{}", self.url, id))
            .json(data)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn remove<T: DeserializeOwned>(&self, id: i64) -> Result<T> {
        let response = self
            .http
            .delete(format!("{}/{}", self.url, id))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
