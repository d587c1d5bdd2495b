use crate::domain::model::{Employee, EmployeeCreateRequest, EmployeeListResponse, EmployeeResponse};
use crate::domain::ports::EmployeeSource;
use crate::utils::error::{FacadeError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8112/api/v1";

/// `EmployeeSource` backed by the downstream REST API at `{base}/employee`.
#[derive(Debug, Clone)]
pub struct HttpEmployeeSource {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = validate_url("downstream.base_url", base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FacadeError::config(format!(
                "Downstream URL cannot be used as a base: {}",
                base_url
            )));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/employee/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FacadeError::config(format!("Invalid downstream base URL: {}", self.base_url)))?
            .pop_if_empty()
            .push("employee")
            .extend(segments);
        Ok(url)
    }

    async fn get_list(&self, url: Url) -> Result<Option<Vec<Employee>>> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let envelope: Option<EmployeeListResponse> = decode_envelope(response).await?;
        Ok(envelope.and_then(|e| e.data))
    }
}

/// Reads a JSON envelope, treating an empty or `null` body as absent.
async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<T>>(&body)?)
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn fetch_all(&self) -> Result<Option<Vec<Employee>>> {
        let url = self.endpoint(&[])?;
        self.get_list(url).await
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Option<Vec<Employee>>> {
        let url = self.endpoint(&["search", fragment])?;
        self.get_list(url).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>> {
        let url = self.endpoint(&[id])?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let envelope: Option<EmployeeResponse> = decode_envelope(response).await?;
        Ok(envelope.and_then(|e| e.data))
    }

    async fn create(&self, request: &EmployeeCreateRequest) -> Result<Option<Employee>> {
        let url = self.endpoint(&[])?;
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let envelope: Option<EmployeeResponse> = decode_envelope(response).await?;
        Ok(envelope.and_then(|e| e.data))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&[id])?;
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;

        // The body and status are not part of the contract; a missing
        // employee is indistinguishable from a deleted one.
        if !response.status().is_success() {
            tracing::warn!(
                "Downstream answered DELETE for ID {} with status {}",
                id,
                response.status()
            );
        }
        Ok(())
    }
}
