//! Typed HTTP client for the component API.
//!
//! Thin request/response shaping only: every method issues exactly one HTTP
//! call, logs the failure, and propagates it unchanged. No caching, no retry,
//! no deduplication of in-flight requests.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::forms;
use crate::models;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Mirror of the server's response envelope.
#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    #[allow(dead_code)]
    pub status: String,
    pub message: String,
    #[allow(dead_code)]
    pub code: u32,
    #[allow(dead_code)]
    pub id: Option<i32>,
    pub item: Option<T>,
    pub list: Option<Vec<T>>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_components(&self) -> Result<Vec<models::Component>, ApiError> {
        let response = self.http.get(self.url("/components")).send().await?;
        Self::parse_list(response).await
    }

    pub async fn get_component(&self, id: i32) -> Result<models::Component, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/components/{}", id)))
            .send()
            .await?;
        Self::parse_item(response).await
    }

    pub async fn list_components_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<models::Component>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!(
                "/components/category/{}",
                urlencoding::encode(category)
            )))
            .send()
            .await?;
        Self::parse_list(response).await
    }

    pub async fn create_component(
        &self,
        form: &forms::ComponentForm,
    ) -> Result<models::Component, ApiError> {
        let response = self
            .http
            .post(self.url("/components"))
            .json(form)
            .send()
            .await?;
        Self::parse_item(response).await
    }

    pub async fn update_component(
        &self,
        id: i32,
        form: &forms::ComponentUpdateForm,
    ) -> Result<models::Component, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/components/{}", id)))
            .json(form)
            .send()
            .await?;
        Self::parse_item(response).await
    }

    pub async fn delete_component(&self, id: i32) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/components/{}", id)))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    pub async fn create_variant(
        &self,
        component_id: i32,
        form: &forms::VariantForm,
    ) -> Result<models::Variant, ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/components/{}/variants", component_id)))
            .json(form)
            .send()
            .await?;
        Self::parse_item(response).await
    }

    pub async fn update_variant(
        &self,
        component_id: i32,
        variant_id: Uuid,
        form: &forms::VariantUpdateForm,
    ) -> Result<models::Variant, ApiError> {
        let response = self
            .http
            .put(self.url(&format!(
                "/components/{}/variants/{}",
                component_id, variant_id
            )))
            .json(form)
            .send()
            .await?;
        Self::parse_item(response).await
    }

    pub async fn delete_variant(
        &self,
        component_id: i32,
        variant_id: Uuid,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!(
                "/components/{}/variants/{}",
                component_id, variant_id
            )))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    pub async fn list_categories(&self) -> Result<Vec<models::Category>, ApiError> {
        let response = self.http.get(self.url("/categories")).send().await?;
        Self::parse_list(response).await
    }

    pub async fn create_category(&self, name: &str) -> Result<models::Category, ApiError> {
        let form = forms::CategoryForm {
            name: name.to_string(),
        };
        let response = self
            .http
            .post(self.url("/categories"))
            .json(&form)
            .send()
            .await?;
        Self::parse_item(response).await
    }

    pub async fn delete_category(&self, name: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/categories/{}", urlencoding::encode(name))))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    async fn parse_item<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let envelope = response.json::<Envelope<T>>().await?;
        envelope
            .item
            .ok_or_else(|| ApiError::Internal("response carried no item".to_string()))
    }

    async fn parse_list<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Vec<T>, ApiError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let envelope = response.json::<Envelope<T>>().await?;
        Ok(envelope.list.unwrap_or_default())
    }

    async fn expect_no_content(response: reqwest::Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<Envelope<serde_json::Value>>()
            .await
            .map(|envelope| envelope.message)
            .unwrap_or_else(|_| status.to_string());

        tracing::error!("API request failed: {} {}", status, message);

        match status {
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            // The server models "category still in use" as a 400 whose text
            // names the blocking component count.
            StatusCode::BAD_REQUEST if message.contains("used by") => ApiError::Conflict(message),
            StatusCode::BAD_REQUEST => ApiError::Validation(message),
            _ => ApiError::Internal(message),
        }
    }
}
