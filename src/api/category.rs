//! Category Endpoints

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::config::CATALOG_PAGE_LIMIT;
use crate::models::{Category, CategoryPayload, Paged};

impl ApiClient {
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let query = [("page", 1), ("limit", CATALOG_PAGE_LIMIT)];
        let page: Paged<Category> = self.get_json("/categories", &query).await?;
        Ok(page.data)
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/categories", payload).await
    }

    pub async fn update_category(&self, id: u32, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.send_json(Method::PATCH, &format!("/categories/{}", id), payload).await
    }

    pub async fn delete_category(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/categories/{}", id)).await
    }
}
