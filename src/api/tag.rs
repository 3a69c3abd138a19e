//! Tag Endpoints

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::config::CATALOG_PAGE_LIMIT;
use crate::models::{Paged, Tag, TagPayload};

impl ApiClient {
    pub async fn fetch_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let query = [("page", 1), ("limit", CATALOG_PAGE_LIMIT)];
        let page: Paged<Tag> = self.get_json("/tags", &query).await?;
        Ok(page.data)
    }

    pub async fn create_tag(&self, payload: &TagPayload) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/tags", payload).await
    }

    pub async fn update_tag(&self, id: u32, payload: &TagPayload) -> Result<(), ApiError> {
        self.send_json(Method::PATCH, &format!("/tags/{}", id), payload).await
    }

    pub async fn delete_tag(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/tags/{}", id)).await
    }
}
