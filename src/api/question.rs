//! Question Endpoints
//!
//! `/questions` list, detail and CRUD.

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{Paged, Question, QuestionPayload};

/// Parameters of `GET /questions`; also the key the list refetches on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub category_id: String,
}

impl QuestionQuery {
    /// Query pairs sent to the backend; empty filters are omitted
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.per_page.to_string())];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if !self.category_id.is_empty() {
            pairs.push(("categoryId", self.category_id.clone()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn fetch_questions(&self, query: &QuestionQuery) -> Result<Paged<Question>, ApiError> {
        self.get_json("/questions", &query.to_pairs()).await
    }

    pub async fn fetch_question(&self, id: u32) -> Result<Question, ApiError> {
        self.get_json(&format!("/questions/{}", id), &[] as &[(&str, &str)]).await
    }

    pub async fn create_question(&self, payload: &QuestionPayload) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/questions", payload).await
    }

    pub async fn update_question(&self, id: u32, payload: &QuestionPayload) -> Result<(), ApiError> {
        self.send_json(Method::PATCH, &format!("/questions/{}", id), payload).await
    }

    pub async fn delete_question(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/questions/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: &str, category_id: &str) -> QuestionQuery {
        QuestionQuery { page: 2, per_page: 20, search: search.into(), category_id: category_id.into() }
    }

    #[test]
    fn test_pairs_omit_empty_filters() {
        let pairs = query("", "").to_pairs();
        assert_eq!(pairs, vec![("page", "2".to_string()), ("limit", "20".to_string())]);
    }

    #[test]
    fn test_pairs_include_filters() {
        let pairs = query("  borrow checker ", "5").to_pairs();
        assert_eq!(pairs[2], ("search", "borrow checker".to_string()));
        assert_eq!(pairs[3], ("categoryId", "5".to_string()));
    }

    #[test]
    fn test_whitespace_search_is_no_filter() {
        assert_eq!(query("   ", "").to_pairs().len(), 2);
    }
}
