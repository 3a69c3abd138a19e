//! Frontend Models
//!
//! Data structures matching the REST backend's JSON (camelCase).

use serde::{Deserialize, Serialize};

/// Minimal `{id, name}` reference used inside other entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: u32,
    pub name: String,
}

/// Question data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_date: String,
    pub category: EntityRef,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub parent: Option<EntityRef>,
}

impl Category {
    pub fn parent_id(&self) -> Option<u32> {
        self.parent.as_ref().map(|p| p.id)
    }
}

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

/// Paged list envelope returned by list endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub page_count: u32,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self { data: Vec::new(), page_count: 0 }
    }
}

/// Body of `POST /questions` and `PATCH /questions/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub title: String,
    pub content: String,
    pub category_id: u32,
    pub tag_ids: Vec<u32>,
}

/// Body of category create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub parent_id: Option<u32>,
}

/// Body of tag create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagPayload {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_page_from_backend_json() {
        let json = r#"{
            "data": [{
                "id": 7,
                "title": "What is ownership?",
                "content": "Explain **moves**.",
                "createdDate": "2024-03-15T10:00:00.000Z",
                "category": {"id": 2, "name": "Rust"},
                "tags": [{"id": 1, "name": "memory"}]
            }],
            "pageCount": 4
        }"#;
        let page: Paged<Question> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page_count, 4);
        assert_eq!(page.data[0].category.name, "Rust");
        assert_eq!(page.data[0].created_date, "2024-03-15T10:00:00.000Z");
        assert_eq!(page.data[0].tags[0].name, "memory");
    }

    #[test]
    fn test_catalog_page_without_page_count() {
        let json = r#"{"data": [{"id": 1, "name": "Root", "parent": null}, {"id": 2, "name": "Child", "parent": {"id": 1, "name": "Root"}}]}"#;
        let page: Paged<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page_count, 0);
        assert_eq!(page.data[0].parent_id(), None);
        assert_eq!(page.data[1].parent_id(), Some(1));
    }

    #[test]
    fn test_question_payload_is_camel_case() {
        let payload = QuestionPayload {
            title: "T".into(),
            content: "C".into(),
            category_id: 3,
            tag_ids: vec![1, 2],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["categoryId"], 3);
        assert_eq!(value["tagIds"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_category_payload_null_parent() {
        let payload = CategoryPayload { name: "Root".into(), parent_id: None };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"name":"Root","parentId":null}"#);
    }
}
