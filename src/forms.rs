//! Form Drafts and Validation
//!
//! Editable form state for questions, categories and tags. `validate`
//! normalizes the draft and turns it into the request payload.

use thiserror::Error;

use crate::config::{CATEGORY_NAME_CHARS_LIMIT, CONTENT_CHARS_LIMIT, TAG_NAME_CHARS_LIMIT, TITLE_CHARS_LIMIT};
use crate::models::{Category, CategoryPayload, Question, QuestionPayload, Tag, TagPayload};
use crate::text::normalize_spaces;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} cannot exceed {limit} characters")]
    TooLong { field: &'static str, limit: usize },
}

fn check_length(value: &str, field: &'static str, limit: usize) -> Result<(), FormError> {
    if value.chars().count() > limit {
        return Err(FormError::TooLong { field, limit });
    }
    Ok(())
}

/// Normalized, non-empty name within `limit` characters
pub fn validate_name(raw: &str, field: &'static str, limit: usize) -> Result<String, FormError> {
    let name = normalize_spaces(raw);
    if name.is_empty() {
        return Err(FormError::Required { field });
    }
    check_length(&name, field, limit)?;
    Ok(name)
}

// ========================
// Question
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionDraft {
    pub title: String,
    pub content: String,
    pub category_id: Option<u32>,
    pub tag_ids: Vec<u32>,
}

/// Per-field errors of a rejected question draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionFormErrors {
    pub title: Option<FormError>,
    pub category: Option<FormError>,
    pub content: Option<FormError>,
}

impl QuestionFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.content.is_none()
    }
}

impl QuestionDraft {
    pub fn from_question(question: &Question) -> Self {
        Self {
            title: question.title.clone(),
            content: question.content.clone(),
            category_id: Some(question.category.id),
            tag_ids: question.tags.iter().map(|t| t.id).collect(),
        }
    }

    pub fn toggle_tag(&mut self, tag: &Tag) {
        if let Some(pos) = self.tag_ids.iter().position(|id| *id == tag.id) {
            self.tag_ids.remove(pos);
        } else {
            self.tag_ids.push(tag.id);
        }
    }

    pub fn validate(&self) -> Result<QuestionPayload, QuestionFormErrors> {
        let mut errors = QuestionFormErrors::default();
        let title = validate_name(&self.title, "Title", TITLE_CHARS_LIMIT);
        if let Err(err) = &title {
            errors.title = Some(err.clone());
        }
        if self.category_id.is_none() {
            errors.category = Some(FormError::Required { field: "Category" });
        }
        if let Err(err) = check_length(&self.content, "Content", CONTENT_CHARS_LIMIT) {
            errors.content = Some(err);
        }

        match (title, self.category_id) {
            (Ok(title), Some(category_id)) if errors.is_empty() => Ok(QuestionPayload {
                title,
                content: self.content.clone(),
                category_id,
                tag_ids: self.tag_ids.clone(),
            }),
            _ => Err(errors),
        }
    }
}

// ========================
// Category / Tag
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub parent_id: Option<u32>,
}

impl CategoryDraft {
    pub fn from_category(category: &Category) -> Self {
        Self { name: category.name.clone(), parent_id: category.parent_id() }
    }

    pub fn validate(&self) -> Result<CategoryPayload, FormError> {
        let name = validate_name(&self.name, "Name", CATEGORY_NAME_CHARS_LIMIT)?;
        Ok(CategoryPayload { name, parent_id: self.parent_id })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagDraft {
    pub name: String,
}

impl TagDraft {
    pub fn validate(&self) -> Result<TagPayload, FormError> {
        let name = validate_name(&self.name, "Name", TAG_NAME_CHARS_LIMIT)?;
        Ok(TagPayload { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityRef;

    #[test]
    fn test_question_draft_normalizes_title() {
        let draft = QuestionDraft {
            title: "  What is   ownership? ".into(),
            content: "Body".into(),
            category_id: Some(3),
            tag_ids: vec![1, 2],
        };
        let payload = draft.validate().expect("valid draft");
        assert_eq!(payload.title, "What is ownership?");
        assert_eq!(payload.category_id, 3);
        assert_eq!(payload.tag_ids, vec![1, 2]);
    }

    #[test]
    fn test_question_draft_reports_every_field() {
        let draft = QuestionDraft {
            title: "   ".into(),
            content: "x".repeat(CONTENT_CHARS_LIMIT + 1),
            category_id: None,
            tag_ids: vec![],
        };
        let errors = draft.validate().expect_err("invalid draft");
        assert_eq!(errors.title, Some(FormError::Required { field: "Title" }));
        assert_eq!(errors.category, Some(FormError::Required { field: "Category" }));
        assert_eq!(
            errors.content.map(|e| e.to_string()),
            Some("Content cannot exceed 40000 characters".to_string())
        );
    }

    #[test]
    fn test_title_limit() {
        let mut draft = QuestionDraft { title: "a".repeat(100), category_id: Some(1), ..Default::default() };
        assert!(draft.validate().is_ok());
        draft.title.push('a');
        let errors = draft.validate().expect_err("too long");
        assert_eq!(errors.title, Some(FormError::TooLong { field: "Title", limit: 100 }));
        assert_eq!(errors.category, None);
    }

    #[test]
    fn test_toggle_tag() {
        let mut draft = QuestionDraft::default();
        let tag = Tag { id: 4, name: "async".into() };
        draft.toggle_tag(&tag);
        assert_eq!(draft.tag_ids, vec![4]);
        draft.toggle_tag(&tag);
        assert!(draft.tag_ids.is_empty());
    }

    #[test]
    fn test_from_question() {
        let question = Question {
            id: 1,
            title: "T".into(),
            content: "C".into(),
            created_date: String::new(),
            category: EntityRef { id: 7, name: "Rust".into() },
            tags: vec![Tag { id: 2, name: "traits".into() }],
        };
        let draft = QuestionDraft::from_question(&question);
        assert_eq!(draft.category_id, Some(7));
        assert_eq!(draft.tag_ids, vec![2]);
    }

    #[test]
    fn test_category_and_tag_names() {
        let draft = CategoryDraft { name: " Data   Structures ".into(), parent_id: Some(1) };
        assert_eq!(
            draft.validate(),
            Ok(CategoryPayload { name: "Data Structures".into(), parent_id: Some(1) })
        );
        assert_eq!(TagDraft { name: "".into() }.validate(), Err(FormError::Required { field: "Name" }));
        assert_eq!(
            TagDraft { name: "t".repeat(51) }.validate(),
            Err(FormError::TooLong { field: "Name", limit: 50 })
        );
        assert_eq!(FormError::Required { field: "Name" }.to_string(), "Name is required");
    }
}
