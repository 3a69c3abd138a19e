//! UI Components
//!
//! Leptos components for the question list, detail and settings views.

mod category_list;
mod category_select;
mod dialog;
mod filter_panel;
mod header;
mod pagination;
mod question_detail;
mod question_editor_form;
mod question_items;
mod question_list;
mod question_meta;
mod tag_list;
mod tag_picker;

pub use category_list::CategoryList;
pub use category_select::CategorySelect;
pub use dialog::{ConfirmDialog, Dialog};
pub use filter_panel::QuestionsFilterPanel;
pub use header::Header;
pub use pagination::Pagination;
pub use question_detail::QuestionDetail;
pub use question_editor_form::QuestionEditorForm;
pub use question_items::QuestionItemsList;
pub use question_list::QuestionList;
pub use question_meta::QuestionMeta;
pub use tag_list::TagList;
pub use tag_picker::TagPicker;
