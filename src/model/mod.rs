//! Form document model
//!
//! The form is a tree (Form → Section → Group → Element) whose children are
//! held behind `Arc`. Every structural operation returns a new `Form` that
//! shares all untouched subtrees with its input, so snapshots handed to the
//! history or the autosave task never change underneath them.

mod element;
mod form;
mod lookup;
mod ops;

pub use element::{
    DisplayConfig, DisplayLayout, Element, ElementKind, ElementPatch, ElementType, FileConfig,
    FontSize, FontWeight, TableConfig, TextConfig,
};
pub use form::{Form, FormPatch, Group, GroupLayout, GroupPatch, Section, SectionPatch};

use uuid::Uuid;

/// Generate a fresh identifier of the form `<prefix>-<uuid>`
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
