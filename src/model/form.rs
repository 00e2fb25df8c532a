//! Form, section and group types

use super::element::Element;
use super::new_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Column layout of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupLayout {
    #[default]
    Single,
    TwoColumn,
    ThreeColumn,
    FourColumn,
}

impl GroupLayout {
    pub fn columns(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::TwoColumn => 2,
            Self::ThreeColumn => 3,
            Self::FourColumn => 4,
        }
    }
}

/// Mid-level container of elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub layout: GroupLayout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(default)]
    pub elements: Vec<Arc<Element>>,
}

impl Group {
    /// Empty single-column group
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id("group"),
            title: title.into(),
            description: Some(String::new()),
            layout: GroupLayout::Single,
            alignment: None,
            align_items: None,
            justify_content: None,
            elements: Vec::new(),
        }
    }

    pub fn element_index(&self, element_id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == element_id)
    }
}

/// Top-level container of groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    pub groups: Vec<Arc<Group>>,
}

impl Section {
    /// Section holding a single empty group titled "Group 1"
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id("section"),
            title: title.into(),
            description: Some(String::new()),
            alignment: None,
            align_items: None,
            justify_content: None,
            groups: vec![Arc::new(Group::new("Group 1"))],
        }
    }

    pub fn group_index(&self, group_id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.id == group_id)
    }
}

/// Root of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: Vec<Arc<Section>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// Fresh "Untitled Form" with one section holding one empty group
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: new_id("form"),
            title: "Untitled Form".to_string(),
            description: Some(String::new()),
            sections: vec![Arc::new(Section::new("Section 1"))],
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy of this form with `updated_at` set to `at`
    pub fn touched(&self, at: DateTime<Utc>) -> Self {
        Self {
            updated_at: at,
            ..self.clone()
        }
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    pub fn element_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.groups.iter())
            .map(|g| g.elements.len())
            .sum()
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update of the form's own fields.
///
/// In every patch an optional target field takes `Some(None)` to clear it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
}

impl FormPatch {
    pub fn apply(&self, form: &Form) -> Form {
        let mut next = form.clone();
        merge(&mut next.title, &self.title);
        merge_opt(&mut next.description, &self.description);
        next
    }
}

/// Partial update of a section; children are never touched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub alignment: Option<Option<String>>,
    pub align_items: Option<Option<String>>,
    pub justify_content: Option<Option<String>>,
}

impl SectionPatch {
    pub fn apply(&self, section: &Section) -> Section {
        let mut next = section.clone();
        merge(&mut next.title, &self.title);
        merge_opt(&mut next.description, &self.description);
        merge_opt(&mut next.alignment, &self.alignment);
        merge_opt(&mut next.align_items, &self.align_items);
        merge_opt(&mut next.justify_content, &self.justify_content);
        next
    }
}

/// Partial update of a group; children are never touched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub layout: Option<GroupLayout>,
    pub alignment: Option<Option<String>>,
    pub align_items: Option<Option<String>>,
    pub justify_content: Option<Option<String>>,
}

impl GroupPatch {
    pub fn apply(&self, group: &Group) -> Group {
        let mut next = group.clone();
        merge(&mut next.title, &self.title);
        merge_opt(&mut next.description, &self.description);
        if let Some(layout) = self.layout {
            next.layout = layout;
        }
        merge_opt(&mut next.alignment, &self.alignment);
        merge_opt(&mut next.align_items, &self.align_items);
        merge_opt(&mut next.justify_content, &self.justify_content);
        next
    }
}

fn merge(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

fn merge_opt(target: &mut Option<String>, value: &Option<Option<String>>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}
