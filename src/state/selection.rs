//! Selection state for the form editor

use crate::model::Form;

/// The kind of entity a selection points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionTarget {
    Section(String),
    Group(String),
    Element(String),
}

/// Currently active section, group or element.
///
/// At most one slot holds an id: selecting into one slot clears the other two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    section: Option<String>,
    group: Option<String>,
    element: Option<String>,
}

impl SelectionState {
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The selected entity, if any
    pub fn target(&self) -> Option<SelectionTarget> {
        if let Some(id) = &self.section {
            return Some(SelectionTarget::Section(id.clone()));
        }
        if let Some(id) = &self.group {
            return Some(SelectionTarget::Group(id.clone()));
        }
        self.element.clone().map(SelectionTarget::Element)
    }

    /// Select a section, or clear only the section slot with `None`
    pub fn set_section(&mut self, id: Option<String>) {
        if id.is_some() {
            self.clear();
        }
        self.section = id;
    }

    /// Select a group, or clear only the group slot with `None`
    pub fn set_group(&mut self, id: Option<String>) {
        if id.is_some() {
            self.clear();
        }
        self.group = id;
    }

    /// Select an element, or clear only the element slot with `None`
    pub fn set_element(&mut self, id: Option<String>) {
        if id.is_some() {
            self.clear();
        }
        self.element = id;
    }

    pub fn select(&mut self, target: SelectionTarget) {
        match target {
            SelectionTarget::Section(id) => self.set_section(Some(id)),
            SelectionTarget::Group(id) => self.set_group(Some(id)),
            SelectionTarget::Element(id) => self.set_element(Some(id)),
        }
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.section = None;
        self.group = None;
        self.element = None;
    }

    pub fn is_empty(&self) -> bool {
        self.section.is_none() && self.group.is_none() && self.element.is_none()
    }

    /// Clear any slot whose id no longer exists in `form`.
    /// Returns true if something was cleared.
    pub fn retain_existing(&mut self, form: &Form) -> bool {
        let before = self.clone();
        if self
            .section
            .as_deref()
            .is_some_and(|id| form.find_section(id).is_none())
        {
            self.section = None;
        }
        if self
            .group
            .as_deref()
            .is_some_and(|id| form.find_group(id).is_none())
        {
            self.group = None;
        }
        if self
            .element
            .as_deref()
            .is_some_and(|id| form.find_element(id).is_none())
        {
            self.element = None;
        }
        *self != before
    }
}
