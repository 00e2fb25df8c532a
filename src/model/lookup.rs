//! Read-only queries over a form tree

use super::{Element, Form, Group, Section};

impl Form {
    pub fn find_section(&self, section_id: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.id == section_id)
            .map(|s| s.as_ref())
    }

    /// Find a group anywhere in the form, together with its section id
    pub fn find_group(&self, group_id: &str) -> Option<(&Group, &str)> {
        self.sections.iter().find_map(|section| {
            section
                .groups
                .iter()
                .find(|g| g.id == group_id)
                .map(|g| (g.as_ref(), section.id.as_str()))
        })
    }

    /// Find an element anywhere in the form, together with its group and
    /// section ids
    pub fn find_element(&self, element_id: &str) -> Option<(&Element, &str, &str)> {
        self.sections.iter().find_map(|section| {
            section.groups.iter().find_map(|group| {
                group
                    .elements
                    .iter()
                    .find(|e| e.id == element_id)
                    .map(|e| (e.as_ref(), group.id.as_str(), section.id.as_str()))
            })
        })
    }

    /// Position of a group as (section index, group index)
    pub(crate) fn locate_group(&self, group_id: &str) -> Option<(usize, usize)> {
        self.sections
            .iter()
            .enumerate()
            .find_map(|(si, section)| section.group_index(group_id).map(|gi| (si, gi)))
    }

    /// All ids in document order: form, sections, groups, elements
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = vec![self.id.as_str()];
        for section in &self.sections {
            ids.push(&section.id);
            for group in &section.groups {
                ids.push(&group.id);
                ids.extend(group.elements.iter().map(|e| e.id.as_str()));
            }
        }
        ids
    }
}
