//! Structural operations on the form tree
//!
//! Each operation takes `&self` and returns a new `Form`. Only the path from
//! the root to the changed node is copied; every other subtree is shared with
//! the input through its `Arc`. Operations that would break a structural rule
//! (removing the last section, or the last group of a section), name an id
//! that is not in the tree, or use an out-of-range index return an unchanged
//! copy of the input.

use super::{
    Element, ElementPatch, ElementType, Form, FormPatch, Group, GroupPatch, Section, SectionPatch,
};
use std::sync::Arc;
use tracing::debug;

/// Remove the item at `from` and reinsert it at `to` in the shortened list
fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= items.len() || to >= items.len() {
        return None;
    }
    let mut next = items.to_vec();
    let item = next.remove(from);
    next.insert(to, item);
    Some(next)
}

impl Section {
    fn with_groups(&self, groups: Vec<Arc<Group>>) -> Section {
        Section {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            alignment: self.alignment.clone(),
            align_items: self.align_items.clone(),
            justify_content: self.justify_content.clone(),
            groups,
        }
    }

    fn with_group(&self, index: usize, group: Group) -> Section {
        let mut groups = self.groups.clone();
        groups[index] = Arc::new(group);
        self.with_groups(groups)
    }
}

impl Group {
    fn with_elements(&self, elements: Vec<Arc<Element>>) -> Group {
        Group {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            layout: self.layout,
            alignment: self.alignment.clone(),
            align_items: self.align_items.clone(),
            justify_content: self.justify_content.clone(),
            elements,
        }
    }
}

impl Form {
    fn with_sections(&self, sections: Vec<Arc<Section>>) -> Form {
        Form {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            sections,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn with_section(&self, index: usize, section: Section) -> Form {
        let mut sections = self.sections.clone();
        sections[index] = Arc::new(section);
        self.with_sections(sections)
    }

    /// Apply `edit` to the group at `group_id` inside `section_id`
    fn edit_group(
        &self,
        group_id: &str,
        section_id: &str,
        edit: impl FnOnce(&Group) -> Option<Group>,
    ) -> Form {
        let Some(si) = self.section_index(section_id) else {
            debug!("Section {section_id} not found");
            return self.clone();
        };
        let section = &self.sections[si];
        let Some(gi) = section.group_index(group_id) else {
            debug!("Group {group_id} not found in section {section_id}");
            return self.clone();
        };
        match edit(section.groups[gi].as_ref()) {
            Some(group) => self.with_section(si, section.with_group(gi, group)),
            None => self.clone(),
        }
    }

    pub fn update_form(&self, patch: &FormPatch) -> Form {
        let next = patch.apply(self);
        if next == *self {
            return self.clone();
        }
        next
    }

    // Sections

    /// Append "Section N" holding one default group
    pub fn add_section(&self) -> Form {
        let mut group = Group::new("Group 1");
        group.align_items = Some("stretch".to_string());

        let mut section = Section::new(format!("Section {}", self.sections.len() + 1));
        section.align_items = Some("stretch".to_string());
        section.groups = vec![Arc::new(group)];

        let mut sections = self.sections.clone();
        sections.push(Arc::new(section));
        self.with_sections(sections)
    }

    pub fn remove_section(&self, section_id: &str) -> Form {
        if self.sections.len() <= 1 {
            debug!("Refusing to remove the only section {section_id}");
            return self.clone();
        }
        let Some(index) = self.section_index(section_id) else {
            debug!("Section {section_id} not found");
            return self.clone();
        };
        let mut sections = self.sections.clone();
        sections.remove(index);
        self.with_sections(sections)
    }

    pub fn update_section(&self, section_id: &str, patch: &SectionPatch) -> Form {
        let Some(index) = self.section_index(section_id) else {
            debug!("Section {section_id} not found");
            return self.clone();
        };
        let section = &self.sections[index];
        let next = patch.apply(section);
        if next == **section {
            return self.clone();
        }
        self.with_section(index, next)
    }

    pub fn move_section(&self, from: usize, to: usize) -> Form {
        if from == to {
            return self.clone();
        }
        match reorder(&self.sections, from, to) {
            Some(sections) => self.with_sections(sections),
            None => {
                debug!(
                    "Section move {from} -> {to} out of range ({} sections)",
                    self.sections.len()
                );
                self.clone()
            }
        }
    }

    // Groups

    /// Append "Group N" to a section
    pub fn add_group(&self, section_id: &str) -> Form {
        let Some(index) = self.section_index(section_id) else {
            debug!("Section {section_id} not found");
            return self.clone();
        };
        let section = &self.sections[index];
        let mut group = Group::new(format!("Group {}", section.groups.len() + 1));
        group.align_items = Some("stretch".to_string());

        let mut groups = section.groups.clone();
        groups.push(Arc::new(group));
        self.with_section(index, section.with_groups(groups))
    }

    pub fn remove_group(&self, group_id: &str, section_id: &str) -> Form {
        let Some(si) = self.section_index(section_id) else {
            debug!("Section {section_id} not found");
            return self.clone();
        };
        let section = &self.sections[si];
        if section.groups.len() <= 1 {
            debug!("Refusing to remove the only group of section {section_id}");
            return self.clone();
        }
        let Some(gi) = section.group_index(group_id) else {
            debug!("Group {group_id} not found in section {section_id}");
            return self.clone();
        };
        let mut groups = section.groups.clone();
        groups.remove(gi);
        self.with_section(si, section.with_groups(groups))
    }

    pub fn update_group(&self, group_id: &str, section_id: &str, patch: &GroupPatch) -> Form {
        self.edit_group(group_id, section_id, |group| {
            let next = patch.apply(group);
            (next != *group).then_some(next)
        })
    }

    /// Move a group within a section or into another section.
    ///
    /// A cross-section move inserts at `to` in the target (which may equal the
    /// target's length) and is refused when it would empty the source.
    pub fn move_group(
        &self,
        from: usize,
        to: usize,
        source_section_id: &str,
        target_section_id: &str,
    ) -> Form {
        let Some(si) = self.section_index(source_section_id) else {
            debug!("Section {source_section_id} not found");
            return self.clone();
        };
        let source = &self.sections[si];

        if source_section_id == target_section_id {
            if from == to {
                return self.clone();
            }
            return match reorder(&source.groups, from, to) {
                Some(groups) => self.with_section(si, source.with_groups(groups)),
                None => {
                    debug!("Group move {from} -> {to} out of range in {source_section_id}");
                    self.clone()
                }
            };
        }

        let Some(ti) = self.section_index(target_section_id) else {
            debug!("Section {target_section_id} not found");
            return self.clone();
        };
        let target = &self.sections[ti];
        if from >= source.groups.len() || to > target.groups.len() {
            debug!("Group move {from} -> {to} out of range");
            return self.clone();
        }
        if source.groups.len() == 1 {
            debug!("Refusing to move the only group out of section {source_section_id}");
            return self.clone();
        }

        let mut source_groups = source.groups.clone();
        let moved = source_groups.remove(from);
        let mut target_groups = target.groups.clone();
        target_groups.insert(to, moved);

        let mut sections = self.sections.clone();
        sections[si] = Arc::new(source.with_groups(source_groups));
        sections[ti] = Arc::new(target.with_groups(target_groups));
        self.with_sections(sections)
    }

    // Elements

    /// Append a new element of `element_type` with its type's defaults
    pub fn add_element(&self, element_type: ElementType, group_id: &str, section_id: &str) -> Form {
        self.edit_group(group_id, section_id, |group| {
            let mut elements = group.elements.clone();
            elements.push(Arc::new(Element::new(element_type)));
            Some(group.with_elements(elements))
        })
    }

    pub fn remove_element(&self, element_id: &str, group_id: &str, section_id: &str) -> Form {
        self.edit_group(group_id, section_id, |group| {
            let Some(index) = group.element_index(element_id) else {
                debug!("Element {element_id} not found in group {group_id}");
                return None;
            };
            let mut elements = group.elements.clone();
            elements.remove(index);
            Some(group.with_elements(elements))
        })
    }

    pub fn update_element(
        &self,
        element_id: &str,
        group_id: &str,
        section_id: &str,
        patch: &ElementPatch,
    ) -> Form {
        self.edit_group(group_id, section_id, |group| {
            let Some(index) = group.element_index(element_id) else {
                debug!("Element {element_id} not found in group {group_id}");
                return None;
            };
            let current = &group.elements[index];
            let next = patch.apply(current);
            if next == **current {
                return None;
            }
            let mut elements = group.elements.clone();
            elements[index] = Arc::new(next);
            Some(group.with_elements(elements))
        })
    }

    /// Move an element within a group or into another group (in any section).
    ///
    /// A cross-group move inserts at `to` in the target, which may equal the
    /// target's length.
    pub fn move_element(
        &self,
        from: usize,
        to: usize,
        source_group_id: &str,
        target_group_id: &str,
    ) -> Form {
        let Some((si, gi)) = self.locate_group(source_group_id) else {
            debug!("Group {source_group_id} not found");
            return self.clone();
        };
        let source = &self.sections[si].groups[gi];

        if source_group_id == target_group_id {
            if from == to {
                return self.clone();
            }
            return match reorder(&source.elements, from, to) {
                Some(elements) => self.with_section(
                    si,
                    self.sections[si].with_group(gi, source.with_elements(elements)),
                ),
                None => {
                    debug!("Element move {from} -> {to} out of range in {source_group_id}");
                    self.clone()
                }
            };
        }

        let Some((ti, tg)) = self.locate_group(target_group_id) else {
            debug!("Group {target_group_id} not found");
            return self.clone();
        };
        let target = &self.sections[ti].groups[tg];
        if from >= source.elements.len() || to > target.elements.len() {
            debug!("Element move {from} -> {to} out of range");
            return self.clone();
        }

        let mut source_elements = source.elements.clone();
        let moved = source_elements.remove(from);
        let mut target_elements = target.elements.clone();
        target_elements.insert(to, moved);
        let source = source.with_elements(source_elements);
        let target = target.with_elements(target_elements);

        // When both groups share a section the second write sees the first
        let mut sections = self.sections.clone();
        sections[si] = Arc::new(sections[si].with_group(gi, source));
        sections[ti] = Arc::new(sections[ti].with_group(tg, target));
        self.with_sections(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupLayout;
    use pretty_assertions::assert_eq;

    fn ids<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
        items.into_iter().map(|s| s.as_ref().to_string()).collect()
    }

    fn section_ids(form: &Form) -> Vec<String> {
        ids(form.sections.iter().map(|s| s.id.clone()))
    }

    fn element_ids(group: &Group) -> Vec<String> {
        ids(group.elements.iter().map(|e| e.id.clone()))
    }

    /// Default form whose only group holds `count` text elements
    fn form_with_elements(count: usize) -> Form {
        let mut form = Form::new();
        let section_id = form.sections[0].id.clone();
        let group_id = form.sections[0].groups[0].id.clone();
        for _ in 0..count {
            form = form.add_element(ElementType::Text, &group_id, &section_id);
        }
        form
    }

    mod reorder_helper {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_back_to_front() {
            assert_eq!(reorder(&[0, 1, 2, 3], 2, 0), Some(vec![2, 0, 1, 3]));
        }

        #[test]
        fn test_move_front_to_back() {
            assert_eq!(reorder(&[0, 1, 2, 3], 0, 3), Some(vec![1, 2, 3, 0]));
        }

        #[test]
        fn test_forward_move_is_not_a_swap() {
            assert_eq!(reorder(&[0, 1, 2, 3], 1, 2), Some(vec![0, 2, 1, 3]));
        }

        #[test]
        fn test_out_of_range() {
            assert_eq!(reorder(&[0, 1], 2, 0), None);
            assert_eq!(reorder(&[0, 1], 0, 2), None);
            assert_eq!(reorder::<u8>(&[], 0, 0), None);
        }
    }

    mod sections {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_section_appends_numbered_section() {
            let form = Form::new().add_section();
            assert_eq!(form.sections.len(), 2);
            let added = &form.sections[1];
            assert_eq!(added.title, "Section 2");
            assert_eq!(added.align_items.as_deref(), Some("stretch"));
            assert_eq!(added.groups.len(), 1);
            assert_eq!(added.groups[0].title, "Group 1");
            assert!(added.groups[0].elements.is_empty());
        }

        #[test]
        fn test_add_section_shares_existing_sections() {
            let form = Form::new();
            let next = form.add_section();
            assert!(Arc::ptr_eq(&form.sections[0], &next.sections[0]));
        }

        #[test]
        fn test_remove_only_section_is_noop() {
            let form = Form::new();
            let id = form.sections[0].id.clone();
            assert_eq!(form.remove_section(&id), form);
        }

        #[test]
        fn test_remove_section() {
            let form = Form::new().add_section().add_section();
            let removed = form.sections[1].id.clone();
            let next = form.remove_section(&removed);
            assert_eq!(next.sections.len(), 2);
            assert!(next.find_section(&removed).is_none());
            assert!(Arc::ptr_eq(&form.sections[2], &next.sections[1]));
        }

        #[test]
        fn test_remove_unknown_section_is_noop() {
            let form = Form::new().add_section();
            assert_eq!(form.remove_section("section-missing"), form);
        }

        #[test]
        fn test_update_section_touches_one_section() {
            let form = Form::new().add_section();
            let id = form.sections[1].id.clone();
            let patch = SectionPatch {
                title: Some("Details".to_string()),
                ..Default::default()
            };
            let next = form.update_section(&id, &patch);
            assert_eq!(next.sections[1].title, "Details");
            assert!(Arc::ptr_eq(&form.sections[0], &next.sections[0]));
            assert!(Arc::ptr_eq(&form.sections[1].groups[0], &next.sections[1].groups[0]));
        }

        #[test]
        fn test_update_section_with_same_values_keeps_arc() {
            let form = Form::new();
            let section = &form.sections[0];
            let patch = SectionPatch {
                title: Some(section.title.clone()),
                ..Default::default()
            };
            let next = form.update_section(&section.id, &patch);
            assert!(Arc::ptr_eq(&form.sections[0], &next.sections[0]));
        }

        #[test]
        fn test_move_section() {
            let form = Form::new().add_section().add_section();
            let before = section_ids(&form);
            let next = form.move_section(0, 2);
            assert_eq!(
                section_ids(&next),
                vec![before[1].clone(), before[2].clone(), before[0].clone()]
            );
        }

        #[test]
        fn test_move_section_out_of_range_is_noop() {
            let form = Form::new().add_section();
            assert_eq!(form.move_section(0, 5), form);
            assert_eq!(form.move_section(7, 0), form);
        }
    }

    mod groups {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_group_numbers_within_section() {
            let form = Form::new();
            let section_id = form.sections[0].id.clone();
            let next = form.add_group(&section_id).add_group(&section_id);
            let titles: Vec<_> = next.sections[0].groups.iter().map(|g| g.title.clone()).collect();
            assert_eq!(titles, vec!["Group 1", "Group 2", "Group 3"]);
            assert_eq!(next.sections[0].groups[1].layout, GroupLayout::Single);
        }

        #[test]
        fn test_add_group_to_unknown_section_is_noop() {
            let form = Form::new();
            assert_eq!(form.add_group("section-missing"), form);
        }

        #[test]
        fn test_remove_last_group_is_noop() {
            let form = Form::new();
            let section = &form.sections[0];
            assert_eq!(form.remove_group(&section.groups[0].id, &section.id), form);
        }

        #[test]
        fn test_remove_group() {
            let form = Form::new();
            let section_id = form.sections[0].id.clone();
            let form = form.add_group(&section_id);
            let removed = form.sections[0].groups[0].id.clone();
            let next = form.remove_group(&removed, &section_id);
            assert_eq!(next.sections[0].groups.len(), 1);
            assert_eq!(next.sections[0].groups[0].title, "Group 2");
        }

        #[test]
        fn test_update_group() {
            let form = Form::new();
            let section = &form.sections[0];
            let patch = GroupPatch {
                layout: Some(GroupLayout::TwoColumn),
                description: Some(Some("Contact details".to_string())),
                ..Default::default()
            };
            let next = form.update_group(&section.groups[0].id, &section.id, &patch);
            let group = &next.sections[0].groups[0];
            assert_eq!(group.layout, GroupLayout::TwoColumn);
            assert_eq!(group.description.as_deref(), Some("Contact details"));
        }

        #[test]
        fn test_update_group_in_wrong_section_is_noop() {
            let form = Form::new().add_section();
            let group_id = form.sections[0].groups[0].id.clone();
            let other_section = form.sections[1].id.clone();
            let patch = GroupPatch {
                title: Some("X".to_string()),
                ..Default::default()
            };
            assert_eq!(form.update_group(&group_id, &other_section, &patch), form);
        }

        #[test]
        fn test_move_group_within_section() {
            let form = Form::new();
            let section_id = form.sections[0].id.clone();
            let form = form.add_group(&section_id).add_group(&section_id);
            let next = form.move_group(2, 0, &section_id, &section_id);
            let titles: Vec<_> = next.sections[0].groups.iter().map(|g| g.title.clone()).collect();
            assert_eq!(titles, vec!["Group 3", "Group 1", "Group 2"]);
        }

        #[test]
        fn test_move_group_across_sections() {
            let form = Form::new().add_section();
            let a = form.sections[0].id.clone();
            let b = form.sections[1].id.clone();
            let form = form.add_group(&a);
            let moved = form.sections[0].groups[1].id.clone();

            let next = form.move_group(1, 0, &a, &b);
            assert_eq!(next.sections[0].groups.len(), 1);
            assert_eq!(next.sections[1].groups.len(), 2);
            assert_eq!(next.sections[1].groups[0].id, moved);
            assert!(Arc::ptr_eq(&form.sections[0].groups[1], &next.sections[1].groups[0]));
        }

        #[test]
        fn test_move_group_to_end_of_other_section() {
            let form = Form::new().add_section();
            let a = form.sections[0].id.clone();
            let b = form.sections[1].id.clone();
            let form = form.add_group(&a);
            let next = form.move_group(0, 1, &a, &b);
            assert_eq!(next.sections[1].groups.len(), 2);
            assert_eq!(next.sections[1].groups[1].id, form.sections[0].groups[0].id);
        }

        #[test]
        fn test_move_only_group_out_of_section_is_refused() {
            let form = Form::new().add_section();
            let a = form.sections[0].id.clone();
            let b = form.sections[1].id.clone();
            assert_eq!(form.move_group(0, 0, &a, &b), form);
        }

        #[test]
        fn test_move_group_out_of_range_is_noop() {
            let form = Form::new().add_section();
            let a = form.sections[0].id.clone();
            let b = form.sections[1].id.clone();
            let form = form.add_group(&a);
            assert_eq!(form.move_group(5, 0, &a, &b), form);
            assert_eq!(form.move_group(0, 9, &a, &b), form);
            assert_eq!(form.move_group(0, 2, &a, &a), form);
        }
    }

    mod elements {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_element_appends_with_defaults() {
            let form = form_with_elements(0);
            let section_id = form.sections[0].id.clone();
            let group_id = form.sections[0].groups[0].id.clone();
            let next = form.add_element(ElementType::Text, &group_id, &section_id);

            let element = &next.sections[0].groups[0].elements[0];
            assert_eq!(element.label, "Text Input Field");
            assert_eq!(element.placeholder.as_deref(), Some("Enter value..."));
            assert!(!element.required);
        }

        #[test]
        fn test_add_element_to_unknown_group_is_noop() {
            let form = form_with_elements(1);
            let section_id = form.sections[0].id.clone();
            assert_eq!(form.add_element(ElementType::Date, "group-missing", &section_id), form);
        }

        #[test]
        fn test_remove_element() {
            let form = form_with_elements(3);
            let section_id = form.sections[0].id.clone();
            let group = &form.sections[0].groups[0];
            let before = element_ids(group);

            let next = form.remove_element(&before[1], &group.id, &section_id);
            assert_eq!(
                element_ids(&next.sections[0].groups[0]),
                vec![before[0].clone(), before[2].clone()]
            );
        }

        #[test]
        fn test_remove_unknown_element_is_noop() {
            let form = form_with_elements(2);
            let section_id = form.sections[0].id.clone();
            let group_id = form.sections[0].groups[0].id.clone();
            assert_eq!(form.remove_element("element-x", &group_id, &section_id), form);
        }

        #[test]
        fn test_update_element() {
            let form = form_with_elements(2);
            let section_id = form.sections[0].id.clone();
            let group = &form.sections[0].groups[0];
            let target = group.elements[1].id.clone();
            let patch = ElementPatch {
                label: Some("Full name".to_string()),
                required: Some(true),
                ..Default::default()
            };

            let next = form.update_element(&target, &group.id, &section_id, &patch);
            let elements = &next.sections[0].groups[0].elements;
            assert_eq!(elements[1].label, "Full name");
            assert!(elements[1].required);
            assert!(Arc::ptr_eq(&group.elements[0], &elements[0]));
        }

        #[test]
        fn test_move_element_within_group() {
            let form = form_with_elements(4);
            let group = &form.sections[0].groups[0];
            let before = element_ids(group);

            let next = form.move_element(2, 0, &group.id, &group.id);
            assert_eq!(
                element_ids(&next.sections[0].groups[0]),
                vec![
                    before[2].clone(),
                    before[0].clone(),
                    before[1].clone(),
                    before[3].clone()
                ]
            );
        }

        #[test]
        fn test_move_element_same_index_is_noop() {
            let form = form_with_elements(2);
            let group_id = form.sections[0].groups[0].id.clone();
            assert_eq!(form.move_element(1, 1, &group_id, &group_id), form);
        }

        #[test]
        fn test_move_element_across_groups() {
            let form = form_with_elements(2);
            let section_id = form.sections[0].id.clone();
            let form = form.add_group(&section_id);
            let source = form.sections[0].groups[0].id.clone();
            let target = form.sections[0].groups[1].id.clone();
            let moved = form.sections[0].groups[0].elements[0].id.clone();

            let next = form.move_element(0, 0, &source, &target);
            assert_eq!(next.sections[0].groups[0].elements.len(), 1);
            assert_eq!(element_ids(&next.sections[0].groups[1]), vec![moved]);
        }

        #[test]
        fn test_move_element_into_earlier_section() {
            let form = Form::new().add_section();
            let first_group = form.sections[0].groups[0].id.clone();
            let second_section = form.sections[1].id.clone();
            let second_group = form.sections[1].groups[0].id.clone();
            let form = form
                .add_element(ElementType::Tel, &second_group, &second_section)
                .add_element(ElementType::Email, &second_group, &second_section);
            let moved = form.sections[1].groups[0].elements[1].id.clone();

            let next = form.move_element(1, 0, &second_group, &first_group);
            assert_eq!(element_ids(&next.sections[0].groups[0]), vec![moved]);
            assert_eq!(next.sections[1].groups[0].elements.len(), 1);
            assert_eq!(next.element_count(), 2);
        }

        #[test]
        fn test_move_element_out_of_range_is_noop() {
            let form = form_with_elements(2);
            let section_id = form.sections[0].id.clone();
            let form = form.add_group(&section_id);
            let source = form.sections[0].groups[0].id.clone();
            let target = form.sections[0].groups[1].id.clone();
            assert_eq!(form.move_element(3, 0, &source, &target), form);
            assert_eq!(form.move_element(0, 1, &source, &target), form);
            assert_eq!(form.move_element(0, 4, &source, &source), form);
        }
    }

    #[test]
    fn test_update_form_patch() {
        let form = Form::new();
        let patch = FormPatch {
            title: Some("Registration".to_string()),
            ..Default::default()
        };
        let next = form.update_form(&patch);
        assert_eq!(next.title, "Registration");
        assert!(Arc::ptr_eq(&form.sections[0], &next.sections[0]));
    }

    #[test]
    fn test_every_section_keeps_a_group() {
        let mut form = Form::new().add_section().add_section();
        for section in form.sections.clone() {
            for group in &section.groups {
                form = form.remove_group(&group.id, &section.id);
            }
        }
        assert!(form.sections.iter().all(|s| !s.groups.is_empty()));

        for section in form.sections.clone() {
            form = form.remove_section(&section.id);
        }
        assert_eq!(form.sections.len(), 1);
    }
}
