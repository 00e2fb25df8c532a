//! The editing session a UI drives
//!
//! Every structural edit goes through `commit`: the resulting form is recorded
//! in history, selection is updated and an autosave is scheduled. Persistence
//! failures never interrupt editing; they are logged and queued for
//! [`EditingSession::take_warnings`].

use super::autosave::{Autosave, DEFAULT_AUTOSAVE_DELAY};
use crate::config::BuilderConfig;
use crate::export::{ExportError, ExportedForm};
use crate::history::{FormHistory, DEFAULT_HISTORY_LIMIT};
use crate::model::{
    Element, ElementPatch, ElementType, Form, FormPatch, Group, GroupPatch, Section,
    SectionPatch,
};
use crate::state::{SelectionState, SelectionTarget};
use crate::storage::{FormRepository, KeyValueStore, PersistenceError};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Tunables injected into a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub autosave_delay: Duration,
    pub history_limit: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            autosave_delay: DEFAULT_AUTOSAVE_DELAY,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl From<&BuilderConfig> for SessionOptions {
    fn from(config: &BuilderConfig) -> Self {
        Self {
            autosave_delay: config.autosave_delay(),
            history_limit: config.history_limit(),
        }
    }
}

pub struct EditingSession {
    history: FormHistory,
    selection: SelectionState,
    repository: FormRepository,
    autosave: Autosave,
    warnings: UnboundedReceiver<PersistenceError>,
}

impl EditingSession {
    /// Session over a fresh default form
    pub fn new(store: Arc<dyn KeyValueStore>, options: SessionOptions) -> Self {
        Self::with_form(store, options, Form::new())
    }

    /// Session over the stored in-progress form, or a fresh one
    pub async fn resume(store: Arc<dyn KeyValueStore>, options: SessionOptions) -> Self {
        let repository = FormRepository::new(store.clone());
        let form = match repository.load_current().await {
            Some(form) => {
                tracing::info!("Resuming form '{}'", form.title);
                form
            }
            None => Form::new(),
        };
        Self::with_form(store, options, form)
    }

    fn with_form(store: Arc<dyn KeyValueStore>, options: SessionOptions, form: Form) -> Self {
        let repository = FormRepository::new(store);
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            history: FormHistory::with_limit(form, options.history_limit),
            selection: SelectionState::default(),
            autosave: Autosave::new(repository.clone(), options.autosave_delay, tx),
            repository,
            warnings: rx,
        }
    }

    /// The current form
    pub fn form(&self) -> &Form {
        self.history.present()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// True while an edit is waiting for its autosave
    pub fn has_unsaved_changes(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Make `next` the current form. Returns false if it changed nothing.
    fn commit(&mut self, next: Form) -> bool {
        if next == *self.form() {
            return false;
        }
        self.record(next.touched(Utc::now()));
        true
    }

    fn record(&mut self, form: Form) {
        self.history.push(form.clone());
        self.autosave.schedule(form);
        if self.selection.retain_existing(self.history.present()) {
            tracing::debug!("Cleared selection of removed entity");
        }
    }

    // Form

    pub fn update_form(&mut self, patch: &FormPatch) -> bool {
        let next = self.form().update_form(patch);
        self.commit(next)
    }

    // Sections

    /// Append a section and select it, returning its id
    pub fn add_section(&mut self) -> Option<String> {
        let next = self.form().add_section();
        let id = next.sections.last()?.id.clone();
        self.commit(next).then(|| {
            self.selection.set_section(Some(id.clone()));
            id
        })
    }

    pub fn remove_section(&mut self, section_id: &str) -> bool {
        let next = self.form().remove_section(section_id);
        self.commit(next)
    }

    pub fn update_section(&mut self, section_id: &str, patch: &SectionPatch) -> bool {
        let next = self.form().update_section(section_id, patch);
        self.commit(next)
    }

    pub fn move_section(&mut self, from: usize, to: usize) -> bool {
        let next = self.form().move_section(from, to);
        self.commit(next)
    }

    // Groups

    /// Append a group to a section and select it, returning its id
    pub fn add_group(&mut self, section_id: &str) -> Option<String> {
        let next = self.form().add_group(section_id);
        let id = next.find_section(section_id)?.groups.last()?.id.clone();
        self.commit(next).then(|| {
            self.selection.set_group(Some(id.clone()));
            id
        })
    }

    pub fn remove_group(&mut self, group_id: &str, section_id: &str) -> bool {
        let next = self.form().remove_group(group_id, section_id);
        self.commit(next)
    }

    pub fn update_group(&mut self, group_id: &str, section_id: &str, patch: &GroupPatch) -> bool {
        let next = self.form().update_group(group_id, section_id, patch);
        self.commit(next)
    }

    pub fn move_group(
        &mut self,
        from: usize,
        to: usize,
        source_section_id: &str,
        target_section_id: &str,
    ) -> bool {
        let next = self
            .form()
            .move_group(from, to, source_section_id, target_section_id);
        self.commit(next)
    }

    // Elements

    /// Append an element to a group and select it, returning its id
    pub fn add_element(
        &mut self,
        element_type: ElementType,
        group_id: &str,
        section_id: &str,
    ) -> Option<String> {
        let next = self.form().add_element(element_type, group_id, section_id);
        let (group, _) = next.find_group(group_id)?;
        let id = group.elements.last()?.id.clone();
        self.commit(next).then(|| {
            self.selection.set_element(Some(id.clone()));
            id
        })
    }

    pub fn remove_element(&mut self, element_id: &str, group_id: &str, section_id: &str) -> bool {
        let next = self.form().remove_element(element_id, group_id, section_id);
        self.commit(next)
    }

    pub fn update_element(
        &mut self,
        element_id: &str,
        group_id: &str,
        section_id: &str,
        patch: &ElementPatch,
    ) -> bool {
        let next = self
            .form()
            .update_element(element_id, group_id, section_id, patch);
        self.commit(next)
    }

    pub fn move_element(
        &mut self,
        from: usize,
        to: usize,
        source_group_id: &str,
        target_group_id: &str,
    ) -> bool {
        let next = self
            .form()
            .move_element(from, to, source_group_id, target_group_id);
        self.commit(next)
    }

    // Selection

    pub fn select_section(&mut self, section_id: Option<String>) {
        self.selection.set_section(section_id);
    }

    pub fn select_group(&mut self, group_id: Option<String>) {
        self.selection.set_group(group_id);
    }

    pub fn select_element(&mut self, element_id: Option<String>) {
        self.selection.set_element(element_id);
    }

    pub fn select(&mut self, target: SelectionTarget) {
        self.selection.select(target);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_section(&self) -> Option<&Section> {
        self.form().find_section(self.selection.section()?)
    }

    pub fn selected_group(&self) -> Option<&Group> {
        self.form()
            .find_group(self.selection.group()?)
            .map(|(group, _)| group)
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.form()
            .find_element(self.selection.element()?)
            .map(|(element, _, _)| element)
    }

    // History

    /// Step back one edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(restored) => {
                self.record(restored);
                true
            }
            None => false,
        }
    }

    /// Step forward one undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(restored) => {
                self.record(restored);
                true
            }
            None => false,
        }
    }

    // Documents

    /// Replace the current form with `form`, dropping history and selection.
    /// The form is written immediately.
    pub async fn load_form(&mut self, form: Form) -> bool {
        tracing::info!("Loading form '{}'", form.title);
        self.replace_document(form).await
    }

    /// Start over from a fresh default form, written immediately
    pub async fn create_new_form(&mut self) -> bool {
        tracing::info!("Creating new form");
        self.replace_document(Form::new()).await
    }

    async fn replace_document(&mut self, form: Form) -> bool {
        self.autosave.cancel();
        self.history.clear(form);
        self.selection.clear();
        self.autosave.save_now(self.history.present()).await
    }

    /// Save the current form into the saved-forms library. The stored copy,
    /// with its refreshed `updatedAt`, becomes the current form without adding
    /// an undo step.
    pub async fn save_form(&mut self) -> Option<Form> {
        match self.repository.save_form(self.form()).await {
            Ok(saved) => {
                self.history.replace_present(saved.clone());
                self.autosave.schedule(saved.clone());
                Some(saved)
            }
            Err(e) => {
                tracing::warn!("Failed to save form to library: {e}");
                self.push_warning(e);
                None
            }
        }
    }

    pub async fn saved_forms(&self) -> Vec<Form> {
        self.repository.load_forms().await
    }

    pub async fn delete_saved_form(&mut self, form_id: &str) -> bool {
        match self.repository.delete_form(form_id).await {
            Ok(deleted) => deleted,
            Err(e) => {
                tracing::warn!("Failed to delete saved form {form_id}: {e}");
                self.push_warning(e);
                false
            }
        }
    }

    pub fn export(&self) -> Result<ExportedForm, ExportError> {
        ExportedForm::from_form(self.form())
    }

    /// Write any pending autosave now
    pub async fn flush(&mut self) -> bool {
        self.autosave.flush().await
    }

    /// Cancel any pending autosave; nothing is written after this
    pub fn shutdown(&mut self) {
        self.autosave.cancel();
    }

    /// Persistence failures since the last call, oldest first
    pub fn take_warnings(&mut self) -> Vec<PersistenceError> {
        let mut warnings = Vec::new();
        while let Ok(warning) = self.warnings.try_recv() {
            warnings.push(warning);
        }
        warnings
    }

    fn push_warning(&self, warning: PersistenceError) {
        self.autosave.report(warning);
    }
}
