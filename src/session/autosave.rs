//! Debounced write of the in-progress form

use crate::model::Form;
use crate::storage::{FormRepository, PersistenceError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Default quiet period before an edit is written
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(500);

/// Owns at most one scheduled write of the current form.
///
/// Scheduling again before the delay has elapsed aborts the earlier task, so a
/// burst of edits produces one write of the last form.
pub(crate) struct Autosave {
    repository: FormRepository,
    delay: Duration,
    task: Option<JoinHandle<()>>,
    pending: Option<Form>,
    warnings: UnboundedSender<PersistenceError>,
}

impl Autosave {
    pub fn new(
        repository: FormRepository,
        delay: Duration,
        warnings: UnboundedSender<PersistenceError>,
    ) -> Self {
        Self {
            repository,
            delay,
            task: None,
            pending: None,
            warnings,
        }
    }

    /// Write `form` once the delay passes without another schedule
    pub fn schedule(&mut self, form: Form) {
        self.cancel();

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("No async runtime, autosave deferred until flush");
                self.pending = Some(form);
                return;
            }
        };

        let repository = self.repository.clone();
        let warnings = self.warnings.clone();
        let delay = self.delay;
        let snapshot = form.clone();
        self.task = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            write_current(&repository, &snapshot, &warnings).await;
        }));
        self.pending = Some(form);
    }

    /// Drop the scheduled write, if any
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.pending = None;
    }

    /// True while a scheduled write has not run yet
    pub fn is_pending(&self) -> bool {
        match &self.task {
            Some(task) => !task.is_finished(),
            None => self.pending.is_some(),
        }
    }

    /// Run the scheduled write now instead of waiting for the delay
    pub async fn flush(&mut self) -> bool {
        let task = self.task.take();
        let Some(form) = self.pending.take() else {
            return true;
        };
        if let Some(task) = task {
            if task.is_finished() {
                return true;
            }
            task.abort();
            // Let a write already in progress finish before replacing it
            let _ = task.await;
        }
        self.save_now(&form).await
    }

    /// Write `form` immediately, bypassing the debounce
    pub async fn save_now(&self, form: &Form) -> bool {
        write_current(&self.repository, form, &self.warnings).await
    }

    /// Queue a warning alongside autosave failures
    pub fn report(&self, warning: PersistenceError) {
        let _ = self.warnings.send(warning);
    }

    #[cfg(test)]
    pub fn repository(&self) -> &FormRepository {
        &self.repository
    }
}

impl Drop for Autosave {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn write_current(
    repository: &FormRepository,
    form: &Form,
    warnings: &UnboundedSender<PersistenceError>,
) -> bool {
    match repository.save_current(form).await {
        Ok(()) => {
            tracing::debug!("Autosaved form {}", form.id);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to save current form: {e}");
            // Receiver is gone only once the session is dropped
            let _ = warnings.send(e);
            false
        }
    }
}
