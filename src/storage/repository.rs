//! Forms library and in-progress form on top of a key-value store

use super::{KeyValueStore, PersistenceError};
use crate::model::Form;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Key holding the list of saved forms
pub const FORMS_KEY: &str = "form-builder-forms";
/// Key holding the form being edited
pub const CURRENT_FORM_KEY: &str = "form-builder-current";

/// Typed access to the two persisted keys.
///
/// Clones share one write lock, so writes through any clone never overlap and
/// a library read-modify-write is never interleaved with another write.
#[derive(Clone)]
pub struct FormRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for FormRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRepository").finish_non_exhaustive()
    }
}

impl FormRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All saved forms, for display. Missing or unreadable data loads as an
    /// empty list; never write this result back.
    pub async fn load_forms(&self) -> Vec<Form> {
        match self.try_load_forms().await {
            Ok(forms) => forms,
            Err(e) => {
                tracing::warn!("Failed to load saved forms: {e}");
                Vec::new()
            }
        }
    }

    async fn try_load_forms(&self) -> Result<Vec<Form>, PersistenceError> {
        match self.store.get(FORMS_KEY).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the whole library
    pub async fn save_forms(&self, forms: &[Form]) -> Result<(), PersistenceError> {
        let _guard = self.write_lock.lock().await;
        self.write_forms(forms).await
    }

    async fn write_forms(&self, forms: &[Form]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(forms)?;
        self.store.set(FORMS_KEY, &json).await?;
        Ok(())
    }

    /// Save `form` into the library, replacing a saved form with the same id
    /// or appending. Returns the stored copy with a fresh `updated_at`.
    ///
    /// Fails without writing when the current library cannot be read.
    pub async fn save_form(&self, form: &Form) -> Result<Form, PersistenceError> {
        let _guard = self.write_lock.lock().await;
        let saved = form.touched(Utc::now());
        let mut forms = self.try_load_forms().await?;
        match forms.iter_mut().find(|f| f.id == saved.id) {
            Some(existing) => *existing = saved.clone(),
            None => forms.push(saved.clone()),
        }
        self.write_forms(&forms).await?;
        tracing::info!("Saved form '{}' ({} in library)", saved.title, forms.len());
        Ok(saved)
    }

    /// Remove a saved form. Returns false when no form had that id.
    ///
    /// Fails without writing when the current library cannot be read.
    pub async fn delete_form(&self, form_id: &str) -> Result<bool, PersistenceError> {
        let _guard = self.write_lock.lock().await;
        let mut forms = self.try_load_forms().await?;
        let before = forms.len();
        forms.retain(|f| f.id != form_id);
        if forms.len() == before {
            tracing::debug!("No saved form with id {form_id}");
            return Ok(false);
        }
        self.write_forms(&forms).await?;
        tracing::info!("Deleted saved form {form_id}");
        Ok(true)
    }

    /// The in-progress form, if one was stored and is readable
    pub async fn load_current(&self) -> Option<Form> {
        match self.try_load_current().await {
            Ok(form) => form,
            Err(e) => {
                tracing::warn!("Failed to load current form: {e}");
                None
            }
        }
    }

    async fn try_load_current(&self) -> Result<Option<Form>, PersistenceError> {
        match self.store.get(CURRENT_FORM_KEY).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub async fn save_current(&self, form: &Form) -> Result<(), PersistenceError> {
        let _guard = self.write_lock.lock().await;
        let json = serde_json::to_string(form)?;
        self.store.set(CURRENT_FORM_KEY, &json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormPatch;
    use crate::storage::{MemoryStore, MockKeyValueStore, StorageError};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    fn repository() -> (Arc<MemoryStore>, FormRepository) {
        let store = Arc::new(MemoryStore::new());
        let repo = FormRepository::new(store.clone());
        (store, repo)
    }

    /// Memory store that can fail its next read and that records how many
    /// writes were in flight at once
    #[derive(Default)]
    struct InstrumentedStore {
        inner: MemoryStore,
        fail_next_get: AtomicBool,
        write_delay: Duration,
        active_writes: AtomicUsize,
        max_active_writes: AtomicUsize,
    }

    #[async_trait]
    impl KeyValueStore for InstrumentedStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_next_get.swap(false, Ordering::SeqCst) {
                return Err(StorageError::Unavailable("read timed out".to_string()));
            }
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let active = self.active_writes.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active_writes.fetch_max(active, Ordering::SeqCst);
            tokio::time::sleep(self.write_delay).await;
            let result = self.inner.set(key, value).await;
            self.active_writes.fetch_sub(1, Ordering::SeqCst);
            result
        }
    }

    mod library {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_store_has_no_forms() {
            let (_, repo) = repository();
            assert!(repo.load_forms().await.is_empty());
        }

        #[tokio::test]
        async fn test_save_form_appends_then_replaces() {
            let (_, repo) = repository();
            let first = Form::new();
            let second = Form::new();
            repo.save_form(&first).await.unwrap();
            repo.save_form(&second).await.unwrap();

            let renamed = first.update_form(&FormPatch {
                title: Some("Feedback".to_string()),
                ..Default::default()
            });
            let saved = repo.save_form(&renamed).await.unwrap();
            assert!(saved.updated_at >= first.updated_at);

            let forms = repo.load_forms().await;
            assert_eq!(forms.len(), 2);
            assert_eq!(forms[0].id, first.id);
            assert_eq!(forms[0].title, "Feedback");
            assert_eq!(forms[1].id, second.id);
        }

        #[tokio::test]
        async fn test_delete_form() {
            let (_, repo) = repository();
            let form = Form::new();
            repo.save_form(&form).await.unwrap();

            assert!(!repo.delete_form("form-missing").await.unwrap());
            assert!(repo.delete_form(&form.id).await.unwrap());
            assert!(repo.load_forms().await.is_empty());
        }

        #[tokio::test]
        async fn test_failed_read_keeps_library_intact() {
            let store = Arc::new(InstrumentedStore::default());
            let repo = FormRepository::new(store.clone());
            for _ in 0..3 {
                repo.save_form(&Form::new()).await.unwrap();
            }

            store.fail_next_get.store(true, Ordering::SeqCst);
            let err = repo.save_form(&Form::new()).await.unwrap_err();
            assert!(matches!(
                err,
                PersistenceError::Storage(StorageError::Unavailable(_))
            ));
            assert_eq!(repo.load_forms().await.len(), 3);

            store.fail_next_get.store(true, Ordering::SeqCst);
            let saved = repo.load_forms().await;
            assert!(saved.is_empty());
            assert!(repo.delete_form("form-missing").await.is_ok());
            assert_eq!(repo.load_forms().await.len(), 3);
        }

        #[tokio::test]
        async fn test_unreadable_library_is_never_written() {
            let mut store = MockKeyValueStore::new();
            store
                .expect_get()
                .returning(|_| Err(StorageError::Unavailable("offline".to_string())));
            store.expect_set().never();
            let repo = FormRepository::new(Arc::new(store));

            assert!(repo.save_form(&Form::new()).await.is_err());
            assert!(repo.delete_form("form-1").await.is_err());
        }

        #[tokio::test]
        async fn test_save_over_unparseable_library_fails() {
            let (store, repo) = repository();
            let stored = r#"[{"id": "form-1", "title": "Legacy"}]"#;
            store.set(FORMS_KEY, stored).await.unwrap();

            let err = repo.save_form(&Form::new()).await.unwrap_err();
            assert!(matches!(err, PersistenceError::Serialization(_)));
            assert!(repo.delete_form("form-1").await.is_err());
            assert_eq!(store.get(FORMS_KEY).await.unwrap().as_deref(), Some(stored));
            assert_eq!(store.write_count(), 1);
        }

        #[tokio::test]
        async fn test_corrupt_library_loads_empty() {
            let (store, repo) = repository();
            store.set(FORMS_KEY, "{not json").await.unwrap();
            assert!(repo.load_forms().await.is_empty());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_writes_never_overlap() {
        let store = Arc::new(InstrumentedStore {
            write_delay: Duration::from_millis(50),
            ..Default::default()
        });
        let repo = FormRepository::new(store.clone());
        let other = repo.clone();
        let (first, second) = (Form::new(), Form::new());

        let (a, b, c) = tokio::join!(
            repo.save_current(&first),
            other.save_current(&second),
            repo.save_form(&first),
        );
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(store.max_active_writes.load(Ordering::SeqCst), 1);
        assert_eq!(repo.load_current().await, Some(second));
    }

    mod current {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_round_trip() {
            let (store, repo) = repository();
            assert_eq!(repo.load_current().await, None);

            let form = Form::new().add_section();
            repo.save_current(&form).await.unwrap();
            assert_eq!(repo.load_current().await, Some(form));
            assert_eq!(store.len().await, 1);
        }

        #[tokio::test]
        async fn test_unavailable_store_loads_none() {
            let mut store = MockKeyValueStore::new();
            store
                .expect_get()
                .returning(|_| Err(StorageError::Unavailable("offline".to_string())));
            let repo = FormRepository::new(Arc::new(store));
            assert_eq!(repo.load_current().await, None);
        }

        #[tokio::test]
        async fn test_rejected_write_is_reported() {
            let mut store = MockKeyValueStore::new();
            store.expect_set().returning(|key, _| {
                Err(StorageError::Rejected {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                })
            });
            let repo = FormRepository::new(Arc::new(store));
            let err = repo.save_current(&Form::new()).await.unwrap_err();
            assert!(matches!(
                err,
                PersistenceError::Storage(StorageError::Rejected { .. })
            ));
        }
    }
}
