//! Persistence of forms
//!
//! A `KeyValueStore` backend holds serialized JSON under string keys, and
//! `FormRepository` maps the saved-forms library and the in-progress form onto
//! two of those keys.

mod error;
mod file;
mod memory;
mod repository;
mod traits;

pub use error::{PersistenceError, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{FormRepository, CURRENT_FORM_KEY, FORMS_KEY};
#[cfg(test)]
pub use traits::MockKeyValueStore;
pub use traits::KeyValueStore;
