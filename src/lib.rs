//! Form Forge - editing engine for nested form definitions
//!
//! A form is a tree of sections, groups and typed field elements. The engine
//! applies structural edits as pure copy-on-write operations, keeps bounded
//! undo/redo history, tracks the current selection and autosaves the form
//! being edited to a pluggable key-value store.

pub mod config;
pub mod export;
pub mod history;
pub mod model;
pub mod session;
pub mod state;
pub mod storage;

pub use config::BuilderConfig;
pub use export::{ExportError, ExportedForm};
pub use history::{FormHistory, History};
pub use model::{Element, ElementType, Form, Group, Section};
pub use session::{EditingSession, SessionOptions};
pub use state::{SelectionState, SelectionTarget};
pub use storage::{FileStore, FormRepository, KeyValueStore, MemoryStore};
