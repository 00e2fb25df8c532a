//! Editing session: history, selection and autosave around the form model

mod autosave;
mod editing;

pub use autosave::DEFAULT_AUTOSAVE_DELAY;
pub use editing::{EditingSession, SessionOptions};
