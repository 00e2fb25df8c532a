//! Editor state that lives outside the form document

mod selection;

pub use selection::*;
