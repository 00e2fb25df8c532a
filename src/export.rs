//! Export of a form as a standalone JSON document

use crate::model::Form;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A form rendered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedForm {
    /// Suggested file name, derived from the title
    pub filename: String,
    /// Pretty-printed JSON
    pub contents: String,
}

impl ExportedForm {
    pub fn from_form(form: &Form) -> Result<Self, ExportError> {
        Ok(Self {
            filename: export_filename(&form.title),
            contents: serde_json::to_string_pretty(form)?,
        })
    }

    /// Write the document into `dir`, returning the full path
    pub async fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        let io_err = |source: std::io::Error| ExportError::Io {
            path: path.clone(),
            source,
        };
        tokio::fs::create_dir_all(dir).await.map_err(io_err)?;
        tokio::fs::write(&path, &self.contents)
            .await
            .map_err(io_err)?;
        tracing::info!("Exported form to {}", path.display());
        Ok(path)
    }
}

/// File name for an exported form: each run of whitespace in the title
/// becomes one underscore, plus a `.json` extension
pub fn export_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 5);
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str(".json");
    name
}
