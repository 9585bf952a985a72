use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Directory '{}' not found.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Script file '{}' not found.", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("HTML file '{}' not found.", .0.display())]
    HtmlNotFound(PathBuf),

    #[error("Could not find the 'const images = [...]' array in '{}'.", .0.display())]
    PatternNotFound(PathBuf),

    #[error("Malformed version on line {line}: {text:?}")]
    MalformedVersion { line: usize, text: String },

    #[error("An error occurred while processing '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
