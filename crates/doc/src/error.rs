use std::path::PathBuf;

/// Failure while generating a custody form.
///
/// Generation never touches the asset store; a failed generation
/// leaves no partial output behind beyond an unfinished file.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The TTF font required for non-ASCII glyphs could not be read.
    #[error("custody form font not available at {path}: {source}")]
    FontUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output path could not be created or written.
    #[error("could not write custody form to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The PDF backend rejected the document or font data.
    #[error("custody form rendering failed: {0}")]
    Render(String),
}
