use std::path::PathBuf;

/// Custody form output configuration loaded from environment variables.
///
/// All fields have defaults suitable for running from the working
/// directory; override via environment variables.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Directory the generated forms are written to (default: `.`).
    pub output_dir: PathBuf,
    /// TTF font used for all text. Must cover the non-ASCII glyphs the
    /// form labels and field values use (default: `DejaVuSans.ttf`).
    pub font_path: PathBuf,
}

impl DocumentConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default           |
    /// |----------------------|-------------------|
    /// | `CUSTODY_OUTPUT_DIR` | `.`               |
    /// | `CUSTODY_FONT_PATH`  | `DejaVuSans.ttf`  |
    pub fn from_env() -> Self {
        let output_dir = std::env::var("CUSTODY_OUTPUT_DIR")
            .unwrap_or_else(|_| ".".into())
            .into();
        let font_path = std::env::var("CUSTODY_FONT_PATH")
            .unwrap_or_else(|_| "DejaVuSans.ttf".into())
            .into();

        Self {
            output_dir,
            font_path,
        }
    }
}
