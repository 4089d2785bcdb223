use std::path::PathBuf;

/// Main error type for anchor-viz operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to discover workspace: {0}")]
    WorkspaceDiscovery(String),

    #[error("No IDL for program {program} at {}", path.display())]
    IdlNotFound { program: String, path: PathBuf },

    #[error("Failed to parse IDL: {0}")]
    IdlParse(#[from] serde_json::Error),

    #[error("Failed to lay out figure: {0}")]
    Layout(String),

    #[error("Invalid program name {0:?}: must be a single file name")]
    InvalidProgramName(String),

    #[error("Failed to render figure: {0}")]
    Render(#[from] minijinja::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
