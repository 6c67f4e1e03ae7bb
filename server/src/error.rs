use crate::config::ConfigError;

/// Fatal startup errors. Anything that reaches `main` ends the process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Missing or malformed `[[workspace.metadata.leptos]]` settings.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
