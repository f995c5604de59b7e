/// Top-level error type for a sync run. Only configuration problems and
/// failed workspace calls surface here; per-record lookup failures are
/// handled inside the batch loop.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVar { name: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider {provider} returned error: {message}")]
    Provider { provider: String, message: String },

    #[error("No results found for \"{title}\"")]
    NotFound { title: String },
}

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Workspace API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed workspace response: {0}")]
    Malformed(String),
}
