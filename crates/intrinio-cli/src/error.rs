use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] intrinio_core::ValidationError),

    #[error(transparent)]
    Config(#[from] intrinio_core::ConfigError),

    #[error(transparent)]
    Remote(#[from] intrinio_core::RemoteApiError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Remote(_) => 3,
            Self::Serialization(_) => 4,
            Self::Config(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
