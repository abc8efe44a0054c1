use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArisanError>;

#[derive(Error, Debug)]
pub enum ArisanError {
    #[error("No participants left in the pool")]
    EmptyPool,

    #[error("No draw to undo")]
    EmptyHistory,

    #[error("Seed must be a non-negative integer, got '{0}'")]
    InvalidSeedInput(String),

    #[error("Roster file must have a '{column}' column")]
    MissingColumn { column: String },

    #[error("Failed to read roster file: {0}")]
    FileParse(String),

    #[error("Unsupported roster format: {0}")]
    UnsupportedFormat(String),

    #[error("Replay of round {round} does not match the recorded winner")]
    ReplayMismatch { round: u32 },

    #[error("Invalid cycle state: {0}")]
    InvalidState(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Dialog(String),
}

impl ArisanError {
    pub fn file_parse(msg: impl Into<String>) -> Self {
        Self::FileParse(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn dialog(msg: impl Into<String>) -> Self {
        Self::Dialog(msg.into())
    }

    /// Warnings the caller can show and carry on from
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyPool | Self::EmptyHistory | Self::InvalidSeedInput(_)
        )
    }
}

impl From<csv::Error> for ArisanError {
    fn from(err: csv::Error) -> Self {
        ArisanError::FileParse(err.to_string())
    }
}

impl From<calamine::Error> for ArisanError {
    fn from(err: calamine::Error) -> Self {
        ArisanError::FileParse(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ArisanError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ArisanError::Export(err.to_string())
    }
}
