use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaybookError {
    #[error("Playbook has no plays to export")]
    EmptyPlaybook,

    #[error("Unknown formation: {0}")]
    UnknownFormation(String),

    #[error("Unknown coverage: {0}")]
    UnknownCoverage(String),

    #[error("Format {format} is not available for a {team_size}-player formation")]
    FormatUnavailable { format: String, team_size: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlaybookError {
    /// Errors the user can fix by changing their input, as opposed to I/O failures
    pub fn is_user_error(&self) -> bool {
        !matches!(self, PlaybookError::Io(_) | PlaybookError::Serialization(_))
    }
}

impl From<serde_json::Error> for PlaybookError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            PlaybookError::Deserialization(err.to_string())
        } else {
            PlaybookError::Serialization(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for PlaybookError {
    fn from(err: serde_yaml::Error) -> Self {
        PlaybookError::Deserialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlaybookError>;
