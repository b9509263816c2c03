use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrriCalcError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl IrriCalcError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, IrriCalcError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, IrriCalcError>;
