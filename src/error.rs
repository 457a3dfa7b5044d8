use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("WebDriver session error: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
