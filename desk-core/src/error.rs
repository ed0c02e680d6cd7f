use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Lookup source error: {0}")]
    Source(String),

    #[error("File store error: {0}")]
    FileStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;
