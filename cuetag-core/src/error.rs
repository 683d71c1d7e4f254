use thiserror::Error;

#[derive(Error, Debug)]
pub enum CuetagError {
    #[error("Unknown variant '{name}' (known: {known})")]
    UnknownVariant { name: String, known: String },

    #[error("Corpus error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CuetagError>;
