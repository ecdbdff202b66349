#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no valid word")]
    EmptyInput,
    #[error("word of length {len} exceeds the maximum of {max}")]
    WordTooLong { len: usize, max: usize },
    #[error("invalid character {0:?}, only a-z is accepted")]
    InvalidCharacter(char),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
