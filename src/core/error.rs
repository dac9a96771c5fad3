use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required page elements: {}", .0.join(", "))]
    MissingElements(Vec<String>),
}
