// SPDX-License-Identifier: MPL-2.0
use crate::app::registry::Region;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A region the page manifest was expected to provide does not exist.
    #[error("Missing element: {0}")]
    MissingElement(Region),

    /// An email address did not match `local@domain.tld`.
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Page Error: {0}")]
    Page(String),

    #[error("Store Error: {0}")]
    Store(String),
}

impl Error {
    /// Returns whether this error only disables a single feature.
    ///
    /// Interaction errors are handled where they are detected and never
    /// reach the application root.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Error::MissingElement(_) | Error::InvalidEmail)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
