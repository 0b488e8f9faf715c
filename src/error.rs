// SPDX-License-Identifier: MPL-2.0
//! Error type shared by the fallible edges of the crate.
//!
//! The queue itself never fails. Only loading settings and toast scripts
//! from disk, talking to a [`Toaster`](crate::app::Toaster) that has
//! already stopped, or a toaster task that panicked can produce an [`Error`].

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Script Error: {0}")]
    Script(String),
    /// The toaster task is gone; commands can no longer be delivered.
    #[error("Toaster is no longer running")]
    Closed,
    #[error("Task Error: {0}")]
    Task(String),
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

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Task(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_maps_to_config_variant() {
        let parse = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn closed_has_readable_message() {
        assert_eq!(Error::Closed.to_string(), "Toaster is no longer running");
    }

    #[tokio::test]
    async fn panicked_task_maps_to_task_variant() {
        let join = tokio::spawn(async { panic!("countdown overflow") })
            .await
            .unwrap_err();
        let err: Error = join.into();
        match err {
            Error::Task(message) => assert!(message.contains("panicked")),
            other => panic!("expected Task variant, got {other:?}"),
        }
    }
}
