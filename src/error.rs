// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type and the motion input failures.
//!
//! [`MotionError`] is never fatal: each variant maps to a toast message key
//! through [`MotionError::i18n_key`] and the card falls back to its last
//! (or neutral) position.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Motion(MotionError),
}

/// Failures of the motion input.
///
/// Neither is fatal: the screen degrades to the last known (or neutral)
/// card position.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// The source could not be started (no hardware, no permission,
    /// unreadable trace...).
    SensorUnavailable(String),

    /// A reading was expected but carried no usable value.
    SampleMissing,
}

impl MotionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MotionError::SensorUnavailable(_) => "notification-motion-unavailable",
            MotionError::SampleMissing => "notification-motion-sample-missing",
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::SensorUnavailable(reason) => {
                write!(f, "Motion sensor unavailable: {}", reason)
            }
            MotionError::SampleMissing => write!(f, "Motion sample missing"),
        }
    }
}

impl std::error::Error for MotionError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Motion(e) => write!(f, "Motion Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MotionError> for Error {
    fn from(err: MotionError) -> Self {
        Error::Motion(err)
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<resvg::usvg::Error> for Error {
    fn from(err: resvg::usvg::Error) -> Self {
        Error::Image(err.to_string())
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
    fn motion_error_wraps_into_error() {
        let err: Error = MotionError::SensorUnavailable("no gyro".into()).into();
        assert_eq!(
            format!("{}", err),
            "Motion Error: Motion sensor unavailable: no gyro"
        );
    }

    #[test]
    fn motion_error_i18n_keys() {
        assert_eq!(
            MotionError::SensorUnavailable(String::new()).i18n_key(),
            "notification-motion-unavailable"
        );
        assert_eq!(
            MotionError::SampleMissing.i18n_key(),
            "notification-motion-sample-missing"
        );
    }
}
