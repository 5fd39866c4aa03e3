//! Global error handling for dirparse
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project. Per-file faults (stat, read and decode
//! failures) are deliberately absent: those are recovered inline as
//! placeholders in the report and never surface as an error value.

use std::io;
use thiserror::Error;

/// Global error type for dirparse operations
#[derive(Error, Debug)]
pub enum DirparseError {
    /// Configuration errors (invalid root, unwritable output path)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Scanner errors
    #[error("Scanner error: {0}")]
    Scanner(String),

    /// Writer errors
    #[error("Writer error: {0}")]
    Writer(String),
}

/// Specialized Result type for dirparse operations
pub type Result<T> = std::result::Result<T, DirparseError>;

/// Creates a DirparseError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DirparseError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
