//! Core error types for the Investfolio analytics engine.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by whatever implements the repository traits.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Analytics calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

/// Database-agnostic error type for storage operations.
///
/// Repository implementations map their native failures onto these variants.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a connection to the store.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Errors produced by the rate solver and the calculators feeding it.
///
/// Calculators never surface these to the caller as failures of the whole
/// portfolio; a failed rate becomes "no data" for that one account.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// Fewer than two cash flows, or no sign variation between them.
    #[error("Insufficient data for rate calculation: {0}")]
    InsufficientData(String),

    /// Newton-Raphson did not converge or its derivative vanished.
    #[error("Rate calculation did not converge: {0}")]
    Convergence(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
