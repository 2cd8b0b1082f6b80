use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the forecast library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Only the loading boundary (ship list catalogs and scenario files) produces
/// errors. Prediction itself never fails; unresolvable inputs degrade to
/// no-op turns instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a ship list table is missing, malformed, or inconsistent.
    #[error("invalid ship list data: {message}")]
    ShipListValidation { message: String },

    /// Raised when a ship list directory lacks a required table.
    #[error("ship list table not found at {path}")]
    ShipListTableMissing { path: PathBuf },

    /// Raised when a hull references a special function this crate does not know.
    #[error("unknown hull function: {name}")]
    UnknownHullFunction { name: String },

    /// Raised when a cost string such as `T1 D1 M1 $5` cannot be parsed.
    #[error("invalid cost specification: {text}")]
    InvalidCost { text: String },

    /// Raised when a host version string cannot be parsed.
    #[error("invalid host version: {text}")]
    InvalidHostVersion { text: String },

    /// Raised when scenario data fails validation against the ship list.
    #[error("invalid scenario: {message}")]
    ScenarioValidation { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
