// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Adaptive Alert.

use thiserror::Error;

/// Wire code for rejected arguments.
pub const INVALID_ARGUMENTS: &str = "INVALID_ARGUMENTS";

/// Top-level error type for all Adaptive Alert operations.
#[derive(Debug, Error)]
pub enum AlertError {
    // -- Routing errors --
    #[error("{0}")]
    InvalidArguments(String),

    #[error("method not implemented: {0}")]
    NotImplemented(String),

    // -- Completion --
    #[error("dialog finished without a selection")]
    Unresolved,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AlertError {
    /// Convenience constructor for argument validation failures.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }

    /// Stable machine-readable code sent back over the channel.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArguments(_) => INVALID_ARGUMENTS,
            Self::NotImplemented(_) => "NOT_IMPLEMENTED",
            Self::Unresolved => "UNRESOLVED",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, AlertError>;
