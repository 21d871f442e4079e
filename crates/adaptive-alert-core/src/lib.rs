// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptive Alert — Core types, argument validation and error definitions
// shared across all crates.

pub mod channel;
pub mod config;
pub mod error;
pub mod request;
pub mod types;

pub use channel::{MethodCall, MethodReply};
pub use config::AlertConfig;
pub use error::AlertError;
pub use request::Request;
pub use types::*;
