// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Method-channel envelope: what arrives from the host framework and what is
// sent back. The transport itself belongs to the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AlertError, Result};
use crate::types::Outcome;

/// An incoming invocation: method name plus named arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    /// Usually a JSON object. Anything else fails argument validation.
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Decode an invocation from its JSON encoding.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The single reply sent back for an invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodReply {
    Success {
        result: String,
    },
    Error {
        code: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodReply {
    pub fn success(outcome: Outcome) -> Self {
        Self::Success {
            result: outcome.to_string(),
        }
    }

    /// Encode the reply for the transport.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&AlertError> for MethodReply {
    fn from(err: &AlertError) -> Self {
        match err {
            AlertError::NotImplemented(_) => Self::NotImplemented,
            other => Self::Error {
                code: other.code().into(),
                message: other.to_string(),
                details: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_without_arguments_decodes_to_null() {
        let call = MethodCall::from_json(r#"{"method":"showAlert"}"#).unwrap();
        assert_eq!(call.method, "showAlert");
        assert_eq!(call.arguments, Value::Null);
    }

    #[test]
    fn success_reply_carries_outcome_string() {
        let reply = MethodReply::success(Outcome::Action(2));
        let encoded: Value = serde_json::from_str(&reply.to_json().unwrap()).unwrap();
        assert_eq!(encoded, json!({"status": "success", "result": "2"}));
    }

    #[test]
    fn invalid_arguments_reply() {
        let reply = MethodReply::from(&AlertError::invalid("Invalid arguments"));
        assert_eq!(
            reply,
            MethodReply::Error {
                code: "INVALID_ARGUMENTS".into(),
                message: "Invalid arguments".into(),
                details: None,
            }
        );
    }

    #[test]
    fn unknown_method_reply() {
        let reply = MethodReply::from(&AlertError::NotImplemented("unknownMethod".into()));
        assert_eq!(reply, MethodReply::NotImplemented);
        assert_eq!(reply.to_json().unwrap(), r#"{"status":"not_implemented"}"#);
    }
}
