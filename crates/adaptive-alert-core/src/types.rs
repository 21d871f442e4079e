// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Adaptive Alert.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one method invocation, used for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(pub Uuid);

impl InvocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual and semantic emphasis of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Default,
    Destructive,
    Cancel,
}

impl ActionStyle {
    /// Map an action-type tag to a style. Unknown tags fall back to
    /// `Default`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "destructive" => Self::Destructive,
            "cancel" => Self::Cancel,
            _ => Self::Default,
        }
    }
}

/// A single button: its label and style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    pub label: String,
    pub style: ActionStyle,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }
}

/// A two-button (at most) alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub title: String,
    pub message: String,
    pub primary: ButtonSpec,
    /// Present only when the secondary label is non-empty.
    pub secondary: Option<ButtonSpec>,
}

/// One entry of an action sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetAction {
    /// Position of the entry in the caller's `actions` list. Reported back
    /// as the outcome when tapped.
    pub index: usize,
    pub button: ButtonSpec,
}

/// An action sheet: ordered choices plus an optional cancel choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSheetRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub actions: Vec<SheetAction>,
    pub cancel: Option<ButtonSpec>,
}

/// Which control the user activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Outcome {
    Primary,
    Secondary,
    Action(usize),
    Cancel,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
            Self::Action(index) => write!(f, "{index}"),
            Self::Cancel => f.write_str("cancel"),
        }
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "cancel" => Ok(Self::Cancel),
            other => other
                .parse::<usize>()
                .map(Self::Action)
                .map_err(|_| format!("unknown outcome: {other}")),
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.to_string()
    }
}

impl TryFrom<String> for Outcome {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}
