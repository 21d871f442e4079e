// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Argument validation: turns a raw method call into a typed request.
//
// Validation happens entirely up front so that a rejected call never reaches
// the platform layer.

use serde_json::{Map, Value};

use crate::channel::MethodCall;
use crate::error::{AlertError, Result};
use crate::types::{ActionSheetRequest, ActionStyle, AlertRequest, ButtonSpec, SheetAction};

pub const SHOW_ALERT: &str = "showAlert";
pub const SHOW_ACTION_SHEET: &str = "showActionSheet";
pub const LEGACY_SHOW_ALERT: &str = "showAdaptiveAlertDialog";
pub const LEGACY_SHOW_ACTION_SHEET: &str = "showAdaptiveActionSheet";

/// A validated invocation, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Alert(AlertRequest),
    ActionSheet(ActionSheetRequest),
}

impl Request {
    /// Validate `call` and build the matching request.
    ///
    /// Unknown method names fail with `NotImplemented` without looking at
    /// the arguments. Missing or mistyped required fields fail with
    /// `InvalidArguments`.
    pub fn from_call(call: &MethodCall, accept_legacy: bool) -> Result<Self> {
        match call.method.as_str() {
            SHOW_ALERT => parse_alert(SHOW_ALERT, &call.arguments).map(Self::Alert),
            SHOW_ACTION_SHEET => {
                parse_action_sheet(SHOW_ACTION_SHEET, &call.arguments).map(Self::ActionSheet)
            }
            LEGACY_SHOW_ALERT if accept_legacy => {
                parse_alert(LEGACY_SHOW_ALERT, &call.arguments).map(Self::Alert)
            }
            LEGACY_SHOW_ACTION_SHEET if accept_legacy => {
                parse_action_sheet(LEGACY_SHOW_ACTION_SHEET, &call.arguments)
                    .map(Self::ActionSheet)
            }
            other => Err(AlertError::NotImplemented(other.to_string())),
        }
    }

    /// Number of buttons the modal for this request will carry.
    pub fn button_count(&self) -> usize {
        match self {
            Self::Alert(alert) => 1 + usize::from(alert.secondary.is_some()),
            Self::ActionSheet(sheet) => sheet.actions.len() + usize::from(sheet.cancel.is_some()),
        }
    }
}

fn invalid(method: &str, detail: impl std::fmt::Display) -> AlertError {
    AlertError::invalid(format!("Invalid arguments for {method}: {detail}"))
}

fn arguments<'a>(method: &str, args: &'a Value) -> Result<&'a Map<String, Value>> {
    args.as_object()
        .ok_or_else(|| invalid(method, "expected a map of named arguments"))
}

fn required_str<'a>(method: &str, args: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    match args.get(key) {
        None | Some(Value::Null) => Err(invalid(method, format_args!("missing `{key}`"))),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(invalid(method, format_args!("`{key}` must be a string"))),
    }
}

/// A map whose values are all strings. Anything else is a type error.
fn string_map<'a>(
    method: &str,
    value: &'a Value,
    what: &str,
) -> Result<&'a Map<String, Value>> {
    let map = value
        .as_object()
        .ok_or_else(|| invalid(method, format_args!("{what} must be a map")))?;
    if let Some((key, _)) = map.iter().find(|(_, v)| !v.is_string()) {
        return Err(invalid(
            method,
            format_args!("{what} field `{key}` must be a string"),
        ));
    }
    Ok(map)
}

/// Read a `{title, type}` record. `None` when either key is absent.
fn button_record(map: &Map<String, Value>) -> Option<ButtonSpec> {
    let title = map.get("title")?.as_str()?;
    let tag = map.get("type")?.as_str()?;
    Some(ButtonSpec::new(title, ActionStyle::from_tag(tag)))
}

fn parse_alert(method: &str, args: &Value) -> Result<AlertRequest> {
    let args = arguments(method, args)?;

    let title = required_str(method, args, "title")?;
    let message = required_str(method, args, "message")?;
    let primary_title = required_str(method, args, "primaryButtonTitle")?;
    let primary_type = required_str(method, args, "primaryButtonActionType")?;
    let secondary_title = required_str(method, args, "secondaryButtonTitle")?;
    let secondary_type = required_str(method, args, "secondaryButtonActionType")?;

    let secondary = (!secondary_title.is_empty())
        .then(|| ButtonSpec::new(secondary_title, ActionStyle::from_tag(secondary_type)));

    Ok(AlertRequest {
        title: title.into(),
        message: message.into(),
        primary: ButtonSpec::new(primary_title, ActionStyle::from_tag(primary_type)),
        secondary,
    })
}

fn parse_action_sheet(method: &str, args: &Value) -> Result<ActionSheetRequest> {
    let args = arguments(method, args)?;

    let raw_actions = match args.get("actions") {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => return Err(invalid(method, "missing `actions`")),
        Some(_) => return Err(invalid(method, "`actions` must be a list")),
    };
    let raw_cancel = match args.get("cancelAction") {
        None | Some(Value::Null) => return Err(invalid(method, "missing `cancelAction`")),
        Some(value) => string_map(method, value, "`cancelAction`")?,
    };

    let mut actions = Vec::with_capacity(raw_actions.len());
    for (index, item) in raw_actions.iter().enumerate() {
        let record = string_map(method, item, &format!("`actions[{index}]`"))?;
        // Partial entries are dropped; later entries keep their own index.
        if let Some(button) = button_record(record) {
            actions.push(SheetAction { index, button });
        }
    }

    Ok(ActionSheetRequest {
        title: args.get("title").and_then(Value::as_str).map(str::to_owned),
        message: args.get("message").and_then(Value::as_str).map(str::to_owned),
        actions,
        cancel: button_record(raw_cancel),
    })
}
