// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plugin configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the method channel the host framework registers the plugin on.
pub const DEFAULT_CHANNEL_NAME: &str = "app.digizorg.adaptive_alert";

/// Plugin settings supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Method channel name.
    pub channel_name: String,
    /// Animate the modal presentation.
    pub animated: bool,
    /// Also route `showAdaptiveAlertDialog` / `showAdaptiveActionSheet`.
    pub accept_legacy_method_names: bool,
    /// Upper bound on the host-screen walk. Real hierarchies are a handful
    /// of levels deep.
    pub max_hierarchy_depth: usize,
}

impl AlertConfig {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL_NAME.into(),
            animated: true,
            accept_legacy_method_names: true,
            max_hierarchy_depth: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AlertConfig::from_json(r#"{"animated": false}"#).unwrap();
        assert!(!config.animated);
        assert_eq!(config.channel_name, DEFAULT_CHANNEL_NAME);
        assert!(config.accept_legacy_method_names);
        assert_eq!(config.max_hierarchy_depth, 32);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AlertConfig::from_json("animated = false").is_err());
    }
}
