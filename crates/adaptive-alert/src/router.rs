// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Invocation router: the plugin's entry point for method-channel calls.
//
// Validation failures are reported synchronously and never touch the UI.
// Valid calls are handed to the presenter and answered later, once, with
// the user's choice.

use std::sync::Arc;

use adaptive_alert_bridge::{Completion, DialogPlatform, PendingOutcome};
use adaptive_alert_core::error::{AlertError, Result};
use adaptive_alert_core::{AlertConfig, InvocationId, MethodCall, MethodReply, Request};

use crate::presenter::Presenter;

/// A native-alert plugin bound to one platform.
pub struct AlertPlugin<P: DialogPlatform> {
    config: AlertConfig,
    presenter: Presenter<P>,
}

impl<P: DialogPlatform> AlertPlugin<P> {
    pub fn new(platform: Arc<P>, config: AlertConfig) -> Self {
        let presenter = Presenter::new(platform, &config);
        tracing::info!(
            channel = %config.channel_name,
            platform = presenter.platform().platform_name(),
            "alert plugin registered"
        );
        Self { config, presenter }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn presenter(&self) -> &Presenter<P> {
        &self.presenter
    }

    /// Validate `call` and schedule its dialog.
    ///
    /// # Errors
    ///
    /// - `AlertError::NotImplemented` for an unknown method name.
    /// - `AlertError::InvalidArguments` when a required argument is missing
    ///   or has the wrong type.
    ///
    /// Nothing is scheduled when an error is returned.
    pub fn handle(&self, call: &MethodCall) -> Result<PendingOutcome> {
        let invocation = InvocationId::new();
        let span = tracing::debug_span!("invocation", id = %invocation, method = %call.method);
        let _guard = span.enter();

        let request = Request::from_call(call, self.config.accept_legacy_method_names)
            .inspect_err(|err| match err {
                AlertError::NotImplemented(_) => tracing::warn!("unknown method"),
                _ => tracing::debug!(%err, "rejected arguments"),
            })?;
        tracing::debug!(buttons = request.button_count(), "arguments validated");

        let (completion, pending) = Completion::channel(invocation);
        self.presenter.present(&request, completion);
        Ok(pending)
    }

    /// Channel-style entry point: the single reply for `call`.
    ///
    /// Returns `None` when the dialog went away without a tap (or never
    /// found a screen to appear on); the channel then sends no reply.
    pub async fn call(&self, call: &MethodCall) -> Option<MethodReply> {
        let pending = match self.handle(call) {
            Ok(pending) => pending,
            Err(err) => return Some(MethodReply::from(&err)),
        };
        let invocation = pending.invocation();
        match pending.wait().await {
            Ok(outcome) => Some(MethodReply::success(outcome)),
            Err(err) => {
                tracing::debug!(%invocation, %err, "no reply sent");
                None
            }
        }
    }
}
