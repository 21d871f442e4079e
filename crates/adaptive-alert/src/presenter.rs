// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presenter: turns a validated request into a native modal on the topmost
// visible screen.
//
// The presenter never fails. Once a request reaches it, the only thing that
// can go wrong is a missing host screen, which is logged and leaves the
// invocation unresolved.

use std::sync::Arc;

use adaptive_alert_bridge::{Completion, DialogPlatform, ModalAction, ModalKind, ModalSpec};
use adaptive_alert_core::{ActionSheetRequest, AlertConfig, AlertRequest, Outcome, Request};

use crate::host::topmost_screen;

/// Build the platform-neutral modal for `request`.
///
/// Alerts get primary then secondary. Action sheets get their actions in
/// order, then cancel last.
pub fn modal_spec(request: &Request) -> ModalSpec {
    match request {
        Request::Alert(alert) => alert_spec(alert),
        Request::ActionSheet(sheet) => action_sheet_spec(sheet),
    }
}

fn alert_spec(alert: &AlertRequest) -> ModalSpec {
    let mut actions = vec![ModalAction {
        label: alert.primary.label.clone(),
        style: alert.primary.style,
        outcome: Outcome::Primary,
    }];
    if let Some(secondary) = &alert.secondary {
        actions.push(ModalAction {
            label: secondary.label.clone(),
            style: secondary.style,
            outcome: Outcome::Secondary,
        });
    }

    ModalSpec {
        kind: ModalKind::Alert,
        title: Some(alert.title.clone()),
        message: Some(alert.message.clone()),
        actions,
    }
}

fn action_sheet_spec(sheet: &ActionSheetRequest) -> ModalSpec {
    let mut actions: Vec<ModalAction> = sheet
        .actions
        .iter()
        .map(|action| ModalAction {
            label: action.button.label.clone(),
            style: action.button.style,
            outcome: Outcome::Action(action.index),
        })
        .collect();
    if let Some(cancel) = &sheet.cancel {
        actions.push(ModalAction {
            label: cancel.label.clone(),
            style: cancel.style,
            outcome: Outcome::Cancel,
        });
    }

    ModalSpec {
        kind: ModalKind::ActionSheet,
        title: sheet.title.clone(),
        message: sheet.message.clone(),
        actions,
    }
}

/// Shows modals through a platform handed in at construction.
pub struct Presenter<P: DialogPlatform> {
    platform: Arc<P>,
    animated: bool,
    max_depth: usize,
}

impl<P: DialogPlatform> Presenter<P> {
    pub fn new(platform: Arc<P>, config: &AlertConfig) -> Self {
        Self {
            platform,
            animated: config.animated,
            max_depth: config.max_hierarchy_depth,
        }
    }

    pub fn platform(&self) -> &Arc<P> {
        &self.platform
    }

    /// Schedule presentation of `request` on the main thread and return
    /// immediately. `completion` is resolved when the user taps a button.
    pub fn present(&self, request: &Request, completion: Completion) {
        let spec = modal_spec(request);
        let platform = Arc::clone(&self.platform);
        let animated = self.animated;
        let max_depth = self.max_depth;

        self.platform.dispatch_main(Box::new(move || {
            let invocation = completion.invocation();
            match topmost_screen(platform.as_ref(), max_depth) {
                Some(host) => platform.present_modal(&host, spec, completion, animated),
                // Dropping the completion here is what tells a waiting
                // caller that nothing will be tapped.
                None => tracing::warn!(
                    %invocation,
                    platform = platform.platform_name(),
                    "no visible screen to present on; dialog not shown"
                ),
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptive_alert_bridge::stub::StubPlatform;
    use adaptive_alert_core::{ActionStyle, ButtonSpec, InvocationId, SheetAction};

    fn sheet(labels: &[&str], cancel: bool) -> Request {
        Request::ActionSheet(ActionSheetRequest {
            title: Some("Photo".into()),
            message: None,
            actions: labels
                .iter()
                .enumerate()
                .map(|(index, label)| SheetAction {
                    index,
                    button: ButtonSpec::new(*label, ActionStyle::Default),
                })
                .collect(),
            cancel: cancel.then(|| ButtonSpec::new("Cancel", ActionStyle::Cancel)),
        })
    }

    #[test]
    fn alert_buttons_primary_then_secondary() {
        let request = Request::Alert(AlertRequest {
            title: "Delete?".into(),
            message: "This cannot be undone".into(),
            primary: ButtonSpec::new("Delete", ActionStyle::Destructive),
            secondary: Some(ButtonSpec::new("Cancel", ActionStyle::Cancel)),
        });
        let spec = modal_spec(&request);
        assert_eq!(spec.kind, ModalKind::Alert);
        assert_eq!(spec.title.as_deref(), Some("Delete?"));
        assert_eq!(
            spec.actions,
            vec![
                ModalAction {
                    label: "Delete".into(),
                    style: ActionStyle::Destructive,
                    outcome: Outcome::Primary,
                },
                ModalAction {
                    label: "Cancel".into(),
                    style: ActionStyle::Cancel,
                    outcome: Outcome::Secondary,
                },
            ]
        );
    }

    #[test]
    fn sheet_cancel_goes_last() {
        let spec = modal_spec(&sheet(&["Camera", "Library"], true));
        let outcomes: Vec<_> = spec.actions.iter().map(|a| a.outcome).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Action(0), Outcome::Action(1), Outcome::Cancel]
        );
        assert_eq!(spec.kind, ModalKind::ActionSheet);
        assert_eq!(spec.message, None);
    }

    #[test]
    fn sheet_without_cancel() {
        let spec = modal_spec(&sheet(&["Camera"], false));
        assert_eq!(spec.actions.len(), 1);
    }

    #[test]
    fn presentation_waits_for_main_queue() {
        let platform = Arc::new(StubPlatform::new());
        let home = platform.add_screen("home");
        platform.set_root(home);
        let presenter = Presenter::new(Arc::clone(&platform), &AlertConfig::default());

        let (completion, _pending) = Completion::channel(InvocationId::new());
        presenter.present(&sheet(&["Camera"], true), completion);

        assert!(platform.presented().is_empty());
        assert_eq!(platform.run_main_queue(), 1);
        let shown = platform.presented();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].host, home);
        assert!(shown[0].animated);
    }

    #[test]
    fn missing_host_drops_completion() {
        let platform = Arc::new(StubPlatform::new());
        let presenter = Presenter::new(Arc::clone(&platform), &AlertConfig::default());

        let (completion, mut pending) = Completion::channel(InvocationId::new());
        presenter.present(&sheet(&["Camera"], true), completion);
        platform.run_main_queue();

        assert!(platform.presented().is_empty());
        assert!(pending.try_outcome().unwrap().is_err());
    }
}
