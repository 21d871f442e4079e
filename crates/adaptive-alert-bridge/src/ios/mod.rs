// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS platform bridge via objc2.
//
// Requires compilation with the iOS SDK (Xcode). Modals are built with
// `UIAlertController` / `UIAlertAction`; button handlers are `block2` blocks
// that resolve the shared completion handle.
//
// This module is cfg-gated to `target_os = "ios"` and will not compile on other
// platforms. Every UIKit call below runs on the main queue: the plugin
// reaches this code only through `dispatch_main`, and each entry point
// re-checks with `MainThreadMarker`.

#![cfg(target_os = "ios")]

use std::ptr::NonNull;

use block2::RcBlock;
use dispatch2::DispatchQueue;
use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::{MainThreadMarker, msg_send};
use objc2_foundation::NSString;
use objc2_ui_kit::{
    UIAlertAction, UIAlertActionStyle, UIAlertController, UIAlertControllerStyle, UIApplication,
    UINavigationController, UITabBarController, UIViewController,
};

use adaptive_alert_core::ActionStyle;

use crate::completion::Completion;
use crate::traits::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Return the main-thread marker, or log and bail when called off-main.
fn main_thread(operation: &str) -> Option<MainThreadMarker> {
    let mtm = MainThreadMarker::new();
    if mtm.is_none() {
        tracing::warn!(operation, "iOS: UIKit call attempted off the main thread");
    }
    mtm
}

fn alert_action_style(style: ActionStyle) -> UIAlertActionStyle {
    match style {
        ActionStyle::Default => UIAlertActionStyle::Default,
        ActionStyle::Destructive => UIAlertActionStyle::Destructive,
        ActionStyle::Cancel => UIAlertActionStyle::Cancel,
    }
}

fn alert_controller_style(kind: ModalKind) -> UIAlertControllerStyle {
    match kind {
        ModalKind::Alert => UIAlertControllerStyle::Alert,
        ModalKind::ActionSheet => UIAlertControllerStyle::ActionSheet,
    }
}

/// Anchor an action sheet's popover to the host's view.
///
/// On iPad an action sheet is shown as a popover and UIKit raises an
/// exception if it has no source view. On iPhone there is no popover
/// controller and this does nothing.
fn anchor_popover(alert: &UIAlertController, host: &UIViewController) {
    // SAFETY: popoverPresentationController, view and setSourceView: are
    // documented UIKit selectors; the caller holds a MainThreadMarker.
    unsafe {
        let popover: Option<Retained<AnyObject>> = msg_send![alert, popoverPresentationController];
        let view: Option<Retained<AnyObject>> = msg_send![host, view];
        if let (Some(popover), Some(view)) = (popover, view) {
            let _: () = msg_send![&popover, setSourceView: &*view];
        }
    }
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Concrete iOS platform bridge.
///
/// Zero-sized; all state lives in UIKit. The screen hierarchy is read from
/// the key window each time a host is needed.
#[derive(Debug, Default)]
pub struct IosPlatform;

impl IosPlatform {
    /// Create a new iOS bridge instance.
    pub fn new() -> Self {
        Self
    }
}

impl DialogPlatform for IosPlatform {
    fn platform_name(&self) -> &str {
        "iOS"
    }
}

impl MainScheduler for IosPlatform {
    fn dispatch_main(&self, task: MainTask) {
        DispatchQueue::main().exec_async(task);
    }
}

impl ScreenHierarchy for IosPlatform {
    type Screen = Retained<UIViewController>;

    /// The key window's root view controller.
    ///
    /// Uses the deprecated `keyWindow` property for broad iOS-version compat.
    fn root_screen(&self) -> Option<Retained<UIViewController>> {
        let mtm = main_thread("root_screen")?;
        let app = UIApplication::sharedApplication(mtm);

        // SAFETY: msg_send! to well-known UIApplication / UIWindow selectors
        // (keyWindow, rootViewController) on the main thread.
        unsafe {
            let window: Option<Retained<AnyObject>> = msg_send![&app, keyWindow];
            window.and_then(|w| msg_send![&w, rootViewController])
        }
    }

    fn visible_child(
        &self,
        screen: &Retained<UIViewController>,
    ) -> Option<Retained<UIViewController>> {
        // SAFETY: read-only UIKit property getters, main thread (see module
        // header).
        unsafe {
            if let Some(nav) = screen.downcast_ref::<UINavigationController>() {
                return nav.visibleViewController();
            }
            if let Some(tabs) = screen.downcast_ref::<UITabBarController>() {
                if let Some(selected) = tabs.selectedViewController() {
                    return Some(selected);
                }
            }
            screen.presentedViewController()
        }
    }

    fn present_modal(
        &self,
        host: &Retained<UIViewController>,
        modal: ModalSpec,
        completion: Completion,
        animated: bool,
    ) {
        let Some(mtm) = main_thread("present_modal") else {
            return;
        };

        tracing::info!(
            invocation = %completion.invocation(),
            kind = ?modal.kind,
            buttons = modal.actions.len(),
            "iOS: presenting UIAlertController"
        );

        let title = modal.title.as_deref().map(NSString::from_str);
        let message = modal.message.as_deref().map(NSString::from_str);

        let alert = UIAlertController::alertControllerWithTitle_message_preferredStyle(
            title.as_deref(),
            message.as_deref(),
            alert_controller_style(modal.kind),
            mtm,
        );

        for action in &modal.actions {
            let completion = completion.clone();
            let outcome = action.outcome;
            // UIKit dismisses the alert before running the handler.
            let handler = RcBlock::new(move |_action: NonNull<UIAlertAction>| {
                completion.resolve(outcome);
            });
            let label = NSString::from_str(&action.label);
            let button = UIAlertAction::actionWithTitle_style_handler(
                Some(&*label),
                alert_action_style(action.style),
                Some(&*handler),
                mtm,
            );
            alert.addAction(&button);
        }

        if modal.kind == ModalKind::ActionSheet {
            anchor_popover(&alert, host);
        }

        // SAFETY: presentViewController is a UIViewController method.
        // Main-thread requirement satisfied by the marker above.
        unsafe {
            host.presentViewController_animated_completion(&alert, animated, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that the bridge reports the correct platform name.
    #[test]
    fn platform_name() {
        let bridge = IosPlatform::new();
        assert_eq!(bridge.platform_name(), "iOS");
    }

    #[test]
    fn style_mapping() {
        assert_eq!(alert_action_style(ActionStyle::Cancel), UIAlertActionStyle::Cancel);
        assert_eq!(
            alert_action_style(ActionStyle::Destructive),
            UIAlertActionStyle::Destructive
        );
        assert_eq!(
            alert_controller_style(ModalKind::ActionSheet),
            UIAlertControllerStyle::ActionSheet
        );
    }

    // Presentation tests require a running iOS app with a key window. They
    // are exercised in the Xcode test target rather than via `cargo test`.
}
