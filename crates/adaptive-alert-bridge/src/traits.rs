// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native modal presentation.
//
// The plugin never touches a toolkit type directly. It builds a `ModalSpec`,
// hops to the main thread through `MainScheduler`, finds a host through
// `ScreenHierarchy` and hands the modal over for presentation.

use adaptive_alert_core::{ActionStyle, Outcome};

use crate::completion::Completion;

/// Work scheduled onto the UI thread.
pub type MainTask = Box<dyn FnOnce() + Send + 'static>;

/// Unified bridge that groups all native capabilities.
pub trait DialogPlatform: MainScheduler + ScreenHierarchy {
    /// Human-readable platform name (e.g. "iOS").
    fn platform_name(&self) -> &str;
}

/// Run work on the platform's main (UI) scheduling context.
pub trait MainScheduler: Send + Sync + 'static {
    /// Enqueue `task` on the main thread and return without waiting for it.
    fn dispatch_main(&self, task: MainTask);
}

/// The application's visible screen hierarchy.
///
/// Only called from inside a task already running on the main thread.
pub trait ScreenHierarchy: Send + Sync + 'static {
    /// Handle to one screen (view controller, activity, ...).
    type Screen;

    /// The root screen of the key window, if there is one.
    fn root_screen(&self) -> Option<Self::Screen>;

    /// The child of `screen` the user is currently looking at.
    ///
    /// Tab containers report their selected child, stack containers their
    /// top-of-stack child, and any screen with a modal over it reports the
    /// modal. `None` means `screen` is what the user sees.
    fn visible_child(&self, screen: &Self::Screen) -> Option<Self::Screen>;

    /// Present `modal` over `host`. Each button resolves `completion` with
    /// its outcome when tapped.
    fn present_modal(
        &self,
        host: &Self::Screen,
        modal: ModalSpec,
        completion: Completion,
        animated: bool,
    );
}

/// Presentation style of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Centred alert dialog.
    Alert,
    /// Sheet of choices anchored to the bottom edge.
    ActionSheet,
}

/// One button of a modal and the outcome it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalAction {
    pub label: String,
    pub style: ActionStyle,
    pub outcome: Outcome,
}

/// A platform-neutral description of a native modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSpec {
    pub kind: ModalKind,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Buttons in the order they are added to the native modal.
    pub actions: Vec<ModalAction>,
}
