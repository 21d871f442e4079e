// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Headless bridge for desktop/CI builds where no native toolkit is available.
//
// Models just enough of a mobile UI to drive the plugin end to end: a tree
// of plain, tab and stack screens with modal links, a main queue that only
// runs when drained, and a list of on-screen modals whose buttons can be
// tapped from code.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use adaptive_alert_core::Outcome;

use crate::completion::Completion;
use crate::traits::*;

/// Handle to a screen in the stub hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(usize);

#[derive(Debug)]
enum ScreenKind {
    Plain,
    Tabs {
        children: Vec<ScreenId>,
        selected: Option<usize>,
    },
    /// Last child is the top of the stack.
    Stack { children: Vec<ScreenId> },
}

#[derive(Debug)]
struct StubScreen {
    name: String,
    kind: ScreenKind,
    presented: Option<ScreenId>,
}

/// A modal currently on screen.
#[derive(Debug, Clone)]
pub struct PresentedModal {
    pub host: ScreenId,
    pub spec: ModalSpec,
    pub animated: bool,
}

impl PresentedModal {
    /// Labels of the buttons in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.spec.actions.iter().map(|a| a.label.as_str()).collect()
    }
}

struct OnScreen {
    modal: PresentedModal,
    completion: Completion,
}

#[derive(Default)]
struct StubState {
    screens: Vec<StubScreen>,
    root: Option<ScreenId>,
    main_queue: VecDeque<MainTask>,
    modals: Vec<OnScreen>,
}

/// In-memory platform returned on non-mobile targets.
#[derive(Default)]
pub struct StubPlatform {
    state: Mutex<StubState>,
}

impl StubPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn add(&self, name: &str, kind: ScreenKind) -> ScreenId {
        let mut state = self.state();
        let id = ScreenId(state.screens.len());
        state.screens.push(StubScreen {
            name: name.into(),
            kind,
            presented: None,
        });
        id
    }

    // -- Hierarchy construction --

    /// Add a leaf screen.
    pub fn add_screen(&self, name: &str) -> ScreenId {
        self.add(name, ScreenKind::Plain)
    }

    /// Add a tab container with `selected` as the active tab.
    pub fn add_tabs(&self, name: &str, children: &[ScreenId], selected: Option<usize>) -> ScreenId {
        self.add(
            name,
            ScreenKind::Tabs {
                children: children.to_vec(),
                selected,
            },
        )
    }

    /// Add a navigation stack; the last child is on top.
    pub fn add_stack(&self, name: &str, children: &[ScreenId]) -> ScreenId {
        self.add(
            name,
            ScreenKind::Stack {
                children: children.to_vec(),
            },
        )
    }

    /// Make `screen` the key window's root.
    pub fn set_root(&self, screen: ScreenId) {
        self.state().root = Some(screen);
    }

    /// Present `screen` modally over `host`. Unknown hosts are ignored.
    pub fn present_over(&self, host: ScreenId, screen: ScreenId) {
        if let Some(node) = self.state().screens.get_mut(host.0) {
            node.presented = Some(screen);
        }
    }

    /// Push `screen` onto a stack container. Ignored for other kinds and
    /// unknown ids.
    pub fn push(&self, stack: ScreenId, screen: ScreenId) {
        let mut state = self.state();
        if let Some(StubScreen {
            kind: ScreenKind::Stack { children },
            ..
        }) = state.screens.get_mut(stack.0)
        {
            children.push(screen);
        }
    }

    /// Switch the active tab of a tab container. Ignored for other kinds and
    /// unknown ids.
    pub fn select_tab(&self, tabs: ScreenId, index: Option<usize>) {
        let mut state = self.state();
        if let Some(StubScreen {
            kind: ScreenKind::Tabs { selected, .. },
            ..
        }) = state.screens.get_mut(tabs.0)
        {
            *selected = index;
        }
    }

    /// Name given to `screen`, or `None` if this platform never created it.
    pub fn screen_name(&self, screen: ScreenId) -> Option<String> {
        self.state().screens.get(screen.0).map(|s| s.name.clone())
    }

    // -- Main queue --

    /// Number of tasks waiting for the main thread.
    pub fn pending_main_tasks(&self) -> usize {
        self.state().main_queue.len()
    }

    /// Run queued main-thread tasks until the queue is empty. Returns how
    /// many ran.
    pub fn run_main_queue(&self) -> usize {
        let mut ran = 0;
        loop {
            // Tasks call back into the hierarchy, so the lock must be
            // released before each one runs.
            let next = self.state().main_queue.pop_front();
            let Some(task) = next else {
                return ran;
            };
            task();
            ran += 1;
        }
    }

    // -- Modals --

    /// Snapshot of the modals currently on screen, oldest first.
    pub fn presented(&self) -> Vec<PresentedModal> {
        self.state().modals.iter().map(|m| m.modal.clone()).collect()
    }

    /// Tap button `button` of on-screen modal `modal`, dismissing it.
    ///
    /// Returns the outcome that was reported, or `None` if there is no such
    /// modal or button.
    pub fn tap(&self, modal: usize, button: usize) -> Option<Outcome> {
        let (completion, outcome) = {
            let mut state = self.state();
            let outcome = state.modals.get(modal)?.modal.spec.actions.get(button)?.outcome;
            (state.modals.remove(modal).completion, outcome)
        };
        completion.resolve(outcome);
        Some(outcome)
    }

    /// Tap the first button labelled `label` on modal `modal`.
    pub fn tap_label(&self, modal: usize, label: &str) -> Option<Outcome> {
        let button = self
            .state()
            .modals
            .get(modal)?
            .modal
            .spec
            .actions
            .iter()
            .position(|a| a.label == label)?;
        self.tap(modal, button)
    }

    /// Remove modal `modal` without tapping anything.
    pub fn dismiss(&self, modal: usize) -> bool {
        let mut state = self.state();
        if modal < state.modals.len() {
            state.modals.remove(modal);
            true
        } else {
            false
        }
    }
}

impl DialogPlatform for StubPlatform {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl MainScheduler for StubPlatform {
    fn dispatch_main(&self, task: MainTask) {
        self.state().main_queue.push_back(task);
    }
}

impl ScreenHierarchy for StubPlatform {
    type Screen = ScreenId;

    fn root_screen(&self) -> Option<ScreenId> {
        self.state().root
    }

    fn visible_child(&self, screen: &ScreenId) -> Option<ScreenId> {
        let state = self.state();
        let node = state.screens.get(screen.0)?;
        match &node.kind {
            ScreenKind::Tabs { children, selected } => selected
                .and_then(|i| children.get(i).copied())
                .or(node.presented),
            // A modal over the stack covers its top child.
            ScreenKind::Stack { children } => node.presented.or_else(|| children.last().copied()),
            ScreenKind::Plain => node.presented,
        }
    }

    fn present_modal(
        &self,
        host: &ScreenId,
        modal: ModalSpec,
        completion: Completion,
        animated: bool,
    ) {
        tracing::info!(
            host = self.screen_name(*host).as_deref().unwrap_or("<unknown>"),
            buttons = modal.actions.len(),
            "stub: presenting modal"
        );
        self.state().modals.push(OnScreen {
            modal: PresentedModal {
                host: *host,
                spec: modal,
                animated,
            },
            completion,
        });
    }
}
