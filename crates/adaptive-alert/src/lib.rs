// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptive Alert — native alert dialogs and action sheets for a
// method-channel host.
//
// Flow: channel → `AlertPlugin` (validate) → `Presenter` (build, hop to the
// main thread, find the host screen, present) → button tap → `Completion`
// → `PendingOutcome` → reply.

pub mod host;
pub mod presenter;
pub mod router;

pub use adaptive_alert_bridge::{
    Completion, DialogPlatform, NativePlatform, PendingOutcome, native_platform,
};
pub use adaptive_alert_core::{AlertConfig, AlertError, MethodCall, MethodReply, Outcome};
pub use presenter::Presenter;
pub use router::AlertPlugin;
