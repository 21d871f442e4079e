// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptive Alert — Native platform bridge abstractions.
//
// Defines the traits the plugin talks to (main-thread scheduling, the
// visible screen hierarchy, modal presentation) and the per-OS
// implementations behind them.

pub mod completion;
pub mod traits;

#[cfg(target_os = "ios")]
pub mod ios;

pub mod stub;

pub use completion::{Completion, PendingOutcome};
pub use traits::{
    DialogPlatform, MainScheduler, MainTask, ModalAction, ModalKind, ModalSpec, ScreenHierarchy,
};

/// The platform implementation for the target operating system.
#[cfg(target_os = "ios")]
pub type NativePlatform = ios::IosPlatform;

/// The platform implementation for the target operating system.
#[cfg(not(target_os = "ios"))]
pub type NativePlatform = stub::StubPlatform;

/// Creates the bridge implementation for the target operating system.
///
/// iOS: UIKit through `objc2`. Everywhere else: the headless stub, which
/// has no screens until the host builds some.
pub fn native_platform() -> NativePlatform {
    #[cfg(target_os = "ios")]
    {
        ios::IosPlatform::new()
    }
    #[cfg(not(target_os = "ios"))]
    {
        stub::StubPlatform::new()
    }
}
