// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host-screen lookup: the topmost screen the user can currently see.

use adaptive_alert_bridge::ScreenHierarchy;

/// Walk from the root screen down through visible children.
///
/// Stops at the first screen that reports no visible child. After
/// `max_depth` descents the walk gives up and returns the last screen it
/// reached. `None` only when there is no root screen at all.
pub fn topmost_screen<H>(hierarchy: &H, max_depth: usize) -> Option<H::Screen>
where
    H: ScreenHierarchy + ?Sized,
{
    let mut current = hierarchy.root_screen()?;
    for _ in 0..max_depth {
        match hierarchy.visible_child(&current) {
            Some(child) => current = child,
            None => return Some(current),
        }
    }
    tracing::warn!(max_depth, "screen hierarchy exceeds depth limit; using deepest screen reached");
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptive_alert_bridge::stub::StubPlatform;

    #[test]
    fn no_root_means_no_host() {
        let platform = StubPlatform::new();
        platform.add_screen("orphan");
        assert_eq!(topmost_screen(&platform, 32), None);
    }

    #[test]
    fn root_without_children_hosts() {
        let platform = StubPlatform::new();
        let home = platform.add_screen("home");
        platform.set_root(home);
        assert_eq!(topmost_screen(&platform, 32), Some(home));
    }

    #[test]
    fn descends_tabs_then_stack_then_modal() {
        let platform = StubPlatform::new();
        let feed = platform.add_screen("feed");
        let list = platform.add_screen("list");
        let detail = platform.add_screen("detail");
        let stack = platform.add_stack("settings-nav", &[list, detail]);
        let tabs = platform.add_tabs("tabs", &[feed, stack], Some(1));
        platform.set_root(tabs);
        assert_eq!(topmost_screen(&platform, 32), Some(detail));

        let editor = platform.add_screen("editor");
        platform.present_over(detail, editor);
        assert_eq!(topmost_screen(&platform, 32), Some(editor));

        platform.select_tab(tabs, Some(0));
        assert_eq!(topmost_screen(&platform, 32), Some(feed));
    }

    #[test]
    fn modal_over_stack_wins_over_top_child() {
        let platform = StubPlatform::new();
        let list = platform.add_screen("list");
        let stack = platform.add_stack("nav", &[list]);
        let login = platform.add_screen("login");
        platform.present_over(stack, login);
        platform.set_root(stack);
        assert_eq!(topmost_screen(&platform, 32), Some(login));
    }

    #[test]
    fn cyclic_hierarchy_stops_at_depth_limit() {
        let platform = StubPlatform::new();
        let a = platform.add_screen("a");
        let b = platform.add_screen("b");
        platform.present_over(a, b);
        platform.present_over(b, a);
        platform.set_root(a);
        // Four descents: a -> b -> a -> b -> a.
        assert_eq!(topmost_screen(&platform, 4), Some(a));
    }
}
