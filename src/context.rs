//! Shared UI context for the portfolio.
//!
//! The app root provides the theme and viewport-width signals; components
//! read them through these hooks.

use dioxus::prelude::*;

use crate::theme::Theme;

/// Window widths below this get the compact layout: the dock moves from
/// the left edge to the bottom and flips to horizontal tracking.
pub const COMPACT_BREAKPOINT: f64 = 1050.0;

/// Hook to access the active theme from context.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the logical window width from context.
pub fn use_viewport_width() -> Signal<f64> {
    use_context::<Signal<f64>>()
}

/// Reactive "is the window narrower than the dock breakpoint" flag.
pub fn use_compact_layout() -> Memo<bool> {
    let width = use_viewport_width();
    use_memo(move || width() < COMPACT_BREAKPOINT)
}
