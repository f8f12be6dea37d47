//! Inline Lucide glyphs used by the dock.

use dioxus::prelude::*;

/// The icon set the dock draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Home,
    Blog,
    Mail,
    GitHub,
    LinkedIn,
    X,
    Sun,
    Moon,
}

/// Render a Lucide icon as an inline SVG sized by the surrounding link.
pub fn render_glyph(glyph: Glyph) -> Element {
    match glyph {
        Glyph::Home => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                polyline { points: "9 22 9 12 15 12 15 22" }
            }
        },
        Glyph::Blog => rsx! {
            // Lucide pen icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z" }
            }
        },
        Glyph::Mail => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
                path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
            }
        },
        Glyph::GitHub => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
                path { d: "M9 18c-4.51 2-5-2-7-2" }
            }
        },
        Glyph::LinkedIn => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
                rect { width: "4", height: "12", x: "2", y: "9" }
                circle { cx: "4", cy: "4", r: "2" }
            }
        },
        Glyph::X => rsx! {
            // Lucide twitter icon, reused for X
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" }
            }
        },
        Glyph::Sun => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "4" }
                path { d: "M12 2v2" }
                path { d: "M12 20v2" }
                path { d: "m4.93 4.93 1.41 1.41" }
                path { d: "m17.66 17.66 1.41 1.41" }
                path { d: "M2 12h2" }
                path { d: "M20 12h2" }
                path { d: "m6.34 17.66-1.41 1.41" }
                path { d: "m19.07 4.93-1.41 1.41" }
            }
        },
        Glyph::Moon => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
            }
        },
    }
}
