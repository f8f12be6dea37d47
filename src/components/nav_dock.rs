//! Portfolio dock: navigation links, social links, and the theme toggle.
//!
//! Sits fixed at the left edge on wide windows (vertical tracking) and at
//! the bottom center on narrow ones (horizontal tracking).

use dioxus::prelude::*;

use folio_motion::Axis;

use crate::components::dock::{Dock, DockItem};
use crate::components::glyphs::{render_glyph, Glyph};
use crate::context::{use_compact_layout, use_theme};
use crate::theme::Theme;

/// A dock link: where it goes and how it is drawn.
struct DockLink {
    label: &'static str,
    url: &'static str,
    glyph: Glyph,
    new_tab: bool,
}

/// Main navigation. Internal targets stay in the same view.
const NAVBAR: &[DockLink] = &[
    DockLink {
        label: "Home",
        url: "#top",
        glyph: Glyph::Home,
        new_tab: false,
    },
    DockLink {
        label: "Blog",
        url: "https://dev.to/musebe",
        glyph: Glyph::Blog,
        new_tab: true,
    },
];

/// Social and contact links, all opening in a new tab.
const SOCIAL: &[DockLink] = &[
    DockLink {
        label: "GitHub",
        url: "https://github.com/musebe",
        glyph: Glyph::GitHub,
        new_tab: true,
    },
    DockLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/emusebe/",
        glyph: Glyph::LinkedIn,
        new_tab: true,
    },
    DockLink {
        label: "X",
        url: "https://x.com/_musebe",
        glyph: Glyph::X,
        new_tab: true,
    },
    DockLink {
        label: "Send Email",
        url: "mailto:emusebe9@gmail.com",
        glyph: Glyph::Mail,
        new_tab: true,
    },
];

fn link_item(link: &DockLink) -> DockItem {
    DockItem::Icon {
        label: link.label.to_string(),
        body: rsx! {
            a {
                class: "dock-link",
                href: "{link.url}",
                target: if link.new_tab { "_blank" },
                rel: if link.new_tab { "noopener noreferrer" },
                {render_glyph(link.glyph)}
            }
        },
    }
}

fn separator(class: &'static str) -> DockItem {
    DockItem::Static(rsx! {
        div { class: "{class}" }
    })
}

/// The app-level dock instance.
#[component]
pub fn NavDock() -> Element {
    let mut theme = use_theme();
    let compact = use_compact_layout();

    let orientation = if compact() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    let shell_class = if compact() {
        "dock-shell-bottom"
    } else {
        "dock-shell-side"
    };
    let separator_class = match orientation {
        Axis::Horizontal => "dock-separator-h",
        Axis::Vertical => "dock-separator-v",
    };

    // Moon invites dark mode from light, sun invites light from dark.
    let toggle_glyph = match theme() {
        Theme::Light => Glyph::Moon,
        Theme::Dark => Glyph::Sun,
    };

    let mut items: Vec<DockItem> = Vec::new();
    items.extend(NAVBAR.iter().map(link_item));
    items.push(separator(separator_class));
    items.extend(SOCIAL.iter().map(link_item));
    items.push(separator(separator_class));
    items.push(DockItem::Icon {
        label: "Theme".to_string(),
        body: rsx! {
            button {
                class: "dock-link",
                "aria-label": "Toggle theme",
                onclick: move |_| {
                    let next = theme().toggled();
                    tracing::debug!("Switching to {:?} theme", next);
                    theme.set(next);
                },
                {render_glyph(toggle_glyph)}
            }
        },
    });

    rsx! {
        div { class: "{shell_class}",
            Dock { orientation, items }
        }
    }
}
