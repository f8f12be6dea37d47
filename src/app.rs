use dioxus::desktop::tao::event::{Event as WryEvent, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;

use crate::pages::Home;
use crate::theme::{Theme, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - The portfolio page (intro, work history, education, contact)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the theme and viewport contexts, and routing.
#[component]
pub fn App() -> Element {
    let theme: Signal<Theme> = use_signal(crate::initial_theme);
    use_context_provider(|| theme);

    // Track the logical window width so the dock can flip orientation at
    // the breakpoint.
    let window = use_window();
    let scale = window.scale_factor();
    let mut viewport_width: Signal<f64> =
        use_signal(|| window.inner_size().to_logical::<f64>(scale).width);
    use_context_provider(|| viewport_width);

    use_wry_event_handler(move |event, _| {
        if let WryEvent::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            viewport_width.set(size.to_logical::<f64>(scale).width);
        }
    });

    let theme_class = theme().class_name();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "{theme_class}",
            Router::<Route> {}
        }
    }
}
