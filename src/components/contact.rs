//! Contact section with a copy-to-clipboard email button.

use dioxus::prelude::*;

const EMAIL: &str = "emusebe9@gmail.com";
const X_PROFILE: &str = "https://x.com/_musebe";

#[component]
pub fn ContactMe() -> Element {
    let mut copied = use_signal(|| false);

    let copy_email = move |_| {
        // arboard for cross-platform clipboard access
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            if let Err(e) = clipboard.set_text(EMAIL) {
                tracing::warn!("Failed to copy email to clipboard: {e}");
            }
        }

        // Show feedback, reset after 2 seconds
        copied.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            copied.set(false);
        });
    };

    rsx! {
        div { class: "contact",
            h1 { class: "section-title", "Contact Me" }
            p { class: "contact-text",
                "Want to chat? Just shoot me a dm with a "
                a {
                    class: "contact-link",
                    href: "{X_PROFILE}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "direct question on twitter"
                }
                " or email me directly at "
                a { class: "contact-link", href: "mailto:{EMAIL}", "{EMAIL}" }
            }
            button {
                class: if copied() { "copy-button copied" } else { "copy-button" },
                onclick: copy_email,
                if copied() { "Copied ✓" } else { "Copy email address" }
            }
        }
    }
}
