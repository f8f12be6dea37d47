//! Introduction section: biography and monogram avatar.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Biography source, kept as markdown so the emphasis stays content
/// rather than markup.
const BIO: &str = "\
I am a **Full-Stack Engineer** with **6+ years** of experience in software \
development, technical writing, and automation engineering. I specialize in \
designing and building scalable applications, optimizing cloud \
infrastructure, and automating workflows.

My expertise spans across **frontend, backend, DevOps, and system \
architecture**. I have led development teams, built AI-powered content \
pipelines, automated social media workflows, and optimized CI/CD pipelines \
to reduce deployment time by 70%.

Passionate about leveraging **AI, automation, and cloud technologies** to \
drive efficiency, enhance developer experiences, and scale applications \
globally.";

fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::empty());
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered
}

/// Introduction block with the rendered biography.
#[component]
pub fn Intro() -> Element {
    let bio = use_hook(|| render_markdown(BIO));

    rsx! {
        div { class: "intro",
            div { class: "intro-text",
                h1 { class: "intro-heading", "Hi! I'm Eugene Musebe." }
                div { class: "intro-bio", dangerous_inner_html: "{bio}" }
            }
            div { class: "avatar", "aria-label": "Eugene Musebe", "EM" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biography_renders_paragraphs_and_emphasis() {
        let rendered = render_markdown(BIO);
        assert_eq!(rendered.matches("<p>").count(), 3);
        assert!(rendered.contains("<strong>Full-Stack Engineer</strong>"));
    }

    #[test]
    fn markdown_emphasis_maps_to_strong_tags() {
        assert_eq!(
            render_markdown("plain **bold** end").trim(),
            "<p>plain <strong>bold</strong> end</p>"
        );
    }
}
