//! The portfolio page: intro, work history, education, contact, with the
//! dock overlaid.

use dioxus::prelude::*;

use crate::components::{ContactMe, Education, Intro, NavDock, WorkHistory};

#[component]
pub fn Home() -> Element {
    rsx! {
        NavDock {}
        main { id: "top", class: "page",
            Intro {}
            WorkHistory {}
            Education {}
            ContactMe {}
        }
    }
}
