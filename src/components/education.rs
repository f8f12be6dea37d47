//! Education section.

use dioxus::prelude::*;

use crate::components::timeline::{Timeline, TimelineEntry, YearMonth};

struct Program {
    institution: &'static str,
    course: &'static str,
    start: YearMonth,
    end: Option<YearMonth>,
    details: &'static [&'static str],
}

const PROGRAMS: &[Program] = &[
    Program {
        institution: "KCA University",
        course: "Bachelor's Degree, Business Information Technology",
        start: YearMonth::new(2020, 1),
        end: Some(YearMonth::new(2023, 12)),
        details: &[
            "Currently finalizing my degree after pausing to focus on an intensive bootcamp.",
            "Studied business information systems, software development, and IT management.",
        ],
    },
    Program {
        institution: "MEST Africa",
        course: "Diploma, Computer Software Engineering & Entrepreneurship",
        start: YearMonth::new(2018, 8),
        end: Some(YearMonth::new(2019, 9)),
        details: &[
            "Completed an intensive one-year Software Development & Entrepreneurship Bootcamp, specializing in full-stack development with JavaScript, PHP, and Python.",
            "Built and deployed web applications using React, Vue, Node.js, PHP, and Python.",
            "Developed RESTful APIs and database-driven applications with PostgreSQL, MongoDB, and Firebase.",
            "Managed cloud infrastructure with AWS, Docker, and Kubernetes, implementing CI/CD pipelines with GitHub Actions and Jenkins.",
            "Gained hands-on experience with backend services, system architecture, and serverless computing.",
            "Learned product development, business strategy, and startup growth, bridging the gap between technology and entrepreneurship.",
            "Worked in cross-functional teams, applying Agile methodologies to deliver real-world projects.",
        ],
    },
];

/// Education timeline. Programs show dates only, no computed duration.
#[component]
pub fn Education() -> Element {
    let entries: Vec<TimelineEntry> = PROGRAMS
        .iter()
        .map(|program| {
            let end_label = match program.end {
                Some(end) => end.label(),
                None => "Present".to_string(),
            };
            TimelineEntry {
                period: format!("{} - {}", program.start.label(), end_label),
                heading: program.course.to_string(),
                organization: program.institution.to_string(),
                details: program.details.iter().map(|line| line.to_string()).collect(),
            }
        })
        .collect();

    rsx! {
        div { class: "education",
            h1 { class: "section-title", "Education" }
            Timeline { entries }
        }
    }
}
