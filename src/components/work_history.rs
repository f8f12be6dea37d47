//! Work-experience section.
//!
//! Roles are a fixed table; period labels and durations are computed from
//! the dates rather than transcribed, so they never drift out of sync.

use dioxus::prelude::*;

use crate::components::timeline::{
    format_duration, months_between, Timeline, TimelineEntry, YearMonth,
};

struct Role {
    company: &'static str,
    title: &'static str,
    start: YearMonth,
    /// None means the role is ongoing.
    end: Option<YearMonth>,
    summary: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        company: "Cloudinary",
        title: "Contractor",
        start: YearMonth::new(2021, 11),
        end: None,
        summary: &[
            "Worked across DevRel and Marketing as a technical author and SDK Engineer, building developer-focused solutions and Next.js-based workflows for marketing automation.",
            "Led developer relations initiatives by creating sample applications and code demos showcasing Cloudinary's advanced media transformations in Node.js and Next.js.",
            "Architected AI-driven content pipelines for social media, automating post generation, image transformations, and scheduling on LinkedIn, X, and YouTube.",
            "Developed custom Puppeteer-based scraping tools to extract and process blog content for automated social media posting.",
            "Built dashboards (React + Next.js) to analyze developer engagement trends, implementing data-driven improvements to content strategy and outreach.",
            "Implemented advanced marketing automation workflows with GitHub Actions, Next.js serverless functions, and Cloudinary's APIs, reducing manual effort by 70% in content scheduling and publishing.",
            "Authored and optimized technical articles, guides, and in-depth API documentation, boosting developer engagement and organic traffic.",
        ],
    },
    Role {
        company: "QuickBus (Acquired by BuuPass)",
        title: "Contractor",
        start: YearMonth::new(2023, 12),
        end: Some(YearMonth::new(2024, 12)),
        summary: &[
            "Designed and developed a WhatsApp bot for QuickBus, automating customer interactions and handling over 10,000 messages daily.",
            "Built a scalable backend with NestJS and TypeScript, reducing API response times by 40%.",
            "Utilized Redis for caching, reducing database queries by 60% and improving performance.",
            "Deployed on AWS EC2, ensuring 99.9% uptime and high availability.",
            "Integrated MessageBird API, improving message delivery success rate to 98%.",
            "Automated workflows with GitHub Actions, reducing deployment time from 30 minutes to under 5 minutes.",
            "Implemented WebSockets and Redis Pub/Sub for real-time messaging, reducing latency by 50%.",
            "Used RxJS for reactive programming and Jest for unit and integration testing, achieving 90% test coverage.",
        ],
    },
    Role {
        company: "Saada (Acquired)",
        title: "Co-founder & Founding Technical Lead",
        start: YearMonth::new(2019, 9),
        end: Some(YearMonth::new(2021, 12)),
        summary: &[
            "Led full SDLC from architecture design to deployment, ensuring scalability and performance.",
            "Designed microservices and serverless architectures, handling millions of requests per day.",
            "Built fully automated CI/CD pipelines with Docker, Kubernetes, and Terraform, reducing deployment time by 70%.",
            "Implemented OAuth, JWT, and GDPR best practices, enhancing data protection and reducing vulnerabilities by 50%.",
            "Optimized cloud infrastructure, reducing costs by 30% while maintaining 99.99% uptime.",
            "Integrated real-time WebSockets and event-driven systems, cutting API response times by 40%.",
            "Deployed AWS CloudWatch, Prometheus, and ELK Stack, ensuring high availability and proactive issue detection.",
            "Built and managed cross-functional engineering teams, fostering a culture of innovation and technical excellence.",
            "Researched and adopted emerging AI, cloud computing, and blockchain technologies to enhance system capabilities.",
        ],
    },
    Role {
        company: "hackitafrica",
        title: "Developer Advocate",
        start: YearMonth::new(2018, 1),
        end: Some(YearMonth::new(2020, 12)),
        summary: &[
            "Organized events, meetups, and workshops to foster developer networking and collaboration.",
            "Authored documentation, blog posts, and tutorials to enhance developer understanding.",
            "Led campaigns, spoke at conferences, and collaborated with influencers to promote hackitafrica.",
            "Provided hands-on assistance, addressed queries, and facilitated a feedback loop for product improvement.",
            "Tracked and reported key performance indicators for developer engagement and advocacy impact.",
        ],
    },
];

/// Work-experience timeline with a computed total-experience lede.
#[component]
pub fn WorkHistory() -> Element {
    let now = YearMonth::current();

    let entries: Vec<TimelineEntry> = ROLES
        .iter()
        .map(|role| {
            let end_label = match role.end {
                Some(end) => end.label(),
                None => "Present".to_string(),
            };
            let duration = format_duration(months_between(role.start, role.end.unwrap_or(now)));
            TimelineEntry {
                period: format!("{} - {} ({})", role.start.label(), end_label, duration),
                heading: role.title.to_string(),
                organization: role.company.to_string(),
                details: role.summary.iter().map(|line| line.to_string()).collect(),
            }
        })
        .collect();

    let total_years = ROLES
        .iter()
        .map(|role| months_between(role.start, now))
        .max()
        .unwrap_or(12)
        / 12;

    rsx! {
        div { class: "work-history",
            h1 { class: "section-title", "Work Experience" }
            p { class: "timeline-lede",
                strong { "Total Experience:" }
                " {total_years}+ years"
            }
            Timeline { entries }
        }
    }
}
